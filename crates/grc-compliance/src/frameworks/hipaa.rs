//! HIPAA Security Rule safeguards

use super::Control;
use crate::item::Severity;

/// Get the HIPAA control catalog
pub fn controls() -> Vec<Control> {
    vec![
        // Administrative safeguards
        Control {
            id: "164.308(a)(1)".into(),
            name: "Security Management Process".into(),
            description: "Implement policies to prevent, detect and correct security violations"
                .into(),
            category: "Administrative".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "164.308(a)(5)".into(),
            name: "Security Awareness and Training".into(),
            description: "Security awareness and training program for all workforce members".into(),
            category: "Administrative".into(),
            default_severity: Severity::Medium,
        },
        Control {
            id: "164.308(a)(6)".into(),
            name: "Security Incident Procedures".into(),
            description: "Policies to address security incidents, response and reporting".into(),
            category: "Administrative".into(),
            default_severity: Severity::High,
        },
        // Physical safeguards
        Control {
            id: "164.310(a)(1)".into(),
            name: "Facility Access Controls".into(),
            description: "Limit physical access to electronic information systems".into(),
            category: "Physical".into(),
            default_severity: Severity::Medium,
        },
        Control {
            id: "164.310(d)(1)".into(),
            name: "Device and Media Controls".into(),
            description: "Govern receipt and removal of hardware and media containing ePHI".into(),
            category: "Physical".into(),
            default_severity: Severity::Medium,
        },
        // Technical safeguards
        Control {
            id: "164.312(a)(1)".into(),
            name: "Access Control".into(),
            description: "Allow access to ePHI only to authorized persons and programs".into(),
            category: "Technical".into(),
            default_severity: Severity::Critical,
        },
        Control {
            id: "164.312(b)".into(),
            name: "Audit Controls".into(),
            description: "Record and examine activity in systems containing ePHI".into(),
            category: "Technical".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "164.312(c)(1)".into(),
            name: "Integrity".into(),
            description: "Protect ePHI from improper alteration or destruction".into(),
            category: "Technical".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "164.312(e)(1)".into(),
            name: "Transmission Security".into(),
            description: "Guard against unauthorized access to ePHI in transit".into(),
            category: "Technical".into(),
            default_severity: Severity::Critical,
        },
    ]
}
