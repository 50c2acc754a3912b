//! NIS2 Directive cybersecurity risk-management measures

use super::Control;
use crate::item::Severity;

/// Get the NIS2 control catalog
pub fn controls() -> Vec<Control> {
    vec![
        Control {
            id: "Art.20".into(),
            name: "Governance and Accountability".into(),
            description: "Management bodies shall approve and oversee risk measures".into(),
            category: "Governance".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "Art.21(2)(a)".into(),
            name: "Risk Analysis and System Security Policies".into(),
            description: "Policies on risk analysis and information system security".into(),
            category: "Risk Management".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "Art.21(2)(b)".into(),
            name: "Incident Handling".into(),
            description: "Incident handling procedures covering detection through recovery".into(),
            category: "Risk Management".into(),
            default_severity: Severity::Critical,
        },
        Control {
            id: "Art.21(2)(c)".into(),
            name: "Business Continuity".into(),
            description: "Backup management, disaster recovery and crisis management".into(),
            category: "Resilience".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "Art.21(2)(d)".into(),
            name: "Supply Chain Security".into(),
            description: "Security aspects of supplier and service provider relationships".into(),
            category: "Risk Management".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "Art.21(2)(g)".into(),
            name: "Cyber Hygiene and Training".into(),
            description: "Basic cyber hygiene practices and cybersecurity training".into(),
            category: "People".into(),
            default_severity: Severity::Medium,
        },
        Control {
            id: "Art.21(2)(h)".into(),
            name: "Cryptography and Encryption".into(),
            description: "Policies on the use of cryptography and, where appropriate, encryption"
                .into(),
            category: "Technical".into(),
            default_severity: Severity::Critical,
        },
        Control {
            id: "Art.21(2)(j)".into(),
            name: "Multi-Factor Authentication".into(),
            description: "Use of MFA and secured communications where appropriate".into(),
            category: "Technical".into(),
            default_severity: Severity::Critical,
        },
        Control {
            id: "Art.23".into(),
            name: "Incident Reporting".into(),
            description: "Significant incidents notified to the CSIRT within 24 hours".into(),
            category: "Reporting".into(),
            default_severity: Severity::Critical,
        },
    ]
}
