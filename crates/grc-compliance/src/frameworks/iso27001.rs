//! ISO 27001:2022 Annex A controls

use super::Control;
use crate::item::Severity;

/// Get the ISO 27001 control catalog
pub fn controls() -> Vec<Control> {
    vec![
        // A.5 - Organizational Controls
        Control {
            id: "A.5.1".into(),
            name: "Information Security Policies".into(),
            description: "Policies for information security shall be defined and approved".into(),
            category: "Organizational".into(),
            default_severity: Severity::Medium,
        },
        Control {
            id: "A.5.23".into(),
            name: "Cloud Services Security".into(),
            description: "Processes for acquisition, use and exit from cloud services".into(),
            category: "Organizational".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "A.5.30".into(),
            name: "ICT Readiness for Business Continuity".into(),
            description: "ICT readiness shall be planned, implemented and tested".into(),
            category: "Organizational".into(),
            default_severity: Severity::High,
        },
        // A.6 - People Controls
        Control {
            id: "A.6.3".into(),
            name: "Information Security Awareness".into(),
            description: "Personnel shall receive appropriate security awareness training".into(),
            category: "People".into(),
            default_severity: Severity::Medium,
        },
        // A.7 - Physical Controls
        Control {
            id: "A.7.1".into(),
            name: "Physical Security Perimeters".into(),
            description: "Security perimeters shall protect areas with information assets".into(),
            category: "Physical".into(),
            default_severity: Severity::Medium,
        },
        // A.8 - Technological Controls
        Control {
            id: "A.8.1".into(),
            name: "User Endpoint Devices".into(),
            description: "Information on user endpoint devices shall be protected".into(),
            category: "Technological".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "A.8.5".into(),
            name: "Secure Authentication".into(),
            description: "Secure authentication technologies and procedures shall be applied".into(),
            category: "Technological".into(),
            default_severity: Severity::Critical,
        },
        Control {
            id: "A.8.8".into(),
            name: "Management of Technical Vulnerabilities".into(),
            description: "Exposure to technical vulnerabilities shall be managed".into(),
            category: "Technological".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "A.8.12".into(),
            name: "Data Leakage Prevention".into(),
            description: "Data leakage prevention shall be applied to sensitive systems".into(),
            category: "Technological".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "A.8.16".into(),
            name: "Monitoring Activities".into(),
            description: "Networks, systems and applications shall be monitored for anomalies".into(),
            category: "Technological".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "A.8.24".into(),
            name: "Use of Cryptography".into(),
            description: "Rules for effective use of cryptography shall be defined".into(),
            category: "Technological".into(),
            default_severity: Severity::Critical,
        },
    ]
}
