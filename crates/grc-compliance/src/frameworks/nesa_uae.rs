//! NESA UAE Information Assurance Standard controls

use super::Control;
use crate::item::Severity;

/// Get the NESA UAE control catalog
pub fn controls() -> Vec<Control> {
    vec![
        // Management controls
        Control {
            id: "M1.1.1".into(),
            name: "Information Security Policy".into(),
            description: "An information security policy shall be documented and approved".into(),
            category: "Management".into(),
            default_severity: Severity::Medium,
        },
        Control {
            id: "M1.2.2".into(),
            name: "Security Roles and Responsibilities".into(),
            description: "Security responsibilities shall be defined and allocated".into(),
            category: "Management".into(),
            default_severity: Severity::Medium,
        },
        Control {
            id: "M2.1.1".into(),
            name: "Risk Assessment Process".into(),
            description: "Information security risks shall be identified and assessed".into(),
            category: "Management".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "M3.4.1".into(),
            name: "Security Awareness Programme".into(),
            description: "Personnel shall receive security awareness education".into(),
            category: "Management".into(),
            default_severity: Severity::Medium,
        },
        // Technical controls
        Control {
            id: "T1.2.1".into(),
            name: "Asset Inventory".into(),
            description: "Assets associated with information facilities shall be inventoried".into(),
            category: "Technical".into(),
            default_severity: Severity::Medium,
        },
        Control {
            id: "T3.2.1".into(),
            name: "Privileged Access Management".into(),
            description: "Allocation and use of privileged access shall be restricted".into(),
            category: "Technical".into(),
            default_severity: Severity::Critical,
        },
        Control {
            id: "T4.5.1".into(),
            name: "Malware Protection".into(),
            description: "Detection and prevention controls against malware shall operate".into(),
            category: "Technical".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "T5.4.2".into(),
            name: "Cryptographic Key Management".into(),
            description: "Cryptographic keys shall be protected through their lifecycle".into(),
            category: "Technical".into(),
            default_severity: Severity::Critical,
        },
        Control {
            id: "T7.3.1".into(),
            name: "Security Event Logging".into(),
            description: "Event logs recording user activities shall be produced and kept".into(),
            category: "Technical".into(),
            default_severity: Severity::High,
        },
    ]
}
