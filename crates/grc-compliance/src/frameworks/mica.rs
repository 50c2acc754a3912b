//! MiCA (EU Markets in Crypto-Assets Regulation) obligations

use super::Control;
use crate::item::Severity;

/// Get the MiCA control catalog
pub fn controls() -> Vec<Control> {
    vec![
        Control {
            id: "Art.60".into(),
            name: "Authorisation of CASPs".into(),
            description: "Crypto-asset service providers shall hold a valid authorisation".into(),
            category: "Governance".into(),
            default_severity: Severity::Critical,
        },
        Control {
            id: "Art.67".into(),
            name: "Prudential Safeguards".into(),
            description: "Maintain prudential safeguards proportionate to services offered".into(),
            category: "Governance".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "Art.68".into(),
            name: "Governance Arrangements".into(),
            description: "Robust governance with clear lines of responsibility".into(),
            category: "Governance".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "Art.70".into(),
            name: "Safekeeping of Client Assets".into(),
            description: "Client crypto-assets and funds shall be safeguarded and segregated"
                .into(),
            category: "Client Protection".into(),
            default_severity: Severity::Critical,
        },
        Control {
            id: "Art.72".into(),
            name: "Conflicts of Interest".into(),
            description: "Identify, prevent, manage and disclose conflicts of interest".into(),
            category: "Client Protection".into(),
            default_severity: Severity::Medium,
        },
        Control {
            id: "Art.74".into(),
            name: "Complaint Handling".into(),
            description: "Effective and transparent complaint handling procedures".into(),
            category: "Client Protection".into(),
            default_severity: Severity::Medium,
        },
        Control {
            id: "Art.76".into(),
            name: "Operation of a Trading Platform".into(),
            description: "Operating rules ensuring fair, orderly trading and resilience".into(),
            category: "Operations".into(),
            default_severity: Severity::High,
        },
        Control {
            id: "Art.79".into(),
            name: "ICT Risk Management".into(),
            description: "ICT systems and security protocols per DORA requirements".into(),
            category: "Operations".into(),
            default_severity: Severity::Critical,
        },
    ]
}
