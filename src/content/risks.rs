#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Risk {
    pub id: u8,
    pub risk: &'static str,
    pub impact: Option<&'static str>,
    pub mitigation: &'static str,
    pub strategy: Option<&'static str>,
}

pub static RISKS: &[Risk] = &[
    Risk {
        id: 1,
        risk: "Low technology adoption among healthcare providers, especially in rural areas.",
        impact: Some("Could limit platform penetration and effectiveness in areas where it's needed most."),
        mitigation: "Developed offline-first approach that works on basic smartphones with simple, WhatsApp-like interface requiring minimal training.",
        strategy: Some("Progressive implementation starting with urban centers and gradually expanding to rural areas with targeted training programs."),
    },
    Risk {
        id: 2,
        risk: "Data security concerns and potential breaches compromising patient information.",
        impact: Some("Loss of trust and potential regulatory penalties, particularly under Nigeria's Data Protection Regulation."),
        mitigation: "End-to-end encryption of all patient data with secure offline storage and compliance with NDPR standards.",
        strategy: Some("Regular security audits and penetration testing conducted by third-party cybersecurity firms."),
    },
    Risk {
        id: 3,
        risk: "Resistance from healthcare workers who fear automation may threaten their jobs.",
        impact: Some("Slow adoption and potential sabotage of implementation efforts."),
        mitigation: "Positioning solution as an assistant rather than replacement, automating administrative tasks while allowing health workers to focus on patient care.",
        strategy: Some("Early stakeholder engagement and clear communication about how the platform reduces workload rather than replacing jobs."),
    },
    Risk {
        id: 4,
        risk: "Infrastructure challenges including unreliable electricity and internet connectivity.",
        impact: Some("System downtime affecting service delivery and user experience."),
        mitigation: "Lightweight application designed to operate on minimal power with offline capability and data synchronization when connectivity returns.",
        strategy: Some("Partnership with local telecom providers for special data packages and investment in solar-powered backup systems for key facilities."),
    },
    Risk {
        id: 5,
        risk: "Regulatory hurdles and slow approval processes from Nigeria's healthcare authorities.",
        impact: Some("Delayed market entry and limited ability to scale quickly."),
        mitigation: "Early engagement with NHIS, Ministry of Health, and other regulatory bodies as part of development process.",
        strategy: Some("Modular approach allowing for implementation of pre-approved features while awaiting full regulatory clearance."),
    },
    Risk {
        id: 6,
        risk: "Algorithm bias in healthcare decisions due to limited or unrepresentative training data.",
        impact: Some("Potential for unequal healthcare outcomes across different demographic groups."),
        mitigation: "Extensive model training on diverse Nigerian patient data with continuous model improvement based on real-world usage.",
        strategy: Some("Regular bias audits and human oversight for algorithmic decisions with transparent explanation of recommendations."),
    },
    Risk {
        id: 7,
        risk: "Difficulty in integrating with legacy healthcare management systems used by hospitals and HMOs.",
        impact: Some("Fragmented digital experience requiring manual data entry between systems."),
        mitigation: "Development of flexible API connectors and data migration tools for major existing systems in the Nigerian market.",
        strategy: Some("Phased integration approach with dedicated technical support for initial setup and customization."),
    },
    Risk {
        id: 8,
        risk: "Economic instability and currency fluctuations affecting pricing model sustainability.",
        impact: Some("Unpredictable revenue streams and difficulty maintaining affordable pricing."),
        mitigation: "Multi-tiered subscription model with options for different facility sizes and usage levels.",
        strategy: Some("Value-based pricing tied to documented cost savings and ROI for healthcare providers and HMOs."),
    },
];
