use super::ContentItem;
use crate::theme::Accent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StakeholderKind {
    Payers,
    Providers,
    Patients,
}

impl StakeholderKind {
    pub fn label(self) -> &'static str {
        match self {
            StakeholderKind::Payers => "payers",
            StakeholderKind::Providers => "providers",
            StakeholderKind::Patients => "patients",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            StakeholderKind::Payers => Accent::Primary,
            StakeholderKind::Providers => Accent::Purple,
            StakeholderKind::Patients => Accent::Secondary,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            StakeholderKind::Payers => "💼",
            StakeholderKind::Providers => "🏥",
            StakeholderKind::Patients => "👥",
        }
    }
}

/// `item.description` holds the stakeholder's problem, `item.features` the
/// benefits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stakeholder {
    pub kind: StakeholderKind,
    pub item: ContentItem,
}

pub static STAKEHOLDERS: &[Stakeholder] = &[
    Stakeholder {
        kind: StakeholderKind::Payers,
        item: ContentItem {
            id: "payers",
            title: "Health Insurance Providers",
            description: "Most HMOs in Nigeria face high Medical Loss Ratios (MLRs) of 100-140%, resulting in financial losses and unsustainable business models.",
            features: &[
                "Reduce Medical Loss Ratios from over 140% to sustainable levels",
                "Prevent fraud, abuse, and unnecessary use of services",
                "Accurately verify eligibility, benefits, and treatments",
                "Get valuable data insights to control costs and improve premium pricing",
                "Reduce administrative expenses while improving accuracy",
                "Process claims faster and with higher accuracy",
            ],
        },
    },
    Stakeholder {
        kind: StakeholderKind::Providers,
        item: ContentItem {
            id: "providers",
            title: "Healthcare Providers",
            description: "Healthcare providers struggle with claim denials, revenue leakage, and difficulties verifying patient coverage before delivering services.",
            features: &[
                "Keep expenses within fixed capitation payment amounts",
                "Prevent denial of payment by payers through accurate verification",
                "Reduce administrative costs with automated processes",
                "Get real-time patient eligibility verification before providing services",
                "Track utilization patterns to optimize resource allocation",
                "Improve revenue cycle management",
            ],
        },
    },
    Stakeholder {
        kind: StakeholderKind::Patients,
        item: ContentItem {
            id: "patients",
            title: "Patients & Enrollees",
            description: "Patients often face long wait times, care denials, and unexpected out-of-pocket expenses due to inefficient verification processes.",
            features: &[
                "Experience dramatically reduced waiting times from hours to seconds",
                "Eliminate unexpected out-of-pocket payments and billing surprises",
                "Reduce denials of care through instant coverage verification",
                "Access benefits information quickly and easily",
                "Experience a smoother, more seamless care process",
                "Better understand coverage limits and terms before treatment",
            ],
        },
    },
];

/// Hero panel copy for each stakeholder tab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroTab {
    pub kind: StakeholderKind,
    pub title: &'static str,
    pub description: &'static str,
    pub stat: &'static str,
    pub icon: &'static str,
    pub center_value: &'static str,
}

pub static HERO_TABS: &[HeroTab] = &[
    HeroTab {
        kind: StakeholderKind::Payers,
        title: "Control MLR",
        description: "Reduce MLRs from 140% to profitable levels using automation for verification, fraud prevention, and forecasting.",
        stat: "80% MLR Improvement",
        icon: "📈",
        center_value: "140→60",
    },
    HeroTab {
        kind: StakeholderKind::Providers,
        title: "Prevent Payment Denials",
        description: "Keep expenses within capitation limits and prevent claim denials with instant eligibility verification.",
        stat: "99% Verification Accuracy",
        icon: "✅",
        center_value: "99%",
    },
    HeroTab {
        kind: StakeholderKind::Patients,
        title: "Instant Verification",
        description: "Eliminate long wait times and unexpected out-of-pocket payments with real-time coverage verification.",
        stat: "Hours → Seconds",
        icon: "⏱️",
        center_value: "24/7",
    },
];

pub fn hero_tab(kind: StakeholderKind) -> Option<&'static HeroTab> {
    HERO_TABS.iter().find(|t| t.kind == kind)
}
