use crate::theme::Accent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProblemCard {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
}

/// The problem chain, in cause-to-effect order.
pub static PROBLEM_CARDS: &[ProblemCard] = &[
    ProblemCard {
        id: 1,
        title: "High Utilization",
        description: "Excessive healthcare service usage without proper controls",
        icon: "📊",
        accent: Accent::Primary,
    },
    ProblemCard {
        id: 2,
        title: "Increased Costs",
        description: "Rising medical expenses for payers",
        icon: "💲",
        accent: Accent::Secondary,
    },
    ProblemCard {
        id: 3,
        title: "Elevated MLR",
        description: "Medical Loss Ratio above 100-140%",
        icon: "🥧",
        accent: Accent::Purple,
    },
    ProblemCard {
        id: 4,
        title: "Low Profitability",
        description: "Unsustainable business model",
        icon: "📉",
        accent: Accent::Red,
    },
];
