use crate::text::format_percentage;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureBox {
    pub title: &'static str,
    pub icon: &'static str,
    pub lines: &'static [&'static str],
}

pub static LLM_HIGHLIGHTS: &[(&str, &str)] = &[
    ("🗄️", "7B Parameters"),
    ("🖥️", "Mobile Optimized"),
    ("🛡️", "Privacy-Focused"),
    ("⚡", "Low Latency"),
];

pub static SECURITY_POINTS: &[&str] = &[
    "On-device processing",
    "HIPAA-compliant",
    "End-to-end encryption",
];

pub static FEATURE_BOXES: &[FeatureBox] = &[
    FeatureBox {
        title: "Nigeria-Specific Data",
        icon: "🌍",
        lines: &[
            "Trained on unique Nigerian healthcare data",
            "Not generic internet-scraped data",
            "Understands local medical terminology",
            "Tailored to regional healthcare practices",
        ],
    },
    FeatureBox {
        title: "Offline Capable",
        icon: "📶",
        lines: &[
            "Works without internet connection",
            "Runs locally on PC or smartphone",
            "Perfect for areas with limited connectivity",
            "No disruption during network outages",
        ],
    },
    FeatureBox {
        title: "High Performance",
        icon: "⚡",
        lines: &[
            "Optimized for low-resource environments",
            "Quick response times even on older devices",
            "Minimal battery consumption",
            "Efficient memory usage",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub percent: f64,
    pub label: &'static str,
    pub detail: &'static str,
}

impl Metric {
    pub fn value(&self) -> String {
        format_percentage(self.percent, 0)
    }
}

pub static METRICS: &[Metric] = &[
    Metric {
        percent: 97.0,
        label: "Accuracy",
        detail: "Verification decisions matching expert review",
    },
    Metric {
        percent: 85.0,
        label: "Time Savings",
        detail: "Less time spent on manual eligibility checks",
    },
    Metric {
        percent: 43.0,
        label: "Cost Reduction",
        detail: "Lower administrative spend per claim",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn metric_values_render_as_percentages() {
        let values: Vec<String> = METRICS.iter().map(Metric::value).collect();
        assert_eq!(values, vec!["97%", "85%", "43%"]);
    }
}
