use super::ContentItem;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub item: ContentItem,
    pub icon: &'static str,
}

pub static PRODUCTS: &[Product] = &[
    Product {
        item: ContentItem {
            id: "verification",
            title: "Verification Service",
            description: "Our Automated Verification Service ensures seamless eligibility, benefits, and treatment verification, improving accuracy to 99% while reducing administrative costs.",
            features: &[
                "Check patient eligibility instantly",
                "Verify benefits coverage in real-time",
                "Policy number and coverage date validation",
                "Benefits limits and co-pay verification",
                "Real-time approvals and authorizations",
            ],
        },
        icon: "/images/verification-icon.svg",
    },
    Product {
        item: ContentItem {
            id: "analytics",
            title: "Analytics Service",
            description: "The Analytics & Reporting Service provides comprehensive utilization and financial insights, helping identify cost-saving opportunities and optimize resource allocation.",
            features: &[
                "Detailed utilization reports by service type",
                "Financial analytics and MLR tracking",
                "Identify high-cost areas and savings opportunities",
                "Pattern detection for fraud prevention",
                "Decision support insights for resource optimization",
            ],
        },
        icon: "/images/analytics-icon.svg",
    },
    Product {
        item: ContentItem {
            id: "exchange",
            title: "Data Exchange",
            description: "Our secure Data Exchange Service enables seamless information sharing between healthcare providers and payers, streamlining claims processing and administrative workflows.",
            features: &[
                "Secure, HIPAA-compliant data sharing",
                "Provider to payer encounter data transmission",
                "Payer to provider eligibility communication",
                "Comprehensive claims data processing",
                "Offline capability for areas with limited connectivity",
            ],
        },
        icon: "/images/exchange-icon.svg",
    },
];

impl Product {
    pub fn icon_alt(&self) -> String {
        format!("{} icon", self.item.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn icons_are_image_paths_with_alt_text() {
        for product in PRODUCTS {
            assert!(product.icon.starts_with("/images/"), "{}", product.icon);
            assert!(product.icon.ends_with(".svg"), "{}", product.icon);
        }
        assert_eq!(PRODUCTS[0].icon_alt(), "Verification Service icon");
    }
}
