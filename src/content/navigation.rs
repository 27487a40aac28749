#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownItem {
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub id: &'static str,
    pub title: &'static str,
    pub href: &'static str,
    /// Section anchor this link highlights while it is in view.
    pub section: Option<&'static str>,
    pub dropdown: Option<&'static [DropdownItem]>,
}

pub static NAV_LINKS: &[NavLink] = &[
    NavLink {
        id: "problem",
        title: "Problem",
        href: "#problem",
        section: Some("problem"),
        dropdown: None,
    },
    NavLink {
        id: "stakeholders",
        title: "Stakeholders",
        href: "#stakeholder",
        section: Some("stakeholder"),
        dropdown: None,
    },
    NavLink {
        id: "products",
        title: "Products",
        href: "#products",
        section: Some("products"),
        dropdown: None,
    },
    NavLink {
        id: "technology",
        title: "Technology",
        href: "#technology",
        section: Some("technology"),
        dropdown: None,
    },
    NavLink {
        id: "solutions",
        title: "Solutions",
        href: "#",
        section: None,
        dropdown: Some(&[
            DropdownItem {
                title: "Healthcare",
                url: "/solutions/healthcare",
                description: "Solutions for medical professionals",
            },
            DropdownItem {
                title: "Finance",
                url: "/solutions/finance",
                description: "Financial technology solutions",
            },
            DropdownItem {
                title: "Education",
                url: "/solutions/education",
                description: "Learning management systems",
            },
        ]),
    },
    NavLink {
        id: "resources",
        title: "Resources",
        href: "#",
        section: None,
        dropdown: Some(&[
            DropdownItem {
                title: "Blog",
                url: "/blog",
                description: "Latest articles and updates",
            },
            DropdownItem {
                title: "Documentation",
                url: "/docs",
                description: "Guides and references",
            },
            DropdownItem {
                title: "Support",
                url: "/support",
                description: "Get help when you need it",
            },
        ]),
    },
];

pub static SOLUTION_LINKS: &[&str] = &[
    "Verification Service",
    "Data Analytics",
    "AI Forecasting",
    "Data Exchange",
    "For Providers",
    "For Payers",
];
