use log::info;
use yew::prelude::*;

use crate::common::LoadingPlaceholder;
use crate::config::use_site_config;
use crate::hooks::{use_timeout, ScrollTrackerProvider};
use crate::layout::{Footer, Navbar, ScrollToTop};
use crate::sections::{
    AiTechnology, CallToAction, Hero, Products, ProblemStatement, RisksMitigation, Stakeholders,
};

/// Page sections in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    Problem,
    Stakeholders,
    Products,
    AiTechnology,
    Risks,
    CallToAction,
}

impl SectionKind {
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Hero,
        SectionKind::Problem,
        SectionKind::Stakeholders,
        SectionKind::Products,
        SectionKind::AiTechnology,
        SectionKind::Risks,
        SectionKind::CallToAction,
    ];

    /// DOM id of the section root, also the in-page link target.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionKind::Hero => "healthcare-hero",
            SectionKind::Problem => "problem",
            SectionKind::Stakeholders => "stakeholder",
            SectionKind::Products => "products",
            SectionKind::AiTechnology => "technology",
            SectionKind::Risks => "risks",
            SectionKind::CallToAction => "contact",
        }
    }

    pub fn render(self) -> Html {
        match self {
            SectionKind::Hero => html! { <Hero /> },
            SectionKind::Problem => html! { <ProblemStatement /> },
            SectionKind::Stakeholders => html! { <Stakeholders /> },
            SectionKind::Products => html! { <Products /> },
            SectionKind::AiTechnology => html! { <AiTechnology /> },
            SectionKind::Risks => html! { <RisksMitigation /> },
            SectionKind::CallToAction => html! { <CallToAction /> },
        }
    }
}

pub fn anchors() -> Vec<&'static str> {
    SectionKind::ALL.iter().map(|s| s.anchor()).collect()
}

/// The landing page: navbar, every section in order, footer. Content stays
/// behind a placeholder until the loading gate opens.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let config = use_site_config();
    let ready = use_state(|| config.loading_delay_ms == 0);

    {
        let ready = ready.clone();
        use_timeout(
            !*ready,
            config.loading_delay_ms,
            Callback::from(move |_| {
                info!("Loading gate opened");
                ready.set(true);
            }),
        );
    }

    if !*ready {
        return html! { <LoadingPlaceholder /> };
    }

    html! {
        <ScrollTrackerProvider anchors={anchors()}>
            <div class="min-h-screen bg-white text-slate-900 antialiased">
                <Navbar />
                <main>
                    { for SectionKind::ALL.iter().map(|kind| html! {
                        <div key={kind.anchor()}>{ kind.render() }</div>
                    }) }
                </main>
                <Footer />
                <ScrollToTop />
            </div>
        </ScrollTrackerProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sections_render_in_fixed_order() {
        assert_eq!(
            anchors(),
            vec!["healthcare-hero", "problem", "stakeholder", "products", "technology", "risks", "contact"]
        );
    }

    #[test]
    fn nav_links_point_at_real_sections() {
        use crate::content::navigation::NAV_LINKS;
        let anchors = anchors();
        for link in NAV_LINKS {
            if let Some(section) = link.section {
                assert!(anchors.contains(&section), "{} has no section", section);
                assert_eq!(link.href, format!("#{}", section));
            }
        }
    }
}
