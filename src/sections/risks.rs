use yew::prelude::*;

use crate::common::{Card, SectionTitle};
use crate::content::renderable;
use crate::content::risks::{Risk, RISKS};
use crate::hooks::{use_in_view, use_reveal_motion, use_staggered_reveal};
use crate::motion::reveal::RevealStyle;
use crate::motion::visibility::VisibilityConfig;
use crate::theme::{Accent, Elevation, Padding};

const RISK_ACCENT: Accent = Accent::Amber;
const MITIGATION_ACCENT: Accent = Accent::Emerald;

#[derive(Properties, PartialEq)]
struct RiskRowProps {
    risk: Risk,
    last: bool,
    style: RevealStyle,
}

#[function_component(RiskRow)]
fn risk_row(props: &RiskRowProps) -> Html {
    let risk = &props.risk;
    let warn = RISK_ACCENT.classes();
    let shield = MITIGATION_ACCENT.classes();
    html! {
        <div
            role="row"
            style={props.style.css()}
            class={classes!(
                "grid", "grid-cols-1", "md:grid-cols-2", "hover:bg-slate-50",
                (!props.last).then_some("border-b border-slate-200"),
            )}
        >
            <div role="cell" class="p-5 md:p-6 md:border-r border-slate-200 flex">
                <span class={classes!("w-6", "h-6", "rounded-full", warn.bg_light, warn.text, "flex-shrink-0", "flex", "items-center", "justify-center", "mr-3", "mt-0.5")}>{"›"}</span>
                <div>
                    <p class="text-slate-700">{ risk.risk }</p>
                    if let Some(impact) = risk.impact {
                        <p class="mt-2 text-sm text-slate-500">
                            <span class="font-medium">{"Impact: "}</span>{ impact }
                        </p>
                    }
                </div>
            </div>
            <div role="cell" class="p-5 md:p-6 bg-white flex">
                <span class={classes!("w-6", "h-6", "rounded-full", shield.bg_light, shield.text, "flex-shrink-0", "flex", "items-center", "justify-center", "mr-3", "mt-0.5")}>{"🛡"}</span>
                <div>
                    <p class="text-slate-700">{ risk.mitigation }</p>
                    if let Some(strategy) = risk.strategy {
                        <p class="mt-2 text-sm text-slate-500">
                            <span class="font-medium">{"Strategy: "}</span>{ strategy }
                        </p>
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(RisksMitigation)]
pub fn risks_mitigation() -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), VisibilityConfig::once(0.1));
    let motion = use_reveal_motion();
    let rows = use_staggered_reveal(visible, RISKS.len(), 200);

    let Some(risks) = renderable(RISKS, "risks") else {
        return Html::default();
    };

    html! {
        <section id="risks" ref={node} class="py-20 bg-white">
            <div class="container mx-auto px-4 xl:max-w-6xl">
                <div style={motion.style(visible, 0).css()}>
                    <SectionTitle
                        title="Risks & Mitigations"
                        subtitle="We've identified key risks and developed comprehensive strategies to address each challenge"
                    />
                </div>

                <div style={motion.style(visible, 200).css()}>
                    <Card elevation={Elevation::Large} padding={Padding::None} class="overflow-hidden">
                        <div role="table" aria-label="Risks and mitigations">
                            <div role="row" class="grid grid-cols-2 border-b border-slate-200">
                                <div role="columnheader" class="bg-slate-800 p-4 md:p-5 flex items-center">
                                    <span class={classes!("w-8", "h-8", "md:w-10", "md:h-10", "rounded-full", RISK_ACCENT.classes().bg_soft, "flex", "items-center", "justify-center", "mr-3")}>{"⚠"}</span>
                                    <h3 class="text-lg md:text-xl font-bold text-white">{"Potential Risks"}</h3>
                                </div>
                                <div role="columnheader" class="bg-slate-800 p-4 md:p-5 flex items-center">
                                    <span class={classes!("w-8", "h-8", "md:w-10", "md:h-10", "rounded-full", MITIGATION_ACCENT.classes().bg_soft, "flex", "items-center", "justify-center", "mr-3")}>{"🛡"}</span>
                                    <h3 class="text-lg md:text-xl font-bold text-white">{"Our Mitigations"}</h3>
                                </div>
                            </div>
                            { for risks.iter().enumerate().map(|(index, risk)| html! {
                                <RiskRow
                                    key={risk.id}
                                    risk={*risk}
                                    last={index + 1 == risks.len()}
                                    style={motion.style(rows.is_revealed(index), 0)}
                                />
                            }) }
                        </div>
                    </Card>
                </div>

                <div class="mt-10 md:mt-12 text-center" style={motion.style(visible, 400).css()}>
                    <div class="inline-flex items-center gap-2 px-5 py-3 bg-slate-100 rounded-xl border border-slate-200">
                        <span class="text-base md:text-lg font-semibold text-slate-700">
                            {"Comprehensive risk assessment updated quarterly"}
                        </span>
                    </div>
                </div>
            </div>
        </section>
    }
}
