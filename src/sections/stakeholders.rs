use yew::prelude::*;

use crate::common::SectionTitle;
use crate::content::renderable;
use crate::content::stakeholders::{Stakeholder, StakeholderKind, STAKEHOLDERS};
use crate::hooks::selection::AccordionAction;
use crate::hooks::{use_accordion, use_in_view, use_reveal_motion, use_staggered_reveal, use_tab_group};
use crate::motion::reveal::RevealStyle;
use crate::motion::visibility::VisibilityConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardTab {
    Benefits,
    Challenges,
}

#[derive(Properties, PartialEq)]
struct StakeholderCardProps {
    stakeholder: Stakeholder,
    style: RevealStyle,
}

#[function_component(StakeholderCard)]
fn stakeholder_card(props: &StakeholderCardProps) -> Html {
    let tabs = use_tab_group(vec![CardTab::Benefits, CardTab::Challenges]);
    let Stakeholder { kind, item } = props.stakeholder;
    let accent = kind.accent().classes();
    let showing = tabs.active().copied().unwrap_or(CardTab::Benefits);

    let tab_button = |tab: CardTab, label: &'static str, active_classes: Classes| {
        let onclick = {
            let tabs = tabs.dispatcher();
            Callback::from(move |_: MouseEvent| tabs.dispatch(tab))
        };
        html! {
            <button
                role="tab"
                aria-selected={(showing == tab).to_string()}
                class={classes!(
                    "flex", "items-center", "py-3", "px-4", "text-sm", "font-medium", "border-b-2", "-mb-px", "transition-colors",
                    if showing == tab { active_classes } else { classes!("text-slate-500", "border-transparent", "hover:text-slate-700") },
                )}
                {onclick}
            >
                { label }
            </button>
        }
    };

    html! {
        <div
            style={props.style.css()}
            class={classes!("relative", "overflow-hidden", "rounded-2xl", "border-2", "bg-white", "shadow-xl", "hover:shadow-2xl", accent.border)}
        >
            <div class={classes!("h-3", "w-full", accent.bg_solid)}></div>
            <div class="p-8 pb-5">
                <div class="flex items-center mb-6">
                    <div class={classes!("w-16", "h-16", "rounded-full", "flex", "items-center", "justify-center", "mr-4", "text-3xl", accent.bg_light)}>
                        { kind.icon() }
                    </div>
                    <h3 class="text-2xl font-bold text-slate-800">{ item.title }</h3>
                </div>
                <div class="flex border-b border-slate-200 mb-6" role="tablist">
                    { tab_button(CardTab::Benefits, "✓ Benefits", classes!(accent.text, accent.border_active)) }
                    { tab_button(CardTab::Challenges, "✕ Challenges", classes!("text-red-600", "border-red-500")) }
                </div>
            </div>
            <div class="px-8 pb-8">
                {
                    match showing {
                        CardTab::Benefits => html! {
                            <ul class="space-y-4">
                                { for item.features.iter().map(|benefit| html! {
                                    <li class="flex items-start">
                                        <span class={classes!("w-6", "h-6", "rounded-full", "flex-shrink-0", "flex", "items-center", "justify-center", "mr-3", accent.bg_light, accent.text)}>{"⚡"}</span>
                                        <span class="text-slate-700">{ *benefit }</span>
                                    </li>
                                }) }
                            </ul>
                        },
                        CardTab::Challenges => html! {
                            <div class="bg-red-50 p-6 rounded-xl border border-red-100">
                                <h4 class="font-semibold text-red-700 mb-3">{"Current Challenges"}</h4>
                                <p class="text-slate-700">{ item.description }</p>
                            </div>
                        },
                    }
                }
            </div>
        </div>
    }
}

#[function_component(Stakeholders)]
pub fn stakeholders() -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), VisibilityConfig::once(0.1));
    let motion = use_reveal_motion().with_offset(30.0);
    let latch = use_staggered_reveal(visible, STAKEHOLDERS.len(), 100);
    let expanded = use_accordion::<StakeholderKind>();

    let Some(items) = renderable(STAKEHOLDERS, "stakeholders") else {
        return Html::default();
    };

    let mobile_rows = items.iter().map(|stakeholder| {
        let kind = stakeholder.kind;
        let open = expanded.is_open(&kind);
        let accent = kind.accent().classes();
        let onclick = {
            let expanded = expanded.dispatcher();
            Callback::from(move |_: MouseEvent| expanded.dispatch(AccordionAction::Toggle(kind)))
        };
        html! {
            <div key={kind.label()} class={classes!("rounded-xl", "border-2", "bg-white", "overflow-hidden", accent.border)}>
                <button
                    class="w-full flex items-center justify-between p-5"
                    aria-expanded={open.to_string()}
                    {onclick}
                >
                    <span class="flex items-center gap-3">
                        <span class={classes!("w-10", "h-10", "rounded-full", "flex", "items-center", "justify-center", accent.bg_light)}>{ kind.icon() }</span>
                        <h3 class="text-xl font-bold text-slate-800">{ stakeholder.item.title }</h3>
                    </span>
                    <span class={classes!("transition-transform", open.then_some("rotate-180"))}>{"▾"}</span>
                </button>
                if open {
                    <div class="px-5 pb-5 space-y-4">
                        <div class="bg-red-50 p-4 rounded-lg">
                            <p class="text-slate-700 text-sm">{ stakeholder.item.description }</p>
                        </div>
                        <h4 class={classes!("text-base", "font-semibold", accent.text)}>{"Benefits:"}</h4>
                        <ul class="space-y-2">
                            { for stakeholder.item.features.iter().map(|benefit| html! {
                                <li class="text-sm text-slate-700">{ "• " }{ *benefit }</li>
                            }) }
                        </ul>
                    </div>
                }
            </div>
        }
    });

    html! {
        <section id="stakeholder" ref={node} class="py-20 bg-white relative">
            <div class="container mx-auto px-4 xl:max-w-7xl">
                <SectionTitle
                    title="Stakeholder Benefits"
                    subtitle="Our solution addresses critical pain points and delivers measurable value to all healthcare ecosystem participants"
                />
                <div class="hidden lg:grid lg:grid-cols-3 gap-8">
                    { for items.iter().enumerate().map(|(index, stakeholder)| html! {
                        <StakeholderCard
                            key={stakeholder.kind.label()}
                            stakeholder={*stakeholder}
                            style={motion.style(latch.is_revealed(index), 0)}
                        />
                    }) }
                </div>
                <div class="lg:hidden space-y-4">
                    { for mobile_rows }
                </div>
            </div>
        </section>
    }
}
