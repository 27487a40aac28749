use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::common::SectionTitle;
use crate::config::use_site_config;
use crate::content::problems::{ProblemCard, PROBLEM_CARDS};
use crate::content::renderable;
use crate::hooks::{use_in_view, use_reveal_motion, use_timeout};
use crate::motion::reveal::RevealMotion;
use crate::motion::selection::is_activation_key;
use crate::motion::visibility::VisibilityConfig;

/// Card `n` (1-based) starts its transition at `150 + n * 100` ms.
pub fn card_delay_ms(position: usize) -> u32 {
    150 + position as u32 * 100
}

#[derive(Properties, PartialEq)]
struct ProblemCardViewProps {
    card: ProblemCard,
    position: usize,
    active: bool,
    visible: bool,
    motion: RevealMotion,
    on_activate: Callback<u8>,
}

#[function_component(ProblemCardView)]
fn problem_card_view(props: &ProblemCardViewProps) -> Html {
    let id = props.card.id;
    let accent = props.card.accent.classes();
    let activate = props.on_activate.reform(move |_: MouseEvent| id);
    let onkeydown = {
        let on_activate = props.on_activate.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e.key()) {
                e.prevent_default();
                on_activate.emit(id);
            }
        })
    };
    let style = props
        .motion
        .style(props.visible, card_delay_ms(props.position))
        .css();

    html! {
        <div role="listitem" style={style}>
            <div
                role="button"
                tabindex="0"
                aria-pressed={props.active.to_string()}
                class={classes!(
                    "relative", "h-full", "p-4", "md:p-6", "rounded-xl", "border-2", "cursor-pointer",
                    "transition-colors", "duration-300", "focus:outline-none", "focus:ring-2", "focus:ring-blue-300",
                    if props.active {
                        classes!(accent.bg_light, accent.border_active, "shadow-lg")
                    } else {
                        classes!("bg-white", accent.border, accent.hover_bg)
                    },
                )}
                onclick={activate.clone()}
                onmouseenter={activate}
                {onkeydown}
            >
                <div class="flex items-center gap-3 mb-2">
                    <span class={classes!("w-10", "h-10", "rounded-full", "flex", "items-center", "justify-center", accent.bg_soft)}>
                        { props.card.icon }
                    </span>
                    <span class={classes!("text-xs", "font-semibold", accent.text)}>{ format!("Step {}", id) }</span>
                </div>
                <h3 class="text-base md:text-xl font-bold text-slate-800 mb-1">{ props.card.title }</h3>
                <p class="text-xs md:text-sm text-slate-600">{ props.card.description }</p>
            </div>
        </div>
    }
}

#[function_component(ProblemStatement)]
pub fn problem_statement() -> Html {
    let config = use_site_config();
    let node = use_node_ref();
    let visible = use_in_view(
        node.clone(),
        VisibilityConfig::once(0.15).with_root_margin("0px 0px -100px 0px"),
    );
    let motion = use_reveal_motion();
    let active = use_state(|| None::<u8>);

    // Highlight the head of the chain once the cards have settled.
    {
        let active = active.clone();
        use_timeout(
            visible && active.is_none(),
            config.problem_activate_delay_ms,
            Callback::from(move |_| active.set(Some(1))),
        );
    }

    let Some(cards) = renderable(PROBLEM_CARDS, "problem cards") else {
        return Html::default();
    };

    let on_activate = {
        let active = active.clone();
        Callback::from(move |id: u8| active.set(Some(id)))
    };

    html! {
        <section
            id="problem"
            ref={node}
            aria-labelledby="healthcare-problem-title"
            class="py-12 sm:py-16 md:py-20 lg:py-28 bg-gradient-to-b from-white via-slate-50 to-slate-100 relative overflow-hidden"
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 xl:max-w-6xl">
                <div class="text-center" style={motion.with_offset(32.0).style(visible, 0).css()}>
                    <SectionTitle
                        badge="⚠ Critical Industry Challenge"
                        title="The Healthcare Problem"
                        subtitle="Healthcare providers in Nigeria face a critical profitability challenge due to escalating Medical Loss Ratios (MLR)"
                    />
                </div>

                <div
                    class="mt-6 md:mt-12 max-w-5xl mx-auto grid grid-cols-1 sm:grid-cols-2 gap-3 md:gap-6"
                    role="list"
                    aria-label="Healthcare problem sequence"
                >
                    { for cards.iter().enumerate().map(|(index, card)| html! {
                        <ProblemCardView
                            key={card.id}
                            card={*card}
                            position={index + 1}
                            active={*active == Some(card.id)}
                            visible={visible}
                            motion={motion}
                            on_activate={on_activate.clone()}
                        />
                    }) }
                </div>

                <div class="mt-8 md:mt-16 text-center" style={motion.with_offset(8.0).style(visible, 900).css()}>
                    <div class="inline-flex items-center gap-2 px-4 py-3 bg-red-100 rounded-xl shadow-md">
                        <span aria-hidden="true" class="text-red-500">{"⚠"}</span>
                        <span class="text-base md:text-2xl font-bold text-red-700">
                            {"Most HMOs in Nigeria have MLRs above 100-140%"}
                        </span>
                    </div>
                    <div class="mt-4 sm:mt-6 p-4 bg-white/70 rounded-xl shadow-sm max-w-3xl mx-auto">
                        <p class="text-sm md:text-lg leading-relaxed text-slate-700">
                            {"When Medical Loss Ratios exceed 100%, healthcare providers are paying out more in claims than they receive in premiums, creating an unsustainable business model that threatens the entire healthcare ecosystem."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cards_are_staggered_by_position() {
        let delays: Vec<u32> = (1..=PROBLEM_CARDS.len()).map(card_delay_ms).collect();
        assert_eq!(delays, vec![250, 350, 450, 550]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::motion::reveal::MotionPreference;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn pressed_state_lives_on_the_button_inside_the_list_item() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        yew::Renderer::<ProblemCardView>::with_root_and_props(
            root.clone(),
            ProblemCardViewProps {
                card: PROBLEM_CARDS[0],
                position: 1,
                active: true,
                visible: true,
                motion: RevealMotion::from_config(&SiteConfig::default(), MotionPreference::Reduced),
                on_activate: Callback::default(),
            },
        )
        .render();
        TimeoutFuture::new(0).await;

        let item = root.query_selector("[role=listitem]").unwrap().expect("list item");
        assert!(!item.has_attribute("aria-pressed"));
        let button = item.query_selector("[role=button]").unwrap().expect("card button");
        assert_eq!(button.get_attribute("aria-pressed").as_deref(), Some("true"));
        assert_eq!(button.get_attribute("tabindex").as_deref(), Some("0"));
    }
}
