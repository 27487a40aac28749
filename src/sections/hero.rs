use yew::prelude::*;

use crate::common::Button;
use crate::content::stakeholders::{hero_tab, StakeholderKind};
use crate::hooks::{use_in_view, use_reveal_motion, use_tab_group};
use crate::motion::visibility::VisibilityConfig;
use crate::text::capitalize_words;
use crate::theme::{ButtonVariant, ButtonSize};

const TABS: [StakeholderKind; 3] = [
    StakeholderKind::Payers,
    StakeholderKind::Providers,
    StakeholderKind::Patients,
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    let visible = use_in_view(
        node.clone(),
        VisibilityConfig::once(0.1).with_root_margin("-50px 0px"),
    );
    let motion = use_reveal_motion();
    let tabs = use_tab_group(TABS.to_vec());
    let fade = |delay_ms: u32| motion.style(visible, delay_ms).css();

    let active = tabs.active().copied().unwrap_or(StakeholderKind::Payers);
    let panel = hero_tab(active).map(|tab| {
        let accent = active.accent().classes();
        html! {
            <div class="p-4">
                <div class="flex flex-col md:flex-row gap-6 items-center">
                    <div class="text-center md:text-left flex-1">
                        <h3 class="text-2xl font-bold text-slate-900 mb-2">{ tab.title }</h3>
                        <p class="text-slate-600 leading-relaxed">{ tab.description }</p>
                        <div class="mt-4 flex justify-center md:justify-start">
                            <span class={classes!("flex", "items-center", "gap-1", "text-lg", "font-bold", accent.text)}>
                                { tab.icon }{ " " }{ tab.stat }
                            </span>
                        </div>
                    </div>
                    <div class={classes!("flex-shrink-0", "w-32", "h-32", "rounded-full", "flex", "items-center", "justify-center", accent.bg_light)}>
                        <div class={classes!("w-20", "h-20", "rounded-full", "flex", "items-center", "justify-center", accent.bg_soft)}>
                            <div class={classes!("text-2xl", "font-bold", accent.text_strong)}>{ tab.center_value }</div>
                        </div>
                    </div>
                </div>
                <div class="mt-6 pt-4 border-t border-slate-100 flex flex-wrap gap-2 justify-center md:justify-start">
                    <Button href="#contact" size={ButtonSize::Medium}>{"Schedule Demo →"}</Button>
                    <Button href="#problem" variant={ButtonVariant::Secondary}>{"Learn More"}</Button>
                </div>
            </div>
        }
    });

    let tab_buttons = TABS.iter().map(|kind| {
        let kind = *kind;
        let selected = tabs.is_active(&kind);
        let accent = kind.accent().classes();
        let onclick = {
            let tabs = tabs.dispatcher();
            Callback::from(move |_: MouseEvent| tabs.dispatch(kind))
        };
        let label = capitalize_words(&format!("for {}", kind.label()));
        html! {
            <button
                key={kind.label()}
                role="tab"
                aria-selected={selected.to_string()}
                aria-label={format!("Show {} content", kind.label())}
                class={classes!(
                    "flex-1", "py-2", "px-1", "text-sm", "font-medium", "transition-colors",
                    if selected {
                        classes!(accent.bg_light, accent.text_strong, "border-b-2", accent.border_active)
                    } else {
                        classes!("text-slate-600", "hover:bg-slate-50")
                    },
                )}
                {onclick}
            >
                { label }
            </button>
        }
    });

    html! {
        <section
            id="healthcare-hero"
            ref={node}
            class="relative min-h-[90vh] flex items-center bg-gradient-to-br from-slate-50 to-white overflow-hidden pt-16 md:pt-20"
        >
            <div class="absolute inset-0 pointer-events-none">
                <img
                    src="/hero.jpeg"
                    alt="Healthcare professionals discussing"
                    class="absolute w-full h-full object-cover object-center"
                    loading="eager"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-white/90 via-white/30 to-white/90"></div>
            </div>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 xl:max-w-6xl relative z-10 space-y-8">
                <header class="text-center mb-6">
                    <div style={fade(200)}>
                        <h1 class="text-4xl sm:text-5xl md:text-6xl font-bold leading-tight mt-12 text-blue-600">
                            {"Automating Healthcare Administration"}
                        </h1>
                    </div>
                    <div class="mt-4" style={fade(300)}>
                        <p class="max-w-2xl mx-auto text-slate-600 text-base md:text-lg leading-relaxed">
                            {"Harnessing technology to cut costs and streamline health insurance in Nigeria, making it more efficient, accessible, and sustainable"}
                        </p>
                    </div>
                </header>

                <div style={fade(400)}>
                    <div class="bg-white max-w-3xl mx-auto rounded-xl shadow-sm border border-slate-100 overflow-hidden">
                        <div class="flex border-b" role="tablist">
                            { for tab_buttons }
                        </div>
                        { panel.unwrap_or_default() }
                    </div>
                </div>

                <div class="text-center mb-2" style={fade(600)}>
                    <span class="text-xs uppercase tracking-wider text-slate-500 font-medium">{"Designed for Nigeria"}</span>
                </div>

                <div style={fade(700)}>
                    <div class="relative h-24 mb-4 mt-6 flex justify-between items-center">
                        <div class="w-14 h-14 bg-blue-600 rounded-full flex items-center justify-center text-white text-sm font-bold shadow-md">{"HMO"}</div>
                        <div class="h-0.5 flex-grow bg-gradient-to-r from-blue-600 via-slate-300 to-teal-600 mx-2"></div>
                        <div class="w-14 h-14 bg-teal-600 rounded-full flex items-center justify-center text-white text-sm font-bold shadow-md">{"Provider"}</div>
                        <div class="h-0.5 flex-grow bg-gradient-to-r from-teal-600 via-slate-300 to-amber-600 mx-2"></div>
                        <div class="w-14 h-14 bg-amber-600 rounded-full flex items-center justify-center text-white text-sm font-bold shadow-md">{"Patient"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
