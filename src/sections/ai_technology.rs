use yew::prelude::*;

use crate::common::{Card, Reveal, SectionTitle};
use crate::config::use_site_config;
use crate::content::renderable;
use crate::content::technology::{Metric, FEATURE_BOXES, LLM_HIGHLIGHTS, METRICS, SECURITY_POINTS};
use crate::hooks::selection::CarouselAction;
use crate::hooks::{use_carousel, use_in_view};
use crate::motion::visibility::VisibilityConfig;
use crate::theme::{Accent, Elevation, Padding};

#[derive(Properties, PartialEq)]
struct BentoBoxProps {
    children: Children,
    delay_ms: u32,
    #[prop_or_default]
    class: Classes,
}

/// Self-observing tile; each one latches independently of its neighbours.
#[function_component(BentoBox)]
fn bento_box(props: &BentoBoxProps) -> Html {
    html! {
        <Reveal class={props.class.clone()} delay_ms={props.delay_ms}>
            <Card elevation={Elevation::Medium} padding={Padding::None} hoverable=true class="h-full overflow-hidden">
                { for props.children.iter() }
            </Card>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct MetricsCarouselProps {
    metrics: &'static [Metric],
}

#[function_component(MetricsCarousel)]
fn metrics_carousel(props: &MetricsCarouselProps) -> Html {
    let config = use_site_config();
    let node = use_node_ref();
    let on_screen = use_in_view(node.clone(), VisibilityConfig::continuous(config.visibility_threshold));
    let carousel = use_carousel(props.metrics.to_vec(), config.carousel_interval_ms, on_screen);
    let Some(active) = carousel.active() else {
        return Html::default();
    };
    let accent = Accent::Slate.classes();

    html! {
        <div ref={node} class="md:w-2/3">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 md:gap-6" role="tablist">
                { for props.metrics.iter().enumerate().map(|(index, metric)| {
                    let selected = metric == active;
                    let onclick = {
                        let carousel = carousel.dispatcher();
                        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Select(index)))
                    };
                    html! {
                        <button
                            key={metric.label}
                            role="tab"
                            aria-selected={selected.to_string()}
                            class={classes!(
                                "text-center", "p-4", "rounded-lg", "border", "transition-all", "duration-300",
                                if selected {
                                    classes!("bg-slate-800", "border-slate-800", "text-white", "scale-105", "shadow-lg")
                                } else {
                                    classes!(accent.bg_soft, accent.border, "text-slate-800", "hover:bg-slate-200")
                                },
                            )}
                            {onclick}
                        >
                            <div class="text-3xl md:text-4xl font-bold mb-2">{ metric.value() }</div>
                            <div class="font-medium text-sm">{ metric.label }</div>
                        </button>
                    }
                }) }
            </div>
            <p class={classes!("mt-4", "text-center", "text-sm", accent.text)} aria-live="polite">{ active.detail }</p>
        </div>
    }
}

#[function_component(AiTechnology)]
pub fn ai_technology() -> Html {
    let Some(metrics) = renderable(METRICS, "metrics") else {
        return Html::default();
    };

    html! {
        <section id="technology" class="py-20 bg-slate-50">
            <div class="container mx-auto px-4 xl:max-w-7xl">
                <Reveal>
                    <SectionTitle
                        title="AI Technology"
                        subtitle="Our custom DeepSeek LLM model delivers intelligent healthcare insights optimized for Nigeria's unique environment"
                    />
                </Reveal>

                <div class="grid grid-cols-12 gap-4 md:gap-6">
                    <BentoBox class="col-span-12 lg:col-span-6" delay_ms={100}>
                        <div class="flex flex-col md:flex-row h-full">
                            <div class="bg-slate-800 text-white p-6 md:p-8 md:w-2/5 flex flex-col justify-center">
                                <span class="text-4xl mb-5">{"🧠"}</span>
                                <h3 class="text-xl md:text-2xl font-bold mb-3">{"DeepSeek LLM Model"}</h3>
                                <p class="text-slate-300 text-sm md:text-base">
                                    {"A compact language model tuned for healthcare administration workloads."}
                                </p>
                            </div>
                            <div class="p-6 md:p-8 md:w-3/5 grid grid-cols-2 gap-4">
                                { for LLM_HIGHLIGHTS.iter().map(|(icon, label)| html! {
                                    <div class="flex items-center gap-2">
                                        <span class="w-8 h-8 rounded-full bg-slate-100 flex items-center justify-center">{ *icon }</span>
                                        <span class="font-medium text-sm md:text-base text-slate-700">{ *label }</span>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </BentoBox>

                    <BentoBox class="col-span-12 lg:col-span-6" delay_ms={200}>
                        <div class="h-full bg-slate-700 text-white p-6 md:p-8 flex flex-col justify-between">
                            <div>
                                <span class="text-4xl mb-5 block">{"🛡️"}</span>
                                <h3 class="text-xl md:text-2xl font-bold mb-3">{"Data Security"}</h3>
                                <p class="text-slate-300 text-sm md:text-base mb-5">
                                    {"Patient data never leaves the device it was captured on."}
                                </p>
                            </div>
                            <ul class="space-y-2">
                                { for SECURITY_POINTS.iter().map(|point| html! {
                                    <li class="flex items-center gap-2 text-sm">{"✓ "}{ *point }</li>
                                }) }
                            </ul>
                        </div>
                    </BentoBox>

                    { for FEATURE_BOXES.iter().enumerate().map(|(index, feature)| html! {
                        <BentoBox
                            key={feature.title}
                            class="col-span-12 md:col-span-6 lg:col-span-4"
                            delay_ms={300 + index as u32 * 100}
                        >
                            <div class="p-6">
                                <div class="flex items-center gap-3 mb-4">
                                    <span class="w-10 h-10 rounded-full bg-slate-100 flex items-center justify-center">{ feature.icon }</span>
                                    <h3 class="text-lg md:text-xl font-bold text-slate-800">{ feature.title }</h3>
                                </div>
                                <div class="space-y-3">
                                    { for feature.lines.iter().map(|line| html! {
                                        <div class="flex items-start">
                                            <span class="w-6 h-6 rounded-full bg-slate-100 flex-shrink-0 flex items-center justify-center mr-3 mt-0.5 text-xs">{"•"}</span>
                                            <span class="text-slate-700 text-sm">{ *line }</span>
                                        </div>
                                    }) }
                                </div>
                            </div>
                        </BentoBox>
                    }) }

                    <BentoBox class="col-span-12" delay_ms={600}>
                        <div class="flex flex-col md:flex-row items-center p-6 md:p-8">
                            <div class="md:w-1/3 mb-6 md:mb-0 md:pr-8">
                                <h3 class="text-xl md:text-2xl font-bold text-slate-800 mb-3">{"Performance Metrics"}</h3>
                                <p class="text-slate-600 text-sm md:text-base">
                                    {"Our AI outperforms traditional systems across all key metrics, delivering measurable benefits for healthcare providers"}
                                </p>
                            </div>
                            <MetricsCarousel metrics={metrics} />
                        </div>
                    </BentoBox>
                </div>
            </div>
        </section>
    }
}
