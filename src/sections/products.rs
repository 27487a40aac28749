use yew::prelude::*;

use crate::common::{Button, Card, SectionTitle};
use crate::content::products::{Product, PRODUCTS};
use crate::content::renderable;
use crate::hooks::{use_in_view, use_reveal_motion, use_tab_group, use_timeout};
use crate::motion::visibility::VisibilityConfig;
use crate::theme::{Accent, ButtonSize, ButtonVariant, Elevation, Padding};

const PRODUCT_BENEFITS: [&str; 3] = [
    "Reduce costs by up to 25%",
    "Improve efficiency by 40%",
    "Enhance patient satisfaction",
];

#[derive(Properties, PartialEq)]
struct ProductIconProps {
    product: Product,
    class: &'static str,
}

#[function_component(ProductIcon)]
fn product_icon(props: &ProductIconProps) -> Html {
    html! {
        <img src={props.product.icon} alt={props.product.icon_alt()} class={props.class} />
    }
}

#[derive(Properties, PartialEq)]
struct ProductDetailsProps {
    product: Product,
}

/// Keyed by product id, so every tab change mounts a fresh panel and plays
/// the entrance again.
#[function_component(ProductDetails)]
fn product_details(props: &ProductDetailsProps) -> Html {
    let motion = use_reveal_motion().with_offset(10.0).with_duration(500);
    let shown = use_state(|| false);
    {
        let shown = shown.clone();
        use_timeout(!*shown, 0, Callback::from(move |_| shown.set(true)));
    }
    let item = props.product.item;
    let accent = Accent::Indigo.classes();

    html! {
        <div style={motion.style(*shown, 0).css()}>
            <Card elevation={Elevation::Large} padding={Padding::None} class="overflow-hidden">
                <div class="bg-gradient-to-r from-indigo-600 to-blue-600 h-16 sm:h-20 relative">
                    <div class="absolute -bottom-8 left-8 w-16 h-16 sm:w-20 sm:h-20 bg-white rounded-full shadow-lg flex items-center justify-center border-4 border-white">
                        <ProductIcon product={props.product} class="w-10 h-10 object-contain" />
                    </div>
                </div>
                <div class="p-6 sm:p-8 pt-10 sm:pt-12">
                    <div class="mb-8 sm:mb-10">
                        <h3 class="text-2xl sm:text-3xl font-bold text-slate-800 mb-4">{ item.title }</h3>
                        <p class="text-slate-600">{ item.description }</p>
                    </div>
                    <div class="mb-8">
                        <h4 class="text-lg font-semibold text-slate-800 mb-4">{"Key Features"}</h4>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            { for item.features.iter().enumerate().map(|(index, feature)| html! {
                                <div
                                    key={index}
                                    class="flex items-start p-4 rounded-lg border border-slate-100 hover:border-indigo-100 hover:bg-indigo-50/30 transition-colors duration-200"
                                    style={motion.style(*shown, index as u32 * 50).css()}
                                >
                                    <span class={classes!("flex-shrink-0", "w-8", "h-8", "rounded-full", accent.bg_soft, "flex", "items-center", "justify-center", "mr-3")}>{"🛡️"}</span>
                                    <p class="text-slate-700">{ *feature }</p>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="mb-8 border-t border-slate-100 pt-8">
                        <h4 class="text-lg font-semibold text-slate-800 mb-4">{"Benefits"}</h4>
                        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                            { for PRODUCT_BENEFITS.iter().map(|benefit| html! {
                                <div class="bg-slate-50 p-4 rounded-lg border border-slate-100">
                                    <p class="text-slate-700 font-medium">{ *benefit }</p>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="flex flex-wrap gap-4 justify-end border-t border-slate-100 pt-6">
                        <Button variant={ButtonVariant::Outline}>{"View Documentation"}</Button>
                        <Button href="#contact">{"Get Started"}</Button>
                    </div>
                </div>
            </Card>
        </div>
    }
}

#[function_component(Products)]
pub fn products() -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), VisibilityConfig::once(0.1));
    let motion = use_reveal_motion();
    let tabs = use_tab_group(PRODUCTS.iter().map(|p| p.item.id).collect::<Vec<_>>());

    let Some(products) = renderable(PRODUCTS, "products") else {
        return Html::default();
    };
    let active = tabs
        .active()
        .and_then(|id| products.iter().find(|p| p.item.id == *id))
        .unwrap_or(&products[0]);

    let select = |id: &'static str| {
        let tabs = tabs.dispatcher();
        Callback::from(move |_: MouseEvent| tabs.dispatch(id))
    };

    html! {
        <section id="products" ref={node} class="py-20 bg-gradient-to-b from-slate-50 to-white">
            <div class="container mx-auto px-4 xl:max-w-6xl">
                <div style={motion.style(visible, 0).css()}>
                    <SectionTitle
                        title="Our Products"
                        subtitle="Powerful technologies designed to address critical healthcare challenges and optimize operations"
                    />
                </div>

                <div style={motion.style(visible, 200).css()}>
                    <div class="mb-8 md:mb-12 flex items-center justify-center">
                        <div class="inline-flex p-1.5 bg-slate-100 rounded-xl" role="tablist">
                            { for products.iter().map(|product| {
                                let selected = tabs.is_active(&product.item.id);
                                html! {
                                    <button
                                        key={product.item.id}
                                        role="tab"
                                        aria-pressed={selected.to_string()}
                                        aria-label={format!("View {} details", product.item.title)}
                                        class={classes!(
                                            "px-4", "py-2.5", "rounded-lg", "text-sm", "sm:text-base", "font-medium", "transition-all", "duration-200",
                                            if selected { "bg-white text-indigo-700 shadow-sm" } else { "text-slate-600 hover:text-slate-900" },
                                        )}
                                        onclick={select(product.item.id)}
                                    >
                                        { product.item.title }
                                    </button>
                                }
                            }) }
                        </div>
                    </div>

                    <ProductDetails key={active.item.id} product={*active} />

                    <div class="mt-10 md:hidden space-y-4">
                        <h4 class="text-lg font-medium text-slate-700 mb-4">{"More Solutions"}</h4>
                        { for products.iter().filter(|p| p.item.id != active.item.id).take(2).map(|product| html! {
                            <div key={product.item.id} class="cursor-pointer" onclick={select(product.item.id)}>
                                <Card elevation={Elevation::Small} hoverable=true>
                                    <div class="flex items-center">
                                        <span class={classes!("w-10", "h-10", "rounded-full", Accent::Indigo.classes().bg_soft, "flex", "items-center", "justify-center", "mr-3")}>
                                            <ProductIcon product={*product} class="w-6 h-6 object-contain" />
                                        </span>
                                        <h5 class="font-medium text-slate-800">{ product.item.title }</h5>
                                    </div>
                                </Card>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="mt-16 sm:mt-20 text-center" style={motion.style(visible, 300).css()}>
                    <div class="inline-flex items-center gap-2 px-6 py-3 bg-gradient-to-r from-indigo-50 to-blue-50 rounded-xl border border-indigo-100 shadow-sm">
                        <span class="text-lg font-semibold text-indigo-700">{"Ready to transform your healthcare operations?"}</span>
                    </div>
                    <p class="mt-4 mb-6 text-slate-600 max-w-2xl mx-auto">
                        {"Our suite of products works seamlessly together to create an integrated solution that addresses your organization's unique challenges."}
                    </p>
                    <Button href="#contact" size={ButtonSize::Large}>{"Schedule a Demo"}</Button>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn product_icon_renders_an_image_not_its_path() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        yew::Renderer::<ProductIcon>::with_root_and_props(
            root.clone(),
            ProductIconProps {
                product: PRODUCTS[0],
                class: "w-10 h-10 object-contain",
            },
        )
        .render();
        TimeoutFuture::new(0).await;

        let img = root.query_selector("img").unwrap().expect("icon image");
        assert_eq!(img.get_attribute("src").as_deref(), Some("/images/verification-icon.svg"));
        assert_eq!(img.get_attribute("alt").as_deref(), Some("Verification Service icon"));
        assert_eq!(root.text_content().unwrap_or_default(), "");
    }
}
