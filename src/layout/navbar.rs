use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config::use_site_config;
use crate::content::navigation::{NavLink, NAV_LINKS};
use crate::hooks::selection::AccordionAction;
use crate::hooks::{use_accordion, use_outside_click, use_scroll_snapshot};
use crate::motion::selection::is_activation_key;
use crate::motion::scroll::ScrollSnapshot;

/// Classes for the fixed bar itself, derived from the latest scroll sample.
pub fn bar_classes(snapshot: &ScrollSnapshot, scrolled_threshold: f64, menu_open: bool) -> Classes {
    let scrolled = snapshot.offset > scrolled_threshold;
    classes!(
        "fixed",
        "top-0",
        "inset-x-0",
        "z-50",
        "transition-all",
        "duration-300",
        if scrolled {
            "bg-white/95 backdrop-blur shadow-md py-2"
        } else {
            "bg-transparent py-4"
        },
        // An open mobile menu keeps the bar on screen.
        (snapshot.nav_hidden && !menu_open).then_some("-translate-y-full"),
    )
}

pub fn link_is_active(link: &NavLink, snapshot: &ScrollSnapshot) -> bool {
    link.section.is_some() && link.section == snapshot.active_section
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let config = use_site_config();
    let snapshot = use_scroll_snapshot();
    let menu_open = use_state(|| false);
    let dropdowns = use_accordion::<&'static str>();
    let nav_ref = use_node_ref();

    let close_all = {
        let menu_open = menu_open.clone();
        let dropdowns = dropdowns.dispatcher();
        Callback::from(move |_: ()| {
            menu_open.set(false);
            dropdowns.dispatch(AccordionAction::Close);
        })
    };

    use_outside_click(
        nav_ref.clone(),
        *menu_open || dropdowns.open().is_some(),
        close_all.clone(),
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let link_items = NAV_LINKS
        .iter()
        .map(|link| {
            let active = link_is_active(link, &snapshot);
            match link.dropdown {
                Some(items) => {
                    let open = dropdowns.is_open(&link.id);
                    let id = link.id;
                    let onclick = {
                        let dropdowns = dropdowns.dispatcher();
                        Callback::from(move |_: MouseEvent| dropdowns.dispatch(AccordionAction::Toggle(id)))
                    };
                    let onkeydown = {
                        let dropdowns = dropdowns.dispatcher();
                        Callback::from(move |e: KeyboardEvent| {
                            if is_activation_key(&e.key()) {
                                e.prevent_default();
                                dropdowns.dispatch(AccordionAction::Toggle(id));
                            } else if e.key() == "Escape" {
                                dropdowns.dispatch(AccordionAction::Close);
                            }
                        })
                    };
                    html! {
                        <div class="relative" key={link.id}>
                            <div
                                role="button"
                                tabindex="0"
                                aria-expanded={open.to_string()}
                                class="flex items-center gap-1 px-3 py-2 text-slate-700 hover:text-blue-600 cursor-pointer"
                                {onclick}
                                {onkeydown}
                            >
                                { link.title }
                                <span class={classes!("transition-transform", open.then_some("rotate-180"))}>{"▾"}</span>
                            </div>
                            if open {
                                <div class="lg:absolute lg:left-0 lg:mt-2 w-64 bg-white rounded-lg shadow-lg border border-slate-100 py-2">
                                    { for items.iter().map(|item| html! {
                                        <a
                                            href={item.url}
                                            class="block px-4 py-2 hover:bg-slate-50"
                                            onclick={close_all.reform(|_: MouseEvent| ())}
                                        >
                                            <div class="font-medium text-slate-800">{ item.title }</div>
                                            <div class="text-xs text-slate-500">{ item.description }</div>
                                        </a>
                                    }) }
                                </div>
                            }
                        </div>
                    }
                }
                None => html! {
                    <a
                        key={link.id}
                        href={link.href}
                        class={classes!(
                            "px-3",
                            "py-2",
                            "transition-colors",
                            if active { "text-blue-600 font-semibold" } else { "text-slate-700 hover:text-blue-600" },
                        )}
                        aria-current={active.then_some("true")}
                        onclick={close_all.reform(|_: MouseEvent| ())}
                    >
                        { link.title }
                    </a>
                },
            }
        })
        .collect::<Html>();

    html! {
        <nav ref={nav_ref} class={bar_classes(&snapshot, config.nav_scrolled_threshold, *menu_open)}>
            <div class="max-w-7xl mx-auto px-4 flex items-center justify-between">
                <a href="#healthcare-hero" class="text-2xl font-bold text-blue-700">{"Magani"}</a>
                <button
                    class="lg:hidden p-2 text-slate-700"
                    aria-label="Toggle menu"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
                <div class={classes!(
                    "lg:flex",
                    "lg:items-center",
                    "lg:gap-2",
                    if *menu_open {
                        "flex flex-col absolute top-full inset-x-0 bg-white shadow-lg p-4"
                    } else {
                        "hidden"
                    },
                )}>
                    { link_items }
                    <a
                        href="#contact"
                        class="ml-0 lg:ml-4 mt-2 lg:mt-0 px-4 py-2 rounded-lg bg-blue-600 text-white hover:bg-blue-700"
                        onclick={close_all.reform(|_: MouseEvent| ())}
                    >
                        {"Book a Demo"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scroll::ScrollDirection;

    fn snapshot(offset: f64, nav_hidden: bool, active: Option<&'static str>) -> ScrollSnapshot {
        ScrollSnapshot {
            offset,
            direction: if nav_hidden { ScrollDirection::Down } else { ScrollDirection::Up },
            past_threshold: offset > 300.0,
            nav_hidden,
            active_section: active,
        }
    }

    #[test]
    fn bar_hides_only_when_menu_is_closed() {
        let hidden = snapshot(500.0, true, None);
        assert!(bar_classes(&hidden, 20.0, false).contains("-translate-y-full"));
        assert!(!bar_classes(&hidden, 20.0, true).contains("-translate-y-full"));
    }

    #[test]
    fn bar_compacts_past_scrolled_threshold() {
        assert!(bar_classes(&snapshot(10.0, false, None), 20.0, false).contains("bg-transparent"));
        assert!(bar_classes(&snapshot(21.0, false, None), 20.0, false).contains("shadow-md"));
    }

    #[test]
    fn only_section_links_can_be_active() {
        let at_products = snapshot(900.0, false, Some("products"));
        let active: Vec<_> = NAV_LINKS
            .iter()
            .filter(|l| link_is_active(l, &at_products))
            .map(|l| l.id)
            .collect();
        assert_eq!(active, vec!["products"]);
        assert!(NAV_LINKS.iter().all(|l| !link_is_active(l, &ScrollSnapshot::default())));
    }
}
