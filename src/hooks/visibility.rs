use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::Result;
use crate::motion::lifecycle::MountGuard;
use crate::motion::visibility::{VisibilityConfig, VisibilityTracker};

pub fn intersection_observer_supported() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe<F>(element: &Element, tracker: VisibilityTracker, mut on_change: F) -> Result<ObserverHandle>
where
    F: FnMut(bool) + 'static,
{
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(tracker.config().threshold));
    options.set_root_margin(&tracker.config().root_margin);

    let tracker = Rc::new(RefCell::new(tracker));
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let change = tracker
                    .borrow_mut()
                    .on_entry(entry.is_intersecting(), entry.intersection_ratio());
                if let Some(visible) = change {
                    on_change(visible);
                }
                if tracker.borrow().is_detached() {
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);
    Ok(ObserverHandle {
        observer,
        _callback: callback,
    })
}

/// `false` until `node` crosses the configured threshold. Without
/// IntersectionObserver support it is `true` from the first render.
#[hook]
pub fn use_in_view(node: NodeRef, config: VisibilityConfig) -> bool {
    let supported = *use_state(intersection_observer_supported);
    let visible = {
        let config = config.clone();
        use_state(move || VisibilityTracker::for_environment(config, supported).is_visible())
    };

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, config)| {
                let guard = MountGuard::new();
                let mut handle = None;
                let mut tracker = VisibilityTracker::for_environment(config.clone(), supported);

                if tracker.is_detached() {
                    warn!("IntersectionObserver unavailable, showing content immediately");
                } else if let Some(element) = node.cast::<Element>() {
                    let on_change = {
                        let token = guard.token();
                        let visible = visible.clone();
                        move |v: bool| {
                            token.run(|| visible.set(v));
                        }
                    };
                    match observe(&element, tracker.clone(), on_change) {
                        Ok(h) => handle = Some(h),
                        Err(e) => {
                            warn!("Could not observe element, showing it: {}", e);
                            tracker.fail_open();
                            visible.set(tracker.is_visible());
                        }
                    }
                } else {
                    debug!("Observed node was never attached");
                }

                move || {
                    guard.teardown();
                    drop(handle);
                }
            },
            (node, config),
        );
    }

    *visible
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browsers_expose_intersection_observer() {
        assert!(intersection_observer_supported());
    }

    #[wasm_bindgen_test]
    fn observer_handle_disconnects_on_drop() {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&element).unwrap();

        let handle = observe(&element, VisibilityTracker::new(VisibilityConfig::default()), |_| {}).unwrap();
        drop(handle);
    }
}
