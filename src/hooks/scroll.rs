use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::use_site_config;
use crate::error::{Result, SiteError};
use crate::motion::lifecycle::{MountGuard, MountToken};
use crate::motion::observable::Observable;
use crate::motion::scroll::{ScrollSnapshot, ScrollTracker, SectionAnchor};
use crate::motion::throttle::{Throttle, ThrottleDecision};

/// The page's one scroll tracker. Only the provider writes to it.
pub struct ScrollStore {
    tracker: RefCell<ScrollTracker>,
    throttle: RefCell<Throttle>,
    anchors: Vec<&'static str>,
    snapshot: Observable<ScrollSnapshot>,
}

impl ScrollStore {
    pub fn new(tracker: ScrollTracker, throttle: Throttle, anchors: Vec<&'static str>) -> Self {
        Self {
            tracker: RefCell::new(tracker),
            throttle: RefCell::new(throttle),
            anchors,
            snapshot: Observable::new(ScrollSnapshot::default()),
        }
    }

    pub fn snapshot(&self) -> &Observable<ScrollSnapshot> {
        &self.snapshot
    }

    fn measure_anchors(&self) -> Vec<SectionAnchor> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        self.anchors
            .iter()
            .filter_map(|id| {
                let element = document.get_element_by_id(id)?;
                let element = element.dyn_into::<HtmlElement>().ok()?;
                Some(SectionAnchor {
                    id,
                    top: f64::from(element.offset_top()),
                })
            })
            .collect()
    }

    /// Reads the live scroll offset and publishes a new snapshot.
    fn sample(&self) -> Result<()> {
        let window = web_sys::window().ok_or(SiteError::MissingCapability("window"))?;
        let offset = window.scroll_y()?;
        let anchors = self.measure_anchors();
        let snapshot = self.tracker.borrow_mut().update(offset, &anchors);
        self.snapshot.set(snapshot);
        Ok(())
    }
}

#[derive(Clone)]
pub struct ScrollContext(pub Rc<ScrollStore>);

impl PartialEq for ScrollContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}

fn sample_or_warn(store: &ScrollStore) {
    if let Err(e) = store.sample() {
        warn!("Scroll sample failed: {}", e);
    }
}

/// Timer for the throttle's trailing run. The fired Timeout stays here until
/// the next one replaces it, a leading run cancels it, or teardown drops it.
#[derive(Default)]
struct PendingFlush {
    timeout: RefCell<Option<Timeout>>,
}

impl PendingFlush {
    fn cancel(&self) {
        self.timeout.borrow_mut().take();
    }
}

/// Handles one raw scroll/resize event: runs immediately when the throttle
/// allows, otherwise makes sure a single trailing sample is pending.
fn on_scroll_event(store: &Rc<ScrollStore>, pending: &Rc<PendingFlush>, token: &MountToken) {
    if !token.is_alive() {
        return;
    }
    let decision = store.throttle.borrow_mut().try_run(now_ms());
    match decision {
        ThrottleDecision::Run => {
            pending.cancel();
            sample_or_warn(store);
        }
        ThrottleDecision::Defer { remaining_ms } => {
            if !store.throttle.borrow_mut().arm_trailing() {
                return;
            }
            let timeout = {
                let store = store.clone();
                let token = token.clone();
                Timeout::new(remaining_ms, move || {
                    token.run(|| {
                        if store.throttle.borrow_mut().fire_trailing(now_ms()) {
                            sample_or_warn(&store);
                        }
                    });
                })
            };
            *pending.timeout.borrow_mut() = Some(timeout);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollTrackerProps {
    /// Section ids considered for active-section highlighting, in page order.
    pub anchors: Vec<&'static str>,
    pub children: Children,
}

#[function_component(ScrollTrackerProvider)]
pub fn scroll_tracker_provider(props: &ScrollTrackerProps) -> Html {
    let config = use_site_config();
    let store = {
        let anchors = props.anchors.clone();
        let config = config.clone();
        use_state(move || {
            Rc::new(ScrollStore::new(
                ScrollTracker::new(config.nav_hide_threshold, config.nav_height),
                Throttle::new(config.scroll_throttle_ms),
                anchors,
            ))
        })
    };

    {
        let store = (*store).clone();
        use_effect_with_deps(
            move |_| {
                let guard = MountGuard::new();
                let pending = Rc::new(PendingFlush::default());
                let window = web_sys::window();

                let listener = {
                    let store = store.clone();
                    let pending = pending.clone();
                    let token = guard.token();
                    Closure::<dyn Fn()>::new(move || on_scroll_event(&store, &pending, &token))
                };

                if let Some(window) = &window {
                    for event in ["scroll", "resize"] {
                        if let Err(e) = window
                            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
                        {
                            warn!("Could not listen for {}: {:?}", event, e);
                        }
                    }
                }
                // Initial position, e.g. after a reload halfway down the page.
                sample_or_warn(&store);

                move || {
                    guard.teardown();
                    if let Some(window) = window {
                        for event in ["scroll", "resize"] {
                            let _ = window
                                .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
                        }
                    }
                    pending.cancel();
                    debug!("Scroll tracker torn down");
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<ScrollContext> context={ScrollContext((*store).clone())}>
            { for props.children.iter() }
        </ContextProvider<ScrollContext>>
    }
}

/// Latest published scroll state; the default snapshot outside a provider.
#[hook]
pub fn use_scroll_snapshot() -> ScrollSnapshot {
    let context = use_context::<ScrollContext>();
    let snapshot = use_state(|| {
        context
            .as_ref()
            .map(|c| c.0.snapshot().get())
            .unwrap_or_default()
    });

    {
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |context| {
                let subscription = context.as_ref().map(|ScrollContext(store)| {
                    snapshot.set(store.snapshot().get());
                    store.snapshot().subscribe(move |s| snapshot.set(*s))
                });
                move || drop(subscription)
            },
            context,
        );
    }

    *snapshot
}
