use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;

use crate::motion::lifecycle::MountGuard;

/// Emits `on_outside` for every mousedown whose target is not inside `node`.
#[hook]
pub fn use_outside_click(node: NodeRef, enabled: bool, on_outside: Callback<()>) {
    use_effect_with_deps(
        move |(node, enabled)| {
            let guard = MountGuard::new();
            let document = web_sys::window().and_then(|w| w.document());
            let listener = {
                let node = node.clone();
                let token = guard.token();
                Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
                    let Some(container) = node.cast::<Node>() else {
                        return;
                    };
                    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    if !container.contains(target.as_ref()) {
                        token.run(|| on_outside.emit(()));
                    }
                })
            };

            let attached = match (&document, *enabled) {
                (Some(document), true) => document
                    .add_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref())
                    .map_err(|e| warn!("Could not listen for outside clicks: {:?}", e))
                    .is_ok(),
                _ => false,
            };

            move || {
                guard.teardown();
                if let (Some(document), true) = (document, attached) {
                    let _ = document
                        .remove_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref());
                }
                drop(listener);
            }
        },
        (node, enabled),
    );
}
