//! Framework-free state machines behind the page's scroll and interaction
//! behaviour. Nothing in here touches the DOM, so it runs (and is tested)
//! natively; the `hooks` module binds it to browser events.

pub mod lifecycle;
pub mod observable;
pub mod reveal;
pub mod scroll;
pub mod selection;
pub mod stagger;
pub mod throttle;
pub mod visibility;
