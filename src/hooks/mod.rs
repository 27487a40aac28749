//! Yew bindings for the `motion` state machines. Each hook owns its browser
//! registrations and releases them when the component unmounts.

pub mod motion;
pub mod outside_click;
pub mod scroll;
pub mod selection;
pub mod stagger;
pub mod timer;
pub mod visibility;

pub use motion::{use_motion_preference, use_reveal_motion};
pub use outside_click::use_outside_click;
pub use scroll::{use_scroll_snapshot, ScrollTrackerProvider};
pub use selection::{use_accordion, use_carousel, use_tab_group};
pub use stagger::use_staggered_reveal;
pub use timer::use_timeout;
pub use visibility::use_in_view;
