use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::motion::lifecycle::MountGuard;

/// Fires `callback` once, `delay_ms` after `enabled` becomes true. Unmounting
/// or disabling first cancels it.
#[hook]
pub fn use_timeout(enabled: bool, delay_ms: u32, callback: Callback<()>) {
    use_effect_with_deps(
        move |(enabled, delay_ms)| {
            let guard = MountGuard::new();
            let timeout = enabled.then(|| {
                let token = guard.token();
                Timeout::new(*delay_ms, move || {
                    token.run(|| callback.emit(()));
                })
            });
            move || {
                guard.teardown();
                drop(timeout);
            }
        },
        (enabled, delay_ms),
    );
}
