use dioxus::prelude::{use_drop, use_hook};

use crate::platform::desktop::timer::DioxusTimer;
use crate::usecase::services::debounce::Debouncer;

/// Debounced callback bound to the calling component.
///
/// The debouncer is created once; every render swaps in the freshly built
/// `callback` and delay. A pending call is cancelled when the component is
/// dropped.
pub fn use_debounce<A: 'static>(
    delay_ms: i64,
    callback: impl Fn(A) + 'static,
) -> Debouncer<A, DioxusTimer> {
    let debouncer = use_hook(|| Debouncer::new(DioxusTimer, delay_ms, |_: A| {}));
    debouncer.set_callback(callback);
    debouncer.set_delay(delay_ms);

    let for_drop = debouncer.clone();
    use_drop(move || for_drop.cancel());

    debouncer
}
