//! Application Context
//!
//! UI-only signals provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long the overall figure stays enlarged after Reset All
const PULSE_MS: u32 = 280;

#[derive(Clone, Copy)]
pub struct UiContext {
    /// Overall display is pulsing - read
    pub pulse: ReadSignal<bool>,
    /// Overall display is pulsing - write
    set_pulse: WriteSignal<bool>,
}

impl UiContext {
    pub fn new(pulse: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            pulse: pulse.0,
            set_pulse: pulse.1,
        }
    }

    /// Briefly enlarge the overall figure as confirmation feedback
    pub fn flash_overall(&self) {
        let set_pulse = self.set_pulse;
        set_pulse.set(true);
        spawn_local(async move {
            TimeoutFuture::new(PULSE_MS).await;
            set_pulse.set(false);
        });
    }
}

pub fn use_ui_context() -> UiContext {
    use_context::<UiContext>().expect("UiContext should be provided")
}
