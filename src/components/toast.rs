//! Toast host owning the auto-hide timer.
//!
//! DESIGN
//! ======
//! Exactly one hide timer is live at a time: each notify bumps the state's
//! `seq`, and the effect replaces the pending timeout handle, which cancels
//! the previous one on drop.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "csr")]
    {
        let pending = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);
        let seq = Memo::new(move |_| toast.get().seq);
        Effect::new(move || {
            if seq.get() == 0 {
                return;
            }
            let handle = gloo_timers::callback::Timeout::new(
                crate::state::toast::TOAST_HIDE_MS,
                move || toast.update(ToastState::hide),
            );
            pending.set_value(Some(handle));
        });
    }

    view! {
        <div class="toast" class:toast--show=move || toast.get().visible aria-live="polite">
            <div class="toast__title">{move || toast.get().title}</div>
            <div class="toast__msg">{move || toast.get().message}</div>
        </div>
    }
}
