//! Three-step identity-verification modal gating the simulated download.
//!
//! Every step is confirmatory UI state; nothing is authenticated. The final
//! step disables the action button, waits out the fixed download delay, then
//! closes the modal and fires the completion toast.

use leptos::prelude::*;

use crate::state::toast::ToastState;
use crate::state::verify::{STEP_COUNT, STEP_TITLES, VerifyFlow};

#[component]
pub fn VerifyModal() -> impl IntoView {
    let verify = expect_context::<RwSignal<VerifyFlow>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "csr")]
    let pending = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);

    let schedule_download = move || {
        #[cfg(feature = "csr")]
        {
            let handle = gloo_timers::callback::Timeout::new(
                crate::state::verify::DOWNLOAD_DELAY_MS,
                move || {
                    let mut payload = None;
                    verify.update(|flow| payload = flow.finish_download());
                    if let Some((title, message)) = payload {
                        toast.update(|t| t.notify(title, message));
                    }
                },
            );
            pending.set_value(Some(handle));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (verify, toast);
        }
    };

    let on_advance = move |_| {
        let mut started = false;
        verify.update(|flow| started = flow.advance());
        if started {
            schedule_download();
        }
    };

    view! {
        <Show when=move || verify.get().is_open()>
            <div class="verify-overlay" on:click=move |_| verify.update(VerifyFlow::close)>
                <div
                    class="verify-modal"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            verify.update(VerifyFlow::close);
                        }
                    }
                    tabindex="0"
                >
                    <h2 class="verify-modal__title">"Identity Verification"</h2>
                    <p class="verify-modal__subtitle">
                        "Each confirmation below is required before the encrypted report is released."
                    </p>
                    <ol class="verify-modal__steps">
                        {(0..STEP_COUNT)
                            .map(|index| {
                                view! {
                                    <li
                                        class="verify-step"
                                        class:verify-step--done=move || verify.get().step_done(index)
                                    >
                                        <span class="verify-step__mark">
                                            {move || if verify.get().step_done(index) { "✓" } else { "•" }}
                                        </span>
                                        <span class="verify-step__label">{STEP_TITLES[index]}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                    <button
                        class="btn btn--primary verify-modal__next"
                        disabled=move || !verify.get().button_enabled()
                        on:click=on_advance
                    >
                        {move || verify.get().button_label()}
                    </button>
                </div>
            </div>
        </Show>
    }
}
