//! Landing panel with calls to action and live store counts.

use leptos::prelude::*;

use crate::app::navigate;
use crate::state::nav::Page;
use crate::state::store::{ComplaintStore, FeedbackStore};

#[component]
pub fn HomePage() -> impl IntoView {
    let page = expect_context::<RwSignal<Page>>();
    let feedback = expect_context::<RwSignal<FeedbackStore>>();
    let complaints = expect_context::<RwSignal<ComplaintStore>>();

    view! {
        <section class="page page--home">
            <div class="hero">
                <h1 class="hero__title">"Your voice, protected."</h1>
                <p class="hero__lead">
                    "Share honest feedback about campus life and academics at NBSC. Submissions \
                     are anonymous, and complaints about personnel stay sealed until a verified \
                     reviewer opens them."
                </p>
                <div class="hero__actions">
                    <button class="btn btn--primary" on:click=move |_| navigate(page, Page::Feedback)>
                        "Give Feedback"
                    </button>
                    <button class="btn" on:click=move |_| navigate(page, Page::Complaints)>
                        "View Complaints"
                    </button>
                </div>
            </div>
            <div class="stat-row">
                <div class="stat">
                    <span class="stat__value">{move || feedback.get().len()}</span>
                    <span class="stat__label">"feedback entries"</span>
                </div>
                <div class="stat">
                    <span class="stat__value">{move || complaints.get().len()}</span>
                    <span class="stat__label">"complaints filed"</span>
                </div>
                <div class="stat">
                    <span class="stat__value">"100%"</span>
                    <span class="stat__label">"anonymous"</span>
                </div>
            </div>
        </section>
    }
}
