//! Panel listing previously submitted feedback, newest first.

use leptos::prelude::*;

use crate::components::feedback_card::FeedbackCard;
use crate::state::store::FeedbackStore;

#[component]
pub fn PreviousPage() -> impl IntoView {
    let feedback = expect_context::<RwSignal<FeedbackStore>>();

    view! {
        <section class="page page--previous">
            <h1 class="page__title">"Previous Feedback"</h1>
            <p class="page__lead">"What other students have already shared."</p>
            <div class="feedback-list">
                {move || {
                    feedback
                        .get()
                        .entries()
                        .iter()
                        .cloned()
                        .map(|entry| view! { <FeedbackCard entry=entry/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
