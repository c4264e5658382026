//! Card rendering one feedback entry.

use leptos::prelude::*;

use crate::state::entries::FeedbackEntry;
use crate::util::stars::star_line;

#[component]
pub fn FeedbackCard(entry: FeedbackEntry) -> impl IntoView {
    let tags = entry.tags.clone();

    view! {
        <div class="feedback-card">
            <div class="feedback-card__header">
                <span class="feedback-card__cat">{entry.category.label()}</span>
                <span class="feedback-card__date">{entry.date.clone()}</span>
            </div>
            <div class="feedback-card__stars">{star_line(entry.rating)}</div>
            <p class="feedback-card__message">{entry.message.clone()}</p>
            <div class="feedback-card__tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag-chip">{tag}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
