//! Card rendering one complaint entry with badges and evidence chips.

use leptos::prelude::*;

use crate::state::entries::{BadgeKind, ComplaintEntry};
use crate::util::files::icon_for;
use crate::util::stars::star_line;

fn badge_class(kind: BadgeKind) -> &'static str {
    match kind {
        BadgeKind::Instructor => "badge badge--instructor",
        BadgeKind::Admin => "badge badge--admin",
        BadgeKind::Verified => "badge badge--verified",
        BadgeKind::Public => "badge badge--public",
        BadgeKind::Private => "badge badge--private",
        BadgeKind::Encrypted => "badge badge--encrypted",
    }
}

#[component]
pub fn ComplaintCard(entry: ComplaintEntry, on_download: Callback<()>) -> impl IntoView {
    let badges = entry.badges();
    let evidence = entry.evidence.clone();

    view! {
        <div class="complaint-card">
            <div class="complaint-card__top">
                <div class="complaint-card__badges">
                    {badges
                        .into_iter()
                        .map(|badge| view! { <span class=badge_class(badge.kind)>{badge.label}</span> })
                        .collect_view()}
                </div>
                <span class="complaint-card__date">{entry.date.clone()}</span>
            </div>
            <div class="complaint-card__stars">{star_line(entry.rating)}</div>
            <p class="complaint-card__message">{entry.message.clone()}</p>
            {(!evidence.is_empty())
                .then(|| {
                    view! {
                        <div class="evidence-chips">
                            {evidence
                                .iter()
                                .map(|item| {
                                    view! {
                                        <span class="evidence-chip">
                                            {icon_for(&item.mime)}
                                            " "
                                            {item.name.clone()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
            <div class="complaint-card__actions">
                <button class="btn btn--pdf" on:click=move |_| on_download.run(())>
                    "🔐 Download Encrypted PDF"
                </button>
            </div>
        </div>
    }
}
