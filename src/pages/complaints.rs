//! Panel listing personnel complaints.

use leptos::prelude::*;

use crate::components::complaint_card::ComplaintCard;
use crate::state::store::ComplaintStore;
use crate::state::verify::VerifyFlow;

#[component]
pub fn ComplaintsPage() -> impl IntoView {
    let complaints = expect_context::<RwSignal<ComplaintStore>>();
    let verify = expect_context::<RwSignal<VerifyFlow>>();

    let on_download = Callback::new(move |()| verify.update(VerifyFlow::open));

    view! {
        <section class="page page--complaints">
            <h1 class="page__title">"Complaints"</h1>
            <p class="page__lead">
                "Complaints name an instructor or authorized personnel. Each report is \
                 released only after the verification steps behind its download button."
            </p>
            <div class="complaints-list">
                {move || {
                    complaints
                        .get()
                        .entries()
                        .iter()
                        .cloned()
                        .map(|entry| view! { <ComplaintCard entry=entry on_download=on_download/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
