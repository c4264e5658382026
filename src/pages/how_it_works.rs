//! Static panel walking through the submission flow.

use leptos::prelude::*;

struct Step {
    title: &'static str,
    body: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        title: "Write your feedback",
        body: "Pick a category, rate your experience, and describe it in at least 20 \
               characters. Tags help the review office route it.",
    },
    Step {
        title: "Name a role if needed",
        body: "Selecting Instructor or Authorized Personnel files an encrypted complaint \
               alongside your feedback, with any evidence files you attach.",
    },
    Step {
        title: "Submit anonymously",
        body: "Your entry appears in the public lists immediately. Complaint reports are \
               downloadable only after identity verification.",
    },
];

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    view! {
        <section class="page page--howitworks">
            <h1 class="page__title">"How It Works"</h1>
            <ol class="steps">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, step)| {
                        view! {
                            <li class="steps__item">
                                <span class="steps__number">{index + 1}</span>
                                <div class="steps__body">
                                    <h3>{step.title}</h3>
                                    <p>{step.body}</p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
