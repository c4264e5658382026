//! Static panel describing the program.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page page--about">
            <h1 class="page__title">"About"</h1>
            <p class="page__lead">
                "The NBSC anonymous feedback program gives every student a direct, identity-free \
                 channel to the administration. Nothing submitted here carries a name, student \
                 number, or login."
            </p>
            <div class="info-grid">
                <div class="info-card">
                    <h3>"Anonymous by default"</h3>
                    <p>
                        "No account is required and no identifying details are collected with a \
                         submission."
                    </p>
                </div>
                <div class="info-card">
                    <h3>"Complaints stay sealed"</h3>
                    <p>
                        "A complaint naming an instructor or authorized personnel is marked \
                         encrypted and its report is released only through the verification steps."
                    </p>
                </div>
                <div class="info-card">
                    <h3>"Everything is reviewed"</h3>
                    <p>
                        "Feedback is read by the student affairs office each week and routed to \
                         the department it concerns."
                    </p>
                </div>
            </div>
        </section>
    }
}
