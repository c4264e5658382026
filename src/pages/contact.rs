//! Static contact panel.

use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page page--contact">
            <h1 class="page__title">"Contact"</h1>
            <p class="page__lead">
                "For anything that needs a reply, reach the student affairs office directly."
            </p>
            <ul class="contact-list">
                <li class="contact-list__item">
                    <span class="contact-list__label">"Office"</span>
                    <span>"Student Affairs, Admin Building Room 204"</span>
                </li>
                <li class="contact-list__item">
                    <span class="contact-list__label">"Email"</span>
                    <span>"studentaffairs@nbsc.edu.ph"</span>
                </li>
                <li class="contact-list__item">
                    <span class="contact-list__label">"Hours"</span>
                    <span>"Monday to Friday, 8:00 to 17:00"</span>
                </li>
            </ul>
        </section>
    }
}
