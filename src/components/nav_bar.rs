//! Top navigation bar with page links and a mobile menu toggle.

use leptos::prelude::*;

use crate::app::navigate;
use crate::state::nav::Page;

#[component]
pub fn NavBar() -> impl IntoView {
    let page = expect_context::<RwSignal<Page>>();
    let menu_open = RwSignal::new(false);

    view! {
        <header class="nav">
            <div class="nav__brand" on:click=move |_| navigate(page, Page::Home)>
                <span class="nav__logo">"🎓"</span>
                <span class="nav__name">"NBSC "<strong>"Feedback"</strong></span>
            </div>
            <button
                class="nav__hamburger"
                on:click=move |_| menu_open.update(|open| *open = !*open)
                title="Toggle menu"
            >
                "☰"
            </button>
            <ul class="nav__links" class:nav__links--open=move || menu_open.get()>
                {Page::ALL
                    .iter()
                    .copied()
                    .map(|target| {
                        view! {
                            <li>
                                <a
                                    href=format!("#{}", target.key())
                                    class="nav__link"
                                    class:nav__link--active=move || page.get() == target
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        navigate(page, target);
                                        menu_open.set(false);
                                    }
                                >
                                    {target.title()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </header>
    }
}
