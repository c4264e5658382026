//! Root component: context provision, panel switching, overlays.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stores and transient UI state are provided as `RwSignal` contexts so any
//! page or component can read and update them. Panels render from a single
//! `Page` signal, so exactly one panel and one nav marker are active at a
//! time.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::nav_bar::NavBar;
use crate::components::toast::ToastHost;
use crate::components::verify_modal::VerifyModal;
use crate::pages::about::AboutPage;
use crate::pages::complaints::ComplaintsPage;
use crate::pages::contact::ContactPage;
use crate::pages::feedback::FeedbackPage;
use crate::pages::home::HomePage;
use crate::pages::how_it_works::HowItWorksPage;
use crate::pages::previous::PreviousPage;
use crate::state::attachments::AttachmentList;
use crate::state::form::FeedbackForm;
use crate::state::nav::Page;
use crate::state::store::{ComplaintStore, FeedbackStore};
use crate::state::toast::ToastState;
use crate::state::verify::VerifyFlow;

/// Switch the active panel, mirror it into the location hash, and scroll the
/// viewport to top.
pub fn navigate(page: RwSignal<Page>, target: Page) {
    page.set(target);
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(target.key());
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Panel to open on load: the location hash when it names a page, else Home.
fn initial_page() -> Page {
    #[cfg(feature = "csr")]
    {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        if let Some(page) = Page::from_key(hash.trim_start_matches('#')) {
            return page;
        }
    }
    Page::default()
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let page = RwSignal::new(initial_page());
    let feedback = RwSignal::new(FeedbackStore::seeded());
    let complaints = RwSignal::new(ComplaintStore::seeded());
    let form = RwSignal::new(FeedbackForm::default());
    let attachments = RwSignal::new(AttachmentList::default());
    let toast = RwSignal::new(ToastState::default());
    let verify = RwSignal::new(VerifyFlow::default());

    provide_context(page);
    provide_context(feedback);
    provide_context(complaints);
    provide_context(form);
    provide_context(attachments);
    provide_context(toast);
    provide_context(verify);

    view! {
        <Title text="NBSC Anonymous Student Feedback"/>
        <NavBar/>
        <main class="app-main">
            {move || match page.get() {
                Page::Home => view! { <HomePage/> }.into_any(),
                Page::About => view! { <AboutPage/> }.into_any(),
                Page::HowItWorks => view! { <HowItWorksPage/> }.into_any(),
                Page::Feedback => view! { <FeedbackPage/> }.into_any(),
                Page::Previous => view! { <PreviousPage/> }.into_any(),
                Page::Complaints => view! { <ComplaintsPage/> }.into_any(),
                Page::Contact => view! { <ContactPage/> }.into_any(),
            }}
        </main>
        <ToastHost/>
        <VerifyModal/>
    }
}
