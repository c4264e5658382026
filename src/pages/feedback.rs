//! Feedback form panel and its submission flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the form and attachment signals, runs the submission controller,
//! and on success prepends to the stores, shows the confirmation toast, and
//! resets transient state. Invalid submissions are discarded without
//! touching the form.

use leptos::prelude::*;

use crate::components::upload_zone::UploadZone;
use crate::state::attachments::AttachmentList;
use crate::state::entries::{Category, Role, Visibility};
use crate::state::form::{self, FeedbackForm, TAG_OPTIONS};
use crate::state::store::{ComplaintStore, FeedbackStore};
use crate::state::toast::ToastState;
use crate::util::dates::today_display;

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let form = expect_context::<RwSignal<FeedbackForm>>();
    let attachments = expect_context::<RwSignal<AttachmentList>>();
    let feedback = expect_context::<RwSignal<FeedbackStore>>();
    let complaints = expect_context::<RwSignal<ComplaintStore>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let evidence = attachments.get_untracked().evidence();
        let built = form::build_submission(&form.get_untracked(), evidence, today_display());
        let Some(submission) = built else { return };

        feedback.update(|store| store.prepend(submission.feedback));
        if let Some(complaint) = submission.complaint {
            complaints.update(|store| store.prepend(complaint));
        }
        toast.update(|t| {
            t.notify("Feedback Submitted!", "Your response has been recorded anonymously.");
        });
        form.update(FeedbackForm::reset);
        attachments.update(AttachmentList::clear);
    };

    view! {
        <section class="page page--feedback">
            <h1 class="page__title">"Give Feedback"</h1>
            <form class="feedback-form" on:submit=on_submit>
                <label class="field">
                    <span class="field__label">"Category"</span>
                    <select
                        class="field__select"
                        prop:value=move || {
                            form.get().category.map_or_else(String::new, |c| c.label().to_owned())
                        }
                        on:change=move |ev| {
                            form.update(|f| f.category = Category::from_label(&event_target_value(&ev)));
                        }
                    >
                        <option value="">"Select a category"</option>
                        {Category::ALL
                            .iter()
                            .copied()
                            .map(|category| {
                                view! { <option value=category.label()>{category.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>

                <fieldset class="field">
                    <legend class="field__label">"Rating"</legend>
                    <div class="rating-row">
                        {(1..=5u8)
                            .map(|value| {
                                view! {
                                    <label
                                        class="rating-option"
                                        class:rating-option--active=move || form.get().rating == Some(value)
                                    >
                                        <input
                                            class="rating-option__input"
                                            type="radio"
                                            name="rating"
                                            prop:checked=move || form.get().rating == Some(value)
                                            on:change=move |_| form.update(|f| f.rating = Some(value))
                                        />
                                        <span class="rating-option__star">
                                            {move || {
                                                if form.get().rating.is_some_and(|r| r >= value) { "★" } else { "☆" }
                                            }}
                                        </span>
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </fieldset>

                <fieldset class="field">
                    <legend class="field__label">"Tags"</legend>
                    <div class="check-group">
                        {TAG_OPTIONS
                            .iter()
                            .copied()
                            .map(|tag| {
                                view! {
                                    <label class="check-option">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || form.get().tags.iter().any(|t| t == tag)
                                            on:change=move |_| form.update(|f| f.toggle_tag(tag))
                                        />
                                        <span>{tag}</span>
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </fieldset>

                <label class="field">
                    <span class="field__label">"Message"</span>
                    <textarea
                        class="field__textarea"
                        rows="5"
                        placeholder="At least 20 characters. Be specific; it stays anonymous."
                        prop:value=move || form.get().message
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                </label>

                <fieldset class="field">
                    <legend class="field__label">"Visibility"</legend>
                    <div class="vis-row">
                        {Visibility::ALL
                            .iter()
                            .copied()
                            .map(|vis| {
                                view! {
                                    <label class="vis-option">
                                        <input
                                            type="radio"
                                            name="visibility"
                                            prop:checked=move || form.get().visibility == vis
                                            on:change=move |_| form.update(|f| f.visibility = vis)
                                        />
                                        <span>{vis.label()}</span>
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                    <p class="vis-help" inner_html=move || form.get().visibility.help_html()></p>
                </fieldset>

                <fieldset class="field">
                    <legend class="field__label">"Who is this about?"</legend>
                    <div class="role-row">
                        {Role::ALL
                            .iter()
                            .copied()
                            .map(|role| {
                                view! {
                                    <button
                                        type="button"
                                        class="role-pill"
                                        class:role-pill--selected=move || form.get().role == Some(role)
                                        on:click=move |_| form.update(|f| f.role = Some(role))
                                    >
                                        {role.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <p class="field__hint">
                        "Naming an instructor or authorized personnel files an encrypted \
                         complaint alongside your feedback."
                    </p>
                </fieldset>

                <fieldset class="field">
                    <legend class="field__label">"Evidence (optional)"</legend>
                    <UploadZone/>
                </fieldset>

                <button class="btn btn--primary feedback-form__submit" type="submit">
                    "Submit Anonymously"
                </button>
            </form>
        </section>
    }
}
