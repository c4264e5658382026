use super::*;

fn valid_form() -> FeedbackForm {
    FeedbackForm {
        category: Some(Category::Facilities),
        rating: Some(4),
        tags: Vec::new(),
        message: "The gym showers run cold every morning.".to_owned(),
        visibility: Visibility::Public,
        role: None,
    }
}

fn date() -> String {
    "Feb 3, 2026".to_owned()
}

// =============================================================
// Validation order and discards
// =============================================================

#[test]
fn missing_category_discards_the_submission() {
    let mut form = valid_form();
    form.category = None;
    assert_eq!(build_submission(&form, Vec::new(), date()), None);
}

#[test]
fn missing_rating_discards_the_submission() {
    let mut form = valid_form();
    form.rating = None;
    assert_eq!(build_submission(&form, Vec::new(), date()), None);
}

#[test]
fn nineteen_char_message_is_discarded() {
    let mut form = valid_form();
    form.message = "exactly 19 chars !!".to_owned();
    assert_eq!(form.message.chars().count(), 19);
    assert_eq!(build_submission(&form, Vec::new(), date()), None);
}

#[test]
fn whitespace_padding_does_not_rescue_a_short_message() {
    let mut form = valid_form();
    form.message = "      short message      ".to_owned();
    assert_eq!(build_submission(&form, Vec::new(), date()), None);
}

#[test]
fn twenty_char_message_is_accepted() {
    let mut form = valid_form();
    form.message = "exactly twenty chars".to_owned();
    assert_eq!(form.message.chars().count(), 20);
    assert!(build_submission(&form, Vec::new(), date()).is_some());
}

// =============================================================
// Entry construction
// =============================================================

#[test]
fn general_submission_produces_no_complaint() {
    let submission = build_submission(&valid_form(), Vec::new(), date()).unwrap();
    assert_eq!(submission.feedback.category, Category::Facilities);
    assert_eq!(submission.feedback.rating, 4);
    assert_eq!(submission.complaint, None);
}

#[test]
fn unselected_tags_default_to_general() {
    let submission = build_submission(&valid_form(), Vec::new(), date()).unwrap();
    assert_eq!(submission.feedback.tags, vec!["General".to_owned()]);
}

#[test]
fn selected_tags_are_kept_in_order() {
    let mut form = valid_form();
    form.tags = vec!["Urgent".to_owned(), "Complaint".to_owned()];
    let submission = build_submission(&form, Vec::new(), date()).unwrap();
    assert_eq!(submission.feedback.tags, vec!["Urgent".to_owned(), "Complaint".to_owned()]);
}

#[test]
fn message_is_trimmed_in_the_entry() {
    let mut form = valid_form();
    form.message = "  The gym showers run cold every morning.  ".to_owned();
    let submission = build_submission(&form, Vec::new(), date()).unwrap();
    assert_eq!(submission.feedback.message, "The gym showers run cold every morning.");
}

#[test]
fn instructor_submission_builds_an_encrypted_complaint() {
    let mut form = valid_form();
    form.role = Some(Role::Instructor);
    form.visibility = Visibility::Private;
    let evidence = vec![EvidenceRef { name: "clip.mp4".to_owned(), mime: "video/mp4".to_owned() }];

    let submission = build_submission(&form, evidence.clone(), date()).unwrap();
    let complaint = submission.complaint.expect("personnel role files a complaint");
    assert_eq!(complaint.role, Role::Instructor);
    assert_eq!(complaint.visibility, Visibility::Private);
    assert_eq!(complaint.evidence, evidence);
    assert!(complaint.encrypted);
    assert_eq!(complaint.message, submission.feedback.message);
    assert_eq!(complaint.date, submission.feedback.date);
}

#[test]
fn authorized_personnel_also_files_a_complaint() {
    let mut form = valid_form();
    form.role = Some(Role::AuthorizedPersonnel);
    let submission = build_submission(&form, Vec::new(), date()).unwrap();
    assert!(submission.complaint.is_some());
}

#[test]
fn explicit_general_role_stays_feedback_only() {
    let mut form = valid_form();
    form.role = Some(Role::General);
    let submission = build_submission(&form, Vec::new(), date()).unwrap();
    assert_eq!(submission.complaint, None);
}

// =============================================================
// Form state helpers
// =============================================================

#[test]
fn effective_role_defaults_to_general() {
    assert_eq!(valid_form().effective_role(), Role::General);
}

#[test]
fn toggle_tag_adds_then_removes() {
    let mut form = FeedbackForm::default();
    form.toggle_tag("Urgent");
    assert_eq!(form.tags, vec!["Urgent".to_owned()]);
    form.toggle_tag("Urgent");
    assert!(form.tags.is_empty());
}

#[test]
fn reset_restores_defaults() {
    let mut form = valid_form();
    form.toggle_tag("Urgent");
    form.role = Some(Role::Instructor);
    form.reset();
    assert_eq!(form, FeedbackForm::default());
}
