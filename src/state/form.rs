//! Feedback form state and the submission controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation failures discard the submission without touching the form or
//! surfacing an error; only the debug log records the reason. A valid
//! submission always yields a feedback entry and, when the selected role
//! names personnel, a complaint entry alongside it.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use super::entries::{Category, ComplaintEntry, EvidenceRef, FeedbackEntry, Role, Visibility};

/// Minimum trimmed message length accepted at submission.
pub const MIN_MESSAGE_LEN: usize = 20;

/// Tag applied when the submitter picks none.
pub const DEFAULT_TAG: &str = "General";

/// Selectable tag labels, in form order.
pub const TAG_OPTIONS: [&str; 5] = ["Suggestion", "Complaint", "Compliment", "Urgent", "Follow-up"];

/// Working state of the feedback form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub category: Option<Category>,
    pub rating: Option<u8>,
    /// Checked tag labels in selection order.
    pub tags: Vec<String>,
    pub message: String,
    pub visibility: Visibility,
    /// Selected role pill, if any.
    pub role: Option<Role>,
}

impl FeedbackForm {
    /// Role applied at submission; an unselected pill means general feedback.
    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or_default()
    }

    /// Flip one tag checkbox.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_owned());
        }
    }

    /// Return every field to its initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A validated submission ready to enter the stores.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub feedback: FeedbackEntry,
    /// Present only when the submission targets personnel.
    pub complaint: Option<ComplaintEntry>,
}

/// Validate the form and build the entries it produces.
///
/// Checks run in order: category chosen, rating chosen, trimmed message at
/// least [`MIN_MESSAGE_LEN`] characters. Any failure returns `None`.
pub fn build_submission(
    form: &FeedbackForm,
    evidence: Vec<EvidenceRef>,
    date: String,
) -> Option<Submission> {
    let Some(category) = form.category else {
        log::debug!("submission discarded: no category selected");
        return None;
    };
    let Some(rating) = form.rating else {
        log::debug!("submission discarded: no rating selected");
        return None;
    };
    let message = form.message.trim();
    if message.chars().count() < MIN_MESSAGE_LEN {
        log::debug!("submission discarded: message too short ({} chars)", message.chars().count());
        return None;
    }

    let tags = if form.tags.is_empty() { vec![DEFAULT_TAG.to_owned()] } else { form.tags.clone() };
    let feedback = FeedbackEntry {
        category,
        rating,
        tags,
        date: date.clone(),
        message: message.to_owned(),
    };

    let role = form.effective_role();
    let complaint = role.targets_personnel().then(|| ComplaintEntry {
        role,
        visibility: form.visibility,
        rating,
        category,
        date,
        message: message.to_owned(),
        evidence,
        encrypted: true,
    });

    if let Ok(json) = serde_json::to_string(&feedback) {
        log::debug!("submission accepted: {json}");
    }
    Some(Submission { feedback, complaint })
}
