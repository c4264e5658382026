//! Domain entries for anonymous feedback and personnel complaints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entries are append-only values owned by the stores in [`crate::state::store`].
//! There are no identifiers, no cross-references, and no update or delete
//! operations anywhere in the system.

#[cfg(test)]
#[path = "entries_test.rs"]
mod entries_test;

use serde::{Deserialize, Serialize};

/// Feedback category, fixed to the form's select options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Academics,
    Facilities,
    CampusLife,
    Services,
    Faculty,
    Administration,
}

impl Category {
    /// All categories in form order.
    pub const ALL: [Category; 6] = [
        Category::Academics,
        Category::Facilities,
        Category::CampusLife,
        Category::Services,
        Category::Faculty,
        Category::Administration,
    ];

    /// Display label, also used as the select option value.
    pub fn label(self) -> &'static str {
        match self {
            Category::Academics => "Academics",
            Category::Facilities => "Facilities",
            Category::CampusLife => "Campus Life",
            Category::Services => "Services",
            Category::Faculty => "Faculty",
            Category::Administration => "Administration",
        }
    }

    /// Parse a select option value back into a category.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

/// Who a submission is directed at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Campus-wide feedback not aimed at anyone in particular.
    #[default]
    General,
    Instructor,
    AuthorizedPersonnel,
}

impl Role {
    /// All selectable roles in pill order.
    pub const ALL: [Role; 3] = [Role::General, Role::Instructor, Role::AuthorizedPersonnel];

    /// Display label shown on the role pill and complaint badge.
    pub fn label(self) -> &'static str {
        match self {
            Role::General => "General",
            Role::Instructor => "Instructor",
            Role::AuthorizedPersonnel => "Authorized Personnel",
        }
    }

    /// True when the role names campus personnel, which escalates a
    /// submission into a complaint.
    pub fn targets_personnel(self) -> bool {
        !matches!(self, Role::General)
    }
}

/// Complaint audience.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    /// Both options in radio order.
    pub const ALL: [Visibility; 2] = [Visibility::Public, Visibility::Private];

    pub fn label(self) -> &'static str {
        match self {
            Visibility::Public => "Public",
            Visibility::Private => "Private",
        }
    }

    /// Help markup shown under the visibility radios.
    pub fn help_html(self) -> &'static str {
        match self {
            Visibility::Public => {
                "<strong>Public</strong> — visible to all students (instructor name is hidden)."
            }
            Visibility::Private => {
                "<strong>Private</strong> — only you and the authorized NBSC reviewer can see this."
            }
        }
    }
}

/// A file reference attached to a complaint. No binary content is kept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRef {
    pub name: String,
    pub mime: String,
}

/// A single anonymous feedback submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub category: Category,
    /// Star rating, always within 1..=5.
    pub rating: u8,
    /// Free-text tag labels in selection order, never empty.
    pub tags: Vec<String>,
    /// Display date, e.g. "Jan 29, 2026".
    pub date: String,
    pub message: String,
}

/// A feedback submission directed at a named role, with optional evidence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintEntry {
    pub role: Role,
    pub visibility: Visibility,
    pub rating: u8,
    pub category: Category,
    pub date: String,
    pub message: String,
    pub evidence: Vec<EvidenceRef>,
    /// Cosmetic at-rest flag; no transformation is ever applied.
    pub encrypted: bool,
}

/// Styling family for one card badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeKind {
    Instructor,
    Admin,
    Verified,
    Public,
    Private,
    Encrypted,
}

/// One badge in a complaint card's header row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardBadge {
    pub label: String,
    pub kind: BadgeKind,
}

impl ComplaintEntry {
    /// Badge row for the card header, in display order.
    pub fn badges(&self) -> Vec<CardBadge> {
        let role_badge = match self.role {
            Role::Instructor => CardBadge {
                label: format!("👨‍🏫 {}", self.role.label()),
                kind: BadgeKind::Instructor,
            },
            _ => CardBadge {
                label: format!("🛡️ {}", self.role.label()),
                kind: BadgeKind::Admin,
            },
        };
        let visibility_badge = match self.visibility {
            Visibility::Public => CardBadge {
                label: "🌐 Public".to_owned(),
                kind: BadgeKind::Public,
            },
            Visibility::Private => CardBadge {
                label: "🔒 Private".to_owned(),
                kind: BadgeKind::Private,
            },
        };

        let mut badges = vec![
            role_badge,
            CardBadge { label: "✓ Verified".to_owned(), kind: BadgeKind::Verified },
            visibility_badge,
        ];
        if self.encrypted {
            badges.push(CardBadge { label: "🔐 Encrypted".to_owned(), kind: BadgeKind::Encrypted });
        }
        badges
    }
}
