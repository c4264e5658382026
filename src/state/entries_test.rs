use super::*;

fn complaint(role: Role, visibility: Visibility, encrypted: bool) -> ComplaintEntry {
    ComplaintEntry {
        role,
        visibility,
        rating: 2,
        category: Category::Faculty,
        date: "Jan 30, 2026".to_owned(),
        message: "Grading policy changed without notice before the exam.".to_owned(),
        evidence: vec![EvidenceRef { name: "exam_paper.jpg".to_owned(), mime: "image/jpeg".to_owned() }],
        encrypted,
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_default_is_general() {
    assert_eq!(Role::default(), Role::General);
}

#[test]
fn only_personnel_roles_target_personnel() {
    assert!(!Role::General.targets_personnel());
    assert!(Role::Instructor.targets_personnel());
    assert!(Role::AuthorizedPersonnel.targets_personnel());
}

// =============================================================
// Category
// =============================================================

#[test]
fn category_labels_round_trip() {
    for category in Category::ALL {
        assert_eq!(Category::from_label(category.label()), Some(category));
    }
}

#[test]
fn category_from_label_rejects_unknown() {
    assert_eq!(Category::from_label("Sports"), None);
    assert_eq!(Category::from_label(""), None);
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn visibility_default_is_public() {
    assert_eq!(Visibility::default(), Visibility::Public);
}

#[test]
fn visibility_help_mentions_the_audience() {
    assert!(Visibility::Public.help_html().contains("visible to all students"));
    assert!(Visibility::Private.help_html().contains("authorized NBSC reviewer"));
}

// =============================================================
// Complaint badges
// =============================================================

#[test]
fn instructor_complaint_badge_row() {
    let badges = complaint(Role::Instructor, Visibility::Public, true).badges();
    let kinds: Vec<BadgeKind> = badges.iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![BadgeKind::Instructor, BadgeKind::Verified, BadgeKind::Public, BadgeKind::Encrypted]
    );
    assert_eq!(badges[0].label, "👨‍🏫 Instructor");
    assert_eq!(badges[1].label, "✓ Verified");
}

#[test]
fn personnel_complaint_uses_admin_badge() {
    let badges = complaint(Role::AuthorizedPersonnel, Visibility::Private, true).badges();
    assert_eq!(badges[0].kind, BadgeKind::Admin);
    assert_eq!(badges[0].label, "🛡️ Authorized Personnel");
    assert_eq!(badges[2].kind, BadgeKind::Private);
    assert_eq!(badges[2].label, "🔒 Private");
}

#[test]
fn unencrypted_complaint_omits_encrypted_badge() {
    let badges = complaint(Role::Instructor, Visibility::Public, false).badges();
    assert_eq!(badges.len(), 3);
    assert!(badges.iter().all(|b| b.kind != BadgeKind::Encrypted));
}
