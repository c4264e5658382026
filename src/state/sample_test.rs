use super::*;

#[test]
fn seed_feedback_is_newest_first() {
    let seeded = seed_feedback();
    assert_eq!(seeded.len(), 6);
    assert_eq!(seeded[0].date, "Jan 29, 2026");
    assert_eq!(seeded[5].date, "Jan 18, 2026");
}

#[test]
fn seed_feedback_ratings_and_tags_are_well_formed() {
    for entry in seed_feedback() {
        assert!((1..=5).contains(&entry.rating));
        assert!(!entry.tags.is_empty());
        assert!(entry.message.trim().chars().count() >= 20);
    }
}

#[test]
fn seed_complaints_all_target_personnel_and_carry_evidence() {
    let seeded = seed_complaints();
    assert_eq!(seeded.len(), 4);
    for entry in &seeded {
        assert!(entry.role.targets_personnel());
        assert!(entry.encrypted);
        assert!(!entry.evidence.is_empty());
        assert!((1..=5).contains(&entry.rating));
    }
    assert_eq!(seeded[0].date, "Jan 30, 2026");
}
