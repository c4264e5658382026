use super::*;

fn candidate(name: &str, mime: &str, size: u64) -> StagedFile {
    StagedFile { name: name.to_owned(), mime: mime.to_owned(), size }
}

// =============================================================
// Acceptance policy
// =============================================================

#[test]
fn screen_admits_media_types_within_the_limit() {
    assert_eq!(screen("image/png", 1024), Ok(()));
    assert_eq!(screen("audio/mpeg", 1024), Ok(()));
    assert_eq!(screen("video/mp4", MAX_FILE_BYTES), Ok(()));
}

#[test]
fn screen_rejects_unsupported_types() {
    assert_eq!(screen("application/pdf", 1024), Err(RejectReason::UnsupportedType));
    assert_eq!(screen("text/plain", 0), Err(RejectReason::UnsupportedType));
    assert_eq!(screen("", 0), Err(RejectReason::UnsupportedType));
}

#[test]
fn screen_rejects_oversized_files() {
    assert_eq!(screen("image/png", MAX_FILE_BYTES + 1), Err(RejectReason::TooLarge));
}

#[test]
fn screen_checks_size_before_type() {
    assert_eq!(screen("text/plain", MAX_FILE_BYTES + 1), Err(RejectReason::TooLarge));
}

// =============================================================
// AttachmentList
// =============================================================

#[test]
fn add_many_keeps_admitted_candidates_in_order() {
    let mut list = AttachmentList::default();
    list.add_many([
        candidate("a.png", "image/png", 10),
        candidate("notes.pdf", "application/pdf", 10),
        candidate("b.mp3", "audio/mpeg", 10),
        candidate("huge.mp4", "video/mp4", MAX_FILE_BYTES + 1),
        candidate("c.mp4", "video/mp4", 10),
    ]);
    let names: Vec<&str> = list.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.png", "b.mp3", "c.mp4"]);
}

#[test]
fn add_many_with_no_candidates_is_a_noop() {
    let mut list = AttachmentList::default();
    list.add_many([]);
    assert!(list.is_empty());
}

#[test]
fn remove_returns_the_file_at_the_index() {
    let mut list = AttachmentList::default();
    list.add_many([candidate("a.png", "image/png", 10), candidate("b.png", "image/png", 10)]);
    let removed = list.remove(0);
    assert_eq!(removed.map(|f| f.name), Some("a.png".to_owned()));
    assert_eq!(list.len(), 1);
    assert_eq!(list.files()[0].name, "b.png");
}

#[test]
fn remove_out_of_range_is_a_noop() {
    let mut list = AttachmentList::default();
    assert_eq!(list.remove(0), None);
    assert!(list.is_empty());

    list.add(candidate("a.png", "image/png", 10));
    assert_eq!(list.remove(5), None);
    assert_eq!(list.len(), 1);
}

#[test]
fn evidence_maps_name_and_mime_only() {
    let mut list = AttachmentList::default();
    list.add(candidate("clip.mp4", "video/mp4", 2048));
    let evidence = list.evidence();
    assert_eq!(evidence.len(), 1);
    assert_eq!(evidence[0].name, "clip.mp4");
    assert_eq!(evidence[0].mime, "video/mp4");
}

#[test]
fn clear_empties_the_list() {
    let mut list = AttachmentList::default();
    list.add(candidate("a.png", "image/png", 10));
    list.clear();
    assert!(list.is_empty());
}
