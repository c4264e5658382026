use super::*;

#[test]
fn icons_follow_the_mime_prefix() {
    assert_eq!(icon_for("image/png"), "🖼️");
    assert_eq!(icon_for("audio/mpeg"), "🎵");
    assert_eq!(icon_for("video/mp4"), "🎥");
}

#[test]
fn anything_else_gets_the_document_icon() {
    assert_eq!(icon_for("application/pdf"), "📄");
    assert_eq!(icon_for(""), "📄");
    assert_eq!(icon_for("imagepng"), "📄");
}
