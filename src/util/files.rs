//! File-type presentation helpers.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

/// Icon for a MIME type, chosen by prefix.
pub fn icon_for(mime: &str) -> &'static str {
    if mime.starts_with("image/") {
        "🖼️"
    } else if mime.starts_with("audio/") {
        "🎵"
    } else if mime.starts_with("video/") {
        "🎥"
    } else {
        "📄"
    }
}
