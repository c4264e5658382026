//! Star-rating glyph rendering.

#[cfg(test)]
#[path = "stars_test.rs"]
mod stars_test;

/// Total glyphs in a star line.
pub const STAR_COUNT: u8 = 5;

/// Render a rating as filled stars followed by empty stars.
///
/// Ratings outside 1..=5 are clamped so the line always holds exactly
/// [`STAR_COUNT`] glyphs.
pub fn star_line(rating: u8) -> String {
    let filled = usize::from(rating.clamp(1, STAR_COUNT));
    let mut line = "★".repeat(filled);
    line.push_str(&"☆".repeat(usize::from(STAR_COUNT) - filled));
    line
}
