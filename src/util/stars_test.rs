use super::*;

#[test]
fn every_rating_renders_exactly_five_glyphs() {
    for rating in 1..=5u8 {
        let line = star_line(rating);
        assert_eq!(line.chars().count(), 5, "rating {rating}");
        assert_eq!(line.chars().filter(|&c| c == '★').count(), usize::from(rating));
        assert_eq!(line.chars().filter(|&c| c == '☆').count(), 5 - usize::from(rating));
    }
}

#[test]
fn filled_stars_come_first() {
    assert_eq!(star_line(3), "★★★☆☆");
    assert_eq!(star_line(5), "★★★★★");
    assert_eq!(star_line(1), "★☆☆☆☆");
}

#[test]
fn out_of_range_ratings_are_clamped() {
    assert_eq!(star_line(0), "★☆☆☆☆");
    assert_eq!(star_line(9), "★★★★★");
}
