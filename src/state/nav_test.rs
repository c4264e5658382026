use super::*;

#[test]
fn default_page_is_home() {
    assert_eq!(Page::default(), Page::Home);
}

#[test]
fn all_lists_every_page_once() {
    assert_eq!(Page::ALL.len(), 7);
    for (i, a) in Page::ALL.iter().enumerate() {
        for b in &Page::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn keys_round_trip_through_from_key() {
    for page in Page::ALL {
        assert_eq!(Page::from_key(page.key()), Some(page));
    }
}

#[test]
fn from_key_accepts_the_published_keys() {
    assert_eq!(Page::from_key("home"), Some(Page::Home));
    assert_eq!(Page::from_key("howitworks"), Some(Page::HowItWorks));
    assert_eq!(Page::from_key("previous"), Some(Page::Previous));
    assert_eq!(Page::from_key("complaints"), Some(Page::Complaints));
}

#[test]
fn from_key_rejects_unknown_keys() {
    assert_eq!(Page::from_key("admin"), None);
    assert_eq!(Page::from_key("Home"), None);
    assert_eq!(Page::from_key(""), None);
}
