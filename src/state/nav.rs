//! Page panel routing.
//!
//! DESIGN
//! ======
//! The app is a single document with named panels; navigation toggles which
//! panel is active rather than changing the URL path. Unknown keys parse to
//! `None` and leave the current panel in place.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Named page panels reachable from the top navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    About,
    HowItWorks,
    Feedback,
    Previous,
    Complaints,
    Contact,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::HowItWorks,
        Page::Feedback,
        Page::Previous,
        Page::Complaints,
        Page::Contact,
    ];

    /// Stable key for the page, used in nav markup and the location hash.
    pub fn key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::HowItWorks => "howitworks",
            Page::Feedback => "feedback",
            Page::Previous => "previous",
            Page::Complaints => "complaints",
            Page::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::HowItWorks => "How It Works",
            Page::Feedback => "Give Feedback",
            Page::Previous => "Previous Feedback",
            Page::Complaints => "Complaints",
            Page::Contact => "Contact",
        }
    }

    /// Parse a navigation key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|page| page.key() == key)
    }
}
