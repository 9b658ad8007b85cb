//! Fixed category registry.
//!
//! The eight categories are process-wide reference data: each carries a
//! stable numeric code and a display title. The set is immutable at runtime;
//! lookups resolve either the wire code (`"TOP"`) or the display title
//! (`"상의"`).

use wardrobe_core::{DomainError, DomainResult};

/// One of the eight fixed product categories.
///
/// Declaration order matches the stable numeric code order, so the derived
/// `Ord` sorts categories by code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Top,
    Outer,
    Pants,
    Sneakers,
    Bag,
    Hat,
    Socks,
    Accessory,
}

impl Category {
    /// All categories, in code order.
    pub const ALL: [Category; 8] = [
        Category::Top,
        Category::Outer,
        Category::Pants,
        Category::Sneakers,
        Category::Bag,
        Category::Hat,
        Category::Socks,
        Category::Accessory,
    ];

    /// Number of fixed categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable numeric code (1-based).
    pub fn code(self) -> u64 {
        self as u64 + 1
    }

    /// Wire code used in mutation requests.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Top => "TOP",
            Category::Outer => "OUTER",
            Category::Pants => "PANTS",
            Category::Sneakers => "SNEAKERS",
            Category::Bag => "BAG",
            Category::Hat => "HAT",
            Category::Socks => "SOCKS",
            Category::Accessory => "ACCESSORY",
        }
    }

    /// Display title shown in query responses.
    pub fn title(self) -> &'static str {
        match self {
            Category::Top => "상의",
            Category::Outer => "아우터",
            Category::Pants => "바지",
            Category::Sneakers => "스니커즈",
            Category::Bag => "가방",
            Category::Hat => "모자",
            Category::Socks => "양말",
            Category::Accessory => "액세서리",
        }
    }

    /// Resolve a wire code, e.g. `"TOP"`.
    pub fn from_code(code: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == code)
            .ok_or_else(|| DomainError::validation(format!("unknown category: {code}")))
    }

    /// Resolve a display title, e.g. `"상의"`.
    ///
    /// Unknown titles are a not-found condition: the title names an entity
    /// being queried, not a request field.
    pub fn from_title(title: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.title() == title)
            .ok_or_else(|| DomainError::not_found(format!("unknown category: {title}")))
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
