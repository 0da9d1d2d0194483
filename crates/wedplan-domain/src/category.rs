//! Budget areas that selections are grouped under.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque category label carried by every selected item.
///
/// The ledger treats the tag as plain data and never checks it against
/// [`Category`]. Editors that want a closed set validate with
/// [`CategoryTag::known`] before calling into the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTag(String);

impl CategoryTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the tag against the closed category set.
    pub fn known(&self) -> Option<Category> {
        Category::from_tag(&self.0)
    }

    /// Human label for summaries. Unknown tags fall back to the raw tag.
    pub fn display_name(&self) -> String {
        match self.known() {
            Some(category) => category.display_name().to_string(),
            None => self.0.clone(),
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Category> for CategoryTag {
    fn from(category: Category) -> Self {
        Self(category.tag().to_string())
    }
}

impl From<&str> for CategoryTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for CategoryTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

/// The fixed set of wedding budget areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    WeddingHall,
    Meeting,
    NewlywedHome,
    Honeymoon,
    WeddingPhoto,
    Household,
    WeddingDay,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::WeddingHall,
        Category::Meeting,
        Category::NewlywedHome,
        Category::Honeymoon,
        Category::WeddingPhoto,
        Category::Household,
        Category::WeddingDay,
    ];

    /// Canonical tag stored on selected items.
    pub fn tag(self) -> &'static str {
        match self {
            Category::WeddingHall => "wedding-halls",
            Category::Meeting => "meetings",
            Category::NewlywedHome => "newlywed-homes",
            Category::Honeymoon => "honeymoons",
            Category::WeddingPhoto => "wedding-photos",
            Category::Household => "household",
            Category::WeddingDay => "wedding-day",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::WeddingHall => "Wedding Hall",
            Category::Meeting => "Family Meeting",
            Category::NewlywedHome => "Newlywed Home",
            Category::Honeymoon => "Honeymoon",
            Category::WeddingPhoto => "Wedding Photos",
            Category::Household => "Household",
            Category::WeddingDay => "Wedding Day",
        }
    }

    /// Short name accepted on the command line.
    pub fn alias(self) -> &'static str {
        match self {
            Category::WeddingHall => "hall",
            Category::Meeting => "meeting",
            Category::NewlywedHome => "home",
            Category::Honeymoon => "honeymoon",
            Category::WeddingPhoto => "photo",
            Category::Household => "household",
            Category::WeddingDay => "day",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.tag() == tag)
    }

    /// Accepts either the canonical tag or the short alias, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let needle = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.tag() == needle || category.alias() == needle)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
