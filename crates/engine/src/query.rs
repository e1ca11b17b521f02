//! Derives the dashboard's group listing: filter, then sort, then paginate.
//!
//! The three steps are pure functions recomputed on every read; nothing is
//! cached. [`GroupQuery`] carries the caller-side listing state and enforces
//! the one state rule the functions themselves cannot: the page resets to 1
//! whenever the search text or sort key changes.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{error::EngineError, group::Group};

/// Group cards per dashboard page.
pub const GROUPS_PER_PAGE: usize = 6;

/// Sort order for the group list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Name,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Name => "name",
        }
    }
}

impl TryFrom<&str> for SortKey {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "name" => Ok(Self::Name),
            other => Err(EngineError::InvalidName(format!(
                "invalid sort key: {other}"
            ))),
        }
    }
}

/// Case-insensitive substring match on the name or the description.
///
/// A blank or whitespace-only search returns every group in stored order.
pub fn filter<'a>(groups: &'a [Group], search_text: &str) -> Vec<&'a Group> {
    let query = search_text.trim().to_lowercase();
    if query.is_empty() {
        return groups.iter().collect();
    }
    groups
        .iter()
        .filter(|group| {
            group.name.to_lowercase().contains(&query)
                || group.description.to_lowercase().contains(&query)
        })
        .collect()
}

/// Stable sort of the filtered listing.
///
/// `Newest`/`Oldest` order by creation time; ties keep their stored order.
/// `Name` compares case- and accent-insensitively.
pub fn sort_groups(mut groups: Vec<&Group>, key: SortKey) -> Vec<&Group> {
    match key {
        SortKey::Newest => groups.sort_by_key(|group| Reverse(group.created_at)),
        SortKey::Oldest => groups.sort_by_key(|group| group.created_at),
        SortKey::Name => groups.sort_by_cached_key(|group| name_sort_key(&group.name)),
    }
    groups
}

/// Fold a display name into its sort key: NFKD, combining marks stripped,
/// lowercased.
fn name_sort_key(name: &str) -> String {
    name.trim()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// One page of the filtered, sorted listing.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<'a> {
    pub items: Vec<&'a Group>,
    pub total_pages: usize,
}

/// Slices out the 1-based `page_number`.
///
/// `total_pages` is at least 1 even for an empty listing. The page number is
/// not clamped here: a number past the end yields an empty page, and callers
/// reset to page 1 whenever the search or sort changes.
pub fn paginate<'a>(groups: &[&'a Group], page_size: usize, page_number: usize) -> Page<'a> {
    let page_size = page_size.max(1);
    let total_pages = groups.len().div_ceil(page_size).max(1);
    let start = page_number.saturating_sub(1).saturating_mul(page_size);
    let items = if start >= groups.len() {
        Vec::new()
    } else {
        let end = start.saturating_add(page_size).min(groups.len());
        groups[start..end].to_vec()
    };
    Page { items, total_pages }
}

/// Dashboard listing state: search text, sort key and current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupQuery {
    search_text: String,
    sort_key: SortKey,
    page: usize,
}

impl Default for GroupQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort_key: SortKey::default(),
            page: 1,
        }
    }
}

impl GroupQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Changing the search resets to page 1.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = 1;
    }

    pub fn clear_search(&mut self) {
        self.set_search("");
    }

    /// Changing the sort resets to page 1.
    pub fn set_sort(&mut self, key: SortKey) {
        self.sort_key = key;
        self.page = 1;
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Runs filter, then sort, then paginate against `groups`.
    pub fn run<'a>(&self, groups: &'a [Group], page_size: usize) -> Page<'a> {
        let filtered = filter(groups, &self.search_text);
        let sorted = sort_groups(filtered, self.sort_key);
        paginate(&sorted, page_size, self.page)
    }
}
