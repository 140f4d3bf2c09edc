//! Portfolio catalog
//!
//! The cards and filter controls the site renders, parsed from a JSON document
//! embedded at build time.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::error::{FolioError, FolioResult};
use crate::filter::parse_categories;

/// A single project tile in the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Stable slug, unique within the catalog
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Image URL shown on the tile and in the modal
    #[serde(default)]
    pub image: String,
    /// Space-separated category tags, as written to `data-category`
    #[serde(default)]
    pub category: Option<String>,
    /// Fragment identifier; when set the modal fetches its body remotely
    #[serde(default)]
    pub fragment: Option<String>,
}

impl Card {
    /// Category tags; a card without a `category` has none.
    pub fn categories(&self) -> Vec<String> {
        parse_categories(self.category.as_deref())
    }

    /// What the modal shows for this card.
    pub fn content(&self) -> CardContent<'_> {
        match self.fragment.as_deref() {
            Some(id) => CardContent::Fragment { id },
            None => CardContent::Inline {
                image: &self.image,
                title: &self.title,
                description: &self.description,
            },
        }
    }
}

/// Modal content source for a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardContent<'a> {
    /// Copied straight from the card's own image/title/description
    Inline {
        image: &'a str,
        title: &'a str,
        description: &'a str,
    },
    /// Fetched from `<fragment_base>/<id>.html`
    Fragment { id: &'a str },
}

/// A filter button: its label and the token written to `data-filter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterControl {
    pub label: String,
    pub token: String,
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    site: SiteConfig,
    #[serde(default)]
    filters: Vec<FilterControl>,
    #[serde(default)]
    cards: Vec<Card>,
}

/// Everything the site renders, plus its configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub site: SiteConfig,
    pub filters: Vec<FilterControl>,
    pub cards: Vec<Card>,
}

impl Catalog {
    /// Parse a catalog document.
    ///
    /// When the document lists no filter controls, they are derived: the
    /// sentinel first, then each category in first-seen order.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for card in &raw.cards {
            if !seen.insert(card.id.as_str()) {
                return Err(FolioError::DuplicateProject(card.id.clone()));
            }
        }

        let filters = if raw.filters.is_empty() {
            derive_filters(&raw.cards, &raw.site)
        } else {
            raw.filters
        };

        tracing::debug!(
            cards = raw.cards.len(),
            filters = filters.len(),
            "catalog loaded"
        );

        Ok(Self {
            site: raw.site,
            filters,
            cards: raw.cards,
        })
    }

    /// A catalog with no cards, default settings and only the sentinel filter.
    pub fn empty() -> Self {
        let site = SiteConfig::default();
        Self {
            filters: derive_filters(&[], &site),
            site,
            cards: Vec::new(),
        }
    }

    /// Look up a card by id.
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }
}

fn derive_filters(cards: &[Card], site: &SiteConfig) -> Vec<FilterControl> {
    let mut filters = vec![FilterControl {
        label: capitalize(&site.filter_all_token),
        token: site.filter_all_token.clone(),
    }];
    for card in cards {
        for category in card.categories() {
            if !filters.iter().any(|f| f.token == category) {
                filters.push(FilterControl {
                    label: capitalize(&category),
                    token: category,
                });
            }
        }
    }
    filters
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
