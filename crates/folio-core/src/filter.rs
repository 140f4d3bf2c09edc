//! Card filtering
//!
//! A filter token either is the sentinel (`all` by default) or names one
//! category. Applying a token shows exactly the cards whose category list
//! contains it; the sentinel shows every card.

use crate::catalog::Card;
use crate::config::SiteConfig;

/// Split a `data-category` value into tags. A missing attribute has no tags.
pub fn parse_categories(attr: Option<&str>) -> Vec<String> {
    attr.map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Value of a filter control's `data-filter` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterToken {
    /// The sentinel: every card matches
    All,
    /// A single category tag
    Tag(String),
}

impl FilterToken {
    pub fn parse(raw: &str, site: &SiteConfig) -> Self {
        if raw == site.filter_all_token {
            FilterToken::All
        } else {
            FilterToken::Tag(raw.to_string())
        }
    }

    /// `true` iff this is the sentinel or `categories` contains the tag.
    pub fn matches(&self, categories: &[String]) -> bool {
        match self {
            FilterToken::All => true,
            FilterToken::Tag(tag) => categories.iter().any(|c| c == tag),
        }
    }
}

/// Per-card display state written by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVisibility {
    Shown,
    Hidden,
}

impl CardVisibility {
    pub fn is_shown(self) -> bool {
        self == CardVisibility::Shown
    }

    /// Inline `display` value for the card element.
    pub fn display(self) -> &'static str {
        match self {
            CardVisibility::Shown => "block",
            CardVisibility::Hidden => "none",
        }
    }
}

/// Outcome of one filter application.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterApplied {
    /// Catalog indices of the cards now shown, in catalog order
    pub visible: Vec<usize>,
    /// Entrance delay (ms) per shown card, present only for the initial
    /// sentinel application after load
    pub entrance: Option<Vec<(usize, u32)>>,
}

/// Filter controller state: the active control and every card's visibility.
#[derive(Debug, Clone)]
pub struct FilterState {
    active: FilterToken,
    visibility: Vec<CardVisibility>,
    applied_once: bool,
    stagger_ms: u32,
}

impl FilterState {
    /// All cards shown, sentinel control active, nothing applied yet.
    pub fn new(site: &SiteConfig, card_count: usize) -> Self {
        Self {
            active: FilterToken::All,
            visibility: vec![CardVisibility::Shown; card_count],
            applied_once: false,
            stagger_ms: site.stagger_ms,
        }
    }

    /// Make `token` the active control and recompute every card's visibility.
    pub fn apply(&mut self, token: FilterToken, cards: &[Card]) -> FilterApplied {
        self.visibility = cards
            .iter()
            .map(|card| {
                if token.matches(&card.categories()) {
                    CardVisibility::Shown
                } else {
                    CardVisibility::Hidden
                }
            })
            .collect();

        let visible = self.visible_subset();
        let entrance = if !self.applied_once && token == FilterToken::All {
            Some(
                visible
                    .iter()
                    .enumerate()
                    .map(|(position, &index)| (index, position as u32 * self.stagger_ms))
                    .collect(),
            )
        } else {
            None
        };

        tracing::debug!(token = ?token, visible = visible.len(), "filter applied");

        self.applied_once = true;
        self.active = token;
        FilterApplied { visible, entrance }
    }

    pub fn active(&self) -> &FilterToken {
        &self.active
    }

    pub fn is_active(&self, token: &FilterToken) -> bool {
        &self.active == token
    }

    /// Visibility of the card at `index`; out-of-range cards are hidden.
    pub fn visibility(&self, index: usize) -> CardVisibility {
        self.visibility
            .get(index)
            .copied()
            .unwrap_or(CardVisibility::Hidden)
    }

    /// Catalog indices of shown cards. Recomputed on every call.
    pub fn visible_subset(&self) -> Vec<usize> {
        self.visibility
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_shown())
            .map(|(i, _)| i)
            .collect()
    }

    /// Position of a catalog card inside the visible subset, if shown.
    pub fn position_of(&self, card_index: usize) -> Option<usize> {
        self.visible_subset().iter().position(|&i| i == card_index)
    }
}
