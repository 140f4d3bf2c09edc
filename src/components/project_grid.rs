//! Project Grid Component
//!
//! Filter buttons, the card grid and the project modal, wired together.

use std::collections::HashMap;

use dioxus::prelude::*;
use folio_core::{FilterState, FilterToken};
use folio_ui::FilterBar;

use crate::components::{use_project_modal, ProjectCard, ProjectModalView};
use crate::context::{use_catalog, use_site_config};

#[component]
pub fn ProjectGrid() -> Element {
    let catalog = use_catalog();
    let site = use_site_config();

    // Initial "all" pass right after load plays the staggered entrance
    let (initial, initial_entrance) = use_hook(|| {
        let mut state = FilterState::new(&site, catalog.cards.len());
        let applied = state.apply(FilterToken::All, &catalog.cards);
        let entrance: HashMap<usize, u32> = applied.entrance.unwrap_or_default().into_iter().collect();
        (state, entrance)
    });
    let mut filter = use_signal(|| initial);
    let mut entrance = use_signal(|| initial_entrance);

    let mut modal = use_project_modal(catalog.clone(), filter, &site);

    let active = match filter.read().active() {
        FilterToken::All => site.filter_all_token.clone(),
        FilterToken::Tag(tag) => tag.clone(),
    };

    let on_select = {
        let catalog = catalog.clone();
        let site = site.clone();
        move |raw: String| {
            let token = FilterToken::parse(&raw, &site);
            filter.write().apply(token, &catalog.cards);
            // entrance plays once; later filtering just shows and hides
            entrance.write().clear();
        }
    };

    rsx! {
        section { class: "projects",
            FilterBar {
                filters: catalog.filters.clone(),
                active: active,
                on_select: on_select,
            }

            div { class: "project-grid",
                for (index, card) in catalog.cards.iter().enumerate() {
                    ProjectCard {
                        key: "{card.id}",
                        card: card.clone(),
                        visibility: filter.read().visibility(index),
                        entrance_delay: entrance.read().get(&index).copied(),
                        on_open: move |_| modal.open_card(index),
                    }
                }
            }

            ProjectModalView { modal: modal }
        }
    }
}
