//! Project Modal
//!
//! Lightbox over the project grid. Pages through the cards the active filter
//! shows (buttons, arrow keys) and closes on the close button, Escape, a
//! backdrop click or a downward swipe.
//!
//! Inline cards copy their own image, title and description into the modal.
//! Fragment cards show a placeholder and then the fetched markup (or an error
//! message). The entrance/exit timers and the fetch are Dioxus tasks owned by
//! the modal: each new transition cancels the previous one.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{
    Card, CardContent, Catalog, FilterState, FragmentLoader, FragmentView, ModalController, ModalKey, ModalStep, SiteConfig, SwipeTracker,
};
use folio_ui::{CloseButton, PagerButton, PagerDirection};
use futures::StreamExt;
use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;

use crate::dom::{self, DomViewport};
use crate::fragments::HttpFragmentSource;

/// Handle to the modal's state. Cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct ProjectModal {
    catalog: Signal<Rc<Catalog>>,
    filter: Signal<FilterState>,
    controller: Signal<ModalController>,
    loader: Signal<FragmentLoader>,
    swipe: Signal<SwipeTracker>,
    /// Catalog index of the card on display
    card: Signal<Option<usize>>,
    /// Body for fragment cards; `None` for inline cards
    fragment: Signal<Option<FragmentView>>,
    timer: Signal<Option<Task>>,
    fetch: Signal<Option<Task>>,
    close_ms: u32,
}

/// Create the modal state for a grid driven by `filter`, and route document
/// key presses into it.
pub fn use_project_modal(
    catalog: Rc<Catalog>,
    filter: Signal<FilterState>,
    site: &SiteConfig,
) -> ProjectModal {
    let catalog = use_signal(|| catalog);
    let controller = use_signal(ModalController::new);
    let loader = use_signal(|| FragmentLoader::new(site));
    let swipe = use_signal(|| SwipeTracker::new(site.swipe_threshold_px));
    let card = use_signal(|| None);
    let fragment = use_signal(|| None);
    let timer = use_signal(|| None);
    let fetch = use_signal(|| None);

    let modal = ProjectModal {
        catalog,
        filter,
        controller,
        loader,
        swipe,
        card,
        fragment,
        timer,
        fetch,
        close_ms: site.modal_close_ms,
    };

    // Key presses arrive outside the Dioxus runtime; hop back in through a coroutine
    let keys = use_coroutine(move |mut rx: UnboundedReceiver<ModalKey>| async move {
        let mut modal = modal;
        while let Some(key) = rx.next().await {
            modal.key(key);
        }
    });

    use_hook(move || {
        let listener = EventListener::new(&gloo::utils::document(), "keydown", move |event| {
            let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            if let Some(key) = ModalKey::from_key_name(&event.key()) {
                keys.send(key);
            }
        });
        Rc::new(listener)
    });

    modal
}

impl ProjectModal {
    fn visible(&self) -> Vec<usize> {
        self.filter.peek().visible_subset()
    }

    /// Open on a grid card. Ignored if the card is filtered out.
    pub fn open_card(&mut self, card_index: usize) {
        let position = self.filter.peek().position_of(card_index);
        match position {
            Some(position) => self.open_at(position),
            None => tracing::debug!(card_index, "click on hidden card ignored"),
        }
    }

    fn open_at(&mut self, position: usize) {
        let visible = self.visible();
        let opened = self
            .controller
            .write()
            .open(position, visible.len(), &mut DomViewport);
        let Some(generation) = opened else {
            return;
        };

        self.show_card(visible[position]);

        // Entrance class goes on a frame after the modal is displayed
        let mut controller = self.controller;
        self.replace_timer(spawn(async move {
            dom::next_frame().await;
            controller.write().shown(generation);
        }));
    }

    pub fn next(&mut self) {
        let visible = self.visible();
        let step = self.controller.write().next(visible.len());
        if let Some(position) = step {
            self.show_card(visible[position]);
        }
    }

    pub fn previous(&mut self) {
        let visible = self.visible();
        let step = self.controller.write().previous(visible.len());
        if let Some(position) = step {
            self.show_card(visible[position]);
        }
    }

    pub fn close(&mut self) {
        let ticket = self.controller.write().begin_close();
        if let Some(ticket) = ticket {
            self.apply(ModalStep::Close(ticket), &[]);
        }
    }

    pub fn key(&mut self, key: ModalKey) {
        let visible = self.visible();
        let step = self.controller.write().handle_key(key, visible.len());
        self.apply(step, &visible);
    }

    pub fn touch_start(&mut self, screen_y: f64) {
        self.swipe.write().touch_start(screen_y);
    }

    pub fn touch_end(&mut self, screen_y: f64) {
        let outcome = self.swipe.write().touch_end(screen_y);
        let step = self.controller.write().handle_swipe(outcome);
        self.apply(step, &[]);
    }

    fn apply(&mut self, step: ModalStep, visible: &[usize]) {
        match step {
            ModalStep::Show(position) => {
                if let Some(&card_index) = visible.get(position) {
                    self.show_card(card_index);
                }
            }
            ModalStep::Close(ticket) => {
                self.loader.write().cancel();
                self.cancel_fetch();

                let mut controller = self.controller;
                let mut card = self.card;
                let mut fragment = self.fragment;
                let close_ms = self.close_ms;
                self.replace_timer(spawn(async move {
                    TimeoutFuture::new(close_ms).await;
                    if controller.write().finish_close(ticket, &mut DomViewport) {
                        card.set(None);
                        fragment.set(None);
                    }
                }));
            }
            ModalStep::Nothing => {}
        }
    }

    /// Fill the modal with the catalog card at `card_index`.
    fn show_card(&mut self, card_index: usize) {
        self.card.set(Some(card_index));
        self.cancel_fetch();

        let catalog = self.catalog.peek().clone();
        let Some(card) = catalog.cards.get(card_index) else {
            return;
        };

        match card.content() {
            CardContent::Inline { .. } => {
                self.loader.write().cancel();
                self.fragment.set(None);
            }
            CardContent::Fragment { id } => {
                let begun = self.loader.write().begin(id);
                match begun {
                    Ok((ticket, placeholder)) => {
                        self.fragment.set(Some(placeholder));

                        // The clone shares the generation, so cancelling still drops the response
                        let loader = self.loader.peek().clone();
                        let mut fragment = self.fragment;
                        let task = spawn(async move {
                            let view = loader.load(&HttpFragmentSource, &ticket).await;
                            if let Some(view) = view {
                                fragment.set(Some(view));
                            }
                        });
                        self.fetch.set(Some(task));
                    }
                    Err(failed) => self.fragment.set(Some(failed)),
                }
            }
        }
    }

    fn replace_timer(&mut self, task: Task) {
        if let Some(previous) = self.timer.write().replace(task) {
            previous.cancel();
        }
    }

    fn cancel_fetch(&mut self) {
        if let Some(task) = self.fetch.write().take() {
            task.cancel();
        }
    }
}

/// Modal markup (`#projectModal`).
#[component]
pub fn ProjectModalView(modal: ProjectModal) -> Element {
    let phase = modal.controller.read().phase();
    let catalog = modal.catalog.read().clone();
    let card = modal.card.read().and_then(|i| catalog.cards.get(i).cloned());
    let fragment = modal.fragment.read().clone();

    let body = match card {
        Some(card) => render_body(&card, fragment),
        None => VNode::empty(),
    };

    let class = if phase.is_shown() { "modal modal-show" } else { "modal" };
    let display = if phase.is_displayed() { "flex" } else { "none" };

    let mut backdrop = modal;
    let mut touch_start = modal;
    let mut touch_end = modal;
    let mut close = modal;
    let mut prev = modal;
    let mut next = modal;

    rsx! {
        div {
            id: "projectModal",
            class: "{class}",
            style: "display: {display};",
            role: "dialog",
            "aria-modal": "true",
            // Only clicks on the backdrop itself get here; content stops propagation
            onclick: move |_| backdrop.close(),
            ontouchstart: move |e| {
                if let Some(touch) = e.data().touches_changed().first() {
                    touch_start.touch_start(touch.screen_coordinates().y);
                }
            },
            ontouchend: move |e| {
                if let Some(touch) = e.data().touches_changed().first() {
                    touch_end.touch_end(touch.screen_coordinates().y);
                }
            },

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                CloseButton { onclick: move |_| close.close() }

                {body}

                div { class: "modal-pager",
                    PagerButton {
                        direction: PagerDirection::Previous,
                        onclick: move |_| prev.previous(),
                    }
                    PagerButton {
                        direction: PagerDirection::Next,
                        onclick: move |_| next.next(),
                    }
                }
            }
        }
    }
}

fn render_body(card: &Card, fragment: Option<FragmentView>) -> Element {
    match card.content() {
        CardContent::Inline {
            image,
            title,
            description,
        } => rsx! {
            img { id: "modal-img", src: "{image}", alt: "{title}" }
            h3 { id: "modal-title", "{title}" }
            p { id: "modal-description", "{description}" }
        },
        CardContent::Fragment { .. } => {
            let inner = match fragment {
                Some(FragmentView::Ready(markup)) => rsx! {
                    div { class: "modal-fragment", dangerous_inner_html: "{markup}" }
                },
                Some(FragmentView::Loading(text)) => rsx! {
                    p { class: "modal-loading", "{text}" }
                },
                Some(FragmentView::Failed(text)) => rsx! {
                    p { class: "modal-error", "{text}" }
                },
                None => VNode::empty(),
            };
            rsx! {
                h3 { id: "modal-title", "{card.title}" }
                div { class: "modal-body", {inner} }
            }
        }
    }
}
