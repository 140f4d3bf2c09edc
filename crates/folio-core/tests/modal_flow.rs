//! Modal flow tests with fragment content
//!
//! Drives the modal controller and the fragment loader together the way the
//! web crate does, against an in-memory fragment source.

use std::collections::HashMap;
use std::sync::Once;

use folio_core::{
    Catalog, CardContent, FilterState, FilterToken, FolioError, FolioResult, FragmentLoader,
    FragmentSource, FragmentView, ModalController, ModalKey, ModalStep, Viewport,
};
use tokio::sync::oneshot;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

const CATALOG: &str = r#"{
    "cards": [
        { "id": "atlas", "title": "Atlas", "image": "img/atlas.jpg", "description": "Maps", "category": "web" },
        { "id": "orbit", "title": "Orbit", "category": "web mobile", "fragment": "orbit" },
        { "id": "ghost", "title": "Ghost", "category": "web", "fragment": "ghost" },
        { "id": "press", "title": "Press", "category": "print" }
    ]
}"#;

/// Serves fixed bodies; unknown paths are 404s.
struct MemorySource {
    pages: HashMap<String, String>,
}

impl MemorySource {
    fn new() -> Self {
        let mut pages = HashMap::new();
        pages.insert(
            "projects-content/orbit.html".to_string(),
            "<h2>Orbit</h2><p>Satellite tracker</p>".to_string(),
        );
        Self { pages }
    }
}

impl FragmentSource for MemorySource {
    async fn fetch(&self, path: &str) -> FolioResult<String> {
        self.pages
            .get(path)
            .cloned()
            .ok_or_else(|| FolioError::FragmentStatus {
                path: path.to_string(),
                status: 404,
            })
    }
}

/// Resolves each request only when the test says so.
struct GatedSource {
    gates: tokio::sync::Mutex<HashMap<String, oneshot::Receiver<FolioResult<String>>>>,
}

impl FragmentSource for GatedSource {
    async fn fetch(&self, path: &str) -> FolioResult<String> {
        let rx = self.gates.lock().await.remove(path);
        match rx {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(FolioError::Network("gate dropped".into()))),
            None => Err(FolioError::Network("no gate".into())),
        }
    }
}

#[derive(Default)]
struct PageViewport {
    y: f64,
    pinned_at: Option<f64>,
}

impl Viewport for PageViewport {
    fn scroll_y(&self) -> f64 {
        if self.pinned_at.is_some() {
            0.0
        } else {
            self.y
        }
    }

    fn scroll_to(&mut self, y: f64) {
        self.y = y;
    }

    fn lock_body(&mut self, offset: f64) {
        self.pinned_at = Some(offset);
        self.y = 0.0;
    }

    fn unlock_body(&mut self) {
        self.pinned_at = None;
    }
}

#[tokio::test]
async fn test_fragment_success_replaces_placeholder() {
    init_tracing();
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let source = MemorySource::new();
    let mut loader = FragmentLoader::new(&catalog.site);

    let card = catalog.card("orbit").unwrap();
    let CardContent::Fragment { id } = card.content() else {
        panic!("orbit should be fragment content");
    };

    let (ticket, placeholder) = loader.begin(id).unwrap();
    assert!(placeholder.is_loading());

    let view = loader.load(&source, &ticket).await;
    assert_eq!(
        view,
        Some(FragmentView::Ready(
            "<h2>Orbit</h2><p>Satellite tracker</p>".to_string()
        ))
    );
}

#[tokio::test]
async fn test_fragment_404_shows_error_message() {
    init_tracing();
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let source = MemorySource::new();
    let mut loader = FragmentLoader::new(&catalog.site);

    let (ticket, _) = loader.begin("ghost").unwrap();
    let view = loader.load(&source, &ticket).await.unwrap();

    assert_eq!(
        view,
        FragmentView::Failed(catalog.site.fragment_error_text.clone())
    );
    assert!(!view.is_loading());
}

#[tokio::test]
async fn test_slow_response_for_previous_card_is_dropped() {
    init_tracing();
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let mut loader = FragmentLoader::new(&catalog.site);

    let (tx_orbit, rx_orbit) = oneshot::channel();
    let (tx_ghost, rx_ghost) = oneshot::channel();
    let mut gates = HashMap::new();
    gates.insert("projects-content/orbit.html".to_string(), rx_orbit);
    gates.insert("projects-content/ghost.html".to_string(), rx_ghost);
    let source = GatedSource {
        gates: tokio::sync::Mutex::new(gates),
    };

    let (first, _) = loader.begin("orbit").unwrap();
    let (second, _) = loader.begin("ghost").unwrap();

    // newer request finishes first, older one afterwards
    tx_ghost.send(Ok("<h2>Ghost</h2>".into())).unwrap();
    let newer = loader.load(&source, &second).await;
    tx_orbit.send(Ok("<h2>Orbit</h2>".into())).unwrap();
    let older = loader.load(&source, &first).await;

    assert_eq!(newer, Some(FragmentView::Ready("<h2>Ghost</h2>".into())));
    assert_eq!(older, None);
}

#[tokio::test]
async fn test_request_task_drops_response_after_switching_cards() {
    init_tracing();
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let mut loader = FragmentLoader::new(&catalog.site);

    let (tx_orbit, rx_orbit) = oneshot::channel();
    let mut gates = HashMap::new();
    gates.insert("projects-content/orbit.html".to_string(), rx_orbit);
    let source = GatedSource {
        gates: tokio::sync::Mutex::new(gates),
    };

    // the request task owns a clone, the modal keeps the original
    let (ticket, _) = loader.begin("orbit").unwrap();
    let in_flight = loader.clone();
    let request = in_flight.load(&source, &ticket);

    let (current, _) = loader.begin("ghost").unwrap();
    tx_orbit.send(Ok("<h2>Orbit</h2>".into())).unwrap();

    assert_eq!(request.await, None);
    assert!(loader.is_current(&current));
}

#[tokio::test]
async fn test_close_cancels_in_flight_fragment() {
    init_tracing();
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let source = MemorySource::new();
    let mut loader = FragmentLoader::new(&catalog.site);
    let mut modal = ModalController::new();
    let mut viewport = PageViewport {
        y: 640.0,
        ..Default::default()
    };

    let mut filter = FilterState::new(&catalog.site, catalog.cards.len());
    filter.apply(FilterToken::Tag("web".into()), &catalog.cards);
    let visible = filter.visible_subset();
    assert_eq!(visible, vec![0, 1, 2]);

    let position = filter.position_of(1).unwrap();
    let generation = modal.open(position, visible.len(), &mut viewport).unwrap();
    modal.shown(generation);
    let (ticket, _) = loader.begin("orbit").unwrap();

    let ModalStep::Close(close) = modal.handle_key(ModalKey::Close, visible.len()) else {
        panic!("escape should close an open modal");
    };
    loader.cancel();

    assert_eq!(loader.load(&source, &ticket).await, None);
    assert!(modal.finish_close(close, &mut viewport));
    assert_eq!(viewport.y, 640.0);
}

#[tokio::test]
async fn test_keyboard_paging_over_filtered_subset() {
    init_tracing();
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let mut modal = ModalController::new();
    let mut viewport = PageViewport::default();

    let mut filter = FilterState::new(&catalog.site, catalog.cards.len());
    filter.apply(FilterToken::Tag("web".into()), &catalog.cards);
    let visible = filter.visible_subset();

    modal.open(2, visible.len(), &mut viewport);
    assert_eq!(
        modal.handle_key(ModalKey::Next, visible.len()),
        ModalStep::Show(0)
    );
    let card = &catalog.cards[visible[0]];
    assert_eq!(card.id, "atlas");
    assert_eq!(
        modal.handle_key(ModalKey::Previous, visible.len()),
        ModalStep::Show(2)
    );
}
