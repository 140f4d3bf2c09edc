//! Project modal controller
//!
//! ```text
//! Closed --open--> Opening --shown--> Open --begin_close--> Closing --finish_close--> Closed
//!                     ^                                        |
//!                     +-------------------open-----------------+
//! ```
//!
//! The modal pages through the visible-card subset. Callers pass the subset
//! size on every call, so the controller never holds a stale copy of it.
//!
//! Animation timers are identified by generation: every transition out of
//! `Closed` or `Closing` bumps it, and `shown` / `finish_close` with an older
//! generation are ignored. A close timer that fires after the modal was
//! reopened therefore cannot hide it.

use crate::gesture::SwipeOutcome;

/// Browser scroll and body-style operations the modal needs.
pub trait Viewport {
    /// Current vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;

    /// Jump the window to `y`. Must not animate: the body has just left
    /// fixed positioning and sits at offset 0.
    fn scroll_to(&mut self, y: f64);

    /// Refresh the scrollbar width the pinned body pads itself by. Called
    /// while the scrollbar is still present, right before pinning.
    fn measure_scrollbar(&mut self) {}

    /// Pin the body with `position: fixed; top: -offset; width: 100%` and
    /// add `modal-active` to `<html>` and `<body>`.
    fn lock_body(&mut self, offset: f64);

    /// Undo [`Viewport::lock_body`].
    fn unlock_body(&mut self);
}

/// Scroll-lock bookkeeping: the offset captured when the lock engaged.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    snapshot: Option<f64>,
}

impl ScrollLock {
    /// Capture the scroll offset and pin the body. Engaging an engaged lock
    /// keeps the first snapshot; a pinned body always reports offset 0.
    pub fn engage(&mut self, viewport: &mut impl Viewport) {
        if self.snapshot.is_some() {
            return;
        }
        let y = viewport.scroll_y();
        viewport.measure_scrollbar();
        viewport.lock_body(y);
        self.snapshot = Some(y);
    }

    /// Unpin the body and scroll back to the snapshot, returning it.
    pub fn release(&mut self, viewport: &mut impl Viewport) -> Option<f64> {
        let y = self.snapshot.take()?;
        viewport.unlock_body();
        viewport.scroll_to(y);
        Some(y)
    }

    pub fn is_engaged(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn snapshot(&self) -> Option<f64> {
        self.snapshot
    }

    /// `top` style for a body pinned at `offset`.
    pub fn body_top(offset: f64) -> String {
        format!("-{}px", offset)
    }

    /// Width of the window scrollbar from a probe element's outer and inner widths.
    pub fn scrollbar_width(outer_width: f64, inner_width: f64) -> f64 {
        (outer_width - inner_width).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    /// Displayed, entrance class not yet applied
    Opening,
    Open,
    /// Exit animation running, still displayed
    Closing,
}

impl ModalPhase {
    /// Whether the modal element is displayed at all.
    pub fn is_displayed(self) -> bool {
        self != ModalPhase::Closed
    }

    /// Whether the `modal-show` entrance class is applied.
    pub fn is_shown(self) -> bool {
        self == ModalPhase::Open
    }

    /// Whether navigation and close requests are accepted.
    pub fn is_active(self) -> bool {
        matches!(self, ModalPhase::Opening | ModalPhase::Open)
    }
}

/// Keyboard commands understood by the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Next,
    Previous,
    Close,
}

impl ModalKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(ModalKey::Next),
            "ArrowLeft" => Some(ModalKey::Previous),
            "Escape" => Some(ModalKey::Close),
            _ => None,
        }
    }
}

/// Identifies the close animation a `finish_close` call belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket(u64);

/// What the caller has to do after feeding an event to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalStep {
    /// Render the card at this subset position
    Show(usize),
    /// Start the close animation; call `finish_close` with the ticket after the delay
    Close(CloseTicket),
    Nothing,
}

/// Modal session: phase, current subset position and scroll lock.
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    phase: ModalPhase,
    index: Option<usize>,
    lock: ScrollLock,
    generation: u64,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Subset position of the card on display.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.lock
    }

    /// Open the modal at subset position `index`.
    ///
    /// Returns the generation to pass to [`ModalController::shown`] once the
    /// modal has been displayed for a frame, or `None` when the subset is
    /// empty or `index` is out of bounds (nothing changes).
    pub fn open(
        &mut self,
        index: usize,
        visible: usize,
        viewport: &mut impl Viewport,
    ) -> Option<u64> {
        if visible == 0 || index >= visible {
            tracing::debug!(index, visible, "modal open rejected");
            return None;
        }

        if !self.phase.is_active() {
            self.generation += 1;
            self.phase = ModalPhase::Opening;
        }
        self.lock.engage(viewport);
        self.index = Some(index);

        tracing::debug!(index, generation = self.generation, phase = ?self.phase, "modal open");
        Some(self.generation)
    }

    /// Apply the entrance class. Ignored unless still opening in `generation`.
    pub fn shown(&mut self, generation: u64) -> bool {
        if self.phase == ModalPhase::Opening && generation == self.generation {
            self.phase = ModalPhase::Open;
            true
        } else {
            false
        }
    }

    /// Move to the next visible card, wrapping around.
    pub fn next(&mut self, visible: usize) -> Option<usize> {
        self.step(visible, |current, visible| (current + 1) % visible)
    }

    /// Move to the previous visible card, wrapping around.
    pub fn previous(&mut self, visible: usize) -> Option<usize> {
        self.step(visible, |current, visible| (current + visible - 1) % visible)
    }

    fn step(&mut self, visible: usize, f: impl Fn(usize, usize) -> usize) -> Option<usize> {
        if !self.phase.is_active() || visible == 0 {
            return None;
        }
        let current = self.index.unwrap_or(0) % visible;
        let index = f(current, visible);
        self.index = Some(index);
        Some(index)
    }

    /// Start closing. Returns the ticket for the delayed `finish_close`.
    pub fn begin_close(&mut self) -> Option<CloseTicket> {
        if !self.phase.is_active() {
            return None;
        }
        self.phase = ModalPhase::Closing;
        tracing::debug!(generation = self.generation, "modal closing");
        Some(CloseTicket(self.generation))
    }

    /// Hide the modal, unlock scroll and restore the snapshot. Ignored when
    /// the modal was reopened since `ticket` was issued.
    pub fn finish_close(&mut self, ticket: CloseTicket, viewport: &mut impl Viewport) -> bool {
        if self.phase != ModalPhase::Closing || ticket.0 != self.generation {
            return false;
        }
        self.phase = ModalPhase::Closed;
        self.index = None;
        let restored = self.lock.release(viewport);
        tracing::debug!(restored = ?restored, "modal closed");
        true
    }

    /// Feed a key press.
    pub fn handle_key(&mut self, key: ModalKey, visible: usize) -> ModalStep {
        if !self.phase.is_active() {
            return ModalStep::Nothing;
        }
        match key {
            ModalKey::Next => self.next(visible).map_or(ModalStep::Nothing, ModalStep::Show),
            ModalKey::Previous => self
                .previous(visible)
                .map_or(ModalStep::Nothing, ModalStep::Show),
            ModalKey::Close => self.close_step(),
        }
    }

    /// Feed a finished swipe gesture.
    pub fn handle_swipe(&mut self, outcome: SwipeOutcome) -> ModalStep {
        match outcome {
            SwipeOutcome::Close => self.close_step(),
            SwipeOutcome::Ignore => ModalStep::Nothing,
        }
    }

    fn close_step(&mut self) -> ModalStep {
        self.begin_close()
            .map_or(ModalStep::Nothing, ModalStep::Close)
    }
}
