//! Mobile menu state.
//!
//! `MenuState` is the plain model: the open flag plus the drawer's presence
//! phase. `MenuHandle` wraps it in a signal for components and schedules the
//! phase changes that wait on the browser.

use dioxus::prelude::*;

use super::motion::DrawerPose;

/// Lifecycle of the drawer element.
///
/// The drawer exists in the output in every phase except `Closed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerPhase {
    #[default]
    Closed,
    /// Mounted in the offset pose, about to move to rest
    Entering,
    Open,
    /// Moving back to the offset pose, removed when done
    Exiting,
}

impl DrawerPhase {
    pub fn is_mounted(&self) -> bool {
        !matches!(self, DrawerPhase::Closed)
    }

    pub fn pose(&self) -> DrawerPose {
        match self {
            DrawerPhase::Open => DrawerPose::Rest,
            DrawerPhase::Closed | DrawerPhase::Entering | DrawerPhase::Exiting => {
                DrawerPose::Offset
            }
        }
    }

    /// Next phase after the open flag becomes `open`.
    pub fn follow(self, open: bool) -> Self {
        match (self, open) {
            (DrawerPhase::Closed, true) => DrawerPhase::Entering,
            // Reopened mid-exit: head back to rest without remounting
            (DrawerPhase::Exiting, true) => DrawerPhase::Open,
            (DrawerPhase::Entering | DrawerPhase::Open, false) => DrawerPhase::Exiting,
            (phase, _) => phase,
        }
    }

    /// The drawer has been painted in its offset pose.
    pub fn revealed(self) -> Self {
        match self {
            DrawerPhase::Entering => DrawerPhase::Open,
            phase => phase,
        }
    }

    /// The exit transition has finished.
    pub fn settled(self) -> Self {
        match self {
            DrawerPhase::Exiting => DrawerPhase::Closed,
            phase => phase,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    phase: DrawerPhase,
}

impl MenuState {
    /// State for a header rendered already open or closed, with no transition pending.
    pub fn new(open: bool) -> Self {
        Self {
            open,
            phase: if open {
                DrawerPhase::Open
            } else {
                DrawerPhase::Closed
            },
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn phase(&self) -> DrawerPhase {
        self.phase
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        self.phase = self.phase.follow(open);
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    pub fn close(&mut self) {
        self.set_open(false);
    }

    pub fn reveal(&mut self) {
        self.phase = self.phase.revealed();
    }

    pub fn settle(&mut self) {
        self.phase = self.phase.settled();
    }

    /// Skip any pending transition and land on the phase the flag implies.
    pub fn finish(&mut self) {
        self.phase = self.phase.revealed().settled();
    }
}

/// Reactive menu state for one header instance.
#[derive(Clone, Copy, PartialEq)]
pub struct MenuHandle {
    state: Signal<MenuState>,
    /// Bumped on every flag change so stale timers can be ignored
    epoch: Signal<u64>,
}

impl MenuHandle {
    pub fn is_open(&self) -> bool {
        self.state.read().is_open()
    }

    pub fn phase(&self) -> DrawerPhase {
        self.state.read().phase()
    }

    pub fn toggle(&self) {
        let open = !self.is_open();
        self.set_open(open);
    }

    pub fn close(&self) {
        self.set_open(false);
    }

    pub fn set_open(&self, open: bool) {
        let mut state = self.state;
        let mut epoch = self.epoch;

        state.write().set_open(open);
        let ticket = *epoch.peek() + 1;
        epoch.set(ticket);
        tracing::debug!(open, phase = ?self.phase(), "mobile menu toggled");

        self.schedule(ticket);
    }

    /// Advance `Entering`/`Exiting` once the browser has had time to animate.
    #[cfg(target_arch = "wasm32")]
    fn schedule(&self, ticket: u64) {
        use gloo_timers::future::TimeoutFuture;

        use crate::app::motion::DRAWER_TWEEN;

        const FRAME_MS: u32 = 16;

        let mut state = self.state;
        let epoch = self.epoch;
        let phase = self.phase();
        let delay = match phase {
            DrawerPhase::Entering => FRAME_MS,
            DrawerPhase::Exiting => DRAWER_TWEEN.duration_ms(),
            DrawerPhase::Closed | DrawerPhase::Open => return,
        };

        spawn(async move {
            TimeoutFuture::new(delay).await;
            if *epoch.peek() != ticket {
                return;
            }
            match phase {
                DrawerPhase::Entering => state.write().reveal(),
                _ => state.write().settle(),
            }
        });
    }

    /// Outside the browser nothing animates, so phases settle at once.
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule(&self, _ticket: u64) {
        let mut state = self.state;
        state.write().finish();
    }
}

/// Create menu state for a header. `initially_open` only applies on mount.
pub fn use_menu(initially_open: bool) -> MenuHandle {
    let state = use_signal(|| MenuState::new(initially_open));
    let epoch = use_signal(|| 0u64);
    MenuHandle { state, epoch }
}
