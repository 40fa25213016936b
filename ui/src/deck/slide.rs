//! Cosmetic slide transition between cards.
//!
//! `Idle → SlidingOut → IndexChanged → SlidingIn → Idle`. A transition can't
//! be cancelled or restarted while running; the view advances it on a timer
//! and moves the deck index when it reports `IndexChanged`. Nothing here
//! touches deck data.

use super::Direction;

/// Duration of each timed phase (slide-out, slide-in).
pub const SLIDE_PHASE_MS: u64 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlidePhase {
    #[default]
    Idle,
    SlidingOut(Direction),
    IndexChanged(Direction),
    SlidingIn(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideTransition {
    phase: SlidePhase,
}

impl SlideTransition {
    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == SlidePhase::Idle
    }

    /// Begin sliding towards `direction`. Returns `false` if a slide is
    /// already running.
    pub fn start(&mut self, direction: Direction) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.phase = SlidePhase::SlidingOut(direction);
        true
    }

    /// Move to the next phase and return it.
    pub fn advance(&mut self) -> SlidePhase {
        self.phase = match self.phase {
            SlidePhase::Idle => SlidePhase::Idle,
            SlidePhase::SlidingOut(dir) => SlidePhase::IndexChanged(dir),
            SlidePhase::IndexChanged(dir) => SlidePhase::SlidingIn(dir),
            SlidePhase::SlidingIn(_) => SlidePhase::Idle,
        };
        self.phase
    }

    /// CSS modifier for the card container.
    pub fn css_class(&self) -> &'static str {
        match self.phase {
            SlidePhase::Idle => "",
            SlidePhase::SlidingOut(Direction::Next) => "deck__card--out-left",
            SlidePhase::SlidingOut(Direction::Previous) => "deck__card--out-right",
            SlidePhase::IndexChanged(Direction::Next) => "deck__card--enter-right",
            SlidePhase::IndexChanged(Direction::Previous) => "deck__card--enter-left",
            SlidePhase::SlidingIn(_) => "deck__card--in",
        }
    }
}
