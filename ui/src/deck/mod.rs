//! Flashcards, deck navigation and the flip/slide presentation.

mod card;
pub use card::{Direction, Flashcard};

mod slide;
pub use slide::{SlidePhase, SlideTransition, SLIDE_PHASE_MS};

mod view;
pub use view::{CardDeck, FlashCard};
