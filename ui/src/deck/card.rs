use serde::{Deserialize, Serialize};

use api::CardPayload;

/// One question/answer pair. `show_answer` is display state only; it is stored
/// with history entries but always reset when a deck is shown again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub show_answer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_links: Option<Vec<String>>,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            show_answer: false,
            context_links: None,
        }
    }

    pub fn with_links(mut self, links: Vec<String>) -> Self {
        self.context_links = Some(links);
        self
    }

    /// Same card, question side up.
    pub fn hidden(mut self) -> Self {
        self.show_answer = false;
        self
    }

    pub fn toggle(&mut self) {
        self.show_answer = !self.show_answer;
    }

    pub fn links(&self) -> &[String] {
        self.context_links.as_deref().unwrap_or_default()
    }
}

impl From<CardPayload> for Flashcard {
    fn from(payload: CardPayload) -> Self {
        Self {
            question: payload.question,
            answer: payload.answer,
            show_answer: false,
            context_links: payload.context_links.filter(|links| !links.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Index reached from `index` in a deck of `len` cards, wrapping at both ends.
    pub fn step(self, index: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let index = index.min(len - 1);
        match self {
            Direction::Next => (index + 1) % len,
            Direction::Previous => (index + len - 1) % len,
        }
    }
}
