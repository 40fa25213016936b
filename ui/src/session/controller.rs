//! Client state for the study page and the transitions between its modes.
//!
//! [`Session`] is plain data plus transitions: selecting a file, starting and
//! finishing a submission, moving through the deck, flipping cards and showing
//! a stored deck. [`SessionController`] pairs it with the history store and a
//! generation service and is what the view drives.

use api::{GenerateError, GenerationResponse, GenerationService, UploadPayload};
use tracing::{info, warn};

use crate::core::storage::StorageBackend;
use crate::deck::{Direction, Flashcard};
use crate::history::{HistoryEntry, HistoryStore};

use super::upload::{self, DocumentKind, UploadFile};
use super::{SessionError, SubmitError, ValidationError};

/// Confirmation shown above the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The service's own message for a fresh deck, shown as received.
    Generated(String),
    /// A stored deck created at `date` is on screen.
    HistoryLoaded { date: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    file: Option<UploadFile>,
    cards: Vec<Flashcard>,
    current: usize,
    loading: bool,
    error: Option<SessionError>,
    success: Option<Notice>,
    show_upload: bool,
    deck_title: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            file: None,
            cards: Vec::new(),
            current: 0,
            loading: false,
            error: None,
            success: None,
            show_upload: true,
            deck_title: None,
        }
    }
}

/// Proof that a submission was started; hand it back to finish it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub file_name: String,
    pub payload: UploadPayload,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&UploadFile> {
        self.file.as_ref()
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.cards.get(self.current)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    pub fn success(&self) -> Option<&Notice> {
        self.success.as_ref()
    }

    pub fn show_upload(&self) -> bool {
        self.show_upload
    }

    pub fn deck_title(&self) -> Option<&str> {
        self.deck_title.as_deref()
    }

    /// Whether a deck should be on screen.
    pub fn is_studying(&self) -> bool {
        !self.show_upload && !self.cards.is_empty()
    }

    /// Validate a candidate by name, size and MIME type before its contents
    /// are read. A rejection is shown in the error banner; the previously
    /// selected file stays selected.
    pub fn check_candidate(
        &mut self,
        name: &str,
        size: u64,
        mime: Option<&str>,
    ) -> Result<DocumentKind, ValidationError> {
        upload::validate(name, size, mime).map_err(|err| self.reject(err))
    }

    /// Validate and keep a file for the next submission.
    pub fn select_file(
        &mut self,
        name: impl Into<String>,
        mime: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<(), ValidationError> {
        let file = UploadFile::new(name, mime, bytes).map_err(|err| self.reject(err))?;
        self.file = Some(file);
        self.error = None;
        Ok(())
    }

    fn reject(&mut self, err: ValidationError) -> ValidationError {
        self.error = Some(SessionError::Validation(err.clone()));
        err
    }

    /// Claim the loading flag for one submission.
    ///
    /// Fails with `InFlight` while another submission is pending (state is
    /// left alone) and with `NoFile` when nothing valid is selected.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitError> {
        if self.loading {
            return Err(SubmitError::InFlight);
        }
        let Some(file) = self.file.as_ref() else {
            self.error = Some(SessionError::Submit(SubmitError::NoFile));
            return Err(SubmitError::NoFile);
        };

        let ticket = SubmitTicket {
            file_name: file.name().to_string(),
            payload: file.to_payload(),
        };
        self.loading = true;
        self.error = None;
        self.success = None;
        Ok(ticket)
    }

    /// Release the loading flag and apply the service's answer. On success the
    /// new deck is shown and the entry to record in history is returned.
    pub fn finish_submit(
        &mut self,
        ticket: &SubmitTicket,
        outcome: Result<GenerationResponse, GenerateError>,
    ) -> Result<HistoryEntry, SubmitError> {
        self.loading = false;

        match outcome {
            Ok(response) => {
                let cards: Vec<Flashcard> =
                    response.flashcards.into_iter().map(Flashcard::from).collect();
                let entry = HistoryEntry::now(ticket.file_name.clone(), cards.clone());

                self.cards = cards;
                self.current = 0;
                self.show_upload = false;
                self.success = Some(Notice::Generated(response.message));
                self.deck_title = Some(ticket.file_name.clone());
                Ok(entry)
            }
            Err(err) => {
                let err = SubmitError::from(err);
                self.error = Some(SessionError::Submit(err.clone()));
                Err(err)
            }
        }
    }

    /// Step through the deck, wrapping at both ends. The card landed on
    /// always shows its question.
    pub fn navigate(&mut self, direction: Direction) {
        if self.cards.is_empty() {
            return;
        }
        self.current = direction.step(self.current, self.cards.len());
        self.cards[self.current].show_answer = false;
    }

    /// Toggle the answer of card `index` only.
    pub fn flip(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.toggle();
        }
    }

    /// Show a stored deck in place of whatever is on screen.
    pub fn show_history_deck(&mut self, filename: &str, date: &str, cards: Vec<Flashcard>) {
        self.cards = cards;
        self.current = 0;
        self.show_upload = false;
        self.error = None;
        self.success = Some(Notice::HistoryLoaded {
            date: date.to_string(),
        });
        self.deck_title = Some(filename.to_string());
    }

    pub fn open_upload(&mut self) {
        self.show_upload = true;
        self.success = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

/// The live session together with its history and generation service.
#[derive(Debug)]
pub struct SessionController<S, B> {
    session: Session,
    history: HistoryStore<B>,
    service: S,
}

impl<S, B> SessionController<S, B>
where
    S: GenerationService + Clone,
    B: StorageBackend,
{
    pub fn new(service: S, history: HistoryStore<B>) -> Self {
        Self {
            session: Session::new(),
            history,
            service,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn history(&self) -> &HistoryStore<B> {
        &self.history
    }

    /// Start a submission. The returned service handle is used to run the
    /// request outside of any borrow of the controller.
    pub fn begin_submit(&mut self) -> Result<(SubmitTicket, S), SubmitError> {
        let ticket = self.session.begin_submit()?;
        info!(
            file = %ticket.file_name,
            bytes = ticket.payload.bytes.len(),
            "submitting document"
        );
        Ok((ticket, self.service.clone()))
    }

    /// Apply the outcome of a submission and record a successful one.
    pub fn complete_submit(
        &mut self,
        ticket: &SubmitTicket,
        outcome: Result<GenerationResponse, GenerateError>,
    ) -> Result<(), SubmitError> {
        match self.session.finish_submit(ticket, outcome) {
            Ok(entry) => {
                info!(file = %entry.filename, cards = entry.card_count(), "deck generated");
                self.history.append(entry);
                Ok(())
            }
            Err(err) => {
                match &err {
                    SubmitError::UpstreamFailure { status, .. } => {
                        warn!(status = *status, "submission failed: {err}")
                    }
                    _ => warn!("submission failed: {err}"),
                }
                Err(err)
            }
        }
    }

    /// Submit the selected file and wait for the result.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let (ticket, service) = self.begin_submit()?;
        let outcome = service.generate(ticket.payload.clone()).await;
        self.complete_submit(&ticket, outcome)
    }

    pub fn navigate(&mut self, direction: Direction) {
        self.session.navigate(direction);
    }

    pub fn flip(&mut self, index: usize) {
        self.session.flip(index);
    }

    /// Show stored deck `id`. Returns `false` if it no longer exists.
    pub fn load_history(&mut self, id: i64) -> bool {
        let (Some(entry), Some(cards)) = (self.history.get(id), self.history.load(id)) else {
            return false;
        };
        self.session.show_history_deck(&entry.filename, &entry.date, cards);
        true
    }

    /// Forget stored deck `id`. The deck on screen is unaffected.
    pub fn remove_history(&mut self, id: i64) -> bool {
        self.history.remove(id)
    }
}
