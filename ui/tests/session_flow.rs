//! Upload → generate → study → history, driven against a scripted generation
//! service and in-memory storage.

use std::cell::Cell;
use std::rc::Rc;

use api::{CardPayload, GenerateError, GenerationResponse, GenerationService, UploadPayload};
use futures::executor::block_on;
use ui::core::storage::MemoryStorage;
use ui::deck::Direction;
use ui::history::{HistoryStore, HISTORY_LIMIT};
use ui::session::{ErrorKind, SessionController, SubmitError, ValidationError};

#[derive(Clone)]
struct ScriptedService {
    calls: Rc<Cell<usize>>,
    cards: Vec<(&'static str, &'static str)>,
    status: Option<u16>,
}

impl ScriptedService {
    fn answering(cards: &[(&'static str, &'static str)]) -> Self {
        Self {
            calls: Rc::default(),
            cards: cards.to_vec(),
            status: None,
        }
    }

    fn failing_with(status: u16) -> Self {
        Self {
            calls: Rc::default(),
            cards: Vec::new(),
            status: Some(status),
        }
    }

    fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl GenerationService for ScriptedService {
    async fn generate(&self, upload: UploadPayload) -> Result<GenerationResponse, GenerateError> {
        self.calls.set(self.calls.get() + 1);
        assert!(!upload.bytes.is_empty(), "upload body should carry the file");

        if let Some(status) = self.status {
            return Err(GenerateError::Upstream { status });
        }
        Ok(GenerationResponse {
            message: "Flashcards generated successfully".into(),
            flashcards: self
                .cards
                .iter()
                .map(|(q, a)| CardPayload {
                    question: q.to_string(),
                    answer: a.to_string(),
                    context_links: None,
                })
                .collect(),
        })
    }
}

fn controller(
    service: &ScriptedService,
    storage: &MemoryStorage,
) -> SessionController<ScriptedService, MemoryStorage> {
    SessionController::new(service.clone(), HistoryStore::open(storage.clone()))
}

fn generate_deck(
    app: &mut SessionController<ScriptedService, MemoryStorage>,
    name: &str,
) -> Result<(), SubmitError> {
    app.session_mut()
        .select_file(name, Some("text/plain"), b"some notes".to_vec())
        .expect("valid text file");
    block_on(app.submit())
}

#[test]
fn small_text_file_becomes_a_studyable_deck() {
    let service = ScriptedService::answering(&[("Q1", "A1")]);
    let storage = MemoryStorage::default();
    let mut app = controller(&service, &storage);

    let bytes = vec![b'x'; 1024];
    app.session_mut()
        .select_file("notes.txt", Some("text/plain"), bytes)
        .expect("1 KB text file is accepted");
    block_on(app.submit()).expect("generation succeeds");

    let session = app.session();
    assert_eq!(service.calls(), 1);
    assert!(!session.is_loading());
    assert!(!session.show_upload());
    assert_eq!(session.cards().len(), 1);
    assert_eq!(session.current_index(), 0);
    let card = session.current_card().expect("a card is on screen");
    assert_eq!(card.question, "Q1");
    assert!(!card.show_answer);

    app.flip(0);
    let card = app.session().current_card().expect("still on screen");
    assert!(card.show_answer);
    assert_eq!(card.answer, "A1");

    let history = app.history().entries();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].filename, "notes.txt");
    assert_eq!(history[0].card_count(), 1);
    assert!(
        storage.snapshot().is_some_and(|json| json.contains("notes.txt")),
        "history was written through to storage"
    );
}

#[test]
fn oversized_file_never_reaches_the_service() {
    let service = ScriptedService::answering(&[("Q1", "A1")]);
    let storage = MemoryStorage::default();
    let mut app = controller(&service, &storage);

    let four_mib = vec![0u8; 4 * 1024 * 1024];
    let err = app
        .session_mut()
        .select_file("big.txt", Some("text/plain"), four_mib)
        .expect_err("4 MiB exceeds the limit");
    assert!(matches!(err, ValidationError::SizeExceeded { .. }));
    assert_eq!(
        app.session().error().map(|e| e.kind()),
        Some(ErrorKind::SizeExceeded)
    );
    assert!(app.session().file().is_none());

    assert_eq!(block_on(app.submit()), Err(SubmitError::NoFile));
    assert_eq!(service.calls(), 0);
    assert!(app.history().is_empty());
    assert!(storage.snapshot().is_none());
}

#[test]
fn rejected_file_keeps_the_previous_selection() {
    let service = ScriptedService::answering(&[("Q1", "A1")]);
    let mut app = controller(&service, &MemoryStorage::default());

    app.session_mut()
        .select_file("slides.pptx", None, vec![1, 2, 3])
        .expect("pptx by extension");
    let err = app
        .session_mut()
        .check_candidate("photo.png", 10, Some("image/png"))
        .expect_err("png is not a document");
    assert!(matches!(err, ValidationError::UnsupportedType { .. }));
    assert_eq!(app.session().file().map(|f| f.name()), Some("slides.pptx"));
}

#[test]
fn navigation_wraps_and_lands_on_questions() {
    let service = ScriptedService::answering(&[("Q1", "A1"), ("Q2", "A2"), ("Q3", "A3")]);
    let mut app = controller(&service, &MemoryStorage::default());
    generate_deck(&mut app, "deck.txt").expect("generated");

    for _ in 0..3 {
        app.flip(app.session().current_index());
        app.navigate(Direction::Next);
        let card = app.session().current_card().expect("card");
        assert!(!card.show_answer);
    }
    assert_eq!(app.session().current_index(), 0);

    app.navigate(Direction::Previous);
    assert_eq!(app.session().current_index(), 2);
}

#[test]
fn loading_history_then_flipping_touches_one_card() {
    let service = ScriptedService::answering(&[("Q1", "A1"), ("Q2", "A2")]);
    let mut app = controller(&service, &MemoryStorage::default());
    generate_deck(&mut app, "first.txt").expect("generated");
    let id = app.history().entries()[0].id;

    app.session_mut().open_upload();
    assert!(app.load_history(id));
    assert!(!app.session().show_upload());
    assert_eq!(app.session().current_index(), 0);

    app.flip(0);
    let cards = app.session().cards();
    assert!(cards[0].show_answer);
    assert!(!cards[1].show_answer);

    // The stored copy stays unflipped.
    let stored = app.history().get(id).expect("entry kept");
    assert!(stored.flashcards.iter().all(|card| !card.show_answer));
}

#[test]
fn removing_the_displayed_entry_keeps_the_deck_on_screen() {
    let service = ScriptedService::answering(&[("Q1", "A1")]);
    let mut app = controller(&service, &MemoryStorage::default());
    generate_deck(&mut app, "keep.txt").expect("generated");
    let id = app.history().entries()[0].id;
    let before = app.session().clone();

    assert!(app.remove_history(id));
    assert!(app.history().is_empty());
    assert_eq!(app.session(), &before);
    assert!(!app.load_history(id));
}

#[test]
fn upstream_failure_leaves_prior_deck_and_history_alone() {
    let good = ScriptedService::answering(&[("Q1", "A1")]);
    let storage = MemoryStorage::default();
    let mut app = controller(&good, &storage);
    generate_deck(&mut app, "good.txt").expect("generated");
    let saved = storage.snapshot();

    let bad = ScriptedService::failing_with(503);
    let mut app = SessionController::new(bad.clone(), HistoryStore::open(storage.clone()));
    let err = generate_deck(&mut app, "bad.txt").expect_err("503 is a failure");

    assert!(matches!(err, SubmitError::UpstreamFailure { status: 503, .. }));
    assert!(err.to_string().starts_with("Failed to upload file"));
    assert_eq!(bad.calls(), 1);
    assert!(!app.session().is_loading());
    assert_eq!(
        app.session().error().map(|e| e.kind()),
        Some(ErrorKind::UpstreamFailure)
    );
    assert_eq!(app.history().len(), 1);
    assert_eq!(storage.snapshot(), saved);
}

#[test]
fn history_survives_a_reopen_and_stays_capped() {
    let service = ScriptedService::answering(&[("Q", "A")]);
    let storage = MemoryStorage::default();
    let mut app = controller(&service, &storage);

    for n in 0..=HISTORY_LIMIT {
        generate_deck(&mut app, &format!("file-{n}.txt")).expect("generated");
    }
    assert_eq!(app.history().len(), HISTORY_LIMIT);

    let reopened = HistoryStore::open(storage.clone());
    let names: Vec<&str> = reopened
        .entries()
        .iter()
        .map(|entry| entry.filename.as_str())
        .collect();
    assert_eq!(names.len(), HISTORY_LIMIT);
    assert_eq!(names.first(), Some(&"file-10.txt"));
    assert!(!names.contains(&"file-0.txt"));
}

#[test]
fn unwritable_storage_keeps_history_in_memory() {
    let service = ScriptedService::answering(&[("Q1", "A1")]);
    let mut app = controller(&service, &MemoryStorage::failing());

    generate_deck(&mut app, "offline.txt").expect("generation still succeeds");
    assert_eq!(app.history().len(), 1);
    assert!(app.history().persist_error().is_some());
    assert!(app.load_history(app.history().entries()[0].id));
}
