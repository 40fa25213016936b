//! Upload → generate → study lifecycle.

mod controller;
pub use controller::{Notice, Session, SessionController, SubmitTicket};

mod error;
pub use error::{ErrorKind, SessionError, SubmitError, ValidationError};

mod service;
pub use service::GenerationBackend;

mod text;
pub use text::{error_hint, error_text, notice_text};

pub mod upload;
pub use upload::{DocumentKind, UploadFile, MAX_UPLOAD_BYTES};

mod view;
pub use view::StudyView;

use crate::core::storage::{self, StorageBackend, HISTORY_KEY};
use crate::history::HistoryStore;

/// Controller type the running app uses.
pub type AppController = SessionController<GenerationBackend, Box<dyn StorageBackend>>;

/// Build the app's controller: service from the environment, history from
/// the platform's durable storage.
pub fn open_app_controller() -> AppController {
    let history = HistoryStore::open(storage::default_backend(HISTORY_KEY));
    SessionController::new(GenerationBackend::from_env(), history)
}
