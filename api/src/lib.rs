//! Client for the remote flashcard generation service.
//!
//! The service turns an uploaded document into question/answer pairs. This
//! crate only knows how to reach it: where it lives ([`config`]), what it
//! answers ([`model`]) and how a single upload is sent ([`client`]).

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{GenerationService, HttpGenerationService, UploadPayload};
pub use config::ServiceConfig;
pub use error::{ConfigError, GenerateError};
pub use model::{parse_generation, CardPayload, GenerationResponse};
