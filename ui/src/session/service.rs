use api::{GenerateError, GenerationResponse, GenerationService, HttpGenerationService, UploadPayload};

/// The generation service the running app talks to, or the reason it can't.
#[derive(Debug, Clone)]
pub enum GenerationBackend {
    Http(HttpGenerationService),
    Unconfigured(String),
}

impl GenerationBackend {
    pub fn from_env() -> Self {
        match HttpGenerationService::from_env() {
            Ok(service) => Self::Http(service),
            Err(err) => {
                tracing::warn!("generation service unavailable: {err}");
                let reason = match err {
                    GenerateError::Unconfigured(reason) => reason,
                    other => other.to_string(),
                };
                Self::Unconfigured(reason)
            }
        }
    }
}

impl GenerationService for GenerationBackend {
    async fn generate(&self, upload: UploadPayload) -> Result<GenerationResponse, GenerateError> {
        match self {
            Self::Http(service) => service.generate(upload).await,
            Self::Unconfigured(reason) => Err(GenerateError::Unconfigured(reason.clone())),
        }
    }
}
