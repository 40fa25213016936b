use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::error::GenerateError;
use crate::model::{parse_generation, GenerationResponse};

pub const API_KEY_HEADER: &str = "x-api-key";
pub const FILE_FIELD: &str = "file";

/// A validated document ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPayload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Anything able to turn one uploaded document into flashcards.
///
/// A call is fire-once: implementations must not retry.
#[allow(async_fn_in_trait)]
pub trait GenerationService {
    async fn generate(&self, upload: UploadPayload) -> Result<GenerationResponse, GenerateError>;
}

/// Multipart `POST` against the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpGenerationService {
    http: Client,
    config: ServiceConfig,
}

impl HttpGenerationService {
    pub fn new(config: ServiceConfig) -> Result<Self, GenerateError> {
        let http = Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// Build a client from `FLASHDECK_API_URL` / `FLASHDECK_API_KEY`.
    pub fn from_env() -> Result<Self, GenerateError> {
        Self::new(ServiceConfig::load()?)
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl GenerationService for HttpGenerationService {
    async fn generate(&self, upload: UploadPayload) -> Result<GenerationResponse, GenerateError> {
        let UploadPayload {
            file_name,
            mime,
            bytes,
        } = upload;

        debug!(file = %file_name, bytes = bytes.len(), "sending document to generation service");

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(&mime)?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(API_KEY_HEADER, &self.config.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "generation service rejected upload");
            return Err(GenerateError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_generation(&body)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// What the stub server saw: lowercased request head and raw body.
    struct Received {
        head: String,
        body: String,
    }

    /// Answer exactly one request on a loopback port with `status` and `body`.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Received>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/generate", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let received = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            received
        });

        (url, handle)
    }

    async fn read_request(socket: &mut TcpStream) -> Received {
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];

        let head_end = loop {
            let n = socket.read(&mut buf).await.unwrap();
            assert!(n > 0, "client hung up before sending headers");
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&raw[..head_end]).to_lowercase();
        let length: usize = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse().ok())
            .expect("multipart body should have a known length");

        while raw.len() < head_end + length {
            let n = socket.read(&mut buf).await.unwrap();
            assert!(n > 0, "client hung up mid-body");
            raw.extend_from_slice(&buf[..n]);
        }

        Received {
            head,
            body: String::from_utf8_lossy(&raw[head_end..head_end + length]).into_owned(),
        }
    }

    fn service(url: &str) -> HttpGenerationService {
        HttpGenerationService::new(ServiceConfig::new(url, "secret-key").unwrap()).unwrap()
    }

    fn notes() -> UploadPayload {
        UploadPayload {
            file_name: "notes.txt".into(),
            mime: "text/plain".into(),
            bytes: b"mitochondria is the powerhouse".to_vec(),
        }
    }

    #[tokio::test]
    async fn posts_file_field_with_api_key() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"message":"done","flashcards":[{"question":"Q1","answer":"A1"}]}"#,
        )
        .await;

        let response = service(&url).generate(notes()).await.unwrap();
        let received = server.await.unwrap();

        assert!(received.head.starts_with("post /generate http/1.1\r\n"));
        assert!(received.head.contains("\r\nx-api-key: secret-key\r\n"));
        assert!(received.head.contains("content-type: multipart/form-data; boundary="));
        assert!(received
            .body
            .contains(r#"Content-Disposition: form-data; name="file"; filename="notes.txt""#));
        assert!(received.body.contains("Content-Type: text/plain"));
        assert!(received.body.contains("mitochondria is the powerhouse"));

        assert_eq!(response.message, "done");
        assert_eq!(response.flashcards.len(), 1);
        assert_eq!(response.flashcards[0].question, "Q1");
    }

    #[tokio::test]
    async fn non_success_status_is_upstream_without_parsing() {
        let (url, server) = serve_once("503 Service Unavailable", "<html>busy</html>").await;

        let err = service(&url).generate(notes()).await.unwrap_err();
        server.await.unwrap();

        assert_eq!(err, GenerateError::Upstream { status: 503 });
        assert_eq!(err.to_string(), crate::error::UPSTREAM_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn success_with_wrong_shape_is_parse_failure() {
        let (url, server) = serve_once("200 OK", r#"{"message":"done"}"#).await;

        let err = service(&url).generate(notes()).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, GenerateError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn refused_connection_is_network_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/generate", listener.local_addr().unwrap());
        drop(listener);

        let err = service(&url).generate(notes()).await.unwrap_err();
        assert!(matches!(err, GenerateError::Network(_)), "got {err:?}");
    }
}
