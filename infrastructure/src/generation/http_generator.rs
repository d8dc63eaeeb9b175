//! HTTP adapter for the quiz generation service

use async_trait::async_trait;
use learnpal_application::{GenerationError, QuizGenerator};
use learnpal_domain::QuizRequest;
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use tracing::debug;

/// Maximum response body size (2 MB)
const MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

const USER_AGENT: &str = concat!("learnpal/", env!("CARGO_PKG_VERSION"));

/// [`QuizGenerator`] that POSTs `{ "prompt": ... }` as JSON to a fixed endpoint
pub struct HttpQuizGenerator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpQuizGenerator {
    /// Create a generator for `endpoint`.
    ///
    /// `timeout` bounds each request on the client side; `None` lets a
    /// request wait indefinitely.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GenerationError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GenerationError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn map_reqwest_error(error: reqwest::Error) -> GenerationError {
    if error.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::ConnectionError(error.to_string())
    }
}

/// Turn a raw HTTP response into the response document.
///
/// Non-2xx statuses are errors regardless of the body.
pub(crate) fn decode_response(
    status: StatusCode,
    body: &[u8],
) -> Result<serde_json::Value, GenerationError> {
    if !status.is_success() {
        return Err(GenerationError::HttpStatus(status.as_u16()));
    }
    if body.len() > MAX_BODY_SIZE {
        return Err(GenerationError::InvalidBody(format!(
            "response too large: {} bytes (max: {} bytes)",
            body.len(),
            MAX_BODY_SIZE
        )));
    }
    serde_json::from_slice(body).map_err(|e| GenerationError::InvalidBody(e.to_string()))
}

#[async_trait]
impl QuizGenerator for HttpQuizGenerator {
    async fn generate(&self, request: &QuizRequest) -> Result<serde_json::Value, GenerationError> {
        let start = Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if let Some(length) = response.content_length()
            && length > MAX_BODY_SIZE as u64
        {
            return Err(GenerationError::InvalidBody(format!(
                "response too large: {} bytes (max: {} bytes)",
                length, MAX_BODY_SIZE
            )));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;

        debug!(
            "Generation service answered {} with {} bytes in {} ms",
            status.as_u16(),
            body.len(),
            start.elapsed().as_millis()
        );

        decode_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one HTTP response and hand back the request body received
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/api/quiz", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 1024];

            // Read headers, then as many body bytes as Content-Length announces
            let request_body = loop {
                let n = socket.read(&mut buf).await.unwrap();
                received.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&received).to_string();
                if let Some(split) = text.find("\r\n\r\n") {
                    let headers = text[..split].to_ascii_lowercase();
                    let length = headers
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .map(|v| v.trim().parse::<usize>().unwrap())
                        .unwrap_or(0);
                    let body = &text[split + 4..];
                    if body.len() >= length {
                        break body.to_string();
                    }
                }
                if n == 0 {
                    break String::new();
                }
            };

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request_body
        });

        (url, handle)
    }

    #[test]
    fn test_decode_success() {
        let body = br#"{"status":"success","mcqs":[]}"#;
        let value = decode_response(StatusCode::OK, body).unwrap();
        assert_eq!(value["status"], "success");
    }

    #[test]
    fn test_decode_error_status_ignores_body() {
        let body = br#"{"status":"success","mcqs":[]}"#;
        assert!(matches!(
            decode_response(StatusCode::INTERNAL_SERVER_ERROR, body),
            Err(GenerationError::HttpStatus(500))
        ));
    }

    #[test]
    fn test_decode_invalid_json() {
        assert!(matches!(
            decode_response(StatusCode::OK, b"<html>oops</html>"),
            Err(GenerationError::InvalidBody(_))
        ));
    }

    #[tokio::test]
    async fn test_posts_prompt_and_returns_document() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"status":"success","mcqs":[{"question":"q","options":{"A":"a"},"answer":"A"}]}"#,
        )
        .await;

        let generator = HttpQuizGenerator::new(url, Some(Duration::from_secs(5))).unwrap();
        let value = generator
            .generate(&QuizRequest::new("osmosis"))
            .await
            .unwrap();
        assert_eq!(value["mcqs"][0]["answer"], "A");

        let request_body: serde_json::Value =
            serde_json::from_str(&server.await.unwrap()).unwrap();
        assert_eq!(request_body, json!({ "prompt": "osmosis" }));
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let (url, server) = serve_once("HTTP/1.1 503 Service Unavailable", "{}").await;

        let generator = HttpQuizGenerator::new(url, None).unwrap();
        let result = generator.generate(&QuizRequest::new("osmosis")).await;
        assert!(matches!(result, Err(GenerationError::HttpStatus(503))));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_connection_error() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/api/quiz", listener.local_addr().unwrap());
        drop(listener);

        let generator = HttpQuizGenerator::new(url, Some(Duration::from_secs(5))).unwrap();
        let result = generator.generate(&QuizRequest::new("osmosis")).await;
        assert!(matches!(result, Err(GenerationError::ConnectionError(_))));
    }
}
