//! Best-effort mirroring of new contacts to a spreadsheet endpoint
//!
//! One POST per submission. The response status and body are not looked
//! at: a request that reaches the server counts as delivered, and only
//! transport failures (DNS, refused connection, TLS) come back as errors.
//! There is no timeout, retry or cancellation. The caller has already
//! committed the contact locally before this runs.

use crate::core::contact::Contact;
use crate::core::error::{Error, Result};
use reqwest::Url;
use serde::Serialize;
use std::fmt;

/// A parsed http(s) endpoint URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(Url);

impl Endpoint {
    /// Parses a user-entered URL. Only `http` and `https` are accepted.
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input.trim()).map_err(|e| Error::InvalidEndpoint(e.to_string()))?;
        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(Self(url)),
            "http" | "https" => Err(Error::InvalidEndpoint("missing host".to_string())),
            other => Err(Error::InvalidEndpoint(format!(
                "unsupported scheme '{other}'"
            ))),
        }
    }

    pub fn url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// JSON body sent to the endpoint. Identifier and timestamp stay local.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub cpf: String,
    pub phone: String,
}

impl From<&Contact> for Submission {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            cpf: contact.tax_id.clone(),
            phone: contact.phone.clone(),
        }
    }
}

/// HTTP client wrapper for endpoint submissions
#[derive(Debug, Clone, Default)]
pub struct RemoteSubmitter {
    client: reqwest::Client,
}

impl RemoteSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts `submission` to `endpoint` once.
    ///
    /// Success means the request was sent and some response came back; the
    /// status is only logged.
    pub async fn submit(&self, endpoint: &Endpoint, submission: &Submission) -> Result<()> {
        tracing::debug!(endpoint = %endpoint, "Submitting contact to endpoint");
        let response = self
            .client
            .post(endpoint.url().clone())
            .json(submission)
            .send()
            .await?;
        tracing::info!(
            endpoint = %endpoint,
            status = %response.status(),
            "Contact submitted (response not inspected)"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn submission() -> Submission {
        Submission {
            name: "Ana Silva".to_string(),
            cpf: "123.456.789-01".to_string(),
            phone: "(11) 99999-8888".to_string(),
        }
    }

    /// Accepts one connection, captures the raw request and answers `status_line`.
    async fn serve_once(listener: TcpListener, status_line: &'static str) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(head_end) = text.find("\r\n\r\n") {
                let content_length = text[..head_end]
                    .lines()
                    .find_map(|l| {
                        let (k, v) = l.split_once(':')?;
                        k.eq_ignore_ascii_case("content-length")
                            .then(|| v.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + content_length {
                    break;
                }
            }
        }
        let reply = format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        socket.write_all(reply.as_bytes()).await.unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_endpoint_parse() {
        assert!(Endpoint::parse("https://script.google.com/macros/s/abc/exec").is_ok());
        assert!(Endpoint::parse("  http://localhost:8080/hook ").is_ok());
        assert!(matches!(
            Endpoint::parse("ftp://example.com"),
            Err(Error::InvalidEndpoint(_))
        ));
        assert!(matches!(
            Endpoint::parse("not a url"),
            Err(Error::InvalidEndpoint(_))
        ));
        assert!(Endpoint::parse("").is_err());
    }

    #[test]
    fn test_submission_json_shape() {
        let contact = crate::core::test_helpers::create_test_contact("Ana Silva", "123.456.789-01");
        let json = serde_json::to_value(Submission::from(&contact)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ana Silva",
                "cpf": "123.456.789-01",
                "phone": "(11) 99999-8888",
            })
        );
    }

    #[tokio::test]
    async fn test_submit_posts_json() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(listener, "HTTP/1.1 200 OK"));

        let endpoint = Endpoint::parse(&format!("http://{addr}/hook")).unwrap();
        RemoteSubmitter::new()
            .submit(&endpoint, &submission())
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /hook HTTP/1.1"));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        assert!(request.contains(r#""cpf":"123.456.789-01""#));
        assert!(!request.contains("createdAt"));
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(listener, "HTTP/1.1 500 Internal Server Error"));

        let endpoint = Endpoint::parse(&format!("http://{addr}/")).unwrap();
        let result = RemoteSubmitter::new().submit(&endpoint, &submission()).await;
        assert!(result.is_ok());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_refused_connection_is_reported() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = Endpoint::parse(&format!("http://{addr}/")).unwrap();
        let result = RemoteSubmitter::new().submit(&endpoint, &submission()).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
