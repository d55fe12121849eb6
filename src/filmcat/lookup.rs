//! Title-keyed metadata lookup against an OMDb-style JSON endpoint.
//!
//! This client is standalone: it knows nothing about the catalog or its
//! persistence. Requests are blocking and have no timeout: a stalled service
//! blocks the caller until the connection gives up.

use crate::config::LookupConfig;
use crate::error::{CatalogError, Result};
use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::Value;

pub struct MetadataClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// The decoded response body. Its shape belongs to the remote service.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataResult(pub Value);

impl MetadataResult {
    /// String field by name, e.g. `"Year"` or `"Director"`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// OMDb answers misses with `"Response": "False"` and an `"Error"` field.
    pub fn is_found(&self) -> bool {
        self.field("Response") != Some("False")
    }
}

impl MetadataClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        // reqwest's blocking client defaults to a 30s timeout; lookups wait instead.
        let client = Client::builder().timeout(None).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &LookupConfig) -> Result<Self> {
        Self::new(&config.base_url, &config.api_key)
    }

    pub fn request_url(&self, title: &str) -> Result<Url> {
        Url::parse_with_params(
            &self.base_url,
            &[("apikey", self.api_key.as_str()), ("t", title)],
        )
        .map_err(|e| CatalogError::Lookup(format!("invalid endpoint {}: {}", self.base_url, e)))
    }

    pub fn fetch_by_title(&self, title: &str) -> Result<MetadataResult> {
        let url = self.request_url(title)?;
        tracing::debug!(%title, "fetching movie metadata");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Lookup(format!(
                "metadata service returned {}",
                status
            )));
        }

        let body = response.text()?;
        parse_body(&body)
    }
}

pub fn parse_body(body: &str) -> Result<MetadataResult> {
    serde_json::from_str(body)
        .map(MetadataResult)
        .map_err(|e| CatalogError::Lookup(format!("response is not JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    fn client() -> MetadataClient {
        MetadataClient::new("http://www.omdbapi.com/", "secret").unwrap()
    }

    /// Serve one canned HTTP response on a local port. Returns the base URL and
    /// a receiver for the request head the client sent.
    fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            let _ = tx.send(String::from_utf8_lossy(&head).into_owned());

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        (base_url, rx)
    }

    #[test]
    fn url_carries_key_and_encoded_title() {
        let url = client().request_url("Star Wars: A New Hope & more").unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("apikey".to_string(), "secret".to_string()),
                ("t".to_string(), "Star Wars: A New Hope & more".to_string()),
            ]
        );
        assert!(!url.as_str().contains(' '));
        assert!(url.as_str().starts_with("http://www.omdbapi.com/?apikey=secret&t="));
    }

    #[test]
    fn bad_base_url_is_lookup_error() {
        let client = MetadataClient::new("not a url", "k").unwrap();
        assert!(client.request_url("Dune").unwrap_err().is_lookup());
    }

    #[test]
    fn parses_found_response() {
        let result =
            parse_body(r#"{"Title":"Dune","Year":"2021","Director":"Denis Villeneuve","Response":"True"}"#)
                .unwrap();
        assert!(result.is_found());
        assert_eq!(result.field("Year"), Some("2021"));
        assert_eq!(result.field("Missing"), None);
    }

    #[test]
    fn parses_miss_response() {
        let result = parse_body(r#"{"Response":"False","Error":"Movie not found!"}"#).unwrap();
        assert!(!result.is_found());
        assert_eq!(result.field("Error"), Some("Movie not found!"));
    }

    #[test]
    fn non_json_body_is_lookup_error() {
        let err = parse_body("<html>oops</html>").unwrap_err();
        assert!(err.is_lookup());
    }

    #[test]
    fn from_config_uses_configured_endpoint() {
        let config = LookupConfig {
            base_url: "https://example.test/api".into(),
            api_key: "abc".into(),
        };
        let url = MetadataClient::from_config(&config)
            .unwrap()
            .request_url("x")
            .unwrap();
        assert_eq!(url.as_str(), "https://example.test/api?apikey=abc&t=x");
    }

    #[test]
    fn fetch_returns_parsed_body() {
        let (base_url, requests) = serve_once(
            "200 OK",
            r#"{"Title":"Blade Runner","Year":"1982","Response":"True"}"#,
        );
        let client = MetadataClient::new(base_url, "secret").unwrap();

        let result = client.fetch_by_title("Blade Runner").unwrap();

        assert!(result.is_found());
        assert_eq!(result.field("Year"), Some("1982"));
        let head = requests.recv().unwrap();
        assert!(head.starts_with("GET /?apikey=secret&t=Blade+Runner HTTP/1.1"));
    }

    #[test]
    fn fetch_non_success_status_is_lookup_error() {
        let (base_url, _requests) =
            serve_once("401 Unauthorized", r#"{"Response":"False","Error":"Invalid API key!"}"#);
        let client = MetadataClient::new(base_url, "wrong").unwrap();

        let err = client.fetch_by_title("Dune").unwrap_err();

        assert!(matches!(err, CatalogError::Lookup(ref msg) if msg.contains("401")));
    }

    #[test]
    fn fetch_non_json_body_is_lookup_error() {
        let (base_url, _requests) = serve_once("200 OK", "<html>maintenance</html>");
        let client = MetadataClient::new(base_url, "secret").unwrap();

        let err = client.fetch_by_title("Dune").unwrap_err();

        assert!(matches!(err, CatalogError::Lookup(_)));
    }

    #[test]
    fn fetch_refused_connection_is_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);
        let client = MetadataClient::new(base_url, "secret").unwrap();

        let err = client.fetch_by_title("Dune").unwrap_err();

        assert!(matches!(err, CatalogError::Http(_)));
        assert!(err.is_lookup());
    }
}
