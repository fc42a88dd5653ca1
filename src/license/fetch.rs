//! Retrieval of the canonical license document.
//!
//! `http` and `https` URLs are fetched with a single blocking GET bounded by
//! a timeout; `file` URLs are read from disk. Nothing is cached and nothing
//! is retried: every call performs one fresh read and any failure surfaces
//! as a [`LicsyncError::FetchError`] naming the URL.

use crate::error::{LicsyncError, Result};
use log::debug;
use reqwest::Url;
use std::time::Duration;

/// User agent sent with license downloads.
const USER_AGENT: &str = concat!("licsync/", env!("CARGO_PKG_VERSION"));

/// A place license text can be read from.
pub trait LicenseSource {
    /// Return the full UTF-8 text behind `url`.
    fn fetch(&self, url: &Url) -> Result<String>;
}

impl<T: LicenseSource + ?Sized> LicenseSource for &T {
    fn fetch(&self, url: &Url) -> Result<String> {
        (**self).fetch(url)
    }
}

/// Parse a configured source URL.
pub fn parse_source_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| LicsyncError::fetch(url, format!("malformed URL: {}", e)))
}

/// Fetches `http`, `https` and `file` URLs.
#[derive(Debug, Clone)]
pub struct UrlSource {
    timeout: Duration,
}

impl UrlSource {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn fetch_http(&self, url: &Url) -> Result<Vec<u8>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LicsyncError::fetch(url.as_str(), format!("HTTP client setup failed: {}", e)))?;

        debug!("GET {} (timeout {:?})", url, self.timeout);
        let response = client
            .get(url.clone())
            .send()
            .map_err(|e| LicsyncError::fetch(url.as_str(), e.to_string()))?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);
        if !status.is_success() {
            return Err(LicsyncError::fetch(url.as_str(), format!("HTTP {}", status)));
        }

        let body = response
            .bytes()
            .map_err(|e| LicsyncError::fetch(url.as_str(), format!("failed to read response: {}", e)))?;

        Ok(body.to_vec())
    }

    fn fetch_file(&self, url: &Url) -> Result<Vec<u8>> {
        let path = url
            .to_file_path()
            .map_err(|()| LicsyncError::fetch(url.as_str(), "not a local file path"))?;

        debug!("reading {}", path.display());
        std::fs::read(&path).map_err(|e| LicsyncError::fetch(url.as_str(), e.to_string()))
    }
}

impl LicenseSource for UrlSource {
    fn fetch(&self, url: &Url) -> Result<String> {
        let body = match url.scheme() {
            "http" | "https" => self.fetch_http(url)?,
            "file" => self.fetch_file(url)?,
            other => {
                return Err(LicsyncError::fetch(
                    url.as_str(),
                    format!("unsupported URL scheme '{}'", other),
                ));
            }
        };

        decode_body(url, body)
    }
}

/// Decode a response body as UTF-8 text, rejecting empty payloads.
fn decode_body(url: &Url, body: Vec<u8>) -> Result<String> {
    let text = String::from_utf8(body)
        .map_err(|_| LicsyncError::fetch(url.as_str(), "response is not valid UTF-8 text"))?;

    let text = match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    };

    if text.trim().is_empty() {
        return Err(LicsyncError::fetch(url.as_str(), "empty response body"));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};
    use tempfile::TempDir;

    fn file_url(path: &std::path::Path) -> Url {
        Url::from_file_path(path).unwrap()
    }

    /// Answer one HTTP request on a local port with `response`.
    ///
    /// The handle yields the raw request head that was received.
    fn serve_once(response: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = Url::parse(&format!(
            "http://{}/licenses/bsd-2-clause.txt",
            listener.local_addr().unwrap()
        ))
        .unwrap();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (url, handle)
    }

    #[test]
    fn test_fetch_http_ok() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 9\r\nConnection: close\r\n\r\nmeta\n---\n",
        );

        let text = UrlSource::new(Duration::from_secs(5)).fetch(&url).unwrap();

        assert_eq!(text, "meta\n---\n");
        let request = server.join().unwrap().to_ascii_lowercase();
        assert!(request.starts_with("get /licenses/bsd-2-clause.txt "));
        assert!(request.contains("user-agent: licsync/"));
    }

    #[test]
    fn test_fetch_http_not_found() {
        let (url, server) = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found",
        );

        let err = UrlSource::new(Duration::from_secs(5)).fetch(&url).unwrap_err();
        server.join().unwrap();

        match err {
            LicsyncError::FetchError { url: failed, reason } => {
                assert_eq!(failed, url.as_str());
                assert!(reason.contains("HTTP 404"), "reason: {}", reason);
            }
            other => panic!("expected FetchError, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_http_empty_body() {
        let (url, server) =
            serve_once("HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");

        let err = UrlSource::new(Duration::from_secs(5)).fetch(&url).unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, LicsyncError::FetchError { .. }));
        assert!(err.to_string().contains("empty response body"));
    }

    #[test]
    fn test_parse_source_url() {
        let url = parse_source_url("https://example.org/licenses/MIT.txt").unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_parse_source_url_malformed() {
        let err = parse_source_url("not a url").unwrap_err();

        assert!(matches!(err, LicsyncError::FetchError { .. }));
        assert!(err.to_string().contains("not a url"));
        assert!(err.to_string().contains("malformed URL"));
    }

    #[test]
    fn test_fetch_file_url() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("LICENSE.md");
        std::fs::write(&path, "meta\n---\nBody\n").unwrap();

        let text = UrlSource::new(Duration::from_secs(1))
            .fetch(&file_url(&path))
            .unwrap();

        assert_eq!(text, "meta\n---\nBody\n");
    }

    #[test]
    fn test_fetch_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let url = file_url(&temp_dir.path().join("missing.md"));

        let err = UrlSource::new(Duration::from_secs(1)).fetch(&url).unwrap_err();

        assert!(matches!(err, LicsyncError::FetchError { .. }));
        assert!(err.to_string().contains("missing.md"));
    }

    #[test]
    fn test_fetch_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("LICENSE.md");
        std::fs::write(&path, " \n\n").unwrap();

        let err = UrlSource::new(Duration::from_secs(1))
            .fetch(&file_url(&path))
            .unwrap_err();

        assert!(err.to_string().contains("empty response body"));
    }

    #[test]
    fn test_fetch_non_utf8_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("LICENSE.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let err = UrlSource::new(Duration::from_secs(1))
            .fetch(&file_url(&path))
            .unwrap_err();

        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_fetch_unsupported_scheme() {
        let url = Url::parse("ftp://example.org/LICENSE").unwrap();

        let err = UrlSource::new(Duration::from_secs(1)).fetch(&url).unwrap_err();

        assert!(err.to_string().contains("unsupported URL scheme 'ftp'"));
    }

    #[test]
    fn test_decode_body_strips_bom() {
        let url = Url::parse("https://example.org/LICENSE").unwrap();
        let mut body = "\u{feff}".as_bytes().to_vec();
        body.extend_from_slice(b"Body\n");

        assert_eq!(decode_body(&url, body).unwrap(), "Body\n");
    }
}
