//! REST plumbing shared by the venue adapters

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::adapters::errors::{ExchangeError, ExchangeResult};

/// HTTP connection timeout in milliseconds
const HTTP_CONNECT_TIMEOUT_MS: u64 = 3_000;
/// Max idle connections per host in connection pool
const HTTP_POOL_MAX_IDLE: usize = 4;
/// How long idle connections stay in the pool (seconds)
const HTTP_POOL_IDLE_TIMEOUT_SECS: u64 = 60;
/// Longest error body kept in `ExchangeError::HttpStatus`
const MAX_ERROR_BODY_LEN: usize = 256;

/// Pooled REST client with a per-request timeout.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    timeout_ms: u64,
}

impl RestClient {
    /// Build a client for one venue
    pub fn new(exchange_name: &str, timeout_ms: u64) -> ExchangeResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .connect_timeout(Duration::from_millis(HTTP_CONNECT_TIMEOUT_MS.min(timeout_ms)))
            .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE)
            .pool_idle_timeout(Duration::from_secs(HTTP_POOL_IDLE_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                ExchangeError::ConnectionFailed(format!("HTTP client init for {}: {}", exchange_name, e))
            })?;
        tracing::debug!(
            phase = "init",
            exchange = %exchange_name,
            timeout_ms,
            "HTTP client configured"
        );
        Ok(Self { http, timeout_ms })
    }

    /// GET `url` with query parameters and decode the JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> ExchangeResult<T> {
        let resp = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| self.transport_error(url, e))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.transport_error(url, e))?;

        if !status.is_success() {
            let mut snippet = body;
            if snippet.len() > MAX_ERROR_BODY_LEN {
                let cut = (0..=MAX_ERROR_BODY_LEN)
                    .rev()
                    .find(|i| snippet.is_char_boundary(*i))
                    .unwrap_or(0);
                snippet.truncate(cut);
            }
            return Err(ExchangeError::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| ExchangeError::InvalidResponse(format!("{}: {}", url, e)))
    }

    fn transport_error(&self, url: &str, e: reqwest::Error) -> ExchangeError {
        if e.is_timeout() {
            ExchangeError::NetworkTimeout(self.timeout_ms)
        } else {
            ExchangeError::ConnectionFailed(format!("{}: {}", url, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Ping {
        ok: bool,
    }

    #[tokio::test]
    async fn test_get_json_decodes_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .match_query(mockito::Matcher::UrlEncoded("a".into(), "1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let client = RestClient::new("test", 5_000).unwrap();
        let ping: Ping = client
            .get_json(&format!("{}/ping", server.url()), &[("a", "1")])
            .await
            .unwrap();

        assert!(ping.ok);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_maps_to_http_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/ping")
            .with_status(429)
            .with_body("too many requests")
            .create_async()
            .await;

        let client = RestClient::new("test", 5_000).unwrap();
        let result: ExchangeResult<Ping> =
            client.get_json(&format!("{}/ping", server.url()), &[]).await;

        match result {
            Err(ExchangeError::HttpStatus { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body, "too many requests");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/ping")
            .with_status(200)
            .with_body("<html>")
            .create_async()
            .await;

        let client = RestClient::new("test", 5_000).unwrap();
        let result: ExchangeResult<Ping> =
            client.get_json(&format!("{}/ping", server.url()), &[]).await;

        assert!(matches!(result, Err(ExchangeError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_maps_to_connection_failed() {
        let client = RestClient::new("test", 2_000).unwrap();
        // Port 9 (discard) on localhost is closed in test environments
        let result: ExchangeResult<Ping> = client.get_json("http://127.0.0.1:9/ping", &[]).await;

        assert!(matches!(
            result,
            Err(ExchangeError::ConnectionFailed(_)) | Err(ExchangeError::NetworkTimeout(_))
        ));
    }
}
