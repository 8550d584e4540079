//! reqwest-backed HTTP transport

use crate::error::{OpayError, OpayResult};
use crate::payments::traits::HttpTransport;
use crate::payments::types::RequestHeaders;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, warn};

const USER_AGENT: &str = concat!("opay-client/", env!("CARGO_PKG_VERSION"));

/// HTTP transport over a shared reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> OpayResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                OpayError::configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        headers: &RequestHeaders,
        body: Option<&Value>,
    ) -> OpayResult<Value> {
        let mut request = self.client.post(url);
        for (name, value) in headers.pairs() {
            request = request.header(name, value);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!("OPay request to {} failed: {}", url, e);
            OpayError::from(e)
        })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            error!("Failed to read OPay response body from {}: {}", url, e);
            OpayError::from(e)
        })?;

        let decoded: Value = serde_json::from_str(&response_text).map_err(|e| {
            error!(
                "OPay returned a non-JSON body: url={}, status={}, error={}",
                url, status, e
            );
            OpayError::transport(format!("HTTP {}: invalid JSON response: {}", status, e))
        })?;

        if status.is_success() {
            debug!("OPay responded: url={}, status={}", url, status);
        } else {
            warn!("OPay responded with HTTP {} for {}", status, url);
        }

        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payments::types::Credentials;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    fn test_headers() -> RequestHeaders {
        RequestHeaders::from_credentials(&Credentials::new("OPAYPUB_test", "256612345678901"))
    }

    fn test_transport() -> ReqwestTransport {
        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        ReqwestTransport::with_client(client)
    }

    /// Serve one canned HTTP response; the raw request head is sent back on the channel.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 16 * 1024];
            let n = socket.read(&mut buf).await.unwrap();
            let _ = tx.send(String::from_utf8_lossy(&buf[..n]).to_string());

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        (format!("http://{}/api/v3/balances", addr), rx)
    }

    #[tokio::test]
    async fn test_sends_fixed_headers_and_decodes_body() {
        let (url, request_rx) =
            serve_once("200 OK", r#"{"code":"00000","message":"SUCCESSFUL","data":{}}"#).await;
        let transport = test_transport();

        let body = transport
            .post(&url, &test_headers(), Some(&json!({"countryCode": "NG"})))
            .await
            .unwrap();
        assert_eq!(body, json!({"code": "00000", "message": "SUCCESSFUL", "data": {}}));

        let request = request_rx.await.unwrap().to_lowercase();
        assert!(request.starts_with("post /api/v3/balances"));
        assert!(request.contains("authorization: bearer opaypub_test"));
        assert!(request.contains("merchantid: 256612345678901"));
        assert!(request.contains("content-type: application/json"));
    }

    #[tokio::test]
    async fn test_error_status_with_json_body_is_passed_through() {
        let (url, _request_rx) = serve_once(
            "401 Unauthorized",
            r#"{"code":"02006","message":"authentication failed"}"#,
        )
        .await;
        let transport = test_transport();

        let body = transport.post(&url, &test_headers(), None).await.unwrap();
        assert_eq!(body, json!({"code": "02006", "message": "authentication failed"}));
    }

    #[tokio::test]
    async fn test_non_json_body_is_transport_error() {
        let (url, _request_rx) = serve_once("502 Bad Gateway", "<html>bad gateway</html>").await;
        let transport = test_transport();

        let err = transport.post(&url, &test_headers(), None).await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = test_transport();
        let result = transport
            .post(&format!("http://{}/api/v3/balances", addr), &test_headers(), None)
            .await;

        assert!(result.unwrap_err().is_transport());
    }
}
