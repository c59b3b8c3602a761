//! Delivery of a record to the renderer service.

use bol_draft::ShipmentRecord;
use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;

/// Why a single delivery attempt failed
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("server answered with status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Something that can post a record and hand back the PDF bytes
pub trait Transport {
    /// Performs one delivery attempt.
    ///
    /// Non-success statuses are errors, just like connection failures.
    fn post(&mut self, record: &ShipmentRecord) -> Result<Vec<u8>, DeliveryError>;
}

/// Blocking HTTP transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for HttpTransport {
    fn post(&mut self, record: &ShipmentRecord) -> Result<Vec<u8>, DeliveryError> {
        let response = self.client.post(&self.url).json(record).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status(status.as_u16()));
        }

        Ok(response.bytes()?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        assert_eq!(
            DeliveryError::Status(502).to_string(),
            "server answered with status 502"
        );
    }

    #[test]
    fn test_unreachable_server_is_delivery_error() {
        // Port 9 (discard) on localhost is closed on test machines
        let mut transport = HttpTransport::new(
            "http://127.0.0.1:9/generate-bill-of-lading/",
            Duration::from_secs(2),
        )
        .unwrap();

        let result = transport.post(&ShipmentRecord::default());
        assert!(matches!(result, Err(DeliveryError::Http(_))));
    }
}
