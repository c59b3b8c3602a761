//! # bol-driver
//!
//! Load and smoke test driver for the Bill of Lading draft API. Each
//! iteration posts either a random or the static payload, retries failed
//! deliveries under a [`RetryPolicy`], and archives the returned PDF.

pub mod config;
pub mod driver;
pub mod metrics;
pub mod output;
pub mod payload;
pub mod retry;
pub mod transport;

pub use config::DriverConfig;
pub use driver::{Driver, DriverError, DriverSettings, IterationOutcome, RunSummary, Sleeper};
pub use output::ArtifactWriter;
pub use payload::{random_record, static_record, PayloadKind};
pub use retry::{retry_with_policy, Backoff, RetryExhausted, RetryPolicy};
pub use transport::{DeliveryError, HttpTransport, Transport};
