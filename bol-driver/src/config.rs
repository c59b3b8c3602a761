use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::driver::DriverSettings;
use crate::retry::RetryPolicy;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "bol-driver",
    about = "Posts Bill of Lading payloads to the draft API and archives the PDFs",
    version
)]
pub struct DriverConfig {
    /// Generate endpoint of the renderer service
    #[arg(
        short,
        long,
        env = "BOL_URL",
        default_value = "http://127.0.0.1:8000/generate-bill-of-lading/"
    )]
    pub url: String,

    /// Number of PDFs to request
    #[arg(short = 'n', long, env = "BOL_ITERATIONS", default_value_t = 20)]
    pub iterations: u32,

    /// Attempts per iteration before it is skipped
    #[arg(long, env = "BOL_MAX_ATTEMPTS", default_value_t = 5)]
    pub max_attempts: u32,

    /// Pause after a failed attempt, in seconds
    #[arg(long, env = "BOL_ATTEMPT_DELAY_SECS", default_value_t = 3.0)]
    pub attempt_delay_secs: f64,

    /// Pause after a successful iteration, in seconds
    #[arg(long, env = "BOL_REQUEST_DELAY_SECS", default_value_t = 2.0)]
    pub request_delay_secs: f64,

    /// Directory receiving the returned PDFs
    #[arg(short, long, env = "BOL_OUTPUT_DIR", default_value = "rendered_bol_pdfs")]
    pub output_dir: PathBuf,

    /// Per-request timeout, in seconds
    #[arg(long, env = "BOL_TIMEOUT_SECS", default_value_t = 30.0)]
    pub timeout_secs: f64,

    /// Seed for the random payload generator
    #[arg(long, env = "BOL_SEED")]
    pub seed: Option<u64>,
}

fn secs(value: f64) -> Duration {
    Duration::try_from_secs_f64(value).unwrap_or(Duration::ZERO)
}

impl DriverConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::flat(self.max_attempts, secs(self.attempt_delay_secs))
    }

    pub fn timeout(&self) -> Duration {
        secs(self.timeout_secs)
    }

    pub fn settings(&self) -> DriverSettings {
        DriverSettings {
            iterations: self.iterations,
            retry: self.retry_policy(),
            request_delay: secs(self.request_delay_secs),
        }
    }
}
