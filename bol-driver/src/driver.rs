//! The sequential load loop.

use rand::Rng;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::metrics::{format_elapsed, MetricsSampler, ResourceSample};
use crate::output::ArtifactWriter;
use crate::payload::PayloadKind;
use crate::retry::{retry_with_policy, RetryPolicy};
use crate::transport::Transport;

/// Blocking pause used between attempts and between iterations
pub type Sleeper = fn(Duration);

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Failed to write PDF for iteration {iteration}: {source}")]
    Write {
        iteration: u32,
        #[source]
        source: std::io::Error,
    },
}

/// Loop parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverSettings {
    pub iterations: u32,
    pub retry: RetryPolicy,
    /// Pause after each successful iteration
    pub request_delay: Duration,
}

/// What happened to one iteration
#[derive(Debug, Clone, PartialEq)]
pub enum IterationOutcome {
    Saved {
        path: PathBuf,
        attempts: u32,
        elapsed: Duration,
        resources: ResourceSample,
    },
    Skipped {
        attempts: u32,
        last_error: String,
    },
}

/// Totals for a whole run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub succeeded: u32,
    pub skipped: u32,
    /// Requests issued across all iterations, retries included
    pub requests: u32,
    pub files: Vec<PathBuf>,
}

pub struct Driver<T, R> {
    transport: T,
    rng: R,
    writer: ArtifactWriter,
    settings: DriverSettings,
    sampler: MetricsSampler,
    sleep: Sleeper,
}

impl<T: Transport, R: Rng> Driver<T, R> {
    pub fn new(transport: T, rng: R, writer: ArtifactWriter, settings: DriverSettings) -> Self {
        Self {
            transport,
            rng,
            writer,
            settings,
            sampler: MetricsSampler::new(),
            sleep: std::thread::sleep,
        }
    }

    /// Replaces the blocking sleep, e.g. with a no-op in tests
    pub fn with_sleeper(mut self, sleep: Sleeper) -> Self {
        self.sleep = sleep;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs every iteration in order.
    ///
    /// Exhausted retries skip the iteration; only a failure to store a
    /// returned PDF aborts the run.
    pub fn run(&mut self) -> Result<RunSummary, DriverError> {
        let total = self.settings.iterations;
        let mut summary = RunSummary::default();

        for iteration in 1..=total {
            let (outcome, requests) = self.run_iteration(iteration)?;
            summary.requests += requests;

            match outcome {
                IterationOutcome::Saved {
                    path,
                    attempts,
                    elapsed,
                    resources,
                } => {
                    info!(
                        "[{iteration}/{total}] PDF Generated: {} (attempts: {attempts})",
                        path.display()
                    );
                    info!("   {resources} | Time: {}", format_elapsed(elapsed));
                    summary.succeeded += 1;
                    summary.files.push(path);

                    if iteration < total {
                        (self.sleep)(self.settings.request_delay);
                    }
                }
                IterationOutcome::Skipped {
                    attempts,
                    last_error,
                } => {
                    warn!("Skipped PDF {iteration} after {attempts} attempt(s): {last_error}");
                    summary.skipped += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Runs one iteration and reports how many requests it issued
    pub fn run_iteration(&mut self, iteration: u32) -> Result<(IterationOutcome, u32), DriverError> {
        let kind = PayloadKind::for_iteration(iteration);
        let record = kind.build(&mut self.rng);
        debug!("Iteration {iteration}: sending {kind:?} payload");

        let started = Instant::now();
        let mut requests = 0;
        let transport = &mut self.transport;

        let delivered = retry_with_policy(&self.settings.retry, self.sleep, |attempt| {
            requests += 1;
            debug!("Iteration {iteration}: attempt {attempt}");
            transport.post(&record)
        });

        let outcome = match delivered {
            Ok(pdf) => {
                let path = self
                    .writer
                    .write(iteration, &pdf)
                    .map_err(|source| DriverError::Write { iteration, source })?;
                IterationOutcome::Saved {
                    path,
                    attempts: requests,
                    elapsed: started.elapsed(),
                    resources: self.sampler.sample(),
                }
            }
            Err(exhausted) => IterationOutcome::Skipped {
                attempts: exhausted.attempts,
                last_error: exhausted.last_error.to_string(),
            },
        };

        Ok((outcome, requests))
    }
}
