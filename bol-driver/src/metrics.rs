use std::fmt;
use std::time::Duration;
use sysinfo::System;

/// Resource usage observed after an iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceSample {
    /// Global CPU usage since the previous sample, in percent
    pub cpu_percent: f32,
    /// Used system memory, in percent
    pub memory_percent: f64,
}

impl fmt::Display for ResourceSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU Usage: {:.1}% | Memory: {:.1}%",
            self.cpu_percent, self.memory_percent
        )
    }
}

/// Keeps a `System` around so CPU usage is measured between samples
pub struct MetricsSampler {
    system: System,
}

impl MetricsSampler {
    pub fn new() -> Self {
        let mut system = System::new();
        // Prime the CPU counters; the first reading is relative to this one
        system.refresh_cpu_usage();
        Self { system }
    }

    pub fn sample(&mut self) -> ResourceSample {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();

        ResourceSample {
            cpu_percent: self.system.global_cpu_usage(),
            memory_percent: memory_percent(self.system.used_memory(), self.system.total_memory()),
        }
    }
}

impl Default for MetricsSampler {
    fn default() -> Self {
        Self::new()
    }
}

fn memory_percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    used as f64 / total as f64 * 100.0
}

/// Seconds rounded to two decimals, for console output
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_percent() {
        assert_eq!(memory_percent(0, 0), 0.0);
        assert_eq!(memory_percent(512, 1024), 50.0);
        assert_eq!(memory_percent(1024, 1024), 100.0);
    }

    #[test]
    fn test_sample_is_within_bounds() {
        let mut sampler = MetricsSampler::new();
        let sample = sampler.sample();

        assert!(sample.cpu_percent >= 0.0);
        assert!((0.0..=100.0).contains(&sample.memory_percent));
    }

    #[test]
    fn test_display() {
        let sample = ResourceSample {
            cpu_percent: 12.34,
            memory_percent: 56.78,
        };
        assert_eq!(sample.to_string(), "CPU Usage: 12.3% | Memory: 56.8%");
        assert_eq!(format_elapsed(Duration::from_millis(1234)), "1.23s");
    }
}
