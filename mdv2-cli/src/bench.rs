//! Timing harness for the converter.

use mdv2_core::Converter;
use std::time::{Duration, Instant};

/// Timing for one input size.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchResult {
    /// Input size in characters.
    pub chars: usize,
    pub iterations: usize,
    pub average: Duration,
}

impl BenchResult {
    pub fn chars_per_sec(&self) -> f64 {
        let secs = self.average.as_secs_f64();
        if secs == 0.0 {
            f64::INFINITY
        } else {
            self.chars as f64 / secs
        }
    }

    /// One report line, e.g. `Text size:   1234 chars | Avg time:    0.42ms | Rate:  2938095 chars/sec`.
    pub fn report_line(&self) -> String {
        format!(
            "Text size: {:6} chars | Avg time: {:7.2}ms | Rate: {:8.0} chars/sec",
            self.chars,
            self.average.as_secs_f64() * 1000.0,
            self.chars_per_sec()
        )
    }
}

/// Convert `text` once to warm up, then time `iterations` conversions.
pub fn run(converter: &Converter, text: &str, iterations: usize) -> BenchResult {
    let iterations = iterations.max(1);
    std::hint::black_box(converter.convert(text));

    let start = Instant::now();
    for _ in 0..iterations {
        std::hint::black_box(converter.convert(text));
    }
    let elapsed = start.elapsed();

    BenchResult {
        chars: text.chars().count(),
        iterations,
        average: average(elapsed, iterations),
    }
}

/// Mean time per iteration. Divides in floating point, so counts past
/// `u32::MAX` are not truncated.
fn average(elapsed: Duration, iterations: usize) -> Duration {
    elapsed.div_f64(iterations.max(1) as f64)
}
