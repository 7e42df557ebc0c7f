//! Thin wrappers around the `prometheus` crate.
//!
//! Metrics are declared as `LazyLock<Result<T>>` statics inside the crate that owns them and are
//! registered with the global `prometheus` registry on first use. Every helper in this crate
//! accepts the `Result` so a metric that failed to register is silently skipped instead of
//! panicking inside the code being measured.
//!
//! ## Example
//!
//! ```rust
//! use metrics::*;
//! use std::sync::LazyLock;
//!
//! pub static RUN_COUNT: LazyLock<Result<IntCounter>> = LazyLock::new(|| {
//!     try_create_int_counter("runs_total", "Total number of runs")
//! });
//!
//! fn main() {
//!     inc_counter(&RUN_COUNT);
//!     assert_eq!(get_int_counter_value(&RUN_COUNT), Some(1));
//! }
//! ```

use prometheus::{HistogramOpts, Opts};

pub use prometheus::{Histogram, HistogramTimer, IntCounter, IntCounterVec, IntGauge, Result};

/// Attempts to create an `IntCounter`, returning `Err` if the registry does not accept the counter
/// (potentially due to naming conflict).
pub fn try_create_int_counter(name: &str, help: &str) -> Result<IntCounter> {
    let opts = Opts::new(name, help);
    let counter = IntCounter::with_opts(opts)?;
    prometheus::register(Box::new(counter.clone()))?;
    Ok(counter)
}

/// Attempts to create an `IntCounterVec`, returning `Err` if the registry does not accept the
/// counter (potentially due to naming conflict).
pub fn try_create_int_counter_vec(
    name: &str,
    help: &str,
    label_names: &[&str],
) -> Result<IntCounterVec> {
    let opts = Opts::new(name, help);
    let counter_vec = IntCounterVec::new(opts, label_names)?;
    prometheus::register(Box::new(counter_vec.clone()))?;
    Ok(counter_vec)
}

/// Attempts to create an `IntGauge`, returning `Err` if the registry does not accept the gauge
/// (potentially due to naming conflict).
pub fn try_create_int_gauge(name: &str, help: &str) -> Result<IntGauge> {
    let opts = Opts::new(name, help);
    let gauge = IntGauge::with_opts(opts)?;
    prometheus::register(Box::new(gauge.clone()))?;
    Ok(gauge)
}

/// Attempts to create a `Histogram` with the default buckets, returning `Err` if the registry
/// does not accept the histogram (potentially due to naming conflict).
pub fn try_create_histogram(name: &str, help: &str) -> Result<Histogram> {
    let opts = HistogramOpts::new(name, help);
    let histogram = Histogram::with_opts(opts)?;
    prometheus::register(Box::new(histogram.clone()))?;
    Ok(histogram)
}

pub fn inc_counter(counter: &Result<IntCounter>) {
    if let Ok(counter) = counter {
        counter.inc();
    }
}

pub fn inc_counter_by(counter: &Result<IntCounter>, value: u64) {
    if let Ok(counter) = counter {
        counter.inc_by(value);
    }
}

/// Increments the counter in `counter_vec` with the given `name`.
pub fn inc_counter_vec(counter_vec: &Result<IntCounterVec>, name: &[&str]) {
    if let Ok(counter_vec) = counter_vec {
        if let Ok(counter) = counter_vec.get_metric_with_label_values(name) {
            counter.inc();
        }
    }
}

pub fn set_gauge(gauge: &Result<IntGauge>, value: i64) {
    if let Ok(gauge) = gauge {
        gauge.set(value);
    }
}

/// Starts a timer for the given `Histogram`, stopping when it gets dropped or given to
/// `stop_timer(..)`.
pub fn start_timer(histogram: &Result<Histogram>) -> Option<HistogramTimer> {
    if let Ok(histogram) = histogram {
        Some(histogram.start_timer())
    } else {
        None
    }
}

/// Stops a timer created with `start_timer(..)`.
pub fn stop_timer(timer: Option<HistogramTimer>) {
    if let Some(t) = timer {
        t.observe_duration()
    }
}

pub fn observe(histogram: &Result<Histogram>, value: f64) {
    if let Ok(histogram) = histogram {
        histogram.observe(value);
    }
}

pub fn get_int_counter_value(counter: &Result<IntCounter>) -> Option<u64> {
    counter.as_ref().ok().map(IntCounter::get)
}

/// Returns the value of the counter in `counter_vec` with the given `name`, if any.
pub fn get_int_counter_vec_value(counter_vec: &Result<IntCounterVec>, name: &[&str]) -> Option<u64> {
    counter_vec
        .as_ref()
        .ok()
        .and_then(|counter_vec| counter_vec.get_metric_with_label_values(name).ok())
        .map(|counter| counter.get())
}
