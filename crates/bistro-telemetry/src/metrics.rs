//! Metric names and instrument helpers
//!
//! Components build their instruments once at construction. Instruments
//! come from the global meter provider, which is a no-op unless an
//! exporter was configured before the components were built.

use std::time::Instant;

use opentelemetry::{KeyValue, global};

pub use opentelemetry::metrics::{Counter, Histogram};

const METER_NAME: &str = "bistro";

// Location resolver
pub const PLACES_LOOKUP_COUNT: &str = "places.lookup.count";

// Menu extractor
pub const MENU_SCAN_COUNT: &str = "menu.scan.count";

// Language model upstream
pub const LLM_REQUEST_DURATION: &str = "llm.request.duration";

// Order agent
pub const ORDER_MUTATION_COUNT: &str = "order.mutation.count";

/// Build a monotonic counter on the shared meter
pub fn counter(name: &'static str) -> Counter<u64> {
    global::meter(METER_NAME).u64_counter(name).build()
}

/// Build a histogram of durations in seconds on the shared meter
pub fn duration_histogram(name: &'static str) -> Histogram<f64> {
    global::meter(METER_NAME).f64_histogram(name).with_unit("s").build()
}

/// Record a duration measurement on a histogram
pub fn record_duration(histogram: &Histogram<f64>, start: Instant, attributes: &[KeyValue]) {
    histogram.record(start.elapsed().as_secs_f64(), attributes);
}
