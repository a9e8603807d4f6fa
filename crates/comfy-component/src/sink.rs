//! Log sinks for the logging component variants.
//!
//! A sink receives one pre-formatted line per log record. The logging
//! variants hold a [`SharedSink`] instead of printing, so output can be
//! redirected (to `tracing`, to a test buffer) without touching the tree.
//!
//! | Sink | Destination |
//! |------|-------------|
//! | [`ConsoleSink`] | stdout (default) |
//! | [`TracingSink`] | `tracing::info!` on target `comfy::log` |
//! | any `Fn(&str)` | caller-defined |
//! | [`MemorySink`](crate::testing::MemorySink) | in-memory buffer for tests |

use std::sync::Arc;

/// Destination for log records.
pub trait LogSink: Send + Sync {
    /// Writes one record.
    fn log(&self, line: &str);
}

/// Shared handle to a sink.
pub type SharedSink = Arc<dyn LogSink>;

impl<F> LogSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn log(&self, line: &str) {
        self(line);
    }
}

/// Writes records to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn log(&self, line: &str) {
        println!("{line}");
    }
}

/// Forwards records to the active `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, line: &str) {
        tracing::info!(target: "comfy::log", "{}", line);
    }
}

/// Returns the default sink.
#[must_use]
pub fn console() -> SharedSink {
    Arc::new(ConsoleSink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn closure_sink() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&seen);
        let sink: SharedSink = Arc::new(move |line: &str| captured.lock().push(line.to_string()));

        sink.log("LOG: Player received: 1");
        sink.log("LOG: Player received: 2");

        assert_eq!(
            *seen.lock(),
            vec!["LOG: Player received: 1", "LOG: Player received: 2"]
        );
    }

    #[test]
    fn builtin_sinks_accept_records() {
        console().log("console record");
        TracingSink.log("tracing record");
    }
}
