use std::time::Instant;
use tracing::debug;

/// Runs `f` and returns its output with the wall-clock time in milliseconds.
pub(super) fn timed<T>(label: &'static str, f: impl FnOnce() -> T) -> (T, u64) {
    let start = Instant::now();
    let output = f();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    debug!(command = label, elapsed_ms, "command finished");
    (output, elapsed_ms)
}

pub(super) fn format_elapsed(elapsed_ms: u64) -> String {
    format!("{}ms", elapsed_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_passes_output_through() {
        let (value, _) = timed("test", || 6 * 7);
        assert_eq!(value, 42);
    }

    #[test]
    fn elapsed_is_whole_milliseconds() {
        assert_eq!(format_elapsed(0), "0ms");
        assert_eq!(format_elapsed(153), "153ms");
    }
}
