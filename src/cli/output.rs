/// User-facing reporting and debug timing.
use std::path::Path;

/// Output context passed through a run.
pub struct OutputCtx {
    /// When true, print timing spans to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

/// Per-file line, printed as each changed file completes.
pub fn report_changed(path: &Path, check_only: bool) {
    if check_only {
        println!("Invalid format: {}", path.display());
    } else {
        println!("Formatted: {}", path.display());
    }
}

/// Batch summary. Silent when nothing changed.
pub fn report_summary(count: usize, check_only: bool) {
    if count == 0 {
        return;
    }
    if check_only {
        println!("{count} notebook(s) would be formatted");
    } else {
        println!("Formatted {count} notebook(s)");
    }
}

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}
