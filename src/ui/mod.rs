//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting across the load, fixup and push steps
//! - Interactive progress bars using indicatif
//! - Silent progress for quiet mode
//!
//! All progress reporting goes through the ProgressReporter trait, allowing
//! different implementations based on command-line flags (e.g., --quiet).

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter trait for the publish pipeline
pub trait ProgressReporter {
    /// Show the step that is about to run
    fn start_step(&mut self, label: &str);

    /// Mark the current step as done
    fn finish_step(&mut self);

    /// Finish after the last step
    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive progress reporter with a visual progress bar
pub struct InteractiveProgressReporter {
    step_pb: ProgressBar,
}

impl InteractiveProgressReporter {
    /// Create a new interactive progress reporter with total step count
    pub fn new(total_steps: u64) -> Self {
        let step_style = ProgressStyle::default_bar()
            .template("[{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let step_pb = ProgressBar::new(total_steps);
        step_pb.set_style(step_style);

        Self { step_pb }
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start_step(&mut self, label: &str) {
        self.step_pb.set_message(label.to_string());
    }

    fn finish_step(&mut self) {
        self.step_pb.inc(1);
    }

    fn finish(&mut self) {
        self.step_pb.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.step_pb.abandon();
    }
}

/// Silent progress reporter
///
/// No-op implementation used with --quiet and for single-step commands.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start_step(&mut self, _label: &str) {}

    fn finish_step(&mut self) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Pick a reporter for the given flags
pub fn reporter(quiet: bool, total_steps: u64) -> Box<dyn ProgressReporter> {
    if quiet || !console::Term::stderr().is_term() {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::new(total_steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_progress_reporter_no_ops() {
        let mut reporter = SilentProgressReporter;

        // All methods should do nothing and not panic
        reporter.start_step("Loading bundle");
        reporter.finish_step();
        reporter.finish();
        reporter.abandon();
    }

    #[test]
    fn test_interactive_progress_reporter_inc() {
        let mut reporter = InteractiveProgressReporter::new(3);
        reporter.start_step("Loading bundle");
        reporter.finish_step();
        reporter.start_step("Fixing up bundle");
        reporter.finish_step();
        assert_eq!(reporter.step_pb.position(), 2);
        assert_eq!(reporter.step_pb.length(), Some(3));
    }

    #[test]
    fn test_interactive_progress_reporter_abandon() {
        let mut reporter = InteractiveProgressReporter::new(3);
        reporter.start_step("Pushing bundle");
        reporter.abandon();
        assert!(reporter.step_pb.is_finished());
    }
}
