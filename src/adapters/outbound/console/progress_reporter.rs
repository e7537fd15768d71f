use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Steps are shown on a spinner so stdout stays free for the model.
/// Warnings are printed above the spinner in yellow when stderr is a
/// terminal.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
            quiet: false,
        }
    }

    /// Reporter that prints warnings only
    pub fn quiet() -> Self {
        Self {
            spinner: RefCell::new(None),
            quiet: true,
        }
    }

    fn spinner(&self) -> ProgressBar {
        let mut slot = self.spinner.borrow_mut();
        if let Some(spinner) = slot.as_ref() {
            return spinner.clone();
        }

        let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(120));
        *slot = Some(spinner.clone());
        spinner
    }

    fn finish(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.quiet {
            return;
        }
        let spinner = self.spinner();
        spinner.println(message);
        spinner.set_message(message.to_string());
    }

    fn report_error(&self, message: &str) {
        let colored = message.if_supports_color(Stream::Stderr, |text| text.yellow());
        match self.spinner.borrow().as_ref() {
            Some(spinner) => spinner.suspend(|| eprintln!("{}", colored)),
            None => eprintln!("{}", colored),
        }
    }

    fn report_completion(&self, message: &str) {
        self.finish();
        if self.quiet {
            return;
        }
        eprintln!();
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |text| text.green())
        );
    }
}

impl Drop for StderrProgressReporter {
    fn drop(&mut self) {
        self.finish();
    }
}
