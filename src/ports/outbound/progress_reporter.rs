/// ProgressReporter port for user feedback on stderr
///
/// Kept separate from tracing: these messages are for the person running
/// the command, not for log collection.
pub trait ProgressReporter {
    /// Reports a progress step
    fn report(&self, message: &str);

    /// Reports a warning, such as a diagnostic attached to the model
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
