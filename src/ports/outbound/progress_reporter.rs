/// ProgressReporter port for operator feedback during a run.
///
/// Keeps user-facing status off stdout so report output stays pipeable.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a counted stage
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of a stage or of the run
    fn report_completion(&self, message: &str);
}
