/// ProgressReporter port for reporting progress during the harvest
///
/// Stages report a status line before and after they run, with item counts,
/// so a long harvest shows where it is.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a stage
    ///
    /// # Arguments
    /// * `current` - Items completed so far
    /// * `total` - Items in the stage
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of a stage
    fn report_completion(&self, message: &str);
}
