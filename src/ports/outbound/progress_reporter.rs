/// ProgressReporter port for reporting progress during a conversion
///
/// Progress goes to a side channel (stderr) so it never mixes with the
/// manifest written to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a warning that does not abort the conversion
    fn report_warning(&self, message: &str);

    /// Reports an error or failure message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
