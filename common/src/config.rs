/// What to do with a token that is not a base-10 integer at all (`12a`, `-1`, ``).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenPolicy {
    /// Treat the line like any other malformed record and move on.
    #[default]
    Skip,
    /// Stop the whole run at the first unparsable token.
    Abort,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub policy: TokenPolicy,
    /// Quiet level.
    ///
    /// `1` hides the run summary, `2` also hides warnings about skipped lines.
    pub quiet: u8,
}
