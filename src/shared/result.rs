/// Result alias used by the application and adapter layers.
///
/// Collaborator failures inside an extraction run are modelled as
/// `BuildFailure` and never surface here; this alias carries the
/// unrecoverable errors (unreadable snapshot, bad arguments, I/O).
pub type Result<T> = std::result::Result<T, anyhow::Error>;
