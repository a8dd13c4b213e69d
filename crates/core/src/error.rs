/// An error produced while configuring or styling a menu control.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `--trigger-effect` value is not one of `ripple`, `blink` or `none`.
    #[error("invalid trigger effect: {0:?}")]
    InvalidTriggerEffect(String),

    /// The settings file does not exist.
    #[error("settings file not found: {0}")]
    NotFound(String),

    /// The settings file could not be read.
    #[error("failed to read settings: {0}")]
    Read(String),

    /// The settings file could not be parsed.
    #[error("failed to parse settings: {0}")]
    Parse(String),

    /// The settings file has an unsupported format.
    #[error("unsupported settings format: {0}")]
    UnsupportedFormat(String),
}
