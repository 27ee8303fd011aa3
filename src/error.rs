use thiserror::Error;

/// Errors returned by the library
///
/// The select state machine itself never fails: invalid actions are absorbed as no-ops.
/// These only come from building an option pool, loading one from disk or parsing key
/// bindings.
#[derive(Error, Debug)]
pub enum Error {
    /// Two options of a pool share the same `value`
    #[error("duplicate option value '{0}'")]
    DuplicateValue(String),
    /// A key binding refers to an action that does not exist
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    /// A key description could not be parsed
    #[error("cannot parse key '{0}'")]
    KeyParse(String),
    /// The options file is not valid RON
    #[error("invalid options file: {0}")]
    OptionsFile(#[from] ron::error::SpannedError),
    /// Reading the options file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias using the library [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;
