use thiserror::Error;

/// Failures reported by the strict lookup methods.
///
/// The lenient accessors (`get_arg`, `get_int_arg`, ...) never produce these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("argument `{0}` was not given")]
    Missing(String),

    #[error("argument `{key}` is not an integer: {value:?}")]
    InvalidInt { key: String, value: String },
}

pub type ArgResult<T> = Result<T, ArgError>;
