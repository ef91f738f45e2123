use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindError {
    /// No kind is registered under this external name.
    UnknownKind(String),
}

impl fmt::Display for KindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KindError::UnknownKind(name) => write!(f, "unknown data kind '{}'", name),
        }
    }
}

impl std::error::Error for KindError {}
