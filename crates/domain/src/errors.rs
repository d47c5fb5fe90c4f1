use thiserror::Error;

/// Coarse classification of [`DomainError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value object rejected a write.
    Validation,
    /// The caller passed an argument that is not valid for the receiver.
    Argument,
    /// A positional lookup fell outside the valid range.
    Index,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Octet list is not a valid IPv4 address: invalid octet count {0}")]
    InvalidOctetCount(usize),

    #[error("Octet list is not a valid IPv4 address: invalid octet value {0}")]
    InvalidOctetValue(String),

    #[error("The supplied record is not a member of this collection")]
    RecordNotFound,

    #[error("The specified index {index} does not exist in the collection (length {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidOctetCount(_) | DomainError::InvalidOctetValue(_) => {
                ErrorKind::Validation
            }
            DomainError::RecordNotFound => ErrorKind::Argument,
            DomainError::IndexOutOfBounds { .. } => ErrorKind::Index,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}
