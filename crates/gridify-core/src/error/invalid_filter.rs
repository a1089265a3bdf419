use super::Error;

/// Error when a filter string fails to tokenize or parse.
///
/// Carries the byte offset of the offending character so callers can point
/// at the failing column of the submitted filter.
#[derive(Debug)]
pub(super) struct InvalidFilter {
    pub(super) offset: usize,
    pub(super) message: Box<str>,
}

impl std::error::Error for InvalidFilter {}

impl core::fmt::Display for InvalidFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid filter at offset {}: {}", self.offset, self.message)
    }
}

impl Error {
    /// Creates an invalid filter error at the given byte offset.
    pub fn invalid_filter(offset: usize, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidFilter(InvalidFilter {
            offset,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid filter error.
    pub fn is_invalid_filter(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidFilter(_))
    }

    /// The byte offset of a filter syntax error, if this is one.
    pub fn filter_offset(&self) -> Option<usize> {
        match self.kind() {
            super::ErrorKind::InvalidFilter(err) => Some(err.offset),
            _ => None,
        }
    }
}
