use super::Error;

/// Error when a filter or ordering names a field the active mapper does not
/// know.
///
/// Unknown fields are never silently ignored; the whole compilation fails.
#[derive(Debug)]
pub(super) struct UnknownField {
    pub(super) name: Box<str>,
}

impl std::error::Error for UnknownField {}

impl core::fmt::Display for UnknownField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown field `{}`", self.name)
    }
}

impl Error {
    /// Creates an unknown field error.
    pub fn unknown_field(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownField(UnknownField {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown field error.
    pub fn is_unknown_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownField(_))
    }

    /// The offending field name, if this is an unknown field error.
    pub fn field_name(&self) -> Option<&str> {
        match self.kind() {
            super::ErrorKind::UnknownField(err) => Some(&err.name),
            _ => None,
        }
    }
}
