use super::Error;

/// Error when an operator is used against a field type that cannot support
/// it, e.g. a substring match on a numeric field.
#[derive(Debug)]
pub(super) struct UnsupportedOperator {
    pub(super) op: Box<str>,
    pub(super) ty: Box<str>,
}

impl std::error::Error for UnsupportedOperator {}

impl core::fmt::Display for UnsupportedOperator {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "operator `{}` is not supported for fields of type {}",
            self.op, self.ty
        )
    }
}

impl Error {
    /// Creates an unsupported operator error.
    pub fn unsupported_operator(op: impl Into<String>, ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedOperator(UnsupportedOperator {
            op: op.into().into(),
            ty: ty.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported operator error.
    pub fn is_unsupported_operator(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedOperator(_))
    }
}
