mod adhoc;
mod invalid_filter;
mod unknown_field;
mod unsupported_operator;

use adhoc::Adhoc;
use invalid_filter::InvalidFilter;
use std::sync::Arc;
use unknown_field::UnknownField;
use unsupported_operator::UnsupportedOperator;

/// An error that can occur in Gridify.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(Adhoc),
    InvalidFilter(InvalidFilter),
    UnknownField(UnknownField),
    UnsupportedOperator(UnsupportedOperator),
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, ending with the root cause.
    pub fn context(self, consequent: Error) -> Error {
        let mut err = consequent;
        let inner = Arc::get_mut(&mut err.inner).unwrap();
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        inner.cause = Some(self);
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            InvalidFilter(err) => core::fmt::Display::fmt(err, f),
            UnknownField(err) => core::fmt::Display::fmt(err, f),
            UnsupportedOperator(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from_args(format_args!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = Error::from_args(format_args!("root cause"));
        let top = Error::from_args(format_args!("top context"));

        let chained = root.context(top);
        assert_eq!(chained.to_string(), "top context: root cause");
    }

    #[test]
    fn invalid_filter_display() {
        let err = Error::invalid_filter(7, "expected comparison operator");
        assert_eq!(
            err.to_string(),
            "invalid filter at offset 7: expected comparison operator"
        );
        assert_eq!(err.filter_offset(), Some(7));
    }

    #[test]
    fn unknown_field_display() {
        let err = Error::unknown_field("naem");
        assert_eq!(err.to_string(), "unknown field `naem`");
        assert!(err.is_unknown_field());
    }

    #[test]
    fn unsupported_operator_display() {
        let err = Error::unsupported_operator("=*", "i64");
        assert_eq!(
            err.to_string(),
            "operator `=*` is not supported for fields of type i64"
        );
        assert!(err.is_unsupported_operator());
    }

    #[test]
    fn anyhow_conversion() {
        let err: Error = anyhow::anyhow!("driver said no").into();
        assert_eq!(err.to_string(), "driver said no");
        assert!(err.is_adhoc());
    }
}
