use std::fmt;

/// An error surfaced while building, rendering, or executing a statement.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
enum ErrorKind {
    /// The statement rendered to an empty SQL string. This is how an
    /// incompletely built statement surfaces: the builder performs no
    /// validation, the serializer emits nothing it cannot express, and
    /// execution refuses to dispatch empty text.
    EmptyStatement,

    /// The backend could not be reached or opened.
    Connect(String),

    /// The configured backend discriminator matched no compiled-in driver.
    UnknownBackend(String),

    /// The underlying driver reported a failure.
    Driver(anyhow::Error),

    /// A driver value could not be coerced into the column vocabulary.
    TypeConversion { value: String, target: String },
}

impl Error {
    pub fn empty_statement() -> Self {
        ErrorKind::EmptyStatement.into()
    }

    pub fn connect(message: impl Into<String>) -> Self {
        ErrorKind::Connect(message.into()).into()
    }

    pub fn unknown_backend(kind: impl Into<String>) -> Self {
        ErrorKind::UnknownBackend(kind.into()).into()
    }

    pub fn driver_operation_failed(err: impl Into<anyhow::Error>) -> Self {
        ErrorKind::Driver(err.into()).into()
    }

    pub fn type_conversion(value: impl Into<String>, target: impl Into<String>) -> Self {
        ErrorKind::TypeConversion {
            value: value.into(),
            target: target.into(),
        }
        .into()
    }

    pub fn is_empty_statement(&self) -> bool {
        matches!(self.kind, ErrorKind::EmptyStatement)
    }

    pub fn is_connect(&self) -> bool {
        matches!(self.kind, ErrorKind::Connect(_))
    }

    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeConversion { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::EmptyStatement => f.write_str("statement rendered to an empty SQL string"),
            ErrorKind::Connect(message) => write!(f, "connection failed: {message}"),
            ErrorKind::UnknownBackend(kind) => write!(f, "unknown database backend: {kind}"),
            ErrorKind::Driver(err) => write!(f, "driver operation failed: {err}"),
            ErrorKind::TypeConversion { value, target } => {
                write!(f, "cannot convert {value} to {target}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Driver(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind }
    }
}
