use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A configuration error detected while constructing a problem.
///
/// These are always raised before any search begins. They are disjoint from
/// the "no solution exists" outcome, which is a valid negative result and is
/// reported as an absence value, never as an error.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("constraint `{constraint}` references unknown variable ?{variable}")]
    UnknownVariable { constraint: String, variable: usize },

    #[error("variable `{name}` has an empty domain")]
    EmptyDomain { name: String },

    #[error("duplicate variable name `{name}`")]
    DuplicateName { name: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{inner}\n{backtrace}")]
    Model {
        inner: Box<ModelError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<ModelError> for Error {
    fn from(inner: ModelError) -> Self {
        Error::Model {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}

impl Error {
    /// The underlying configuration error, without the captured backtrace.
    pub fn model_error(&self) -> &ModelError {
        match self {
            Error::Model { inner, .. } => inner,
        }
    }
}
