use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used across the regression crate.
pub type Result<T> = std::result::Result<T, RegressionErr>;

/// The regression crate's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionErr {
    /// A single value has the wrong type or shape (e.g. a non-finite element,
    /// an options value that isn't a record).
    InvalidArgument { what: &'static str, reason: String },

    /// The explanatory and response sequences differ in length.
    LengthMismatch { x: usize, y: usize },

    /// There is not enough information in the data for the requested quantity.
    DegenerateInput { what: &'static str, reason: String },
}

impl RegressionErr {
    pub(crate) fn invalid<R: Into<String>>(what: &'static str, reason: R) -> Self {
        Self::InvalidArgument {
            what,
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate<R: Into<String>>(what: &'static str, reason: R) -> Self {
        Self::DegenerateInput {
            what,
            reason: reason.into(),
        }
    }

    pub(crate) fn too_few(what: &'static str, got: usize, required: usize) -> Self {
        Self::degenerate(what, format!("got {got}, at least {required} required"))
    }
}

impl Display for RegressionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionErr::InvalidArgument { what, reason } => {
                write!(f, "invalid argument for {what}: {reason}")
            }
            RegressionErr::LengthMismatch { x, y } => write!(
                f,
                "input arrays must be of equal length, got {x} explanatory and {y} response values"
            ),
            RegressionErr::DegenerateInput { what, reason } => {
                write!(f, "degenerate input for {what}: {reason}")
            }
        }
    }
}

impl Error for RegressionErr {}

/// Boundary conversion for binaries / I/O APIs.
impl From<RegressionErr> for io::Error {
    fn from(value: RegressionErr) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, value)
    }
}
