use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GasErrorCode {
    InvalidArgument,
}

impl GasErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GasErrorCode::InvalidArgument => "gas/invalid-argument",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GasError {
    pub code: GasErrorCode,
    message: String,
}

impl GasError {
    pub fn new(code: GasErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for GasError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for GasError {}

impl From<serde_json::Error> for GasError {
    fn from(err: serde_json::Error) -> Self {
        invalid_argument(format!("malformed tag configuration: {err}"))
    }
}

pub type GasResult<T> = Result<T, GasError>;

pub fn invalid_argument(message: impl Into<String>) -> GasError {
    GasError::new(GasErrorCode::InvalidArgument, message)
}
