use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FloatError {
    MissingTargetElement { selector: String },
    InvalidGeometry { width: f64, height: f64 },
    InvalidOptions(String),
    Storage(String),
}

impl fmt::Display for FloatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatError::MissingTargetElement { selector } => {
                write!(f, "no element matches '{selector}'")
            }
            FloatError::InvalidGeometry { width, height } => {
                write!(f, "element has no usable size ({width}x{height}), position left unchanged")
            }
            FloatError::InvalidOptions(reason) => write!(f, "invalid options: {reason}"),
            FloatError::Storage(reason) => write!(f, "storage unavailable: {reason}"),
        }
    }
}

impl std::error::Error for FloatError {}
