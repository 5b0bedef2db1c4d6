use std::error::Error;
use std::fmt;

/// InputValueError is used if some game option does not fulfill the posed requirements, e.g., by
/// exceeding the allowed tick interval range.
#[derive(Debug, Clone)]
pub struct InputValueError;

impl fmt::Display for InputValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid input value")
    }
}

impl Error for InputValueError {}
