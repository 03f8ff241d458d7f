//! Error type definitions for cryptographic operations

#[cfg(feature = "std")]
use std::string::String;

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

mod traits;
pub use traits::ResultExt;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        /// Context where the key was rejected
        context: &'static str,
        /// Detailed error message
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Context where the parameter was rejected
        context: &'static str,
        /// Detailed error message
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        /// Context where the error occurred
        context: &'static str,
        /// Detailed error message
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { .. } => Self::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Error::InvalidKey { context, message } => {
                write!(f, "Invalid key in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::InvalidKey { context } => {
                write!(f, "Invalid key in {}", context)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Error::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::InvalidParameter { context } => {
                write!(f, "Invalid parameter in {}", context)
            }
            #[cfg(feature = "std")]
            Error::Other { context, message } => {
                write!(f, "Error in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::Other { context } => {
                write!(f, "Error in {}", context)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
