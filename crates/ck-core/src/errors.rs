//! Error types for convkit.
//!
//! Every converter either succeeds or fails with exactly one of the kinds
//! below. The `ensure!` and `fail!` convenience macros produce
//! [`Error::InvalidInput`], which is by far the most common failure.

use thiserror::Error;

/// The top-level error type used throughout convkit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value is missing, non-numeric, or outside the representable domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A unit name is not part of the table for the requested quantity.
    #[error("unknown {quantity} unit: {unit}")]
    UnknownUnit {
        /// The quantity kind that was searched (e.g. "length").
        quantity: String,
        /// The unit name as supplied by the caller.
        unit: String,
    },

    /// A fiat currency code is absent from the rate table.
    #[error("currency not supported in offline mode: {0}")]
    UnsupportedCurrency(String),

    /// A crypto asset code is absent from the rate table.
    #[error("asset not supported in offline mode: {0}")]
    UnsupportedAsset(String),

    /// No converter is bound to the tool identifier.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// The external binary-document collaborator failed.
    #[error("document processing failed: {0}")]
    DocumentProcessing(String),
}

/// The kind of an [`Error`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::InvalidInput`].
    InvalidInput,
    /// See [`Error::UnknownUnit`].
    UnknownUnit,
    /// See [`Error::UnsupportedCurrency`].
    UnsupportedCurrency,
    /// See [`Error::UnsupportedAsset`].
    UnsupportedAsset,
    /// See [`Error::UnknownTool`].
    UnknownTool,
    /// See [`Error::DocumentProcessing`].
    DocumentProcessing,
}

impl Error {
    /// Build an [`Error::InvalidInput`] from any message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build an [`Error::UnknownUnit`].
    pub fn unknown_unit(quantity: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::UnknownUnit {
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }

    /// Return the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::UnknownUnit { .. } => ErrorKind::UnknownUnit,
            Self::UnsupportedCurrency(_) => ErrorKind::UnsupportedCurrency,
            Self::UnsupportedAsset(_) => ErrorKind::UnsupportedAsset,
            Self::UnknownTool(_) => ErrorKind::UnknownTool,
            Self::DocumentProcessing(_) => ErrorKind::DocumentProcessing,
        }
    }

    /// Return `true` if the error should be shown to the end user.
    ///
    /// `UnknownTool` is a configuration error of the hosting UI and is only
    /// logged.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::UnknownTool(_))
    }

    /// The message the presentation layer displays for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(msg) => msg.clone(),
            Self::UnknownUnit { unit, .. } => format!("Unknown unit: {unit}"),
            Self::UnsupportedCurrency(code) => {
                format!("Currency {code} is not supported in offline mode")
            }
            Self::UnsupportedAsset(code) => {
                format!("Asset {code} is not supported in offline mode")
            }
            Self::UnknownTool(_) => "Tool implementation pending".to_string(),
            Self::DocumentProcessing(msg) => format!("Processing failed: {msg}"),
        }
    }
}

/// Shorthand `Result` type used throughout convkit.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidInput(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ck_core::{ensure, errors::Error};
/// fn positive(x: f64) -> ck_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidInput(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidInput(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::InvalidInput(...))` immediately.
///
/// # Example
/// ```
/// use ck_core::{fail, errors::Error};
/// fn always_err() -> ck_core::errors::Result<()> {
///     fail!("Enter a value");
/// }
/// assert_eq!(always_err(), Err(Error::InvalidInput("Enter a value".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidInput(format!($($msg)*)))
    };
}
