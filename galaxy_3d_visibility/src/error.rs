//! Error types for the Galaxy3D visibility module
//!
//! The only failure class is construction-time validation: degenerate
//! frustum parameters or poses, a rejected configuration, or a lane index
//! outside the three supported axes. Per-tick operations are total.

use std::fmt;

/// Result type for Galaxy3D visibility operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D visibility errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Frustum cannot be built (near >= far, bad angle, parallel basis, ...)
    InvalidFrustum(String),

    /// Configuration rejected by `VisibilityConfig::validate()`
    InvalidConfig(String),

    /// Lane index outside {0, 1, 2}
    InvalidLane(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFrustum(msg) => write!(f, "Invalid frustum: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidLane(lane) => write!(f, "Invalid lane index {} (expected 0, 1 or 2)", lane),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR (with file:line) and build the matching `Error` value.
///
/// The second argument names an `Error` variant carrying a `String`.
///
/// # Example
///
/// ```ignore
/// let err = engine_err!("galaxy3d::visibility::Frustum", InvalidFrustum, "near {} >= far {}", near, far);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::galaxy3d::Error::$variant(message)
    }};
}

/// Log an ERROR and return early with the matching `Err(Error::Variant(..))`.
///
/// # Example
///
/// ```ignore
/// engine_bail!("galaxy3d::visibility::Config", InvalidConfig, "speed step must be positive");
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
