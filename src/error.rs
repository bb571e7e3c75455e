//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error type for translating externally supplied face names into
/// [`FaceName`](crate::cubenxn::FaceName) variants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseFaceError {
    /// attempted to parse a face name outside the fixed set of six
    #[error("`{0}` is not a face name (expected Up, Down, Front, Back, Left or Right)")]
    UnknownFace(String),
}
