// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by the strict constructors and the command-line boundary.
//!
//! The conversion pipeline itself is total and never returns an error.

/// Errors reported by eci-ecef.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The command line did not carry exactly nine positional values.
    #[error("expected 9 positional arguments, found {found}")]
    InvalidArgumentCount { found: usize },

    /// A positional value could not be parsed as a number.
    #[error("argument `{name}` is not numeric: {value:?}")]
    NonNumericArgument { name: &'static str, value: String },

    /// A civil instant failed strict validation.
    #[error("invalid civil instant: {field} {reason}")]
    InvalidCivilInstant {
        field: &'static str,
        reason: &'static str,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
