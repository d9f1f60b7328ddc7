// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use thiserror::Error;

/// Errors produced while turning an expression into a compiled pattern.
#[derive(Debug, Error)]
pub enum VerbalError {
    /// The assembled pattern text was rejected by the regex engine.
    ///
    /// Literal-accepting methods always escape their input and the
    /// expression compiles with raised nesting and size limits, so this is
    /// triggered by invalid raw fragments passed to `Expression::add`, or
    /// by a pattern that still exceeds those limits.
    #[error("invalid pattern `{pattern}`: {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl VerbalError {
    /// The pattern text that failed to compile.
    pub fn pattern(&self) -> &str {
        match self {
            VerbalError::Compile { pattern, .. } => pattern,
        }
    }
}
