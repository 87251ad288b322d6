// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyText,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyText => f.write_str("text must not be empty or whitespace-only"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Transport-level or HTTP-level failure talking to a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The request could not be built, sent, or completed.
    Transport { message: String },
    /// The backend answered with a non-success status.
    Status { status: u16, body: String },
    /// The backend answered with a body that is not the expected JSON shape.
    Decode { message: String },
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { message } => write!(f, "request failed: {message}"),
            Self::Status { status, body } if body.is_empty() => write!(f, "HTTP {status}"),
            Self::Status { status, body } => write!(f, "HTTP {status}: {body}"),
            Self::Decode { message } => write!(f, "invalid response body: {message}"),
        }
    }
}

impl std::error::Error for RemoteError {}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode { message: err.to_string() }
        } else {
            Self::Transport { message: err.to_string() }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireError {
    /// Rejected before any network call.
    Validation(ValidationError),
    Remote(RemoteError),
    /// The backend accepted the request but could not extract anything.
    Processing(String),
}

impl fmt::Display for AcquireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid input: {err}"),
            Self::Remote(err) => write!(f, "backend unavailable: {err}"),
            Self::Processing(message) => write!(f, "backend could not process input: {message}"),
        }
    }
}

impl std::error::Error for AcquireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Remote(err) => Some(err),
            Self::Processing(_) => None,
        }
    }
}

impl From<ValidationError> for AcquireError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<RemoteError> for AcquireError {
    fn from(err: RemoteError) -> Self {
        Self::Remote(err)
    }
}
