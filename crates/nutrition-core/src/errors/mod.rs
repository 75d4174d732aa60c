// ABOUTME: Unified error type and error codes for the nutrition analytics engine
// ABOUTME: Defines AppError, ErrorCode, ErrorContext, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the engine returns [`AppResult`]. The taxonomy is
//! deliberately small: the engine performs no I/O, so every error is a local,
//! non-retryable input problem the caller must correct.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// A biometric value is out of range or not a finite number
    #[serde(rename = "INVALID_BIOMETRIC_INPUT")]
    InvalidBiometricInput = 3000,
    /// A required profile field is absent
    #[serde(rename = "INCOMPLETE_PROFILE")]
    IncompleteProfile = 3001,
    /// A date range was supplied with `start` after `end`
    #[serde(rename = "INVALID_DATE_RANGE")]
    InvalidDateRange = 3002,

    // Configuration (6000-6999)
    /// Configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidBiometricInput => "The provided biometric input is invalid",
            Self::IncompleteProfile => "The profile is missing a required field",
            Self::InvalidDateRange => "The requested date range is invalid",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }

    /// Whether the caller can fix this error by correcting its input
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidBiometricInput | Self::IncompleteProfile | Self::InvalidDateRange
        )
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Offending input field, if applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Record the offending input field
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.context.field = Some(field.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Biometric value out of range
    #[must_use]
    pub fn invalid_biometric(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidBiometricInput, message)
    }

    /// Required profile field missing
    #[must_use]
    pub fn incomplete_profile(field: &str) -> Self {
        Self::new(
            ErrorCode::IncompleteProfile,
            format!("Profile field '{field}' is required to compute targets"),
        )
        .with_field(field)
    }

    /// Date range with start after end
    #[must_use]
    pub fn invalid_date_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidDateRange, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error payload for the collaborating UI layer
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Offending field, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            code: error.code,
            message: error.message,
            field: error.context.field,
        }
    }
}
