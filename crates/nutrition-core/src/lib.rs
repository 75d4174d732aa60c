// ABOUTME: Core types and constants for the nutrition target and progress analytics engine
// ABOUTME: Foundation crate with error handling, domain constants, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate providing shared types and constants for the nutrition
//! analytics engine. It changes rarely; computation lives in `nutrition_engine`.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Energy conversion factors and biometric guard rails
//! - **models**: Profiles, daily logs, weight entries, targets, and statistics

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (profile, logs, weights, targets, statistics)
pub mod models;
