// ABOUTME: Error handling re-exports from the nutrition-core foundation crate
// ABOUTME: Keeps crate::errors paths stable for engine modules and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Re-exports [`AppError`], [`ErrorCode`], and [`AppResult`] from `nutrition_core`.

pub use nutrition_core::errors::*;
