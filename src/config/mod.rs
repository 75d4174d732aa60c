// ABOUTME: Configuration management module for engine parameters
// ABOUTME: Exposes nutrition intelligence settings with environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the nutrition engine
//!
//! - **Intelligence**: Domain configuration structs with defaults and validation
//! - **Intelligence config**: Process-wide configuration loaded from the environment

/// Domain configuration structs
pub mod intelligence;
/// Global intelligence configuration with environment overrides
pub mod intelligence_config;
