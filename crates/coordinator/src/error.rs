// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the coordinator

use talon_core::ConfigError;
use thiserror::Error;

/// Errors from coordinator construction and handle operations
///
/// Only configuration failure at construction time is fatal; everything
/// recoverable is surfaced as an `Error` event instead.
#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("coordinator stopped")]
    Stopped,
}
