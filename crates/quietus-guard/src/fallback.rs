// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Inert stand-ins for targets without POSIX signal dispositions.
//!
//! Crash-reporter suppression is a POSIX concern. On other targets the
//! guard captures nothing and restores nothing, so death-test suites
//! still build and run; they just keep whatever crash reporting the
//! platform provides.

use crate::error::DispositionError;

/// Inert guard for non-POSIX targets. Holds no state.
pub struct ScopedSilence {}

impl ScopedSilence {
    /// Does nothing on this target.
    pub fn new() -> Self {
        Self {}
    }

    /// Does nothing on this target; never fails.
    pub fn try_new() -> Result<Self, DispositionError> {
        Ok(Self::new())
    }
}

impl Default for ScopedSilence {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `body` unchanged on this target.
pub fn with_silence<R>(body: impl FnOnce() -> R) -> R {
    body()
}
