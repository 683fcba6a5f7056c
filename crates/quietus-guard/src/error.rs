// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for quietus-guard.
use thiserror::Error;

/// Errors from the disposition-swap syscalls.
///
/// Surfaced only by [`ScopedSilence::try_new`](crate::ScopedSilence::try_new).
/// The lenient constructor and the drop path log failures and keep going.
#[derive(Debug, Error)]
pub enum DispositionError {
    /// `sigaction` failed while replacing a signal's disposition with the
    /// default.
    #[error("failed to replace disposition for signal {signal} (errno {errno})")]
    ReplaceFailed {
        /// Signal whose disposition was being replaced.
        signal: i32,
        /// errno reported by the failed call.
        errno: i32,
    },

    /// `sigaction` failed while reinstalling a captured disposition.
    #[error("failed to restore disposition for signal {signal} (errno {errno})")]
    RestoreFailed {
        /// Signal whose disposition was being restored.
        signal: i32,
        /// errno reported by the failed call.
        errno: i32,
    },
}
