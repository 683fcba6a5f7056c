// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # quietus-guard
//!
//! Scoped crash-reporter suppression for death tests.
//!
//! Crash reporters install process-wide signal handlers. When a test kills
//! its own process on purpose, the reporter does not know the death was
//! intentional: it captures a stack trace, spams the log, and books the
//! expected death as a stability regression. [`ScopedSilence`] swaps the
//! dispositions of the four fatal crash signals back to the OS default for
//! its lifetime and reinstalls whatever was there before when it drops.
//!
//! ## Core Types
//!
//! - [`ScopedSilence`]: RAII disposition guard
//! - [`SILENCED_SIGNALS`]: the fixed crash-signal set (unix only)
//! - [`DispositionError`]: a `sigaction` failure, surfaced only by
//!   [`ScopedSilence::try_new`]
//!
//! ## Example
//!
//! ```rust
//! use quietus_guard::ScopedSilence;
//!
//! let silence = ScopedSilence::new();
//! // A fatal signal raised here terminates the process with its default
//! // action instead of invoking an installed crash reporter.
//! drop(silence); // prior dispositions are back in place
//! ```
//!
//! ## Concurrency
//!
//! Signal dispositions are process-wide, not thread-local. Two live guards
//! on independent threads race on capture and restore, so guards must be
//! strictly nested and driven from a single test thread. This is a
//! documented precondition, not an enforced invariant.

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]


mod error;

#[cfg(unix)]
mod guard;
#[cfg(not(unix))]
mod fallback;

pub use error::DispositionError;

#[cfg(unix)]
pub use guard::{SILENCED_SIGNALS, ScopedSilence, with_silence};

#[cfg(not(unix))]
pub use fallback::{ScopedSilence, with_silence};
