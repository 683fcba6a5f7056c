// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Crash-reporter suppression for death tests.</em></p>
//!
//! ---
//!
//! A death test kills its own process on purpose, to verify that an
//! assertion or a guard rail actually terminates execution. Whatever
//! crash reporting is installed process-wide does not know the death was
//! intentional: it dumps a stack trace, spams the log, and books the
//! expected death as a stability regression. Quietus holds the four fatal
//! crash signals (`SIGABRT`, `SIGBUS`, `SIGSEGV`, `SIGSYS`) at their
//! default OS disposition for the duration of a test and reinstalls
//! whatever was there before when the test survives.
//!
//! # Quick Start
//!
//! For a one-off death test, declare a scoped guard in the test body:
//!
//! ```rust
//! use quietus::guard::ScopedSilence;
//!
//! let _silence = ScopedSilence::new();
//! // A fatal signal raised here terminates the process with its default
//! // action instead of invoking an installed crash reporter.
//! ```
//!
//! A harness with per-test setup/teardown hooks wires the guard in once
//! through the fixture, so individual tests need no declaration:
//!
//! ```rust
//! use quietus::fixture::SilentDeathFixture;
//!
//! let mut fixture = SilentDeathFixture::new();
//! fixture.setup();
//! // death-test body
//! fixture.teardown();
//! ```
//!
//! # Scope
//!
//! The silenced signal set is fixed; no configuration varies it. Signals
//! outside the set are never touched. Dispositions are process-wide, so
//! suppressing tests must run sequentially on a single thread.

#![warn(missing_docs)]

pub use quietus_fixture as fixture;
pub use quietus_guard as guard;
