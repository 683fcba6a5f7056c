// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # quietus-fixture
//!
//! Setup/teardown wiring for the disposition guard, so death-test suites
//! get crash-reporter suppression without a per-test guard declaration.
//!
//! A harness with per-test lifecycle hooks stores one
//! [`SilentDeathFixture`] per test instance, calls
//! [`setup`](SilentDeathFixture::setup) before the test body and
//! [`teardown`](SilentDeathFixture::teardown) after it. A body that dies
//! mid-test never reaches teardown; that is the intended outcome of a
//! death test, and process exit reclaims the signal table.
//!
//! ```rust
//! use quietus_fixture::SilentDeathFixture;
//!
//! let mut fixture = SilentDeathFixture::new();
//! fixture.setup();
//! // death-test body runs here with crash reporting silenced
//! fixture.teardown();
//! ```

#![warn(missing_docs)]


mod fixture;

pub use fixture::SilentDeathFixture;
