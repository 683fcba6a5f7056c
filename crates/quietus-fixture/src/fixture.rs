// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test-lifecycle ownership of the disposition guard.

use quietus_guard::ScopedSilence;

/// Owns a [`ScopedSilence`] across a test's setup/teardown lifecycle.
///
/// The guard exists exactly between [`setup`](Self::setup) and
/// [`teardown`](Self::teardown). Dropping the fixture while it is still
/// suppressing (an unwinding test body, for instance) releases the guard
/// the same way teardown does.
///
/// A suite that layers its own setup/teardown logic on top must still
/// invoke these hooks, and must keep running tests sequentially on one
/// thread: the guarded state is process-wide.
#[derive(Default)]
pub struct SilentDeathFixture {
    silence: Option<ScopedSilence>,
}

impl SilentDeathFixture {
    /// Creates an idle fixture that owns no guard.
    pub fn new() -> Self {
        Self { silence: None }
    }

    /// Installs the disposition guard. Invoked once before the test body.
    pub fn setup(&mut self) {
        // Release any previous guard before installing the next one so
        // capture and restore stay strictly nested.
        self.silence = None;
        self.silence = Some(ScopedSilence::new());
    }

    /// Releases the disposition guard, reinstalling the dispositions
    /// captured by [`setup`](Self::setup). Invoked after a test body
    /// that returned normally.
    pub fn teardown(&mut self) {
        self.silence = None;
    }

    /// Whether the fixture currently holds a guard, i.e. the test is
    /// between setup and teardown.
    pub fn is_suppressing(&self) -> bool {
        self.silence.is_some()
    }
}
