// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ScopedSilence - RAII guard over the fixed crash-signal set.
//!
//! Construction captures-and-overwrites, drop restores. Each syscall is
//! wrapped separately so the strict and lenient paths share the same code.

use core::mem;
use core::ptr;

use crate::error::DispositionError;

/// The four crash signals whose dispositions are replaced while a
/// [`ScopedSilence`] is alive, in capture and restore order.
pub const SILENCED_SIGNALS: [libc::c_int; 4] =
    [libc::SIGABRT, libc::SIGBUS, libc::SIGSEGV, libc::SIGSYS];

/// RAII guard that holds the crash signals at their default disposition.
///
/// Construction swaps each signal in [`SILENCED_SIGNALS`] to `SIG_DFL`,
/// capturing the `sigaction` that was installed immediately before.
/// Dropping the guard reinstalls the captured dispositions in the same
/// order, overwriting whatever is active at that point.
///
/// The guard is not `Clone`: moving it transfers the restore
/// responsibility, and the restore runs at most once. A guard that is
/// never dropped because the process died mid-test leaves nothing to
/// clean up; the signal table dies with the process.
pub struct ScopedSilence {
    saved: [Option<libc::sigaction>; SILENCED_SIGNALS.len()],
}

impl ScopedSilence {
    /// Replaces the crash-signal dispositions with the OS default.
    ///
    /// A `sigaction` failure for one signal is logged at `warn` level and
    /// skipped; the remaining signals are still replaced. Slots that were
    /// never captured are not restored on drop.
    pub fn new() -> Self {
        let mut saved = [None; SILENCED_SIGNALS.len()];

        for (slot, &signo) in saved.iter_mut().zip(SILENCED_SIGNALS.iter()) {
            match replace_with_default(signo) {
                Ok(previous) => *slot = Some(previous),
                Err(err) => log::warn!("quietus: {err}"),
            }
        }

        Self { saved }
    }

    /// Strict variant of [`ScopedSilence::new`].
    ///
    /// Fails on the first `sigaction` error. Dispositions captured before
    /// the failure are reinstalled before returning, so an `Err` leaves
    /// the signal table exactly as it was found.
    pub fn try_new() -> Result<Self, DispositionError> {
        let mut saved = [None; SILENCED_SIGNALS.len()];

        for (index, &signo) in SILENCED_SIGNALS.iter().enumerate() {
            match replace_with_default(signo) {
                Ok(previous) => saved[index] = Some(previous),
                Err(err) => {
                    // Reinstall the already-captured prefix through the
                    // normal drop path before surfacing the failure.
                    drop(Self { saved });
                    return Err(err);
                }
            }
        }

        Ok(Self { saved })
    }
}

impl Default for ScopedSilence {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScopedSilence {
    fn drop(&mut self) {
        for (slot, &signo) in self.saved.iter().zip(SILENCED_SIGNALS.iter()) {
            if let Some(previous) = slot {
                if let Err(err) = reinstall(signo, previous) {
                    log::warn!("quietus: {err}");
                }
            }
        }
    }
}

/// Runs `body` with the crash signals at their default disposition.
///
/// Equivalent to declaring a [`ScopedSilence`] for the duration of the
/// closure. Prior dispositions are reinstalled before this returns.
pub fn with_silence<R>(body: impl FnOnce() -> R) -> R {
    let _silence = ScopedSilence::new();
    body()
}

/// Swaps `signo` to the default disposition, returning the one replaced.
fn replace_with_default(signo: libc::c_int) -> Result<libc::sigaction, DispositionError> {
    let mut action: libc::sigaction = unsafe { mem::zeroed() };
    action.sa_sigaction = libc::SIG_DFL;
    action.sa_flags = 0;
    unsafe { libc::sigemptyset(&mut action.sa_mask) };

    let mut previous: libc::sigaction = unsafe { mem::zeroed() };

    let failed = unsafe { libc::sigaction(signo, &action, &mut previous) } == -1;
    if failed {
        return Err(DispositionError::ReplaceFailed {
            signal: signo,
            errno: last_errno(),
        });
    }

    Ok(previous)
}

/// Reinstalls a previously captured disposition for `signo`.
fn reinstall(signo: libc::c_int, previous: &libc::sigaction) -> Result<(), DispositionError> {
    let failed = unsafe { libc::sigaction(signo, previous, ptr::null_mut()) } == -1;
    if failed {
        return Err(DispositionError::RestoreFailed {
            signal: signo,
            errno: last_errno(),
        });
    }

    Ok(())
}

fn last_errno() -> i32 {
    std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
}
