//! Per-thread silencing of the panic hook
//!
//! The default panic hook prints every panic to stderr, including the ones a
//! guarded block is about to have caught. A wrapping hook is installed once
//! per process and stays quiet while the current thread is inside a silenced
//! guard. Other threads keep the previous hook's behavior.

use std::cell::Cell;
use std::panic;
use std::sync::Once;
use std::thread;

static INSTALL: Once = Once::new();

thread_local! {
    static SILENCE_DEPTH: Cell<usize> = const { Cell::new(0) };
}

fn install() {
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let silenced = SILENCE_DEPTH.try_with(|depth| depth.get() > 0).unwrap_or(false);
            if !silenced {
                previous(info);
            }
        }));
        log::trace!("Installed quiet panic hook");
    });
}

/// Keeps the panic hook quiet on this thread until dropped
///
/// Guards nest. The depth is restored on drop, including during unwinding.
///
/// The hook cannot be swapped from a panicking thread. A guard created there
/// before the hook exists is inactive and silences nothing.
pub(crate) struct SilenceGuard {
    active: bool,
    _not_send: std::marker::PhantomData<*const ()>,
}

impl SilenceGuard {
    pub(crate) fn new() -> Self {
        let active = INSTALL.is_completed() || !thread::panicking();
        if active {
            install();
            SILENCE_DEPTH.with(|depth| depth.set(depth.get() + 1));
        }
        Self {
            active,
            _not_send: std::marker::PhantomData,
        }
    }
}

impl Drop for SilenceGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = SILENCE_DEPTH.try_with(|depth| depth.set(depth.get().saturating_sub(1)));
        }
    }
}

/// Whether the panic hook is currently silenced on this thread
#[cfg(test)]
pub(crate) fn is_silenced() -> bool {
    SILENCE_DEPTH.with(|depth| depth.get() > 0)
}
