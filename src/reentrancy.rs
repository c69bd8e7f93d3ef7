//! Debug-only reentrancy detection for lock holders.
//!
//! Each thread keeps a small list of the container instances it currently
//! holds a guard on. Entering an instance that is already on the list
//! panics in debug builds: with a non-reentrant reader/writer lock the
//! alternative is a silent deadlock (write-after-read or read-after-write
//! on the same thread). In release builds this compiles to a zero-cost
//! no-op.
//!
//! Instances are identified by address. An address is only recorded while
//! a guard borrowing the instance is alive, so it cannot be reused by a
//! different instance in the meantime.

use core::marker::PhantomData;

#[cfg(debug_assertions)]
use std::cell::RefCell;

#[cfg(debug_assertions)]
thread_local! {
    static HELD: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Record that the current thread is entering `owner`.
///
/// Panics in debug builds if the current thread already holds a guard on
/// the same instance. Dropping the returned guard leaves the instance.
#[inline]
pub fn enter<T: ?Sized>(owner: &T) -> ReentrancyGuard<'_> {
    #[cfg(debug_assertions)]
    {
        let addr = owner as *const T as *const () as usize;
        HELD.with(|held| {
            let mut held = held.borrow_mut();
            assert!(
                !held.contains(&addr),
                "reentrancy detected: nested entry into locked container"
            );
            held.push(addr);
        });
        ReentrancyGuard {
            addr,
            _owner: PhantomData,
        }
    }

    #[cfg(not(debug_assertions))]
    {
        let _ = owner;
        ReentrancyGuard {
            _owner: PhantomData,
        }
    }
}

/// Number of instances the current thread holds a guard on.
/// Always zero in release builds.
#[cfg(test)]
pub fn held_count() -> usize {
    #[cfg(debug_assertions)]
    {
        HELD.with(|held| held.borrow().len())
    }

    #[cfg(not(debug_assertions))]
    {
        0
    }
}

/// RAII guard returned by [`enter`].
///
/// Not `Send`: it must be dropped on the thread that created it.
pub struct ReentrancyGuard<'a> {
    #[cfg(debug_assertions)]
    addr: usize,
    _owner: PhantomData<(&'a (), *const ())>,
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        {
            // try_with: the thread-local may already be torn down during
            // thread exit.
            let _ = HELD.try_with(|held| {
                let mut held = held.borrow_mut();
                if let Some(pos) = held.iter().rposition(|&a| a == self.addr) {
                    held.swap_remove(pos);
                }
            });
        }
    }
}
