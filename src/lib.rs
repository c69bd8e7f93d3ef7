//! rw-collections: thread-safe containers guarded by a per-instance
//! reader/writer lock.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small family of containers (`SyncArray`, `SyncList`,
//!   `SyncMap`, `SyncQueue`, `SyncStack`) that can be shared between
//!   threads through `Arc` without the caller taking any lock.
//! - Every container is the same shape: its backing collection plus one
//!   `parking_lot::RwLock`, owned together in a crate-private `Guarded<T>`.
//!   Neither the lock nor the backing collection is ever exposed.
//!
//! Locking contract
//! - Reads (`get`, `len`, `contains`, `values`, `keys`, `duplicate`, ...)
//!   take the shared side; any number may run at once.
//! - Writes (`set`, `push`, `insert`, `remove`, `clear`, ...) take the
//!   exclusive side and exclude every other operation on that instance.
//! - Each operation is one critical section, so no caller observes a
//!   partially applied write. Operations on one instance are totally
//!   ordered by lock acquisition; no fairness between writers is promised.
//!
//! Snapshots
//! - `values`, `keys`, `entries` and `duplicate` copy the data while the
//!   shared lock is held and return an owned value. The copy reflects one
//!   instant, and later writes to either side are invisible to the other.
//! - Queue and stack snapshots iterate the backing store in place; there is
//!   no drain-and-restore step and so no window in which the container
//!   appears empty.
//!
//! Found flags
//! - Lookups return `Option`, positional writes return `Result` carrying
//!   the rejected value back in `OutOfRange`. Nothing is signalled through
//!   a sentinel value, and a rejected operation leaves the container as it
//!   was.
//!
//! Reentrancy
//! - The lock is not reentrant. While it is held the only user code that
//!   runs is `PartialEq`, `Hash` and `Clone` of the stored types. Removed
//!   values are returned to the caller and cleared contents are dropped
//!   after the lock is released, so `Drop` never runs inside a critical
//!   section.
//! - A debug-only per-thread tracker panics when a thread enters an
//!   instance it already holds (for example from an `Eq` impl that
//!   inspects the same map), turning a deadlock into a diagnosable panic.
//!   Release builds compile it away.
//!
//! Equality
//! - `contains` and map lookups use the element's `PartialEq`/`Eq`
//!   (structural equality for derived impls). Comparisons must be total
//!   and terminating; types that cannot provide that are unsupported for
//!   `contains` and as map keys.
//!
//! Notes and non-goals
//! - Coarse-grained locking only; no lock-free paths and no sharding.
//! - No cancellation or timeouts: once the lock is acquired an operation
//!   runs to completion.
//! - Bulk operations emit `log::trace!` records; the crate never installs
//!   a logger.
//!
//! ```
//! use rw_collections::{SyncArray, SyncQueue};
//! use std::sync::Arc;
//!
//! let arr: Arc<SyncArray<i32>> = Arc::new(SyncArray::new(3));
//! std::thread::scope(|s| {
//!     for i in 0..3 {
//!         let arr = Arc::clone(&arr);
//!         s.spawn(move || arr.set(i, i as i32 + 1).unwrap());
//!     }
//! });
//! assert_eq!(arr.values(), vec![1, 2, 3]);
//!
//! let q = SyncQueue::new();
//! q.enqueue("a");
//! assert_eq!(q.peek(), Some("a"));
//! assert_eq!(q.dequeue(), Some("a"));
//! assert_eq!(q.dequeue(), None);
//! ```

mod array;
mod error;
mod guarded;
mod list;
mod map;
mod queue;
mod reentrancy;
mod seq;
mod stack;

// Public surface
pub use array::SyncArray;
pub use error::OutOfRange;
pub use list::SyncList;
pub use map::SyncMap;
pub use queue::SyncQueue;
pub use stack::SyncStack;
