//! Per-execution-unit storage slots.
//!
//! A [`Slot`] is a single process-wide handle whose `store`/`load`/`clear`
//! operations are scoped to the *calling* thread: two threads using the same
//! handle never see each other's value. That contract is exactly what the
//! checker puts under test, so this module also ships [`SharedSlot`], a
//! deliberately broken implementation where every thread shares one cell.
//!
//! - **[`ThreadLocalSlot`]**: backed by `thread_local!` storage; entries die
//!   with their thread.
//! - **[`KeyedSlot`]**: an explicit table keyed by [`std::thread::ThreadId`];
//!   isolated, but entries for finished threads persist until cleared.
//! - **[`SharedSlot`]**: one cell visible to every thread. Violates the
//!   contract on purpose.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, ThreadId};

use parking_lot::Mutex;

/// Storage with one isolated value per calling thread.
///
/// All three operations act only on the calling thread's view of the slot;
/// a correct implementation never lets one thread observe another's write.
pub trait Slot: Send + Sync {
    /// Replace the calling thread's value.
    fn store(&self, value: String);

    /// The calling thread's current value, or `None` if it never stored one
    /// (or cleared it).
    fn load(&self) -> Option<String>;

    /// Drop the calling thread's value. A no-op if there is none.
    fn clear(&self);
}

// Each ThreadLocalSlot instance gets its own key into the per-thread table,
// so distinct instances never alias even on the same thread.
static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static CELLS: RefCell<HashMap<u64, String>> = RefCell::new(HashMap::new());
}

/// Thread-local storage: the correct-by-construction slot.
///
/// One handle, one isolated value per thread, courtesy of `thread_local!`.
/// A thread's entry disappears when the thread exits, so no cleanup is
/// strictly required for one-shot workers.
///
/// # Examples
///
/// ```
/// use isolocal::{Slot, ThreadLocalSlot};
///
/// let slot = ThreadLocalSlot::new();
/// slot.store("mine".to_string());
///
/// std::thread::scope(|s| {
///     s.spawn(|| {
///         assert_eq!(slot.load(), None); // fresh thread, fresh view
///         slot.store("theirs".to_string());
///     });
/// });
///
/// // the spawned thread's store never leaks into this one
/// assert_eq!(slot.load().as_deref(), Some("mine"));
/// ```
pub struct ThreadLocalSlot {
    key: u64,
}

impl ThreadLocalSlot {
    /// Create a slot with a fresh key.
    pub fn new() -> Self {
        Self {
            key: NEXT_KEY.fetch_add(1, Ordering::Relaxed),
        }
    }
}

impl Default for ThreadLocalSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Slot for ThreadLocalSlot {
    fn store(&self, value: String) {
        CELLS.with(|cells| {
            cells.borrow_mut().insert(self.key, value);
        });
    }

    fn load(&self) -> Option<String> {
        CELLS.with(|cells| cells.borrow().get(&self.key).cloned())
    }

    fn clear(&self) {
        CELLS.with(|cells| {
            cells.borrow_mut().remove(&self.key);
        });
    }
}

/// An explicit table from thread identity to value.
///
/// Same isolation contract as [`ThreadLocalSlot`], implemented the other way
/// around: one shared map keyed by [`ThreadId`]. The table outlives its
/// threads, which is the reason the cleanup-enabled run variant exists:
/// entries stored by finished threads stay [`retained`](KeyedSlot::retained)
/// until someone clears them.
pub struct KeyedSlot {
    table: Mutex<HashMap<ThreadId, String>>,
}

impl KeyedSlot {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(HashMap::new()),
        }
    }

    /// Number of entries currently held, including ones whose thread has
    /// already exited.
    pub fn retained(&self) -> usize {
        self.table.lock().len()
    }
}

impl Default for KeyedSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Slot for KeyedSlot {
    fn store(&self, value: String) {
        self.table.lock().insert(thread::current().id(), value);
    }

    fn load(&self) -> Option<String> {
        self.table.lock().get(&thread::current().id()).cloned()
    }

    fn clear(&self) {
        self.table.lock().remove(&thread::current().id());
    }
}

/// One cell shared by every thread: NOT isolated, on purpose.
///
/// Whatever any thread stores is what every thread loads. Running the checker
/// against this slot demonstrates what a broken thread-local implementation
/// looks like: workers read back values a different worker wrote.
pub struct SharedSlot {
    cell: Mutex<Option<String>>,
}

impl SharedSlot {
    pub fn new() -> Self {
        Self {
            cell: Mutex::new(None),
        }
    }
}

impl Default for SharedSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Slot for SharedSlot {
    fn store(&self, value: String) {
        *self.cell.lock() = Some(value);
    }

    fn load(&self) -> Option<String> {
        self.cell.lock().clone()
    }

    fn clear(&self) {
        *self.cell.lock() = None;
    }
}
