use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use foldhash::{HashMap, HashMapExt};

use crate::{Clock, CorrelationManager, ERR_POISONED_LOCK, Stats};

/// Source of process-unique manager identities. Identities are never reused, so a slot
/// left behind by a dropped manager can never be mistaken for the slot of a new one.
static NEXT_MANAGER_ID: AtomicU64 = AtomicU64::new(0);

/// The pending start instant of one manager on one thread.
struct StartSlot {
    /// Dead once the owning manager has been dropped, on whichever thread that happened.
    owner: Weak<()>,

    /// The `Clock::Instant` of the owning manager.
    start: Box<dyn Any>,
}

thread_local! {
    /// Pending start instants of the current thread, keyed by manager identity.
    ///
    /// A slot is allocated the first time a thread starts a given timer and is overwritten in
    /// place on every later start. Slots of dropped managers are pruned whenever a new slot
    /// is allocated, so the map never holds more than one dead slot per live one.
    static PENDING_STARTS: RefCell<HashMap<u64, StartSlot>> = RefCell::new(HashMap::new());
}

/// Correlation manager for timers shared between threads.
///
/// Any number of threads may start and stop the same timer concurrently. Each thread's
/// `stop()` is paired with the same thread's most recent `start()`, so interleaved
/// measurements on different threads never get mixed up.
///
/// The start instant is kept in thread-local storage owned by the calling thread and needs
/// no synchronization. Only adding the finished sample to the shared statistics takes a lock.
/// Reading [`stats()`](CorrelationManager::stats) also takes the lock, so a snapshot is never
/// torn by a concurrent update.
///
/// # Resource management
///
/// The first `start()` of a timer on a thread allocates a small slot in that thread's storage.
/// The slot of the dropping thread is released when the manager is dropped. Slots on other
/// threads are released the next time those threads allocate a slot for any timer, or when
/// they exit.
pub struct ConcurrentManager<C, S>
where
    C: Clock,
    S: Stats,
{
    id: u64,
    stats: Mutex<S>,

    // Thread-local slots hold a `Weak` to this, which tells them when we are gone.
    liveness: Arc<()>,

    _clock: PhantomData<C>,
}

impl<C, S> CorrelationManager for ConcurrentManager<C, S>
where
    C: Clock,
    S: Stats,
{
    type Clock = C;
    type Stats = S;

    fn record_start(&self, now: C::Instant) {
        PENDING_STARTS.with_borrow_mut(|starts| {
            if let Some(slot) = starts.get_mut(&self.id) {
                if let Some(start) = slot.start.downcast_mut::<C::Instant>() {
                    *start = now;
                }

                return;
            }

            starts.retain(|_, slot| slot.owner.strong_count() != 0);

            starts.insert(
                self.id,
                StartSlot {
                    owner: Arc::downgrade(&self.liveness),
                    start: Box::new(now),
                },
            );
        });
    }

    fn update_stats(&self, clock: &C, now: C::Instant) {
        let start = PENDING_STARTS.with_borrow(|starts| {
            starts
                .get(&self.id)
                .and_then(|slot| slot.start.downcast_ref::<C::Instant>())
                .copied()
        });

        debug_assert!(
            start.is_some(),
            "timer stopped on a thread that never started it"
        );

        if let Some(start) = start {
            let interval = clock.interval(start, now);

            self.stats
                .lock()
                .expect(ERR_POISONED_LOCK)
                .add_sample(interval);
        }
    }

    fn stats(&self) -> S {
        self.stats.lock().expect(ERR_POISONED_LOCK).clone()
    }
}

impl<C, S> Default for ConcurrentManager<C, S>
where
    C: Clock,
    S: Stats,
{
    fn default() -> Self {
        Self {
            id: NEXT_MANAGER_ID.fetch_add(1, Ordering::Relaxed),
            stats: Mutex::new(S::default()),
            liveness: Arc::new(()),
            _clock: PhantomData,
        }
    }
}

impl<C, S> Drop for ConcurrentManager<C, S>
where
    C: Clock,
    S: Stats,
{
    fn drop(&mut self) {
        // The thread-local storage may already be gone if we are dropped during thread exit.
        let _removed = PENDING_STARTS.try_with(|starts| starts.borrow_mut().remove(&self.id));
    }
}

impl<C, S> fmt::Debug for ConcurrentManager<C, S>
where
    C: Clock,
    S: Stats,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentManager")
            .field("id", &self.id)
            .field("stats", &self.stats)
            .finish()
    }
}
