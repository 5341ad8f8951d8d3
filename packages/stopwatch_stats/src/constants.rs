/// Message used when a lock is poisoned because another thread panicked while holding it.
pub(crate) const ERR_POISONED_LOCK: &str = "encountered poisoned lock - a thread panicked \
    while updating timer statistics, so they can no longer be trusted";
