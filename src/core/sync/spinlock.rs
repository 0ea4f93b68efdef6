/*!
 * Spinlock
 *
 * Minimal test-and-set spinlock for short, non-blocking critical sections.
 *
 * # Design
 *
 * One `AtomicBool` flag, one `UnsafeCell` payload. The payload is only
 * reachable through the RAII guard, so every read and write of the protected
 * data happens with the flag held. Failed acquisition attempts issue
 * `std::hint::spin_loop()` (PAUSE on x86, YIELD on aarch64); there is no
 * backoff and no wait queue, so contending threads race on every retry and
 * acquisition order is unspecified.
 *
 * # Use Cases
 *
 * Critical sections must stay short and free of blocking, nested locking,
 * and I/O. A thread that never drops its guard deadlocks the lock
 * permanently. Not reentrant: relocking from the owning thread spins
 * forever.
 */

use crate::core::hints::likely;
use std::cell::UnsafeCell;
use std::fmt;
use std::hint;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, Ordering};

/// Test-and-set spinlock protecting a value of type `T`
pub struct SpinLock<T> {
    locked: AtomicBool,
    data: UnsafeCell<T>,
}

// SAFETY: the lock provides exclusive access to the payload, so sharing the
// lock across threads only requires the payload to be sendable.
unsafe impl<T: Send> Send for SpinLock<T> {}
unsafe impl<T: Send> Sync for SpinLock<T> {}

impl<T> SpinLock<T> {
    /// Create an unlocked spinlock owning `data`
    #[inline]
    pub const fn new(data: T) -> Self {
        Self {
            locked: AtomicBool::new(false),
            data: UnsafeCell::new(data),
        }
    }

    /// Acquire the lock, spinning until it becomes free
    #[inline]
    pub fn lock(&self) -> SpinLockGuard<'_, T> {
        // Uncontended acquisition is the expected path
        if likely(self.try_acquire()) {
            return SpinLockGuard { lock: self };
        }
        loop {
            hint::spin_loop();
            if self.try_acquire() {
                return SpinLockGuard { lock: self };
            }
        }
    }

    /// Attempt a single acquisition without spinning
    #[inline]
    pub fn try_lock(&self) -> Option<SpinLockGuard<'_, T>> {
        if self.try_acquire() {
            Some(SpinLockGuard { lock: self })
        } else {
            None
        }
    }

    /// Consume the lock and return the payload
    #[inline]
    pub fn into_inner(self) -> T {
        self.data.into_inner()
    }

    /// Access the payload through an exclusive borrow (no locking needed)
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.data.get_mut()
    }

    #[inline]
    fn try_acquire(&self) -> bool {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }
}

impl<T: Default> Default for SpinLock<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> fmt::Debug for SpinLock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpinLock")
            .field("locked", &self.locked.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// RAII guard granting exclusive access to the payload
///
/// Dropping the guard releases the lock with release ordering; every spinning
/// waiter observes the cleared flag and exactly one wins the next race.
pub struct SpinLockGuard<'a, T> {
    lock: &'a SpinLock<T>,
}

impl<T> Deref for SpinLockGuard<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        // SAFETY: the guard holds the lock, so no other reference exists
        unsafe { &*self.lock.data.get() }
    }
}

impl<T> DerefMut for SpinLockGuard<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY: the guard holds the lock, so no other reference exists
        unsafe { &mut *self.lock.data.get() }
    }
}

impl<T> Drop for SpinLockGuard<'_, T> {
    #[inline]
    fn drop(&mut self) {
        self.lock.locked.store(false, Ordering::Release);
    }
}
