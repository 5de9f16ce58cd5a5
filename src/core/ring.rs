//! Fixed-capacity ring buffer for handing log records between threads
//!
//! One producer calls [`Ring::add`], one consumer calls [`Ring::remove`].
//! Neither side takes a lock or allocates: the slots are allocated once in
//! [`Ring::new`] and each slot carries an atomic stamp that says whose turn
//! it is to touch the value.
//!
//! When the consumer falls behind, `add` does not wait for space. It evicts
//! the oldest unread value and stores the new one in its place, so a full
//! ring always holds the `N` most recent values.
//!
//! Read and write positions pack a lap counter above a slot index. The lap
//! unit is the smallest power of two greater than `N`, so the index never
//! carries into the lap and the lap wraps cleanly at the top of `usize`.
//! Because empty and full are told apart by the lap (not by the indices
//! alone), all `N` slots are usable from the first write.
//!
//! The producer is lock-free, not wait-free. On a full ring, an `add` that
//! races a `remove` for the same oldest value spins until that `remove` has
//! moved the value out; that window is a few instructions on the consumer
//! side.
//!
//! Several producers or consumers on one ring are memory-safe, since slot
//! ownership is settled by compare-and-swap, but records from different
//! producers interleave in no particular order.

use std::cell::UnsafeCell;
use std::fmt;
use std::hint::spin_loop;
use std::mem::MaybeUninit;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Capacity used by loggers that do not pick their own
pub const DEFAULT_RING_CAPACITY: usize = 128;

struct Slot<T> {
    /// `pos` when free for a write at `pos`, `pos + 1` once written,
    /// `pos + ONE_LAP` once read (free for the write one lap later).
    stamp: AtomicUsize,
    value: UnsafeCell<MaybeUninit<T>>,
}

pub struct Ring<T, const N: usize = DEFAULT_RING_CAPACITY> {
    /// Read position, advanced by the consumer or by an evicting producer
    head: AtomicUsize,
    /// Write position
    tail: AtomicUsize,
    slots: Box<[Slot<T>]>,
    overwritten: AtomicU64,
}

// Values are only ever touched by the thread that won the slot's stamp.
unsafe impl<T: Send, const N: usize> Sync for Ring<T, N> {}

impl<T, const N: usize> Ring<T, N> {
    const ONE_LAP: usize = (N + 1).next_power_of_two();

    /// Create an empty ring with all `N` slots allocated
    ///
    /// # Panics
    ///
    /// Panics if `N` is zero.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Empty ring whose positions start at `pos`, which must be a lap boundary
    fn starting_at(pos: usize) -> Self {
        assert!(N > 0, "ring capacity must be non-zero");
        debug_assert_eq!(Self::index(pos), 0);

        let slots = (0..N)
            .map(|i| Slot {
                stamp: AtomicUsize::new(pos.wrapping_add(i)),
                value: UnsafeCell::new(MaybeUninit::uninit()),
            })
            .collect();

        Self {
            head: AtomicUsize::new(pos),
            tail: AtomicUsize::new(pos),
            slots,
            overwritten: AtomicU64::new(0),
        }
    }

    #[inline]
    fn index(pos: usize) -> usize {
        pos & (Self::ONE_LAP - 1)
    }

    /// The position after `pos`, moving to the next lap after the last slot
    #[inline]
    fn next(pos: usize) -> usize {
        if Self::index(pos) + 1 < N {
            pos + 1
        } else {
            (pos & !(Self::ONE_LAP - 1)).wrapping_add(Self::ONE_LAP)
        }
    }

    /// Store `value`, evicting the oldest unread value if the ring is full
    ///
    /// Never fails and never allocates. Returns the evicted value, if any;
    /// the consumer will not see it. On a full ring this may spin while a
    /// concurrent [`remove`](Self::remove) moves the oldest value out.
    pub fn add(&self, value: T) -> Option<T> {
        let mut tail = self.tail.load(Ordering::Relaxed);

        loop {
            let new_tail = Self::next(tail);
            let slot = &self.slots[Self::index(tail)];
            let stamp = slot.stamp.load(Ordering::Acquire);

            if stamp == tail {
                match self.tail.compare_exchange_weak(
                    tail,
                    new_tail,
                    Ordering::SeqCst,
                    Ordering::Relaxed,
                ) {
                    Ok(_) => {
                        // SAFETY: winning the tail CAS on a free stamp gives this
                        // thread exclusive access to the slot until the stamp store.
                        unsafe { (*slot.value.get()).write(value) };
                        slot.stamp.store(tail + 1, Ordering::Release);
                        return None;
                    }
                    Err(current) => tail = current,
                }
            } else if stamp.wrapping_add(Self::ONE_LAP) == tail + 1 {
                // Slot still holds the unread value written one lap ago.
                let oldest = tail.wrapping_sub(Self::ONE_LAP);
                if self
                    .head
                    .compare_exchange_weak(
                        oldest,
                        new_tail.wrapping_sub(Self::ONE_LAP),
                        Ordering::SeqCst,
                        Ordering::Relaxed,
                    )
                    .is_ok()
                {
                    self.tail.store(new_tail, Ordering::SeqCst);
                    // SAFETY: moving the head past `oldest` means no consumer can
                    // claim this slot; the value in it is initialized.
                    let evicted = unsafe {
                        std::ptr::replace(slot.value.get(), MaybeUninit::new(value))
                            .assume_init()
                    };
                    slot.stamp.store(tail + 1, Ordering::Release);
                    self.overwritten.fetch_add(1, Ordering::Relaxed);
                    return Some(evicted);
                }
                // The consumer is taking the oldest value right now.
                spin_loop();
                tail = self.tail.load(Ordering::Relaxed);
            } else {
                spin_loop();
                tail = self.tail.load(Ordering::Relaxed);
            }
        }
    }

    /// Take the oldest unread value
    ///
    /// Returns `None` when the read and write positions are equal, or when
    /// the value at the read position is still being written.
    pub fn remove(&self) -> Option<T> {
        let mut head = self.head.load(Ordering::Relaxed);

        loop {
            let slot = &self.slots[Self::index(head)];
            let stamp = slot.stamp.load(Ordering::Acquire);

            if stamp == head + 1 {
                match self.head.compare_exchange_weak(
                    head,
                    Self::next(head),
                    Ordering::SeqCst,
                    Ordering::Relaxed,
                ) {
                    Ok(_) => {
                        // SAFETY: winning the head CAS on a written stamp hands the
                        // initialized value to this thread alone.
                        let value = unsafe { (*slot.value.get()).assume_init_read() };
                        slot.stamp
                            .store(head.wrapping_add(Self::ONE_LAP), Ordering::Release);
                        return Some(value);
                    }
                    Err(current) => head = current,
                }
            } else if stamp == head {
                return None;
            } else {
                // Lapped by the producer; the head has moved on.
                spin_loop();
                head = self.head.load(Ordering::Relaxed);
            }
        }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of unread values
    pub fn len(&self) -> usize {
        loop {
            let tail = self.tail.load(Ordering::SeqCst);
            let head = self.head.load(Ordering::SeqCst);

            // Retry unless head and tail were read as a consistent pair
            if self.tail.load(Ordering::SeqCst) == tail {
                let hix = Self::index(head);
                let tix = Self::index(tail);
                return if hix < tix {
                    tix - hix
                } else if hix > tix {
                    N - hix + tix
                } else if tail == head {
                    0
                } else {
                    N
                };
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.load(Ordering::SeqCst) == self.tail.load(Ordering::SeqCst)
    }

    /// Slot index the next `remove` reads from, in `0..N`
    pub fn read_pos(&self) -> usize {
        Self::index(self.head.load(Ordering::Acquire))
    }

    /// Slot index the next `add` writes to, in `0..N`
    pub fn write_pos(&self) -> usize {
        Self::index(self.tail.load(Ordering::Acquire))
    }

    /// Values evicted by `add` before the consumer read them
    pub fn overwritten_count(&self) -> u64 {
        self.overwritten.load(Ordering::Relaxed)
    }
}

impl<T, const N: usize> Default for Ring<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for Ring<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ring")
            .field("capacity", &N)
            .field("read_pos", &self.read_pos())
            .field("write_pos", &self.write_pos())
            .field("len", &self.len())
            .field("overwritten", &self.overwritten_count())
            .finish()
    }
}

impl<T, const N: usize> Drop for Ring<T, N> {
    fn drop(&mut self) {
        let first = Self::index(*self.head.get_mut());
        let len = self.len();

        for i in 0..len {
            let index = if first + i < N { first + i } else { first + i - N };
            // SAFETY: exclusive access; every slot between head and tail is initialized.
            unsafe { self.slots[index].value.get_mut().assume_init_drop() };
        }
    }
}
