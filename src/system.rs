//! Requests from the firmware core to the platform.
//!
//! The core cannot restart the chip itself. It posts requests here and the
//! platform loop drains the ones that are due. The queue is guarded by a
//! critical section so it may also be fed from an interrupt handler.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Instant;
use heapless::Deque;

/// Pending requests the queue can hold.
pub const SYSTEM_QUEUE_SIZE: usize = 4;

/// Something only the platform can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemRequest {
    /// Restart the device once `at` has passed.
    Restart { at: Instant },
    /// Stored configuration was wiped; drop platform-held settings and restart now.
    FactoryReset,
}

impl SystemRequest {
    const fn is_due(&self, now: Instant) -> bool {
        match self {
            Self::Restart { at } => at.as_millis() <= now.as_millis(),
            Self::FactoryReset => true,
        }
    }
}

/// Bounded queue of [`SystemRequest`]s.
pub struct SystemQueue {
    inner: Mutex<RefCell<Deque<SystemRequest, SYSTEM_QUEUE_SIZE>>>,
}

impl SystemQueue {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Queue a request.
    ///
    /// A request equal to one already pending is dropped. Returns
    /// `Err(request)` if the queue is full.
    pub fn post(&self, request: SystemRequest) -> Result<(), SystemRequest> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            if queue.iter().any(|pending| *pending == request) {
                return Ok(());
            }
            queue.push_back(request)
        })
    }

    /// Take the oldest request that is due at `now`.
    pub fn take_due(&self, now: Instant) -> Option<SystemRequest> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            let index = queue.iter().position(|request| request.is_due(now))?;
            // Rotate the due entry to the front, keeping the others in order.
            for _ in 0..index {
                let skipped = queue.pop_front()?;
                let _ = queue.push_back(skipped);
            }
            let due = queue.pop_front();
            for _ in index..queue.len() {
                let later = queue.pop_front()?;
                let _ = queue.push_back(later);
            }
            due
        })
    }

    /// Number of pending requests.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SystemQueue {
    fn default() -> Self {
        Self::new()
    }
}
