//! Reusable serialization buffers
//!
//! Every `put` serializes its entry into a byte buffer. Buffers are borrowed
//! from a [`BufferPool`] through a [`PooledBuffer`] guard and go back to the
//! pool, cleared, when the guard drops, whichever way the caller exits.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, PoisonError};

use crate::constants::{BUFFER_POOL_MAX_CAPACITY, BUFFER_POOL_MAX_IDLE};

/// Bounded pool of byte buffers
pub struct BufferPool {
    idle: Mutex<Vec<Vec<u8>>>,
    max_idle: usize,
    max_capacity: usize,
}

impl BufferPool {
    /// Pool with the default bounds
    pub fn new() -> Arc<Self> {
        Self::with_limits(BUFFER_POOL_MAX_IDLE, BUFFER_POOL_MAX_CAPACITY)
    }

    /// Pool keeping at most `max_idle` buffers of at most `max_capacity` bytes
    pub fn with_limits(max_idle: usize, max_capacity: usize) -> Arc<Self> {
        Arc::new(Self {
            idle: Mutex::new(Vec::with_capacity(max_idle)),
            max_idle,
            max_capacity,
        })
    }

    /// Borrow an empty buffer
    pub fn acquire(self: &Arc<Self>) -> PooledBuffer {
        let buffer = self
            .idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .unwrap_or_default();
        PooledBuffer {
            buffer,
            pool: Arc::clone(self),
        }
    }

    /// Number of buffers waiting for reuse
    pub fn idle_count(&self) -> usize {
        self.idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn release(&self, mut buffer: Vec<u8>) {
        if buffer.capacity() > self.max_capacity {
            return;
        }
        buffer.clear();
        let mut idle = self.idle.lock().unwrap_or_else(PoisonError::into_inner);
        if idle.len() < self.max_idle {
            idle.push(buffer);
        }
    }
}

impl fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferPool")
            .field("idle", &self.idle_count())
            .field("max_idle", &self.max_idle)
            .field("max_capacity", &self.max_capacity)
            .finish()
    }
}

/// Exclusive buffer borrowed from a [`BufferPool`]
pub struct PooledBuffer {
    buffer: Vec<u8>,
    pool: Arc<BufferPool>,
}

impl Deref for PooledBuffer {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

impl DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buffer));
    }
}

impl fmt::Debug for PooledBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PooledBuffer")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish_non_exhaustive()
    }
}
