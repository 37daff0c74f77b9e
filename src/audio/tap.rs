//! Bounded sample buffer shared between the output callback and analysis.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Cloneable handle to the most recent output samples (mono)
///
/// Clones share storage; two handles are the same source iff they were
/// cloned from one another.
#[derive(Clone, Debug)]
pub struct SampleTap {
    inner: Arc<Mutex<VecDeque<f32>>>,
    capacity: usize,
}

impl SampleTap {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Append samples, dropping the oldest past capacity
    pub fn push_slice(&self, samples: &[f32]) {
        if let Ok(mut buf) = self.inner.lock() {
            for &s in samples {
                if buf.len() == self.capacity {
                    buf.pop_front();
                }
                buf.push_back(s);
            }
        }
    }

    /// Append the first channel of each interleaved frame
    pub fn push_frames(&self, interleaved: &[f32], channels: usize) {
        let channels = channels.max(1);
        if let Ok(mut buf) = self.inner.lock() {
            for frame in interleaved.chunks(channels) {
                if buf.len() == self.capacity {
                    buf.pop_front();
                }
                buf.push_back(frame[0]);
            }
        }
    }

    /// Copy the newest `out.len()` samples into `out`, oldest first.
    ///
    /// When fewer samples exist the front of `out` is zero-filled. Returns
    /// the number of real samples copied.
    pub fn latest(&self, out: &mut [f32]) -> usize {
        out.fill(0.0);
        let Ok(buf) = self.inner.lock() else {
            return 0;
        };
        let n = buf.len().min(out.len());
        let pad = out.len() - n;
        for (slot, &s) in out[pad..].iter_mut().zip(buf.iter().skip(buf.len() - n)) {
            *slot = s;
        }
        n
    }

    pub fn clear(&self) {
        if let Ok(mut buf) = self.inner.lock() {
            buf.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|b| b.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True when both handles share storage
    pub fn same_source(&self, other: &SampleTap) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
