//! Bounded list of recently submitted colors.

use crate::algorithms::random_color_with;
use crate::color::Color;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use tracing::trace;

/// Fixed-capacity FIFO of hex-encoded colors, oldest first.
///
/// One registry is created per running service and shared by reference.
/// Pushing onto a full registry evicts exactly one entry (the oldest) in
/// the same critical section as the append.
#[derive(Debug, Default)]
pub struct ColorRegistry {
    colors: Mutex<VecDeque<String>>,
}

impl ColorRegistry {
    /// Maximum number of colors retained.
    pub const CAPACITY: usize = 5;

    pub fn new() -> Self {
        Self {
            colors: Mutex::new(VecDeque::with_capacity(Self::CAPACITY)),
        }
    }

    /// Generates a color with uniformly random components.
    pub fn random_color(&self) -> Color {
        random_color_with(&mut rand::thread_rng())
    }

    /// Snapshot of the stored colors, oldest first.
    pub fn list(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    /// Appends a hex-encoded color, evicting the oldest entry when full.
    pub fn push(&self, color_hex: impl Into<String>) {
        let mut colors = self.lock();
        if colors.len() >= Self::CAPACITY {
            if let Some(evicted) = colors.pop_front() {
                trace!(%evicted, "evicted oldest color");
            }
        }
        colors.push_back(color_hex.into());
    }

    /// Appends the `#rrggbb` encoding of `color`.
    pub fn push_color(&self, color: Color) {
        self.push(color.to_hex());
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // The list holds plain strings and is never left half-updated, so a
    // poisoned lock is safe to keep using.
    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.colors
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
