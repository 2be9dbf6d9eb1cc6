//! The numeric buffer a sorter operates over.

use rand::prelude::*;

/// Smallest length a resize request clamps to. A zero-length buffer would
/// make the visualizer inoperable, so the boundary rejects it.
pub const MIN_LEN: usize = 1;

/// A fixed-length buffer of values in `(0, 1]` plus the highlight set.
///
/// The buffer is the working arena for a sorter: values are swapped in
/// place, and `active` is a small index set recomputed every step to mark
/// the elements currently being compared. It exists only for highlighting
/// and has no effect on algorithm correctness.
pub struct SortBuffer {
    data: Vec<f64>,
    active: Vec<usize>,
    rng: ThreadRng,
}

impl SortBuffer {
    /// Allocate a buffer of `len` random values (clamped to [`MIN_LEN`]).
    pub fn new(len: usize) -> Self {
        let mut buf = SortBuffer {
            data: vec![0.0; len.max(MIN_LEN)],
            active: Vec::new(),
            rng: rand::thread_rng(),
        };
        buf.randomize();
        buf
    }

    /// Take ownership of caller-provided values instead of random ones.
    pub fn from_values(values: Vec<f64>) -> Self {
        if values.is_empty() {
            return SortBuffer::new(MIN_LEN);
        }
        SortBuffer {
            data: values,
            active: Vec::new(),
            rng: rand::thread_rng(),
        }
    }

    /// Refill every slot with a fresh value in `(0, 1]`.
    pub fn randomize(&mut self) {
        for value in self.data.iter_mut() {
            // gen() yields [0, 1); flipping it keeps every bar visible.
            *value = 1.0 - self.rng.gen::<f64>();
        }
    }

    /// Reallocate to `len` (clamped to [`MIN_LEN`]) and re-randomize.
    pub fn resize(&mut self, len: usize) {
        self.data = vec![0.0; len.max(MIN_LEN)];
        self.active.clear();
        self.randomize();
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }

    /// Replace the highlight set with this step's participants.
    pub fn set_active(&mut self, indices: &[usize]) {
        self.active.clear();
        self.active.extend_from_slice(indices);
    }

    pub fn clear_active(&mut self) {
        self.active.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn active(&self) -> &[usize] {
        &self.active
    }

    /// Whether index `i` is part of the current step's highlight set.
    pub fn is_active(&self, i: usize) -> bool {
        self.active.contains(&i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_zero_length() {
        let buf = SortBuffer::new(0);
        assert_eq!(buf.len(), MIN_LEN);
    }

    #[test]
    fn test_randomize_stays_in_range() {
        let mut buf = SortBuffer::new(64);
        buf.randomize();
        for &value in buf.data() {
            assert!(value > 0.0 && value <= 1.0, "value {} out of (0, 1]", value);
        }
    }

    #[test]
    fn test_resize_clears_active() {
        let mut buf = SortBuffer::new(8);
        buf.set_active(&[2, 3]);
        buf.resize(16);
        assert_eq!(buf.len(), 16);
        assert!(buf.active().is_empty());
    }

    #[test]
    fn test_active_set_replaced_not_appended() {
        let mut buf = SortBuffer::new(8);
        buf.set_active(&[0, 1]);
        buf.set_active(&[4, 5]);
        assert_eq!(buf.active(), &[4, 5]);
        assert!(buf.is_active(4));
        assert!(!buf.is_active(0));
    }
}
