//! Adjacent-pass bubble sort, one comparison per step.

use crate::sort::buffer::SortBuffer;
use crate::stepper::Steppable;

/// Default buffer length when none is configured.
pub const DEFAULT_LEN: usize = 128;

/// Bubble sort reified as a state machine.
///
/// `i` is the comparison index within the current pass and `iterations`
/// counts completed passes. Pass `k` bubbles the largest unsettled value
/// into its final slot, so each pass stops `k` short of the end. The
/// comparison is non-strict: equal neighbors never swap, keeping the sort
/// stable.
pub struct BubbleSort {
    buf: SortBuffer,
    i: usize,
    iterations: usize,
    done: bool,
}

impl BubbleSort {
    /// Create a sorter over `len` random values (clamped to a minimum of 1).
    pub fn new(len: usize) -> Self {
        Self::with_buffer(SortBuffer::new(len))
    }

    /// Create a sorter over caller-provided values.
    pub fn with_values(values: Vec<f64>) -> Self {
        Self::with_buffer(SortBuffer::from_values(values))
    }

    fn with_buffer(buf: SortBuffer) -> Self {
        let mut sorter = BubbleSort {
            buf,
            i: 0,
            iterations: 0,
            done: false,
        };
        sorter.restart();
        sorter
    }

    pub fn buffer(&self) -> &SortBuffer {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Reallocate to `len`, re-randomize, and restart the run.
    pub fn set_len(&mut self, len: usize) {
        self.buf.resize(len);
        self.restart();
    }

    /// Rewind the counters without touching the buffer contents.
    fn restart(&mut self) {
        self.i = 0;
        self.iterations = 0;
        self.buf.clear_active();
        // A one-element buffer has nothing to compare.
        self.done = self.buf.len() <= 1;
    }
}

impl Steppable for BubbleSort {
    fn step(&mut self) {
        if self.done {
            return;
        }

        self.buf.set_active(&[self.i, self.i + 1]);
        if self.buf.data()[self.i] > self.buf.data()[self.i + 1] {
            self.buf.swap(self.i, self.i + 1);
        }

        self.i += 1;
        if self.i >= self.buf.len() - 1 - self.iterations {
            self.i = 0;
            self.iterations += 1;
            // The final pass compares a single pair; running all len-1
            // passes leaves the first two elements ordered as well.
            if self.iterations >= self.buf.len() - 1 {
                self.done = true;
                self.buf.clear_active();
            }
        }
    }

    fn reset(&mut self) {
        self.buf.randomize();
        self.restart();
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_elements_sort_in_one_step() {
        let mut sorter = BubbleSort::with_values(vec![0.8, 0.2]);
        assert!(!sorter.is_done());
        sorter.step();
        assert!(sorter.is_done());
        assert_eq!(sorter.buffer().data(), &[0.2, 0.8]);
    }

    #[test]
    fn test_equal_neighbors_never_swap() {
        let mut sorter = BubbleSort::with_values(vec![0.5, 0.5, 0.5]);
        sorter.finish();
        assert_eq!(sorter.buffer().data(), &[0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_single_element_is_done_immediately() {
        let sorter = BubbleSort::with_values(vec![0.4]);
        assert!(sorter.is_done());
    }
}
