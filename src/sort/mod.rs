//! Steppable comparison sorts over a shared numeric buffer.
//!
//! - [`buffer`]: the [`SortBuffer`] both sorters operate over — a flat
//!   `Vec<f64>` of values in `(0, 1]` plus the `active` highlight set
//! - [`bubble`]: adjacent-pass bubble sort, one comparison per step
//! - [`quick`]: quicksort with an explicit partition stack, one comparison
//!   per step
//!
//! Both sorters own their buffer exclusively and expose it read-only for
//! drawing. Resizing reallocates the buffer, re-randomizes its contents,
//! and restarts the run; no ordering survives a resize.
//!
//! [`SortBuffer`]: buffer::SortBuffer

pub mod buffer;
pub mod bubble;
pub mod quick;

pub use bubble::BubbleSort;
pub use buffer::SortBuffer;
pub use quick::QuickSort;
