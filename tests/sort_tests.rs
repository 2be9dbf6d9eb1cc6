// Integration tests for the steppable sorters

use stepviz::sort::{BubbleSort, QuickSort};
use stepviz::stepper::Steppable;

/// Check that `result` is a non-decreasing permutation of `original`.
fn assert_sorted_permutation(original: &[f64], result: &[f64]) {
    assert_eq!(original.len(), result.len());

    for pair in result.windows(2) {
        assert!(
            pair[0] <= pair[1],
            "out of order: {} before {}",
            pair[0],
            pair[1]
        );
    }

    let mut expected = original.to_vec();
    expected.sort_by(|a, b| a.partial_cmp(b).expect("values are finite"));
    assert_eq!(expected, result, "result is not a permutation of the input");
}

// === BUBBLE SORT ===

#[test]
fn test_bubble_sorts_random_buffer() {
    let mut sorter = BubbleSort::new(64);
    let original = sorter.buffer().data().to_vec();

    sorter.finish();

    assert!(sorter.is_done());
    assert_sorted_permutation(&original, sorter.buffer().data());
}

#[test]
fn test_bubble_sorts_known_sequence() {
    let values = vec![0.9, 0.1, 0.5, 0.3, 0.8, 0.2, 0.7, 0.4];
    let mut sorter = BubbleSort::with_values(values.clone());

    sorter.finish();

    assert_sorted_permutation(&values, sorter.buffer().data());
    assert_eq!(
        sorter.buffer().data(),
        &[0.1, 0.2, 0.3, 0.4, 0.5, 0.7, 0.8, 0.9]
    );
}

#[test]
fn test_bubble_sorts_reverse_sorted_input() {
    // Reverse order forces every pass to do work, including the final
    // single-comparison pass over the first two elements.
    let values: Vec<f64> = (1..=16).rev().map(|i| i as f64 / 16.0).collect();
    let mut sorter = BubbleSort::with_values(values.clone());

    sorter.finish();

    assert_sorted_permutation(&values, sorter.buffer().data());
}

#[test]
fn test_bubble_step_swaps_at_most_one_adjacent_pair() {
    let mut sorter = BubbleSort::new(16);

    while !sorter.is_done() {
        let before = sorter.buffer().data().to_vec();
        sorter.step();
        let after = sorter.buffer().data();

        let changed: Vec<usize> = (0..before.len()).filter(|&i| before[i] != after[i]).collect();
        match changed.as_slice() {
            [] => {}
            [i, j] => {
                assert_eq!(i + 1, *j, "swap was not adjacent");
                assert_eq!(before[*i], after[*j]);
                assert_eq!(before[*j], after[*i]);
            }
            other => panic!("step changed {} positions", other.len()),
        }
    }
}

#[test]
fn test_bubble_active_tracks_current_comparison() {
    let mut sorter = BubbleSort::new(8);

    while !sorter.is_done() {
        sorter.step();
        let active = sorter.buffer().active();
        if sorter.is_done() {
            assert!(active.is_empty(), "highlight must clear on completion");
        } else {
            assert_eq!(active.len(), 2);
            assert_eq!(active[0] + 1, active[1], "highlight is one adjacent pair");
            assert!(active[1] < sorter.len());
        }
    }
}

#[test]
fn test_bubble_completion_is_idempotent() {
    let mut sorter = BubbleSort::new(8);
    sorter.finish();

    let settled = sorter.buffer().data().to_vec();
    for _ in 0..5 {
        sorter.step();
    }

    assert!(sorter.is_done());
    assert_eq!(sorter.buffer().data(), settled.as_slice());
}

#[test]
fn test_bubble_reset_restores_a_startable_run() {
    let mut sorter = BubbleSort::new(32);
    sorter.finish();
    sorter.reset();

    assert!(!sorter.is_done());
    assert!(sorter.buffer().active().is_empty());
    assert_eq!(sorter.len(), 32);
    for &value in sorter.buffer().data() {
        assert!(value > 0.0 && value <= 1.0);
    }

    sorter.finish();
    assert!(sorter.is_done());
}

#[test]
fn test_bubble_resize_clamps_and_restarts() {
    let mut sorter = BubbleSort::new(16);
    sorter.finish();

    sorter.set_len(32);
    assert_eq!(sorter.len(), 32);
    assert!(!sorter.is_done());

    // Zero-length requests clamp to one element, which is trivially done.
    sorter.set_len(0);
    assert_eq!(sorter.len(), 1);
    assert!(sorter.is_done());
    sorter.finish(); // must return immediately rather than loop
}

// === QUICK SORT ===

#[test]
fn test_quick_sorts_random_buffer() {
    let mut sorter = QuickSort::new(128);
    let original = sorter.buffer().data().to_vec();

    sorter.finish();

    assert!(sorter.is_done());
    assert_sorted_permutation(&original, sorter.buffer().data());
}

#[test]
fn test_quick_sorts_known_sequence() {
    let values = vec![0.9, 0.1, 0.5, 0.3, 0.8, 0.2, 0.7, 0.4];
    let mut sorter = QuickSort::with_values(values.clone());

    sorter.finish();

    assert_eq!(
        sorter.buffer().data(),
        &[0.1, 0.2, 0.3, 0.4, 0.5, 0.7, 0.8, 0.9]
    );
}

#[test]
fn test_quick_sorts_already_sorted_input() {
    // Last-element pivots make sorted input the worst case; the step count
    // must stay quadratic rather than running away.
    let n = 32;
    let values: Vec<f64> = (1..=n).map(|i| i as f64 / n as f64).collect();
    let mut sorter = QuickSort::with_values(values.clone());

    let mut steps = 0;
    while !sorter.is_done() {
        sorter.step();
        steps += 1;
        assert!(steps <= n * n, "quicksort exceeded {} steps", n * n);
    }

    assert_sorted_permutation(&values, sorter.buffer().data());
}

#[test]
fn test_quick_step_count_stays_bounded() {
    let n = 128;
    let mut sorter = QuickSort::new(n);

    let mut steps = 0;
    while !sorter.is_done() {
        sorter.step();
        steps += 1;
        assert!(steps <= n * n, "quicksort exceeded {} steps", n * n);
    }
}

#[test]
fn test_quick_active_stays_in_bounds() {
    let mut sorter = QuickSort::new(16);

    while !sorter.is_done() {
        sorter.step();
        for &index in sorter.buffer().active() {
            assert!(index < sorter.len(), "active index {} out of bounds", index);
        }
    }
    assert!(sorter.buffer().active().is_empty());
}

#[test]
fn test_quick_completion_is_idempotent() {
    let mut sorter = QuickSort::new(16);
    sorter.finish();

    let settled = sorter.buffer().data().to_vec();
    for _ in 0..5 {
        sorter.step();
    }

    assert!(sorter.is_done());
    assert_eq!(sorter.buffer().data(), settled.as_slice());
}

#[test]
fn test_quick_reset_restores_a_startable_run() {
    let mut sorter = QuickSort::new(64);
    sorter.finish();
    sorter.reset();

    assert!(!sorter.is_done());
    assert!(sorter.buffer().active().is_empty());
    assert_eq!(sorter.len(), 64);

    sorter.finish();
    assert!(sorter.is_done());
}

#[test]
fn test_quick_resize_clamps_and_restarts() {
    let mut sorter = QuickSort::new(64);
    sorter.set_len(0);
    assert_eq!(sorter.len(), 1);
    assert!(sorter.is_done());

    sorter.set_len(8);
    assert_eq!(sorter.len(), 8);
    assert!(!sorter.is_done());
    sorter.finish();
    assert!(sorter.is_done());
}
