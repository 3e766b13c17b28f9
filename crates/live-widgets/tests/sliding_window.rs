// File: crates/live-widgets/tests/sliding_window.rs
// Purpose: Window capacity, eviction and max bookkeeping of the buffer manager.

use live_widgets::types::MAX_CAPACITY;
use live_widgets::{capacity_for, Redraw, SampleWindow, SeriesBuffers, SeriesId, WidgetError};

fn id(s: &str) -> SeriesId { SeriesId::from(s) }

#[test]
fn capacity_follows_period_and_sampling_time() {
    assert_eq!(capacity_for(6.0, 10), 600);
    assert_eq!(capacity_for(1.0, 3), 333);
    assert_eq!(capacity_for(0.3, 10), 30);
    assert_eq!(capacity_for(6.0, 0), 0);

    let mut b = SeriesBuffers::new(6.0, 10).unwrap();
    assert_eq!(b.amount_of_values(), 600);
    b.change_period(2.0).unwrap();
    assert_eq!(b.amount_of_values(), 200);
    b.set_sampling_time(4).unwrap();
    assert_eq!(b.amount_of_values(), 500);
}

#[test]
fn rejects_zero_sampling_time_and_bad_period() {
    assert!(SeriesBuffers::new(6.0, 0).is_err());
    assert!(SeriesBuffers::new(0.0, 10).is_err());
    assert!(SeriesBuffers::new(f64::NAN, 10).is_err());

    let mut b = SeriesBuffers::new(6.0, 10).unwrap();
    assert!(b.change_period(-1.0).is_err());
    assert!(b.set_sampling_time(0).is_err());
    assert_eq!(b.amount_of_values(), 600);
}

#[test]
fn rejects_windows_beyond_max_capacity() {
    assert!(matches!(SeriesBuffers::new(1e300, 1), Err(WidgetError::InvalidPeriod(_))));
    assert!(matches!(SeriesBuffers::new(1e7, 1), Err(WidgetError::InvalidPeriod(_))));

    // exactly at the limit is fine
    let mut b = SeriesBuffers::new(10_000.0, 10).unwrap();
    assert_eq!(b.amount_of_values(), MAX_CAPACITY);
    // a finer sampling time would overflow it
    assert!(matches!(b.set_sampling_time(1), Err(WidgetError::InvalidPeriod(_))));
    assert_eq!(b.sampling_time(), 10);
    assert_eq!(b.amount_of_values(), MAX_CAPACITY);

    let mut b = SeriesBuffers::new(6.0, 10).unwrap();
    b.add_series(id("a"));
    assert!(matches!(b.change_period(1e9), Err(WidgetError::InvalidPeriod(_))));
    assert_eq!(b.period(), 6.0);
    assert_eq!(b.amount_of_values(), 600);
    assert_eq!(b.get(&id("a")).unwrap().len(), 600);
}

#[test]
fn added_series_starts_zero_filled() {
    let mut b = SeriesBuffers::new(1.0, 100).unwrap();
    assert_eq!(b.add_series(id("a")), Redraw::All);
    let w = b.get(&id("a")).unwrap();
    assert_eq!(w.len(), 10);
    assert!(w.iter().all(|v| v == 0.0));
    assert_eq!(b.max(), 0.0);
    // re-adding keeps the existing window
    b.push(&id("a"), 3.0);
    assert_eq!(b.add_series(id("a")), Redraw::None);
    assert_eq!(b.get(&id("a")).unwrap().latest(), Some(3.0));
}

#[test]
fn pushing_601_values_keeps_last_600() {
    let mut b = SeriesBuffers::new(6.0, 10).unwrap();
    b.add_series(id("cpu"));
    for i in 1..=601 {
        b.push(&id("cpu"), i as f64);
    }
    let w = b.get(&id("cpu")).unwrap();
    assert_eq!(w.len(), 600);
    let expected: Vec<f64> = (2..=601).map(|i| i as f64).collect();
    assert_eq!(w.to_vec(), expected);
    assert_eq!(b.max(), 601.0);
}

#[test]
fn length_never_exceeds_capacity() {
    let mut b = SeriesBuffers::new(0.5, 10).unwrap();
    b.add_series(id("a"));
    b.add_series(id("b"));
    let cap = b.amount_of_values();
    // pseudo-random but deterministic sequence
    let mut x: u64 = 0x2545_f491_4f6c_dd1d;
    for step in 0..5_000 {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        let v = (x % 1000) as f64 / 10.0;
        let target = if step % 3 == 0 { id("b") } else { id("a") };
        b.push(&target, v);
        if step == 2_000 {
            b.change_period(0.2).unwrap();
        }
        for (_, w) in b.iter() {
            assert!(w.len() <= w.capacity());
            assert_eq!(w.capacity(), b.amount_of_values());
        }
        assert!(b.max() >= b.max_value_from_data());
    }
    assert!(b.amount_of_values() < cap);
}

#[test]
fn evicting_the_maximum_recomputes_it() {
    let mut b = SeriesBuffers::new(0.03, 10).unwrap(); // capacity 3
    b.add_series(id("a"));
    assert_eq!(b.push(&id("a"), 9.0), Redraw::All);
    assert_eq!(b.push(&id("a"), 4.0), Redraw::Series);
    assert_eq!(b.push(&id("a"), 2.0), Redraw::Series);
    assert_eq!(b.max(), 9.0);
    // 9.0 falls out of the window
    assert_eq!(b.push(&id("a"), 1.0), Redraw::All);
    assert_eq!(b.max(), 4.0);
    assert_eq!(b.max(), b.max_value_from_data());
}

#[test]
fn eviction_keeps_max_held_by_another_series() {
    let mut b = SeriesBuffers::new(0.02, 10).unwrap(); // capacity 2
    b.add_series(id("a"));
    b.add_series(id("b"));
    b.push(&id("a"), 7.0);
    b.push(&id("b"), 7.0);
    b.push(&id("a"), 1.0);
    b.push(&id("a"), 1.0);
    assert_eq!(b.max(), 7.0);
    assert_eq!(b.max(), b.max_value_from_data());
}

#[test]
fn removing_series_drops_its_contribution() {
    let mut b = SeriesBuffers::new(6.0, 10).unwrap();
    b.add_series(id("hi"));
    b.add_series(id("lo"));
    b.push(&id("hi"), 5.0);
    b.push(&id("lo"), 3.0);
    assert_eq!(b.max(), 5.0);

    assert_eq!(b.remove_series(&id("hi")), Redraw::All);
    assert_eq!(b.max(), 3.0);
    assert!(!b.contains(&id("hi")));

    b.remove_series(&id("lo"));
    assert!(b.is_empty());
    assert_eq!(b.max_value_from_data(), 0.0);
    assert_eq!(b.max(), 0.0);
}

#[test]
fn unknown_series_is_a_no_op() {
    let mut b = SeriesBuffers::new(6.0, 10).unwrap();
    b.add_series(id("a"));
    assert_eq!(b.push(&id("ghost"), 100.0), Redraw::None);
    assert_eq!(b.remove_series(&id("ghost")), Redraw::None);
    assert_eq!(b.max(), 0.0);
    assert_eq!(b.len(), 1);
}

#[test]
fn non_finite_values_default_to_zero() {
    let mut b = SeriesBuffers::new(0.05, 10).unwrap();
    b.add_series(id("a"));
    b.push(&id("a"), f64::NAN);
    b.push(&id("a"), f64::INFINITY);
    assert_eq!(b.get(&id("a")).unwrap().to_vec(), vec![0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(b.max(), 0.0);
}

#[test]
fn shrinking_period_keeps_newest_and_rescales() {
    let mut b = SeriesBuffers::new(0.1, 10).unwrap(); // capacity 10
    b.add_series(id("a"));
    for v in [50.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0] {
        b.push(&id("a"), v);
    }
    assert_eq!(b.max(), 50.0);

    assert_eq!(b.change_period(0.04).unwrap(), Redraw::All); // capacity 4
    let w = b.get(&id("a")).unwrap();
    assert_eq!(w.to_vec(), vec![6.0, 7.0, 8.0, 9.0]);
    assert_eq!(b.max(), 9.0);
    assert_eq!(b.max(), b.max_value_from_data());
}

#[test]
fn growing_period_does_not_pad_windows() {
    let mut b = SeriesBuffers::new(0.04, 10).unwrap(); // capacity 4
    b.add_series(id("a"));
    b.change_period(0.1).unwrap(); // capacity 10
    let w = b.get(&id("a")).unwrap();
    assert_eq!(w.len(), 4);
    assert_eq!(w.capacity(), 10);

    for v in 1..=6 {
        b.push(&id("a"), v as f64);
    }
    assert_eq!(b.get(&id("a")).unwrap().len(), 10);
    b.push(&id("a"), 7.0);
    assert_eq!(b.get(&id("a")).unwrap().len(), 10);

    // a series added after the change gets the new capacity
    b.add_series(id("b"));
    assert_eq!(b.get(&id("b")).unwrap().len(), 10);
}

#[test]
fn negative_only_data_lets_max_fall_below_zero() {
    let mut b = SeriesBuffers::new(0.02, 10).unwrap(); // capacity 2
    b.add_series(id("a"));
    b.push(&id("a"), -5.0);
    b.push(&id("a"), -3.0);
    assert_eq!(b.max(), -3.0);
    // a fresh zero-filled series lifts it back
    b.add_series(id("b"));
    assert_eq!(b.max(), 0.0);
}

#[test]
fn sample_window_basics() {
    let mut w = SampleWindow::with_capacity(2);
    assert!(w.is_empty());
    assert_eq!(w.push(1.0), None);
    assert_eq!(w.push(2.0), None);
    assert_eq!(w.push(3.0), Some(1.0));
    assert_eq!(w.max(), Some(3.0));
    assert_eq!(w.set_capacity(1), 1);
    assert_eq!(w.to_vec(), vec![3.0]);

    let mut zero = SampleWindow::with_capacity(0);
    assert_eq!(zero.push(4.0), Some(4.0));
    assert!(zero.is_empty());
}
