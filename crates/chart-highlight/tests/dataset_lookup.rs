// File: crates/chart-highlight/tests/dataset_lookup.rs
// Purpose: Validate x lookup, rounding, y hints, stacked ranges and stack segment selection.

use chart_highlight::{closest_stack_index, BarEntry, CandleEntry, ChartEntry, ChartError, DataSet, Entry, Range, Rounding};

fn xs(set: &DataSet<Entry>) -> Vec<f64> {
    set.entries().iter().map(|e| e.x).collect()
}

#[test]
fn entries_are_sorted_and_push_keeps_order() {
    let mut set = DataSet::new("s", vec![Entry::new(3.0, 1.0), Entry::new(1.0, 2.0), Entry::new(2.0, 3.0)]).unwrap();
    assert_eq!(xs(&set), vec![1.0, 2.0, 3.0]);
    assert_eq!(set.label(), "s");

    set.push(Entry::new(2.0, 9.0)).unwrap();
    assert_eq!(xs(&set), vec![1.0, 2.0, 2.0, 3.0]);
    // inserted after the existing entry at the same x
    assert_eq!(set.entries()[2].y, 9.0);
}

#[test]
fn non_finite_x_is_rejected() {
    let err = DataSet::new("s", vec![Entry::new(0.0, 1.0), Entry::new(f64::NAN, 1.0)]).unwrap_err();
    assert!(matches!(err, ChartError::NonFiniteX { index: 1, .. }));

    let mut set = DataSet::new("s", vec![Entry::new(0.0, 1.0)]).unwrap();
    assert!(set.push(Entry::new(f64::INFINITY, 0.0)).is_err());
    assert_eq!(set.entry_count(), 1);
}

#[test]
fn entries_for_x_value_is_exact() {
    let set = DataSet::new("s", vec![Entry::new(1.0, 1.0), Entry::new(2.0, 2.0), Entry::new(2.0, 3.0), Entry::new(4.0, 4.0)]).unwrap();
    assert_eq!(set.entries_for_x_value(2.0).len(), 2);
    assert!(set.entries_for_x_value(3.0).is_empty());
    assert!(set.entries_for_x_value(5.0).is_empty());
}

#[test]
fn closest_rounding_prefers_lower_index_on_ties() {
    let set = DataSet::new("s", vec![Entry::new(0.0, 0.0), Entry::new(2.0, 0.0)]).unwrap();
    assert_eq!(set.entry_index(1.0, None, Rounding::Closest), Some(0));
    assert_eq!(set.entry_index(1.2, None, Rounding::Closest), Some(1));
    assert_eq!(set.entry_index(-5.0, None, Rounding::Closest), Some(0));
    assert_eq!(set.entry_index(50.0, None, Rounding::Closest), Some(1));
}

#[test]
fn up_and_down_rounding() {
    let set = DataSet::new("s", vec![Entry::new(1.0, 0.0), Entry::new(2.0, 0.0), Entry::new(4.0, 0.0)]).unwrap();
    assert_eq!(set.entry_index(1.5, None, Rounding::Up), Some(1));
    assert_eq!(set.entry_index(1.6, None, Rounding::Down), Some(0));
    assert_eq!(set.entry_index(2.0, None, Rounding::Up), Some(1));
    assert_eq!(set.entry_index(2.0, None, Rounding::Down), Some(1));
    // nothing past the ends
    assert_eq!(set.entry_index(9.0, None, Rounding::Up), Some(2));
    assert_eq!(set.entry_index(0.0, None, Rounding::Down), Some(0));
}

#[test]
fn y_hint_picks_among_equal_x() {
    let set = DataSet::new(
        "s",
        vec![Entry::new(1.0, 0.0), Entry::new(2.0, 10.0), Entry::new(2.0, 20.0), Entry::new(2.0, 30.0), Entry::new(3.0, 0.0)],
    )
    .unwrap();
    assert_eq!(set.entry_for_x_value(2.0, Some(21.0), Rounding::Closest).map(|e| e.y), Some(20.0));
    assert_eq!(set.entry_for_x_value(2.1, Some(100.0), Rounding::Closest).map(|e| e.y), Some(30.0));
    // equidistant hint keeps the first entry
    assert_eq!(set.entry_for_x_value(2.0, Some(15.0), Rounding::Closest).map(|e| e.y), Some(10.0));
    // NaN hint is ignored
    assert_eq!(set.entry_for_x_value(2.0, Some(f64::NAN), Rounding::Closest).map(|e| e.y), Some(10.0));
}

#[test]
fn empty_set_has_no_entry() {
    let set: DataSet<Entry> = DataSet::new("empty", Vec::new()).unwrap();
    assert_eq!(set.entry_index(1.0, None, Rounding::Closest), None);
    assert!(set.entries_for_x_value(1.0).is_empty());
    assert_eq!(set.y_min(), None);
}

#[test]
fn stacked_entry_ranges_and_sums() {
    let e = BarEntry::stacked(1.0, vec![-10.0, 5.0, 20.0]);
    assert_eq!(e.y(), 15.0);
    assert_eq!(e.negative_sum(), 10.0);
    assert_eq!(e.positive_sum(), 25.0);
    assert_eq!(e.ranges(), &[Range::new(-10.0, 0.0), Range::new(0.0, 5.0), Range::new(5.0, 25.0)]);
    assert_eq!(e.sum_below(0), 25.0);

    let plain = BarEntry::new(1.0, 4.0);
    assert!(plain.y_vals().is_none());
    assert!(plain.ranges().is_empty());
}

#[test]
fn stack_size_follows_the_widest_entry() {
    let plain = DataSet::new("p", vec![BarEntry::new(0.0, 1.0), BarEntry::new(1.0, 2.0)]).unwrap();
    assert_eq!(plain.stack_size(), 1);
    assert!(!plain.is_stacked());

    let stacked = DataSet::new("s", vec![BarEntry::new(0.0, 1.0), BarEntry::stacked(1.0, vec![1.0, 2.0, 3.0])]).unwrap();
    assert_eq!(stacked.stack_size(), 3);
    assert!(stacked.is_stacked());
}

#[test]
fn range_bounds_are_half_open() {
    let r = Range::new(0.0, 5.0);
    assert!(!r.contains(0.0));
    assert!(r.contains(5.0));
    assert!(r.is_larger(5.5));
    assert!(r.is_smaller(-0.1));
}

#[test]
fn stack_index_for_values() {
    let ranges = [Range::new(-10.0, 0.0), Range::new(0.0, 5.0), Range::new(5.0, 25.0)];
    assert_eq!(closest_stack_index(&ranges, 3.0), 1);
    assert_eq!(closest_stack_index(&ranges, 5.0), 1);
    assert_eq!(closest_stack_index(&ranges, 0.0), 0);
    assert_eq!(closest_stack_index(&ranges, 30.0), 2);
    assert_eq!(closest_stack_index(&ranges, -20.0), 0);
    assert_eq!(closest_stack_index(&[], 3.0), 0);
}

#[test]
fn candle_validation() {
    let c = CandleEntry::try_new(1.0, 40.0, 20.0, 25.0, 35.0).unwrap();
    assert_eq!(c.y(), 30.0);
    assert_eq!(c.body_range(), 10.0);
    assert!(matches!(CandleEntry::try_new(1.0, 40.0, 30.0, 25.0, 35.0), Err(ChartError::InvalidCandle { .. })));
    assert!(matches!(CandleEntry::try_new(1.0, 30.0, 20.0, 25.0, 35.0), Err(ChartError::InvalidCandle { .. })));
}
