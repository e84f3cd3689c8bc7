// File: crates/chart-highlight/tests/bar.rs
// Purpose: Validate bar highlighting: column distance, stacked segments, full-bar mode and right-axis stacks.

use chart_highlight::{
    Axis, AxisDependency, AxisTransformers, BarData, BarEntry, Chart, DataSet, HighlightOptions, Highlighter, Point, Rect,
};

// 128x128 content, x in 0..8 (16 px per unit); left axis -64..64 so y_px = 64 - y,
// right axis 0..128 so y_px = 128 - y.
fn transformers() -> AxisTransformers {
    let content = Rect::from_ltrb(0.0, 0.0, 128.0, 128.0);
    AxisTransformers::vertical(&Axis::new("x", 0.0, 8.0), &Axis::new("left", -64.0, 64.0), &Axis::new("right", 0.0, 128.0), content)
        .unwrap()
}

fn bar_chart(entries: Vec<BarEntry>) -> Chart {
    Chart::bar(BarData::new(vec![DataSet::new("bars", entries).unwrap()]), transformers())
}

#[test]
fn plain_bar_uses_horizontal_distance() {
    let chart = bar_chart(vec![BarEntry::new(1.0, 40.0), BarEntry::new(2.0, 50.0)]);
    let opts = HighlightOptions { max_highlight_distance_dp: 10.0, ..HighlightOptions::default() };
    let chart = chart.with_options(opts);

    // far below the bar top (14 px) but in its column
    let h = Highlighter::new().highlight(&chart, Point::new(30.0, 120.0)).expect("hit");
    assert_eq!((h.x, h.y), (2.0, 50.0));
    assert_eq!((h.x_px, h.y_px), (32.0, 14.0));
    assert_eq!(h.stack_index, None);
}

#[test]
fn stacked_bar_resolves_the_touched_segment() {
    let chart = bar_chart(vec![
        BarEntry::stacked(1.0, vec![10.0, 10.0, 10.0]),
        BarEntry::stacked(2.0, vec![-10.0, 5.0, 20.0]),
    ]);
    let mut hl = Highlighter::new();

    // y = 3 falls in (0, 5]
    let h = hl.highlight(&chart, Point::new(32.0, 61.0)).expect("hit");
    assert_eq!((h.x, h.y), (2.0, 15.0));
    assert_eq!(h.stack_index, Some(1));
    assert_eq!((h.x_px, h.y_px), (32.0, 59.0));

    // y = 20 falls in (5, 25]
    let h = hl.highlight(&chart, Point::new(32.0, 44.0)).expect("hit");
    assert_eq!(h.stack_index, Some(2));
    assert_eq!(h.y_px, 39.0);

    // y = -5 falls in (-10, 0]
    let h = hl.highlight(&chart, Point::new(32.0, 69.0)).expect("hit");
    assert_eq!(h.stack_index, Some(0));
    assert_eq!(h.y_px, 64.0);

    // above the stack: last segment; below it: first
    assert_eq!(hl.highlight(&chart, Point::new(32.0, 34.0)).and_then(|h| h.stack_index), Some(2));
    assert_eq!(hl.highlight(&chart, Point::new(32.0, 84.0)).and_then(|h| h.stack_index), Some(0));
}

#[test]
fn segments_compare_unequal() {
    let chart = bar_chart(vec![BarEntry::stacked(2.0, vec![5.0, 20.0])]);
    let mut hl = Highlighter::new();
    let low = hl.highlight(&chart, Point::new(32.0, 61.0)).expect("hit");
    let high = hl.highlight(&chart, Point::new(32.0, 44.0)).expect("hit");
    assert_eq!((low.x, low.y), (high.x, high.y));
    assert_ne!(low, high);
}

#[test]
fn unstacked_entry_in_stacked_set_keeps_base_result() {
    let chart = bar_chart(vec![BarEntry::stacked(1.0, vec![10.0, 10.0]), BarEntry::new(3.0, 30.0)]);
    let h = Highlighter::new().highlight(&chart, Point::new(48.0, 60.0)).expect("hit");
    assert_eq!((h.x, h.y), (3.0, 30.0));
    assert_eq!(h.stack_index, None);
    assert_eq!(h.y_px, 34.0);
}

#[test]
fn malformed_stack_falls_back_to_first_segment() {
    let chart = bar_chart(vec![BarEntry::stacked(1.0, vec![1.0, 2.0]), BarEntry::stacked(2.0, Vec::new())]);
    let h = Highlighter::new().highlight(&chart, Point::new(32.0, 60.0)).expect("hit");
    assert_eq!((h.x, h.y), (2.0, 0.0));
    assert_eq!(h.stack_index, Some(0));
    assert_eq!((h.x_px, h.y_px), (32.0, 64.0));
}

#[test]
fn full_bar_mode_clears_the_stack_index() {
    let opts = HighlightOptions { highlight_full_bar: true, ..HighlightOptions::default() };
    let chart = bar_chart(vec![BarEntry::stacked(2.0, vec![-10.0, 5.0, 20.0])]).with_options(opts);
    let h = Highlighter::new().highlight(&chart, Point::new(32.0, 61.0)).expect("hit");
    assert_eq!((h.x, h.y), (2.0, 15.0));
    assert_eq!(h.stack_index, None);
}

#[test]
fn right_axis_stack_uses_its_own_scale() {
    let set = DataSet::new("right", vec![BarEntry::stacked(2.0, vec![10.0, 20.0, 30.0])]).unwrap().with_axis(AxisDependency::Right);
    let chart = Chart::bar(BarData::new(vec![set]), transformers());

    // y_px 108 is 20 on the right axis, inside (10, 30]
    let h = Highlighter::new().highlight(&chart, Point::new(32.0, 108.0)).expect("hit");
    assert_eq!(h.axis, AxisDependency::Right);
    assert_eq!(h.stack_index, Some(1));
    assert_eq!(h.y_px, 98.0);
}

#[test]
fn empty_bar_data_misses() {
    let chart = Chart::bar(BarData::default(), transformers());
    assert_eq!(Highlighter::new().highlight(&chart, Point::new(32.0, 32.0)), None);
}
