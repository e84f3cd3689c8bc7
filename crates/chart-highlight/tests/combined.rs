// File: crates/chart-highlight/tests/combined.rs
// Purpose: Validate highlighting across overlaid line, bar, scatter and bubble data.

use chart_highlight::{
    Axis, AxisTransformers, BarData, BarEntry, BubbleData, BubbleEntry, Chart, CombinedData, DataSet, Entry, Highlighter,
    LineData, Point, Rect, ScatterData,
};

// 128x128 content: x in 0..8 at 16 px per unit, y in 0..128 at one px per unit (upward).
fn transformers() -> AxisTransformers {
    let content = Rect::from_ltrb(0.0, 0.0, 128.0, 128.0);
    let y = Axis::new("y", 0.0, 128.0);
    AxisTransformers::vertical(&Axis::new("x", 0.0, 8.0), &y, &y, content).unwrap()
}

fn line_data() -> LineData {
    LineData::new(vec![DataSet::new("line", vec![Entry::new(1.0, 100.0), Entry::new(2.0, 100.0)]).unwrap()])
}

fn bar_data(entries: Vec<BarEntry>) -> BarData {
    BarData::new(vec![DataSet::new("bars", entries).unwrap()])
}

#[test]
fn data_index_follows_container_order() {
    let data = CombinedData {
        line: Some(line_data()),
        bar: Some(bar_data(vec![BarEntry::new(1.0, 10.0), BarEntry::new(2.0, 20.0)])),
        ..CombinedData::default()
    };
    assert_eq!(data.bar_data_index(), Some(1));
    let chart = Chart::combined(data, transformers());
    let mut hl = Highlighter::new();

    let h = hl.highlight(&chart, Point::new(32.0, 106.0)).expect("bar hit");
    assert_eq!(h.data_index, Some(1));
    assert_eq!((h.x, h.y), (2.0, 20.0));

    let h = hl.highlight(&chart, Point::new(32.0, 30.0)).expect("line hit");
    assert_eq!(h.data_index, Some(0));
    assert_eq!((h.x, h.y), (2.0, 100.0));
}

#[test]
fn stacked_bar_segment_survives_in_combined_chart() {
    let data = CombinedData {
        line: Some(line_data()),
        bar: Some(bar_data(vec![BarEntry::stacked(2.0, vec![10.0, 20.0])])),
        ..CombinedData::default()
    };
    let chart = Chart::combined(data, transformers());

    // y = 5 is inside the first segment, drawn with its top at y_px 118
    let h = Highlighter::new().highlight(&chart, Point::new(32.0, 123.0)).expect("hit");
    assert_eq!(h.data_index, Some(1));
    assert_eq!(h.stack_index, Some(0));
    assert_eq!((h.x, h.y), (2.0, 30.0));
    assert_eq!(h.y_px, 118.0);

    // y = 20 is inside the second segment, whose top is at y_px 98
    let mut hl = Highlighter::new();
    let h = hl.highlight(&chart, Point::new(32.0, 108.0)).expect("upper segment");
    assert_eq!(h.data_index, Some(1));
    assert_eq!(h.stack_index, Some(1));
    assert_eq!(h.y_px, 98.0);

    // next to the line point the line wins and carries no segment
    let h = hl.highlight(&chart, Point::new(32.0, 30.0)).expect("line hit");
    assert_eq!(h.data_index, Some(0));
    assert_eq!(h.stack_index, None);
    assert_eq!((h.x, h.y), (2.0, 100.0));
}

#[test]
fn candidates_are_tagged_per_sub_data() {
    let data = CombinedData {
        scatter: Some(ScatterData::new(vec![DataSet::new("s", vec![Entry::new(3.0, 40.0)]).unwrap()])),
        bubble: Some(BubbleData::new(vec![DataSet::new("b", vec![BubbleEntry::new(3.0, 90.0, 2.0)]).unwrap()])),
        ..CombinedData::default()
    };
    let chart = Chart::combined(data.clone(), transformers());
    let mut hl = Highlighter::new();

    let tags: Vec<_> = hl.candidates(&chart, Point::new(48.0, 64.0)).iter().map(|h| h.data_index).collect();
    assert_eq!(tags, vec![Some(0), Some(1)]);

    let h = hl.highlight(&chart, Point::new(48.0, 40.0)).expect("hit");
    assert_eq!(h.data_index, Some(1));
    assert_eq!(data.entry_for_highlight(&h).map(|e| e.y()), Some(90.0));
    assert_eq!(data.data_set_count_at(1), 1);
    assert_eq!(chart.data_set_count(), 2);
}

#[test]
fn empty_combined_data_misses() {
    let chart = Chart::combined(CombinedData::default(), transformers());
    assert_eq!(Highlighter::new().highlight(&chart, Point::new(10.0, 10.0)), None);
}
