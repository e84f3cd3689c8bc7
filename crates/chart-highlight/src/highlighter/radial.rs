// File: crates/chart-highlight/src/highlighter/radial.rs
// Summary: Angle-based hit-testing for pie slices and radar spokes.

use tracing::trace;

use crate::data::{PieData, RadarData};
use crate::entry::ChartEntry;
use crate::geometry::{polar_position, Point};
use crate::highlight::Highlight;
use crate::options::Animator;
use crate::radial::{PieGeometry, RadarGeometry};

/// Index under the touch, or `None` when the touch lies outside the radius,
/// the y phase is zero, or the index has no entry in the largest data set.
fn touched_index(
    distance: f64,
    radius: f64,
    angle: f64,
    phase_y: f64,
    entry_count: usize,
    index_for_angle: impl FnOnce(f64) -> Option<usize>,
) -> Option<usize> {
    if distance > radius {
        trace!(distance, radius, "touch outside radius");
        return None;
    }
    if phase_y <= 0.0 {
        return None;
    }
    let index = index_for_angle(angle / phase_y)?;
    (index < entry_count).then_some(index)
}

pub(crate) fn pie(data: &PieData, geometry: &PieGeometry, animator: &Animator, touch: Point) -> Option<Highlight> {
    let index = touched_index(
        geometry.distance_to_center(touch),
        geometry.radius,
        geometry.angle_for_point(touch),
        animator.phase_y(),
        data.max_entry_count(),
        |a| geometry.index_for_angle(a),
    )?;
    let set = data.data_set(0)?;
    if !set.is_highlight_enabled() {
        return None;
    }
    let entry = set.entry_for_index(index)?;
    Some(Highlight::new(index as f64, entry.y(), touch.x, touch.y, 0, set.axis_dependency()))
}

/// One candidate per highlight-enabled data set that has an entry at `index`,
/// positioned where the radar draws that value.
pub(crate) fn highlights_at_index(data: &RadarData, geometry: &RadarGeometry, animator: &Animator, index: usize, out: &mut Vec<Highlight>) {
    let angle = geometry.slice_angle * index as f64 * animator.phase_x() + geometry.rotation_angle;
    for (i, set) in data.data_sets().iter().enumerate() {
        if !set.is_highlight_enabled() {
            continue;
        }
        let Some(entry) = set.entry_for_index(index) else { continue };
        let dist = (entry.y() - geometry.y_min) * geometry.factor * animator.phase_y();
        let p = polar_position(geometry.center, dist, angle);
        out.push(Highlight::new(index as f64, entry.y(), p.x, p.y, i, set.axis_dependency()));
    }
}

/// Spoke under the touch.
pub(crate) fn radar_index(data: &RadarData, geometry: &RadarGeometry, animator: &Animator, touch: Point) -> Option<usize> {
    touched_index(
        geometry.distance_to_center(touch),
        geometry.radius,
        geometry.angle_for_point(touch),
        animator.phase_y(),
        data.max_entry_count(),
        |a| Some(geometry.index_for_angle(a)),
    )
}

pub(crate) fn radar(data: &RadarData, geometry: &RadarGeometry, animator: &Animator, touch: Point, buffer: &mut Vec<Highlight>) -> Option<Highlight> {
    let index = radar_index(data, geometry, animator, touch)?;
    if geometry.factor <= 0.0 {
        return None;
    }
    buffer.clear();
    highlights_at_index(data, geometry, animator, index, buffer);

    // touch distance in data units, compared against each value's offset from the center value
    let touched = geometry.distance_to_center(touch) / geometry.factor;
    let mut closest = None;
    let mut distance = f64::MAX;
    for h in buffer.iter() {
        let d = ((h.y - geometry.y_min) - touched).abs();
        if d < distance {
            closest = Some(*h);
            distance = d;
        }
    }
    closest
}
