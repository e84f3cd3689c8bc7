// File: crates/chart-highlight/src/radial.rs
// Summary: Pie and radar layout: center, radius, rotation, and angle-to-index mapping.

use crate::axis::Axis;
use crate::data::{PieData, RadarData};
use crate::dataset::DataSet;
use crate::entry::ChartEntry;
use crate::geometry::{angle_for_point, normalized_angle, Point, Rect};
use crate::types::{DEFAULT_ROTATION_ANGLE, FULL_CIRCLE};

/// User-facing pie settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieLayout {
    /// Where the first slice starts, in degrees (270 = north).
    pub rotation_angle: f64,
    /// Total sweep of all slices (360 for a full pie, 180 for a half pie).
    pub max_angle: f64,
    /// Smallest sweep any slice may have; 0 disables the adjustment.
    pub min_angle_for_slices: f64,
    /// Room reserved around the pie for the selected-slice offset, in pixels.
    pub selection_shift: f64,
}

impl Default for PieLayout {
    fn default() -> Self {
        Self { rotation_angle: DEFAULT_ROTATION_ANGLE, max_angle: FULL_CIRCLE, min_angle_for_slices: 0.0, selection_shift: 0.0 }
    }
}

/// Resolved pie geometry; rebuild it whenever the data or the layout changes.
#[derive(Clone, Debug)]
pub struct PieGeometry {
    pub center: Point,
    pub radius: f64,
    pub rotation_angle: f64,
    draw_angles: Vec<f64>,
    absolute_angles: Vec<f64>,
}

impl PieGeometry {
    pub fn new(content: Rect, data: &PieData, layout: &PieLayout) -> Self {
        let radius = (content.width().min(content.height()) / 2.0 - layout.selection_shift).max(0.0);
        let (draw_angles, absolute_angles) = slice_angles(data, layout);
        Self {
            center: content.center(),
            radius,
            rotation_angle: normalized_angle(layout.rotation_angle),
            draw_angles,
            absolute_angles,
        }
    }

    /// Sweep of every slice, in data order.
    pub fn draw_angles(&self) -> &[f64] { &self.draw_angles }

    /// Angle where every slice ends, relative to the rotation angle.
    pub fn absolute_angles(&self) -> &[f64] { &self.absolute_angles }

    pub fn distance_to_center(&self, p: Point) -> f64 {
        self.center.distance(p)
    }

    pub fn angle_for_point(&self, p: Point) -> f64 {
        angle_for_point(self.center, p)
    }

    /// Slice under `angle` (degrees, screen bearing), if any.
    pub fn index_for_angle(&self, angle: f64) -> Option<usize> {
        let a = normalized_angle(angle - self.rotation_angle);
        self.absolute_angles.iter().position(|&end| end > a)
    }
}

fn slice_angles(data: &PieData, layout: &PieLayout) -> (Vec<f64>, Vec<f64>) {
    let values: Vec<f64> = data.data_sets().iter().flat_map(DataSet::entries).map(|e| e.y().abs()).collect();
    let sum: f64 = values.iter().sum();
    let count = values.len() as f64;
    let min_angle = layout.min_angle_for_slices;
    let has_min = min_angle != 0.0 && count * min_angle <= layout.max_angle;

    let draw: Vec<f64> = values
        .iter()
        .map(|v| if sum > 0.0 { v / sum * layout.max_angle } else { 0.0 })
        .collect();

    if !has_min {
        return (draw.clone(), cumulative(&draw));
    }

    // grow small slices to the minimum, taking the difference from the larger ones
    let mut offset = 0.0;
    let mut diff = 0.0;
    let mut min_angles: Vec<f64> = draw
        .iter()
        .map(|&d| {
            let temp = d - min_angle;
            if temp <= 0.0 {
                offset += -temp;
                min_angle
            } else {
                diff += temp;
                d
            }
        })
        .collect();
    if diff > 0.0 {
        for a in &mut min_angles {
            *a -= (*a - min_angle) / diff * offset;
        }
    }
    let absolute = cumulative(&min_angles);
    (min_angles, absolute)
}

fn cumulative(angles: &[f64]) -> Vec<f64> {
    angles
        .iter()
        .scan(0.0, |acc, a| {
            *acc += a;
            Some(*acc)
        })
        .collect()
}

/// Resolved radar geometry; rebuild it whenever the data, axis or layout changes.
#[derive(Clone, Copy, Debug)]
pub struct RadarGeometry {
    pub center: Point,
    pub radius: f64,
    pub rotation_angle: f64,
    /// Value at the center of the web.
    pub y_min: f64,
    /// Pixels per data unit along a spoke.
    pub factor: f64,
    pub slice_angle: f64,
    pub spoke_count: usize,
}

impl RadarGeometry {
    pub fn new(content: Rect, data: &RadarData, y_axis: &Axis, rotation_angle: f64) -> Self {
        let radius = content.width().min(content.height()) / 2.0;
        let range = y_axis.range();
        let factor = if range > 0.0 { radius / range } else { radius };
        let spoke_count = data.max_entry_count();
        Self {
            center: content.center(),
            radius,
            rotation_angle: normalized_angle(rotation_angle),
            y_min: y_axis.min,
            factor,
            slice_angle: FULL_CIRCLE / spoke_count.max(1) as f64,
            spoke_count,
        }
    }

    pub fn distance_to_center(&self, p: Point) -> f64 {
        self.center.distance(p)
    }

    pub fn angle_for_point(&self, p: Point) -> f64 {
        angle_for_point(self.center, p)
    }

    /// Spoke nearest to `angle`; angles past the last half slice wrap to spoke 0.
    pub fn index_for_angle(&self, angle: f64) -> usize {
        let a = normalized_angle(angle - self.rotation_angle);
        (0..self.spoke_count)
            .find(|&i| self.slice_angle * (i + 1) as f64 - self.slice_angle / 2.0 > a)
            .unwrap_or(0)
    }
}
