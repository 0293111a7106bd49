//! Per-frame summary statistics over a generated sequence.

use facesynth_core::{Frame, Real, SequenceStats, Vec3};

/// Aggregate per-frame depth and scale proxies.
///
/// Depth is the Euclidean norm of the mean camera-space landmark; scale is
/// `sqrt(width * height)` of the axis-aligned bounding box of the noisy
/// pixels. Both come back with one entry per frame.
pub fn aggregate_stats(frames: &[Frame]) -> SequenceStats {
    let mut stats = SequenceStats::default();
    for frame in frames {
        stats.depth.push(mean_depth(frame));
        stats.scale.push(bbox_scale(frame));
    }
    stats
}

fn mean_depth(frame: &Frame) -> Real {
    if frame.camera_points.is_empty() {
        return 0.0;
    }
    let sum = frame
        .camera_points
        .iter()
        .fold(Vec3::zeros(), |acc, p| acc + p);
    (sum / frame.camera_points.len() as Real).norm()
}

fn bbox_scale(frame: &Frame) -> Real {
    if frame.noisy_pixels.is_empty() {
        return 0.0;
    }
    let mut min_x = Real::INFINITY;
    let mut min_y = Real::INFINITY;
    let mut max_x = Real::NEG_INFINITY;
    let mut max_y = Real::NEG_INFINITY;
    for p in &frame.noisy_pixels {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    ((max_x - min_x) * (max_y - min_y)).sqrt()
}
