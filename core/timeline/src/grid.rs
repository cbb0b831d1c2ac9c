use crate::{metric::TimelineMetric, viewport::Viewport};

/// Pixel positions of the grid lines crossing the visible window, split
/// into tiers for rendering. Each position belongs to exactly one tier: a
/// bar line is not repeated in the beat list, nor a beat line in the snaps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLines {
    pub bars: Vec<f64>,
    pub beats: Vec<f64>,
    pub snaps: Vec<f64>,
}

/// Grid lines intersecting the viewport under the given metric.
///
/// A degenerate metric or an empty viewport produces no lines.
pub fn visible_grid(viewport: &Viewport, metric: &TimelineMetric) -> GridLines {
    let mut lines = GridLines::default();
    if metric.is_degenerate() || viewport.is_empty() {
        return lines;
    }

    let pixels_per_snap = metric.pixels_per_snap();
    let snaps_per_beat = u64::from(metric.snap_divisions_per_beat());
    let snaps_per_bar = snaps_per_beat * u64::from(metric.beats_per_bar());

    // index of the first snap line at or after the window start; the grid
    // starts at pixel 0 (beat 0) and never extends left of it
    let start = (viewport.pixel_start().max(0.0) / pixels_per_snap).ceil() as u64;
    let mut index = start;
    loop {
        let pixel = index as f64 * pixels_per_snap;
        if pixel >= viewport.pixel_end() {
            break;
        }
        if index % snaps_per_bar == 0 {
            lines.bars.push(pixel);
        } else if index % snaps_per_beat == 0 {
            lines.beats.push(pixel);
        } else {
            lines.snaps.push(pixel);
        }
        index += 1;
    }

    lines
}
