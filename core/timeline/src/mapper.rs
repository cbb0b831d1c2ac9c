use crate::{metric::TimelineMetric, range::ProjectRange, snap::Snapper};

/// Converts between the three representations of a point on the roll:
/// pixel offset, fractional beat, and normalized transport position.
///
/// All mappings are total functions of the current metric and project range.
/// Out-of-range input degrades to the nearest boundary value; a degenerate
/// metric or an empty range yields 0. No mapping ever returns NaN or a
/// negative beat.
#[derive(Debug, Clone, Copy)]
pub struct PositionMapper {
    metric: TimelineMetric,
    range: ProjectRange,
}

impl PositionMapper {
    pub fn new(metric: TimelineMetric, range: ProjectRange) -> Self {
        Self { metric, range }
    }

    pub fn metric(&self) -> &TimelineMetric {
        &self.metric
    }

    pub fn range(&self) -> ProjectRange {
        self.range
    }

    pub fn set_metric(&mut self, metric: TimelineMetric) {
        self.metric = metric;
    }

    pub fn set_range(&mut self, range: ProjectRange) {
        self.range = range;
    }

    /// Beat at a pixel offset, optionally rounded to the nearest snap line.
    pub fn pixel_to_beat(&self, pixel: f64, align_to_grid: bool) -> f64 {
        if self.metric.is_degenerate() || pixel.is_nan() {
            return 0.0;
        }
        let beat = pixel.max(0.0) / self.metric.pixels_per_beat();
        if align_to_grid {
            Snapper::snap_beat(beat, self.metric.snap_divisions_per_beat())
        } else {
            beat
        }
    }

    /// Pixel offset of a beat; the inverse linear transform.
    pub fn beat_to_pixel(&self, beat: f64) -> f64 {
        if self.metric.is_degenerate() || beat.is_nan() {
            return 0.0;
        }
        beat.max(0.0) * self.metric.pixels_per_beat()
    }

    /// Normalized playback position of a pixel within a surface of
    /// `total_width` pixels, clamped into [0, 1].
    pub fn pixel_to_transport_fraction(&self, pixel: f64, total_width: f64) -> f64 {
        if !(total_width > 0.0) || pixel.is_nan() {
            return 0.0;
        }
        (pixel / total_width).clamp(0.0, 1.0)
    }

    /// Normalized playback position of a beat within the project range,
    /// clamped to the range boundaries.
    pub fn beat_to_transport_fraction(&self, beat: f64) -> f64 {
        if self.range.is_empty() {
            return 0.0;
        }
        let clamped = self.range.clamp_beat(beat);
        (clamped - self.range.first_beat) / self.range.length_in_beats()
    }

    /// Beat at a normalized playback position, clamped into the range.
    pub fn transport_fraction_to_beat(&self, fraction: f64) -> f64 {
        if self.range.is_empty() || fraction.is_nan() {
            return self.range.first_beat;
        }
        self.range.first_beat + fraction.clamp(0.0, 1.0) * self.range.length_in_beats()
    }

    /// Transport fraction of a pixel offset, optionally beat-aligned first.
    pub fn transport_fraction_at_pixel(&self, pixel: f64, align_to_grid: bool) -> f64 {
        self.beat_to_transport_fraction(self.pixel_to_beat(pixel, align_to_grid))
    }
}

#[cfg(test)]
mod mapper_tests {
    use super::*;
    use crate::metric::TimeSignature;

    const BEAT_EPSILON: f64 = 1e-9;

    fn mapper_at_zoom(pixels_per_beat: f64) -> PositionMapper {
        PositionMapper::new(
            TimelineMetric::with_zoom(pixels_per_beat),
            ProjectRange::new(0.0, 64.0),
        )
    }

    #[test]
    fn test_beat_to_pixel_linear_transform() {
        let mapper = mapper_at_zoom(20.0);
        assert_eq!(mapper.beat_to_pixel(3.25), 65.0); // 3.25 * 20 px
    }

    #[test]
    fn test_unaligned_round_trip_is_exact() {
        let mapper = mapper_at_zoom(20.0);
        assert_eq!(mapper.pixel_to_beat(65.0, false), 3.25);

        for i in 0..=256 {
            let beat = f64::from(i) * 0.25;
            let round_trip = mapper.pixel_to_beat(mapper.beat_to_pixel(beat), false);
            assert!((round_trip - beat).abs() < BEAT_EPSILON);
        }
    }

    #[test]
    fn test_aligned_mapping_snaps_to_grid() {
        let mapper = mapper_at_zoom(20.0);
        // 63 px = beat 3.15, nearest sixteenth is 3.25
        assert_eq!(mapper.pixel_to_beat(63.0, true), 3.25);
        // 61 px = beat 3.05, nearest sixteenth is 3.0
        assert_eq!(mapper.pixel_to_beat(61.0, true), 3.0);
    }

    #[test]
    fn test_snapping_is_idempotent() {
        let mapper = mapper_at_zoom(20.0);
        for pixel in [0.0, 7.0, 33.3, 61.0, 63.0, 64.9, 1000.5] {
            let snapped = mapper.pixel_to_beat(pixel, true);
            let again = mapper.pixel_to_beat(mapper.beat_to_pixel(snapped), true);
            assert!((again - snapped).abs() < BEAT_EPSILON);
        }
    }

    #[test]
    fn test_pixel_fraction_is_always_clamped() {
        let mapper = mapper_at_zoom(20.0);
        assert_eq!(mapper.pixel_to_transport_fraction(-50.0, 200.0), 0.0);
        assert_eq!(mapper.pixel_to_transport_fraction(500.0, 200.0), 1.0);
        assert_eq!(mapper.pixel_to_transport_fraction(100.0, 200.0), 0.5);
        assert_eq!(mapper.pixel_to_transport_fraction(f64::NAN, 200.0), 0.0);
    }

    #[test]
    fn test_beat_fraction_interpolates_within_range() {
        let mapper = mapper_at_zoom(20.0);
        assert_eq!(mapper.beat_to_transport_fraction(32.0), 0.5); // range (0, 64)
        assert_eq!(mapper.beat_to_transport_fraction(0.0), 0.0);
        assert_eq!(mapper.beat_to_transport_fraction(64.0), 1.0);
    }

    #[test]
    fn test_beat_fraction_clamps_outside_range() {
        let mapper = mapper_at_zoom(20.0);
        assert_eq!(mapper.beat_to_transport_fraction(-8.0), 0.0);
        assert_eq!(mapper.beat_to_transport_fraction(128.0), 1.0);
    }

    #[test]
    fn test_fraction_to_beat_round_trip() {
        let mapper = PositionMapper::new(
            TimelineMetric::with_zoom(20.0),
            ProjectRange::new(8.0, 24.0),
        );
        assert_eq!(mapper.transport_fraction_to_beat(0.5), 16.0);
        assert_eq!(mapper.transport_fraction_to_beat(-1.0), 8.0);
        assert_eq!(mapper.transport_fraction_to_beat(2.0), 24.0);
        let fraction = mapper.beat_to_transport_fraction(12.0);
        assert!((mapper.transport_fraction_to_beat(fraction) - 12.0).abs() < BEAT_EPSILON);
    }

    #[test]
    fn test_degenerate_metric_returns_zero_sentinel() {
        let mapper = mapper_at_zoom(0.0);
        assert_eq!(mapper.pixel_to_beat(65.0, false), 0.0);
        assert_eq!(mapper.pixel_to_beat(65.0, true), 0.0);
        assert_eq!(mapper.beat_to_pixel(3.25), 0.0);
    }

    #[test]
    fn test_empty_range_returns_zero_sentinel() {
        let mapper = PositionMapper::new(
            TimelineMetric::with_zoom(20.0),
            ProjectRange::new(32.0, 32.0),
        );
        assert_eq!(mapper.beat_to_transport_fraction(40.0), 0.0);
        assert_eq!(mapper.transport_fraction_to_beat(0.5), 32.0);
    }

    #[test]
    fn test_zero_width_surface_returns_zero_sentinel() {
        let mapper = mapper_at_zoom(20.0);
        assert_eq!(mapper.pixel_to_transport_fraction(10.0, 0.0), 0.0);
        assert_eq!(mapper.pixel_to_transport_fraction(10.0, -5.0), 0.0);
    }

    #[test]
    fn test_negative_pixel_never_yields_negative_beat() {
        let mapper = mapper_at_zoom(20.0);
        assert_eq!(mapper.pixel_to_beat(-200.0, false), 0.0);
        assert_eq!(mapper.pixel_to_beat(-200.0, true), 0.0);
    }

    #[test]
    fn test_odd_signature_does_not_affect_beat_mapping() {
        let metric = TimelineMetric::new(
            16.0,
            TimeSignature {
                beats_per_bar: 7,
                beat_unit: 8,
            },
            3,
        );
        let mapper = PositionMapper::new(metric, ProjectRange::new(0.0, 14.0));
        assert_eq!(mapper.pixel_to_beat(24.0, false), 1.5);
        // nearest third of a beat to 1.4375 (23 px) is 1.333..
        let snapped = mapper.pixel_to_beat(23.0, true);
        assert!((snapped - 4.0 / 3.0).abs() < BEAT_EPSILON);
    }
}
