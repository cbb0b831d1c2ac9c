#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSignature {
    pub beats_per_bar: u32, // numerator (e.g., 4 in 4/4)
    pub beat_unit: u32,     // denominator (e.g., 4 in 4/4)
}

impl TimeSignature {
    pub const COMMON: Self = Self {
        beats_per_bar: 4,
        beat_unit: 4,
    };
}

/// Horizontal scale of the roll: how many pixels one beat occupies, plus the
/// bar and snap-grid structure derived from the time signature.
///
/// Rebuilt whenever the zoom level or the time signature changes. A metric
/// with a non-positive `pixels_per_beat` or zero snap divisions is
/// *degenerate*: every mapping through it returns 0 instead of dividing.
#[derive(Debug, Clone, Copy)]
pub struct TimelineMetric {
    pixels_per_beat: f64,
    time_signature: TimeSignature,
    snap_divisions_per_beat: u32,
}

impl TimelineMetric {
    pub fn new(
        pixels_per_beat: f64,
        time_signature: TimeSignature,
        snap_divisions_per_beat: u32,
    ) -> Self {
        Self {
            pixels_per_beat,
            time_signature,
            snap_divisions_per_beat,
        }
    }

    /// 4/4 at the given zoom, snapping to sixteenths.
    pub fn with_zoom(pixels_per_beat: f64) -> Self {
        Self::new(pixels_per_beat, TimeSignature::COMMON, 4)
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.pixels_per_beat > 0.0) || self.snap_divisions_per_beat == 0
    }

    pub fn pixels_per_beat(&self) -> f64 {
        self.pixels_per_beat
    }

    pub fn time_signature(&self) -> TimeSignature {
        self.time_signature
    }

    pub fn beats_per_bar(&self) -> u32 {
        self.time_signature.beats_per_bar
    }

    pub fn snap_divisions_per_beat(&self) -> u32 {
        self.snap_divisions_per_beat
    }

    pub fn pixels_per_bar(&self) -> f64 {
        self.pixels_per_beat * f64::from(self.time_signature.beats_per_bar)
    }

    pub fn pixels_per_snap(&self) -> f64 {
        if self.snap_divisions_per_beat == 0 {
            return 0.0;
        }
        self.pixels_per_beat / f64::from(self.snap_divisions_per_beat)
    }

    pub fn set_zoom(&mut self, pixels_per_beat: f64) {
        self.pixels_per_beat = pixels_per_beat;
    }

    pub fn set_signature(&mut self, time_signature: TimeSignature) {
        self.time_signature = time_signature;
    }

    pub fn set_snap_divisions(&mut self, snap_divisions_per_beat: u32) {
        self.snap_divisions_per_beat = snap_divisions_per_beat;
    }
}

#[cfg(test)]
mod metric_tests {
    use super::*;

    #[test]
    fn test_derived_pixel_widths() {
        let metric = TimelineMetric::with_zoom(20.0);
        assert_eq!(metric.pixels_per_bar(), 80.0); // 20 px * 4 beats
        assert_eq!(metric.pixels_per_snap(), 5.0); // 20 px / 4 divisions
    }

    #[test]
    fn test_zoom_change_updates_derived_widths() {
        let mut metric = TimelineMetric::with_zoom(20.0);
        metric.set_zoom(40.0);
        assert_eq!(metric.pixels_per_bar(), 160.0);
        assert_eq!(metric.pixels_per_snap(), 10.0);
    }

    #[test]
    fn test_signature_change_updates_bar_width() {
        let mut metric = TimelineMetric::with_zoom(20.0);
        metric.set_signature(TimeSignature {
            beats_per_bar: 3,
            beat_unit: 4,
        });
        assert_eq!(metric.pixels_per_bar(), 60.0);
    }

    #[test]
    fn test_degenerate_metrics_are_flagged() {
        assert!(TimelineMetric::with_zoom(0.0).is_degenerate());
        assert!(TimelineMetric::with_zoom(-1.0).is_degenerate());
        assert!(TimelineMetric::with_zoom(f64::NAN).is_degenerate());
        assert!(TimelineMetric::new(20.0, TimeSignature::COMMON, 0).is_degenerate());
        assert!(!TimelineMetric::with_zoom(20.0).is_degenerate());
    }

    #[test]
    fn test_zero_snap_divisions_yields_zero_snap_width() {
        let metric = TimelineMetric::new(20.0, TimeSignature::COMMON, 0);
        assert_eq!(metric.pixels_per_snap(), 0.0);
    }
}
