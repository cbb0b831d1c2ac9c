pub struct Snapper;

impl Snapper {
    /// Snap to the nearest grid line, round-half-up.
    pub fn snap_beat(beat: f64, divisions_per_beat: u32) -> f64 {
        if divisions_per_beat == 0 {
            return beat.max(0.0);
        }
        let divisions = f64::from(divisions_per_beat);
        ((beat.max(0.0) * divisions) + 0.5).floor() / divisions
    }

    /// Always snap forward to the next grid line.
    pub fn snap_beat_forward(beat: f64, divisions_per_beat: u32) -> f64 {
        if divisions_per_beat == 0 {
            return beat.max(0.0);
        }
        let divisions = f64::from(divisions_per_beat);
        (beat.max(0.0) * divisions).ceil() / divisions
    }
}
