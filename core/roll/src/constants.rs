/// Minimum pixel distance between the probe anchors before the
/// time-distance readout appears.
pub const MIN_TIME_DISTANCE_PX: f64 = 40.0;
