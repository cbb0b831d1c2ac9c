use crate::mapper::PositionMapper;

/// One point on the timeline in its three equivalent representations,
/// kept consistent through the mapper that built it.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    pub beat: f64,
    pub pixel: f64,
    pub transport_fraction: f64,
}

impl Position {
    pub fn from_beat(beat: f64, mapper: &PositionMapper) -> Self {
        let beat = beat.max(0.0);
        Self {
            beat,
            pixel: mapper.beat_to_pixel(beat),
            transport_fraction: mapper.beat_to_transport_fraction(beat),
        }
    }

    pub fn from_pixel(pixel: f64, align_to_grid: bool, mapper: &PositionMapper) -> Self {
        Self::from_beat(mapper.pixel_to_beat(pixel, align_to_grid), mapper)
    }
}

#[cfg(test)]
mod position_tests {
    use super::*;
    use crate::{metric::TimelineMetric, range::ProjectRange};

    fn test_mapper() -> PositionMapper {
        PositionMapper::new(TimelineMetric::with_zoom(20.0), ProjectRange::new(0.0, 64.0))
    }

    #[test]
    fn test_representations_agree() {
        let mapper = test_mapper();
        let position = Position::from_beat(32.0, &mapper);
        assert_eq!(position.pixel, 640.0); // 32 * 20 px
        assert_eq!(position.transport_fraction, 0.5);
    }

    #[test]
    fn test_aligned_pixel_construction_lands_on_grid() {
        let mapper = test_mapper();
        let position = Position::from_pixel(63.0, true, &mapper);
        assert_eq!(position.beat, 3.25);
        assert_eq!(position.pixel, 65.0);
    }

    #[test]
    fn test_negative_beat_clamps_to_zero() {
        let mapper = test_mapper();
        let position = Position::from_beat(-3.0, &mapper);
        assert_eq!(position.beat, 0.0);
        assert_eq!(position.pixel, 0.0);
        assert_eq!(position.transport_fraction, 0.0);
    }
}
