use timeline::mapper::PositionMapper;

/// Anchors of the two sound-probe indicators, as transport fractions.
///
/// `pointing` follows the hovering pointer; `playing` marks where the probe
/// was pressed. A new pointer position supersedes the previous one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeIndicators {
    pointing: Option<f64>,
    playing: Option<f64>,
}

impl ProbeIndicators {
    pub fn pointing(&self) -> Option<f64> {
        self.pointing
    }

    pub fn playing(&self) -> Option<f64> {
        self.playing
    }

    pub fn set_pointing(&mut self, anchor: f64) {
        self.pointing = Some(anchor);
    }

    pub fn set_playing(&mut self, anchor: f64) {
        self.playing = Some(anchor);
    }

    pub fn clear_pointing(&mut self) {
        self.pointing = None;
    }

    pub fn clear(&mut self) {
        self.pointing = None;
        self.playing = None;
    }

    /// Pixel distance between the two anchors, when both are visible.
    pub fn pixel_distance(&self, mapper: &PositionMapper) -> Option<f64> {
        let pointing = self.pointing?;
        let playing = self.playing?;
        let pointing_px = mapper.beat_to_pixel(mapper.transport_fraction_to_beat(pointing));
        let playing_px = mapper.beat_to_pixel(mapper.transport_fraction_to_beat(playing));
        Some((pointing_px - playing_px).abs())
    }
}
