use timeline::mapper::PositionMapper;

/// Horizontal drag-selection span, tracked in roll pixels while the drag
/// is live.
#[derive(Debug, Clone, Copy)]
pub struct Lasso {
    start_pixel: f64,
    end_pixel: f64,
}

/// Selection result reported when a lasso ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeatSpan {
    pub start_beat: f64,
    pub end_beat: f64,
}

impl Lasso {
    pub fn begin(pixel: f64) -> Self {
        Self {
            start_pixel: pixel,
            end_pixel: pixel,
        }
    }

    pub fn drag(&mut self, pixel: f64) {
        self.end_pixel = pixel;
    }

    pub fn start_pixel(&self) -> f64 {
        self.start_pixel
    }

    pub fn end_pixel(&self) -> f64 {
        self.end_pixel
    }

    pub fn pixel_width(&self) -> f64 {
        (self.end_pixel - self.start_pixel).abs()
    }

    /// The selected beat range, ordered left to right. A zero-width lasso
    /// selects nothing.
    pub fn beat_span(&self, mapper: &PositionMapper) -> Option<BeatSpan> {
        let left = self.start_pixel.min(self.end_pixel);
        let right = self.start_pixel.max(self.end_pixel);
        let start_beat = mapper.pixel_to_beat(left, false);
        let end_beat = mapper.pixel_to_beat(right, false);
        (end_beat > start_beat).then_some(BeatSpan {
            start_beat,
            end_beat,
        })
    }
}
