/// The visible horizontal slice of the roll, in pixels.
///
/// Owned by the display surface; updated on scroll and resize. Width never
/// goes negative.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pixel_start: f64,
    pixel_width: f64,
}

impl Viewport {
    pub fn new(pixel_start: f64, pixel_width: f64) -> Self {
        Self {
            pixel_start,
            pixel_width: pixel_width.max(0.0),
        }
    }

    pub fn pixel_start(&self) -> f64 {
        self.pixel_start
    }

    pub fn pixel_width(&self) -> f64 {
        self.pixel_width
    }

    pub fn pixel_end(&self) -> f64 {
        self.pixel_start + self.pixel_width
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_width <= 0.0
    }

    pub fn contains(&self, pixel: f64) -> bool {
        pixel >= self.pixel_start && pixel < self.pixel_end()
    }

    /// Clamp a pixel coordinate into the visible window.
    pub fn clamp(&self, pixel: f64) -> f64 {
        if pixel.is_nan() {
            return self.pixel_start;
        }
        pixel.clamp(self.pixel_start, self.pixel_end())
    }

    pub fn scroll_to(&mut self, pixel_start: f64) {
        self.pixel_start = pixel_start;
    }

    pub fn resize(&mut self, pixel_width: f64) {
        self.pixel_width = pixel_width.max(0.0);
    }
}
