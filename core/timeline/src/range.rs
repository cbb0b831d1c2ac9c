/// The beat span of the project, supplied by the project model.
#[derive(Debug, Clone, Copy)]
pub struct ProjectRange {
    pub first_beat: f64,
    pub last_beat: f64,
}

impl ProjectRange {
    pub fn new(first_beat: f64, last_beat: f64) -> Self {
        Self {
            first_beat,
            last_beat,
        }
    }

    pub fn length_in_beats(&self) -> f64 {
        (self.last_beat - self.first_beat).max(0.0)
    }

    pub fn is_empty(&self) -> bool {
        !(self.last_beat > self.first_beat)
    }

    pub fn clamp_beat(&self, beat: f64) -> f64 {
        if beat.is_nan() || self.is_empty() {
            return self.first_beat;
        }
        beat.clamp(self.first_beat, self.last_beat)
    }
}
