use crate::range::ProjectRange;

pub const DEFAULT_BPM: f64 = 120.0;

#[derive(Debug, Clone, Copy)]
pub struct TempoEvent {
    pub beat: f64,
    pub bpm: f64,
}

/// Ordered tempo changes over the project range.
///
/// Time calculation walks the events and accumulates milliseconds per
/// segment at that segment's tempo. An empty map plays at [`DEFAULT_BPM`].
#[derive(Debug, Clone, Default)]
pub struct TempoMap {
    events: Vec<TempoEvent>,
}

impl TempoMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: impl IntoIterator<Item = TempoEvent>) -> Self {
        let mut map = Self::new();
        for event in events {
            map.insert(event);
        }
        map
    }

    /// Insert a tempo change, keeping events ordered by beat. Non-positive
    /// tempos are ignored.
    pub fn insert(&mut self, event: TempoEvent) {
        if !(event.bpm > 0.0) || event.beat.is_nan() {
            return;
        }
        let at = self
            .events
            .partition_point(|existing| existing.beat <= event.beat);
        self.events.insert(at, event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Tempo in effect at the given beat.
    pub fn bpm_at(&self, beat: f64) -> f64 {
        self.events
            .iter()
            .take_while(|event| event.beat <= beat)
            .last()
            .map_or(DEFAULT_BPM, |event| event.bpm)
    }

    /// Absolute time in milliseconds and tempo at a normalized transport
    /// position within the project range.
    pub fn time_and_tempo_at(&self, fraction: f64, range: ProjectRange) -> (f64, f64) {
        if range.is_empty() {
            return (0.0, self.bpm_at(range.first_beat));
        }
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let target_beat = range.first_beat + fraction * range.length_in_beats();

        let mut cursor = range.first_beat;
        let mut bpm = self.bpm_at(cursor);
        let mut time_ms = 0.0;

        for event in &self.events {
            if event.beat <= cursor {
                continue;
            }
            if event.beat >= target_beat {
                break;
            }
            time_ms += (event.beat - cursor) * 60_000.0 / bpm;
            cursor = event.beat;
            bpm = event.bpm;
        }

        time_ms += (target_beat - cursor) * 60_000.0 / bpm;
        (time_ms, bpm)
    }
}

/// Transport time display string, `m:ss.mmm`.
pub fn format_time(time_ms: f64) -> String {
    let total_ms = if time_ms.is_nan() {
        0
    } else {
        time_ms.max(0.0).round() as u64
    };
    let minutes = total_ms / 60_000;
    let seconds = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;
    format!("{minutes}:{seconds:02}.{millis:03}")
}
