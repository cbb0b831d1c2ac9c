use crate::instrument::InstrumentId;

pub mod command;

/// Playback-side operations the header drives. The engine behind it is
/// external; implementations must not block the event thread.
pub trait TransportControl {
    fn stop_playback(&mut self);
    fn start_playback(&mut self);
    /// Move the playhead to a normalized transport position.
    fn seek_to(&mut self, fraction: f64);
    /// Audition whatever sounds at the position, optionally one instrument.
    fn probe_sound_at(&mut self, fraction: f64, instrument: Option<InstrumentId>);
    /// Silence all probe voices.
    fn all_sound_off(&mut self);
}
