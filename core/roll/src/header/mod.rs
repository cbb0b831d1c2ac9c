use log::{debug, warn};
use timeline::{
    mapper::PositionMapper,
    tempo::{TempoMap, format_time},
};

use crate::{
    constants::MIN_TIME_DISTANCE_PX,
    event::{PointerEvent, PointerPhase},
    header::indicator::ProbeIndicators,
    instrument::{InstrumentId, InstrumentRegistry},
    lasso::{BeatSpan, Lasso},
    transport::TransportControl,
};

pub mod indicator;

/// Interaction state of the header; probe and selection gestures are
/// mutually exclusive, and every release lands back in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderState {
    #[default]
    Idle,
    Probing,
    Selecting,
}

/// The roll header strip: routes pointer gestures into transport seeks,
/// sound probes and lasso selection.
///
/// Seek and probe positions align to the beat grid; lasso edges stay
/// unaligned so fine selections remain possible at any zoom. The header
/// owns no playback state; all side effects go through the injected
/// [`TransportControl`].
#[derive(Debug)]
pub struct RollHeader {
    mapper: PositionMapper,
    tempo: TempoMap,
    probe_mode: bool,
    selection_mode: bool,
    probe_instrument: Option<InstrumentId>,
    state: HeaderState,
    indicators: ProbeIndicators,
    lasso: Option<Lasso>,
    time_distance_text: Option<String>,
}

impl RollHeader {
    pub fn new(mapper: PositionMapper, tempo: TempoMap) -> Self {
        Self {
            mapper,
            tempo,
            probe_mode: false,
            selection_mode: false,
            probe_instrument: None,
            state: HeaderState::Idle,
            indicators: ProbeIndicators::default(),
            lasso: None,
            time_distance_text: None,
        }
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    pub fn mapper(&self) -> &PositionMapper {
        &self.mapper
    }

    pub fn mapper_mut(&mut self) -> &mut PositionMapper {
        &mut self.mapper
    }

    pub fn tempo_map_mut(&mut self) -> &mut TempoMap {
        &mut self.tempo
    }

    pub fn indicators(&self) -> &ProbeIndicators {
        &self.indicators
    }

    pub fn lasso(&self) -> Option<&Lasso> {
        self.lasso.as_ref()
    }

    pub fn time_distance_text(&self) -> Option<&str> {
        self.time_distance_text.as_deref()
    }

    pub fn is_probe_mode(&self) -> bool {
        self.probe_mode
    }

    /// Toggle play-on-click auditioning. Leaving the mode clears the hover
    /// indicator and the distance readout.
    pub fn set_probe_mode(&mut self, probe_mode: bool) {
        if self.probe_mode == probe_mode {
            return;
        }
        self.probe_mode = probe_mode;
        if !probe_mode {
            self.indicators.clear_pointing();
            self.time_distance_text = None;
        }
    }

    /// Sticky selection mode: a plain press starts a lasso without needing
    /// a keyboard modifier.
    pub fn set_selection_mode(&mut self, selection_mode: bool) {
        self.selection_mode = selection_mode;
    }

    /// Restrict probing to one instrument, validated against the registry.
    /// An unknown handle falls back to probing everything.
    pub fn set_probe_instrument(
        &mut self,
        registry: &InstrumentRegistry,
        instrument: Option<InstrumentId>,
    ) {
        self.probe_instrument = match instrument {
            Some(id) if registry.contains(id) => Some(id),
            Some(id) => {
                warn!("probe instrument {id:?} is not registered, probing all");
                None
            }
            None => None,
        };
    }

    /// Feed one pointer event through the state machine. Returns the
    /// selected span when a lasso gesture completes.
    pub fn on_pointer_event(
        &mut self,
        event: PointerEvent,
        transport: &mut dyn TransportControl,
    ) -> Option<BeatSpan> {
        match event.phase {
            PointerPhase::Down => self.on_down(event, transport),
            PointerPhase::DoubleDown => self.on_double_down(event, transport),
            PointerPhase::Move => self.on_move(event),
            PointerPhase::Drag => self.on_drag(event, transport),
            PointerPhase::Up => return self.on_up(event, transport),
            PointerPhase::Exit => self.on_exit(),
        }
        None
    }

    fn aligned_fraction(&self, pixel: f64) -> f64 {
        self.mapper.transport_fraction_at_pixel(pixel, true)
    }

    fn on_down(&mut self, event: PointerEvent, transport: &mut dyn TransportControl) {
        if self.probe_mode {
            let fraction = self.aligned_fraction(event.pixel);
            debug!("probing sound at {fraction}");
            transport.probe_sound_at(fraction, self.probe_instrument);
            self.indicators.set_playing(fraction);
            self.state = HeaderState::Probing;
            return;
        }

        if event.modifiers.any_selection_modifier() || self.selection_mode {
            self.lasso = Some(Lasso::begin(event.pixel));
            self.state = HeaderState::Selecting;
        } else {
            let fraction = self.aligned_fraction(event.pixel);
            debug!("seeking to {fraction}");
            transport.stop_playback();
            transport.seek_to(fraction);
        }
    }

    fn on_double_down(&mut self, event: PointerEvent, transport: &mut dyn TransportControl) {
        let fraction = self.aligned_fraction(event.pixel);
        transport.stop_playback();
        transport.seek_to(fraction);
        transport.start_playback();
    }

    fn on_move(&mut self, event: PointerEvent) {
        if self.probe_mode || self.indicators.pointing().is_some() {
            self.indicators.set_pointing(self.aligned_fraction(event.pixel));
        }
    }

    fn on_drag(&mut self, event: PointerEvent, transport: &mut dyn TransportControl) {
        match self.state {
            HeaderState::Probing => {
                self.indicators.set_pointing(self.aligned_fraction(event.pixel));
                self.update_time_distance(transport);
            }
            HeaderState::Selecting => {
                if let Some(lasso) = self.lasso.as_mut() {
                    lasso.drag(event.pixel);
                }
            }
            HeaderState::Idle => {
                if !self.probe_mode {
                    // scrubbing: each drag re-seeks the stopped transport
                    let fraction = self.aligned_fraction(event.pixel);
                    transport.stop_playback();
                    transport.seek_to(fraction);
                }
            }
        }
    }

    fn on_up(
        &mut self,
        event: PointerEvent,
        transport: &mut dyn TransportControl,
    ) -> Option<BeatSpan> {
        self.indicators.clear();
        self.time_distance_text = None;

        let state = std::mem::take(&mut self.state);
        match state {
            HeaderState::Probing => {
                transport.all_sound_off();
                None
            }
            HeaderState::Selecting => {
                let span = self
                    .lasso
                    .take()
                    .and_then(|lasso| lasso.beat_span(&self.mapper));
                if let Some(span) = &span {
                    debug!("lasso selected {span:?}");
                }
                span
            }
            HeaderState::Idle => {
                let fraction = self.aligned_fraction(event.pixel);
                transport.stop_playback();
                transport.seek_to(fraction);
                None
            }
        }
    }

    fn on_exit(&mut self) {
        self.indicators.clear_pointing();
        self.time_distance_text = None;
    }

    /// Hysteresis around the readout: it appears once the anchors drift
    /// `MIN_TIME_DISTANCE_PX` apart and disappears when they close back in.
    fn update_time_distance(&mut self, transport: &mut dyn TransportControl) {
        let Some(distance) = self.indicators.pixel_distance(&self.mapper) else {
            self.time_distance_text = None;
            return;
        };

        if self.time_distance_text.is_none() {
            if distance > MIN_TIME_DISTANCE_PX {
                transport.stop_playback();
                self.time_distance_text = Some(self.time_distance_string());
            }
        } else if distance <= MIN_TIME_DISTANCE_PX {
            self.time_distance_text = None;
        } else {
            self.time_distance_text = Some(self.time_distance_string());
        }
    }

    fn time_distance_string(&self) -> String {
        let range = self.mapper.range();
        let pointing = self.indicators.pointing().unwrap_or(0.0);
        let playing = self.indicators.playing().unwrap_or(0.0);
        let (pointing_ms, _) = self.tempo.time_and_tempo_at(pointing, range);
        let (playing_ms, _) = self.tempo.time_and_tempo_at(playing, range);
        format_time((pointing_ms - playing_ms).abs())
    }
}
