/// Where in the press/drag/release cycle a pointer event sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    DoubleDown,
    Move,
    Drag,
    Up,
    Exit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub command: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        command: false,
    };

    /// Any modifier turns a header press into a drag-select gesture.
    pub fn any_selection_modifier(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.command
    }
}

/// Plain pointer event record; the interaction layer never sees toolkit
/// event types. The pixel coordinate is roll-relative.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub pixel: f64,
    pub modifiers: Modifiers,
    pub phase: PointerPhase,
}

impl PointerEvent {
    pub fn new(pixel: f64, modifiers: Modifiers, phase: PointerPhase) -> Self {
        Self {
            pixel,
            modifiers,
            phase,
        }
    }

    pub fn plain(pixel: f64, phase: PointerPhase) -> Self {
        Self::new(pixel, Modifiers::NONE, phase)
    }
}
