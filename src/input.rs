//! Badge buttons and per-tick input.
//!
//! Screens consume an [`InputFrame`]: the set of buttons that went down this
//! tick plus the monotonic tick counter in milliseconds. Turning raw "held"
//! state into those edges is the run loop's job, done with one debounced
//! [`ButtonState`] per button inside a [`ButtonPad`].

use crate::config::DEBOUNCE_MS;

/// Physical badge buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
    /// Previous item / previous page.
    A = 0,
    /// Launch / action.
    B = 1,
    /// Next item / next page.
    C = 2,
    Up = 3,
    Down = 4,
    /// Return to the launcher.
    Home = 5,
}

impl Button {
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::Up, Self::Down, Self::Home];

    #[inline]
    const fn bit(self) -> u8 { 1 << self as u8 }
}

/// Set of buttons, one bit each.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonSet(u8);

impl ButtonSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub const fn contains(
        self,
        button: Button,
    ) -> bool {
        self.0 & button.bit() != 0
    }

    #[inline]
    pub const fn insert(
        &mut self,
        button: Button,
    ) {
        self.0 |= button.bit();
    }

    #[inline]
    pub const fn remove(
        &mut self,
        button: Button,
    ) {
        self.0 &= !button.bit();
    }

    #[inline]
    pub const fn union(
        self,
        other: Self,
    ) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool { self.0 == 0 }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for button in iter {
            set.insert(button);
        }
        set
    }
}

/// Input for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    /// Buttons newly pressed this tick.
    pub pressed: ButtonSet,
    /// Monotonic milliseconds since the run loop started.
    pub ticks: u64,
}

impl InputFrame {
    pub const fn new(
        pressed: ButtonSet,
        ticks: u64,
    ) -> Self {
        Self { pressed, ticks }
    }

    /// A tick with nothing pressed.
    pub const fn idle(ticks: u64) -> Self { Self::new(ButtonSet::EMPTY, ticks) }

    #[inline]
    pub const fn pressed(
        &self,
        button: Button,
    ) -> bool {
        self.pressed.contains(button)
    }
}

/// Debounced press detector for one button.
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonState {
    was_pressed: bool,
    last_change: Option<u64>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change: None,
        }
    }

    /// Returns true only on the press edge.
    ///
    /// State changes closer than [`DEBOUNCE_MS`] to the previous accepted
    /// change are ignored.
    pub fn just_pressed(
        &mut self,
        is_down: bool,
        now_ms: u64,
    ) -> bool {
        if is_down == self.was_pressed {
            return false;
        }
        if let Some(last) = self.last_change
            && now_ms.saturating_sub(last) < DEBOUNCE_MS
        {
            return false;
        }

        self.was_pressed = is_down;
        self.last_change = Some(now_ms);
        is_down
    }
}

/// Debounced edge detection for every badge button.
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonPad {
    states: [ButtonState; Button::ALL.len()],
}

impl ButtonPad {
    pub const fn new() -> Self {
        Self {
            states: [ButtonState::new(); Button::ALL.len()],
        }
    }

    /// Feed the currently held buttons, get back the ones pressed this tick.
    pub fn poll(
        &mut self,
        held: ButtonSet,
        now_ms: u64,
    ) -> ButtonSet {
        let mut pressed = ButtonSet::EMPTY;
        for button in Button::ALL {
            if self.states[button as usize].just_pressed(held.contains(button), now_ms) {
                pressed.insert(button);
            }
        }
        pressed
    }
}
