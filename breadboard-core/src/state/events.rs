//! Events delivered to the application

/// Logical badge buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Right,
    Confirm,
    Down,
    Left,
    Cancel,
}

impl Button {
    /// All buttons, in badge order (A..F)
    pub const ALL: [Button; 6] = [
        Button::Up,
        Button::Right,
        Button::Confirm,
        Button::Down,
        Button::Left,
        Button::Cancel,
    ];

    const fn mask(self) -> u8 {
        match self {
            Button::Up => 1 << 0,
            Button::Right => 1 << 1,
            Button::Confirm => 1 << 2,
            Button::Down => 1 << 3,
            Button::Left => 1 << 4,
            Button::Cancel => 1 << 5,
        }
    }
}

/// Set of buttons pressed together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSet(u8);

impl ButtonSet {
    /// Empty set
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Set holding a single button
    pub const fn single(button: Button) -> Self {
        Self(button.mask())
    }

    /// Add a button to the set
    pub fn insert(&mut self, button: Button) {
        self.0 |= button.mask();
    }

    /// Check membership
    pub const fn contains(&self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate over the buttons in the set
    pub fn iter(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL.into_iter().filter(|b| self.contains(*b))
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        let mut set = ButtonSet::empty();
        for button in iter {
            set.insert(button);
        }
        set
    }
}

/// Events consumed by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A hexpansion was detected in a port (raw port number, expected 1..=6)
    ModuleInserted { port: u8 },
    /// The hexpansion was unplugged
    ModuleRemoved,
    /// One or more buttons went down
    ButtonPressed(ButtonSet),
}

impl Event {
    /// Check if this event is user-initiated
    pub fn is_user_event(&self) -> bool {
        matches!(self, Event::ButtonPressed(_))
    }
}
