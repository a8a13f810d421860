//! Channel menu
//!
//! One row per channel, each with a fixed handler. Up/Down move the focus
//! with wrap-around; any other press goes to the focused row's handler,
//! which decides what the buttons mean.

use crate::channel::{Channel, CHANNEL_COUNT};
use crate::state::{Button, ButtonSet};

/// Work a menu row asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuAction {
    /// Invert the channel's pin
    Toggle(Channel),
}

/// One menu row: a channel and its handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub channel: Channel,
    pub action: MenuAction,
}

const fn item(channel: Channel) -> MenuItem {
    MenuItem {
        channel,
        action: MenuAction::Toggle(channel),
    }
}

/// Row table, in display order
pub const MENU_ITEMS: [MenuItem; CHANNEL_COUNT] = [
    item(Channel::Ls1),
    item(Channel::Ls2),
    item(Channel::Ls3),
    item(Channel::Ls4),
    item(Channel::Ls5),
    item(Channel::Hs1),
    item(Channel::Hs2),
    item(Channel::Hs3),
    item(Channel::Hs4),
];

/// Result of feeding buttons to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuOutcome {
    /// The menu did not use the buttons
    Unhandled,
    /// Focus moved
    Moved,
    /// The press was passed to the focused row's handler
    Action(MenuAction),
}

/// Focus state of the channel menu
#[derive(Debug, Clone, Default)]
pub struct Menu {
    focus: usize,
}

impl Menu {
    pub const fn new() -> Self {
        Self { focus: 0 }
    }

    /// Index of the focused row
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Channel of the focused row
    pub fn focused(&self) -> Channel {
        MENU_ITEMS[self.focus].channel
    }

    pub fn items(&self) -> &'static [MenuItem] {
        &MENU_ITEMS
    }

    /// Route a button press
    ///
    /// Confirm goes to the handler even when pressed with Up or Down.
    pub fn handle_buttons(&mut self, buttons: ButtonSet) -> MenuOutcome {
        if buttons.is_empty() {
            return MenuOutcome::Unhandled;
        }

        if buttons.contains(Button::Confirm) {
            return MenuOutcome::Action(MENU_ITEMS[self.focus].action);
        }

        if buttons.contains(Button::Up) {
            self.focus = wrap_prev(self.focus, MENU_ITEMS.len());
            return MenuOutcome::Moved;
        }

        if buttons.contains(Button::Down) {
            self.focus = wrap_next(self.focus, MENU_ITEMS.len());
            return MenuOutcome::Moved;
        }

        MenuOutcome::Action(MENU_ITEMS[self.focus].action)
    }
}

#[inline]
fn wrap_next(i: usize, len: usize) -> usize {
    if i + 1 >= len {
        0
    } else {
        i + 1
    }
}

#[inline]
fn wrap_prev(i: usize, len: usize) -> usize {
    if i == 0 {
        len - 1
    } else {
        i - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: Button) -> ButtonSet {
        ButtonSet::single(button)
    }

    #[test]
    fn test_table_covers_every_channel() {
        for (item, channel) in MENU_ITEMS.iter().zip(Channel::ALL) {
            assert_eq!(item.channel, channel);
            assert_eq!(item.action, MenuAction::Toggle(channel));
        }
    }

    #[test]
    fn test_navigation_wraps() {
        let mut menu = Menu::new();
        assert_eq!(menu.focused(), Channel::Ls1);

        assert_eq!(menu.handle_buttons(press(Button::Up)), MenuOutcome::Moved);
        assert_eq!(menu.focused(), Channel::Hs4);

        assert_eq!(menu.handle_buttons(press(Button::Down)), MenuOutcome::Moved);
        assert_eq!(menu.focused(), Channel::Ls1);

        assert_eq!(menu.handle_buttons(press(Button::Down)), MenuOutcome::Moved);
        assert_eq!(menu.focused(), Channel::Ls2);
    }

    #[test]
    fn test_confirm_fires_focused_handler() {
        let mut menu = Menu::new();
        for _ in 0..7 {
            menu.handle_buttons(press(Button::Down));
        }
        assert_eq!(
            menu.handle_buttons(press(Button::Confirm)),
            MenuOutcome::Action(MenuAction::Toggle(Channel::Hs3))
        );
    }

    #[test]
    fn test_other_buttons_reach_handler() {
        let mut menu = Menu::new();
        menu.handle_buttons(press(Button::Down));
        let expected = MenuOutcome::Action(MenuAction::Toggle(Channel::Ls2));

        for button in [Button::Left, Button::Right, Button::Cancel] {
            assert_eq!(menu.handle_buttons(press(button)), expected);
        }
        assert_eq!(menu.focus(), 1);
    }

    #[test]
    fn test_confirm_wins_over_navigation() {
        let mut menu = Menu::new();
        let buttons: ButtonSet = [Button::Confirm, Button::Down].into_iter().collect();
        assert_eq!(
            menu.handle_buttons(buttons),
            MenuOutcome::Action(MenuAction::Toggle(Channel::Ls1))
        );
        assert_eq!(menu.focus(), 0);
    }

    #[test]
    fn test_empty_press_unhandled() {
        let mut menu = Menu::new();
        assert_eq!(menu.handle_buttons(ButtonSet::empty()), MenuOutcome::Unhandled);
    }
}
