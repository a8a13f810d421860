//! The Breadboard application
//!
//! Ties the pin controller, the channel menu and the notice together and
//! maps inbound events onto them. Rendering and the event source live in
//! the firmware; this type only decides what changes and when a redraw is
//! warranted.

use breadboard_hal::HexpansionPins;

use crate::channel::Channel;
use crate::config::AppConfig;
use crate::controller::{InsertError, PinController, ToggleError};
use crate::format::{format_level, format_port, IdentityText};
use crate::state::{Button, ButtonSet, Event, ModuleState};
use crate::ui::{Menu, MenuAction, MenuOutcome, Notice, NO_MODULE_NOTICE};

/// A completed toggle: the pin level read before and after the write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Toggled {
    pub channel: Channel,
    pub before: bool,
    pub after: bool,
}

/// What the host should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Response {
    /// Displayed state changed
    pub redraw: bool,
    /// The user asked to leave the app
    pub minimise: bool,
    /// Insertion failed; the app stays detached
    pub fault: Option<InsertError>,
    /// A pin was flipped
    pub toggled: Option<Toggled>,
}

/// One channel row as shown on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuRow {
    pub channel: Channel,
    pub label: &'static str,
    pub value: &'static str,
    pub focused: bool,
}

/// Application state
pub struct BreadboardApp<H: HexpansionPins> {
    controller: PinController<H>,
    menu: Menu,
    notice: Option<Notice>,
    config: AppConfig,
    dirty: bool,
}

impl<H: HexpansionPins> BreadboardApp<H> {
    pub fn new(provider: H, config: AppConfig) -> Self {
        Self {
            controller: PinController::new(provider),
            menu: Menu::new(),
            notice: None,
            config,
            dirty: true,
        }
    }

    pub fn state(&self) -> ModuleState {
        self.controller.state()
    }

    pub fn controller(&self) -> &PinController<H> {
        &self.controller
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Process one inbound event
    pub fn handle_event(&mut self, event: Event) -> Response {
        let response = match event {
            Event::ModuleInserted { port } => match self.controller.on_module_inserted(port) {
                Ok(_) => Response {
                    redraw: true,
                    ..Response::default()
                },
                Err(fault) => Response {
                    redraw: true,
                    fault: Some(fault),
                    ..Response::default()
                },
            },
            Event::ModuleRemoved => {
                self.controller.on_module_removed();
                Response {
                    redraw: true,
                    ..Response::default()
                }
            }
            Event::ButtonPressed(buttons) => self.handle_buttons(buttons),
        };

        if response.redraw {
            self.dirty = true;
        }
        response
    }

    fn handle_buttons(&mut self, buttons: ButtonSet) -> Response {
        let outcome = match self.menu.handle_buttons(buttons) {
            MenuOutcome::Moved => return redraw(),
            MenuOutcome::Action(action) => self.run_action(action, buttons),
            MenuOutcome::Unhandled => Ok(None),
        };

        match outcome {
            Ok(Some(toggled)) => Response {
                redraw: true,
                toggled: Some(toggled),
                ..Response::default()
            },
            Ok(None) => Response {
                minimise: buttons.contains(Button::Cancel),
                ..Response::default()
            },
            // The notice was raised; the press still counts as unhandled
            Err(ToggleError::NoModule) => Response {
                redraw: true,
                minimise: buttons.contains(Button::Cancel),
                ..Response::default()
            },
        }
    }

    /// Run the focused row's handler
    ///
    /// While detached every press raises the notice. Once attached only
    /// Confirm flips the pin; other buttons fall through.
    fn run_action(
        &mut self,
        action: MenuAction,
        buttons: ButtonSet,
    ) -> Result<Option<Toggled>, ToggleError> {
        match action {
            MenuAction::Toggle(channel) => {
                let Some(before) = self.controller.read_level(channel) else {
                    self.notice = Some(Notice::new(NO_MODULE_NOTICE, self.config.notice_ms));
                    return Err(ToggleError::NoModule);
                };

                if !buttons.contains(Button::Confirm) {
                    return Ok(None);
                }

                self.controller.toggle(channel)?;
                Ok(Some(Toggled {
                    channel,
                    before,
                    after: self.controller.snapshot().level(channel),
                }))
            }
        }
    }

    /// Advance timers; returns true if a redraw is warranted
    pub fn update(&mut self, delta_ms: u32) -> bool {
        let mut redraw = core::mem::take(&mut self.dirty);

        if let Some(notice) = &mut self.notice {
            // Draw every tick while shown, and once more after it expires
            redraw = true;
            if !notice.update(delta_ms) {
                self.notice = None;
            }
        }

        redraw
    }

    /// Identity line for the top of the screen
    pub fn identity_text(&self) -> IdentityText {
        format_port(self.controller.snapshot().identity())
    }

    /// Channel rows in display order
    pub fn rows(&self) -> impl Iterator<Item = MenuRow> + '_ {
        let snapshot = self.controller.snapshot();
        let focus = self.menu.focus();
        self.menu
            .items()
            .iter()
            .enumerate()
            .map(move |(i, item)| MenuRow {
                channel: item.channel,
                label: item.channel.label(),
                value: format_level(snapshot.level(item.channel)),
                focused: i == focus,
            })
    }

    /// Index of the focused row
    pub fn focus(&self) -> usize {
        self.menu.focus()
    }

    /// Text of the active notice, if any
    pub fn notice_text(&self) -> Option<&'static str> {
        self.notice.filter(Notice::is_active).map(|n| n.text())
    }
}

fn redraw() -> Response {
    Response {
        redraw: true,
        ..Response::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breadboard_hal::{ExpansionPin, PinError, PinGroups};

    struct MockPin {
        high: bool,
    }

    impl ExpansionPin for MockPin {
        fn configure_as_output(&mut self) -> Result<(), PinError> {
            Ok(())
        }

        fn read_level(&mut self) -> bool {
            self.high
        }

        fn write_level(&mut self, high: bool) {
            self.high = high;
        }
    }

    struct MockBoard;

    impl HexpansionPins for MockBoard {
        type Pin = MockPin;

        fn claim(&mut self, _port: u8) -> Result<PinGroups<MockPin>, PinError> {
            Ok(PinGroups::from_array(core::array::from_fn(|_| MockPin {
                high: false,
            })))
        }

        fn release(&mut self, _pins: PinGroups<MockPin>) {}
    }

    fn app() -> BreadboardApp<MockBoard> {
        BreadboardApp::new(MockBoard, AppConfig::defaults())
    }

    fn press(button: Button) -> Event {
        Event::ButtonPressed(ButtonSet::single(button))
    }

    fn value_of(app: &BreadboardApp<MockBoard>, channel: Channel) -> &'static str {
        app.rows().find(|r| r.channel == channel).unwrap().value
    }

    #[test]
    fn test_detached_rendering() {
        let app = app();
        assert_eq!(app.identity_text(), "Insert or reinsert hexpansion.");
        assert!(app.rows().all(|r| r.value == "OFF"));
        assert_eq!(app.rows().count(), 9);
    }

    #[test]
    fn test_insertion_scenario() {
        let mut app = app();
        let response = app.handle_event(Event::ModuleInserted { port: 2 });

        assert!(response.redraw);
        assert!(response.fault.is_none());
        assert_eq!(app.identity_text(), "Hexpansion Two");
        assert!(app.rows().all(|r| r.value == "OFF"));
    }

    #[test]
    fn test_toggle_scenario() {
        let mut app = app();
        app.handle_event(Event::ModuleInserted { port: 1 });

        let response = app.handle_event(press(Button::Confirm));
        assert!(response.redraw);
        assert_eq!(
            response.toggled,
            Some(Toggled {
                channel: Channel::Ls1,
                before: false,
                after: true,
            })
        );
        assert_eq!(value_of(&app, Channel::Ls1), "ON");
        assert!(app
            .rows()
            .filter(|r| r.channel != Channel::Ls1)
            .all(|r| r.value == "OFF"));
    }

    #[test]
    fn test_removal_scenario() {
        let mut app = app();
        app.handle_event(Event::ModuleInserted { port: 3 });
        app.handle_event(press(Button::Confirm));

        let response = app.handle_event(Event::ModuleRemoved);
        assert!(response.redraw);
        assert_eq!(app.state(), ModuleState::Detached);
        assert_eq!(app.identity_text(), "Insert or reinsert hexpansion.");
        assert!(app.rows().all(|r| r.value == "OFF"));

        app.handle_event(press(Button::Confirm));
        assert_eq!(app.notice_text(), Some(NO_MODULE_NOTICE));
    }

    #[test]
    fn test_toggle_without_module_shows_notice() {
        let mut app = app();
        for _ in 0..7 {
            app.handle_event(press(Button::Down));
        }
        assert_eq!(app.rows().nth(app.focus()).unwrap().channel, Channel::Hs3);

        let response = app.handle_event(press(Button::Confirm));
        assert!(response.redraw);
        assert!(!response.minimise);
        assert_eq!(app.notice_text(), Some(NO_MODULE_NOTICE));
        assert!(app.controller().bound_pins().is_none());
    }

    #[test]
    fn test_notice_expires() {
        let mut app = app();
        app.handle_event(press(Button::Confirm));
        let duration = app.config().notice_ms;

        assert!(app.update(duration / 2));
        assert!(app.notice_text().is_some());

        // Expiry tick still redraws to clear the overlay
        assert!(app.update(duration));
        assert!(app.notice_text().is_none());

        assert!(!app.update(50));
    }

    #[test]
    fn test_update_idle_without_changes() {
        let mut app = app();
        // Initial frame
        assert!(app.update(0));
        assert!(!app.update(50));

        app.handle_event(press(Button::Down));
        assert!(app.update(50));
        assert!(!app.update(50));
    }

    #[test]
    fn test_toggle_reports_levels_both_ways() {
        let mut app = app();
        app.handle_event(Event::ModuleInserted { port: 1 });
        app.handle_event(press(Button::Down));
        app.handle_event(press(Button::Confirm));

        let response = app.handle_event(press(Button::Confirm));
        let toggled = response.toggled.unwrap();
        assert_eq!(toggled.channel, Channel::Ls2);
        assert!(toggled.before);
        assert!(!toggled.after);
    }

    #[test]
    fn test_non_toggle_presses_report_nothing() {
        let mut app = app();
        assert!(app.handle_event(press(Button::Confirm)).toggled.is_none());
        app.handle_event(Event::ModuleInserted { port: 1 });
        assert!(app.handle_event(press(Button::Down)).toggled.is_none());
        assert!(app.handle_event(press(Button::Left)).toggled.is_none());
    }

    #[test]
    fn test_any_button_while_detached_shows_notice() {
        for button in [Button::Left, Button::Right] {
            let mut app = app();
            let response = app.handle_event(press(button));
            assert!(response.redraw);
            assert!(!response.minimise);
            assert_eq!(app.notice_text(), Some(NO_MODULE_NOTICE));
        }
    }

    #[test]
    fn test_side_buttons_ignored_while_attached() {
        let mut app = app();
        app.handle_event(Event::ModuleInserted { port: 2 });

        let response = app.handle_event(press(Button::Right));
        assert_eq!(response, Response::default());
        assert!(app.notice_text().is_none());
        assert!(app.rows().all(|r| r.value == "OFF"));
    }

    #[test]
    fn test_cancel_minimises() {
        let mut app = app();
        app.handle_event(Event::ModuleInserted { port: 1 });
        let response = app.handle_event(press(Button::Cancel));
        assert!(response.minimise);
        assert!(!response.redraw);
    }

    #[test]
    fn test_cancel_while_detached_notices_and_minimises() {
        let mut app = app();
        let response = app.handle_event(press(Button::Cancel));
        assert!(response.minimise);
        assert!(response.redraw);
        assert_eq!(app.notice_text(), Some(NO_MODULE_NOTICE));
    }

    #[test]
    fn test_cancel_with_rejected_confirm_minimises() {
        let mut app = app();
        let buttons: ButtonSet = [Button::Confirm, Button::Cancel].into_iter().collect();
        let response = app.handle_event(Event::ButtonPressed(buttons));
        assert!(response.minimise);
        assert!(app.notice_text().is_some());
    }

    #[test]
    fn test_cancel_with_accepted_confirm_stays() {
        let mut app = app();
        app.handle_event(Event::ModuleInserted { port: 1 });
        let buttons: ButtonSet = [Button::Confirm, Button::Cancel].into_iter().collect();
        let response = app.handle_event(Event::ButtonPressed(buttons));
        assert!(!response.minimise);
        assert!(response.toggled.is_some());
        assert_eq!(value_of(&app, Channel::Ls1), "ON");
    }

    #[test]
    fn test_bad_port_reports_fault() {
        let mut app = app();
        let response = app.handle_event(Event::ModuleInserted { port: 9 });
        assert_eq!(response.fault, Some(InsertError::UnknownPort(9)));
        assert_eq!(app.state(), ModuleState::Detached);
    }

    /// Board wired to a single port; claims elsewhere fail
    struct SinglePortBoard {
        port: u8,
    }

    impl HexpansionPins for SinglePortBoard {
        type Pin = MockPin;

        fn claim(&mut self, port: u8) -> Result<PinGroups<MockPin>, PinError> {
            if port != self.port {
                return Err(PinError::PortUnavailable(port));
            }
            MockBoard.claim(port)
        }

        fn release(&mut self, _pins: PinGroups<MockPin>) {}
    }

    #[test]
    fn test_failed_claim_leaves_app_detached() {
        let mut app = BreadboardApp::new(SinglePortBoard { port: 1 }, AppConfig::defaults());
        app.handle_event(Event::ModuleInserted { port: 1 });
        assert!(app.state().is_attached());

        let response = app.handle_event(Event::ModuleInserted { port: 2 });
        assert_eq!(
            response.fault,
            Some(InsertError::Claim(PinError::PortUnavailable(2)))
        );
        assert_eq!(app.state(), ModuleState::Detached);
        assert!(app.controller().bound_pins().is_none());
        assert_eq!(app.identity_text(), "Insert or reinsert hexpansion.");

        app.handle_event(press(Button::Confirm));
        assert_eq!(app.notice_text(), Some(NO_MODULE_NOTICE));
    }
}
