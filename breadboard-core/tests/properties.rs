//! Property tests for the pin-state controller

use breadboard_core::channel::{Channel, Port, CHANNEL_COUNT};
use breadboard_core::config::AppConfig;
use breadboard_core::format::INSERT_PROMPT;
use breadboard_core::state::{Event, ModuleState};
use breadboard_core::{BreadboardApp, InsertError, PinController};
use breadboard_hal::{ExpansionPin, HexpansionPins, PinError, PinGroups};
use proptest::prelude::*;

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

/// Board where every valid port is wired and pins power up at `initial`
struct MockBoard {
    initial: [bool; CHANNEL_COUNT],
    outstanding: bool,
}

impl MockBoard {
    fn new(initial: [bool; CHANNEL_COUNT]) -> Self {
        Self {
            initial,
            outstanding: false,
        }
    }
}

impl HexpansionPins for MockBoard {
    type Pin = MockPin;

    fn claim(&mut self, _port: u8) -> Result<PinGroups<MockPin>, PinError> {
        if self.outstanding {
            return Err(PinError::AlreadyClaimed);
        }
        self.outstanding = true;
        let initial = self.initial;
        Ok(PinGroups::from_array(core::array::from_fn(|i| MockPin {
            high: initial[i],
        })))
    }

    fn release(&mut self, _pins: PinGroups<MockPin>) {
        self.outstanding = false;
    }
}

/// Board with a single wired port; claims for any other port fail
struct SinglePortBoard {
    wired: u8,
    claimed: bool,
}

impl HexpansionPins for SinglePortBoard {
    type Pin = MockPin;

    fn claim(&mut self, port: u8) -> Result<PinGroups<MockPin>, PinError> {
        if port != self.wired {
            return Err(PinError::PortUnavailable(port));
        }
        if self.claimed {
            return Err(PinError::AlreadyClaimed);
        }
        self.claimed = true;
        Ok(PinGroups::from_array(core::array::from_fn(|_| MockPin {
            high: false,
        })))
    }

    fn release(&mut self, _pins: PinGroups<MockPin>) {
        self.claimed = false;
    }
}

fn module_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        (0u8..9).prop_map(|port| Event::ModuleInserted { port }),
        Just(Event::ModuleRemoved),
    ]
}

fn channel() -> impl Strategy<Value = Channel> {
    (0..CHANNEL_COUNT).prop_map(|i| Channel::from_index(i).unwrap())
}

proptest! {
    #[test]
    fn state_matches_last_valid_module_event(events in prop::collection::vec(module_event(), 0..32)) {
        let mut app = BreadboardApp::new(MockBoard::new([false; CHANNEL_COUNT]), AppConfig::defaults());
        let mut expected = ModuleState::Detached;

        for event in events {
            app.handle_event(event);
            expected = match event {
                Event::ModuleInserted { port } => match Port::new(port) {
                    Some(port) => ModuleState::Attached(port),
                    None => expected,
                },
                Event::ModuleRemoved => ModuleState::Detached,
                Event::ButtonPressed(_) => expected,
            };
        }

        prop_assert_eq!(app.state(), expected);
        prop_assert_eq!(app.controller().bound_pins().is_some(), expected.is_attached());
        if !expected.is_attached() {
            prop_assert!(app.rows().all(|r| r.value == "OFF"));
            let identity = app.identity_text();
            prop_assert_eq!(identity.as_str(), INSERT_PROMPT);
        }
    }

    #[test]
    fn failed_claim_always_ends_detached(
        wired in 1u8..=6,
        events in prop::collection::vec(module_event(), 1..32),
    ) {
        let mut app = BreadboardApp::new(SinglePortBoard { wired, claimed: false }, AppConfig::defaults());

        for event in events {
            let response = app.handle_event(event);
            // Unknown ports leave the current state alone
            if matches!(response.fault, None | Some(InsertError::UnknownPort(_))) {
                continue;
            }

            prop_assert_eq!(app.state(), ModuleState::Detached);
            prop_assert!(app.controller().bound_pins().is_none());
            prop_assert!(!app.controller().provider().claimed);
            let identity = app.identity_text();
            prop_assert_eq!(identity.as_str(), INSERT_PROMPT);
        }
    }

    #[test]
    fn double_toggle_restores_level(
        initial in prop::array::uniform9(any::<bool>()),
        port in 1u8..=6,
        ch in channel(),
    ) {
        let mut ctrl = PinController::new(MockBoard::new(initial));
        ctrl.on_module_inserted(port).unwrap();

        let before = ctrl.read_level(ch).unwrap();
        ctrl.toggle(ch).unwrap();
        ctrl.toggle(ch).unwrap();
        prop_assert_eq!(ctrl.read_level(ch), Some(before));
        prop_assert_eq!(ctrl.snapshot().level(ch), before);
    }

    #[test]
    fn snapshot_mirrors_physical_levels(
        initial in prop::array::uniform9(any::<bool>()),
        toggles in prop::collection::vec(channel(), 0..16),
    ) {
        let mut ctrl = PinController::new(MockBoard::new(initial));
        ctrl.on_module_inserted(1).unwrap();

        for ch in Channel::ALL {
            prop_assert_eq!(ctrl.snapshot().level(ch), initial[ch.index()]);
        }

        for ch in toggles {
            ctrl.toggle(ch).unwrap();
        }

        for ch in Channel::ALL {
            let physical = ctrl.read_level(ch).unwrap();
            prop_assert_eq!(ctrl.snapshot().level(ch), physical);
        }
    }

    #[test]
    fn toggle_rejected_while_detached(ch in channel()) {
        let mut ctrl = PinController::new(MockBoard::new([false; CHANNEL_COUNT]));
        prop_assert!(ctrl.toggle(ch).is_err());
        prop_assert!(ctrl.bound_pins().is_none());
    }
}
