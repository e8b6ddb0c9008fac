use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Action, KeyMap};

/// Default binding of winit physical keys to camera actions
///
/// W/S forward and back, A/D strafe, Space/C up and down, Q/E roll.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WinitKeyMap;

impl KeyMap<KeyCode> for WinitKeyMap {
    fn action(&self, key: KeyCode) -> Option<Action> {
        match key {
            KeyCode::KeyW => Some(Action::Forward),
            KeyCode::KeyS => Some(Action::Back),
            KeyCode::KeyA => Some(Action::Left),
            KeyCode::KeyD => Some(Action::Right),
            KeyCode::Space => Some(Action::Up),
            KeyCode::KeyC => Some(Action::Down),
            KeyCode::KeyQ => Some(Action::RollCcw),
            KeyCode::KeyE => Some(Action::RollCw),
            _ => None,
        }
    }
}

impl KeyMap<PhysicalKey> for WinitKeyMap {
    fn action(&self, key: PhysicalKey) -> Option<Action> {
        match key {
            PhysicalKey::Code(code) => self.action(code),
            PhysicalKey::Unidentified(_) => None,
        }
    }
}
