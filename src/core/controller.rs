/// Logical input intent, independent of any host key code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
    RollCw,
    RollCcw,
}

impl Action {
    pub const COUNT: usize = 8;

    pub const ALL: [Action; Action::COUNT] = [
        Action::Forward,
        Action::Back,
        Action::Left,
        Action::Right,
        Action::Up,
        Action::Down,
        Action::RollCw,
        Action::RollCcw,
    ];

    /// Slot of this action in an `ActionState`
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Pressed/released flag per action
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActionState {
    pressed: [bool; Action::COUNT],
}

impl ActionState {
    pub fn set(&mut self, action: Action, pressed: bool) {
        self.pressed[action.index()] = pressed;
    }

    pub fn is_down(&self, action: Action) -> bool {
        self.pressed[action.index()]
    }

    pub fn any(&self) -> bool {
        self.pressed.iter().any(|&p| p)
    }

    pub fn clear(&mut self) {
        self.pressed = [false; Action::COUNT];
    }

    /// Net two opposing actions into +1, -1 or 0
    pub fn axis(&self, positive: Action, negative: Action) -> f32 {
        to_direction(self.is_down(positive), self.is_down(negative))
    }
}

const fn to_direction(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

/// Translates host key codes into logical actions.
///
/// Hosts supply one of these for their own key-code space; the camera only
/// ever sees the resulting `Action`.
pub trait KeyMap<K> {
    /// Action bound to `key`, or `None` if the key is not bound
    fn action(&self, key: K) -> Option<Action>;
}

impl<K, F> KeyMap<K> for F
where
    F: Fn(K) -> Option<Action>,
{
    fn action(&self, key: K) -> Option<Action> {
        self(key)
    }
}
