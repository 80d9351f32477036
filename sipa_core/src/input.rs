//! Keyboard input mapping for two players on one keyboard

use serde::{Deserialize, Serialize};

use crate::components::PlayerId;
use crate::systems::MoveKeys;

/// Snapshot of held actions for both players
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub player1_left: bool,
    pub player1_right: bool,
    pub player1_kick: bool,
    pub player1_dash: bool,
    pub player2_left: bool,
    pub player2_right: bool,
    pub player2_kick: bool,
    pub player2_dash: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Kick,
    Dash,
}

impl InputState {
    pub fn move_keys(&self, id: PlayerId) -> MoveKeys {
        match id {
            PlayerId::One => MoveKeys::new(self.player1_left, self.player1_right),
            PlayerId::Two => MoveKeys::new(self.player2_left, self.player2_right),
        }
    }

    pub fn kick(&self, id: PlayerId) -> bool {
        match id {
            PlayerId::One => self.player1_kick,
            PlayerId::Two => self.player2_kick,
        }
    }

    pub fn dash(&self, id: PlayerId) -> bool {
        match id {
            PlayerId::One => self.player1_dash,
            PlayerId::Two => self.player2_dash,
        }
    }

    fn slot(&mut self, id: PlayerId, action: Action) -> &mut bool {
        match (id, action) {
            (PlayerId::One, Action::Left) => &mut self.player1_left,
            (PlayerId::One, Action::Right) => &mut self.player1_right,
            (PlayerId::One, Action::Kick) => &mut self.player1_kick,
            (PlayerId::One, Action::Dash) => &mut self.player1_dash,
            (PlayerId::Two, Action::Left) => &mut self.player2_left,
            (PlayerId::Two, Action::Right) => &mut self.player2_right,
            (PlayerId::Two, Action::Kick) => &mut self.player2_kick,
            (PlayerId::Two, Action::Dash) => &mut self.player2_dash,
        }
    }
}

/// Default bindings: player one on WASD, player two on the arrow keys
pub fn map_key(key: &str) -> Option<(PlayerId, Action)> {
    match key {
        "a" | "A" => Some((PlayerId::One, Action::Left)),
        "d" | "D" => Some((PlayerId::One, Action::Right)),
        "w" | "W" => Some((PlayerId::One, Action::Kick)),
        "s" | "S" => Some((PlayerId::One, Action::Dash)),
        "ArrowLeft" => Some((PlayerId::Two, Action::Left)),
        "ArrowRight" => Some((PlayerId::Two, Action::Right)),
        "ArrowUp" => Some((PlayerId::Two, Action::Kick)),
        "ArrowDown" => Some((PlayerId::Two, Action::Dash)),
        _ => None,
    }
}

/// Handle key down event
pub fn handle_key_down(input: InputState, key: &str) -> InputState {
    set_key(input, key, true)
}

/// Handle key up event
pub fn handle_key_up(input: InputState, key: &str) -> InputState {
    set_key(input, key, false)
}

fn set_key(mut input: InputState, key: &str, pressed: bool) -> InputState {
    if let Some((id, action)) = map_key(key) {
        *input.slot(id, action) = pressed;
    }
    input
}
