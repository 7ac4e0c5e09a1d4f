use serde::{Deserialize, Serialize};

/// The controls held during one tick.
///
/// The driver samples key state once per tick and passes the same frame to
/// every simulation step it runs that frame. Flags are level-triggered:
/// `jump` means the key is down, not that it was just pressed. Whether a
/// held control retriggers is up to the simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}
