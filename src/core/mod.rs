pub mod clock;
pub mod controller;
pub mod input_adapter;
pub mod telemetry;

pub use clock::Clock;
pub use controller::{Action, ActionState, KeyMap};
pub use input_adapter::WinitKeyMap;
pub use telemetry::{FrameStats, ReportInterval};
