#![no_std]

pub mod color;
pub mod controller;
pub mod dmx;
pub mod error;
pub mod fixture;
pub mod frame;
mod log;
pub mod mailbox;
pub mod resolver;
pub mod rig;
pub mod scene;
pub mod slot;

pub use controller::{FrameSink, PollOutcome, SceneController};
pub use dmx::{Channel, DMX_UNIVERSE_SIZE, Universe};
pub use error::{AuthoringError, InvalidScene};
pub use fixture::{FixtureKind, FixtureLook, FixturePatch};
pub use frame::Frame;
pub use mailbox::{SceneMailbox, SceneReceiver, SceneRequest, SceneSender};
pub use resolver::{InvalidScenePolicy, ResolverConfig, SceneResolver, resolve_row};
pub use scene::{MAX_SCENES, SceneRow, SceneTable};
pub use slot::SlotTable;

pub use color::Rgb;
