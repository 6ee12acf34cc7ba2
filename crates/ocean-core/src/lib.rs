pub mod canvas;
pub mod constants;
pub mod emitter;
pub mod error;
pub mod field;
pub mod magnitude;
pub mod mapping;
pub mod params;
pub mod pool;
pub mod render;
pub mod shade;
pub mod state;
pub mod wander;

/// Identifier the tracking feed assigns to a person.
pub type PersonId = u32;

pub use canvas::PixelCanvas;
pub use emitter::{Emitter, Spawn};
pub use error::{OceanError, Result};
pub use field::{FieldSample, FieldSampler};
pub use magnitude::{MagnitudeBook, MagnitudeRange};
pub use mapping::ScreenMapping;
pub use params::{FieldParams, OceanConfig, PoolParams, RenderParams, RippleParams, Tunables};
pub use pool::{EmitterPool, Phase, PositionChange};
pub use render::{InputEvent, Ocean, PositionListener};
pub use state::{FrameGate, SimClock};
pub use wander::{IdleWander, IDLE_PERSON};
