//! Roll Client Module
//!
//! Sends roll requests to the roll server off the frame loop and feeds the
//! results back into the result panel. Each request also starts the roll
//! animation; the animation and the request run independently of each other.

mod service;
mod state;
mod systems;
mod ui;

pub use service::*;
pub use state::*;
pub use systems::*;
pub use ui::*;
