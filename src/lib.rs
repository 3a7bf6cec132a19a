//! Interactive 3D dice viewer
//!
//! Shows the selected polyhedral die as a slowly spinning translucent mesh
//! with a wireframe overlay, sends roll requests to a roll server, and shows
//! the result while the die spins out.

pub mod dice3d;

pub use dice3d::*;
