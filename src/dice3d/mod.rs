pub mod meshes;
pub mod roll_client;
pub mod systems;
pub mod types;

pub use meshes::*;
pub use roll_client::*;
pub use systems::*;
pub use types::*;
