pub mod animation;
pub mod collision;
pub mod kicks;
pub mod movement;
pub mod physics;
pub mod scoring;

pub use animation::*;
pub use collision::*;
pub use kicks::*;
pub use movement::*;
pub use physics::*;
pub use scoring::*;
