pub mod analysis;
pub mod crop_profile;
pub mod input;
pub mod risk;
pub mod telemetry;

pub use analysis::*;
pub use crop_profile::*;
pub use input::*;
pub use risk::*;
pub use telemetry::*;
