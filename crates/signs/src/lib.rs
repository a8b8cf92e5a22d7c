pub mod background;
pub mod builder;
pub mod classify;
pub mod members;

pub use background::background_signs;
pub use builder::build_signs;
pub use classify::classify;
pub use members::extract_members;
