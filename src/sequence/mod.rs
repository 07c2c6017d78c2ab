pub mod frames;
pub mod loader;
pub mod state;
