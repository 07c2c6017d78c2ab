pub mod composite;
pub mod cover;
pub mod renderer;
pub mod surface;
