pub mod color;
pub mod telemetry;

pub use color::Tint;
pub use color::init as color_init;
