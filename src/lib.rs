pub mod diff;
pub mod highlight;
pub mod pairing;
pub mod palette;
pub mod render;
pub mod settings;
pub mod word_diff;

pub use render::Renderer;
