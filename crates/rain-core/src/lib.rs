pub mod constants;
pub mod controller;
pub mod filter;
pub mod lifecycle;
pub mod render;
pub mod resources;
pub mod scene;

pub use constants::*;
pub use controller::*;
pub use filter::*;
pub use lifecycle::*;
pub use render::FilterRenderer;
pub use resources::*;
pub use scene::*;

// Shaders bundled as string constants, registered under their resource names
pub static VERTEX_WGSL: &str = include_str!("../shaders/rain_vertex.wgsl");
pub static FRAGMENT_WGSL: &str = include_str!("../shaders/rain_fragment.wgsl");
