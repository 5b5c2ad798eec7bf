// Filter tuning constants shared by the web and native frontends.

// Initial uniform values handed to the filter
pub const INITIAL_TIME: f64 = 0.0;
pub const INITIAL_GRID_SIZE: f32 = 5.0;
pub const INITIAL_BLUR: f32 = 1.5; // above BLUR_MAX until the first drag clamps it
pub const INITIAL_DISTORT: f32 = 2.5;

// Allowed ranges after a drag update
pub const GRID_SIZE_MIN: f32 = 2.0;
pub const GRID_SIZE_MAX: f32 = 20.0;
pub const DISTORT_MIN: f32 = -5.0;
pub const DISTORT_MAX: f32 = 5.0;
pub const BLUR_MIN: f32 = 0.02;
pub const BLUR_MAX: f32 = 1.0;

// Drag gains (uniform units per stage pixel)
pub const GRID_SIZE_PER_PX: f32 = 0.025; // horizontal drag
pub const DISTORT_PER_PX: f32 = 0.025; // vertical drag
pub const BLUR_PER_PX: f32 = 0.001; // vertical drag

// Animation step added to `time` on every frame tick
pub const TIME_STEP: f64 = 0.005;

// Resource names
pub const BACKGROUND_KEY: &str = "bg_jpg";
pub const VERTEX_SHADER_KEY: &str = "vertex_shader";
pub const FRAGMENT_SHADER_KEY: &str = "fragment_shader";
pub const PRELOAD_GROUP: &str = "preload";
pub const DEFAULT_RESOURCE_ROOT: &str = "resource";
pub const BACKGROUND_URL: &str = "assets/bg.jpg";

// Placeholder background used when the image cannot be loaded
pub const PLACEHOLDER_SIZE: [u32; 2] = [512, 512];

// On-screen hint
pub const INFO_TEXT: &str = "Drag mouse left button:\n\
                             Horizontally to adjust dense/size of droplets\n\
                             Vertically to adjust humidity blur";
