/// Interaction and layout tuning for the rolling gallery.
///
/// These express the widget's intended feel (drag sensitivity, spring
/// response, autoplay speed) and keep magic numbers out of the code.
// Viewport classification (logical px, inclusive)
pub const SMALL_VIEWPORT_MAX_PX: f64 = 640.0;

// Cylinder circumference per viewport class (px)
pub const CYLINDER_WIDTH_SMALL: f64 = 1100.0;
pub const CYLINDER_WIDTH_LARGE: f64 = 1800.0;

// Degrees of rotation per px of horizontal drag (and per px/s of release velocity)
pub const DRAG_FACTOR: f64 = 0.05;

// Horizontal movement needed before a press becomes a drag
pub const DRAG_THRESHOLD_PX: f64 = 3.0;

// Window over which release velocity is measured
pub const VELOCITY_WINDOW_MS: f64 = 100.0;

// Settle spring
pub const SPRING_STIFFNESS: f64 = 60.0;
pub const SPRING_DAMPING: f64 = 20.0;
pub const SPRING_MASS: f64 = 0.1;
pub const SPRING_SUBSTEP_SEC: f64 = 0.001;
pub const SPRING_MAX_FRAME_SEC: f64 = 0.1; // clamp long frames (tab switch)
pub const SPRING_REST_DELTA_DEG: f64 = 0.01;
pub const SPRING_REST_SPEED_DEG: f64 = 0.1; // deg/s

// Autoplay
pub const AUTOPLAY_TICK_MS: i32 = 16;
pub const AUTOPLAY_STEP_DEG: f64 = 0.5; // subtracted per tick

// Built-in image set used when no image list is configured
pub const DEFAULT_IMAGES: [&str; 10] = [
    "https://images.unsplash.com/photo-1528109966604-5a6a4a964e8d?q=80&w=3024&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1570675335622-555246765422?q=80&w=3387&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1593508512255-86ab42a8e620?q=80&w=3556&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1610465299996-30f240ac2b1c?q=80&w=3456&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1550745165-9bc0b252726f?q=80&w=3456&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1507207611509-9807c64cda4b?q=80&w=3456&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1611604548018-d56bbd85d681?q=80&w=3456&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1551381297-86288b052ea6?q=80&w=3456&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1516205651411-a416745265dd?q=80&w=3556&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1575089976121-8ed7b2a54265?q=80&w=3556&auto=format&fit=crop",
];
