// DOM wiring and styling constants used by the web frontend.

// Auto-mount discovery and per-element configuration attributes
pub const AUTO_MOUNT_SELECTOR: &str = "[data-rolling-gallery]";
pub const ATTR_AUTOPLAY: &str = "data-autoplay";
pub const ATTR_PAUSE_ON_HOVER: &str = "data-pause-on-hover";
pub const ATTR_IMAGES: &str = "data-images";

// Used when `window.innerWidth` is unavailable; classifies as a large viewport
pub const FALLBACK_VIEWPORT_WIDTH_PX: f64 = 1024.0;

// Stylesheet injected once per document
pub const STYLE_ELEMENT_ID: &str = "rolling-gallery-style";

// Element classes
pub const CLASS_CONTAINER: &str = "rg-container";
pub const CLASS_EDGE_LEFT: &str = "rg-edge rg-edge-left";
pub const CLASS_EDGE_RIGHT: &str = "rg-edge rg-edge-right";
pub const CLASS_STAGE: &str = "rg-stage";
pub const CLASS_CYLINDER: &str = "rg-cylinder";
pub const CLASS_FACE: &str = "rg-face";
pub const CLASS_IMAGE: &str = "rg-image";
pub const CLASS_DRAGGING: &str = "rg-dragging";

pub const IMAGE_ALT: &str = "gallery";
