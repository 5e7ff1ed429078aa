pub mod autoplay;
pub mod config;
pub mod constants;
pub mod gallery;
pub mod layout;
pub mod rotation;
pub mod spring;
pub mod velocity;

pub use autoplay::{Autoplay, IntervalHost};
pub use config::GalleryConfig;
pub use gallery::{GalleryState, Phase};
