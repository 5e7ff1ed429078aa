use super::constants::DEFAULT_IMAGES;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid gallery config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid boolean for {attr}: {value:?}")]
    Bool { attr: &'static str, value: String },
    #[error("invalid image list in data-images: {0}")]
    Images(serde_json::Error),
}

/// Gallery inputs, fixed for the lifetime of a mounted gallery.
///
/// `images: None` selects the built-in set; `Some(vec![])` is honoured as an
/// empty gallery.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GalleryConfig {
    pub autoplay: bool,
    pub pause_on_hover: bool,
    pub images: Option<Vec<String>>,
}

impl GalleryConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Build from `data-*` attribute values as read off a host element.
    pub fn from_attributes(
        autoplay: Option<&str>,
        pause_on_hover: Option<&str>,
        images: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let images = match images {
            Some(raw) => Some(serde_json::from_str::<Vec<String>>(raw).map_err(ConfigError::Images)?),
            None => None,
        };
        Ok(Self {
            autoplay: parse_flag("data-autoplay", autoplay)?,
            pause_on_hover: parse_flag("data-pause-on-hover", pause_on_hover)?,
            images,
        })
    }

    pub fn image_urls(&self) -> Vec<String> {
        match &self.images {
            Some(list) => list.clone(),
            None => DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[inline]
    pub fn pauses_on_hover(&self) -> bool {
        self.autoplay && self.pause_on_hover
    }
}

// HTML boolean attribute semantics: present means true unless spelled "false".
fn parse_flag(attr: &'static str, value: Option<&str>) -> Result<bool, ConfigError> {
    match value.map(str::trim) {
        None => Ok(false),
        Some("") | Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(ConfigError::Bool {
            attr,
            value: other.to_string(),
        }),
    }
}
