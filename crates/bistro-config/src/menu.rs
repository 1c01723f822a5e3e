use serde::Deserialize;

/// Menu scanning configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuConfig {
    /// Largest accepted upload body
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// Media type used for the image data URI when the upload has no usable one
    #[serde(default = "default_image_type")]
    pub default_image_type: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
            default_image_type: default_image_type(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_upload_bytes() -> usize {
    20 << 20
}

fn default_image_type() -> String {
    "image/jpeg".to_string()
}
