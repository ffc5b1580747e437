use serde::{Deserialize, Serialize};

fn default_show_image_status() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_show_image_status")]
    pub show_image_status: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_image_status: default_show_image_status(),
        }
    }
}
