use serde::{Deserialize, Serialize};

/// Presentation constants of the composed placeholder document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub font_weight: String,
    pub dot_cell: u32,
    pub dot_radius: f32,
    pub dot_opacity: f32,
    pub shadow_blur: f32,
    pub shadow_dx: f32,
    pub shadow_dy: f32,
    pub shadow_color: String,
    pub shadow_opacity: f32,
    pub mask_fill: String,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            font_size: 24.0,
            font_weight: "bold".to_string(),
            dot_cell: 20,
            dot_radius: 1.2,
            dot_opacity: 0.4,
            shadow_blur: 2.0,
            shadow_dx: 0.0,
            shadow_dy: 1.0,
            shadow_color: "#000000".to_string(),
            shadow_opacity: 0.2,
            mask_fill: "white".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
