use placeholder_svg::{Flags, PlaceholderParams, render_placeholder};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceholderRenderOptions {
    radius: Option<u32>,
    dots: Option<bool>,
    gradient: Option<bool>,
    label: Option<bool>,
}

fn build_params(
    width: u32,
    height: u32,
    color: Option<String>,
    options: PlaceholderRenderOptions,
) -> PlaceholderParams {
    let mut params = PlaceholderParams::new(width.to_string(), height.to_string()).with_flags(Flags {
        dots: options.dots.unwrap_or(false),
        gradient: options.gradient.unwrap_or(false),
        label: options.label.unwrap_or(false),
    });
    params.color = color;
    if let Some(radius) = options.radius {
        params = params.with_radius(radius.to_string());
    }
    params
}

#[wasm_bindgen]
pub fn render_placeholder_svg(
    width: u32,
    height: u32,
    color: Option<String>,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<PlaceholderRenderOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        PlaceholderRenderOptions::default()
    };

    render_placeholder(&build_params(width, height, color, options))
        .map_err(|error| JsValue::from_str(&error.to_string()))
}
