use crate::color::{Rgb, WideRgb};
use crate::request::Flags;

/// Foreground for the centered size label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelColor {
    /// Label stays in the markup but is fully transparent.
    Hidden,
    Dark,
    Light,
}

impl LabelColor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            LabelColor::Hidden => "#ffffff00",
            LabelColor::Dark => "#111111",
            LabelColor::Light => "#eeeeee",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedPalette {
    pub base: Rgb,
    pub gradient_stop: Rgb,
    pub dot_tint: WideRgb,
    pub label: LabelColor,
}

pub fn derive(base: Rgb, flags: &Flags) -> DerivedPalette {
    let gradient_stop = if flags.gradient {
        lighter_shade(base)
    } else {
        base
    };
    let dot_tint = if flags.dots {
        dot_tint(base)
    } else {
        WideRgb::from(base)
    };
    let label = if flags.label {
        contrast_color(base)
    } else {
        LabelColor::Hidden
    };
    DerivedPalette {
        base,
        gradient_stop,
        dot_tint,
        label,
    }
}

/// Gradient end stop. Dark colors get large boosts, bright ones are pulled
/// down so the stop does not clip to white.
pub fn lighter_shade(base: Rgb) -> Rgb {
    let brightness = base.brightness();
    tracing::debug!(brightness, color = %base, "gradient stop brightness");
    let factor = lighter_factor(brightness);
    let scale = |c: u8| (f64::from(c) * factor).min(255.0) as u8;
    Rgb::new(scale(base.r), scale(base.g), scale(base.b))
}

fn lighter_factor(brightness: f64) -> f64 {
    if brightness < 10.0 {
        60.0
    } else if brightness < 30.0 {
        3.0
    } else if brightness < 60.0 {
        2.0
    } else if brightness < 100.0 {
        1.75
    } else if brightness < 150.0 {
        1.5
    } else {
        0.8
    }
}

/// Fill for the dot texture. Not clamped: see [`WideRgb`].
pub fn dot_tint(base: Rgb) -> WideRgb {
    let factor = if base.brightness() < 80.0 { 1.8 } else { 0.55 };
    WideRgb::scaled(base, factor)
}

pub fn contrast_color(base: Rgb) -> LabelColor {
    if base.luminance() > 0.5 {
        LabelColor::Dark
    } else {
        LabelColor::Light
    }
}
