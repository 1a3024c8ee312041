use crate::color::{Rgb, normalize_hex};
use thiserror::Error;

/// Largest accepted width or height.
pub const MAX_DIMENSION: i64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid width")]
    InvalidWidth,
    #[error("Invalid height")]
    InvalidHeight,
    #[error("Invalid color format")]
    InvalidColor,
}

impl ValidationError {
    /// Both dimension failures share one category.
    pub fn is_dimension(&self) -> bool {
        matches!(self, ValidationError::InvalidWidth | ValidationError::InvalidHeight)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub dots: bool,
    pub gradient: bool,
    pub label: bool,
}

impl Flags {
    /// Only the literal string `"true"` turns a flag on.
    pub fn from_query(dots: Option<&str>, gradient: Option<&str>, label: Option<&str>) -> Self {
        let on = |value: Option<&str>| value == Some("true");
        Self {
            dots: on(dots),
            gradient: on(gradient),
            label: on(label),
        }
    }
}

/// Raw request parameters, exactly as they arrive from the path and query.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderParams {
    pub width: String,
    pub height: String,
    pub color: Option<String>,
    pub radius: Option<String>,
    pub dots: Option<String>,
    pub gradient: Option<String>,
    pub label: Option<String>,
}

impl PlaceholderParams {
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_radius(mut self, radius: impl Into<String>) -> Self {
        self.radius = Some(radius.into());
        self
    }

    pub fn with_flags(mut self, flags: Flags) -> Self {
        let encode = |on: bool| Some(on.to_string());
        self.dots = encode(flags.dots);
        self.gradient = encode(flags.gradient);
        self.label = encode(flags.label);
        self
    }

    pub fn flags(&self) -> Flags {
        Flags::from_query(
            self.dots.as_deref(),
            self.gradient.as_deref(),
            self.label.as_deref(),
        )
    }

    pub fn validate(&self) -> Result<PlaceholderRequest, ValidationError> {
        validate(
            &self.width,
            &self.height,
            self.color.as_deref(),
            self.radius.as_deref(),
            self.flags(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderRequest {
    pub width: u32,
    pub height: u32,
    pub color: Rgb,
    pub border_radius: u32,
    pub flags: Flags,
}

pub fn validate(
    width: &str,
    height: &str,
    color: Option<&str>,
    radius: Option<&str>,
    flags: Flags,
) -> Result<PlaceholderRequest, ValidationError> {
    let width = parse_dimension(width).ok_or(ValidationError::InvalidWidth)?;
    let height = parse_dimension(height).ok_or(ValidationError::InvalidHeight)?;
    let border_radius = clamp_radius(radius, width, height);
    let hex = normalize_hex(color.unwrap_or_default()).ok_or(ValidationError::InvalidColor)?;
    let color = Rgb::from_hex6(&hex).ok_or(ValidationError::InvalidColor)?;
    Ok(PlaceholderRequest {
        width,
        height,
        color,
        border_radius,
        flags,
    })
}

fn parse_dimension(raw: &str) -> Option<u32> {
    let value: i64 = raw.parse().ok()?;
    if value <= 0 || value > MAX_DIMENSION {
        return None;
    }
    u32::try_from(value).ok()
}

/// Anything unparsable or outside `0..=min(w, h) / 2` becomes 0.
fn clamp_radius(raw: Option<&str>, width: u32, height: u32) -> u32 {
    let limit = i64::from((width / 2).min(height / 2));
    match raw.unwrap_or("0").parse::<i64>() {
        Ok(radius) if (0..=limit).contains(&radius) => radius as u32,
        _ => 0,
    }
}
