use std::fmt;

/// Color used when the request does not name one.
pub const DEFAULT_COLOR: &str = "333333";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses exactly six hex digits (no `#`).
    pub fn from_hex6(hex: &str) -> Option<Self> {
        let bytes = hex.as_bytes();
        if bytes.len() != 6 {
            return None;
        }
        let channel = |hi: u8, lo: u8| -> Option<u8> { Some(nibble(hi)? << 4 | nibble(lo)?) };
        Some(Self {
            r: channel(bytes[0], bytes[1])?,
            g: channel(bytes[2], bytes[3])?,
            b: channel(bytes[4], bytes[5])?,
        })
    }

    /// BT.601 luma on the 0-255 scale.
    pub fn brightness(&self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    /// Luma normalized to `[0, 1]`.
    pub fn luminance(&self) -> f64 {
        self.brightness() / 255.0
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Channels after a multiply that is not clamped back into a byte.
///
/// Each channel is written with `{:02x}`, so anything above `0xff` widens
/// to three hex digits in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WideRgb {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl WideRgb {
    pub fn scaled(base: Rgb, factor: f64) -> Self {
        let scale = |c: u8| (f64::from(c) * factor) as u32;
        Self {
            r: scale(base.r),
            g: scale(base.g),
            b: scale(base.b),
        }
    }
}

impl From<Rgb> for WideRgb {
    fn from(value: Rgb) -> Self {
        Self {
            r: u32::from(value.r),
            g: u32::from(value.g),
            b: u32::from(value.b),
        }
    }
}

impl fmt::Display for WideRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Turns a user supplied color into six hex digits.
///
/// Empty input falls back to [`DEFAULT_COLOR`], one leading `#` is dropped
/// and a three digit shorthand is expanded by doubling each digit. Returns
/// `None` for any other length or for non-hex characters.
pub fn normalize_hex(raw: &str) -> Option<String> {
    let raw = if raw.is_empty() { DEFAULT_COLOR } else { raw };
    let hex = raw.strip_prefix('#').unwrap_or(raw);
    if !hex.bytes().all(|b| nibble(b).is_some()) {
        return None;
    }
    match hex.len() {
        6 => Some(hex.to_string()),
        3 => Some(hex.chars().flat_map(|c| [c, c]).collect()),
        _ => None,
    }
}

/// Normalizes and parses in one step.
pub fn parse_hex(raw: &str) -> Option<Rgb> {
    normalize_hex(raw).and_then(|hex| Rgb::from_hex6(&hex))
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
