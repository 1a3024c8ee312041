use crate::palette::{DerivedPalette, derive};
use crate::request::{PlaceholderParams, PlaceholderRequest, ValidationError};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

/// Validate, derive and compose in one go with the classic theme.
pub fn render_placeholder(params: &PlaceholderParams) -> Result<String, ValidationError> {
    let request = params.validate()?;
    let palette = derive(request.color, &request.flags);
    Ok(render_svg(&request, &palette, &Theme::classic()))
}

/// Composes the fixed placeholder skeleton.
///
/// Gradient and dot layers are always emitted. With their flags off they
/// degrade to a flat gradient and a 0x0 pattern cell, and the label is
/// written with a transparent fill. The dot circle keeps the theme opacity
/// when dots are off; the empty cell already hides it.
pub fn render_svg(request: &PlaceholderRequest, palette: &DerivedPalette, theme: &Theme) -> String {
    let mut svg = String::new();
    let width = request.width;
    let height = request.height;
    let radius = request.border_radius;
    let cell = if request.flags.dots { theme.dot_cell } else { 0 };
    let center = theme.dot_cell / 2;

    svg.push_str(&format!(
        "<svg width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" xmlns=\"http://www.w3.org/2000/svg\">",
    ));

    svg.push_str("<defs>");
    svg.push_str("<linearGradient id=\"mainGrad\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">");
    svg.push_str(&format!(
        "<stop offset=\"0%\" style=\"stop-color:#{};stop-opacity:1\"/>",
        palette.base
    ));
    svg.push_str(&format!(
        "<stop offset=\"100%\" style=\"stop-color:#{};stop-opacity:1\"/>",
        palette.gradient_stop
    ));
    svg.push_str("</linearGradient>");

    svg.push_str(&format!(
        "<pattern id=\"dots\" width=\"{cell}\" height=\"{cell}\" patternUnits=\"userSpaceOnUse\"><circle cx=\"{center}\" cy=\"{center}\" r=\"{}\" fill=\"#{}\" opacity=\"{}\"/></pattern>",
        theme.dot_radius, palette.dot_tint, theme.dot_opacity
    ));

    svg.push_str(&shadow_filter(theme));

    svg.push_str(&format!(
        "<mask id=\"roundedMask\"><rect width=\"{width}\" height=\"{height}\" rx=\"{radius}\" ry=\"{radius}\" fill=\"{}\"/></mask>",
        theme.mask_fill
    ));
    svg.push_str("</defs>");

    svg.push_str("<g mask=\"url(#roundedMask)\">");
    svg.push_str(&format!(
        "<rect width=\"{width}\" height=\"{height}\" fill=\"url(#mainGrad)\"/>"
    ));
    svg.push_str(&format!(
        "<rect width=\"{width}\" height=\"{height}\" fill=\"url(#dots)\"/>"
    ));
    svg.push_str("</g>");

    svg.push_str(&format!(
        "<text x=\"50%\" y=\"50%\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"{}\" font-weight=\"{}\" font-size=\"{}\" fill=\"{}\" filter=\"url(#softShadow)\">{width}x{height}</text>",
        escape_xml(&theme.font_family),
        escape_xml(&theme.font_weight),
        theme.font_size,
        palette.label.as_svg()
    ));

    svg.push_str("</svg>");
    svg
}

fn shadow_filter(theme: &Theme) -> String {
    format!(
        "<filter id=\"softShadow\"><feGaussianBlur in=\"SourceAlpha\" stdDeviation=\"{}\"/><feOffset dx=\"{}\" dy=\"{}\" result=\"offsetblur\"/><feFlood flood-color=\"{}\" flood-opacity=\"{}\"/><feComposite in2=\"offsetblur\" operator=\"in\"/><feMerge><feMergeNode/><feMergeNode in=\"SourceGraphic\"/></feMerge></filter>",
        theme.shadow_blur,
        theme.shadow_dx,
        theme.shadow_dy,
        escape_xml(&theme.shadow_color),
        theme.shadow_opacity
    )
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
