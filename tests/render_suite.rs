use placeholder_svg::{
    Flags, LabelColor, PlaceholderParams, Rgb, Theme, ValidationError, derive, render_placeholder,
    render_svg, validate,
};

fn assert_valid_svg(svg: &str, case: &str) {
    assert!(svg.starts_with("<svg"), "{case}: missing <svg tag");
    assert!(svg.ends_with("</svg>"), "{case}: missing </svg tag");
    assert_eq!(
        svg.matches('<').count(),
        svg.matches('>').count(),
        "{case}: unbalanced angle brackets"
    );
}

fn declared(svg: &str, attr: &str) -> String {
    let needle = format!(" {attr}=\"");
    let start = svg.find(&needle).expect("attribute present") + needle.len();
    let end = svg[start..].find('"').expect("attribute closed") + start;
    svg[start..end].to_string()
}

#[test]
fn declared_size_matches_request() {
    for (w, h) in [(1, 1), (1, 3000), (3000, 1), (3000, 3000), (640, 480), (17, 923)] {
        let svg = render_placeholder(
            &PlaceholderParams::new(w.to_string(), h.to_string()).with_color("4a90d9"),
        )
        .expect("valid dimensions render");
        let case = format!("{w}x{h}");
        assert_valid_svg(&svg, &case);
        assert_eq!(declared(&svg, "width"), w.to_string(), "{case}");
        assert_eq!(declared(&svg, "height"), h.to_string(), "{case}");
        assert!(svg.contains(&format!("viewBox=\"0 0 {w} {h}\"")), "{case}");
        assert!(svg.contains(&format!(">{w}x{h}</text>")), "{case}");
    }
}

#[test]
fn out_of_range_dimensions_are_rejected() {
    for bad in ["0", "3001", "wide", "-10"] {
        assert_eq!(
            render_placeholder(&PlaceholderParams::new(bad, "10")),
            Err(ValidationError::InvalidWidth)
        );
        assert_eq!(
            render_placeholder(&PlaceholderParams::new("10", bad)),
            Err(ValidationError::InvalidHeight)
        );
    }
}

#[test]
fn shorthand_and_hash_colors_render_the_same() {
    let short = render_placeholder(&PlaceholderParams::new("50", "50").with_color("abc")).unwrap();
    let long = render_placeholder(&PlaceholderParams::new("50", "50").with_color("aabbcc")).unwrap();
    assert_eq!(short, long);

    let hashed = render_placeholder(&PlaceholderParams::new("50", "50").with_color("#ABCDEF")).unwrap();
    let plain = render_placeholder(&PlaceholderParams::new("50", "50").with_color("ABCDEF")).unwrap();
    assert_eq!(hashed, plain);
}

#[test]
fn default_color_is_neutral_gray() {
    let request = validate("20", "20", None, None, Flags::default()).unwrap();
    assert_eq!(request.color, Rgb::new(0x33, 0x33, 0x33));
    let svg = render_placeholder(&PlaceholderParams::new("20", "20")).unwrap();
    assert_eq!(svg.matches("stop-color:#333333").count(), 2);
    assert!(svg.contains("width=\"0\" height=\"0\" patternUnits"));
    assert!(svg.contains("fill=\"#ffffff00\""));
}

#[test]
fn oversized_radius_falls_back_to_square_corners() {
    let svg = render_placeholder(&PlaceholderParams::new("100", "100").with_radius("999")).unwrap();
    assert!(svg.contains("rx=\"0\" ry=\"0\""));
}

#[test]
fn contrast_label_tracks_base_brightness() {
    let on = Flags {
        label: true,
        ..Flags::default()
    };
    let white = derive(Rgb::new(0xff, 0xff, 0xff), &on);
    let black = derive(Rgb::new(0, 0, 0), &on);
    assert_eq!(white.label, LabelColor::Dark);
    assert_eq!(black.label, LabelColor::Light);
}

#[test]
fn explicit_pipeline_matches_convenience_entry() {
    let flags = Flags {
        dots: true,
        gradient: true,
        label: true,
    };
    let request = validate("120", "80", Some("#0a0"), Some("16"), flags).unwrap();
    let palette = derive(request.color, &request.flags);
    let manual = render_svg(&request, &palette, &Theme::classic());
    let convenient = render_placeholder(
        &PlaceholderParams::new("120", "80")
            .with_color("#0a0")
            .with_radius("16")
            .with_flags(flags),
    )
    .unwrap();
    assert_eq!(manual, convenient);
    assert_valid_svg(&manual, "explicit");
}
