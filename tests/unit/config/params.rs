use super::*;

#[test]
fn defaults_match_the_cli_defaults() {
    let p = RenderParams::default();
    assert_eq!(p.size, None);
    assert_eq!(p.cell_size, 20);
    assert_eq!(p.line_width, 1);
    assert_eq!(p.thread_width, 3);
    assert_eq!(p.knot_color, None);
    assert_eq!(p.knot_spacing(), 1);
    assert!(!p.debug_skip);
}

#[test]
fn sanitized_clamps_out_of_range_values() {
    let p = RenderParams {
        size: Some(0),
        cell_size: 0,
        line_width: 0,
        thread_width: 0,
        knot_color: Some("  ".to_owned()),
        knot_spacing: -4,
        debug_skip: true,
    }
    .sanitized();

    assert_eq!(p.size, Some(1));
    assert_eq!(p.cell_size, 1);
    assert_eq!(p.line_width, 1);
    assert_eq!(p.thread_width, 1);
    assert_eq!(p.knot_color, None);
    assert_eq!(p.knot_spacing, 1);
    assert!(p.debug_skip);
}

#[test]
fn knot_spacing_below_one_reads_as_one() {
    let p = RenderParams {
        knot_spacing: 0,
        ..RenderParams::default()
    };
    assert_eq!(p.knot_spacing(), 1);
}

#[test]
fn params_deserialize_with_defaults_for_missing_fields() {
    let p: RenderParams = serde_json::from_str(r#"{"cell_size": 12, "knot_color": "gold"}"#).unwrap();
    assert_eq!(p.cell_size, 12);
    assert_eq!(p.knot_color.as_deref(), Some("gold"));
    assert_eq!(p.thread_width, 3);
}
