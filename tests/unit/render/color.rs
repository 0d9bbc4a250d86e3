use super::*;

#[test]
fn named_colors_resolve() {
    assert_eq!(resolve_color("red"), Rgba8::opaque(255, 0, 0));
    assert_eq!(resolve_color("blue"), Rgba8::opaque(0, 0, 255));
    assert_eq!(resolve_color("black"), Rgba8::BLACK);
    assert_eq!(resolve_color(" white "), Rgba8::WHITE);
}

#[test]
fn hex_colors_resolve() {
    assert_eq!(resolve_color("#1e90ff"), Rgba8::opaque(0x1e, 0x90, 0xff));
}

#[test]
fn unknown_colors_fall_back_to_black() {
    assert_eq!(resolve_color("not-a-color"), Rgba8::BLACK);
    assert_eq!(resolve_color(""), Rgba8::BLACK);
}
