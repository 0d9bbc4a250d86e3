use super::*;

#[test]
fn premul_of_opaque_is_identity() {
    assert_eq!(Rgba8::opaque(12, 200, 7).to_premul(), [12, 200, 7, 255]);
    assert_eq!(Rgba8::WHITE.to_premul(), [255, 255, 255, 255]);
}

#[test]
fn premul_scales_channels_by_alpha() {
    let c = Rgba8 {
        r: 255,
        g: 128,
        b: 0,
        a: 128,
    };
    assert_eq!(c.to_premul(), [128, 64, 0, 128]);
}

#[test]
fn pixel_rect_bounds_are_inclusive() {
    let r = PixelRect {
        left: 20,
        top: 20,
        right: 40,
        bottom: 40,
    };
    assert_eq!(r.width(), 21);
    assert_eq!(r.height(), 21);
    assert!(r.contains(20, 20));
    assert!(r.contains(40, 40));
    assert!(!r.contains(41, 40));
    assert!(!r.contains(19, 30));
}
