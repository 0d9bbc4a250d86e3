use vello_cpu::peniko::color::{Srgb, parse_color};

use crate::foundation::core::Rgba8;

/// Resolve a CSS color string (`red`, `#1e90ff`, `rgb(0 128 0)`, ...).
///
/// Unknown colors render black rather than failing the render.
pub fn resolve_color(name: &str) -> Rgba8 {
    match parse_color(name.trim()) {
        Ok(c) => {
            let rgba = c.to_alpha_color::<Srgb>().to_rgba8();
            Rgba8 {
                r: rgba.r,
                g: rgba.g,
                b: rgba.b,
                a: rgba.a,
            }
        }
        Err(err) => {
            tracing::warn!(color = name, error = %err, "unrecognized color; using black");
            Rgba8::BLACK
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/color.rs"]
mod tests;
