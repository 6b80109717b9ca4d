//! Scaling the fixed logical screen onto the browser viewport

use game_core::Screen;

/// Uniform scale and letterbox offsets, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub scale: f64,
    pub left: f64,
    pub top: f64,
}

/// Largest uniform scale that shows the whole screen inside the viewport,
/// centred with black bars on the spare axis.
pub fn fit_to_viewport(screen: &Screen, viewport_width: f64, viewport_height: f64) -> Fit {
    let width = screen.width() as f64;
    let height = screen.height() as f64;

    let scale = (viewport_width / width).min(viewport_height / height);
    if !scale.is_finite() || scale <= 0.0 {
        return Fit {
            scale: 1.0,
            left: 0.0,
            top: 0.0,
        };
    }

    Fit {
        scale,
        left: (viewport_width - width * scale) / 2.0,
        top: (viewport_height - height * scale) / 2.0,
    }
}
