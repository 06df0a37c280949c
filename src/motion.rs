//! Pointer driven values for the hero spotlight and the tilting cards.
//! Easing is left to CSS transitions; these only compute targets.

/// Largest tilt of a card, in degrees, reached at its edges.
pub const MAX_TILT_DEG: f64 = 10.0;

fn known_size(width: f64, height: f64) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}

/// Centre of the hero's radial gradient as percentages of the viewport.
/// Stays centred until the pointer has moved and the viewport is measured.
pub fn spotlight(pointer: Option<(f64, f64)>, width: f64, height: f64) -> (f64, f64) {
    match pointer {
        Some((x, y)) if known_size(width, height) => (
            (x / width * 100.0).clamp(0.0, 100.0),
            (y / height * 100.0).clamp(0.0, 100.0),
        ),
        _ => (50.0, 50.0),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn style(&self) -> String {
        format!(
            "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg); transform-style: preserve-3d;",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Rotation for a card given the pointer position inside it.
pub fn tilt(element_x: f64, element_y: f64, width: f64, height: f64, outside: bool) -> Tilt {
    if outside || !known_size(width, height) {
        return Tilt::default();
    }
    let x_pct = (element_x / width - 0.5).clamp(-0.5, 0.5);
    let y_pct = (element_y / height - 0.5).clamp(-0.5, 0.5);
    Tilt {
        rotate_x: -y_pct * 2.0 * MAX_TILT_DEG,
        rotate_y: x_pct * 2.0 * MAX_TILT_DEG,
    }
}
