#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxOffset {
    pub x: f64,
    pub y: f64,
}

impl ParallaxOffset {
    pub fn style(&self) -> String {
        format!("transform: translate3d({:.2}px, {:.2}px, 0);", self.x, self.y)
    }
}

/// Container rectangle in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position mapped to [-0.5, 0.5] on each axis relative to the
/// container centre, then scaled by `strength`. A collapsed container has no
/// meaningful centre and yields `None`.
pub fn offset(client_x: f64, client_y: f64, bounds: Bounds, strength: f64) -> Option<ParallaxOffset> {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return None;
    }
    let x = ((client_x - bounds.left) / bounds.width).clamp(0.0, 1.0) - 0.5;
    let y = ((client_y - bounds.top) / bounds.height).clamp(0.0, 1.0) - 0.5;
    Some(ParallaxOffset { x: x * strength, y: y * strength })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO: Bounds = Bounds { left: 100.0, top: 50.0, width: 800.0, height: 600.0 };

    #[test]
    fn centre_is_still() {
        assert_eq!(offset(500.0, 350.0, HERO, 8.0), Some(ParallaxOffset { x: 0.0, y: 0.0 }));
    }

    #[test]
    fn corners_reach_half_the_strength() {
        assert_eq!(offset(100.0, 50.0, HERO, 8.0), Some(ParallaxOffset { x: -4.0, y: -4.0 }));
        assert_eq!(offset(900.0, 650.0, HERO, 8.0), Some(ParallaxOffset { x: 4.0, y: 4.0 }));
    }

    #[test]
    fn stays_in_range_outside_the_container() {
        let o = offset(-5_000.0, 9_000.0, HERO, 8.0).unwrap();
        assert_eq!((o.x, o.y), (-4.0, 4.0));
    }

    #[test]
    fn collapsed_container_is_ignored() {
        let flat = Bounds { height: 0.0, ..HERO };
        assert_eq!(offset(10.0, 10.0, flat, 8.0), None);
    }

    #[test]
    fn style_is_a_translate() {
        let o = ParallaxOffset { x: 1.5, y: -2.0 };
        assert_eq!(o.style(), "transform: translate3d(1.50px, -2.00px, 0);");
    }
}
