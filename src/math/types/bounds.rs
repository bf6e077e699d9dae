// src/math/types/bounds.rs

use crate::math::{error::*, types::*};
use rand::Rng;
use std::fmt;

/// 2D Bounding Box (Axis-Aligned Bounding Box)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point2D, max: Point2D) -> MathResult<Self> {
        let bounds = Self { min, max };
        if !bounds.is_valid() {
            return Err(MathError::InvalidBounds {
                message: format!("min {:?} > max {:?}", min, max),
            });
        }

        Ok(bounds)
    }

    /// Quadratische Zeichenfläche `[0, size] x [0, size]`
    pub fn square(size: f32) -> MathResult<Self> {
        Self::new(Point2D::ZERO, Point2D::splat(size))
    }

    /// Prüft ob die Bounding Box gültig ist
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.x.is_finite()
            && self.min.y.is_finite()
            && self.max.x.is_finite()
            && self.max.y.is_finite()
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f32 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f32 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Verkleinert die Box an allen Seiten um `margin`.
    pub fn shrink(&self, margin: f32) -> MathResult<Self> {
        Self::new(self.min + Point2D::splat(margin), self.max - Point2D::splat(margin))
    }

    /// Prüft ob ein Punkt echt im Inneren liegt (Rand ausgeschlossen)
    pub fn strictly_contains_point(&self, point: Point2D) -> bool {
        point.x > self.min.x && point.x < self.max.x && point.y > self.min.y && point.y < self.max.y
    }

    /// Zieht einen Punkt echt ins Innere der Box.
    ///
    /// Der Abstand zum Rand beträgt mindestens ein Tausendstel der Kantenlänge,
    /// sodass das Ergebnis `strictly_contains_point` erfüllt, solange die Box
    /// eine positive Fläche hat.
    pub fn clamp_strictly_inside(&self, point: Point2D) -> Point2D {
        let inset_x = self.width() * 1e-3;
        let inset_y = self.height() * 1e-3;
        Point2D::new(
            point.x.clamp(self.min.x + inset_x, self.max.x - inset_x),
            point.y.clamp(self.min.y + inset_y, self.max.y - inset_y),
        )
    }

    /// Gleichverteilter Zufallspunkt in `[min, max)` pro Achse
    pub fn random_point(&self, rng: &mut impl Rng) -> Point2D {
        Point2D::new(
            sample_axis(self.min.x, self.max.x, rng),
            sample_axis(self.min.y, self.max.y, rng),
        )
    }
}

fn sample_axis(min: f32, max: f32, rng: &mut impl Rng) -> f32 {
    if min < max {
        rng.random_range(min..max)
    } else {
        min
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bounds2D({:?} to {:?})", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let result = Bounds2D::new(Point2D::new(10.0, 0.0), Point2D::new(0.0, 10.0));
        assert!(matches!(result, Err(MathError::InvalidBounds { .. })));
        assert!(Bounds2D::square(f32::NAN).is_err());
    }

    #[test]
    fn test_strict_containment_excludes_edges() {
        let bounds = Bounds2D::square(10.0).unwrap();
        assert!(!bounds.strictly_contains_point(Point2D::new(0.0, 5.0)));
        assert!(bounds.strictly_contains_point(Point2D::new(0.1, 9.9)));
    }

    #[test]
    fn test_clamp_strictly_inside() {
        let bounds = Bounds2D::square(100.0).unwrap().shrink(1.0).unwrap();
        for candidate in [
            Point2D::new(-500.0, 50.0),
            Point2D::new(1.0, 99.0),
            Point2D::new(1e9, -1e9),
        ] {
            let clamped = bounds.clamp_strictly_inside(candidate);
            assert!(
                bounds.strictly_contains_point(clamped),
                "{:?} -> {:?}",
                candidate,
                clamped
            );
        }
        let inside = Point2D::new(42.0, 17.0);
        assert_eq!(bounds.clamp_strictly_inside(inside), inside);
    }

    #[test]
    fn test_random_point_stays_in_bounds() {
        let bounds = Bounds2D::square(720.0).unwrap().shrink(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let point = bounds.random_point(&mut rng);
            assert!(point.cmpge(bounds.min).all() && point.cmple(bounds.max).all());
        }
    }
}
