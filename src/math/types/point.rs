// src/math/types/point.rs
use super::*;

/// Ein Datenpunkt der Simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub position: Point2D,
    pub color: Hsba,
    pub radius: f32,
}

impl Point {
    pub fn new(position: Point2D, radius: f32) -> Self {
        Self {
            position,
            color: Hsba::WHITE,
            radius,
        }
    }
}

/// Repräsentant eines Clusters.
///
/// `position` ist die aktuell angezeigte Lage, `target` das Ziel der
/// laufenden Interpolation. Beide sind gleich, solange der Centroid ruht.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Centroid {
    pub position: Point2D,
    pub target: Point2D,
    pub color: Hsba,
    pub radius: f32,
}

/// Deckkraft der Centroid-Farbe während der Simulation.
pub const CENTROID_ALPHA: f32 = 0.25;

impl Centroid {
    pub fn new(position: Point2D, color: Hsba, radius: f32) -> Self {
        Self {
            position,
            target: position,
            color,
            radius,
        }
    }

    /// Erzeugt den `index`-ten von `count` Centroiden an der Position eines Datenpunkts.
    pub fn from_point(point: &Point, index: usize, count: usize, radius: f32) -> Self {
        Self::new(
            point.position,
            Hsba::for_cluster(index, count, CENTROID_ALPHA),
            radius,
        )
    }

    /// Exakter Vergleich, keine Toleranz.
    pub fn is_at_target(&self) -> bool {
        self.position == self.target
    }
}
