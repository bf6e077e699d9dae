// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const TAU: f32 = std::f32::consts::TAU;
}

/// Interpolation
pub mod interpolation {
    /// Lineare Interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Lineare Interpolation, die auf `b` einrastet, sobald der Restabstand
    /// kleiner als `snap_threshold` ist.
    ///
    /// Rundet der Schritt in f32 weg, wird ebenfalls eingerastet, sonst bliebe
    /// `a` knapp vor `b` stehen.
    pub fn lerp_with_snap(a: f32, b: f32, t: f32, snap_threshold: f32) -> f32 {
        if (a - b).abs() < snap_threshold {
            return b;
        }
        let next = lerp(a, b, t);
        if next == a { b } else { next }
    }
}

/// Random utilities (erweitert vorhandene rand-Funktionalität)
pub mod random {
    use crate::math::utils::constants::TAU;
    use bevy::math::Vec2;
    use rand::Rng;

    /// Polarer Versatz: Radius gleichverteilt in `[0, max_radius]`, Winkel in `[0, 2π)`.
    ///
    /// Nicht flächentreu, Punkte häufen sich zur Mitte hin.
    pub fn random_polar_offset(max_radius: f32, rng: &mut impl Rng) -> Vec2 {
        let r = rng.random_range(0.0..=max_radius);
        let angle = rng.random_range(0.0..TAU);
        Vec2::new(r * angle.cos(), -r * angle.sin())
    }

    /// Gaussian distributed random number (Box-Muller transform)
    pub fn random_gaussian(mean: f32, std_dev: f32, rng: &mut impl Rng) -> f32 {
        // u1 aus (0, 1], damit ln(u1) endlich bleibt
        let u1: f32 = 1.0 - rng.random::<f32>();
        let u2: f32 = rng.random();

        let mag = std_dev * (-2.0 * u1.ln()).sqrt();
        mean + mag * (TAU * u2).cos()
    }

    /// Gauß-verteilter Betrag mit zufälligem Vorzeichen.
    pub fn random_signed_gaussian(mean: f32, std_dev: f32, rng: &mut impl Rng) -> f32 {
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        sign * random_gaussian(mean, std_dev, rng)
    }
}
