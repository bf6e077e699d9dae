// src/math/types/color.rs
use bevy::render::color::Color;
use egui::ecolor::{Color32, Hsva, HsvaGamma};

/// Farbe im HSB-Farbraum mit benannten Kanälen.
///
/// `hue` in Grad `[0, 360)`, `saturation`, `brightness` und `alpha` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsba {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub alpha: f32,
}

impl Hsba {
    pub const WHITE: Hsba = Hsba::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha,
        }
    }

    /// Farbe des `index`-ten von `count` Clustern: der Farbkreis wird in
    /// `count` gleiche Schritte geteilt.
    pub fn for_cluster(index: usize, count: usize, alpha: f32) -> Self {
        let hue = if count == 0 {
            0.0
        } else {
            360.0 * (index as f32 / count as f32)
        };
        Self::new(hue, 1.0, 1.0, alpha)
    }

    /// Kopie mit voller Deckkraft.
    pub fn opaque(mut self) -> Self {
        self.alpha = 1.0;
        self
    }

    /// HSB -> HSL, da Bevy keinen HSB-Konstruktor anbietet.
    pub fn to_color(self) -> Color {
        let lightness = self.brightness * (1.0 - self.saturation / 2.0);
        let saturation = if lightness <= 0.0 || lightness >= 1.0 {
            0.0
        } else {
            (self.brightness - lightness) / lightness.min(1.0 - lightness)
        };
        Color::hsla(self.hue, saturation, lightness, self.alpha)
    }

    /// Dieselbe Farbe als egui-HSV im Gamma-Raum (Farbton auf `[0, 1]` skaliert).
    pub fn to_egui(self) -> HsvaGamma {
        HsvaGamma {
            h: self.hue.rem_euclid(360.0) / 360.0,
            s: self.saturation,
            v: self.brightness,
            a: self.alpha,
        }
    }

    /// Deckende egui-Farbe, z.B. für Beschriftungen.
    pub fn to_color32(self) -> Color32 {
        Color32::from(self.opaque().to_egui())
    }

    /// CSS-Hexfarbe ohne Alpha, z.B. `#ff0000`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = Hsva::from(self.to_egui()).to_srgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Default for Hsba {
    fn default() -> Self {
        Self::WHITE
    }
}
