// src/sim/state.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase der k-means-Animation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
pub enum SimulationState {
    /// Punkte werden stapelweise ihrem nächsten Centroid zugeordnet.
    #[default] // Startzustand nach jedem (Neu-)Start
    Clustering,
    /// Centroiden gleiten auf ihre neuen Mittelwerte zu.
    Repositioning,
    /// Konvergiert. Verlassen nur über einen Reset.
    Final,
}

impl SimulationState {
    pub fn is_terminal(self) -> bool {
        self == SimulationState::Final
    }

    pub fn label(self) -> &'static str {
        match self {
            SimulationState::Clustering => "Clustering",
            SimulationState::Repositioning => "Repositioning",
            SimulationState::Final => "Final",
        }
    }
}

impl fmt::Display for SimulationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
