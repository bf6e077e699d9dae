// src/sim/simulation.rs
use super::error::SimulationResult;
use super::render::RenderAdapter;
use super::resources::KMeansParameters;
use super::state::SimulationState;
use crate::math::{
    algorithms::{ClusterPass, PassOutcome, RepositionConfig, advance_clustering, advance_reposition},
    point_distribution::{BlobDistributionBuilder, GeneratedRun},
    types::{Centroid, Point},
};
use bevy::prelude::*;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Text, den der Render-Adapter im Zustand `Final` einblendet.
pub const COMPLETION_MESSAGE: &str = "All done! Click to re-run";

/// Kennzahlen des laufenden Laufs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Fortlaufende Nummer des Laufs, beginnend bei 1.
    pub run: u32,
    /// Abgeschlossene Zuordnungsdurchläufe in diesem Lauf.
    pub passes_completed: u32,
    pub ticks: u64,
    /// Inertia des zuletzt abgeschlossenen Durchlaufs.
    pub last_pass_inertia: Option<f64>,
    /// Blob-Punkte, die bei der Generierung ins Innere geklemmt wurden.
    pub clamped_placements: usize,
}

/// Gesamter Zustand einer k-means-Animation.
///
/// Wird ausschließlich in [`tick`](Self::tick) und bei einem Reset verändert;
/// zwischen zwei Ticks darf beliebig gelesen und gezeichnet werden.
#[derive(Resource)]
pub struct KMeansSimulation {
    params: KMeansParameters,
    reposition: RepositionConfig,
    rng: StdRng,
    points: Vec<Point>,
    centroids: Vec<Centroid>,
    pass: ClusterPass,
    state: SimulationState,
    pending_reset: Option<KMeansParameters>,
    stats: RunStats,
}

impl KMeansSimulation {
    /// Validiert die Parameter und erzeugt den ersten Lauf.
    pub fn new(params: KMeansParameters, mut rng: StdRng) -> SimulationResult<Self> {
        params.validate()?;
        let run = generate_run(&params, &mut rng)?;
        let mut simulation = Self::from_run(params, run, rng);
        simulation.stats.run = 1;
        info!(
            "Generated run 1: {} points, {} centroids",
            simulation.points.len(),
            simulation.centroids.len()
        );
        Ok(simulation)
    }

    fn from_run(params: KMeansParameters, run: GeneratedRun, rng: StdRng) -> Self {
        let pass = ClusterPass::new(run.points.len(), run.centroids.len());
        Self {
            reposition: params.reposition_config(),
            params,
            rng,
            points: run.points,
            centroids: run.centroids,
            pass,
            state: SimulationState::Clustering,
            pending_reset: None,
            stats: RunStats {
                clamped_placements: run.clamped_placements,
                ..Default::default()
            },
        }
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn params(&self) -> &KMeansParameters {
        &self.params
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    pub fn clusters(&self) -> &[Vec<usize>] {
        self.pass.clusters()
    }

    pub fn worklist(&self) -> &[usize] {
        self.pass.worklist()
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn is_reset_pending(&self) -> bool {
        self.pending_reset.is_some()
    }

    /// Ein Animationsschritt: ein Zuordnungsstapel oder ein Interpolationsschritt.
    ///
    /// Ein anstehender Reset ersetzt zuerst den kompletten Zustand und ist
    /// dann die einzige Arbeit dieses Ticks.
    pub fn tick(&mut self) -> SimulationState {
        if let Some(params) = self.pending_reset.take() {
            self.apply_reset(params);
            return self.state;
        }

        self.stats.ticks += 1;
        match self.state {
            SimulationState::Clustering => self.advance_clustering(),
            SimulationState::Repositioning => self.advance_reposition(),
            SimulationState::Final => {}
        }
        self.state
    }

    fn advance_clustering(&mut self) {
        let outcome = advance_clustering(
            &mut self.pass,
            &mut self.points,
            &mut self.centroids,
            self.params.points_per_tick,
        );
        if outcome == PassOutcome::InProgress {
            return;
        }

        self.stats.passes_completed += 1;
        self.stats.last_pass_inertia = Some(self.pass.inertia());
        match outcome {
            PassOutcome::Converged => {
                info!(
                    "Run {} converged after {} passes (inertia {:.1})",
                    self.stats.run,
                    self.stats.passes_completed,
                    self.pass.inertia()
                );
                self.transition(SimulationState::Final);
            }
            _ => self.transition(SimulationState::Repositioning),
        }
    }

    fn advance_reposition(&mut self) {
        let complete = advance_reposition(&mut self.centroids, &self.reposition);
        if complete == self.centroids.len() {
            self.pass.restart(self.points.len());
            self.transition(SimulationState::Clustering);
        }
    }

    fn transition(&mut self, next: SimulationState) {
        info!(
            "Run {}, pass {}: {} -> {}",
            self.stats.run, self.stats.passes_completed, self.state, next
        );
        self.state = next;
    }

    /// Fordert einen Neustart mit den bisherigen Parametern an.
    ///
    /// Wirkt nur im Zustand `Final`; sonst wird die Anfrage verworfen und
    /// `false` zurückgegeben.
    pub fn request_reset(&mut self) -> bool {
        let params = self.params.clone();
        self.queue_reset(params)
    }

    /// Wie [`request_reset`](Self::request_reset), aber mit neuen Parametern,
    /// die vorher validiert werden.
    pub fn request_reset_with(&mut self, params: KMeansParameters) -> SimulationResult<bool> {
        if self.state.is_terminal() {
            params.validate()?;
        }
        Ok(self.queue_reset(params))
    }

    fn queue_reset(&mut self, params: KMeansParameters) -> bool {
        if !self.state.is_terminal() {
            debug!("Ignoring reset request while in state {}", self.state);
            return false;
        }
        self.pending_reset = Some(params);
        true
    }

    fn apply_reset(&mut self, params: KMeansParameters) {
        // Neuer Lauf wird komplett erzeugt, bevor der alte ersetzt wird
        let run = match generate_run(&params, &mut self.rng) {
            Ok(run) => run,
            Err(e) => {
                error!("Reset failed, keeping finished run: {}", e);
                return;
            }
        };

        let next_run = self.stats.run + 1;
        self.pass = ClusterPass::new(run.points.len(), run.centroids.len());
        self.points = run.points;
        self.centroids = run.centroids;
        self.reposition = params.reposition_config();
        self.params = params;
        self.state = SimulationState::Clustering;
        self.stats = RunStats {
            run: next_run,
            clamped_placements: run.clamped_placements,
            ..Default::default()
        };
        info!(
            "Generated run {}: {} points, {} centroids",
            next_run,
            self.points.len(),
            self.centroids.len()
        );
    }

    /// Gibt den aktuellen Zustand über den Adapter aus.
    ///
    /// Außerhalb von `Final`: erst alle Clusterlinien (nach Centroid gruppiert),
    /// dann alle Centroiden, dann alle Punkte. In `Final` nur die Punkte und
    /// die Abschlussmeldung.
    pub fn render(&self, adapter: &mut impl RenderAdapter) {
        if !self.state.is_terminal() {
            for (centroid, cluster) in self.centroids.iter().zip(self.pass.clusters()) {
                for &point_index in cluster {
                    adapter.draw_line(centroid, &self.points[point_index]);
                }
            }
            for centroid in &self.centroids {
                adapter.draw_centroid(centroid);
            }
        }

        for point in &self.points {
            adapter.draw_point(point);
        }

        if self.state.is_terminal() {
            adapter.draw_overlay_text(COMPLETION_MESSAGE);
        }
    }
}

fn generate_run(params: &KMeansParameters, rng: &mut StdRng) -> SimulationResult<GeneratedRun> {
    let builder = BlobDistributionBuilder::new(params.blob_config())?;
    Ok(builder.generate(rng))
}
