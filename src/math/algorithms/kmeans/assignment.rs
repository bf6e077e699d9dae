// src/math/algorithms/kmeans/assignment.rs

use crate::math::types::{Centroid, Point, Point2D};

/// Ein Zuordnungsdurchlauf: noch offene Punkte (Worklist) und die bisher
/// gebildeten Cluster, beide als Indizes in die Punktliste.
///
/// Jeder Punktindex steht genau einmal entweder in der Worklist oder in
/// genau einem Cluster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterPass {
    worklist: Vec<usize>,
    clusters: Vec<Vec<usize>>,
    inertia: f64,
}

/// Was ein Aufruf von [`advance_clustering`] bewirkt hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// Der Durchlauf ist noch nicht abgeschlossen.
    InProgress,
    /// Worklist geleert, alle Centroiden liegen bereits auf ihrem Mittelwert.
    Converged,
    /// Worklist geleert, mindestens ein Centroid hat ein neues Ziel.
    Retargeted,
}

impl ClusterPass {
    /// Neuer Durchlauf mit allen `point_count` Punkten in der Worklist.
    pub fn new(point_count: usize, cluster_count: usize) -> Self {
        let mut pass = Self {
            worklist: Vec::with_capacity(point_count),
            clusters: vec![Vec::new(); cluster_count],
            inertia: 0.0,
        };
        pass.restart(point_count);
        pass
    }

    /// Füllt die Worklist neu und leert alle Cluster.
    pub fn restart(&mut self, point_count: usize) {
        self.worklist.clear();
        self.worklist.extend(0..point_count);
        for cluster in &mut self.clusters {
            cluster.clear();
        }
        self.inertia = 0.0;
    }

    pub fn worklist(&self) -> &[usize] {
        &self.worklist
    }

    pub fn clusters(&self) -> &[Vec<usize>] {
        &self.clusters
    }

    pub fn is_complete(&self) -> bool {
        self.worklist.is_empty()
    }

    /// Summe der quadrierten Abstände aller bisher zugeordneten Punkte zu
    /// ihrem Centroid (zum Zeitpunkt der Zuordnung).
    pub fn inertia(&self) -> f64 {
        self.inertia
    }
}

/// Index des nächstgelegenen Centroids (euklidischer Abstand).
///
/// Bei Gleichstand gewinnt der kleinste Index. `None` nur ohne Centroiden.
pub fn nearest_centroid(position: Point2D, centroids: &[Centroid]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = position.distance(centroid.position);
        match best {
            // strikt kleiner, damit der niedrigere Index bei Gleichstand bleibt
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Ordnet bis zu `batch_size` Punkte aus der Worklist ihrem nächsten Centroid zu.
///
/// Leert dieser Aufruf die Worklist, wird der Durchlauf abgeschlossen: jedes
/// Ziel wird auf den Mittelwert seines Clusters gesetzt (leere Cluster behalten
/// die aktuelle Position als Ziel) und auf Konvergenz geprüft. Bei Konvergenz
/// erhalten alle Punkte die deckende Farbe ihres Centroids.
pub fn advance_clustering(
    pass: &mut ClusterPass,
    points: &mut [Point],
    centroids: &mut [Centroid],
    batch_size: usize,
) -> PassOutcome {
    if pass.is_complete() || centroids.is_empty() {
        return PassOutcome::InProgress;
    }
    if pass.clusters.len() != centroids.len() {
        pass.clusters.resize_with(centroids.len(), Vec::new);
    }

    for _ in 0..batch_size.max(1) {
        let Some(point_index) = pass.worklist.pop() else {
            break;
        };
        let position = points[point_index].position;
        if let Some(nearest) = nearest_centroid(position, centroids) {
            let distance = position.distance(centroids[nearest].position) as f64;
            pass.inertia += distance * distance;
            pass.clusters[nearest].push(point_index);
        }
    }

    if !pass.is_complete() {
        return PassOutcome::InProgress;
    }

    retarget(pass, points, centroids);
    let converged = centroids.iter().all(Centroid::is_at_target);
    if converged {
        for (cluster, centroid) in pass.clusters.iter().zip(centroids.iter()) {
            for &point_index in cluster {
                points[point_index].color = centroid.color.opaque();
            }
        }
        PassOutcome::Converged
    } else {
        PassOutcome::Retargeted
    }
}

fn retarget(pass: &ClusterPass, points: &[Point], centroids: &mut [Centroid]) {
    for (cluster, centroid) in pass.clusters.iter().zip(centroids.iter_mut()) {
        centroid.target = cluster_mean(cluster, points).unwrap_or(centroid.position);
    }
}

/// Arithmetisches Mittel der Clusterpunkte, `None` für leere Cluster.
fn cluster_mean(cluster: &[usize], points: &[Point]) -> Option<Point2D> {
    if cluster.is_empty() {
        return None;
    }
    let (sum_x, sum_y) = cluster.iter().fold((0.0f64, 0.0f64), |(x, y), &index| {
        let position = points[index].position;
        (x + position.x as f64, y + position.y as f64)
    });
    let count = cluster.len() as f64;
    Some(Point2D::new((sum_x / count) as f32, (sum_y / count) as f32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::Hsba;
    use std::collections::HashSet;

    fn points_at(positions: &[(f32, f32)]) -> Vec<Point> {
        positions
            .iter()
            .map(|&(x, y)| Point::new(Point2D::new(x, y), 1.0))
            .collect()
    }

    fn centroids_at(positions: &[(f32, f32)]) -> Vec<Centroid> {
        let count = positions.len();
        positions
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| {
                Centroid::new(Point2D::new(x, y), Hsba::for_cluster(i, count, 0.25), 8.0)
            })
            .collect()
    }

    fn assert_partition(pass: &ClusterPass, point_count: usize) {
        let mut seen = HashSet::new();
        for &index in pass
            .worklist()
            .iter()
            .chain(pass.clusters().iter().flatten())
        {
            assert!(seen.insert(index), "point {} appears twice", index);
        }
        assert_eq!(seen, (0..point_count).collect::<HashSet<_>>());
    }

    #[test]
    fn test_nearest_centroid_tie_goes_to_lowest_index() {
        let centroids = centroids_at(&[(-1.0, 0.0), (1.0, 0.0), (0.0, 5.0)]);
        assert_eq!(nearest_centroid(Point2D::new(0.0, 0.0), &centroids), Some(0));
        let reversed = centroids_at(&[(0.0, 5.0), (1.0, 0.0), (-1.0, 0.0)]);
        assert_eq!(nearest_centroid(Point2D::new(0.0, 0.0), &reversed), Some(1));
        assert_eq!(nearest_centroid(Point2D::new(0.0, 0.0), &[]), None);
    }

    #[test]
    fn test_partition_holds_across_batches() {
        let mut points = points_at(&[
            (0.0, 0.0),
            (1.0, 1.0),
            (2.0, 2.0),
            (8.0, 8.0),
            (9.0, 9.0),
            (10.0, 10.0),
            (5.0, 5.0),
        ]);
        let mut centroids = centroids_at(&[(0.0, 0.0), (10.0, 10.0)]);
        let mut pass = ClusterPass::new(points.len(), centroids.len());
        assert_partition(&pass, points.len());

        let mut calls = 0;
        loop {
            let outcome = advance_clustering(&mut pass, &mut points, &mut centroids, 2);
            calls += 1;
            assert_partition(&pass, points.len());
            if outcome != PassOutcome::InProgress {
                break;
            }
        }
        assert_eq!(calls, 4);
        assert!(pass.is_complete());
    }

    #[test]
    fn test_every_point_goes_to_its_nearest_centroid() {
        let mut points = points_at(&[(0.0, 0.0), (4.0, 0.0), (6.0, 0.0), (5.0, 0.0), (10.0, 3.0)]);
        let mut centroids = centroids_at(&[(0.0, 0.0), (10.0, 0.0)]);
        let mut pass = ClusterPass::new(points.len(), centroids.len());
        advance_clustering(&mut pass, &mut points, &mut centroids, usize::MAX);

        let mut left = pass.clusters()[0].clone();
        left.sort_unstable();
        let mut right = pass.clusters()[1].clone();
        right.sort_unstable();
        // (5, 0) liegt genau in der Mitte und geht an Centroid 0
        assert_eq!(left, vec![0, 1, 3]);
        assert_eq!(right, vec![2, 4]);
    }

    #[test]
    fn test_two_blob_scenario_retargets_without_converging() {
        let mut points = points_at(&[(0.0, 0.0), (0.0, 1.0), (10.0, 0.0), (10.0, 1.0)]);
        let mut centroids = centroids_at(&[(0.0, 0.0), (10.0, 0.0)]);
        let mut pass = ClusterPass::new(points.len(), centroids.len());

        let outcome = advance_clustering(&mut pass, &mut points, &mut centroids, 4);

        assert_eq!(outcome, PassOutcome::Retargeted);
        let mut left = pass.clusters()[0].clone();
        left.sort_unstable();
        let mut right = pass.clusters()[1].clone();
        right.sort_unstable();
        assert_eq!(left, vec![0, 1]);
        assert_eq!(right, vec![2, 3]);
        assert_eq!(centroids[0].target, Point2D::new(0.0, 0.5));
        assert_eq!(centroids[1].target, Point2D::new(10.0, 0.5));
        assert_eq!(centroids[0].position, Point2D::new(0.0, 0.0));
        assert!(points.iter().all(|p| p.color == Hsba::WHITE));
    }

    #[test]
    fn test_convergence_recolors_points_opaque() {
        let mut points = points_at(&[(0.0, -1.0), (0.0, 1.0), (10.0, -1.0), (10.0, 1.0)]);
        let mut centroids = centroids_at(&[(0.0, 0.0), (10.0, 0.0)]);
        let mut pass = ClusterPass::new(points.len(), centroids.len());

        let outcome = advance_clustering(&mut pass, &mut points, &mut centroids, 100);

        assert_eq!(outcome, PassOutcome::Converged);
        assert_eq!(points[0].color, centroids[0].color.opaque());
        assert_eq!(points[3].color, centroids[1].color.opaque());
        assert_eq!(points[3].color.alpha, 1.0);
        assert_eq!(centroids[1].color.alpha, 0.25);
    }

    #[test]
    fn test_empty_cluster_keeps_its_position_as_target() {
        let mut points = points_at(&[(0.0, 0.0), (1.0, 0.0)]);
        let mut centroids = centroids_at(&[(0.5, 0.0), (500.0, 500.0)]);
        let mut pass = ClusterPass::new(points.len(), centroids.len());

        let outcome = advance_clustering(&mut pass, &mut points, &mut centroids, 10);

        assert!(pass.clusters()[1].is_empty());
        assert_eq!(centroids[1].target, Point2D::new(500.0, 500.0));
        assert!(centroids[1].target.is_finite());
        // Cluster 0 hat Mittelwert (0.5, 0) = Position, also konvergiert
        assert_eq!(outcome, PassOutcome::Converged);
    }

    #[test]
    fn test_pass_finishes_only_once() {
        let mut points = points_at(&[(0.0, 0.0), (0.0, 2.0)]);
        let mut centroids = centroids_at(&[(0.0, 0.0)]);
        let mut pass = ClusterPass::new(points.len(), centroids.len());

        assert_eq!(
            advance_clustering(&mut pass, &mut points, &mut centroids, 1),
            PassOutcome::InProgress
        );
        assert_eq!(
            advance_clustering(&mut pass, &mut points, &mut centroids, 1),
            PassOutcome::Retargeted
        );
        assert_eq!(
            advance_clustering(&mut pass, &mut points, &mut centroids, 1),
            PassOutcome::InProgress
        );
        assert_eq!(centroids[0].target, Point2D::new(0.0, 1.0));
        assert_eq!(pass.inertia(), 4.0);
    }

    #[test]
    fn test_restart_refills_worklist_and_clears_clusters() {
        let mut points = points_at(&[(0.0, 0.0), (3.0, 0.0), (6.0, 0.0)]);
        let mut centroids = centroids_at(&[(0.0, 0.0), (6.0, 0.0)]);
        let mut pass = ClusterPass::new(points.len(), centroids.len());
        advance_clustering(&mut pass, &mut points, &mut centroids, 10);
        assert!(pass.is_complete());

        pass.restart(points.len());
        assert_eq!(pass.worklist().len(), 3);
        assert!(pass.clusters().iter().all(Vec::is_empty));
        assert_eq!(pass.clusters().len(), 2);
        assert_eq!(pass.inertia(), 0.0);
    }
}
