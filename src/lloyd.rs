use crate::errors::{KMeansError, Result};
use crate::{assign, convergence, inits, update, Cluster, KMeans, KMeansConfig, Primitive};
use tracing::{debug, warn};

pub(crate) struct Lloyd<T: Primitive> {
    _p: std::marker::PhantomData<T>,
}

impl<T: Primitive> Lloyd<T> {
    /// The iterate-until-stable control loop:
    /// initialize → warm-up assignment (recovery mode) → update →
    /// { snapshot; assign; update; convergence check } until stable →
    /// one final assignment, so the reported membership reflects the
    /// converged centroids rather than the previous pass's.
    ///
    /// Every phase is a fork-join rayon pass; no phase starts before the
    /// previous one fully returned.
    pub fn calculate(data: &KMeans<T>, k: usize, config: &KMeansConfig<'_, T>) -> Result<Vec<Cluster<T>>> {
        let points = data.points();
        if k > points.len() {
            // With K > N the warm-up recovery could never fill every cluster.
            return Err(KMeansError::NotEnoughPoints { needed: k, found: points.len() });
        }

        let mut clusters = inits::create_clusters(k, points, &mut *config.rnd.borrow_mut())?;
        (config.init_done)(&clusters);

        // Warm-up: no cluster may enter the first update empty.
        assign::assign_points_reseeding(&mut clusters, points, &mut *config.rnd.borrow_mut())?;
        update::update_centroids(&mut clusters, points);

        let mut iteration = 0usize;
        loop {
            iteration += 1;
            // Member sets are empty right after an update, so the snapshot
            // clone carries centroids only.
            let previous = clusters.clone();
            assign::assign_points(&mut clusters, points)?;
            update::update_centroids(&mut clusters, points);
            let stable = convergence::converged(&clusters, &previous, config.tolerance)?;
            (config.iteration_done)(&clusters, iteration, stable);
            debug!(iteration, stable, "lloyd iteration finished");
            if stable {
                break;
            }
            if let Some(cap) = config.max_iterations {
                if iteration >= cap {
                    warn!(iteration, "iteration cap reached before convergence");
                    break;
                }
            }
        }

        assign::assign_points(&mut clusters, points)?;
        Ok(clusters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing::two_blobs;
    use rand::prelude::*;
    use std::cell::Cell;

    #[test]
    fn two_obvious_groups_are_recovered_for_any_seed() {
        let points = two_blobs();
        for seed in 0..10 {
            let rnd = StdRng::seed_from_u64(seed);
            let config = KMeansConfig::build().random_generator(rnd).build();
            let kmean = KMeans::new(points.clone()).unwrap();
            let clusters = kmean.kmeans_lloyd(2, &config).unwrap();

            assert_eq!(clusters.len(), 2);
            for cluster in &clusters {
                let mut ids: Vec<usize> = cluster.members().to_vec();
                ids.sort_unstable();
                assert!(
                    ids == vec![0, 1, 2] || ids == vec![3, 4, 5],
                    "seed {}: cluster {:?} mixes the two groups",
                    seed,
                    ids
                );
            }
        }
    }

    #[test]
    fn final_membership_is_a_total_partition() {
        let points = two_blobs();
        let rnd = StdRng::seed_from_u64(3);
        let config = KMeansConfig::build().random_generator(rnd).build();
        let clusters = KMeans::new(points.clone()).unwrap().kmeans_lloyd(3, &config).unwrap();

        let mut seen = vec![0usize; points.len()];
        for cluster in &clusters {
            for &idx in cluster.members() {
                seen[idx] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn requesting_more_clusters_than_points_fails() {
        let points = two_blobs();
        let res = KMeans::new(points).unwrap().kmeans_lloyd(7, &KMeansConfig::default());
        assert!(matches!(res, Err(KMeansError::NotEnoughPoints { needed: 7, found: 6 })));
    }

    #[test]
    fn iteration_cap_bounds_the_loop() {
        let points = two_blobs();
        let iterations = Cell::new(0usize);
        let count = |_: &[Cluster<f64>], nr: usize, _: bool| iterations.set(nr);
        let config = KMeansConfig::build()
            .random_generator(StdRng::seed_from_u64(5))
            .max_iterations(1)
            .iteration_done(&count)
            .build();
        KMeans::new(points).unwrap().kmeans_lloyd(2, &config).unwrap();
        assert!(iterations.get() <= 1);
    }

    #[test]
    fn callbacks_fire_in_order() {
        let points = two_blobs();
        let inits = Cell::new(0usize);
        let iters = Cell::new(0usize);
        let on_init = |_: &[Cluster<f64>]| inits.set(inits.get() + 1);
        let on_iter = |_: &[Cluster<f64>], _: usize, _: bool| iters.set(iters.get() + 1);
        let config = KMeansConfig::build()
            .random_generator(StdRng::seed_from_u64(8))
            .init_done(&on_init)
            .iteration_done(&on_iter)
            .build();
        KMeans::new(points).unwrap().kmeans_lloyd(2, &config).unwrap();
        assert_eq!(inits.get(), 1);
        assert!(iters.get() >= 1);
    }
}
