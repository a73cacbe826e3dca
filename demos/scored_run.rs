use kmeans_eval::validation::{score_all, ClassLayout};
use kmeans_eval::{KMeans, KMeansConfig};
use rand::prelude::*;

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let (per_blob, dims) = (200, 3);
    let centers = [[0.0, 0.0, 0.0], [6.0, 6.0, 0.0], [-5.0, 4.0, 7.0]];

    // Block-ordered samples: one contiguous block per true class, which is
    // exactly the layout the external metrics assume.
    let mut rng = StdRng::seed_from_u64(7);
    let mut samples = Vec::with_capacity(per_blob * centers.len() * dims);
    for center in &centers {
        for _ in 0..per_blob {
            for &c in center {
                samples.push(c + rng.gen_range(-1.0, 1.0));
            }
        }
    }

    let kmean = KMeans::from_samples(samples, per_blob * centers.len(), dims).unwrap();
    let config = KMeansConfig::build()
        .random_generator(StdRng::seed_from_u64(99))
        .iteration_done(&|_, nr, stable| println!("Iteration {} - converged: {}", nr, stable))
        .build();
    let clusters = kmean.kmeans_lloyd(3, &config).unwrap();

    let layout = ClassLayout::new(centers.len(), per_blob).unwrap();
    let scores = score_all(&clusters, kmean.points(), &layout).unwrap();

    println!("silhouette:          {:.4}", scores.silhouette);
    println!("davies-bouldin:      {:.4}", scores.davies_bouldin);
    println!("calinski-harabasz:   {:.4}", scores.calinski_harabasz);
    println!("f-measure:           {:.4}", scores.f_measure);
    println!("adjusted rand index: {:.4}", scores.adjusted_rand_index);
}
