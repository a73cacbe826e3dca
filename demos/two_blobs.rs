use kmeans_eval::{KMeans, KMeansConfig};
use rand::prelude::*;

fn main() {
    let (per_blob, dims) = (500, 2);
    let centers = [[0.0, 0.0], [8.0, 8.0]];

    // Generate two noisy square blobs
    let mut rng = StdRng::seed_from_u64(42);
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
        .random_generator(StdRng::seed_from_u64(1))
        .build();
    let clusters = kmean.kmeans_lloyd(2, &config).unwrap();

    for cluster in &clusters {
        println!(
            "cluster {}: centroid {:?}, {} members",
            cluster.id(),
            cluster.centroid(),
            cluster.members().len()
        );
    }
}
