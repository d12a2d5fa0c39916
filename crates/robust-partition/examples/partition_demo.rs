//! Partitions a few synthetic data sets and prints the result
//!
//! Run with `RUST_LOG=robust_partition=debug` to see the fitted parameters.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal, Poisson};
use robust_partition::{
    CategoryPartitioner, ContinuousRangePartitioner, IntegerRangePartitioner, Partitioner,
    RangeConfig,
};
use robust_quantile::QuantileMethod;
use tracing_subscriber::EnvFilter;

fn print_bar(label: &str, count: usize, total: usize) {
    let width = if total == 0 { 0 } else { count * 60 / total };
    println!("  {label:>16} | {:<60} {count}", "#".repeat(width));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(2024);

    // Example 1: latencies with a handful of extreme outliers
    println!("=== Continuous values, inferred bounds ===");
    let normal = Normal::new(250.0, 40.0)?;
    let mut latencies: Vec<f64> = (0..5_000).map(|_| normal.sample(&mut rng)).collect();
    latencies.extend([1e5, 2e5, -3e4]);

    let mut continuous = ContinuousRangePartitioner::new(15)?;
    continuous.fit(&latencies)?;
    println!(
        "step = {}, {} partitions, {} of {} values counted",
        continuous.partition_width()?,
        continuous.len()?,
        continuous.frequencies()?.iter().sum::<usize>(),
        latencies.len()
    );
    for bin in continuous.bins()? {
        let label = format!("[{:.0}, {:.0})", bin.left, bin.right);
        print_bar(&label, bin.count, latencies.len());
    }

    // Example 2: event counts from a configuration document
    println!("\n=== Integer values, configured ===");
    let config: RangeConfig<i64> = serde_json::from_str(
        r#"{ "max_partitions": 8, "lower_bound": 0, "quantile_method": "nearest_rank" }"#,
    )?;
    let poisson = Poisson::new(12.0)?;
    let counts: Vec<i64> = (0..2_000).map(|_| poisson.sample(&mut rng) as i64).collect();

    let mut integer = IntegerRangePartitioner::from_config(&config)?;
    integer.fit(&counts)?;
    for bin in integer.bins()? {
        print_bar(&bin.center.to_string(), bin.count, counts.len());
    }

    // Example 3: the same counts with per-fit bounds and a different estimator
    let mut narrow = IntegerRangePartitioner::from_config(
        &RangeConfig::new(5).quantile_method(QuantileMethod::Linear),
    )?;
    narrow.fit_with_bounds(&counts, Some(8), Some(16))?;
    println!("\nbetween 8 and 16: {:?}", narrow.partitions()?);

    // Example 4: categories, most frequent first
    println!("\n=== Categories ===");
    let words = "the quick brown fox jumps over the lazy dog and the dog sleeps over the fox";
    let tokens: Vec<&str> = words.split_whitespace().collect();
    let mut category = CategoryPartitioner::new(4)?;
    category.fit(&tokens)?;
    for (word, count) in category.iter()? {
        print_bar(word, count, tokens.len());
    }

    Ok(())
}
