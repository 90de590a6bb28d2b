use tracing_subscriber::EnvFilter;

use chanseq::demo::{factorial, primes, squares};
use chanseq::{Config, Pipeline};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chanseq=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "loaded config");
    let pipeline = Pipeline::new(config);

    println!("Squares of 1 ~ 20: {:?}", squares(&pipeline, 20));
    println!("Factorial of 10: {}", factorial(&pipeline, 10));
    println!("The first 100 prime numbers: {:?}", primes(&pipeline, 100));
    Ok(())
}
