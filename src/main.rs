use anyhow::Context;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use sgd_mlp::config::Args;
use sgd_mlp::data::{load_samples, normalize};
use sgd_mlp::helpers::evaluate;
use sgd_mlp::Network;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let sgd = args.sgd()?;

    let mut rng = match args.seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    };

    // topology errors abort here, before any data is read
    let mut network = Network::new(&args.layers, &mut rng)?;
    info!("{network}");

    let test = match &args.test {
        Some(path) => {
            let mut samples = load_samples(path)
                .with_context(|| format!("failed to load test samples from {}", path.display()))?;
            if args.normalize {
                normalize(&mut samples, 255.0);
            }
            let correct = evaluate(&network, &samples)?;
            info!("Initial evaluation: {} / {}", correct, samples.len());
            Some(samples)
        }
        None => None,
    };

    let mut training = load_samples(&args.train)
        .with_context(|| format!("failed to load training samples from {}", args.train.display()))?;
    if args.normalize {
        normalize(&mut training, 255.0);
    }

    sgd.train(&mut network, &mut training, test.as_deref(), &mut rng)?;
    Ok(())
}
