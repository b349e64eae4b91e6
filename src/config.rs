use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::sgd::Sgd;

/// Train a sigmoid multilayer perceptron with mini-batch gradient descent.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Training samples, one `label,feature,...` line each (`.gz` accepted)
    #[arg(long)]
    pub train: PathBuf,

    /// Held-out samples; enables baseline and per-epoch accuracy reports
    #[arg(long)]
    pub test: Option<PathBuf>,

    /// Layer sizes from input to output, comma separated
    #[arg(long, value_delimiter = ',', default_value = "784,30,10")]
    pub layers: Vec<usize>,

    #[arg(long, default_value_t = 30)]
    pub epochs: usize,

    #[arg(long, default_value_t = 10)]
    pub batch_size: usize,

    /// Learning rate
    #[arg(long, default_value_t = 3.0)]
    pub eta: f32,

    /// Seed for weight initialization and shuffling; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Divide every feature by 255 after loading
    #[arg(long)]
    pub normalize: bool,
}

impl Args {
    pub fn sgd(&self) -> Result<Sgd> {
        Sgd::new(self.epochs, self.batch_size, self.eta)
    }
}
