use std::fmt;

use log::{debug, info, log_enabled, trace, Level};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::backprop::{backprop, one_hot, Gradients};
use crate::data::Sample;
use crate::error::{Error, Result};
use crate::helpers::{evaluate, total_cost};
use crate::mlp::Network;

/// Mini-batch stochastic gradient descent settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub epochs: usize,
    pub batch_size: usize,
    /// Learning rate.
    pub eta: f32,
}

/// Outcome of one training epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochReport {
    pub epoch: usize,
    /// Correct test predictions, when a test set was supplied.
    pub correct: Option<usize>,
    pub total: usize,
}

impl EpochReport {
    pub fn accuracy(&self) -> Option<f64> {
        match self.correct {
            Some(correct) if self.total > 0 => Some(correct as f64 / self.total as f64),
            _ => None,
        }
    }
}

impl fmt::Display for EpochReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.correct {
            Some(correct) => write!(f, "Epoch {}: {} / {}", self.epoch, correct, self.total),
            None => write!(f, "Epoch {} complete", self.epoch),
        }
    }
}

impl Sgd {
    pub fn new(epochs: usize, batch_size: usize, eta: f32) -> Result<Self> {
        let sgd = Self { epochs, batch_size, eta };
        sgd.validate()?;
        Ok(sgd)
    }

    fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::Configuration("mini-batch size must be at least 1".to_owned()));
        }
        check_eta(self.eta)
    }

    /// Trains `network` for `self.epochs` epochs.
    ///
    /// Each epoch shuffles `training` in place, splits it into consecutive
    /// mini-batches of exactly `batch_size` samples (a shorter trailing batch
    /// is skipped) and applies one update per batch. When `test` is given the
    /// network is evaluated on it after every epoch.
    ///
    /// Every training sample is checked against the network up front, so a bad
    /// sample fails the run even if it would land in a skipped trailing batch.
    pub fn train<R: Rng + ?Sized>(
        &self,
        network: &mut Network,
        training: &mut [Sample],
        test: Option<&[Sample]>,
        rng: &mut R,
    ) -> Result<Vec<EpochReport>> {
        self.validate()?;
        check_samples(network, training)?;

        let mut reports = Vec::with_capacity(self.epochs);
        for epoch in 0..self.epochs {
            training.shuffle(rng);

            for (i, batch) in training.chunks_exact(self.batch_size).enumerate() {
                trace!("epoch {epoch}: mini-batch {i}");
                update_mini_batch(network, batch, self.eta)?;
            }

            if log_enabled!(Level::Debug) {
                if let Ok(cost) = total_cost(network, training) {
                    debug!("epoch {epoch}: training cost {:.6}", cost / training.len().max(1) as f32);
                }
            }

            let report = match test {
                Some(test) => EpochReport {
                    epoch,
                    correct: Some(evaluate(network, test)?),
                    total: test.len(),
                },
                None => EpochReport { epoch, correct: None, total: 0 },
            };
            info!("{report}");
            reports.push(report);
        }

        Ok(reports)
    }
}

/// Applies one gradient descent step using the summed gradients of `batch`:
/// `w := w − (eta / |batch|) · ∇w`, likewise for the biases.
///
/// Every sample's gradient is computed before any parameter is written, so a
/// failing sample leaves `network` untouched.
pub fn update_mini_batch(network: &mut Network, batch: &[Sample], eta: f32) -> Result<()> {
    check_eta(eta)?;
    if batch.is_empty() {
        return Err(Error::Configuration("mini-batch must not be empty".to_owned()));
    }

    let mut sum = Gradients::zeros_like(network);
    for sample in batch {
        let grads = backprop(network, sample.features(), sample.label())?;
        sum.accumulate(&grads);
    }

    let step = eta / batch.len() as f32;
    for (i, (nabla_b, nabla_w)) in sum.nabla_b.iter().zip(&sum.nabla_w).enumerate() {
        let weights = network.weights(i)? - &nabla_w.scale(step);
        network.set_weights(i, weights)?;

        let biases = network.biases(i)? - &nabla_b.scale(step);
        network.set_biases(i, biases)?;
    }

    Ok(())
}

fn check_samples(network: &Network, samples: &[Sample]) -> Result<()> {
    for sample in samples {
        network.check_input(sample.features())?;
        one_hot(sample.label(), network.output_dim())?;
    }
    Ok(())
}

fn check_eta(eta: f32) -> Result<()> {
    if !(eta.is_finite() && eta > 0.0) {
        return Err(Error::Configuration(format!("learning rate must be positive and finite, got {eta}")));
    }
    Ok(())
}
