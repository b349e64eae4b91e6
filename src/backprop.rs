use crate::activation_functions::{sigmoid, sigmoid_prime};
use crate::error::{Error, Result};
use crate::loss_functions::cost_derivative;
use crate::mlp::Network;
use crate::tensor::Tensor;

/// Per-parameter gradients, index-aligned with the network's layers:
/// `nabla_b[i]` and `nabla_w[i]` have the shapes of `biases(i)` and `weights(i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub nabla_b: Vec<Tensor>,
    pub nabla_w: Vec<Tensor>,
}

impl Gradients {
    /// Zero gradients shaped like `network`'s parameters.
    pub fn zeros_like(network: &Network) -> Self {
        let layers = network.layers();
        Self {
            nabla_b: layers.iter().map(|l| Tensor::zeros(l.out_dim(), 1)).collect(),
            nabla_w: layers.iter().map(|l| Tensor::zeros(l.out_dim(), l.in_dim())).collect(),
        }
    }

    /// Adds `other` into `self`, layer by layer.
    pub fn accumulate(&mut self, other: &Gradients) {
        assert_eq!(self.nabla_b.len(), other.nabla_b.len(), "Gradients accumulate: layer count mismatch");
        for (acc, g) in self.nabla_b.iter_mut().zip(&other.nabla_b) {
            *acc += g;
        }
        for (acc, g) in self.nabla_w.iter_mut().zip(&other.nabla_w) {
            *acc += g;
        }
    }

    pub fn num_layers(&self) -> usize {
        self.nabla_b.len()
    }
}

/// Column vector of length `classes` with a 1 at `label`.
pub fn one_hot(label: usize, classes: usize) -> Result<Tensor> {
    if label >= classes {
        return Err(Error::LabelOutOfRange { label, classes });
    }
    let mut data = vec![0.0; classes];
    data[label] = 1.0;
    Ok(Tensor::column(data))
}

/// Gradient of the quadratic cost `½‖a_L − y‖²` for a single sample, where
/// `y` is the one-hot encoding of `label`.
pub fn backprop(network: &Network, input: &Tensor, label: usize) -> Result<Gradients> {
    network.check_input(input)?;
    let target = one_hot(label, network.output_dim())?;

    let layers = network.layers();
    let n = layers.len();

    // activations[i] feeds layers[i]; activations[n] is the output.
    // zs[i] is the pre-activation produced by layers[i].
    let mut activations = Vec::with_capacity(n + 1);
    let mut zs = Vec::with_capacity(n);
    activations.push(input.clone());
    for layer in layers {
        let z = layer.weighted_input(&activations[activations.len() - 1]);
        activations.push(sigmoid(&z));
        zs.push(z);
    }

    let mut nabla_b = vec![Tensor::zeros(0, 0); n];
    let mut nabla_w = vec![Tensor::zeros(0, 0); n];

    let mut delta = cost_derivative(&activations[n], &target).hadamard(&sigmoid_prime(&zs[n - 1]));
    nabla_w[n - 1] = delta.outer(&activations[n - 1]);
    nabla_b[n - 1] = delta;

    for l in (0..n - 1).rev() {
        let back = layers[l + 1].weights().transpose().mul(&nabla_b[l + 1]);
        delta = back.hadamard(&sigmoid_prime(&zs[l]));
        nabla_w[l] = delta.outer(&activations[l]);
        nabla_b[l] = delta;
    }

    Ok(Gradients { nabla_b, nabla_w })
}
