use rand::Rng;

use crate::error::{Error, Result};
use crate::tensor::Tensor;

/// One fully-connected connection between two adjacent layers of neurons.
///
/// `weights` is `(out, in)` and `biases` is `(out, 1)`. Both are replaced
/// wholesale, never edited in place, so a failed replacement leaves the layer
/// exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    weights: Tensor,
    biases: Tensor,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(out_dim: usize, in_dim: usize, rng: &mut R) -> Self {
        let biases = Tensor::random_gaussian(out_dim, 1, rng);
        let weights = Tensor::random_gaussian(out_dim, in_dim, rng);
        Self { weights, biases }
    }

    pub fn from_parameters(weights: Tensor, biases: Tensor) -> Result<Self> {
        let expected = (weights.rows(), 1);
        if biases.shape() != expected {
            return Err(Error::ShapeMismatch { what: "biases", expected, got: biases.shape() });
        }
        Ok(Self { weights, biases })
    }

    pub fn in_dim(&self) -> usize {
        self.weights.cols()
    }

    pub fn out_dim(&self) -> usize {
        self.weights.rows()
    }

    pub fn weights(&self) -> &Tensor {
        &self.weights
    }

    pub fn biases(&self) -> &Tensor {
        &self.biases
    }

    pub fn set_weights(&mut self, weights: Tensor) -> Result<()> {
        let expected = self.weights.shape();
        if weights.shape() != expected {
            return Err(Error::ShapeMismatch { what: "weights", expected, got: weights.shape() });
        }
        self.weights = weights;
        Ok(())
    }

    pub fn set_biases(&mut self, biases: Tensor) -> Result<()> {
        let expected = self.biases.shape();
        if biases.shape() != expected {
            return Err(Error::ShapeMismatch { what: "biases", expected, got: biases.shape() });
        }
        self.biases = biases;
        Ok(())
    }

    /// Pre-activation `z = W·a + b` for the activations `a` of the previous layer.
    pub fn weighted_input(&self, input: &Tensor) -> Tensor {
        &self.weights.mul(input) + &self.biases
    }

    pub fn num_params(&self) -> usize {
        self.weights.len() + self.biases.len()
    }
}
