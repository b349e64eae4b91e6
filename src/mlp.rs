use std::fmt;

use rand::Rng;

use crate::activation_functions::sigmoid;
use crate::error::{Error, Result};
use crate::layer::Layer;
use crate::tensor::Tensor;

/// Fully-connected sigmoid network with a fixed topology.
///
/// `layers[i]` maps the activations of neuron layer `i` to the
/// pre-activations of neuron layer `i + 1`, so a network built from `n`
/// layer sizes holds `n - 1` weight matrices and `n - 1` bias vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    sizes: Vec<usize>,
    layers: Vec<Layer>,
}

impl Network {
    /// Builds a network whose every weight and bias is drawn from N(0, 1).
    ///
    /// Fails with [`Error::Configuration`] before drawing anything if there
    /// are fewer than two layers or a layer is empty.
    pub fn new<R: Rng + ?Sized>(sizes: &[usize], rng: &mut R) -> Result<Self> {
        validate_sizes(sizes)?;

        let layers = sizes
            .windows(2)
            .map(|w| Layer::new(w[1], w[0], rng))
            .collect();

        Ok(Self { sizes: sizes.to_vec(), layers })
    }

    /// Builds a network from explicit parameters, `weights[i]` and `biases[i]`
    /// shaped as for the connection between layers `i` and `i + 1`.
    pub fn from_parameters(sizes: &[usize], weights: Vec<Tensor>, biases: Vec<Tensor>) -> Result<Self> {
        validate_sizes(sizes)?;

        let connections = sizes.len() - 1;
        if weights.len() != connections || biases.len() != connections {
            return Err(Error::Configuration(format!(
                "expected {} weight matrices and bias vectors, got {} and {}",
                connections,
                weights.len(),
                biases.len()
            )));
        }

        let mut layers = Vec::with_capacity(connections);
        for (i, (w, b)) in weights.into_iter().zip(biases).enumerate() {
            let expected = (sizes[i + 1], sizes[i]);
            if w.shape() != expected {
                return Err(Error::ShapeMismatch { what: "weights", expected, got: w.shape() });
            }
            layers.push(Layer::from_parameters(w, b)?);
        }

        Ok(Self { sizes: sizes.to_vec(), layers })
    }

    /// Number of neuron layers, input and output included.
    pub fn num_layers(&self) -> usize {
        self.sizes.len()
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn input_dim(&self) -> usize {
        self.sizes[0]
    }

    pub fn output_dim(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn num_params(&self) -> usize {
        self.layers.iter().map(Layer::num_params).sum()
    }

    pub fn biases(&self, layer: usize) -> Result<&Tensor> {
        Ok(self.layer(layer)?.biases())
    }

    /// Replaces the biases of `layer`. On error the network is unchanged.
    pub fn set_biases(&mut self, layer: usize, biases: Tensor) -> Result<()> {
        self.layer_mut(layer)?.set_biases(biases)
    }

    pub fn weights(&self, layer: usize) -> Result<&Tensor> {
        Ok(self.layer(layer)?.weights())
    }

    /// Replaces the weights of `layer`. On error the network is unchanged.
    pub fn set_weights(&mut self, layer: usize, weights: Tensor) -> Result<()> {
        self.layer_mut(layer)?.set_weights(weights)
    }

    /// Runs `input` through every layer and returns the output activations.
    pub fn feed_forward(&self, input: &Tensor) -> Result<Tensor> {
        self.check_input(input)?;

        let mut activation = input.clone();
        for layer in &self.layers {
            activation = sigmoid(&layer.weighted_input(&activation));
        }
        Ok(activation)
    }

    pub(crate) fn check_input(&self, input: &Tensor) -> Result<()> {
        let expected = (self.input_dim(), 1);
        if input.shape() != expected {
            return Err(Error::InputShape { expected, got: input.shape() });
        }
        Ok(())
    }

    fn layer(&self, layer: usize) -> Result<&Layer> {
        let layers = self.layers.len();
        self.layers.get(layer).ok_or(Error::IndexOutOfRange { layer, layers })
    }

    fn layer_mut(&mut self, layer: usize) -> Result<&mut Layer> {
        let layers = self.layers.len();
        self.layers.get_mut(layer).ok_or(Error::IndexOutOfRange { layer, layers })
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizes: Vec<String> = self.sizes.iter().map(ToString::to_string).collect();
        write!(
            f,
            "Network [{}]: {} layers, {} weight matrices, {} parameters",
            sizes.join("-"),
            self.num_layers(),
            self.layers.len(),
            self.num_params()
        )
    }
}

fn validate_sizes(sizes: &[usize]) -> Result<()> {
    if sizes.len() < 2 {
        return Err(Error::Configuration(format!(
            "a network needs at least an input and an output layer, got {} layer(s)",
            sizes.len()
        )));
    }
    if let Some(i) = sizes.iter().position(|&s| s == 0) {
        return Err(Error::Configuration(format!("layer {i} has no neurons")));
    }
    Ok(())
}
