use crate::backprop::one_hot;
use crate::data::Sample;
use crate::error::Result;
use crate::loss_functions::{LossFunction, Quadratic};
use crate::mlp::Network;
use crate::tensor::Tensor;

/// Index of the largest entry of a column vector; the first one wins on ties.
///
/// The running maximum starts at `0.0`, not negative infinity, so a vector
/// with no positive entry yields `None`. Sigmoid outputs are always positive,
/// so this only matters for vectors that did not come out of a network.
pub fn max_index(vector: &Tensor) -> Option<usize> {
    debug_assert!(vector.is_column(), "max_index expects a column vector");
    let mut max = 0.0;
    let mut index = None;
    for (i, &val) in vector.data().iter().enumerate() {
        if val > max {
            max = val;
            index = Some(i);
        }
    }
    index
}

/// Number of samples whose decoded prediction equals their label.
pub fn evaluate(network: &Network, samples: &[Sample]) -> Result<usize> {
    let mut correct = 0;
    for sample in samples {
        let output = network.feed_forward(sample.features())?;
        if max_index(&output) == Some(sample.label()) {
            correct += 1;
        }
    }
    Ok(correct)
}

/// Quadratic cost summed over `samples`.
pub fn total_cost(network: &Network, samples: &[Sample]) -> Result<f32> {
    let mut cost = 0.0;
    for sample in samples {
        let output = network.feed_forward(sample.features())?;
        let target = one_hot(sample.label(), network.output_dim())?;
        cost += Quadratic::forward(&output, &target);
    }
    Ok(cost)
}
