use crate::tensor::Tensor;

pub trait LossFunction {

    fn forward(predicted: &Tensor, target: &Tensor) -> f32;
    fn backward(predicted: &Tensor, target: &Tensor) -> Tensor;

}

/// Quadratic cost `½‖a − y‖²`.
pub struct Quadratic;

impl LossFunction for Quadratic {

    fn forward(predicted: &Tensor, target: &Tensor) -> f32 {
        let diff = predicted - target;
        0.5 * diff.square().sum()
    }

    // ∂C/∂a, no 2/n factor: the ½ in the cost cancels the square
    fn backward(predicted: &Tensor, target: &Tensor) -> Tensor {
        predicted - target
    }

}

/// Partial derivatives `∂C/∂a` of the quadratic cost for the output activations.
pub fn cost_derivative(output_activations: &Tensor, target: &Tensor) -> Tensor {
    Quadratic::backward(output_activations, target)
}
