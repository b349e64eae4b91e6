use crate::activation_functions::ActivationFunction;
use crate::tensor::Tensor;

/// Logistic sigmoid `1 / (1 + e^-x)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sigmoid;

impl ActivationFunction for Sigmoid {

    fn activate(&self, z: &Tensor) -> Tensor {
        sigmoid(z)
    }

    fn derivative(&self, z: &Tensor) -> Tensor {
        sigmoid_prime(z)
    }

}

fn logistic(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

pub fn sigmoid(z: &Tensor) -> Tensor {
    z.map(logistic)
}

/// Derivative with respect to the pre-activation `z`: `σ(z) * (1 - σ(z))`.
pub fn sigmoid_prime(z: &Tensor) -> Tensor {
    z.map(|x| {
        let s = logistic(x);
        s * (1.0 - s)
    })
}
