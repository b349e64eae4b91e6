use crate::tensor::Tensor;

/// Elementwise activation applied to a layer's pre-activations.
///
/// Both methods take the pre-activation `z` and return a new tensor of the
/// same shape; the input is never modified.
pub trait ActivationFunction {

    fn activate(&self, z: &Tensor) -> Tensor;
    fn derivative(&self, z: &Tensor) -> Tensor;

}
