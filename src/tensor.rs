mod basic_ops;
#[allow(clippy::module_inception)]
mod tensor;

pub use self::tensor::Tensor;
