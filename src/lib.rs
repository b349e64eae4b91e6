pub mod activation_functions;
pub mod backprop;
pub mod config;
pub mod data;
pub mod error;
pub mod helpers;
pub mod layer;
pub mod loss_functions;
pub mod mlp;
pub mod sgd;
pub mod tensor;

pub use error::{Error, Result};
pub use mlp::Network;
pub use tensor::Tensor;
