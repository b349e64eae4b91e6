mod activation_function;
mod sigmoid;

pub use self::activation_function::ActivationFunction;
pub use self::sigmoid::{sigmoid, sigmoid_prime, Sigmoid};
