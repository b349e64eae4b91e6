mod loss_function;

pub use self::loss_function::{cost_derivative, LossFunction, Quadratic};
