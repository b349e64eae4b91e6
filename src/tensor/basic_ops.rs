use std::ops::{Add, AddAssign, Sub};

use crate::tensor::Tensor;

impl Add for &Tensor {
    type Output = Tensor;

    fn add(self, rhs: &Tensor) -> Tensor {
        assert_eq!(self.shape(), rhs.shape(), "Tensor add: shape mismatch {:?} vs {:?}", self.shape(), rhs.shape());
        let data = self.data.iter().zip(rhs.data.iter()).map(|(a, b)| a + b).collect();
        Tensor { data, rows: self.rows, cols: self.cols }
    }
}

impl Sub for &Tensor {
    type Output = Tensor;

    fn sub(self, rhs: &Tensor) -> Tensor {
        assert_eq!(self.shape(), rhs.shape(), "Tensor sub: shape mismatch {:?} vs {:?}", self.shape(), rhs.shape());
        let data = self.data.iter().zip(rhs.data.iter()).map(|(a, b)| a - b).collect();
        Tensor { data, rows: self.rows, cols: self.cols }
    }
}

impl AddAssign<&Tensor> for Tensor {
    fn add_assign(&mut self, rhs: &Tensor) {
        assert_eq!(self.shape(), rhs.shape(), "Tensor add_assign: shape mismatch {:?} vs {:?}", self.shape(), rhs.shape());
        self.data.iter_mut().zip(rhs.data.iter()).for_each(|(a, b)| *a += b);
    }
}
