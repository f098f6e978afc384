use ndarray::Ix2;

use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;

impl Tensor {
    /// 实现矩阵乘法。只接受2阶张量，
    /// 且需要保证前一个张量的列数（col）等于后一个张量的行数（row），否则返回错误。
    pub fn mat_mul(&self, other: &Self) -> Result<Self, TensorError> {
        let lhs = self
            .data
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| TensorError::NotMatrix(self.dimension()))?;
        let rhs = other
            .data
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| TensorError::NotMatrix(other.dimension()))?;

        if lhs.ncols() != rhs.nrows() {
            return Err(TensorError::OperatorError {
                operator: Operator::MatMul,
                tensor1_shape: self.shape().to_vec(),
                tensor2_shape: other.shape().to_vec(),
            });
        }

        Ok(Self::from_array(lhs.dot(&rhs).into_dyn()))
    }
}
