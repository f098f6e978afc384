/*
 * @Description  : 张量的原地（in-place）运算：`+=`、`-=`、`*=`。
 *                 右操作数须能广播到左操作数的形状，左操作数形状保持不变。
 */

use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;
use std::ops::{AddAssign, MulAssign, SubAssign};

impl AddAssign for Tensor {
    fn add_assign(&mut self, other: Self) {
        *self += &other;
    }
}

impl<'a> AddAssign<&'a Self> for Tensor {
    fn add_assign(&mut self, other: &'a Self) {
        check_assignable(self, other, Operator::AddAssign);
        self.data += &other.data;
    }
}

impl AddAssign<f32> for Tensor {
    fn add_assign(&mut self, scalar: f32) {
        self.data += scalar;
    }
}

impl<'a> SubAssign<&'a Self> for Tensor {
    fn sub_assign(&mut self, other: &'a Self) {
        check_assignable(self, other, Operator::SubAssign);
        self.data -= &other.data;
    }
}

impl SubAssign for Tensor {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl MulAssign<f32> for Tensor {
    fn mul_assign(&mut self, scalar: f32) {
        self.data *= scalar;
    }
}

impl<'a> MulAssign<&'a Self> for Tensor {
    fn mul_assign(&mut self, other: &'a Self) {
        check_assignable(self, other, Operator::MulAssign);
        self.data *= &other.data;
    }
}

/// # Panics
/// 右操作数无法广播到左操作数的形状时
fn check_assignable(target: &Tensor, other: &Tensor, operator: Operator) {
    assert!(
        other.data.broadcast(target.shape()).is_some(),
        "{}",
        TensorError::OperatorError {
            operator,
            tensor1_shape: target.shape().to_vec(),
            tensor2_shape: other.shape().to_vec(),
        }
    );
}
