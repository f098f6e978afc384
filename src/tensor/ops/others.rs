/*
 * @Description  : 张量的其他运算：转置、归约、逐元素函数（激活函数等）
 */

use ndarray::{Axis, Ix2, Zip};

use crate::errors::TensorError;
use crate::tensor::Tensor;

impl Tensor {
    /// 2阶张量的转置
    pub fn transpose(&self) -> Result<Self, TensorError> {
        let view = self
            .data
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| TensorError::NotMatrix(self.dimension()))?;
        Ok(Self::from_array(view.t().to_owned().into_dyn()))
    }

    /// 所有元素之和
    pub fn sum(&self) -> f32 {
        self.data.sum()
    }

    /// 所有元素的均值；空张量返回NaN
    pub fn mean(&self) -> f32 {
        if self.size() == 0 {
            return f32::NAN;
        }
        self.sum() / self.size() as f32
    }

    pub fn sqrt(&self) -> Self {
        self.map(f32::sqrt)
    }

    /// 对每个元素调用`f`，返回同形状的新张量
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self::from_array(self.data.mapv(f))
    }

    /// 两个同形状张量逐元素组合
    pub fn zip_map(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Result<Self, TensorError> {
        if !self.is_same_shape(other) {
            return Err(TensorError::IncompatibleShape);
        }
        let mut out = self.data.clone();
        Zip::from(&mut out)
            .and(&other.data)
            .for_each(|a, &b| *a = f(*a, b));
        Ok(Self::from_array(out))
    }

    pub fn sigmoid(&self) -> Self {
        self.map(|x| 1. / (1. + (-x).exp()))
    }

    pub fn tanh(&self) -> Self {
        self.map(f32::tanh)
    }

    /// `x > 0`时为`x`，否则为`alpha * x`
    pub fn leaky_relu(&self, alpha: f32) -> Self {
        self.map(|x| if x > 0. { x } else { alpha * x })
    }

    pub fn clamp(&self, min: f32, max: f32) -> Self {
        self.map(|x| x.clamp(min, max))
    }

    /// 对广播产生的维度求和，使结果回到`target`形状（反向传播中梯度的“反广播”）
    pub fn sum_to_shape(&self, target: &[usize]) -> Result<Self, TensorError> {
        if self.shape() == target {
            return Ok(self.clone());
        }
        if target.len() > self.dimension() {
            return Err(TensorError::IncompatibleShape);
        }

        let mut data = self.data.clone();
        // 先把多出来的前导维度全部求和掉
        while data.ndim() > target.len() {
            data = data.sum_axis(Axis(0));
        }
        for (axis, &dim) in target.iter().enumerate() {
            let current = data.shape()[axis];
            if dim == current {
                continue;
            }
            if dim != 1 {
                return Err(TensorError::IncompatibleShape);
            }
            data = data.sum_axis(Axis(axis)).insert_axis(Axis(axis));
        }
        Ok(Self::from_array(data))
    }

    /// 按第0维（行）取出一批样本，组成新张量
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        Self::from_array(self.data.select(Axis(0), indices))
    }

    /// 将形状修改为`shape`（元素总数必须一致）
    pub fn reshape(&self, shape: &[usize]) -> Result<Self, TensorError> {
        Self::try_new(&self.to_vec(), shape)
    }
}
