//! 数据变换函数
//!
//! 归一化统计量（按通道的均值/标准差）及其正逆变换。

use serde::{Deserialize, Serialize};

use super::DataError;
use crate::tensor::Tensor;

/// 将 0-255 像素值归一化到 0-1
pub fn normalize_pixels(tensor: &Tensor) -> Tensor {
    tensor / 255.0
}

/// 按通道的归一化统计量
///
/// 批次形状为`[N, C * H * W]`（通道优先展平）时，第`c`个通道对应每行中连续的`H * W`列。
/// - 归一化：`(x - mean[c]) / std[c]`
/// - 反归一化：`x * std[c] + mean[c]`
///
/// 常用的`(0.5, 0.5)`把 [0, 1] 的像素映射到 [-1, 1]，与 tanh 输出的生成器相配。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormStats {
    mean: Vec<f32>,
    std: Vec<f32>,
}

impl Default for NormStats {
    fn default() -> Self {
        Self {
            mean: vec![0.5],
            std: vec![0.5],
        }
    }
}

impl NormStats {
    pub fn new(mean: Vec<f32>, std: Vec<f32>) -> Result<Self, DataError> {
        if mean.is_empty() || mean.len() != std.len() {
            return Err(DataError::InvalidArgument(format!(
                "NormStats: 均值与标准差的通道数必须一致且非零，得到 {} vs {}",
                mean.len(),
                std.len()
            )));
        }
        if std.iter().any(|&s| s.is_nan() || s <= 0.) {
            return Err(DataError::InvalidArgument(format!(
                "NormStats: 标准差必须为正，得到 {std:?}"
            )));
        }
        Ok(Self { mean, std })
    }

    /// 所有通道共用同一组统计量
    pub fn uniform(channels: usize, mean: f32, std: f32) -> Result<Self, DataError> {
        Self::new(vec![mean; channels], vec![std; channels])
    }

    pub fn channels(&self) -> usize {
        self.mean.len()
    }

    pub fn mean(&self) -> &[f32] {
        &self.mean
    }

    pub fn std(&self) -> &[f32] {
        &self.std
    }

    pub fn normalize(&self, batch: &Tensor) -> Result<Tensor, DataError> {
        self.apply(batch, |x, mean, std| (x - mean) / std)
    }

    pub fn denormalize(&self, batch: &Tensor) -> Result<Tensor, DataError> {
        self.apply(batch, |x, mean, std| x * std + mean)
    }

    fn apply(&self, batch: &Tensor, f: impl Fn(f32, f32, f32) -> f32) -> Result<Tensor, DataError> {
        let shape = batch.shape();
        let row_len = if shape.len() == 2 { shape[1] } else { 0 };
        if row_len == 0 || row_len % self.channels() != 0 {
            return Err(DataError::ShapeMismatch {
                expected: vec![shape.first().copied().unwrap_or(0), self.channels()],
                got: shape.to_vec(),
            });
        }

        let plane = row_len / self.channels();
        let data: Vec<f32> = batch
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let c = (i % row_len) / plane;
                f(x, self.mean[c], self.std[c])
            })
            .collect();
        Tensor::try_new(&data, shape).map_err(|e| DataError::FormatError(e.to_string()))
    }
}
