/*
 * @Description  : 批次数据源：训练循环每个 epoch 调用一次`batches()`，完整遍历一遍数据
 */

use super::{DataError, DataLoader};
use crate::tensor::Tensor;

/// 可重复遍历的批次数据源
///
/// 批次的形状应为`[rows, features...]`，行数可小于训练时设定的 batch_size（如最后一个不完整批次）。
pub trait BatchSource {
    /// 开始新一轮（epoch）遍历
    fn batches(&self) -> Box<dyn Iterator<Item = Result<Tensor, DataError>> + '_>;

    /// 每轮的批次数（未知时为 None），仅用于显示进度
    fn num_batches(&self) -> Option<usize> {
        None
    }
}

impl BatchSource for DataLoader {
    fn batches(&self) -> Box<dyn Iterator<Item = Result<Tensor, DataError>> + '_> {
        Box::new(self.iter().map(Ok::<Tensor, DataError>))
    }

    fn num_batches(&self) -> Option<usize> {
        Some(DataLoader::num_batches(self))
    }
}

impl BatchSource for [Tensor] {
    fn batches(&self) -> Box<dyn Iterator<Item = Result<Tensor, DataError>> + '_> {
        Box::new(self.iter().cloned().map(Ok::<Tensor, DataError>))
    }

    fn num_batches(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl BatchSource for Vec<Tensor> {
    fn batches(&self) -> Box<dyn Iterator<Item = Result<Tensor, DataError>> + '_> {
        self.as_slice().batches()
    }

    fn num_batches(&self) -> Option<usize> {
        Some(self.len())
    }
}
