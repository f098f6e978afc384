/*
 * @Description  : DataLoader - PyTorch 风格的数据批量加载器
 *
 * 提供统一的数据迭代 API，支持：
 * - 自动分批 (batch_size)
 * - 随机打乱 (shuffle)，每次迭代（即每个 epoch）重新打乱
 * - 丢弃不完整批次 (drop_last)
 */

use std::cell::Cell;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::DataError;
use crate::tensor::Tensor;

/// TensorDataset - 持有样本的数据集（第一维为样本数）
///
/// GAN 训练只需要样本本身，不需要标签。
#[derive(Clone)]
pub struct TensorDataset {
    samples: Tensor,
}

impl TensorDataset {
    /// 创建新的 TensorDataset，`samples`至少为1阶张量
    pub fn new(samples: Tensor) -> Result<Self, DataError> {
        if samples.dimension() == 0 {
            return Err(DataError::ShapeMismatch {
                expected: vec![0],
                got: samples.shape().to_vec(),
            });
        }
        Ok(Self { samples })
    }

    /// 获取样本数量
    pub fn len(&self) -> usize {
        self.samples.shape()[0]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn samples(&self) -> &Tensor {
        &self.samples
    }
}

/// DataLoader - PyTorch 风格的数据批量加载器
///
/// ```ignore
/// let loader = DataLoader::new(dataset, 32)?
///     .shuffle(true)
///     .drop_last(true);
///
/// for batch in loader.iter() {
///     // ...
/// }
/// ```
pub struct DataLoader {
    dataset: TensorDataset,
    batch_size: usize,
    shuffle: bool,
    drop_last: bool,
    seed: Option<u64>,
    /// 已开始的迭代次数：带种子时每个 epoch 的打乱顺序不同但可复现
    epoch: Cell<u64>,
}

impl DataLoader {
    pub fn new(dataset: TensorDataset, batch_size: usize) -> Result<Self, DataError> {
        if batch_size == 0 {
            return Err(DataError::InvalidArgument(
                "DataLoader: batch_size 必须大于 0".to_string(),
            ));
        }
        Ok(Self {
            dataset,
            batch_size,
            shuffle: false,
            drop_last: false,
            seed: None,
            epoch: Cell::new(0),
        })
    }

    /// 设置是否打乱数据
    pub const fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// 设置是否丢弃最后一个不完整的批次
    pub const fn drop_last(mut self, drop_last: bool) -> Self {
        self.drop_last = drop_last;
        self
    }

    /// 设置随机种子（用于 shuffle）
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// 获取批次数量
    pub fn num_batches(&self) -> usize {
        let n = self.dataset.len();
        if self.drop_last {
            n / self.batch_size
        } else {
            n.div_ceil(self.batch_size)
        }
    }

    /// 获取数据集大小
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// 创建迭代器（一次完整遍历即一个 epoch）
    pub fn iter(&self) -> DataLoaderIterator<'_> {
        let epoch = self.epoch.get();
        self.epoch.set(epoch + 1);

        let mut indices: Vec<usize> = (0..self.dataset.len()).collect();
        if self.shuffle {
            match self.seed {
                Some(seed) => indices.shuffle(&mut StdRng::seed_from_u64(seed.wrapping_add(epoch))),
                None => indices.shuffle(&mut rand::thread_rng()),
            }
        }

        DataLoaderIterator {
            loader: self,
            indices,
            current_batch: 0,
        }
    }
}

/// DataLoader 迭代器
pub struct DataLoaderIterator<'a> {
    loader: &'a DataLoader,
    indices: Vec<usize>,
    current_batch: usize,
}

impl Iterator for DataLoaderIterator<'_> {
    type Item = Tensor;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.indices.len();
        let batch_size = self.loader.batch_size;
        let start = self.current_batch * batch_size;
        if start >= n {
            return None;
        }

        let end = (start + batch_size).min(n);
        // 如果 drop_last 且批次不完整，则跳过
        if self.loader.drop_last && end - start < batch_size {
            return None;
        }

        self.current_batch += 1;
        Some(
            self.loader
                .dataset
                .samples
                .select_rows(&self.indices[start..end]),
        )
    }
}
