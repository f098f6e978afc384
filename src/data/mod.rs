//! 数据加载模块
//!
//! 提供数据集、批处理与归一化功能。
//!
//! # 主要组件
//!
//! - [`DataLoader`]: `PyTorch` 风格的数据批量加载器
//! - [`TensorDataset`]: 持有样本的数据集
//! - [`BatchSource`]: 训练循环所需的“每个 epoch 产出一遍批次”的数据源抽象
//! - [`NormStats`]: 按通道的归一化统计量（均值/标准差）
//! - [`DataError`]: 数据加载错误类型
//!
//! # 使用示例
//!
//! ```ignore
//! use only_gan::data::{DataLoader, TensorDataset};
//!
//! let dataset = TensorDataset::new(images)?;
//! let loader = DataLoader::new(dataset, 128)?.shuffle(true).seed(42);
//! for batch in loader.iter() {
//!     // batch: [batch_size, features]
//! }
//! ```

mod dataloader;
pub mod error;
mod source;
pub mod transforms;

#[cfg(test)]
mod tests;

pub use dataloader::{DataLoader, DataLoaderIterator, TensorDataset};
pub use error::DataError;
pub use source::BatchSource;
pub use transforms::{NormStats, normalize_pixels};
