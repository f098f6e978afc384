/*
 * @Description  : 本模块提供生成样本的可视化：把一批（展平的）图像张量拼接成网格图并保存到本地。
 *                 在本模块中，不严谨地说：
 *                 1. 图像张量按通道优先展平，即每行为 [C, H, W] 依次排开的 C*H*W 个数；
 *                 2. “灰度”（图）等同于英文中luma、grey、gray的概念。
 */

mod grid;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::data::{DataError, NormStats};
use crate::tensor::Tensor;

pub use grid::{GridSampleWriter, SquareGridWriter};

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("图像编码或写入失败：{0}")]
    Image(#[from] image::ImageError),
    #[error("IO 错误：{0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("只支持1（灰度）或3（RGB）个通道，但得到{0}个")]
    UnsupportedChannels(usize),
    #[error("无法把长度为{flat_len}的向量解释为{channels}通道的正方形图像")]
    NotSquare { flat_len: usize, channels: usize },
    #[error("图像批次形状应为[N, {expected}]，但得到{got:?}")]
    ShapeMismatch { expected: usize, got: Vec<usize> },
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ImageType {
    Gray, // 单通道
    Rgb,  // 3通道
}

/// 单张图像的形状（通道、高、宽）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageShape {
    channels: usize,
    height: usize,
    width: usize,
}

impl ImageShape {
    pub fn new(channels: usize, height: usize, width: usize) -> Result<Self, VisionError> {
        if channels != 1 && channels != 3 {
            return Err(VisionError::UnsupportedChannels(channels));
        }
        Ok(Self {
            channels,
            height,
            width,
        })
    }

    /// 由展平长度推断正方形图像的形状：`flat_len = channels * side * side`
    pub fn square(flat_len: usize, channels: usize) -> Result<Self, VisionError> {
        let plane = if channels == 0 { 0 } else { flat_len / channels };
        let side = (plane as f64).sqrt().round() as usize;
        if side == 0 || channels * side * side != flat_len {
            return Err(VisionError::NotSquare { flat_len, channels });
        }
        Self::new(channels, side, side)
    }

    pub const fn channels(&self) -> usize {
        self.channels
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn image_type(&self) -> ImageType {
        if self.channels == 1 {
            ImageType::Gray
        } else {
            ImageType::Rgb
        }
    }

    /// 单张图像展平后的元素个数
    pub const fn flat_len(&self) -> usize {
        self.channels * self.height * self.width
    }
}

/// 每个 epoch 结束时，把生成器在固定潜在向量上的输出写到`dir`中
pub trait SampleRenderer {
    /// `images`为归一化空间中的生成结果，形状`[N, C*H*W]`；返回写出的文件路径
    fn render(
        &mut self,
        dir: &Path,
        index: usize,
        images: &Tensor,
        stats: &NormStats,
    ) -> Result<PathBuf, VisionError>;
}

/// 样本文件名：序号补零到4位，如`generated-images-0001.png`
pub fn sample_file_name(index: usize) -> String {
    format!("generated-images-{index:04}.png")
}
