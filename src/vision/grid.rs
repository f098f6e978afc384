use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, RgbImage};
use tracing::debug;

use super::{ImageShape, ImageType, SampleRenderer, VisionError, sample_file_name};
use crate::data::NormStats;
use crate::tensor::Tensor;

/// 把一批图像拼成网格（每行`nrow`张，图像之间及四周留`padding`像素的黑边）后保存为 PNG
#[derive(Debug, Clone)]
pub struct GridSampleWriter {
    image_shape: ImageShape,
    nrow: usize,
    padding: usize,
}

impl GridSampleWriter {
    pub const fn new(image_shape: ImageShape) -> Self {
        Self {
            image_shape,
            nrow: 8,
            padding: 2,
        }
    }

    pub const fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub const fn image_shape(&self) -> ImageShape {
        self.image_shape
    }

    /// `count`张图像拼成的网格的（宽, 高）像素数
    pub fn grid_size(&self, count: usize) -> (u32, u32) {
        let cols = self.nrow.min(count).max(1);
        let rows = count.div_ceil(cols).max(1);
        let width = cols * (self.image_shape.width() + self.padding) + self.padding;
        let height = rows * (self.image_shape.height() + self.padding) + self.padding;
        (width as u32, height as u32)
    }

    /// 反归一化并拼接成网格图（值截断到 [0, 1] 后量化为 8 位）
    pub fn render_grid(&self, images: &Tensor, stats: &NormStats) -> Result<DynamicImage, VisionError> {
        let shape = images.shape();
        let flat_len = self.image_shape.flat_len();
        if shape.len() != 2 || shape[1] != flat_len {
            return Err(VisionError::ShapeMismatch {
                expected: flat_len,
                got: shape.to_vec(),
            });
        }

        let pixels = stats.denormalize(images)?.to_vec();
        let count = shape[0];
        let (grid_w, grid_h) = self.grid_size(count);
        let cols = self.nrow.min(count).max(1);
        let (h, w) = (self.image_shape.height(), self.image_shape.width());
        let plane = h * w;

        let channels = self.image_shape.channels();
        let mut buffer = vec![0u8; grid_w as usize * grid_h as usize * channels];
        for n in 0..count {
            let origin_x = (n % cols) * (w + self.padding) + self.padding;
            let origin_y = (n / cols) * (h + self.padding) + self.padding;
            let image = &pixels[n * flat_len..(n + 1) * flat_len];
            for y in 0..h {
                for x in 0..w {
                    let target = ((origin_y + y) * grid_w as usize + origin_x + x) * channels;
                    for c in 0..channels {
                        buffer[target + c] = to_u8(image[c * plane + y * w + x]);
                    }
                }
            }
        }

        let grid = match self.image_shape.image_type() {
            ImageType::Gray => GrayImage::from_raw(grid_w, grid_h, buffer).map(DynamicImage::ImageLuma8),
            ImageType::Rgb => RgbImage::from_raw(grid_w, grid_h, buffer).map(DynamicImage::ImageRgb8),
        };
        grid.ok_or(VisionError::ShapeMismatch {
            expected: flat_len,
            got: shape.to_vec(),
        })
    }
}

fn to_u8(value: f32) -> u8 {
    (value.clamp(0., 1.) * 255. + 0.5) as u8
}

impl SampleRenderer for GridSampleWriter {
    fn render(
        &mut self,
        dir: &Path,
        index: usize,
        images: &Tensor,
        stats: &NormStats,
    ) -> Result<PathBuf, VisionError> {
        let path = dir.join(sample_file_name(index));
        self.render_grid(images, stats)?.save(&path)?;
        debug!(path = %path.display(), "样本网格图已保存");
        Ok(path)
    }
}

/// 首次渲染时才由批次宽度与通道数推断（正方形）图像形状的网格写入器
#[derive(Debug, Clone, Default)]
pub struct SquareGridWriter {
    writer: Option<GridSampleWriter>,
}

impl SquareGridWriter {
    pub const fn new() -> Self {
        Self { writer: None }
    }

    pub fn image_shape(&self) -> Option<ImageShape> {
        self.writer.as_ref().map(GridSampleWriter::image_shape)
    }
}

impl SampleRenderer for SquareGridWriter {
    fn render(
        &mut self,
        dir: &Path,
        index: usize,
        images: &Tensor,
        stats: &NormStats,
    ) -> Result<PathBuf, VisionError> {
        let mut writer = match self.writer.take() {
            Some(writer) => writer,
            None => {
                let flat_len = images.shape().get(1).copied().unwrap_or(0);
                GridSampleWriter::new(ImageShape::square(flat_len, stats.channels())?)
            }
        };
        let result = writer.render(dir, index, images, stats);
        self.writer = Some(writer);
        result
    }
}
