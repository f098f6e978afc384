/*
 * @Description  : 训练配置（可由 JSON 读写）
 */

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Device, GanError, MetricMode};

/// `fit`的配置
///
/// JSON 中缺省的字段取默认值：
/// ```json
/// { "epochs": 25, "lr": 0.0002, "latent_size": 128, "batch_size": 128 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    pub epochs: usize,
    pub lr: f32,
    pub latent_size: usize,
    /// 每次更新采样的潜在向量行数
    pub batch_size: usize,
    pub device: Device,
    /// 第一个 epoch 的样本图序号
    pub start_idx: usize,
    pub checkpoint_dir: PathBuf,
    pub sample_dir: PathBuf,
    pub metric_mode: MetricMode,
    pub show_progress: bool,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            epochs: 25,
            lr: 0.0002,
            latent_size: 128,
            batch_size: 128,
            device: Device::Cpu,
            start_idx: 1,
            checkpoint_dir: PathBuf::from("model_backups"),
            sample_dir: PathBuf::from("generated"),
            metric_mode: MetricMode::LastBatch,
            show_progress: true,
        }
    }
}

impl FitConfig {
    pub fn new(epochs: usize, lr: f32, latent_size: usize, batch_size: usize) -> Self {
        Self {
            epochs,
            lr,
            latent_size,
            batch_size,
            ..Self::default()
        }
    }

    pub const fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    pub const fn with_start_idx(mut self, start_idx: usize) -> Self {
        self.start_idx = start_idx;
        self
    }

    pub fn with_checkpoint_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.checkpoint_dir = dir.into();
        self
    }

    pub fn with_sample_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sample_dir = dir.into();
        self
    }

    pub const fn with_metric_mode(mut self, mode: MetricMode) -> Self {
        self.metric_mode = mode;
        self
    }

    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn validate(&self) -> Result<(), GanError> {
        if self.epochs == 0 {
            return Err(GanError::InvalidConfig("epochs 必须大于0".to_string()));
        }
        if self.batch_size == 0 {
            return Err(GanError::InvalidConfig("batch_size 必须大于0".to_string()));
        }
        if self.latent_size == 0 {
            return Err(GanError::InvalidConfig("latent_size 必须大于0".to_string()));
        }
        if !(self.lr.is_finite() && self.lr > 0.) {
            return Err(GanError::InvalidConfig(format!(
                "学习率必须为正的有限值，但得到{}",
                self.lr
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, GanError> {
        serde_json::from_str(json).map_err(|e| GanError::InvalidConfig(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, GanError> {
        serde_json::to_string_pretty(self).map_err(|e| GanError::InvalidConfig(e.to_string()))
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), GanError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, GanError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}
