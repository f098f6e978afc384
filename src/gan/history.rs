/*
 * @Description  : 每个 epoch 的损失与得分记录
 */

use serde::{Deserialize, Serialize};

use super::DiscriminatorStep;

/// 每个 epoch 记录哪一个值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricMode {
    /// 该 epoch 最后一个批次的值（打印的也是它）
    #[default]
    LastBatch,
    /// 该 epoch 所有批次的算术平均
    EpochMean,
}

/// 一个 epoch 的指标
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochMetrics {
    pub loss_g: f32,
    pub loss_d: f32,
    pub real_score: f32,
    pub fake_score: f32,
}

impl EpochMetrics {
    /// 形如`Epoch [1/25], loss_g: 0.6931, loss_d: 1.3863, real_score: 0.5000, fake_score: 0.5000`
    /// 的进度行，`epoch`从 1 开始计
    pub fn progress_line(&self, epoch: usize, epochs: usize) -> String {
        format!(
            "Epoch [{}/{}], loss_g: {:.4}, loss_d: {:.4}, real_score: {:.4}, fake_score: {:.4}",
            epoch, epochs, self.loss_g, self.loss_d, self.real_score, self.fake_score
        )
    }
}

/// 训练历史：四个序列等长，第`i`项对应第`i + 1`个 epoch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitHistory {
    pub losses_g: Vec<f32>,
    pub losses_d: Vec<f32>,
    pub real_scores: Vec<f32>,
    pub fake_scores: Vec<f32>,
}

impl FitHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, metrics: EpochMetrics) {
        self.losses_g.push(metrics.loss_g);
        self.losses_d.push(metrics.loss_d);
        self.real_scores.push(metrics.real_score);
        self.fake_scores.push(metrics.fake_score);
    }

    /// 已记录的 epoch 数
    pub fn len(&self) -> usize {
        self.losses_g.len()
    }

    pub fn is_empty(&self) -> bool {
        self.losses_g.is_empty()
    }

    pub fn get(&self, epoch_index: usize) -> Option<EpochMetrics> {
        Some(EpochMetrics {
            loss_g: *self.losses_g.get(epoch_index)?,
            loss_d: *self.losses_d.get(epoch_index)?,
            real_score: *self.real_scores.get(epoch_index)?,
            fake_score: *self.fake_scores.get(epoch_index)?,
        })
    }

    pub fn last(&self) -> Option<EpochMetrics> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// 拆成 (losses_g, losses_d, real_scores, fake_scores)
    pub fn into_parts(self) -> (Vec<f32>, Vec<f32>, Vec<f32>, Vec<f32>) {
        (self.losses_g, self.losses_d, self.real_scores, self.fake_scores)
    }
}

/// 在一个 epoch 内逐批次累积指标
#[derive(Debug, Clone)]
pub(crate) struct EpochTracker {
    mode: MetricMode,
    last: Option<EpochMetrics>,
    // 求平均时用 f64 累加
    sums: [f64; 4],
    batches: usize,
}

impl EpochTracker {
    pub(crate) const fn new(mode: MetricMode) -> Self {
        Self {
            mode,
            last: None,
            sums: [0.; 4],
            batches: 0,
        }
    }

    pub(crate) fn record(&mut self, d_step: &DiscriminatorStep, loss_g: f32) {
        let metrics = EpochMetrics {
            loss_g,
            loss_d: d_step.loss,
            real_score: d_step.real_score,
            fake_score: d_step.fake_score,
        };
        self.sums[0] += f64::from(metrics.loss_g);
        self.sums[1] += f64::from(metrics.loss_d);
        self.sums[2] += f64::from(metrics.real_score);
        self.sums[3] += f64::from(metrics.fake_score);
        self.batches += 1;
        self.last = Some(metrics);
    }

    pub(crate) const fn batches(&self) -> usize {
        self.batches
    }

    /// 该 epoch 的指标；一个批次都没有时为 None
    pub(crate) fn finish(&self) -> Option<EpochMetrics> {
        match self.mode {
            MetricMode::LastBatch => self.last,
            MetricMode::EpochMean => {
                if self.batches == 0 {
                    return None;
                }
                let n = self.batches as f64;
                Some(EpochMetrics {
                    loss_g: (self.sums[0] / n) as f32,
                    loss_d: (self.sums[1] / n) as f32,
                    real_score: (self.sums[2] / n) as f32,
                    fake_score: (self.sums[3] / n) as f32,
                })
            }
        }
    }
}
