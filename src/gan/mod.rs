/*
 * @Description  : 生成对抗网络（GAN）的对抗训练：判别器与生成器交替更新，
 *                 按 epoch 记录损失与得分、存档参数并输出样本网格图
 */

mod config;
mod error;
mod fit;
mod history;
pub mod models;
mod network;
mod step;

#[cfg(test)]
mod tests;

pub use config::FitConfig;
pub use error::GanError;
pub use fit::{
    ADAM_BETAS, ADAM_EPSILON, DISCRIMINATOR_CHECKPOINT, FIXED_LATENT_SAMPLES, GENERATOR_CHECKPOINT, fit,
    fit_with_output, fit_with_renderer,
};
pub use history::{EpochMetrics, FitHistory, MetricMode};
pub use models::{MlpDiscriminator, MlpGenerator};
pub use network::{Device, Network};
pub use step::{DiscriminatorStep, train_discriminator, train_generator};
