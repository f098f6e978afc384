//! # Only GAN
//!
//! `only_gan`项目用纯rust实现生成对抗网络（[GAN](https://arxiv.org/abs/1406.2661)）的对抗训练循环：
//! 判别器与生成器在每个批次上交替更新，按 epoch 记录损失与得分、覆盖写参数存档，
//! 并把生成器在固定潜在向量上的输出拼成网格图保存下来。
//!
//! 网络结构由调用方通过`gan::Network`注入；为了能独立运行，本项目附带了一个轻量的
//! 反向模式自动微分引擎（`nn`）以及数据加载（`data`）与样本图输出（`vision`）。
//!

pub mod data;
pub mod errors;
pub mod gan;
pub mod nn;
pub mod tensor;
pub mod vision;
