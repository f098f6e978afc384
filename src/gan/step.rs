/*
 * @Description  : 单个批次上的两步更新：先判别器、后生成器
 */

use tracing::trace;

use super::network::ensure_shared_graph;
use super::{Device, GanError, Network};
use crate::data::DataError;
use crate::nn::{Optimizer, VarLossOps};
use crate::tensor::Tensor;

/// 判别器一次更新的结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscriminatorStep {
    /// 真、假两部分 BCE 损失之和
    pub loss: f32,
    /// 判别器对真实样本输出的均值
    pub real_score: f32,
    /// 判别器对生成样本输出的均值
    pub fake_score: f32,
}

/// 更新判别器一次，返回损失与两个得分
///
/// 真实样本的目标为 1，生成样本的目标为 0。生成样本先被 detach，故梯度不会流入生成器；
/// `opt_d.step()`也只更新`opt_d`绑定的（判别器）参数。
pub fn train_discriminator<D, G, O>(
    discriminator: &D,
    generator: &G,
    real_images: &Tensor,
    opt_d: &mut O,
    latent_size: usize,
    batch_size: usize,
    device: Device,
) -> Result<DiscriminatorStep, GanError>
where
    D: Network + ?Sized,
    G: Network + ?Sized,
    O: Optimizer + ?Sized,
{
    ensure_shared_graph(discriminator, generator)?;
    if real_images.shape().first().is_none_or(|&rows| rows == 0) {
        return Err(GanError::Data(DataError::InvalidArgument(format!(
            "真实样本批次不能为空，但形状为{:?}",
            real_images.shape()
        ))));
    }
    let graph = discriminator.graph();

    opt_d.zero_grad()?;

    // 1. 真实样本
    let real_images = device.input(graph, real_images)?;
    let real_preds = discriminator.forward(&real_images)?;
    let real_targets = graph.ones(&real_preds.value_shape()?)?;
    let real_loss = real_preds.bce_loss(&real_targets)?;
    let real_score = real_preds.value()?.mean();

    // 2. 生成样本
    let latent = device.randn(graph, &[batch_size, latent_size])?;
    let fake_images = generator.forward(&latent)?.detach()?;
    let fake_preds = discriminator.forward(&fake_images)?;
    let fake_targets = graph.zeros(&fake_preds.value_shape()?)?;
    let fake_loss = fake_preds.bce_loss(&fake_targets)?;
    let fake_score = fake_preds.value()?.mean();

    // 3. 更新
    let loss = real_loss.try_add(&fake_loss)?.backward()?;
    opt_d.step()?;

    trace!(loss, real_score, fake_score, "判别器已更新");
    Ok(DiscriminatorStep {
        loss,
        real_score,
        fake_score,
    })
}

/// 更新生成器一次，返回其损失
///
/// 生成样本经判别器后与全 1 目标求 BCE，梯度穿过判别器流回生成器。
/// 判别器参数上因此留下的梯度会在下一次`opt_d.zero_grad()`时被清掉。
pub fn train_generator<G, D, O>(
    generator: &G,
    opt_g: &mut O,
    discriminator: &D,
    latent_size: usize,
    batch_size: usize,
    device: Device,
) -> Result<f32, GanError>
where
    G: Network + ?Sized,
    D: Network + ?Sized,
    O: Optimizer + ?Sized,
{
    ensure_shared_graph(discriminator, generator)?;
    let graph = generator.graph();

    opt_g.zero_grad()?;

    let latent = device.randn(graph, &[batch_size, latent_size])?;
    let fake_images = generator.forward(&latent)?;
    let preds = discriminator.forward(&fake_images)?;
    let targets = graph.ones(&preds.value_shape()?)?;
    let loss = preds.bce_loss(&targets)?.backward()?;
    opt_g.step()?;

    trace!(loss, "生成器已更新");
    Ok(loss)
}
