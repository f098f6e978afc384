/*
 * @Description  : 对抗训练的主循环：每个批次先更新判别器、再更新生成器；
 *                 每个 epoch 结束时记录指标、打印进度行、覆盖写参数存档，并输出一张样本网格图
 */

use std::fs;
use std::io::{self, Write};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::history::EpochTracker;
use super::network::ensure_shared_graph;
use super::{FitConfig, FitHistory, GanError, Network, train_discriminator, train_generator};
use crate::data::{BatchSource, NormStats};
use crate::nn::{Adam, GraphError, Optimizer, save_module};
use crate::tensor::Tensor;
use crate::vision::{SampleRenderer, SquareGridWriter};

/// 两个 Adam 优化器的 (β1, β2)
pub const ADAM_BETAS: (f32, f32) = (0.5, 0.999);
pub const ADAM_EPSILON: f32 = 1e-8;
/// 固定潜在向量的行数，即每张样本图中的图像个数
pub const FIXED_LATENT_SAMPLES: usize = 64;
pub const GENERATOR_CHECKPOINT: &str = "G.bin";
pub const DISCRIMINATOR_CHECKPOINT: &str = "D.bin";

/// 训练`epochs`个 epoch，样本图按生成器输出的宽度推断为正方形图像
///
/// 见`fit_with_renderer`。
pub fn fit<D, G, S>(
    discriminator: &D,
    generator: &G,
    train: &S,
    stats: &NormStats,
    config: &FitConfig,
) -> Result<FitHistory, GanError>
where
    D: Network + ?Sized,
    G: Network + ?Sized,
    S: BatchSource + ?Sized,
{
    fit_with_renderer(
        discriminator,
        generator,
        train,
        stats,
        config,
        &mut SquareGridWriter::new(),
    )
}

/// 训练`epochs`个 epoch，进度行打印到标准输出
///
/// 见`fit_with_output`。
pub fn fit_with_renderer<D, G, S, R>(
    discriminator: &D,
    generator: &G,
    train: &S,
    stats: &NormStats,
    config: &FitConfig,
    renderer: &mut R,
) -> Result<FitHistory, GanError>
where
    D: Network + ?Sized,
    G: Network + ?Sized,
    S: BatchSource + ?Sized,
    R: SampleRenderer + ?Sized,
{
    fit_with_output(
        discriminator,
        generator,
        train,
        stats,
        config,
        renderer,
        &mut io::stdout(),
    )
}

/// 训练`epochs`个 epoch，返回每个 epoch 的损失与得分
///
/// 每个 epoch 依次：
/// 1. 遍历`train`一遍，每个批次先`train_discriminator`再`train_generator`；
/// 2. 按`config.metric_mode`记录指标，并向`out`写一行进度；
/// 3. 覆盖写`<checkpoint_dir>/G.bin`与`<checkpoint_dir>/D.bin`；
/// 4. 以 no_grad 方式让生成器处理训练前采样的固定潜在向量，
///    交给`renderer`写出序号为`epoch + start_idx`的样本图。
///
/// 任何错误都会立即中止训练；某个 epoch 没有批次时返回`GanError::EmptyEpoch`。
pub fn fit_with_output<D, G, S, R, W>(
    discriminator: &D,
    generator: &G,
    train: &S,
    stats: &NormStats,
    config: &FitConfig,
    renderer: &mut R,
    out: &mut W,
) -> Result<FitHistory, GanError>
where
    D: Network + ?Sized,
    G: Network + ?Sized,
    S: BatchSource + ?Sized,
    R: SampleRenderer + ?Sized,
    W: Write + ?Sized,
{
    config.validate()?;
    ensure_shared_graph(discriminator, generator)?;

    fs::create_dir_all(&config.sample_dir)?;
    fs::create_dir_all(&config.checkpoint_dir)?;

    let graph = generator.graph();
    let fixed_latent = config
        .device
        .randn(graph, &[FIXED_LATENT_SAMPLES, config.latent_size])?
        .value()?;

    let (beta1, beta2) = ADAM_BETAS;
    let mut opt_d = Adam::new_with_config(
        graph,
        &discriminator.parameters(),
        config.lr,
        beta1,
        beta2,
        ADAM_EPSILON,
    );
    let mut opt_g = Adam::new_with_config(
        graph,
        &generator.parameters(),
        config.lr,
        beta1,
        beta2,
        ADAM_EPSILON,
    );

    info!(
        epochs = config.epochs,
        lr = opt_d.learning_rate(),
        latent_size = config.latent_size,
        batch_size = config.batch_size,
        param_tensors_d = discriminator.num_params(),
        param_tensors_g = generator.num_params(),
        "开始对抗训练"
    );

    let mut history = FitHistory::new();
    for epoch in 0..config.epochs {
        let bar = progress_bar(train.num_batches(), config.show_progress);
        let mut tracker = EpochTracker::new(config.metric_mode);

        for real_images in train.batches() {
            let real_images = real_images?;
            let d_step = train_discriminator(
                discriminator,
                generator,
                &real_images,
                &mut opt_d,
                config.latent_size,
                config.batch_size,
                config.device,
            )?;
            let loss_g = train_generator(
                generator,
                &mut opt_g,
                discriminator,
                config.latent_size,
                config.batch_size,
                config.device,
            )?;
            tracker.record(&d_step, loss_g);

            bar.set_message(format!("loss_g: {loss_g:.4}, loss_d: {:.4}", d_step.loss));
            bar.inc(1);
        }
        bar.finish_and_clear();

        let metrics = tracker
            .finish()
            .ok_or(GanError::EmptyEpoch { epoch: epoch + 1 })?;
        debug!(epoch = epoch + 1, batches = tracker.batches(), "epoch 结束");
        history.push(metrics);
        writeln!(out, "{}", metrics.progress_line(epoch + 1, config.epochs))?;

        let g_path = config.checkpoint_dir.join(GENERATOR_CHECKPOINT);
        let d_path = config.checkpoint_dir.join(DISCRIMINATOR_CHECKPOINT);
        save_module(generator, &g_path)?;
        save_module(discriminator, &d_path)?;
        debug!(generator = %g_path.display(), discriminator = %d_path.display(), "参数存档已写出");

        let images = generate_samples(generator, &fixed_latent, config)?;
        let sample_path = renderer.render(&config.sample_dir, epoch + config.start_idx, &images, stats)?;
        debug!(path = %sample_path.display(), "样本图已写出");
    }

    info!(epochs = history.len(), "对抗训练结束");
    Ok(history)
}

/// 以 no_grad 方式前向固定潜在向量，随后释放产生的临时节点
fn generate_samples<G>(generator: &G, latent: &Tensor, config: &FitConfig) -> Result<Tensor, GraphError>
where
    G: Network + ?Sized,
{
    let graph = generator.graph();
    let images = graph.no_grad_scope(|graph| {
        let latent = config.device.input(graph, latent)?;
        generator.forward(&latent)?.value()
    });
    graph.release_intermediate_results();
    images
}

fn progress_bar(len: Option<usize>, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    match len {
        Some(len) => {
            let bar = ProgressBar::new(len as u64);
            if let Ok(style) =
                ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            {
                bar.set_style(style.progress_chars("##-"));
            }
            bar
        }
        None => ProgressBar::new_spinner(),
    }
}
