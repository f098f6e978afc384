/*
 * 合成条纹图 GAN 训练示例
 *
 * 真实数据是 8x8 的灰度图，每张图上有一条随机位置的横条或竖条。
 * 训练结束后，`generated/`下每个 epoch 一张 8x8 网格的样本图，`model_backups/`下是 G、D 的参数存档。
 *
 * # 运行
 * ```bash
 * cargo run --example synthetic_gan
 * # 或指定 JSON 配置（缺省字段取默认值）
 * cargo run --example synthetic_gan -- fit.json
 * ```
 */

mod model;

use model::{Discriminator, Generator, IMAGE_DIM, IMAGE_SIDE, LATENT_DIM};
use only_gan::data::{DataLoader, NormStats, TensorDataset};
use only_gan::gan::{FitConfig, GanError, fit_with_renderer};
use only_gan::nn::Graph;
use only_gan::tensor::Tensor;
use only_gan::vision::{GridSampleWriter, ImageShape};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TRAIN_SAMPLES: usize = 1024;

/// 生成`count`张条纹图，像素值为 0 或 1，按行展平
fn bar_images(count: usize, seed: u64) -> Tensor {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0.0f32; count * IMAGE_DIM];
    for image in data.chunks_mut(IMAGE_DIM) {
        let pos = rng.gen_range(0..IMAGE_SIDE);
        let horizontal = rng.gen_bool(0.5);
        for i in 0..IMAGE_SIDE {
            let idx = if horizontal {
                pos * IMAGE_SIDE + i
            } else {
                i * IMAGE_SIDE + pos
            };
            image[idx] = 1.0;
        }
    }
    Tensor::new(&data, &[count, IMAGE_DIM])
}

fn main() -> Result<(), GanError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => FitConfig::load_json(path)?,
        None => FitConfig::new(20, 0.0002, LATENT_DIM, 64),
    };

    // 1. 数据：[0, 1] 的像素经 (0.5, 0.5) 归一化到 [-1, 1]，与 tanh 输出相配
    let stats = NormStats::default();
    let images = stats.normalize(&bar_images(TRAIN_SAMPLES, 7))?;
    let loader = DataLoader::new(TensorDataset::new(images)?, config.batch_size)?
        .shuffle(true)
        .seed(42);

    // 2. 模型：G、D 共用一个图
    let graph = Graph::new_with_seed(42);
    let generator = Generator::new(&graph)?;
    let discriminator = Discriminator::new(&graph)?;

    // 3. 训练
    let mut renderer = GridSampleWriter::new(ImageShape::new(1, IMAGE_SIDE, IMAGE_SIDE)?);
    let history = fit_with_renderer(
        &discriminator,
        &generator,
        &loader,
        &stats,
        &config,
        &mut renderer,
    )?;

    if let Some(last) = history.last() {
        println!(
            "训练结束：共 {} 个 epoch，最终 real_score={:.4}，fake_score={:.4}",
            history.len(),
            last.real_score,
            last.fake_score
        );
    }
    Ok(())
}
