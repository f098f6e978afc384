/*
 * @Description  : 集成测试共用的小工具：记录前向调用的网络包装、记录渲染调用的渲染器、玩具数据
 */
#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use only_gan::data::NormStats;
use only_gan::gan::{FitConfig, MlpDiscriminator, MlpGenerator, Network};
use only_gan::nn::{Graph, GraphError, Module, Var};
use only_gan::tensor::Tensor;
use only_gan::vision::{SampleRenderer, VisionError};

pub const LATENT_SIZE: usize = 4;
pub const IMAGE_WIDTH: usize = 16;

/// 一次前向调用：哪个网络、输入是什么
#[derive(Debug, Clone)]
pub struct Call {
    pub net: &'static str,
    pub input: Tensor,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

/// 把每次前向调用的输入记到共享日志里的网络包装
pub struct Recorded<N> {
    pub inner: N,
    net: &'static str,
    log: CallLog,
}

impl<N> Recorded<N> {
    pub fn new(inner: N, net: &'static str, log: &CallLog) -> Self {
        Self {
            inner,
            net,
            log: Rc::clone(log),
        }
    }
}

impl<N: Module> Module for Recorded<N> {
    fn parameters(&self) -> Vec<Var> {
        self.inner.parameters()
    }
}

impl<N: Network> Network for Recorded<N> {
    fn graph(&self) -> &Graph {
        self.inner.graph()
    }

    fn forward(&self, input: &Var) -> Result<Var, GraphError> {
        self.log.borrow_mut().push(Call {
            net: self.net,
            input: input.value()?,
        });
        self.inner.forward(input)
    }
}

/// 不写文件，只记下每次渲染的序号、目录与图像
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Vec<(usize, PathBuf, Tensor)>,
    pub fail: bool,
}

impl SampleRenderer for RecordingRenderer {
    fn render(
        &mut self,
        dir: &Path,
        index: usize,
        images: &Tensor,
        _stats: &NormStats,
    ) -> Result<PathBuf, VisionError> {
        if self.fail {
            return Err(VisionError::UnsupportedChannels(0));
        }
        self.calls.push((index, dir.to_path_buf(), images.clone()));
        Ok(dir.join(format!("{index}")))
    }
}

/// 在带种子的图上建一对网络：G: 4 → 8 → 16（4x4 灰度图），D: 16 → 8 → 1
pub fn build_pair(seed: u64) -> (Graph, MlpGenerator, MlpDiscriminator) {
    let graph = Graph::new_with_seed(seed);
    let generator = MlpGenerator::new(&graph, LATENT_SIZE, &[8], IMAGE_WIDTH, "G").unwrap();
    let discriminator = MlpDiscriminator::new(&graph, IMAGE_WIDTH, &[8], "D").unwrap();
    (graph, generator, discriminator)
}

/// `batches`个形状为`[rows, 16]`、取值在 [-1, 1] 内的确定性批次
pub fn toy_batches(batches: usize, rows: usize) -> Vec<Tensor> {
    (0..batches)
        .map(|b| {
            let data: Vec<f32> = (0..rows * IMAGE_WIDTH)
                .map(|i| ((i * 7 + b * 3) % 13) as f32 / 6. - 1.)
                .collect();
            Tensor::new(&data, &[rows, IMAGE_WIDTH])
        })
        .collect()
}

/// 按参数顺序拷贝出的参数值
pub fn snapshot<M: Module + ?Sized>(module: &M) -> Vec<Tensor> {
    module.parameters().iter().map(|p| p.value().unwrap()).collect()
}

/// 输出目录放在`root`下的测试配置
pub fn test_config(root: &Path, epochs: usize) -> FitConfig {
    FitConfig::new(epochs, 0.001, LATENT_SIZE, 3)
        .with_checkpoint_dir(root.join("nested").join("model_backups"))
        .with_sample_dir(root.join("nested").join("generated"))
        .with_progress(false)
}
