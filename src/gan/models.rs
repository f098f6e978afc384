/*
 * @Description  : 由若干 Linear 层堆叠而成的参考网络（MLP），用于演示与测试对抗训练循环
 */

use super::Network;
use crate::nn::{Graph, GraphError, Linear, Module, Var, VarActivationOps};

/// 隐藏层 LeakyReLU 的负半轴斜率
pub const LEAKY_RELU_SLOPE: f32 = 0.2;

fn build_layers(
    graph: &Graph,
    input_size: usize,
    hidden: &[usize],
    output_size: usize,
    prefix: &str,
) -> Result<Vec<Linear>, GraphError> {
    let sizes: Vec<usize> = std::iter::once(input_size)
        .chain(hidden.iter().copied())
        .chain(std::iter::once(output_size))
        .collect();
    sizes
        .windows(2)
        .enumerate()
        .map(|(i, pair)| Linear::new(graph, pair[0], pair[1], true, &format!("{prefix}_fc{}", i + 1)))
        .collect()
}

/// 隐藏层接 LeakyReLU(0.2)，最后一层接`output`
fn forward_layers(
    layers: &[Linear],
    input: &Var,
    output: impl Fn(&Var) -> Result<Var, GraphError>,
) -> Result<Var, GraphError> {
    let mut h = input.clone();
    let last = layers.len().saturating_sub(1);
    for (i, layer) in layers.iter().enumerate() {
        h = layer.forward(&h)?;
        h = if i == last {
            output(&h)?
        } else {
            h.leaky_relu(LEAKY_RELU_SLOPE)?
        };
    }
    Ok(h)
}

fn collect_parameters(layers: &[Linear]) -> Vec<Var> {
    layers.iter().flat_map(Module::parameters).collect()
}

/// 生成器：`[N, latent_size]` → `[N, output_size]`，输出经 tanh 落在 (-1, 1)
pub struct MlpGenerator {
    graph: Graph,
    layers: Vec<Linear>,
}

impl MlpGenerator {
    /// 参数名以`prefix`开头（如`G_fc1_W`）
    pub fn new(
        graph: &Graph,
        latent_size: usize,
        hidden: &[usize],
        output_size: usize,
        prefix: &str,
    ) -> Result<Self, GraphError> {
        Ok(Self {
            graph: graph.clone(),
            layers: build_layers(graph, latent_size, hidden, output_size, prefix)?,
        })
    }

    pub fn latent_size(&self) -> usize {
        self.layers.first().map_or(0, Linear::in_features)
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, Linear::out_features)
    }
}

impl Module for MlpGenerator {
    fn parameters(&self) -> Vec<Var> {
        collect_parameters(&self.layers)
    }
}

impl Network for MlpGenerator {
    fn graph(&self) -> &Graph {
        &self.graph
    }

    fn forward(&self, input: &Var) -> Result<Var, GraphError> {
        forward_layers(&self.layers, input, Var::tanh)
    }
}

/// 判别器：`[N, input_size]` → `[N, 1]`，输出经 sigmoid 为“是真实样本”的概率
pub struct MlpDiscriminator {
    graph: Graph,
    layers: Vec<Linear>,
}

impl MlpDiscriminator {
    /// 参数名以`prefix`开头（如`D_fc1_W`）
    pub fn new(graph: &Graph, input_size: usize, hidden: &[usize], prefix: &str) -> Result<Self, GraphError> {
        Ok(Self {
            graph: graph.clone(),
            layers: build_layers(graph, input_size, hidden, 1, prefix)?,
        })
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, Linear::in_features)
    }
}

impl Module for MlpDiscriminator {
    fn parameters(&self) -> Vec<Var> {
        collect_parameters(&self.layers)
    }
}

impl Network for MlpDiscriminator {
    fn graph(&self) -> &Graph {
        &self.graph
    }

    fn forward(&self, input: &Var) -> Result<Var, GraphError> {
        forward_layers(&self.layers, input, Var::sigmoid)
    }
}
