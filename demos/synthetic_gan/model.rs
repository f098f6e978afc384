/*
 * 合成条纹图 GAN 的模型定义
 *
 * # 架构
 * - Generator: z(16) -> FC(64, `LeakyReLU`) -> FC(64, Tanh)，即 8x8 灰度图，值域 (-1, 1)
 * - Discriminator: image(64) -> FC(64, `LeakyReLU`) -> FC(1, Sigmoid)
 */

use only_gan::gan::Network;
use only_gan::nn::{Graph, GraphError, Linear, Module, Var, VarActivationOps};

/// 噪声维度（latent space）
pub const LATENT_DIM: usize = 16;
/// 图像边长
pub const IMAGE_SIDE: usize = 8;
/// 图像维度（8x8 = 64）
pub const IMAGE_DIM: usize = IMAGE_SIDE * IMAGE_SIDE;
const HIDDEN_DIM: usize = 64;

pub struct Generator {
    graph: Graph,
    fc1: Linear,
    fc2: Linear,
}

impl Generator {
    pub fn new(graph: &Graph) -> Result<Self, GraphError> {
        Ok(Self {
            graph: graph.clone(),
            fc1: Linear::new(graph, LATENT_DIM, HIDDEN_DIM, true, "g_fc1")?,
            fc2: Linear::new(graph, HIDDEN_DIM, IMAGE_DIM, true, "g_fc2")?,
        })
    }
}

impl Module for Generator {
    fn parameters(&self) -> Vec<Var> {
        let mut params = self.fc1.parameters();
        params.extend(self.fc2.parameters());
        params
    }
}

impl Network for Generator {
    fn graph(&self) -> &Graph {
        &self.graph
    }

    fn forward(&self, z: &Var) -> Result<Var, GraphError> {
        let h1 = self.fc1.forward(z)?.leaky_relu(0.2)?;
        self.fc2.forward(&h1)?.tanh()
    }
}

pub struct Discriminator {
    graph: Graph,
    fc1: Linear,
    fc2: Linear,
}

impl Discriminator {
    pub fn new(graph: &Graph) -> Result<Self, GraphError> {
        Ok(Self {
            graph: graph.clone(),
            fc1: Linear::new(graph, IMAGE_DIM, HIDDEN_DIM, true, "d_fc1")?,
            fc2: Linear::new(graph, HIDDEN_DIM, 1, true, "d_fc2")?,
        })
    }
}

impl Module for Discriminator {
    fn parameters(&self) -> Vec<Var> {
        let mut params = self.fc1.parameters();
        params.extend(self.fc2.parameters());
        params
    }
}

impl Network for Discriminator {
    fn graph(&self) -> &Graph {
        &self.graph
    }

    fn forward(&self, image: &Var) -> Result<Var, GraphError> {
        let h1 = self.fc1.forward(image)?.leaky_relu(0.2)?;
        self.fc2.forward(&h1)?.sigmoid()
    }
}
