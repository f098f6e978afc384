mod config;
mod history;
mod models;

use crate::gan::{MlpDiscriminator, MlpGenerator};
use crate::nn::{Graph, Module};
use crate::tensor::Tensor;

/// 在同一个带种子的图上建一对小网络：G: 4 → 8 → 6，D: 6 → 8 → 1
fn build_pair(seed: u64) -> (Graph, MlpGenerator, MlpDiscriminator) {
    let graph = Graph::new_with_seed(seed);
    let generator = MlpGenerator::new(&graph, 4, &[8], 6, "G").unwrap();
    let discriminator = MlpDiscriminator::new(&graph, 6, &[8], "D").unwrap();
    (graph, generator, discriminator)
}

fn snapshot<M: Module>(module: &M) -> Vec<Tensor> {
    module.parameters().iter().map(|p| p.value().unwrap()).collect()
}

fn zero_out<M: Module>(module: &M) {
    for param in module.parameters() {
        let shape = param.value_shape().unwrap();
        param.set_value(&Tensor::zeros(&shape)).unwrap();
    }
}
