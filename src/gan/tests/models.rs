use super::build_pair;
use crate::gan::{MlpDiscriminator, MlpGenerator, Network};
use crate::nn::{Graph, GraphError, Module};
use crate::tensor::Tensor;

#[test]
fn test_mlp_shapes_and_ranges() {
    let (graph, generator, discriminator) = build_pair(11);
    assert_eq!(generator.latent_size(), 4);
    assert_eq!(generator.output_size(), 6);
    assert_eq!(discriminator.input_size(), 6);

    let z = graph.randn(&[5, 4]).unwrap();
    let fake = generator.forward(&z).unwrap();
    let preds = discriminator.forward(&fake).unwrap();

    let fake = fake.value().unwrap();
    let preds = preds.value().unwrap();
    assert_eq!(fake.shape(), &[5, 6]);
    assert_eq!(preds.shape(), &[5, 1]);
    assert!(fake.iter().all(|x| (-1. ..=1.).contains(x)));
    assert!(preds.iter().all(|x| (0. ..=1.).contains(x)));
}

#[test]
fn test_mlp_parameter_names_are_prefixed() {
    let (_, generator, discriminator) = build_pair(12);
    let names: Vec<String> = generator.parameters().iter().map(|p| p.name().unwrap()).collect();
    assert_eq!(names, vec!["G_fc1_W", "G_fc1_b", "G_fc2_W", "G_fc2_b"]);
    // num_params 数的是参数张量：两层各有 W、b
    assert_eq!(discriminator.num_params(), 4);
    // 6*8 + 8 + 8*1 + 1 个标量
    let scalars: usize = discriminator.parameters().iter().map(|p| p.value().unwrap().size()).sum();
    assert_eq!(scalars, 65);
}

#[test]
fn test_same_prefix_twice_is_rejected() {
    let graph = Graph::new();
    MlpGenerator::new(&graph, 2, &[], 3, "G").unwrap();
    assert!(matches!(
        MlpGenerator::new(&graph, 2, &[], 3, "G"),
        Err(GraphError::DuplicateNodeName(_))
    ));
}

#[test]
fn test_discriminator_without_hidden_layers() {
    let graph = Graph::new();
    let discriminator = MlpDiscriminator::new(&graph, 3, &[], "D").unwrap();
    let x = graph.input(&Tensor::zeros(&[2, 3])).unwrap();
    let preds = discriminator.forward(&x).unwrap().value().unwrap();
    // 偏置为零，输入为零 → sigmoid(0)
    assert!(preds.iter().all(|&p| (p - 0.5).abs() < 1e-6));
}
