use approx::assert_abs_diff_eq;

use crate::nn::{Adam, Graph, Init, Optimizer, VarMatrixOps};
use crate::tensor::Tensor;

#[test]
fn test_adam_first_step_moves_by_lr_times_sign() {
    let graph = Graph::new();
    let w = graph.parameter(&[1, 2], Init::Zeros, "w").unwrap();
    w.set_value(&Tensor::new(&[1., -2.], &[1, 2])).unwrap();
    let mut optimizer = Adam::new_with_config(&graph, &[w.clone()], 0.1, 0.5, 0.999, 1e-8);

    // loss = w @ c，故 grad = c^T = [3, -1]
    let c = graph.input(&Tensor::new(&[3., -1.], &[2, 1])).unwrap();
    let loss = w.matmul(&c).unwrap();
    optimizer.zero_grad().unwrap();
    let loss_value = loss.backward().unwrap();
    optimizer.step().unwrap();
    assert_abs_diff_eq!(loss_value, 5.);

    let value = w.value().unwrap();
    assert_abs_diff_eq!(value[[0, 0]], 0.9, epsilon = 1e-5);
    assert_abs_diff_eq!(value[[0, 1]], -1.9, epsilon = 1e-5);
    assert_eq!(optimizer.step_count(), 1);
    assert_eq!(optimizer.betas(), (0.5, 0.999));
}

#[test]
fn test_adam_only_updates_bound_params() {
    let graph = Graph::new();
    let w1 = graph.parameter(&[2, 1], Init::Ones, "w1").unwrap();
    let w2 = graph.parameter(&[1, 1], Init::Ones, "w2").unwrap();
    let mut optimizer = Adam::new(&graph, &[w1.clone()], 0.01);

    let x = graph.input(&Tensor::new(&[1., 2.], &[1, 2])).unwrap();
    let loss = x.matmul(&w1).unwrap().matmul(&w2).unwrap();
    optimizer.zero_grad().unwrap();
    loss.backward().unwrap();
    optimizer.step().unwrap();

    // w1 被更新，w2 虽有梯度但不受该优化器管理
    assert_ne!(w1.value().unwrap(), Tensor::ones(&[2, 1]));
    assert_eq!(w2.value().unwrap(), Tensor::ones(&[1, 1]));
    assert!(w2.grad().unwrap().is_some());

    // zero_grad 同样只作用于绑定的参数
    optimizer.zero_grad().unwrap();
    assert_eq!(w1.grad().unwrap(), None);
    assert!(w2.grad().unwrap().is_some());
}

#[test]
fn test_adam_skips_params_without_grad() {
    let graph = Graph::new();
    let w = graph.parameter(&[1, 1], Init::Ones, "w").unwrap();
    let mut optimizer = Adam::new(&graph, &[w.clone()], 0.01);
    optimizer.step().unwrap();
    assert_eq!(w.value().unwrap(), Tensor::ones(&[1, 1]));
}

#[test]
fn test_adam_learning_rate() {
    let graph = Graph::new();
    let w = graph.parameter(&[1, 1], Init::Ones, "w").unwrap();
    let optimizer = Adam::new(&graph, &[w], 0.01);
    assert_eq!(optimizer.learning_rate(), 0.01);
    assert_eq!(optimizer.step_count(), 0);
}
