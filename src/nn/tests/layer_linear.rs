use crate::nn::{Graph, GraphError, Linear, Module};
use crate::tensor::Tensor;

#[test]
fn test_linear_forward() {
    let graph = Graph::new();
    let fc = Linear::new(&graph, 3, 2, true, "fc").unwrap();
    assert_eq!(fc.num_params(), 2);
    assert_eq!(fc.weights().name().unwrap(), "fc_W");
    assert_eq!(fc.bias().unwrap().name().unwrap(), "fc_b");

    fc.weights()
        .set_value(&Tensor::new(&[1., 0., 0., 1., 1., 1.], &[3, 2]))
        .unwrap();
    fc.bias()
        .unwrap()
        .set_value(&Tensor::new(&[0.5, -0.5], &[1, 2]))
        .unwrap();

    let x = graph
        .input(&Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]))
        .unwrap();
    let y = fc.forward(&x).unwrap();
    assert_eq!(
        y.value().unwrap(),
        Tensor::new(&[4.5, 4.5, 10.5, 10.5], &[2, 2])
    );
}

#[test]
fn test_linear_without_bias() {
    let graph = Graph::new();
    let fc = Linear::new(&graph, 4, 1, false, "fc").unwrap();
    assert_eq!(fc.parameters().len(), 1);
    assert!(fc.bias().is_none());
    assert_eq!(fc.in_features(), 4);
    assert_eq!(fc.out_features(), 1);
}

#[test]
fn test_linear_rejects_wrong_input_shape() {
    let graph = Graph::new();
    let fc = Linear::new(&graph, 3, 2, true, "fc").unwrap();
    let x = graph.input(&Tensor::ones(&[2, 4])).unwrap();
    assert!(matches!(
        fc.forward(&x),
        Err(GraphError::ShapeMismatch { .. })
    ));
}
