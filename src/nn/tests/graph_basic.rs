use crate::nn::{Graph, GraphError, Init, VarMatrixOps};
use crate::tensor::Tensor;

#[test]
fn test_parameter_init_is_reproducible_with_seed() {
    let a = Graph::new_with_seed(42);
    let b = Graph::new_with_seed(42);
    let wa = a.parameter(&[4, 3], Init::Kaiming, "w").unwrap();
    let wb = b.parameter(&[4, 3], Init::Kaiming, "w").unwrap();
    assert_eq!(wa.value().unwrap(), wb.value().unwrap());

    let ra = a.randn(&[2, 5]).unwrap();
    let rb = b.randn(&[2, 5]).unwrap();
    assert_eq!(ra.value().unwrap(), rb.value().unwrap());
}

#[test]
fn test_duplicate_parameter_name() {
    let graph = Graph::new();
    graph.parameter(&[1, 1], Init::Zeros, "w").unwrap();
    let err = graph.parameter(&[1, 1], Init::Zeros, "w").unwrap_err();
    assert!(matches!(err, GraphError::DuplicateNodeName(_)));
}

#[test]
fn test_forward_is_eager() {
    let graph = Graph::new();
    let x = graph.input(&Tensor::new(&[1., 2.], &[1, 2])).unwrap();
    let w = graph.parameter(&[2, 1], Init::Ones, "w").unwrap();
    let y = x.matmul(&w).unwrap();
    assert_eq!(y.value().unwrap(), Tensor::new(&[3.], &[1, 1]));
    assert_eq!(y.item().unwrap(), 3.);
    assert_eq!(x.item().unwrap_err(), GraphError::InvalidOperation(
        format!("item() 只适用于标量节点，但节点{}的形状为[1, 2]", x.node_id())
    ));
}

#[test]
fn test_matmul_shape_mismatch() {
    let graph = Graph::new();
    let x = graph.input(&Tensor::ones(&[2, 3])).unwrap();
    let w = graph.parameter(&[2, 1], Init::Ones, "w").unwrap();
    assert!(matches!(
        x.matmul(&w),
        Err(GraphError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_vars_from_different_graphs_cannot_be_combined() {
    let g1 = Graph::new();
    let g2 = Graph::new();
    let x = g1.input(&Tensor::ones(&[1, 2])).unwrap();
    let w = g2.parameter(&[2, 1], Init::Ones, "w").unwrap();
    assert!(!x.same_graph(&w));
    assert!(matches!(x.matmul(&w), Err(GraphError::InvalidOperation(_))));
}

#[test]
fn test_set_value_keeps_shape() {
    let graph = Graph::new();
    let w = graph.parameter(&[2, 2], Init::Zeros, "w").unwrap();
    w.set_value(&Tensor::ones(&[2, 2])).unwrap();
    assert_eq!(w.value().unwrap(), Tensor::ones(&[2, 2]));
    assert!(matches!(
        w.set_value(&Tensor::ones(&[1, 2])),
        Err(GraphError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_op_node_value_cannot_be_set() {
    let graph = Graph::new();
    let x = graph.input(&Tensor::ones(&[1, 2])).unwrap();
    let w = graph.parameter(&[2, 1], Init::Ones, "w").unwrap();
    let y = x.matmul(&w).unwrap();
    assert!(matches!(
        y.set_value(&Tensor::ones(&[1, 1])),
        Err(GraphError::InvalidOperation(_))
    ));
}

#[test]
fn test_no_grad_scope_restores_mode() {
    let graph = Graph::new();
    assert!(!graph.is_eval());
    let inside = graph.no_grad_scope(|g| g.is_eval());
    assert!(inside);
    assert!(!graph.is_eval());

    graph.eval();
    graph.no_grad_scope(|_| ());
    assert!(graph.is_eval());
}
