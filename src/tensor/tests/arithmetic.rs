use crate::tensor::Tensor;

#[test]
fn test_add_with_or_without_ownership() {
    let tensor1 = Tensor::new(&[1., 2., 3.], &[3]);
    let tensor2 = Tensor::new(&[4., 5., 6.], &[3]);
    let expected = Tensor::new(&[5., 7., 9.], &[3]);

    assert_eq!(tensor1.clone() + tensor2.clone(), expected);
    assert_eq!(tensor1.clone() + &tensor2, expected);
    assert_eq!(&tensor1 + tensor2.clone(), expected);
    assert_eq!(&tensor1 + &tensor2, expected);

    // 与纯数相加
    assert_eq!(5. + &tensor1, Tensor::new(&[6., 7., 8.], &[3]));
    assert_eq!(&tensor1 + 5., Tensor::new(&[6., 7., 8.], &[3]));

    // 原始张量仍然可用
    assert_eq!(tensor1, Tensor::new(&[1., 2., 3.], &[3]));
}

#[test]
fn test_sub_mul_div() {
    let a = Tensor::new(&[2., 4., 6., 8.], &[2, 2]);
    let b = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    assert_eq!(&a - &b, Tensor::new(&[1., 2., 3., 4.], &[2, 2]));
    assert_eq!(&a * &b, Tensor::new(&[2., 8., 18., 32.], &[2, 2]));
    assert_eq!(&a / &b, Tensor::new(&[2., 2., 2., 2.], &[2, 2]));
    assert_eq!(1. - &b, Tensor::new(&[0., -1., -2., -3.], &[2, 2]));
    assert_eq!(&a * 0.5, b);
    assert_eq!(&a / 2., b);
}

#[test]
fn test_broadcast_row_vector() {
    let matrix = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    let bias = Tensor::new(&[10., 20., 30.], &[1, 3]);
    assert_eq!(
        &matrix + &bias,
        Tensor::new(&[11., 22., 33., 14., 25., 36.], &[2, 3])
    );
}

#[test]
#[should_panic(expected = "形状不一致，故无法相加")]
fn test_add_incompatible_shapes_panics() {
    let _ = Tensor::new(&[1., 2., 3.], &[3]) + Tensor::new(&[1., 2.], &[2]);
}

#[test]
fn test_assign_ops() {
    let mut t = Tensor::new(&[1., 2.], &[1, 2]);
    t += &Tensor::new(&[1., 1.], &[1, 2]);
    assert_eq!(t, Tensor::new(&[2., 3.], &[1, 2]));
    t -= Tensor::new(&[0.5, 0.5], &[1, 2]);
    assert_eq!(t, Tensor::new(&[1.5, 2.5], &[1, 2]));
    t *= 2.;
    assert_eq!(t, Tensor::new(&[3., 5.], &[1, 2]));
    t += 1.;
    assert_eq!(t, Tensor::new(&[4., 6.], &[1, 2]));
}

#[test]
#[should_panic(expected = "形状不一致，故无法自相加")]
fn test_add_assign_cannot_grow_left_operand() {
    let mut t = Tensor::new(&[1., 2.], &[1, 2]);
    t += &Tensor::ones(&[3, 2]);
}
