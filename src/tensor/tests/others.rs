use approx::assert_abs_diff_eq;

use crate::tensor::Tensor;

#[test]
fn test_transpose() {
    let t = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    assert_eq!(
        t.transpose().unwrap(),
        Tensor::new(&[1., 4., 2., 5., 3., 6.], &[3, 2])
    );
}

#[test]
fn test_reductions() {
    let t = Tensor::new(&[1., 2., 3., 6.], &[2, 2]);
    assert_eq!(t.sum(), 12.);
    assert_eq!(t.mean(), 3.);
    assert!(Tensor::zeros(&[0, 3]).mean().is_nan());
}

#[test]
fn test_activations() {
    let t = Tensor::new(&[-2., 0., 2.], &[1, 3]);
    let s = t.sigmoid();
    assert_abs_diff_eq!(s[[0, 1]], 0.5);
    assert_abs_diff_eq!(s[[0, 2]], 0.880_797, epsilon = 1e-5);
    assert_abs_diff_eq!(t.tanh()[[0, 0]], -0.964_027_6, epsilon = 1e-5);
    assert_eq!(t.leaky_relu(0.2), Tensor::new(&[-0.4, 0., 2.], &[1, 3]));
    assert_eq!(t.clamp(-1., 1.), Tensor::new(&[-1., 0., 1.], &[1, 3]));
}

#[test]
fn test_sum_to_shape() {
    let grad = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    assert_eq!(
        grad.sum_to_shape(&[1, 3]).unwrap(),
        Tensor::new(&[5., 7., 9.], &[1, 3])
    );
    assert_eq!(
        grad.sum_to_shape(&[3]).unwrap(),
        Tensor::new(&[5., 7., 9.], &[3])
    );
    assert_eq!(grad.sum_to_shape(&[2, 3]).unwrap(), grad);
    assert!(grad.sum_to_shape(&[2, 2]).is_err());
}

#[test]
fn test_select_rows_and_reshape() {
    let t = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[3, 2]);
    assert_eq!(t.select_rows(&[2, 0]), Tensor::new(&[5., 6., 1., 2.], &[2, 2]));
    assert_eq!(t.row(1), Tensor::new(&[3., 4.], &[1, 2]));
    assert_eq!(t.reshape(&[2, 3]).unwrap().shape(), &[2, 3]);
    assert!(t.reshape(&[4]).is_err());
}

#[test]
fn test_zip_map() {
    let a = Tensor::new(&[1., 2.], &[2]);
    let b = Tensor::new(&[3., 4.], &[2]);
    assert_eq!(a.zip_map(&b, |x, y| x * y + 1.).unwrap(), Tensor::new(&[4., 9.], &[2]));
    assert!(a.zip_map(&Tensor::ones(&[3]), |x, _| x).is_err());
}
