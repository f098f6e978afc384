//! DataLoader / BatchSource 单元测试

use crate::data::{BatchSource, DataError, DataLoader, TensorDataset};
use crate::tensor::Tensor;

fn dataset_of(rows: usize) -> TensorDataset {
    let data: Vec<f32> = (0..rows * 2).map(|x| x as f32).collect();
    TensorDataset::new(Tensor::new(&data, &[rows, 2])).unwrap()
}

fn first_column(batches: &[Tensor]) -> Vec<f32> {
    batches
        .iter()
        .flat_map(|b| (0..b.shape()[0]).map(move |r| b[[r, 0]]))
        .collect()
}

#[test]
fn test_tensor_dataset() {
    let dataset = dataset_of(3);
    assert_eq!(dataset.len(), 3);
    assert!(!dataset.is_empty());
    assert!(TensorDataset::new(Tensor::new(&[1.], &[])).is_err());
}

#[test]
fn test_dataloader_basic() {
    let loader = DataLoader::new(dataset_of(10), 3).unwrap();
    assert_eq!(loader.num_batches(), 4); // 10 / 3 向上取整

    let batches: Vec<_> = loader.iter().collect();
    assert_eq!(batches.len(), 4);
    assert_eq!(batches[0].shape(), &[3, 2]);
    assert_eq!(batches[3].shape(), &[1, 2]);
    assert_eq!(first_column(&batches), (0..10).map(|x| (x * 2) as f32).collect::<Vec<_>>());
}

#[test]
fn test_dataloader_drop_last() {
    let loader = DataLoader::new(dataset_of(10), 3).unwrap().drop_last(true);
    assert_eq!(loader.num_batches(), 3);
    assert_eq!(loader.iter().count(), 3);
}

#[test]
fn test_dataloader_zero_batch_size() {
    assert!(matches!(
        DataLoader::new(dataset_of(2), 0),
        Err(DataError::InvalidArgument(_))
    ));
}

#[test]
fn test_dataloader_shuffle_with_seed() {
    let loader1 = DataLoader::new(dataset_of(10), 3).unwrap().shuffle(true).seed(42);
    let loader2 = DataLoader::new(dataset_of(10), 3).unwrap().shuffle(true).seed(42);

    let epoch1_a: Vec<_> = loader1.iter().collect();
    let epoch1_b: Vec<_> = loader2.iter().collect();
    assert_eq!(epoch1_a, epoch1_b);

    // 每个 epoch 重新打乱，但仍是同一组样本
    let epoch2_a: Vec<_> = loader1.iter().collect();
    let mut rows1 = first_column(&epoch1_a);
    let mut rows2 = first_column(&epoch2_a);
    assert_ne!(rows1, rows2);
    rows1.sort_by(f32::total_cmp);
    rows2.sort_by(f32::total_cmp);
    assert_eq!(rows1, rows2);
}

#[test]
fn test_batch_source_for_dataloader_and_vec() {
    let loader = DataLoader::new(dataset_of(5), 2).unwrap();
    assert_eq!(BatchSource::num_batches(&loader), Some(3));
    let batches: Vec<_> = loader.batches().collect::<Result<_, _>>().unwrap();
    assert_eq!(batches.len(), 3);

    let list = vec![Tensor::ones(&[2, 3]), Tensor::zeros(&[1, 3])];
    assert_eq!(BatchSource::num_batches(&list), Some(2));
    let from_vec: Vec<_> = list.batches().collect::<Result<_, _>>().unwrap();
    assert_eq!(from_vec, list);

    // 可重复遍历
    assert_eq!(list.batches().count(), 2);

    let empty: Vec<Tensor> = vec![];
    assert_eq!(empty.batches().count(), 0);
}
