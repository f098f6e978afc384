use image::GenericImageView;

use crate::data::NormStats;
use crate::tensor::Tensor;
use crate::vision::{
    GridSampleWriter, ImageShape, ImageType, SampleRenderer, VisionError, sample_file_name,
};

#[test]
fn test_sample_file_name_is_zero_padded() {
    assert_eq!(sample_file_name(1), "generated-images-0001.png");
    assert_eq!(sample_file_name(12), "generated-images-0012.png");
    assert_eq!(sample_file_name(12345), "generated-images-12345.png");
}

#[test]
fn test_image_shape() {
    let shape = ImageShape::new(3, 4, 5).unwrap();
    assert_eq!(shape.flat_len(), 60);
    assert_eq!(shape.image_type(), ImageType::Rgb);
    assert!(matches!(
        ImageShape::new(2, 4, 4),
        Err(VisionError::UnsupportedChannels(2))
    ));
}

#[test]
fn test_grid_size() {
    let writer = GridSampleWriter::new(ImageShape::new(1, 28, 28).unwrap());
    // 64 张 → 8x8，每格 28 + 2，四周再加 2
    assert_eq!(writer.grid_size(64), (242, 242));
    assert_eq!(writer.grid_size(3), (92, 32));
    assert_eq!(writer.grid_size(9), (242, 62));
}

#[test]
fn test_render_grid_pixels() {
    let writer = GridSampleWriter::new(ImageShape::new(1, 1, 2).unwrap()).with_padding(1);
    let stats = NormStats::default();
    // 归一化空间中的 -1、1 分别对应 0、255
    let images = Tensor::new(&[-1., 1., 1., -1.], &[2, 2]);
    let grid = writer.render_grid(&images, &stats).unwrap();
    assert_eq!(grid.dimensions(), (7, 3));

    let gray = grid.to_luma8();
    assert_eq!(gray.get_pixel(0, 1)[0], 0); // 边框
    assert_eq!(gray.get_pixel(1, 1)[0], 0);
    assert_eq!(gray.get_pixel(2, 1)[0], 255);
    assert_eq!(gray.get_pixel(4, 1)[0], 255);
    assert_eq!(gray.get_pixel(5, 1)[0], 0);
}

#[test]
fn test_render_grid_clamps_out_of_range_values() {
    let writer = GridSampleWriter::new(ImageShape::new(3, 1, 1).unwrap()).with_padding(0);
    let stats = NormStats::uniform(3, 0.5, 0.5).unwrap();
    let images = Tensor::new(&[5., -5., 0.], &[1, 3]);
    let rgb = writer.render_grid(&images, &stats).unwrap().to_rgb8();
    assert_eq!(rgb.get_pixel(0, 0).0, [255, 0, 128]);
}

#[test]
fn test_render_grid_rejects_wrong_width() {
    let writer = GridSampleWriter::new(ImageShape::new(1, 2, 2).unwrap());
    assert!(matches!(
        writer.render_grid(&Tensor::ones(&[3, 5]), &NormStats::default()),
        Err(VisionError::ShapeMismatch { expected: 4, .. })
    ));
}

#[test]
fn test_render_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let mut writer = GridSampleWriter::new(ImageShape::new(1, 4, 4).unwrap());
    let images = Tensor::zeros(&[64, 16]);
    let path = writer
        .render(dir.path(), 3, &images, &NormStats::default())
        .unwrap();
    assert_eq!(path, dir.path().join("generated-images-0003.png"));

    let loaded = image::open(&path).unwrap();
    assert_eq!(loaded.dimensions(), writer.grid_size(64));
}

#[test]
fn test_square_shape_inference() {
    let shape = ImageShape::square(784, 1).unwrap();
    assert_eq!((shape.height(), shape.width()), (28, 28));
    let shape = ImageShape::square(3 * 64 * 64, 3).unwrap();
    assert_eq!((shape.channels(), shape.height()), (3, 64));
    assert!(matches!(
        ImageShape::square(10, 1),
        Err(VisionError::NotSquare { flat_len: 10, channels: 1 })
    ));
}

#[test]
fn test_square_writer_infers_on_first_render() {
    use crate::vision::SquareGridWriter;

    let dir = tempfile::tempdir().unwrap();
    let mut writer = SquareGridWriter::new();
    assert!(writer.image_shape().is_none());
    writer
        .render(dir.path(), 1, &Tensor::zeros(&[4, 9]), &NormStats::default())
        .unwrap();
    assert_eq!(writer.image_shape(), Some(ImageShape::new(1, 3, 3).unwrap()));
    assert!(dir.path().join("generated-images-0001.png").exists());
}
