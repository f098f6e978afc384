use std::path::PathBuf;

use crate::gan::{Device, FitConfig, GanError, MetricMode};

#[test]
fn test_defaults() {
    let config = FitConfig::default();
    assert_eq!(config.start_idx, 1);
    assert_eq!(config.checkpoint_dir, PathBuf::from("model_backups"));
    assert_eq!(config.sample_dir, PathBuf::from("generated"));
    assert_eq!(config.metric_mode, MetricMode::LastBatch);
    assert_eq!(config.device, Device::Cpu);
    assert!(config.show_progress);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_json_uses_defaults() {
    let config = FitConfig::from_json(r#"{ "epochs": 3, "lr": 0.001, "metric_mode": "epoch_mean", "device": "cpu" }"#)
        .unwrap();
    assert_eq!(config.epochs, 3);
    assert_eq!(config.lr, 0.001);
    assert_eq!(config.metric_mode, MetricMode::EpochMean);
    assert_eq!(config.latent_size, FitConfig::default().latent_size);
}

#[test]
fn test_json_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fit.json");
    let config = FitConfig::new(2, 0.0005, 16, 32)
        .with_start_idx(7)
        .with_checkpoint_dir(dir.path().join("ckpt"))
        .with_sample_dir(dir.path().join("samples"))
        .with_progress(false);
    config.save_json(&path).unwrap();
    assert_eq!(FitConfig::load_json(&path).unwrap(), config);
}

#[test]
fn test_bad_json_is_invalid_config() {
    assert!(matches!(
        FitConfig::from_json(r#"{ "epochs": "many" }"#),
        Err(GanError::InvalidConfig(_))
    ));
}

#[test]
fn test_validate() {
    let ok = FitConfig::new(1, 0.01, 2, 2);
    assert!(ok.validate().is_ok());

    for bad in [
        FitConfig::new(0, 0.01, 2, 2),
        FitConfig::new(1, 0.01, 2, 0),
        FitConfig::new(1, 0.01, 0, 2),
        FitConfig::new(1, 0., 2, 2),
        FitConfig::new(1, -1., 2, 2),
        FitConfig::new(1, f32::NAN, 2, 2),
    ] {
        assert!(matches!(bad.validate(), Err(GanError::InvalidConfig(_))), "{bad:?}");
    }
}
