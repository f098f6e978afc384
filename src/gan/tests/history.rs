use approx::assert_abs_diff_eq;

use crate::gan::history::EpochTracker;
use crate::gan::{DiscriminatorStep, EpochMetrics, FitHistory, MetricMode};

fn d_step(loss: f32, real_score: f32, fake_score: f32) -> DiscriminatorStep {
    DiscriminatorStep {
        loss,
        real_score,
        fake_score,
    }
}

#[test]
fn test_progress_line_format() {
    let metrics = EpochMetrics {
        loss_g: 0.693_14,
        loss_d: 1.386_29,
        real_score: 0.5,
        fake_score: 0.499_99,
    };
    assert_eq!(
        metrics.progress_line(1, 25),
        "Epoch [1/25], loss_g: 0.6931, loss_d: 1.3863, real_score: 0.5000, fake_score: 0.5000"
    );
}

#[test]
fn test_tracker_last_batch() {
    let mut tracker = EpochTracker::new(MetricMode::LastBatch);
    assert!(tracker.finish().is_none());
    tracker.record(&d_step(1., 0.9, 0.1), 2.);
    tracker.record(&d_step(3., 0.7, 0.3), 4.);
    assert_eq!(tracker.batches(), 2);
    assert_eq!(
        tracker.finish(),
        Some(EpochMetrics {
            loss_g: 4.,
            loss_d: 3.,
            real_score: 0.7,
            fake_score: 0.3,
        })
    );
}

#[test]
fn test_tracker_epoch_mean() {
    let mut tracker = EpochTracker::new(MetricMode::EpochMean);
    assert!(tracker.finish().is_none());
    tracker.record(&d_step(1., 0.9, 0.1), 2.);
    tracker.record(&d_step(3., 0.7, 0.3), 4.);
    let metrics = tracker.finish().unwrap();
    assert_abs_diff_eq!(metrics.loss_g, 3.);
    assert_abs_diff_eq!(metrics.loss_d, 2.);
    assert_abs_diff_eq!(metrics.real_score, 0.8, epsilon = 1e-6);
    assert_abs_diff_eq!(metrics.fake_score, 0.2, epsilon = 1e-6);
}

#[test]
fn test_history_accessors() {
    let mut history = FitHistory::new();
    assert!(history.is_empty());
    assert!(history.last().is_none());

    let first = EpochMetrics {
        loss_g: 1.,
        loss_d: 2.,
        real_score: 0.6,
        fake_score: 0.4,
    };
    let second = EpochMetrics {
        loss_g: 0.5,
        ..first
    };
    history.push(first);
    history.push(second);

    assert_eq!(history.len(), 2);
    assert_eq!(history.get(0), Some(first));
    assert_eq!(history.last(), Some(second));
    assert!(history.get(2).is_none());

    let (losses_g, losses_d, real_scores, fake_scores) = history.into_parts();
    assert_eq!(losses_g, vec![1., 0.5]);
    assert_eq!(losses_d, vec![2., 2.]);
    assert_eq!(real_scores, vec![0.6, 0.6]);
    assert_eq!(fake_scores, vec![0.4, 0.4]);
}
