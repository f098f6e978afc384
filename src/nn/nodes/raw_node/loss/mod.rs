mod bce_loss;

pub(crate) use bce_loss::BceLoss;
