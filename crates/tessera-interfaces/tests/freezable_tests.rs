mod common;

use common::{ShapeTensor, ToyExtractor, Unfinished};
use tessera_interfaces::*;

#[test]
fn freeze_is_idempotent() {
    let mut once = ToyExtractor::new(16);
    once.freeze().unwrap();

    let mut twice = ToyExtractor::new(16);
    twice.freeze().unwrap();
    twice.freeze().unwrap();

    assert_eq!(once.trainable_groups(), twice.trainable_groups());
    assert_eq!(twice.trainable_groups(), vec!["head"]);
}

#[test]
fn unfreeze_is_idempotent_and_restores() {
    let mut model = ToyExtractor::new(16);
    let pristine = model.trainable_groups();

    model.freeze().unwrap();
    model.unfreeze().unwrap();
    model.unfreeze().unwrap();
    assert_eq!(model.trainable_groups(), pristine);
}

#[test]
fn freeze_cycle_leaves_extraction_shape_alone() {
    let mut model = ToyExtractor::new(128);
    let x = ShapeTensor::new(&[4, 3]);
    let before = model.extract(&x).unwrap().shape().to_vec();
    let dim_before = model.feat_dim().unwrap();

    model.freeze().unwrap();
    assert_eq!(model.feat_dim().unwrap(), dim_before);
    assert_eq!(model.extract(&x).unwrap().shape(), before.as_slice());

    model.unfreeze().unwrap();
    assert_eq!(model.feat_dim().unwrap(), dim_before);
    assert_eq!(model.extract(&x).unwrap().shape(), before.as_slice());
}

#[test]
fn missing_freeze_override_raises_capability_error() {
    let mut model = Unfinished;
    let err = model.freeze().unwrap_err();
    assert_eq!(err.capability(), Some(Capability::Freeze));
    let err = model.unfreeze().unwrap_err();
    assert_eq!(err.capability(), Some(Capability::Unfreeze));
    assert!(!err.is_retryable());
}

#[test]
fn boxed_freezable_delegates() {
    let mut model: Box<dyn Freezable> = Box::new(ToyExtractor::new(4));
    model.freeze().unwrap();
    model.unfreeze().unwrap();
}
