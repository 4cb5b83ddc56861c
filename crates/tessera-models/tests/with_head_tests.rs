mod common;

use common::{assert_close, candle, randn, values};
use tessera_interfaces::ExtractorExt;
use tessera_models::*;
use tessera_types::{Capability, Device};

fn model() -> ExtractorWithHead<LinearExtractor> {
    ExtractorWithHead::from_config(
        ExtractorConfig::new(12, 32),
        &HeadConfig::new(vec![24], 16),
    )
    .unwrap()
}

#[test]
fn feat_dim_is_head_width() {
    let m = model();
    assert_eq!(m.backbone().feat_dim().unwrap(), 32);
    assert_eq!(m.feat_dim().unwrap(), 16);
    let emb = m.extract_checked(&randn(&[4, 3, 4])).unwrap();
    assert_eq!(emb.shape(), &[4, 16]);
}

#[test]
fn freeze_twice_equals_freeze_once() {
    let mut once = model();
    once.freeze().unwrap();
    let mut twice = model();
    twice.freeze().unwrap();
    twice.freeze().unwrap();

    assert_eq!(
        once.parameters().num_trainable_parameters(),
        twice.parameters().num_trainable_parameters()
    );
    let head_only = twice.parameters().group(HEAD_GROUP).unwrap().numel();
    assert_eq!(twice.parameters().num_trainable_parameters(), head_only);
}

#[test]
fn unfreeze_restores_trainable_set() {
    let mut m = model();
    let pristine = m.parameters().trainable_ids();

    m.freeze().unwrap();
    assert!(m.parameters().trainable_ids().len() < pristine.len());

    m.unfreeze().unwrap();
    m.unfreeze().unwrap();
    assert_eq!(m.parameters().trainable_ids(), pristine);
}

#[test]
fn freeze_cycle_leaves_outputs_unchanged() {
    let mut m = model();
    let x = randn(&[3, 12]);
    let before = values(&m.extract(&x).unwrap());

    m.freeze().unwrap();
    let frozen = m.extract(&x).unwrap();
    assert_eq!(frozen.shape(), &[3, 16]);
    assert_close(&values(&frozen), &before);

    m.unfreeze().unwrap();
    assert_eq!(m.feat_dim().unwrap(), 16);
    assert_close(&values(&m.extract(&x).unwrap()), &before);
}

#[test]
fn frozen_backbone_receives_no_gradient() {
    let mut m = model();
    let x = randn(&[2, 12]);
    let backbone_var = m.parameters().group(BACKBONE_GROUP).unwrap().vars()[0].clone();

    let loss = candle(&m.extract(&x).unwrap()).sum_all().unwrap();
    let grads = loss.backward().unwrap();
    assert!(grads.get(&backbone_var).is_some());

    m.freeze().unwrap();
    let loss = candle(&m.extract(&x).unwrap()).sum_all().unwrap();
    let grads = loss.backward().unwrap();
    assert!(grads.get(&backbone_var).is_none());
}

#[test]
fn backbone_without_feat_dim_is_rejected() {
    struct Unfinished;
    impl Extractor for Unfinished {}

    let err = ExtractorWithHead::new(Unfinished, vec![], &HeadConfig::default(), &Device::CPU)
        .err()
        .unwrap();
    assert_eq!(err.capability(), Some(Capability::FeatDim));
}
