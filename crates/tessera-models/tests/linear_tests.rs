mod common;

use common::{assert_close, randn, values};
use tessera_interfaces::ExtractorExt;
use tessera_models::*;
use tessera_types::{DataType, Device, TesseraError};

#[test]
fn extract_shape_matches_feat_dim() {
    let model = LinearExtractor::new(ExtractorConfig::new(3 * 2 * 2, 128)).unwrap();
    assert_eq!(model.feat_dim().unwrap(), 128);

    let x = randn(&[4, 3, 2, 2]);
    let emb = model.extract_checked(&x).unwrap();
    assert_eq!(emb.shape(), &[4, 128]);
}

#[test]
fn extract_is_pure() {
    let model = LinearExtractor::new(ExtractorConfig::new(8, 16)).unwrap();
    let x = randn(&[5, 8]);
    let a = values(&model.extract(&x).unwrap());
    let b = values(&model.extract(&x).unwrap());
    assert_close(&a, &b);
}

#[test]
fn wrong_input_width_rejected() {
    let model = LinearExtractor::new(ExtractorConfig::new(8, 16)).unwrap();
    let err = model.extract(&randn(&[2, 9])).unwrap_err();
    assert!(matches!(err, TesseraError::ShapeMismatch { .. }));
}

#[test]
fn invalid_config_rejected() {
    assert!(LinearExtractor::new(ExtractorConfig::new(8, 0)).is_err());
}

#[test]
fn embeddings_are_fp32_on_cpu() {
    let model = LinearExtractor::new(ExtractorConfig::new(4, 2)).unwrap();
    assert_eq!(model.vars().len(), 2);

    let emb = model.extract(&randn(&[3, 4])).unwrap();
    assert_eq!(emb.dtype(), DataType::FP32);
    assert_eq!(emb.device(), Device::CPU);
}
