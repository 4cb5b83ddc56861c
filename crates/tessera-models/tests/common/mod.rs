#![allow(dead_code)]

use candle_core::{Device, Tensor};
use tessera_models::{CandleTensorWrapper, TensorRef};

/// Random f32 batch on the CPU
pub fn randn(shape: &[usize]) -> TensorRef {
    let t = Tensor::randn(0f32, 1f32, shape, &Device::Cpu).unwrap();
    CandleTensorWrapper::into_ref(t)
}

/// Underlying candle tensor of a handle produced by these models
pub fn candle(x: &TensorRef) -> Tensor {
    x.as_any()
        .downcast_ref::<CandleTensorWrapper>()
        .expect("candle-backed tensor")
        .inner()
        .clone()
}

pub fn values(x: &TensorRef) -> Vec<f32> {
    x.to_vec_f32().unwrap()
}

pub fn assert_close(a: &[f32], b: &[f32]) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b) {
        assert!((x - y).abs() < 1e-5, "{} vs {}", x, y);
    }
}
