use tessera_types::*;

#[test]
fn device_display_and_index() {
    assert_eq!(Device::CPU.to_string(), "cpu");
    assert_eq!(Device::CUDA(1).to_string(), "cuda:1");
    assert_eq!(Device::CUDA(1).index(), Some(1));
    assert!(Device::Metal(0).is_gpu());
    assert!(!Device::CPU.is_gpu());
}

#[test]
fn dtype_sizes() {
    assert_eq!(DataType::FP32.size_bytes(), 4);
    assert_eq!(DataType::BF16.size_bytes(), 2);
    assert!(DataType::FP16.is_float());
    assert!(!DataType::UINT8.is_float());
    assert_eq!(DataType::INT64.to_string(), "int64");
}
