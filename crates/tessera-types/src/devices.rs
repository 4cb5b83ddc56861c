//! Device and data type descriptors

use serde::{Deserialize, Serialize};

/// Device a tensor lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Device {
    /// CPU device
    #[default]
    CPU,
    /// NVIDIA CUDA device with device index
    CUDA(usize),
    /// Apple GPU with device index
    Metal(usize),
}

impl Device {
    /// Check if device is GPU-based
    pub fn is_gpu(&self) -> bool {
        matches!(self, Device::CUDA(_) | Device::Metal(_))
    }

    /// Get device index for GPU devices
    pub fn index(&self) -> Option<usize> {
        match self {
            Device::CUDA(idx) | Device::Metal(idx) => Some(*idx),
            Device::CPU => None,
        }
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Device::CPU => write!(f, "cpu"),
            Device::CUDA(idx) => write!(f, "cuda:{}", idx),
            Device::Metal(idx) => write!(f, "metal:{}", idx),
        }
    }
}

/// Element type of a tensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DataType {
    /// 32-bit floating point
    #[default]
    FP32,
    /// 16-bit floating point (IEEE 754)
    FP16,
    /// 16-bit brain floating point
    BF16,
    /// 64-bit floating point
    FP64,
    /// 64-bit signed integer (labels, indices)
    INT64,
    /// 32-bit unsigned integer
    UINT32,
    /// 8-bit unsigned integer (raw image bytes)
    UINT8,
}

impl DataType {
    /// Get size in bytes for this data type
    pub fn size_bytes(&self) -> usize {
        match self {
            DataType::FP64 | DataType::INT64 => 8,
            DataType::FP32 | DataType::UINT32 => 4,
            DataType::FP16 | DataType::BF16 => 2,
            DataType::UINT8 => 1,
        }
    }

    /// Check if this is a floating point type
    pub fn is_float(&self) -> bool {
        matches!(
            self,
            DataType::FP32 | DataType::FP16 | DataType::BF16 | DataType::FP64
        )
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DataType::FP32 => "fp32",
            DataType::FP16 => "fp16",
            DataType::BF16 => "bf16",
            DataType::FP64 => "fp64",
            DataType::INT64 => "int64",
            DataType::UINT32 => "uint32",
            DataType::UINT8 => "uint8",
        };
        write!(f, "{}", name)
    }
}
