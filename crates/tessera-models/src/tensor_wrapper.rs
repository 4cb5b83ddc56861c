//! Candle Tensor wrapper implementing TensorLike

use candle_core::{DType, DeviceLocation, Tensor};
use std::{any::Any, sync::Arc};
use tessera_interfaces::{TensorLike, TensorRef};
use tessera_types::{DataType, Device, Result, TesseraError};

/// Wrapper for Candle Tensor to implement TensorLike
#[derive(Debug, Clone)]
pub struct CandleTensorWrapper {
    tensor: Tensor,
}

impl CandleTensorWrapper {
    pub fn new(tensor: Tensor) -> Self {
        Self { tensor }
    }

    /// Wrap a candle tensor into a shareable handle
    pub fn into_ref(tensor: Tensor) -> TensorRef {
        Arc::new(Self::new(tensor))
    }

    pub fn inner(&self) -> &Tensor {
        &self.tensor
    }

    pub fn into_inner(self) -> Tensor {
        self.tensor
    }
}

impl TensorLike for CandleTensorWrapper {
    fn shape(&self) -> &[usize] {
        self.tensor.dims()
    }

    fn dtype(&self) -> DataType {
        match self.tensor.dtype() {
            DType::F32 => DataType::FP32,
            DType::F16 => DataType::FP16,
            DType::BF16 => DataType::BF16,
            DType::F64 => DataType::FP64,
            DType::I64 => DataType::INT64,
            DType::U32 => DataType::UINT32,
            DType::U8 => DataType::UINT8,
        }
    }

    fn device(&self) -> Device {
        match self.tensor.device().location() {
            DeviceLocation::Cpu => Device::CPU,
            DeviceLocation::Cuda { gpu_id } => Device::CUDA(gpu_id),
            DeviceLocation::Metal { gpu_id } => Device::Metal(gpu_id),
        }
    }

    fn is_contiguous(&self) -> bool {
        self.tensor.is_contiguous()
    }

    fn reshape(&self, shape: &[usize]) -> Result<TensorRef> {
        let reshaped = self.tensor.reshape(shape).or_backend("reshape")?;
        Ok(Self::into_ref(reshaped))
    }

    fn to_vec_f32(&self) -> Result<Vec<f32>> {
        self.tensor
            .to_dtype(DType::F32)
            .and_then(|t| t.flatten_all())
            .and_then(|t| t.to_vec1::<f32>())
            .or_backend("to_vec_f32")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Map a Tessera device onto a candle device
pub fn candle_device(device: &Device) -> Result<candle_core::Device> {
    match device {
        Device::CPU => Ok(candle_core::Device::Cpu),
        Device::CUDA(id) => candle_core::Device::new_cuda(*id)
            .map_err(|e| TesseraError::device(format!("CUDA device error: {}", e))),
        Device::Metal(id) => candle_core::Device::new_metal(*id)
            .map_err(|e| TesseraError::device(format!("Metal device error: {}", e))),
    }
}

/// Get an f32 candle tensor on `device` out of any tensor handle.
///
/// Candle-backed handles are reused without copying their data; anything
/// else is read back through [`TensorLike::to_vec_f32`].
pub fn as_candle(x: &TensorRef, device: &candle_core::Device) -> Result<Tensor> {
    let tensor = match x.as_any().downcast_ref::<CandleTensorWrapper>() {
        Some(wrapper) => wrapper.inner().clone(),
        None => {
            let data = x.to_vec_f32()?;
            Tensor::from_vec(data, x.shape(), device).or_backend("tensor import")?
        }
    };

    let tensor = if tensor.dtype() == DType::F32 {
        tensor
    } else {
        tensor.to_dtype(DType::F32).or_backend("cast to f32")?
    };
    if tensor.device().same_device(device) {
        Ok(tensor)
    } else {
        tensor.to_device(device).or_backend("device transfer")
    }
}

/// Attach context to candle failures
pub(crate) trait CandleResultExt<T> {
    fn or_backend(self, context: &str) -> Result<T>;
}

impl<T> CandleResultExt<T> for candle_core::Result<T> {
    fn or_backend(self, context: &str) -> Result<T> {
        self.map_err(|e| TesseraError::backend(format!("{} failed: {}", context, e)))
    }
}
