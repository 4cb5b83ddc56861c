//! Backend-agnostic tensor handle
//!
//! Contracts exchange tensors as [`TensorRef`] so that a model built on one
//! runtime can be consumed by pipelines that never name that runtime. A
//! backend wraps its native tensor in a type implementing [`TensorLike`] and
//! recovers it again through [`TensorLike::as_any`].

use std::{any::Any, sync::Arc};
use tessera_types::{DataType, Device, Result, TesseraError};

/// Core tensor trait
pub trait TensorLike: Send + Sync + std::fmt::Debug {
    /// Get tensor shape
    fn shape(&self) -> &[usize];

    /// Get tensor data type
    fn dtype(&self) -> DataType;

    /// Get device where tensor resides
    fn device(&self) -> Device;

    /// Get total number of elements
    fn numel(&self) -> usize {
        self.shape().iter().product()
    }

    /// Get number of dimensions
    fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Check if tensor is scalar (0-dimensional)
    fn is_scalar(&self) -> bool {
        self.shape().is_empty()
    }

    /// Leading (batch) dimension
    fn batch_size(&self) -> Result<usize> {
        self.shape()
            .first()
            .copied()
            .ok_or_else(|| TesseraError::shape_mismatch("scalar tensor has no batch dimension"))
    }

    /// Trailing dimension, `None` for scalars
    fn last_dim(&self) -> Option<usize> {
        self.shape().last().copied()
    }

    /// Check if tensor is contiguous in memory
    fn is_contiguous(&self) -> bool;

    /// Reshape tensor to new shape (must have same number of elements)
    fn reshape(&self, shape: &[usize]) -> Result<TensorRef>;

    /// Copy tensor data to a row-major `Vec<f32>`
    fn to_vec_f32(&self) -> Result<Vec<f32>> {
        Err(TesseraError::unsupported(
            "to_vec_f32 not implemented for this tensor backend",
        ))
    }

    /// Access the concrete handle, for backends that need their native tensor back
    fn as_any(&self) -> &dyn Any;
}

/// Reference-counted tensor handle for zero-copy sharing
pub type TensorRef = Arc<dyn TensorLike>;

/// Shape helpers shared by contract checks and backends
pub mod utils {
    use super::*;

    /// Shape of a batch of embeddings
    pub fn embedding_shape(batch: usize, feat_dim: usize) -> [usize; 2] {
        [batch, feat_dim]
    }

    /// Width of one sample once every non-batch dimension is flattened
    pub fn flattened_width(shape: &[usize]) -> Result<usize> {
        match shape {
            [] => Err(TesseraError::shape_mismatch(
                "cannot flatten a scalar into a batch",
            )),
            [_] => Ok(1),
            [_, rest @ ..] => Ok(rest.iter().product()),
        }
    }
}
