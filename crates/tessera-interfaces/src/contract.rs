//! Runtime checks of the shape guarantees made by the capability traits
//!
//! The traits cannot express shapes in the type system, so pipelines that
//! want a hard failure on a misbehaving conformer go through
//! [`ExtractorExt::extract_checked`] and
//! [`PairwiseDistanceExt::forward_checked`].

use crate::{tensor::utils::embedding_shape, Extractor, PairwiseDistanceModel, TensorRef};
use tessera_types::{Result, TesseraError};
use tracing::warn;

/// Verify `output` is `[input.batch, feat_dim]`
pub fn check_embedding_shape(input: &TensorRef, output: &TensorRef, feat_dim: usize) -> Result<()> {
    let batch = input.batch_size()?;
    let shape = output.shape();
    if shape != embedding_shape(batch, feat_dim).as_slice() {
        return Err(TesseraError::shape_mismatch(format!(
            "expected embeddings of shape [{}, {}], got {:?}",
            batch, feat_dim, shape
        )));
    }
    Ok(())
}

/// Verify a distance tensor's leading dimension is `batch`
pub fn check_distance_shape(batch: usize, output: &TensorRef) -> Result<()> {
    match output.shape().first() {
        Some(&b) if b == batch => Ok(()),
        _ => Err(TesseraError::shape_mismatch(format!(
            "expected distances with leading dimension {}, got {:?}",
            batch,
            output.shape()
        ))),
    }
}

/// Verify both sides of a pair share a batch size, returning it
pub fn check_batch_aligned(x1: &TensorRef, x2: &TensorRef) -> Result<usize> {
    let left = x1.batch_size()?;
    let right = x2.batch_size()?;
    if left != right {
        return Err(TesseraError::batch_mismatch(left, right));
    }
    Ok(left)
}

/// Shape-checked extraction, available on every [`Extractor`]
pub trait ExtractorExt: Extractor {
    /// Like [`Extractor::extract`], but fails if the result breaks the
    /// `[batch, feat_dim]` guarantee
    fn extract_checked(&self, x: &TensorRef) -> Result<TensorRef> {
        let feat_dim = self.feat_dim()?;
        let out = self.extract(x)?;
        if let Err(e) = check_embedding_shape(x, &out, feat_dim) {
            warn!(
                "Extractor {} broke its shape contract: {}",
                std::any::type_name::<Self>(),
                e
            );
            return Err(e);
        }
        Ok(out)
    }
}

impl<E: Extractor + ?Sized> ExtractorExt for E {}

/// Alignment- and shape-checked scoring for tensor-input pairwise models
pub trait PairwiseDistanceExt: PairwiseDistanceModel<Input = TensorRef> {
    /// Reject misaligned batches, score them, then verify the output's
    /// leading dimension
    fn forward_checked(&self, x1: &TensorRef, x2: &TensorRef) -> Result<TensorRef> {
        let batch = check_batch_aligned(x1, x2)?;
        let out = PairwiseDistanceModel::forward(self, x1, x2)?;
        if let Err(e) = check_distance_shape(batch, &out) {
            warn!(
                "Pairwise model {} broke its shape contract: {}",
                std::any::type_name::<Self>(),
                e
            );
            return Err(e);
        }
        Ok(out)
    }
}

impl<P: PairwiseDistanceModel<Input = TensorRef> + ?Sized> PairwiseDistanceExt for P {}
