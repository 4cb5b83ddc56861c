//! Embedding extractor contract
//!
//! Every model that turns a batch of inputs into fixed-width embeddings
//! implements [`Extractor`]. Trainers, losses and indexes only ever talk to
//! models through this trait, which is what lets architectures be swapped.

use crate::TensorRef;
use std::sync::Arc;
use tessera_types::{Capability, Result, TesseraError};

/// A model producing `[batch, feat_dim]` embeddings from `[batch, ...]` inputs.
///
/// Guarantees a conformer must uphold:
/// - `extract(x)` has leading dimension `x.shape()[0]` and trailing dimension
///   `feat_dim()`, for every valid input, for the lifetime of the instance.
/// - `feat_dim()` is answered without running the model.
/// - Neither call mutates freeze state.
///
/// The defaults of [`forward`](Extractor::forward) and
/// [`feat_dim`](Extractor::feat_dim) fail with
/// [`TesseraError::CapabilityNotImplemented`]; a type that implements this
/// trait without overriding them is violating the contract.
pub trait Extractor: Send + Sync {
    /// General forward computation of the model
    fn forward(&self, x: &TensorRef) -> Result<TensorRef> {
        let _ = x;
        Err(TesseraError::not_implemented::<Self>(Capability::Forward))
    }

    /// Compute embeddings for a batch of inputs.
    ///
    /// Equivalent to [`forward`](Extractor::forward) unless overridden, e.g.
    /// to expose an intermediate layer instead of the final output.
    fn extract(&self, x: &TensorRef) -> Result<TensorRef> {
        self.forward(x)
    }

    /// Fixed width of every embedding this instance produces
    fn feat_dim(&self) -> Result<usize> {
        Err(TesseraError::not_implemented::<Self>(Capability::FeatDim))
    }
}

impl<E: Extractor + ?Sized> Extractor for Box<E> {
    fn forward(&self, x: &TensorRef) -> Result<TensorRef> {
        (**self).forward(x)
    }

    fn extract(&self, x: &TensorRef) -> Result<TensorRef> {
        (**self).extract(x)
    }

    fn feat_dim(&self) -> Result<usize> {
        (**self).feat_dim()
    }
}

impl<E: Extractor + ?Sized> Extractor for Arc<E> {
    fn forward(&self, x: &TensorRef) -> Result<TensorRef> {
        (**self).forward(x)
    }

    fn extract(&self, x: &TensorRef) -> Result<TensorRef> {
        (**self).extract(x)
    }

    fn feat_dim(&self) -> Result<usize> {
        (**self).feat_dim()
    }
}
