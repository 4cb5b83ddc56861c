//! Capability contracts for metric-learning models
//!
//! This crate defines the traits every model in the Tessera ecosystem
//! implements so that trainers, losses, samplers and inference pipelines can
//! treat heterogeneous architectures uniformly:
//! - [`Extractor`]: inputs to fixed-width embeddings
//! - [`Freezable`]: reversible, partial suspension of trainability
//! - [`PairwiseDistanceModel`]: dissimilarity computed directly from a pair
//!
//! The traits are independent. A model implements whichever subset it
//! supports; operations it claims but never overrides fail with
//! [`TesseraError::CapabilityNotImplemented`].

pub mod contract;
pub mod extractor;
pub mod freezable;
pub mod pairwise;
pub mod shared;
pub mod tensor;

pub use contract::{
    check_batch_aligned, check_distance_shape, check_embedding_shape, ExtractorExt,
    PairwiseDistanceExt,
};
pub use extractor::Extractor;
pub use freezable::Freezable;
pub use pairwise::PairwiseDistanceModel;
pub use shared::SharedModel;
pub use tensor::{TensorLike, TensorRef};

pub use tessera_types::{Capability, DataType, Device, Result, TesseraError};
