//! # Tessera
//!
//! Capability contracts for metric-learning models.
//!
//! Downstream components (trainers, losses, samplers, retrieval pipelines)
//! are written against three traits and never against a concrete
//! architecture:
//!
//! - [`Extractor`]: `[batch, ...]` inputs to `[batch, feat_dim]` embeddings
//! - [`Freezable`]: reversible, partial suspension of trainability
//! - [`PairwiseDistanceModel`]: one dissimilarity per input pair
//!
//! ```
//! use tessera::prelude::*;
//!
//! let model = LinearExtractor::new(ExtractorConfig::new(16, 128))?;
//! assert_eq!(model.feat_dim()?, 128);
//! # Ok::<(), tessera::TesseraError>(())
//! ```

pub mod test_utils;

pub use tessera_interfaces as interfaces;
pub use tessera_models as models;
pub use tessera_types as types;

pub use tessera_interfaces::{
    check_batch_aligned, check_distance_shape, check_embedding_shape, Extractor, ExtractorExt,
    Freezable, PairwiseDistanceExt, PairwiseDistanceModel, SharedModel, TensorLike, TensorRef,
};
pub use tessera_types::{
    Capability, DataType, Device, ExtractorConfig, HeadConfig, Result, SiameseConfig,
    TesseraError,
};

/// Everything a conformer or a pipeline usually needs
pub mod prelude {
    pub use crate::{
        Capability, DataType, Device, Extractor, ExtractorConfig, ExtractorExt, Freezable,
        HeadConfig, PairwiseDistanceExt, PairwiseDistanceModel, Result, SharedModel,
        SiameseConfig, TensorLike, TensorRef, TesseraError,
    };
    pub use tessera_models::{
        CandleTensorWrapper, ConcatSiamese, ExtractorWithHead, LinearExtractor,
        TrivialDistanceSiamese,
    };
}
