//! Pairwise distance models

use crate::{
    head::MlpHead,
    linear::LinearExtractor,
    parameters::ParameterStore,
    tensor_wrapper::{as_candle, candle_device, CandleResultExt, CandleTensorWrapper},
    with_head::{BACKBONE_GROUP, HEAD_GROUP},
};
use candle_core::{DType, Tensor, Var};
use candle_nn::{VarBuilder, VarMap};
use tessera_interfaces::{
    check_batch_aligned, tensor::utils::flattened_width, Extractor, Freezable,
    PairwiseDistanceModel, TensorRef,
};
use tessera_types::{Device, HeadConfig, Result, SiameseConfig, TesseraError};
use tracing::debug;

/// Embeds both sides with one shared extractor and returns the per-row
/// Euclidean distance, shape `[batch]`
pub struct TrivialDistanceSiamese<E> {
    extractor: E,
    device: candle_core::Device,
}

impl<E: Extractor> TrivialDistanceSiamese<E> {
    pub fn new(extractor: E, device: &Device) -> Result<Self> {
        let device = candle_device(device)?;
        Ok(Self { extractor, device })
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }
}

impl<E: Extractor> PairwiseDistanceModel for TrivialDistanceSiamese<E> {
    type Input = TensorRef;

    fn forward(&self, x1: &TensorRef, x2: &TensorRef) -> Result<TensorRef> {
        let batch = check_batch_aligned(x1, x2)?;
        let e1 = as_candle(&self.extractor.extract(x1)?, &self.device)?;
        let e2 = as_candle(&self.extractor.extract(x2)?, &self.device)?;

        let dist = (e1 - e2)
            .and_then(|d| d.sqr())
            .and_then(|d| d.sum(1))
            .and_then(|d| d.sqrt())
            .or_backend("euclidean distance")?;

        debug!("TrivialDistanceSiamese forward: batch={}", batch);
        Ok(CandleTensorWrapper::into_ref(dist))
    }
}

/// Scores a pair jointly: flattens both sides, concatenates them per row,
/// runs an extractor over the concatenation and projects to one score.
/// Output shape is `[batch]`.
///
/// Freezing suspends the extractor; the comparator head keeps training.
pub struct ConcatSiamese<E> {
    extractor: E,
    head: MlpHead,
    params: ParameterStore,
    device: candle_core::Device,
}

impl<E: Extractor> ConcatSiamese<E> {
    /// `extractor` consumes rows of `[left_features | right_features]`
    pub fn new(
        extractor: E,
        extractor_vars: Vec<Var>,
        head_config: &HeadConfig,
        device: &Device,
    ) -> Result<Self> {
        if head_config.out_features != 1 {
            return Err(TesseraError::config(format!(
                "comparator head must produce one score per pair, got {}",
                head_config.out_features
            )));
        }
        let in_features = extractor.feat_dim()?;
        let device = candle_device(device)?;
        let head_varmap = VarMap::new();
        let vb = VarBuilder::from_varmap(&head_varmap, DType::F32, &device);
        let head = MlpHead::new(in_features, head_config, vb.pp("comparator"))?;

        let mut params = ParameterStore::new();
        params.add_group(BACKBONE_GROUP, extractor_vars)?;
        params.add_group(HEAD_GROUP, head_varmap.all_vars())?;

        debug!(
            "Created ConcatSiamese: extractor_dim={}, head_layers={}",
            in_features,
            head.num_layers()
        );

        Ok(Self {
            extractor,
            head,
            params,
            device,
        })
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    pub fn parameters(&self) -> &ParameterStore {
        &self.params
    }

    fn extractor_trainable(&self) -> bool {
        self.params
            .group(BACKBONE_GROUP)
            .map(|g| g.is_trainable())
            .unwrap_or(true)
    }

    fn concat_pair(&self, x1: &TensorRef, x2: &TensorRef, batch: usize) -> Result<Tensor> {
        let left = as_candle(x1, &self.device)?
            .reshape((batch, flattened_width(x1.shape())?))
            .or_backend("flatten left")?;
        let right = as_candle(x2, &self.device)?
            .reshape((batch, flattened_width(x2.shape())?))
            .or_backend("flatten right")?;
        Tensor::cat(&[&left, &right], 1).or_backend("pair concat")
    }
}

impl ConcatSiamese<LinearExtractor> {
    /// Build a linear extractor and comparator head from configuration.
    ///
    /// `config.extractor.in_features` is the width of the concatenated pair.
    pub fn from_config(config: &SiameseConfig) -> Result<Self> {
        config.validate()?;
        let extractor = LinearExtractor::new(config.extractor.clone())?;
        let vars = extractor.vars();
        Self::new(extractor, vars, &config.head, &config.extractor.device)
    }
}

impl<E: Extractor> PairwiseDistanceModel for ConcatSiamese<E> {
    type Input = TensorRef;

    fn forward(&self, x1: &TensorRef, x2: &TensorRef) -> Result<TensorRef> {
        let batch = check_batch_aligned(x1, x2)?;
        let pair = CandleTensorWrapper::into_ref(self.concat_pair(x1, x2, batch)?);

        let emb = as_candle(&self.extractor.extract(&pair)?, &self.device)?;
        let emb = if self.extractor_trainable() {
            emb
        } else {
            emb.detach()
        };
        let scores = self.head.forward(&emb)?.squeeze(1).or_backend("squeeze")?;

        debug!("ConcatSiamese forward: batch={}", batch);
        Ok(CandleTensorWrapper::into_ref(scores))
    }
}

impl<E: Extractor> Freezable for ConcatSiamese<E> {
    fn freeze(&mut self) -> Result<()> {
        let changed = self.params.set_trainable(BACKBONE_GROUP, false)?;
        debug!("ConcatSiamese extractor frozen (changed={})", changed);
        Ok(())
    }

    fn unfreeze(&mut self) -> Result<()> {
        let changed = self.params.set_trainable(BACKBONE_GROUP, true)?;
        debug!("ConcatSiamese extractor unfrozen (changed={})", changed);
        Ok(())
    }
}
