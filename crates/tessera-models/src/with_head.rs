//! Extractor wrapped with a trainable MLP head

use crate::{
    head::MlpHead,
    linear::LinearExtractor,
    parameters::ParameterStore,
    tensor_wrapper::{as_candle, candle_device, CandleTensorWrapper},
};
use candle_core::{DType, Var};
use candle_nn::{VarBuilder, VarMap};
use tessera_interfaces::{Extractor, Freezable, TensorRef};
use tessera_types::{Device, ExtractorConfig, HeadConfig, Result};
use tracing::debug;

/// Parameter group holding the wrapped extractor's variables
pub const BACKBONE_GROUP: &str = "backbone";
/// Parameter group holding the head's variables
pub const HEAD_GROUP: &str = "head";

/// Runs `backbone`, then an MLP head over its embeddings.
///
/// Freezing suspends the backbone group only; the head keeps training. While
/// frozen, backbone embeddings are detached so no gradient flows back into it.
pub struct ExtractorWithHead<E> {
    backbone: E,
    head: MlpHead,
    params: ParameterStore,
    device: candle_core::Device,
}

impl<E: Extractor> ExtractorWithHead<E> {
    /// `backbone_vars` are the variables the backbone trains; they form the
    /// group `freeze` suspends.
    pub fn new(
        backbone: E,
        backbone_vars: Vec<Var>,
        head_config: &HeadConfig,
        device: &Device,
    ) -> Result<Self> {
        let in_features = backbone.feat_dim()?;
        let device = candle_device(device)?;
        let head_varmap = VarMap::new();
        let vb = VarBuilder::from_varmap(&head_varmap, DType::F32, &device);
        let head = MlpHead::new(in_features, head_config, vb.pp("head"))?;

        let mut params = ParameterStore::new();
        params.add_group(BACKBONE_GROUP, backbone_vars)?;
        params.add_group(HEAD_GROUP, head_varmap.all_vars())?;

        debug!(
            "Created ExtractorWithHead: backbone_dim={}, head_layers={}, feat_dim={}",
            in_features,
            head.num_layers(),
            head.out_features()
        );

        Ok(Self {
            backbone,
            head,
            params,
            device,
        })
    }

    pub fn backbone(&self) -> &E {
        &self.backbone
    }

    /// Parameter groups; `trainable_vars()` is what an optimizer should get
    pub fn parameters(&self) -> &ParameterStore {
        &self.params
    }

    fn backbone_trainable(&self) -> bool {
        self.params
            .group(BACKBONE_GROUP)
            .map(|g| g.is_trainable())
            .unwrap_or(true)
    }

    fn set_backbone_trainable(&mut self, trainable: bool) -> Result<()> {
        let changed = self.params.set_trainable(BACKBONE_GROUP, trainable)?;
        debug!(
            "ExtractorWithHead backbone trainable={} (changed={})",
            trainable, changed
        );
        Ok(())
    }
}

impl ExtractorWithHead<LinearExtractor> {
    /// Build a linear backbone and a head from configuration
    pub fn from_config(extractor: ExtractorConfig, head: &HeadConfig) -> Result<Self> {
        let device = extractor.device;
        let backbone = LinearExtractor::new(extractor)?;
        let vars = backbone.vars();
        Self::new(backbone, vars, head, &device)
    }
}

impl<E: Extractor> Extractor for ExtractorWithHead<E> {
    fn forward(&self, x: &TensorRef) -> Result<TensorRef> {
        let emb = self.backbone.extract(x)?;
        let emb = as_candle(&emb, &self.device)?;
        let emb = if self.backbone_trainable() {
            emb
        } else {
            emb.detach()
        };
        let out = self.head.forward(&emb)?;
        Ok(CandleTensorWrapper::into_ref(out))
    }

    fn feat_dim(&self) -> Result<usize> {
        Ok(self.head.out_features())
    }
}

impl<E: Extractor> Freezable for ExtractorWithHead<E> {
    fn freeze(&mut self) -> Result<()> {
        self.set_backbone_trainable(false)
    }

    fn unfreeze(&mut self) -> Result<()> {
        self.set_backbone_trainable(true)
    }
}
