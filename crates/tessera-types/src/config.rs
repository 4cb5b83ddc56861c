//! Configuration types for reference model conformers

use crate::{DataType, Device, Result, TesseraError};
use serde::{Deserialize, Serialize};

/// Configuration of a linear embedding extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Flattened width of a single input sample
    pub in_features: usize,
    /// Width of produced embeddings
    pub feat_dim: usize,
    /// Device the parameters are created on
    #[serde(default)]
    pub device: Device,
    /// Parameter data type
    #[serde(default)]
    pub dtype: DataType,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            in_features: 512,
            feat_dim: 128,
            device: Device::CPU,
            dtype: DataType::FP32,
        }
    }
}

impl ExtractorConfig {
    /// Create a CPU/fp32 configuration
    pub fn new(in_features: usize, feat_dim: usize) -> Self {
        Self {
            in_features,
            feat_dim,
            ..Default::default()
        }
    }

    /// Parse configuration from JSON and validate it
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.in_features == 0 {
            return Err(TesseraError::config("in_features must be greater than 0"));
        }
        if self.feat_dim == 0 {
            return Err(TesseraError::config("feat_dim must be greater than 0"));
        }
        if self.dtype != DataType::FP32 {
            return Err(TesseraError::unsupported(format!(
                "dtype {} (only fp32 parameters are supported)",
                self.dtype
            )));
        }
        Ok(())
    }
}

/// Configuration of an MLP head stacked on top of an extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadConfig {
    /// Widths of the hidden layers, in order; may be empty
    #[serde(default)]
    pub hidden_sizes: Vec<usize>,
    /// Width of the final layer
    pub out_features: usize,
}

impl Default for HeadConfig {
    fn default() -> Self {
        Self {
            hidden_sizes: Vec::new(),
            out_features: 128,
        }
    }
}

impl HeadConfig {
    pub fn new(hidden_sizes: Vec<usize>, out_features: usize) -> Self {
        Self {
            hidden_sizes,
            out_features,
        }
    }

    /// Parse configuration from JSON and validate it
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.out_features == 0 {
            return Err(TesseraError::config("out_features must be greater than 0"));
        }
        if let Some(pos) = self.hidden_sizes.iter().position(|&h| h == 0) {
            return Err(TesseraError::config(format!(
                "hidden_sizes[{}] must be greater than 0",
                pos
            )));
        }
        Ok(())
    }

    /// Layer widths from the head input through the output
    pub fn layer_sizes(&self, in_features: usize) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden_sizes.len() + 2);
        sizes.push(in_features);
        sizes.extend_from_slice(&self.hidden_sizes);
        sizes.push(self.out_features);
        sizes
    }
}

/// Configuration of a siamese model scoring concatenated pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiameseConfig {
    /// Extractor run over the concatenated pair
    pub extractor: ExtractorConfig,
    /// Comparator head; must end in a single output
    pub head: HeadConfig,
}

impl Default for SiameseConfig {
    fn default() -> Self {
        Self {
            extractor: ExtractorConfig::default(),
            head: HeadConfig::new(Vec::new(), 1),
        }
    }
}

impl SiameseConfig {
    /// Parse configuration from JSON and validate it
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate()?;
        self.head.validate()?;
        if self.head.out_features != 1 {
            return Err(TesseraError::config(format!(
                "comparator head must produce one score per pair, got {}",
                self.head.out_features
            )));
        }
        Ok(())
    }
}
