use crate::core::modification::sharpen::SharpeningMode;
use crate::core::utils::boxes::DEFAULT_MAX_BOXES;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModificationStep {
    Sharpen {
        mode: SharpeningMode,
        n_iterations: usize,
    },
    ConvertToNonNegative {
        substitute_value: f64,
    },
    Reset {
        substitute_value: f64,
        less_than_threshold: f64,
    },
}

impl ModificationStep {
    pub fn name(&self) -> &'static str {
        match self {
            ModificationStep::Sharpen { .. } => "sharpen",
            ModificationStep::ConvertToNonNegative { .. } => "convert-to-non-negative",
            ModificationStep::Reset { .. } => "reset",
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            ModificationStep::Sharpen {
                mode: SharpeningMode::MeanScaled { mean_scale },
                ..
            } => require_finite("mean-scale", mean_scale),
            ModificationStep::Sharpen { .. } => Ok(()),
            ModificationStep::ConvertToNonNegative { substitute_value } => {
                require_finite("substitute-value", substitute_value)
            }
            ModificationStep::Reset {
                substitute_value,
                less_than_threshold,
            } => {
                require_finite("substitute-value", substitute_value)?;
                require_not_nan("less-than-threshold", less_than_threshold)
            }
        }
    }
}

fn require_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            reason: format!("expected a finite number, got {}", value),
        })
    }
}

fn require_not_nan(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_nan() {
        Err(ConfigError::InvalidParameter {
            name,
            reason: "NaN is not a valid threshold".to_string(),
        })
    } else {
        Ok(())
    }
}

/// Ordered list of single-grid modifications.
#[derive(Debug, Clone, PartialEq)]
pub struct ModificationPipeline {
    steps: Vec<ModificationStep>,
}

impl ModificationPipeline {
    pub fn steps(&self) -> &[ModificationStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Parses a pipeline from TOML, one `[[steps]]` table per step:
    ///
    /// ```toml
    /// [[steps]]
    /// op = "convert-to-non-negative"
    /// substitute-value = 0.0
    ///
    /// [[steps]]
    /// op = "sharpen"
    /// n-iterations = 3
    /// mean-scale = 2.0   # omit for unconditional sharpening
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: FilePipeline = toml::from_str(content)?;
        file.steps
            .into_iter()
            .fold(ModificationPipelineBuilder::new(), |builder, step| {
                builder.step(step.into())
            })
            .build()
    }
}

#[derive(Default)]
pub struct ModificationPipelineBuilder {
    steps: Vec<ModificationStep>,
}

impl ModificationPipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, step: ModificationStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn sharpen(self, mode: SharpeningMode, n_iterations: usize) -> Self {
        self.step(ModificationStep::Sharpen { mode, n_iterations })
    }

    pub fn convert_to_non_negative(self, substitute_value: f64) -> Self {
        self.step(ModificationStep::ConvertToNonNegative { substitute_value })
    }

    pub fn reset(self, substitute_value: f64, less_than_threshold: f64) -> Self {
        self.step(ModificationStep::Reset {
            substitute_value,
            less_than_threshold,
        })
    }

    pub fn build(self) -> Result<ModificationPipeline, ConfigError> {
        if self.steps.is_empty() {
            return Err(ConfigError::MissingParameter("steps"));
        }
        for step in &self.steps {
            step.validate()?;
        }
        Ok(ModificationPipeline { steps: self.steps })
    }
}

/// How two maps of the same shape are reduced to a common support.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum CombinationConfig {
    CutBy,
    Intersection { threshold: f64 },
}

impl CombinationConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CombinationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            CombinationConfig::CutBy => Ok(()),
            CombinationConfig::Intersection { threshold } => {
                require_not_nan("threshold", threshold)
            }
        }
    }
}

/// Box tiling used when a pipeline is applied block by block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalConfig {
    pub fraction: f64,
    pub max_boxes: usize,
}

impl LocalConfig {
    pub fn new(fraction: f64) -> Result<Self, ConfigError> {
        if !fraction.is_finite() || fraction <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "fraction",
                reason: format!("expected a positive finite number, got {}", fraction),
            });
        }
        Ok(Self {
            fraction,
            max_boxes: DEFAULT_MAX_BOXES,
        })
    }

    pub fn with_max_boxes(mut self, max_boxes: usize) -> Self {
        self.max_boxes = max_boxes;
        self
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct FilePipeline {
    #[serde(default)]
    steps: Vec<FileStep>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
enum FileStep {
    #[serde(rename_all = "kebab-case")]
    Sharpen {
        n_iterations: usize,
        mean_scale: Option<f64>,
    },
    #[serde(rename_all = "kebab-case")]
    ConvertToNonNegative { substitute_value: f64 },
    #[serde(rename_all = "kebab-case")]
    Reset {
        substitute_value: f64,
        less_than_threshold: f64,
    },
}

impl From<FileStep> for ModificationStep {
    fn from(step: FileStep) -> Self {
        match step {
            FileStep::Sharpen {
                n_iterations,
                mean_scale,
            } => ModificationStep::Sharpen {
                mode: mean_scale.map_or(SharpeningMode::Unconditional, |mean_scale| {
                    SharpeningMode::MeanScaled { mean_scale }
                }),
                n_iterations,
            },
            FileStep::ConvertToNonNegative { substitute_value } => {
                ModificationStep::ConvertToNonNegative { substitute_value }
            }
            FileStep::Reset {
                substitute_value,
                less_than_threshold,
            } => ModificationStep::Reset {
                substitute_value,
                less_than_threshold,
            },
        }
    }
}
