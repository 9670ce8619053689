//! Distortion filter model
//!
//! The glass refraction comes from a single declarative filter the host's
//! graphics pipeline evaluates: a deterministic fractal-noise field is
//! blurred, re-lit through an arithmetic composite, and used as a
//! displacement map over the source graphic. This module models that chain as
//! data; `glaze_svg` turns it into markup. Nothing here touches pixels.

use smallvec::SmallVec;

use crate::config::GlassConfig;

/// Noise base frequency of the displacement field, fixed on both axes.
pub const NOISE_BASE_FREQUENCY: (f64, f64) = (0.004, 0.004);

/// Input to a filter stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterInput {
    /// The element the filter is applied to.
    SourceGraphic,
    /// A named result produced by an earlier stage.
    Reference(String),
    /// The previous stage's output. Emitted by omitting the input attribute.
    Previous,
}

impl FilterInput {
    /// The attribute value for this input, `None` for [`FilterInput::Previous`].
    pub fn as_attr(&self) -> Option<&str> {
        match self {
            FilterInput::SourceGraphic => Some("SourceGraphic"),
            FilterInput::Reference(name) => Some(name.as_str()),
            FilterInput::Previous => None,
        }
    }
}

/// Color channel a displacement stage reads its offsets from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelSelector {
    R,
    G,
    B,
    A,
}

impl ChannelSelector {
    /// Attribute value for this channel.
    pub fn as_str(self) -> &'static str {
        match self {
            ChannelSelector::R => "R",
            ChannelSelector::G => "G",
            ChannelSelector::B => "B",
            ChannelSelector::A => "A",
        }
    }
}

/// Noise flavor of a turbulence stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurbulenceKind {
    /// Smooth fractal noise.
    FractalNoise,
    /// Harsher turbulence noise.
    Turbulence,
}

impl TurbulenceKind {
    /// Attribute value for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TurbulenceKind::FractalNoise => "fractalNoise",
            TurbulenceKind::Turbulence => "turbulence",
        }
    }
}

/// Compositing operator of a composite stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CompositeOperator {
    Over,
    In,
    Out,
    Atop,
    Xor,
    /// `k1*i1*i2 + k2*i1 + k3*i2 + k4` per pixel.
    Arithmetic { k1: f64, k2: f64, k3: f64, k4: f64 },
}

impl CompositeOperator {
    /// Attribute value for this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompositeOperator::Over => "over",
            CompositeOperator::In => "in",
            CompositeOperator::Out => "out",
            CompositeOperator::Atop => "atop",
            CompositeOperator::Xor => "xor",
            CompositeOperator::Arithmetic { .. } => "arithmetic",
        }
    }
}

/// One filter primitive in the chain.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterStage {
    /// Deterministic noise generation.
    Turbulence {
        kind: TurbulenceKind,
        base_frequency: (f64, f64),
        octaves: u32,
        seed: u32,
        result: Option<String>,
    },
    /// Gaussian blur of an input.
    GaussianBlur {
        input: FilterInput,
        std_deviation: f64,
        result: Option<String>,
    },
    /// Pixel-wise combination of two inputs.
    Composite {
        input: FilterInput,
        input2: FilterInput,
        operator: CompositeOperator,
        result: Option<String>,
    },
    /// Shift source pixels by offsets read from a displacement input.
    DisplacementMap {
        input: FilterInput,
        displacement: FilterInput,
        scale: f64,
        x_channel: ChannelSelector,
        y_channel: ChannelSelector,
    },
}

impl FilterStage {
    /// The stage's named result, if it declares one.
    pub fn result(&self) -> Option<&str> {
        match self {
            FilterStage::Turbulence { result, .. }
            | FilterStage::GaussianBlur { result, .. }
            | FilterStage::Composite { result, .. } => result.as_deref(),
            FilterStage::DisplacementMap { .. } => None,
        }
    }
}

/// The complete glass distortion filter: four fixed stages parameterized by
/// `elasticity` (noise softness) and `displacement_scale` (refraction
/// strength and direction).
#[derive(Clone, Debug, PartialEq)]
pub struct DistortionFilter {
    /// Document-unique filter id the effect layer references.
    pub id: String,
    /// Stages in evaluation order.
    pub stages: SmallVec<[FilterStage; 4]>,
}

impl DistortionFilter {
    /// Build the canonical four-stage chain.
    pub fn new(id: impl Into<String>, elasticity: f64, displacement_scale: f64) -> Self {
        let mut stages = SmallVec::new();
        stages.push(FilterStage::Turbulence {
            kind: TurbulenceKind::FractalNoise,
            base_frequency: NOISE_BASE_FREQUENCY,
            octaves: 1,
            seed: 0,
            result: Some("noise".to_string()),
        });
        stages.push(FilterStage::GaussianBlur {
            input: FilterInput::Reference("noise".to_string()),
            std_deviation: elasticity,
            result: Some("blurred".to_string()),
        });
        stages.push(FilterStage::Composite {
            // Both inputs elided: the blurred noise composited against itself.
            input: FilterInput::Previous,
            input2: FilterInput::Previous,
            operator: CompositeOperator::Arithmetic {
                k1: 0.0,
                k2: 1.0,
                k3: 2.0,
                k4: 0.0,
            },
            result: Some("litImage".to_string()),
        });
        stages.push(FilterStage::DisplacementMap {
            input: FilterInput::SourceGraphic,
            displacement: FilterInput::Reference("litImage".to_string()),
            scale: displacement_scale,
            x_channel: ChannelSelector::G,
            y_channel: ChannelSelector::G,
        });
        Self {
            id: id.into(),
            stages,
        }
    }

    /// Build the chain for a configuration.
    pub fn from_config(config: &GlassConfig) -> Self {
        Self::new(
            config.filter_id.clone(),
            config.elasticity,
            config.displacement_scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_chain_shape() {
        let filter = DistortionFilter::new("lg-dist", 8.0, -30.0);

        assert_eq!(filter.id, "lg-dist");
        assert_eq!(filter.stages.len(), 4);
        match &filter.stages[0] {
            FilterStage::Turbulence {
                kind,
                base_frequency,
                octaves,
                seed,
                ..
            } => {
                assert_eq!(*kind, TurbulenceKind::FractalNoise);
                assert_eq!(*base_frequency, NOISE_BASE_FREQUENCY);
                assert_eq!(*octaves, 1);
                assert_eq!(*seed, 0);
            }
            other => panic!("expected turbulence first, got {:?}", other),
        }
        assert!(matches!(
            &filter.stages[1],
            FilterStage::GaussianBlur {
                std_deviation, ..
            } if *std_deviation == 8.0
        ));
        assert!(matches!(
            &filter.stages[2],
            FilterStage::Composite {
                operator: CompositeOperator::Arithmetic {
                    k1, k2, k3, k4
                },
                ..
            } if *k1 == 0.0 && *k2 == 1.0 && *k3 == 2.0 && *k4 == 0.0
        ));
        assert!(matches!(
            &filter.stages[3],
            FilterStage::DisplacementMap {
                scale,
                x_channel: ChannelSelector::G,
                y_channel: ChannelSelector::G,
                ..
            } if *scale == -30.0
        ));
    }

    #[test]
    fn test_stage_results_chain_in_order() {
        let filter = DistortionFilter::new("f", 8.0, -30.0);
        let results: Vec<Option<&str>> = filter.stages.iter().map(|s| s.result()).collect();

        assert_eq!(
            results,
            vec![Some("noise"), Some("blurred"), Some("litImage"), None]
        );
    }

    #[test]
    fn test_from_config_uses_tuning_fields() {
        let config = GlassConfig::default()
            .filter_id("panel")
            .elasticity(3.0)
            .displacement_scale(12.0);
        let filter = DistortionFilter::from_config(&config);

        assert_eq!(filter.id, "panel");
        assert!(matches!(
            &filter.stages[1],
            FilterStage::GaussianBlur { std_deviation, .. } if *std_deviation == 3.0
        ));
        assert!(matches!(
            &filter.stages[3],
            FilterStage::DisplacementMap { scale, .. } if *scale == 12.0
        ));
    }

    #[test]
    fn test_equal_configs_build_equal_filters() {
        let a = DistortionFilter::from_config(&GlassConfig::frosted());
        let b = DistortionFilter::from_config(&GlassConfig::frosted());
        assert_eq!(a, b);
    }
}
