//! The liquid-glass component
//!
//! A glass instance renders as a fixed stack of sibling layers over a padded
//! content frame, plus a hidden SVG filter definition the effect layer
//! references through its backdrop filter:
//!
//! ```text
//! <defs svg>                      distortion filter definition
//! outer frame                     clips to the border radius
//! └─ shell                        padding, positioning context
//!    ├─ effect layer  (z -1)      backdrop blur/saturate/displace
//!    ├─ tint layer    (z  1)      flat tint fill
//!    ├─ shine layer   (z  2)      hue-rotated inset light catch
//!    └─ content       (z  4)      caller payload
//! ```
//!
//! The descriptor functions are pure; [`LiquidGlass`] adds per-descriptor
//! memoization on top of them, and [`render_glass`] is the stateless path
//! through the same functions.

use std::sync::Arc;

use glaze_core::{DistortionFilter, GlassConfig, Radius, StyleMap};
use glaze_svg::write_defs_svg;
use indexmap::IndexMap;

use crate::element::{div, Fragment, Node};
use crate::memo::{DepKey, MemoSlot};

/// z-order of the effect layer (backmost).
pub const Z_EFFECT: i32 = -1;
/// z-order of the tint layer.
pub const Z_TINT: i32 = 1;
/// z-order of the shine layer.
pub const Z_SHINE: i32 = 2;
/// z-order of the content layer (frontmost).
pub const Z_CONTENT: i32 = 4;
/// z-order of the shell within the host page.
pub const Z_SHELL: i32 = 99;

const SHINE_FILTER: &str = "hue-rotate(20deg)";
const SHINE_SHADOW: &str = "inset 1px 1px 1px #ffffff28, inset -1px -1px 0px #ffffff15";
const SHELL_CLASS: &str = "glaze-glass";

// =============================================================================
// Props
// =============================================================================

/// Everything one render pass works from: the resolved configuration, caller
/// style overrides and passthrough attributes, and the content payload.
///
/// The payload is held behind an [`Arc`] so the render-skip comparison in
/// [`crate::diff`] can test identity instead of walking the subtree.
#[derive(Clone, Debug)]
pub struct GlassProps {
    /// Resolved configuration record.
    pub config: GlassConfig,
    /// Caller style overrides, merged into the shell descriptor.
    pub style_overrides: StyleMap,
    /// Caller attributes, merged onto the shell element last (caller wins).
    pub attrs: IndexMap<String, String>,
    /// The content payload.
    pub content: Arc<Node>,
}

impl GlassProps {
    /// Props with a default configuration and the given payload.
    pub fn new(content: impl Into<Node>) -> Self {
        Self {
            config: GlassConfig::default(),
            style_overrides: StyleMap::new(),
            attrs: IndexMap::new(),
            content: Arc::new(content.into()),
        }
    }
}

// =============================================================================
// Style compositor
// =============================================================================

/// Outer frame: clips the stack to the configured corner radius.
pub fn outer_frame_style(config: &GlassConfig) -> StyleMap {
    StyleMap::new().with("border-radius", config.border_radius.to_css())
}

/// The backdrop filter expression the effect layer applies.
pub fn backdrop_filter_value(config: &GlassConfig) -> String {
    format!(
        "blur({}px) saturate({}) url(#{})",
        config.blur_amount, config.saturation, config.filter_id
    )
}

fn layer_base(config: &GlassConfig) -> StyleMap {
    StyleMap::new()
        .with("position", "absolute")
        .with("inset", "0")
        .with("border-radius", config.border_radius.to_css())
}

/// Effect layer: blurs, saturates, and displaces the backdrop.
pub fn effect_layer_style(config: &GlassConfig) -> StyleMap {
    let backdrop = backdrop_filter_value(config);
    layer_base(config)
        .with("z-index", Z_EFFECT.to_string())
        .with("backdrop-filter", backdrop.clone())
        .with("-webkit-backdrop-filter", backdrop)
        .with("isolation", "isolate")
}

/// Tint layer: flat fill of the tint color over the distorted backdrop.
pub fn tint_layer_style(config: &GlassConfig) -> StyleMap {
    layer_base(config)
        .with("z-index", Z_TINT.to_string())
        .with("background", config.tint_color.clone())
}

/// Shine layer: hue-rotated inset shadows simulating a light catch on the
/// glass edge.
pub fn shine_layer_style(config: &GlassConfig) -> StyleMap {
    layer_base(config)
        .with("z-index", Z_SHINE.to_string())
        .with("overflow", "hidden")
        .with("filter", SHINE_FILTER)
        .with("box-shadow", SHINE_SHADOW)
}

/// Content layer: the caller's payload, flowing normally inside the padded
/// shell, above every glass layer.
pub fn content_style() -> StyleMap {
    StyleMap::new()
        .with("position", "relative")
        .with("z-index", Z_CONTENT.to_string())
}

/// Shell: the positioning context the layers stack inside.
///
/// Exposes the tunable pieces as custom properties for host stylesheets,
/// then applies caller overrides, then the positional properties. The
/// positional properties win on collision - the stack breaks without them.
pub fn shell_style(config: &GlassConfig, overrides: &StyleMap) -> StyleMap {
    let mut style = StyleMap::new()
        .with("--lg-border-radius", config.border_radius.to_css())
        .with("--lg-tint-color", config.tint_color.clone())
        .with("--lg-shine-filter", SHINE_FILTER);
    style.merge(overrides);
    style.set("position", "relative");
    style.set("z-index", Z_SHELL.to_string());
    style.set("border-radius", config.border_radius.to_css());
    style.set("padding", config.padding.clone());
    style.set("width", "fit-content");
    style
}

// =============================================================================
// Rendering
// =============================================================================

fn assemble(
    props: &GlassProps,
    outer: StyleMap,
    shell: StyleMap,
    effect: StyleMap,
    tint: StyleMap,
    shine: StyleMap,
) -> Fragment {
    let defs = Node::Raw(write_defs_svg(&DistortionFilter::from_config(&props.config)));

    let mut shell_el = div().style(shell).attr("class", SHELL_CLASS);
    // Caller attributes win over computed ones where names collide.
    for (name, value) in &props.attrs {
        shell_el = shell_el.attr(name.clone(), value.clone());
    }
    let shell_el = shell_el
        .child(div().style(effect))
        .child(div().style(tint))
        .child(div().style(shine))
        .child(div().style(content_style()).child((*props.content).clone()));

    let frame = div().style(outer).child(shell_el);

    Fragment {
        nodes: vec![defs, Node::Element(frame)],
    }
}

/// Stateless render: derives every descriptor from scratch.
pub fn render_glass(props: &GlassProps) -> Fragment {
    let config = &props.config;
    assemble(
        props,
        outer_frame_style(config),
        shell_style(config, &props.style_overrides),
        effect_layer_style(config),
        tint_layer_style(config),
        shine_layer_style(config),
    )
}

// =============================================================================
// LiquidGlass
// =============================================================================

/// A retained glass instance.
///
/// Holds the current [`GlassProps`] plus one memo slot per style descriptor,
/// keyed by the configuration fields that descriptor actually reads. Renders
/// the exact tree [`render_glass`] does; the slots only save recomputation.
///
/// The filter id must be unique among instances mounted into one document -
/// with a shared id the later filter definition silently wins.
pub struct LiquidGlass {
    props: GlassProps,
    outer: MemoSlot<StyleMap>,
    shell: MemoSlot<StyleMap>,
    effect: MemoSlot<StyleMap>,
    tint: MemoSlot<StyleMap>,
    shine: MemoSlot<StyleMap>,
}

impl LiquidGlass {
    /// Create an instance with a default configuration and the given payload.
    pub fn new(content: impl Into<Node>) -> Self {
        Self::from_props(GlassProps::new(content))
    }

    /// Create an instance from fully-specified props.
    pub fn from_props(props: GlassProps) -> Self {
        Self {
            props,
            outer: MemoSlot::new(),
            shell: MemoSlot::new(),
            effect: MemoSlot::new(),
            tint: MemoSlot::new(),
            shine: MemoSlot::new(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GlassConfig) -> Self {
        self.props.config = config;
        self
    }

    /// Set the filter id.
    pub fn filter_id(mut self, id: impl Into<String>) -> Self {
        self.props.config = self.props.config.filter_id(id);
        self
    }

    /// Set the inner padding.
    pub fn padding(mut self, padding: impl Into<String>) -> Self {
        self.props.config = self.props.config.padding(padding);
        self
    }

    /// Set the corner radius.
    pub fn border_radius(mut self, radius: impl Into<Radius>) -> Self {
        self.props.config = self.props.config.border_radius(radius);
        self
    }

    /// Set the tint color.
    pub fn tint_color(mut self, color: impl Into<String>) -> Self {
        self.props.config = self.props.config.tint_color(color);
        self
    }

    /// Set the displacement scale.
    pub fn displacement_scale(mut self, scale: f64) -> Self {
        self.props.config = self.props.config.displacement_scale(scale);
        self
    }

    /// Set the backdrop blur radius.
    pub fn blur_amount(mut self, blur: f64) -> Self {
        self.props.config = self.props.config.blur_amount(blur);
        self
    }

    /// Set the backdrop saturation.
    pub fn saturation(mut self, saturation: f64) -> Self {
        self.props.config = self.props.config.saturation(saturation);
        self
    }

    /// Set the elasticity.
    pub fn elasticity(mut self, elasticity: f64) -> Self {
        self.props.config = self.props.config.elasticity(elasticity);
        self
    }

    /// Add one caller style override.
    pub fn style_override(
        mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.props.style_overrides.set(property, value);
        self
    }

    /// Add one passthrough attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.attrs.insert(name.into(), value.into());
        self
    }

    /// The current props.
    pub fn props(&self) -> &GlassProps {
        &self.props
    }

    /// Replace the props wholesale.
    ///
    /// Returns `true` when the change is observable and the host should call
    /// [`render`](Self::render) again; `false` means the previous tree is
    /// still exact.
    pub fn update(&mut self, next: GlassProps) -> bool {
        let changed = !crate::diff::props_unchanged(&self.props, &next);
        self.props = next;
        changed
    }

    /// Render the instance's tree, reusing unchanged descriptors.
    pub fn render(&mut self) -> Fragment {
        let config = &self.props.config;
        let overrides = &self.props.style_overrides;
        tracing::debug!("rendering glass '{}'", config.filter_id);

        let outer_key = DepKey::new().radius(&config.border_radius).finish();
        let outer = self
            .outer
            .get_or_compute(outer_key, || outer_frame_style(config));

        let shell_key = DepKey::new()
            .radius(&config.border_radius)
            .text(&config.padding)
            .text(&config.tint_color)
            .style(overrides)
            .finish();
        let shell = self
            .shell
            .get_or_compute(shell_key, || shell_style(config, overrides));

        let effect_key = DepKey::new()
            .number(config.blur_amount)
            .number(config.saturation)
            .text(&config.filter_id)
            .radius(&config.border_radius)
            .finish();
        let effect = self
            .effect
            .get_or_compute(effect_key, || effect_layer_style(config));

        let tint_key = DepKey::new()
            .text(&config.tint_color)
            .radius(&config.border_radius)
            .finish();
        let tint = self
            .tint
            .get_or_compute(tint_key, || tint_layer_style(config));

        let shine_key = DepKey::new().radius(&config.border_radius).finish();
        let shine = self
            .shine
            .get_or_compute(shine_key, || shine_layer_style(config));

        assemble(&self.props, outer, shell, effect, tint, shine)
    }
}
