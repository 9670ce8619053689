//! Filter markup writers

use std::fmt::Write;

use glaze_core::{CompositeOperator, DistortionFilter, FilterInput, FilterStage};

/// Escape text for use inside a double-quoted XML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
}

fn push_num_attr(out: &mut String, name: &str, value: f64) {
    // f64 Display is shortest-roundtrip: 8.0 -> "8", -30.0 -> "-30".
    let _ = write!(out, " {}=\"{}\"", name, value);
}

fn push_input_attr(out: &mut String, name: &str, input: &FilterInput) {
    if let Some(value) = input.as_attr() {
        push_attr(out, name, value);
    }
}

fn push_result_attr(out: &mut String, result: &Option<String>) {
    if let Some(name) = result {
        push_attr(out, "result", name);
    }
}

fn write_stage(out: &mut String, stage: &FilterStage) {
    match stage {
        FilterStage::Turbulence {
            kind,
            base_frequency,
            octaves,
            seed,
            result,
        } => {
            out.push_str("<feTurbulence");
            push_attr(out, "type", kind.as_str());
            push_attr(
                out,
                "baseFrequency",
                &format!("{} {}", base_frequency.0, base_frequency.1),
            );
            push_attr(out, "numOctaves", &octaves.to_string());
            push_attr(out, "seed", &seed.to_string());
            push_result_attr(out, result);
            out.push_str("/>");
        }
        FilterStage::GaussianBlur {
            input,
            std_deviation,
            result,
        } => {
            out.push_str("<feGaussianBlur");
            push_input_attr(out, "in", input);
            push_num_attr(out, "stdDeviation", *std_deviation);
            push_result_attr(out, result);
            out.push_str("/>");
        }
        FilterStage::Composite {
            input,
            input2,
            operator,
            result,
        } => {
            out.push_str("<feComposite");
            push_input_attr(out, "in", input);
            push_input_attr(out, "in2", input2);
            push_attr(out, "operator", operator.as_str());
            if let CompositeOperator::Arithmetic { k1, k2, k3, k4 } = operator {
                push_num_attr(out, "k1", *k1);
                push_num_attr(out, "k2", *k2);
                push_num_attr(out, "k3", *k3);
                push_num_attr(out, "k4", *k4);
            }
            push_result_attr(out, result);
            out.push_str("/>");
        }
        FilterStage::DisplacementMap {
            input,
            displacement,
            scale,
            x_channel,
            y_channel,
        } => {
            out.push_str("<feDisplacementMap");
            push_input_attr(out, "in", input);
            push_input_attr(out, "in2", displacement);
            push_num_attr(out, "scale", *scale);
            push_attr(out, "xChannelSelector", x_channel.as_str());
            push_attr(out, "yChannelSelector", y_channel.as_str());
            out.push_str("/>");
        }
    }
}

/// Serialize the `<filter>` element, stages in evaluation order.
///
/// The filter region is pinned to the filtered element's bounds
/// (x/y 0%, width/height 100%).
pub fn write_filter(filter: &DistortionFilter) -> String {
    let mut out = String::new();
    out.push_str("<filter");
    push_attr(&mut out, "id", &filter.id);
    push_attr(&mut out, "x", "0%");
    push_attr(&mut out, "y", "0%");
    push_attr(&mut out, "width", "100%");
    push_attr(&mut out, "height", "100%");
    out.push('>');
    for stage in &filter.stages {
        write_stage(&mut out, stage);
    }
    out.push_str("</filter>");
    out
}

/// Serialize the full hidden defs block a glass instance mounts.
///
/// The wrapping `<svg>` carries `display: none` so the definition never
/// paints; only the filter it defines is observable, through the effect
/// layer's backdrop reference.
pub fn write_defs_svg(filter: &DistortionFilter) -> String {
    let mut out = String::new();
    out.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\" style=\"display: none\"><defs>");
    out.push_str(&write_filter(filter));
    out.push_str("</defs></svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glaze_core::GlassConfig;

    #[test]
    fn test_filter_markup_with_default_tuning() {
        let filter = DistortionFilter::new("lg-dist", 8.0, -30.0);
        let markup = write_filter(&filter);

        assert!(markup.starts_with(
            "<filter id=\"lg-dist\" x=\"0%\" y=\"0%\" width=\"100%\" height=\"100%\">"
        ));
        assert!(markup.contains(
            "<feTurbulence type=\"fractalNoise\" baseFrequency=\"0.004 0.004\" \
             numOctaves=\"1\" seed=\"0\" result=\"noise\"/>"
        ));
        assert!(markup.contains("<feGaussianBlur in=\"noise\" stdDeviation=\"8\" result=\"blurred\"/>"));
        assert!(markup.contains(
            "<feComposite operator=\"arithmetic\" k1=\"0\" k2=\"1\" k3=\"2\" k4=\"0\" \
             result=\"litImage\"/>"
        ));
        assert!(markup.contains(
            "<feDisplacementMap in=\"SourceGraphic\" in2=\"litImage\" scale=\"-30\" \
             xChannelSelector=\"G\" yChannelSelector=\"G\"/>"
        ));
    }

    #[test]
    fn test_stage_order_is_noise_blur_composite_displacement() {
        let markup = write_filter(&DistortionFilter::from_config(&GlassConfig::default()));

        let turbulence = markup.find("<feTurbulence").unwrap();
        let blur = markup.find("<feGaussianBlur").unwrap();
        let composite = markup.find("<feComposite").unwrap();
        let displacement = markup.find("<feDisplacementMap").unwrap();

        assert!(turbulence < blur);
        assert!(blur < composite);
        assert!(composite < displacement);
    }

    #[test]
    fn test_defs_wrapper_is_hidden() {
        let markup = write_defs_svg(&DistortionFilter::new("f", 8.0, -30.0));

        assert!(markup.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" style=\"display: none\"><defs><filter"
        ));
        assert!(markup.ends_with("</filter></defs></svg>"));
    }

    #[test]
    fn test_filter_id_is_escaped() {
        let filter = DistortionFilter::new("a\"b&c", 8.0, -30.0);
        let markup = write_filter(&filter);

        assert!(markup.contains("id=\"a&quot;b&amp;c\""));
    }

    #[test]
    fn test_fractional_values_keep_minimal_decimals() {
        let filter = DistortionFilter::new("f", 2.5, -12.25);
        let markup = write_filter(&filter);

        assert!(markup.contains("stdDeviation=\"2.5\""));
        assert!(markup.contains("scale=\"-12.25\""));
    }

    #[test]
    fn test_emitted_markup_parses_as_svg() {
        // Mount the emitted filter in a sized document and reference it from
        // a shape, the way a host engine would resolve it.
        let filter = DistortionFilter::from_config(&GlassConfig::default());
        let document = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"120\" height=\"80\">\
             <defs>{}</defs>\
             <rect width=\"120\" height=\"80\" filter=\"url(#lg-dist)\"/>\
             </svg>",
            write_filter(&filter)
        );

        let options = usvg::Options::default();
        assert!(usvg::Tree::from_str(&document, &options).is_ok());
    }
}
