//! Default presentation attributes for strokable shapes

use crate::icon::{AttrValue, ShapeDescriptor};
use crate::style::ResolvedStyle;

/// Token inside a `stroke` or `fill` value that is replaced by the resolved color
pub const COLOR_PLACEHOLDER: &str = "{color}";

/// Attributes that only identify a node to the host framework; never emitted
const DROPPED_ATTRIBUTES: &[&str] = &["key"];

/// Compute the attributes to emit for one shape
///
/// Explicit attributes keep their order and value (apart from color
/// placeholders). Missing `stroke`, `fill`, `stroke-width`, `stroke-linecap`
/// and `stroke-linejoin` are appended for strokable tags. Containers pass
/// through untouched.
pub fn normalize(shape: &ShapeDescriptor, style: &ResolvedStyle) -> Vec<(String, String)> {
    let strokable = shape.tag.is_strokable();

    let mut attrs: Vec<(String, String)> = shape
        .attributes
        .iter()
        .filter(|a| !DROPPED_ATTRIBUTES.contains(&a.name.as_str()))
        .map(|a| {
            let value = match (&a.value, a.name.as_str()) {
                (AttrValue::Str(s), "stroke" | "fill") if strokable => {
                    s.replace(COLOR_PLACEHOLDER, &style.color)
                }
                (value, _) => value.to_string(),
            };
            (a.name.clone(), value)
        })
        .collect();

    if !strokable {
        return attrs;
    }

    if !shape.has_attr("stroke") {
        attrs.push(("stroke".to_string(), style.color.clone()));
    }
    if !shape.has_attr("fill") {
        attrs.push(("fill".to_string(), "none".to_string()));
    }
    if !shape.has_attr("stroke-width") {
        attrs.push((
            "stroke-width".to_string(),
            AttrValue::Number(style.effective_stroke_width()).to_string(),
        ));
    }
    if !shape.has_attr("stroke-linecap") {
        attrs.push(("stroke-linecap".to_string(), "round".to_string()));
    }
    if !shape.has_attr("stroke-linejoin") {
        attrs.push(("stroke-linejoin".to_string(), "round".to_string()));
    }

    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::Tag;
    use pretty_assertions::assert_eq;

    fn style(size: f64, stroke_width: f64, absolute: bool) -> ResolvedStyle {
        ResolvedStyle {
            size,
            color: "currentColor".to_string(),
            stroke_width,
            absolute_stroke_width: absolute,
        }
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_appended() {
        let shape = ShapeDescriptor::new(Tag::Path).with_attr("d", "M0 0");
        assert_eq!(
            normalize(&shape, &style(24.0, 1.5, false)),
            pairs(&[
                ("d", "M0 0"),
                ("stroke", "currentColor"),
                ("fill", "none"),
                ("stroke-width", "1.5"),
                ("stroke-linecap", "round"),
                ("stroke-linejoin", "round"),
            ])
        );
    }

    #[test]
    fn test_explicit_values_preserved() {
        let shape = ShapeDescriptor::new(Tag::Circle)
            .with_attr("r", 2)
            .with_attr("fill", "#000")
            .with_attr("stroke", "red")
            .with_attr("strokeWidth", 3)
            .with_attr("stroke-linecap", "square")
            .with_attr("stroke-linejoin", "miter");
        assert_eq!(
            normalize(&shape, &style(48.0, 2.0, false)),
            pairs(&[
                ("r", "2"),
                ("fill", "#000"),
                ("stroke", "red"),
                ("stroke-width", "3"),
                ("stroke-linecap", "square"),
                ("stroke-linejoin", "miter"),
            ])
        );
    }

    #[test]
    fn test_color_placeholder_substituted() {
        let mut s = style(24.0, 2.0, false);
        s.color = "#ff0000".to_string();
        let shape = ShapeDescriptor::new(Tag::Rect)
            .with_attr("fill", "{color}")
            .with_attr("stroke", "{color}");
        let attrs = normalize(&shape, &s);
        assert_eq!(attrs[0], ("fill".to_string(), "#ff0000".to_string()));
        assert_eq!(attrs[1], ("stroke".to_string(), "#ff0000".to_string()));
    }

    #[test]
    fn test_stroke_width_scaling() {
        let shape = ShapeDescriptor::new(Tag::Line);
        let width = |s: &ResolvedStyle| {
            normalize(&shape, s)
                .into_iter()
                .find(|(k, _)| k == "stroke-width")
                .map(|(_, v)| v)
        };
        assert_eq!(width(&style(48.0, 2.0, false)), Some("4".to_string()));
        assert_eq!(width(&style(48.0, 2.0, true)), Some("2".to_string()));
        assert_eq!(width(&style(20.0, 1.5, false)), Some("1.25".to_string()));
    }

    #[test]
    fn test_container_passes_through() {
        let shape = ShapeDescriptor::new(Tag::from_name("g"))
            .with_attr("transform", "rotate(45)")
            .with_attr("fill", "{color}");
        assert_eq!(
            normalize(&shape, &style(24.0, 2.0, false)),
            pairs(&[("transform", "rotate(45)"), ("fill", "{color}")])
        );
    }

    #[test]
    fn test_key_dropped() {
        let shape = ShapeDescriptor::new(Tag::Path)
            .with_attr("key", "svg-0")
            .with_attr("d", "M0 0");
        let attrs = normalize(&shape, &style(24.0, 2.0, false));
        assert!(attrs.iter().all(|(k, _)| k != "key"));
        assert_eq!(attrs[0].0, "d");
    }
}
