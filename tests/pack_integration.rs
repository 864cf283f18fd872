//! Integration tests for icon packs layered over the built-in catalog

use std::path::Path;

use icon_renderer::{
    render_from, render_icon, IconCatalog, IconPack, IconPackError, IconProps, RenderConfig,
    RenderError, StyleConfig, SvgConfig, Tag,
};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn config() -> RenderConfig {
    RenderConfig::new().with_style(StyleConfig::new())
}

#[test]
fn test_load_pack_from_file() {
    let pack = IconPack::from_file(&fixture("brand-pack.toml")).expect("Should load");
    assert_eq!(pack.name.as_deref(), Some("brand"));
    assert_eq!(pack.description.as_deref(), Some("Marks used by the brand site"));

    let names: Vec<_> = pack.icons.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["badge", "logo", "x"]);
    let logo = &pack.icons[1];
    let tags: Vec<_> = logo.shapes.iter().map(|s| s.tag.clone()).collect();
    assert_eq!(tags, vec![Tag::Circle, Tag::Path, Tag::Path]);
}

#[test]
fn test_pack_overrides_builtin() {
    let mut catalog = IconCatalog::builtin().clone();
    let builtin_count = catalog.len();
    catalog.merge(IconPack::from_file(&fixture("brand-pack.toml")).unwrap());

    // `x` is replaced, `badge` and `logo` are new
    assert_eq!(catalog.len(), builtin_count + 2);
    let x = catalog.get("x").unwrap();
    assert_eq!(x.shapes.len(), 1);
    assert_eq!(x.shapes[0].tag, Tag::Line);

    // The shared built-in catalog is untouched
    assert_eq!(IconCatalog::builtin().get("x").unwrap().shapes.len(), 2);
}

#[test]
fn test_pack_icon_color_placeholders() {
    let pack = IconPack::from_file(&fixture("brand-pack.toml")).unwrap();
    let logo = pack.icons.iter().find(|i| i.name == "logo").unwrap();
    let root = render_icon(logo, &IconProps::new().with_color("#ff0000"), &config());

    let pairs: Vec<_> = root
        .elements()
        .map(|e| (e.attr("stroke"), e.attr("fill")))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (Some("#ff0000"), Some("none")),
            (Some("#ff0000"), Some("none")),
            (Some("#ff0000"), Some("#ff0000")),
        ]
    );
}

#[test]
fn test_pack_explicit_fill_preserved() {
    let mut catalog = IconCatalog::new();
    catalog.merge(IconPack::from_file(&fixture("brand-pack.toml")).unwrap());
    let svg = render_from(
        &catalog,
        "badge",
        &IconProps::new(),
        &config().with_svg(SvgConfig::new().with_pretty_print(false)),
    )
    .unwrap();
    assert!(svg.contains(r##"fill="#fde047""##));
    assert!(svg.contains(r#"stroke="currentColor""#));
}

#[test]
fn test_unknown_name_after_merge() {
    let mut catalog = IconCatalog::new();
    catalog.merge(IconPack::from_file(&fixture("brand-pack.toml")).unwrap());
    let result = render_from(&catalog, "heart", &IconProps::new(), &config());
    assert!(matches!(result, Err(RenderError::UnknownIcon { .. })));
}

#[test]
fn test_broken_pack_reports_icon() {
    let err = IconPack::from_file(&fixture("broken-pack.toml")).unwrap_err();
    match &err {
        IconPackError::Markup { icon, errors, .. } => {
            assert_eq!(icon, "broken");
            assert!(!errors.is_empty());
            assert!(errors[0]
                .to_string()
                .contains("Mismatched closing tag: expected </g>, found </svg>"));
        }
        other => panic!("Expected markup error, got {:?}", other),
    }
    assert!(err.report("broken-pack.toml").contains("broken-pack.toml#broken"));

    // Converts into the name-based render error
    let render_err: RenderError = err.into();
    assert!(render_err.to_string().starts_with("icon pack error:"));
}

#[test]
fn test_missing_pack_file() {
    let err = IconPack::from_file(&fixture("no-such-pack.toml")).unwrap_err();
    assert!(matches!(err, IconPackError::IoError(_)));
}

#[test]
fn test_pack_icon_with_comments_and_references() {
    let pack = IconPack::from_str(
        "[icons]\nsigned = '<!-- mark --><circle r=\"10\"/><title>a<!-- c -->b &#169;</title>'\n",
    )
    .expect("Should load");
    let root = render_icon(&pack.icons[0], &IconProps::new(), &config());
    let title = root.elements().nth(1).unwrap();
    assert_eq!(
        title.children,
        vec![icon_renderer::SvgNode::Text("ab \u{a9}".to_string())]
    );
}
