// End-to-end output through a generator context: root, images, config

use std::fs;
use std::sync::Arc;

use svggen::dom::{create_svg_root, parse_svg, to_xml_string, SerializeOptions};
use svggen::{
    ConfigError, Element, FileImageHandler, GenerationError, GeneratorConfig, GeneratorContext,
    ImageStrategy, RasterImage, SvgDocumentFactory, DEFAULT_COMMENT,
};

fn default_ctx() -> GeneratorContext {
    GeneratorContext::create_default(Arc::new(SvgDocumentFactory::new()))
}

#[test]
fn test_serialized_root_contains_default_comment() {
    let ctx = default_ctx();
    let mut root = create_svg_root(&ctx);
    let mut image = ctx.document_factory().create_element("image");
    ctx.image_handler()
        .handle_image(&RasterImage::png(4, 4, vec![1, 2, 3]), &mut image, &ctx)
        .unwrap();
    root.append_child(image);

    let xml = to_xml_string(&root, &SerializeOptions::default()).unwrap();
    assert!(xml.contains(&format!("<!-- {} -->", DEFAULT_COMMENT)));
    assert!(xml.contains("xlink:href=\"data:image/png;base64,AQID\""));

    // Round-trips through the importer
    let reparsed = parse_svg(&xml).unwrap();
    let href = reparsed
        .child_elements()
        .next()
        .and_then(|img| img.attribute("xlink:href"));
    assert_eq!(href, Some("data:image/png;base64,AQID"));
    assert_eq!(reparsed.attribute("xmlns:xlink"), Some(svggen::dom::XLINK_NAMESPACE));
}

#[test]
fn test_imported_tree_serializes_and_imports_again() {
    let ctx = default_ctx();
    let mut root = create_svg_root(&ctx);
    let mut image = ctx.document_factory().create_element("image");
    ctx.image_handler()
        .handle_image(&RasterImage::png(1, 1, vec![0]), &mut image, &ctx)
        .unwrap();
    root.append_child(image);

    let first = parse_svg(&to_xml_string(&root, &SerializeOptions::default()).unwrap()).unwrap();
    let xml = to_xml_string(&first, &SerializeOptions::default()).unwrap();
    let second = parse_svg(&xml).expect("re-serialized import must stay well-formed");

    assert_eq!(second, first);
    assert!(xml.contains("xmlns:xlink=\"http://www.w3.org/1999/xlink\""));
}

#[test]
fn test_disabled_comment_is_not_written() {
    let config = GeneratorConfig::from_yaml_str("comment: null\n").unwrap();
    let ctx = GeneratorContext::from_config(Arc::new(SvgDocumentFactory::new()), &config).unwrap();

    let xml = to_xml_string(&create_svg_root(&ctx), &SerializeOptions::compact()).unwrap();
    assert!(!xml.contains("<!--"));
}

#[test]
fn test_file_images_are_written_and_linked() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        images: ImageStrategy::Files {
            image_dir: dir.path().to_path_buf(),
            url_root: "images".to_string(),
        },
        ..GeneratorConfig::default()
    };
    let ctx = GeneratorContext::from_config(Arc::new(SvgDocumentFactory::new()), &config).unwrap();

    let mut first = Element::new("image");
    let mut second = Element::new("image");
    let image = RasterImage::png(8, 2, b"png-bytes".to_vec());
    ctx.image_handler().handle_image(&image, &mut first, &ctx).unwrap();
    ctx.image_handler().handle_image(&image, &mut second, &ctx).unwrap();

    assert_eq!(first.attribute("xlink:href"), Some("images/image1.png"));
    assert_eq!(second.attribute("xlink:href"), Some("images/image2.png"));
    assert_eq!(fs::read(dir.path().join("image1.png")).unwrap(), b"png-bytes");
}

#[test]
fn test_unwritable_image_dir_propagates_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let ctx = default_ctx()
        .to_builder()
        .image_handler(Arc::new(FileImageHandler::new(missing, "")))
        .build()
        .unwrap();

    let mut el = Element::new("image");
    let err = ctx
        .image_handler()
        .handle_image(&RasterImage::png(1, 1, vec![0]), &mut el, &ctx)
        .unwrap_err();
    assert!(matches!(err, GenerationError::Io(_)));
    assert_eq!(el.attribute("xlink:href"), None);
}

#[test]
fn test_load_config_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let json = dir.path().join("gen.json");
    fs::write(&json, r#"{"comment": "from json"}"#).unwrap();
    let config = GeneratorConfig::load(&json).unwrap();
    assert_eq!(config.comment.as_deref(), Some("from json"));

    let yml = dir.path().join("gen.yml");
    fs::write(&yml, "comment: from yaml\n").unwrap();
    assert_eq!(GeneratorConfig::load(&yml).unwrap().comment.as_deref(), Some("from yaml"));

    let toml = dir.path().join("gen.toml");
    fs::write(&toml, "comment = 'x'").unwrap();
    assert!(matches!(GeneratorConfig::load(&toml), Err(ConfigError::Invalid(_))));

    assert!(matches!(
        GeneratorConfig::load(dir.path().join("missing.json")),
        Err(ConfigError::Io(_))
    ));
}
