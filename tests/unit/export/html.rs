use super::*;
use crate::animation::keyframe::Keyframe;

fn config_block(html: &str) -> &str {
    let start = html.find(CONFIG_BLOCK_OPEN).unwrap() + CONFIG_BLOCK_OPEN.len();
    let len = html[start..].find(SCRIPT_CLOSE).unwrap();
    &html[start..start + len]
}

#[test]
fn embedded_tracks_use_identifier_paths() {
    let html = export_html(&AnimationConfig::default(), &ExportOpts::default()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(config_block(&html)).unwrap();
    let props: Vec<&str> = doc["tracks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["property"].as_str().unwrap())
        .collect();
    assert!(props.contains(&"text_fontSize"));
    assert!(props.contains(&"shaders_chargedCells_color1_0"));
    assert!(props.iter().all(|p| !p.contains('.')));
}

#[test]
fn only_the_active_fragment_shader_is_embedded() {
    let config = AnimationConfig::default().with_active_shader(ShaderName::Glass);
    let html = export_html(&config, &ExportOpts::default()).unwrap();
    let glass = serde_json::to_string(fragment_source(ShaderName::Glass)).unwrap();
    let melt = serde_json::to_string(fragment_source(ShaderName::Melt)).unwrap();
    assert!(html.contains(&glass.replace("</", "<\\/")));
    assert!(!html.contains(&melt.replace("</", "<\\/")));
}

#[test]
fn script_close_in_text_is_escaped() {
    let mut config = AnimationConfig::default();
    config.text.content = "</script><b>".to_owned();
    let html = export_html(&config, &ExportOpts::default()).unwrap();
    assert_eq!(html.matches("</script>").count(), 4);
    assert_eq!(extract_embedded_config(&html).unwrap().text.content, "</script><b>");
}

#[test]
fn title_is_html_escaped() {
    let opts = ExportOpts {
        title: "A & <B>".to_owned(),
        ..ExportOpts::default()
    };
    let html = export_html(&AnimationConfig::default(), &opts).unwrap();
    assert!(html.contains("<title>A &amp; &lt;B&gt;</title>"));
}

#[test]
fn font_stylesheet_is_optional() {
    let opts = ExportOpts {
        font_stylesheet: None,
        ..ExportOpts::default()
    };
    let html = export_html(&AnimationConfig::default(), &opts).unwrap();
    assert!(!html.contains("fonts.googleapis.com"));
    let html = export_html(&AnimationConfig::default(), &ExportOpts::default()).unwrap();
    assert!(html.contains("family=Playfair+Display:wght@400;700"));
}

#[test]
fn extract_restores_dotted_paths() {
    let config = AnimationConfig::default().with_track_update("text.fontSize", |t| {
        t.with_keyframe(Keyframe::linear("fs2", 0.5, 120.0))
    });
    let html = export_html(&config, &ExportOpts::default()).unwrap();
    assert_eq!(extract_embedded_config(&html).unwrap(), config);
}

#[test]
fn extract_rejects_pages_without_config() {
    let err = extract_embedded_config("<html></html>").unwrap_err();
    assert!(matches!(err, TempoError::Import(_)));
}

#[test]
fn bindings_follow_the_uniform_table() {
    let config = AnimationConfig::default().with_active_shader(ShaderName::Balatro);
    let program = serde_json::to_value(program(&config)).unwrap();
    let uniforms = program["uniforms"].as_array().unwrap();
    assert_eq!(uniforms.len(), uniform_table(ShaderName::Balatro).len());
    assert_eq!(uniforms[0]["name"], "uContrast");
    assert_eq!(uniforms[0]["kind"], "sampled");
    assert_eq!(uniforms[0]["path"], "shaders_balatro_contrast");
    let rotate = uniforms.iter().find(|u| u["name"] == "uIsRotate").unwrap();
    assert_eq!(rotate["kind"], "bool");
    let color = uniforms.iter().find(|u| u["name"] == "uColor2").unwrap();
    assert_eq!(color["paths"][2], "shaders_balatro_color2_2");
    assert_eq!(program["paths"]["background"][0], "background_color_0");
    assert_eq!(program["shaderTimeStep"], 0.016);
}

#[test]
fn invalid_configs_are_not_exported() {
    let config = AnimationConfig {
        duration: 0.0,
        ..AnimationConfig::default()
    };
    assert!(export_html(&config, &ExportOpts::default()).is_err());
}

#[test]
fn text_mask_is_drawn_in_white() {
    let mut config = AnimationConfig::default();
    config.text.color = "#0DE5DA".to_owned();
    let html = export_html(&config, &ExportOpts::default()).unwrap();
    assert!(html.contains(r#"ctx.fillStyle = "white";"#));
    assert!(!html.contains("fillStyle = text.color"));
    for shader in ShaderName::ALL {
        assert!(fragment_source(shader).contains("mask.r < 0.1"), "{shader}");
    }
}

#[test]
fn sampling_script_is_its_own_block() {
    let html = export_html(&AnimationConfig::default(), &ExportOpts::default()).unwrap();
    let start = html.find(r#"<script id="kt-sampling">"#).unwrap();
    let block = &html[start..start + html[start..].find(SCRIPT_CLOSE).unwrap()];
    assert!(block.contains("function createSampler(config)"));
    assert!(!block.contains("document"));
}
