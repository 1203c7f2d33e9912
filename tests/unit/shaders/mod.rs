use super::*;

#[test]
fn every_variant_has_a_fragment_source() {
    for s in ShaderName::ALL {
        let src = fragment_source(s);
        assert!(src.contains("void main()"), "{s}");
        assert!(src.contains("uniform sampler2D u_mask;"), "{s}");
    }
}

#[test]
fn vertex_shader_passes_uvs() {
    assert!(VERTEX_SHADER.contains("varying vec2 vUv;"));
    assert!(VERTEX_SHADER.contains("vUv = uv;"));
}

#[test]
fn declared_uniforms_scans_declarations() {
    let src = "precision highp float;\nuniform float uHue;\n  uniform vec3 uColor1;\nvoid main() {}\n";
    assert_eq!(declared_uniforms(src), vec!["uHue", "uColor1"]);
}

#[test]
fn sources_have_no_template_markers() {
    for s in ShaderName::ALL {
        assert!(!fragment_source(s).contains('`'));
    }
}
