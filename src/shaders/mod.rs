//! GLSL sources, carried as opaque text.
//!
//! The core never parses or generates shader code. It only hands the active variant's source to
//! whoever renders, and embeds it into standalone exports.

use crate::scene::shader::ShaderName;

/// Vertex shader shared by every variant: a full-screen plane passing UVs through.
pub const VERTEX_SHADER: &str = include_str!("../../assets/shaders/text.vert.glsl");

const MELT: &str = include_str!("../../assets/shaders/melt.frag.glsl");
const FLOW: &str = include_str!("../../assets/shaders/flow.frag.glsl");
const BALATRO: &str = include_str!("../../assets/shaders/balatro.frag.glsl");
const GLASS: &str = include_str!("../../assets/shaders/glass.frag.glsl");
const CHARGED_CELLS: &str = include_str!("../../assets/shaders/charged_cells.frag.glsl");

/// Fragment source for `shader`.
pub fn fragment_source(shader: ShaderName) -> &'static str {
    match shader {
        ShaderName::Melt => MELT,
        ShaderName::Flow => FLOW,
        ShaderName::Balatro => BALATRO,
        ShaderName::Glass => GLASS,
        ShaderName::ChargedCells => CHARGED_CELLS,
    }
}

/// Names of the `uniform` declarations in `source`, in declaration order.
///
/// A line-level scan, enough for the sources shipped here.
pub fn declared_uniforms(source: &str) -> Vec<&str> {
    source
        .lines()
        .filter_map(|line| line.trim().strip_prefix("uniform "))
        .filter_map(|rest| rest.split_whitespace().nth(1))
        .map(|name| name.trim_end_matches(';'))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/shaders/mod.rs"]
mod tests;
