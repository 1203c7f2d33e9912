//! Standalone HTML export.
//!
//! The exported page carries the config (track paths in identifier form), the active shader's
//! source, the resolved uniform bindings and a small WebGL runtime that samples tracks with the
//! same arithmetic as [`crate::sample`]. Opening the file plays the loop with no editor and no
//! script downloads.

use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::eval::uniforms::{UniformName, UniformSource, uniform_table};
use crate::foundation::error::{TempoError, TempoResult};
use crate::scene::config::AnimationConfig;
use crate::scene::project;
use crate::scene::property::{Axis, PropertyPath, TextField, to_identifier_path};
use crate::scene::shader::{Channel, ShaderName, ShaderParam};
use crate::session::playback::PlaybackOpts;
use crate::shaders::{VERTEX_SHADER, fragment_source};

const TEMPLATE_NAME: &str = "standalone.html";
const TEMPLATE: &str = include_str!("../../assets/export/standalone.html.j2");
const SAMPLING: &str = include_str!("../../assets/export/sampling.js");
const RUNTIME: &str = include_str!("../../assets/export/runtime.js");

const CONFIG_BLOCK_OPEN: &str = r#"<script type="application/json" id="kt-config">"#;
const SCRIPT_CLOSE: &str = "</script>";

/// Families offered by the editor's font picker.
pub const FONT_FAMILIES: &[&str] = &[
    "Inter",
    "Roboto",
    "Lato",
    "Open Sans",
    "Montserrat",
    "Poppins",
    "Source Code Pro",
    "Nunito",
    "Raleway",
    "Playfair Display",
    "Merriweather",
    "Ubuntu",
    "Zilla Slab",
    "Space Mono",
    "Work Sans",
];

/// Google Fonts stylesheet URL covering [`FONT_FAMILIES`] at weights 400 and 700.
pub fn google_fonts_url(families: &[&str]) -> String {
    let query: Vec<String> = families
        .iter()
        .map(|f| format!("family={}:wght@400;700", f.replace(' ', "+")))
        .collect();
    format!("https://fonts.googleapis.com/css2?{}&display=swap", query.join("&"))
}

/// Options for [`export_html`].
#[derive(Clone, Debug, PartialEq)]
pub struct ExportOpts {
    /// Page title.
    pub title: String,
    /// Font stylesheet linked from the page, if any. This is the page's only network resource.
    pub font_stylesheet: Option<String>,
}

impl Default for ExportOpts {
    fn default() -> Self {
        Self {
            title: "Animated Text".to_owned(),
            font_stylesheet: Some(google_fonts_url(FONT_FAMILIES)),
        }
    }
}

/// One uniform binding as the runtime reads it.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum Binding {
    Sampled { name: UniformName, path: String },
    Float { name: UniformName, value: f64 },
    Color { name: UniformName, paths: [String; 3] },
    Bool { name: UniformName, value: bool },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Paths {
    font_size: String,
    rotation: String,
    x: String,
    y: String,
    background: [String; 3],
}

/// Everything besides the config the runtime needs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Program<'a> {
    shader: ShaderName,
    vertex_shader: &'a str,
    fragment_shader: &'a str,
    shader_time_step: f64,
    paths: Paths,
    uniforms: Vec<Binding>,
}

fn bindings(config: &AnimationConfig) -> Vec<Binding> {
    let shader = config.active_shader();
    let ident = |p: ShaderParam| PropertyPath::Shader(shader, p).to_identifier();
    uniform_table(shader)
        .iter()
        .map(|&(name, source)| match source {
            UniformSource::Sampled(p) => Binding::Sampled {
                name,
                path: ident(p),
            },
            UniformSource::Static(p) => Binding::Float {
                name,
                value: config.shaders.param(shader, p).unwrap_or(0.0),
            },
            UniformSource::Palette(slot) => Binding::Color {
                name,
                paths: Channel::ALL.map(|ch| ident(ShaderParam::Color(slot, ch))),
            },
            UniformSource::IsRotate => Binding::Bool {
                name,
                value: config.shaders.balatro.is_rotate,
            },
        })
        .collect()
}

fn program(config: &AnimationConfig) -> Program<'static> {
    let shader = config.active_shader();
    Program {
        shader,
        vertex_shader: VERTEX_SHADER,
        fragment_shader: fragment_source(shader),
        shader_time_step: PlaybackOpts::default().shader_time_step,
        paths: Paths {
            font_size: PropertyPath::Text(TextField::FontSize).to_identifier(),
            rotation: PropertyPath::Text(TextField::Rotation).to_identifier(),
            x: PropertyPath::Position(Axis::X).to_identifier(),
            y: PropertyPath::Position(Axis::Y).to_identifier(),
            background: Channel::ALL.map(|ch| PropertyPath::Background(ch).to_identifier()),
        },
        uniforms: bindings(config),
    }
}

/// Copy of `config` with every track property in identifier form.
pub fn identifier_config(config: &AnimationConfig) -> AnimationConfig {
    let tracks = config
        .tracks
        .iter()
        .map(|t| t.with_property(to_identifier_path(&t.property)))
        .collect();
    config.with_tracks(tracks)
}

/// Serialize `value` for a `<script type="application/json">` block.
fn script_json<T: Serialize>(value: &T) -> TempoResult<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}

fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;
    Ok(env)
}

/// Render `config` as a self-contained HTML page.
#[tracing::instrument(skip_all, fields(shader = %config.active_shader(), tracks = config.tracks.len()))]
pub fn export_html(config: &AnimationConfig, opts: &ExportOpts) -> TempoResult<String> {
    config.validate()?;

    let config_json = script_json(&identifier_config(config))?;
    let program_json = script_json(&program(config))?;

    let render = || -> Result<String, minijinja::Error> {
        let env = environment()?;
        env.get_template(TEMPLATE_NAME)?.render(context! {
            title => opts.title,
            font_stylesheet => opts.font_stylesheet,
            config_json => config_json,
            program_json => program_json,
            sampling => SAMPLING,
            runtime => RUNTIME,
        })
    };
    let html = render().map_err(|e| TempoError::export(format!("render template: {e}")))?;

    tracing::info!(bytes = html.len(), "exported standalone html");
    Ok(html)
}

/// Project file JSON for `config`, the editor's "Export JSON" action.
pub fn export_project_json(config: &AnimationConfig) -> TempoResult<String> {
    project::to_json_pretty(config)
}

/// Read back the config embedded by [`export_html`], with track paths in dotted form again.
pub fn extract_embedded_config(html: &str) -> TempoResult<AnimationConfig> {
    let start = html
        .find(CONFIG_BLOCK_OPEN)
        .map(|i| i + CONFIG_BLOCK_OPEN.len())
        .ok_or_else(|| TempoError::import("no embedded animation config found"))?;
    let len = html[start..]
        .find(SCRIPT_CLOSE)
        .ok_or_else(|| TempoError::import("unterminated embedded animation config"))?;

    let embedded: AnimationConfig = serde_json::from_str(&html[start..start + len])
        .map_err(|e| TempoError::import(format!("embedded config is not valid: {e}")))?;
    let tracks = embedded
        .tracks
        .iter()
        .map(|t| match PropertyPath::parse(&t.property) {
            Some(p) => t.with_property(p.to_dotted()),
            None => t.clone(),
        })
        .collect();
    let config = embedded.with_tracks(tracks);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[path = "../../tests/unit/export/html.rs"]
mod tests;
