use std::{
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use kerach_tempo::{
    AnimationConfig, ExportOpts, FrameUniforms, PlaybackOpts, PreviewSession, Project,
    PropertyPath, Sampler, ShaderName, TempoResult, UniformSink,
};

#[derive(Parser, Debug)]
#[command(name = "kerach-tempo", version)]
struct Cli {
    /// More logging (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the default project.
    Init(InitArgs),
    /// Print the sampled value of one property.
    Sample(SampleArgs),
    /// Print per-frame renderer inputs over one loop as JSON lines.
    Frames(FramesArgs),
    /// Write a standalone HTML page.
    Export(ExportArgs),
    /// Switch the active shader, retargeting the common tracks.
    SwitchShader(SwitchShaderArgs),
    /// Print the project embedded in an exported page.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Output project JSON.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Property path, dotted (`text.fontSize`) or identifier form (`text_fontSize`).
    #[arg(long)]
    property: String,

    /// Timeline time in seconds.
    #[arg(long)]
    time: f64,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,

    /// Page title.
    #[arg(long)]
    title: Option<String>,
}

#[derive(Parser, Debug)]
struct SwitchShaderArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Target shader: melt, flow, balatro, glass or chargedCells.
    #[arg(long, value_parser = parse_shader)]
    shader: ShaderName,

    /// Output project JSON.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Exported HTML page.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn parse_shader(s: &str) -> Result<ShaderName, String> {
    ShaderName::from_key(s).ok_or_else(|| {
        let keys: Vec<&str> = ShaderName::ALL.iter().map(|n| n.key()).collect();
        format!("unknown shader '{s}' (expected one of: {})", keys.join(", "))
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Init(args) => cmd_init(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Export(args) => cmd_export(args),
        Command::SwitchShader(args) => cmd_switch_shader(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_project(path: &Path) -> anyhow::Result<AnimationConfig> {
    let project =
        Project::from_path(path).with_context(|| format!("load project '{}'", path.display()))?;
    Ok(project.into_config())
}

fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    let json = Project::default().to_json_pretty()?;
    write_output(&args.out, &json)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let config = read_project(&args.in_path)?;
    let path: PropertyPath = args.property.parse()?;
    let value = Sampler::new(&config, args.time).value(path);
    println!("{value}");
    Ok(())
}

/// Writes each frame as one JSON line.
struct JsonLinesSink<W: std::io::Write> {
    out: W,
}

impl<W: std::io::Write> UniformSink for JsonLinesSink<W> {
    fn begin(&mut self, _config: &AnimationConfig) -> TempoResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, frame: &FrameUniforms, _rebuild_mask: bool) -> TempoResult<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        writeln!(self.out).map_err(anyhow::Error::from)?;
        Ok(())
    }

    fn end(&mut self) -> TempoResult<()> {
        self.out.flush().map_err(anyhow::Error::from)?;
        Ok(())
    }
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "fps must be > 0");
    let config = read_project(&args.in_path)?;
    let fps = f64::from(args.fps);
    let frame_count = (config.duration * fps).ceil() as u64;

    let sink = JsonLinesSink {
        out: BufWriter::new(std::io::stdout().lock()),
    };
    let mut session = PreviewSession::new(config, PlaybackOpts::default(), sink)?;
    session.playback_mut().play(0.0);
    for i in 0..frame_count {
        session.tick(i as f64 / fps)?;
    }
    session.close()?;
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let config = read_project(&args.in_path)?;
    let mut opts = ExportOpts::default();
    if let Some(title) = args.title {
        opts.title = title;
    }
    let html = kerach_tempo::export_html(&config, &opts)?;
    write_output(&args.out, &html)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_switch_shader(args: SwitchShaderArgs) -> anyhow::Result<()> {
    let config = read_project(&args.in_path)?;
    let next = config.with_active_shader(args.shader);
    let json = kerach_tempo::to_json_pretty(&next)?;
    write_output(&args.out, &json)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let html = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read '{}'", args.in_path.display()))?;
    let config = kerach_tempo::extract_embedded_config(&html)?;
    println!("{}", kerach_tempo::to_json_pretty(&config)?);
    Ok(())
}
