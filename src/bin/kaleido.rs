use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kaleido", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the text encoding of a parameter set.
    Encode(InputArgs),
    /// Decode an encoded string and print it as JSON.
    Decode(DecodeArgs),
    /// Print the draw instructions of a parameter set as JSON.
    Layers(LayersArgs),
    /// Write a parameter set as an SVG document.
    Svg(SvgArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Input parameters JSON (partial files are filled from defaults).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Input as an encoded `key:value;...` string.
    #[arg(long)]
    text: Option<String>,
}

#[derive(Parser, Debug)]
struct DecodeArgs {
    /// Encoded `key:value;...` string.
    #[arg(long)]
    text: String,

    /// Print the validated parameter set instead of the raw field mapping.
    #[arg(long)]
    params: bool,
}

#[derive(Parser, Debug)]
struct LayersArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Primitive radius before scaling.
    #[arg(long)]
    base_size: Option<f64>,

    /// Resolve layers on the rayon thread pool.
    #[arg(long)]
    parallel: bool,
}

#[derive(Parser, Debug)]
struct SvgArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 1024)]
    height: u32,

    /// Primitive radius before scaling.
    #[arg(long)]
    base_size: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Encode(args) => cmd_encode(args),
        Command::Decode(args) => cmd_decode(args),
        Command::Layers(args) => cmd_layers(args),
        Command::Svg(args) => cmd_svg(args),
    }
}

fn read_params_json(path: &Path) -> anyhow::Result<kaleido::ArtworkParameters> {
    let f = File::open(path).with_context(|| format!("open parameters '{}'", path.display()))?;
    let r = BufReader::new(f);
    let params: kaleido::ArtworkParameters =
        serde_json::from_reader(r).with_context(|| "parse parameters JSON")?;
    Ok(params)
}

fn load_params(input: &InputArgs) -> anyhow::Result<kaleido::ArtworkParameters> {
    match (&input.in_path, &input.text) {
        (Some(path), _) => read_params_json(path),
        (None, Some(text)) => Ok(kaleido::decode_parameters(text)),
        (None, None) => anyhow::bail!("either --in or --text is required"),
    }
}

fn compose_config(base_size: Option<f64>) -> anyhow::Result<kaleido::ComposeConfig> {
    let mut config = kaleido::ComposeConfig::default();
    if let Some(size) = base_size {
        if !size.is_finite() || size <= 0.0 {
            anyhow::bail!("--base-size must be finite and > 0");
        }
        config.base_size = size;
    }
    Ok(config)
}

fn cmd_encode(args: InputArgs) -> anyhow::Result<()> {
    let params = load_params(&args)?;
    println!("{}", kaleido::encode(&params));
    Ok(())
}

fn cmd_decode(args: DecodeArgs) -> anyhow::Result<()> {
    let json = if args.params {
        serde_json::to_string_pretty(&kaleido::decode_parameters(&args.text))?
    } else {
        serde_json::to_string_pretty(&kaleido::decode(&args.text))?
    };
    println!("{json}");
    Ok(())
}

fn cmd_layers(args: LayersArgs) -> anyhow::Result<()> {
    let params = load_params(&args.input)?;
    let compositor = kaleido::Compositor::new(&params, compose_config(args.base_size)?);
    let ops = if args.parallel {
        compositor.draw_ops_parallel()
    } else {
        compositor.draw_ops()
    };
    println!("{}", serde_json::to_string_pretty(&ops)?);
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let params = load_params(&args.input)?;
    let compositor = kaleido::Compositor::new(&params, compose_config(args.base_size)?);
    let canvas = kaleido::Canvas::new(args.width, args.height);
    let svg = kaleido::to_svg(&compositor.draw_ops(), compositor.background(), canvas);

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
