use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stickerfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the effect catalog as JSON.
    List,
    /// Apply effects frame by frame to a blank surface and print each frame's state as JSON lines.
    Trace(TraceArgs),
    /// Apply one effect to a PNG and write the resulting pixels.
    Pixels(PixelsArgs),
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Trace configuration JSON; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Effect id to apply (repeatable, applied in the given order).
    #[arg(long = "effect")]
    effects: Vec<String>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Frames per loop.
    #[arg(long)]
    frames: Option<u32>,

    /// Seed for the jitter/noise random source.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct PixelsArgs {
    /// Input PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Effect id to apply.
    #[arg(long)]
    effect: String,

    /// Loop progress in [0, 1].
    #[arg(long, default_value_t = 0.0)]
    progress: f64,

    /// Seed for the jitter/noise random source.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(serde::Serialize)]
struct ListedEffect {
    id: stickerfx::EffectId,
    label: &'static str,
    class: stickerfx::EffectClass,
}

#[derive(serde::Serialize)]
struct ListedCategory {
    label: &'static str,
    effects: Vec<ListedEffect>,
}

#[derive(serde::Serialize)]
struct CatalogListing {
    effects: Vec<ListedCategory>,
    static_effects: Vec<ListedEffect>,
    pro_effects: Vec<ListedCategory>,
}

fn listed(d: &stickerfx::EffectDescriptor) -> ListedEffect {
    ListedEffect {
        id: d.id,
        label: d.label,
        class: d.class(),
    }
}

fn listed_categories(categories: &[stickerfx::EffectCategory]) -> Vec<ListedCategory> {
    categories
        .iter()
        .map(|c| ListedCategory {
            label: c.label,
            effects: c.effects.iter().map(listed).collect(),
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Trace(args) => cmd_trace(args),
        Command::Pixels(args) => cmd_pixels(args),
    }
}

fn cmd_list() -> anyhow::Result<()> {
    let listing = CatalogListing {
        effects: listed_categories(stickerfx::EFFECTS),
        static_effects: stickerfx::STATIC_EFFECTS.iter().map(listed).collect(),
        pro_effects: listed_categories(stickerfx::PRO_EFFECTS),
    };
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => stickerfx::TraceConfig::from_json_file(path)?,
        None => stickerfx::TraceConfig::default(),
    };
    if !args.effects.is_empty() {
        config.effects = args
            .effects
            .iter()
            .map(|s| s.parse::<stickerfx::EffectId>())
            .collect::<Result<_, _>>()?;
    }
    if let Some(w) = args.width {
        config.width = w;
    }
    if let Some(h) = args.height {
        config.height = h;
    }
    if let Some(n) = args.frames {
        config.frames = n;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    for frame in stickerfx::trace_frames(&config)? {
        println!("{}", serde_json::to_string(&frame)?);
    }
    Ok(())
}

fn cmd_pixels(args: PixelsArgs) -> anyhow::Result<()> {
    let effect: stickerfx::EffectId = args.effect.parse()?;

    let img = image::open(&args.in_path)
        .with_context(|| format!("read png '{}'", args.in_path.display()))?
        .to_rgba8();
    let pixels = stickerfx::PixelBuffer::from_rgba_image(img)?;
    let mut surface = stickerfx::CpuSurface::from_pixels(pixels);
    let size = surface.size();
    let mut state = stickerfx::EffectState::new(args.seed);

    effect.apply(args.progress, &mut surface, size, &mut state)?;
    let snapshot = surface.snapshot();

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    surface
        .pixels()
        .to_rgba_image()?
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("applied {effect} at progress {}", args.progress);
    eprintln!("  transform: {:?}", snapshot.transform);
    eprintln!("  filter:    {}", snapshot.filter);
    eprintln!("  shadow:    {}", snapshot.shadow_color);
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
