use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use logomark_core::export::Deck;
use logomark_core::session::new_generation_key;
use logomark_core::{
    campaign, derive_narrative, render_preview_rgba, render_svg, settings, CampaignConfig, HashMode, LogoVariant,
    PaletteRegistry, Session, Settings, VariantAssembler, VARIANTS_PER_REQUEST, VERSION,
};

#[derive(Parser, Debug)]
#[command(name = "logomark", version = VERSION, about = "Deterministic logo concepts from a campaign brief")]
struct Cli {
    /// Settings YAML (hash mode, history limit, preview size, palettes)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Palette registry YAML, overrides the settings file
    #[arg(long, global = true)]
    palettes: Option<PathBuf>,
    /// wrapping | double-precision
    #[arg(long, global = true)]
    hash_mode: Option<HashMode>,
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a campaign brief and print it with its three seed strings
    Inspect {
        brief: PathBuf,
        #[arg(long)]
        key: Option<String>,
    },
    /// List the palette registry
    Palettes,
    /// Generate the three variants for a brief
    Generate {
        brief: PathBuf,
        #[arg(long)]
        key: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Also write one SVG card per variant into this directory
        #[arg(long)]
        svg_dir: Option<PathBuf>,
    },
    /// Rasterize one variant and write PNG
    Preview {
        brief: PathBuf,
        #[arg(long)]
        key: Option<String>,
        #[arg(long, default_value_t = 0)]
        index: usize,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        #[arg(long, default_value = "preview.png")]
        out: PathBuf,
    },
    /// Print headline, narrative and channel plan for a brief
    Narrative {
        brief: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
    },
    /// Render one variant to SVG and add it to a saved-concept deck
    Save {
        brief: PathBuf,
        #[arg(long)]
        deck: PathBuf,
        #[arg(long)]
        key: Option<String>,
        #[arg(long, default_value_t = 0)]
        index: usize,
        #[arg(long, default_value = ".")]
        svg_dir: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
    /// Gradient CSS only
    Css,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.settings {
        Some(path) => settings::load_from_path(path)?,
        None => Settings::default(),
    };
    if let Some(path) = &cli.palettes {
        settings.palettes = Some(path.clone());
    }
    if let Some(mode) = cli.hash_mode {
        settings.hash_mode = mode;
    }
    Ok(settings)
}

/// A missing key gets a fresh one, echoed to stderr so the run can be repeated.
fn resolve_key(key: Option<String>) -> String {
    key.unwrap_or_else(|| {
        let key = new_generation_key();
        eprintln!("generation key: {}", key);
        key
    })
}

fn check_index(index: usize) -> Result<()> {
    if index >= VARIANTS_PER_REQUEST {
        bail!("variant index {} out of range (0..{})", index, VARIANTS_PER_REQUEST);
    }
    Ok(())
}

fn write_svg(dir: &Path, variant: &LogoVariant, config: &CampaignConfig) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(format!("{}.svg", variant.id));
    std::fs::write(&path, render_svg(variant, config)).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let settings = load_settings(&cli)?;
    let registry: PaletteRegistry = settings.registry()?;
    let assembler = VariantAssembler::new(settings.hash_mode);

    match cli.cmd {
        Command::Inspect { brief, key } => {
            let config = campaign::load_from_path(&brief)?;
            let key = resolve_key(key);
            println!("Loaded brief: {}", if config.brand.is_empty() { "(unnamed)" } else { &config.brand });
            println!("  goal: {}", config.campaign_goal);
            println!("  audience: {}", config.audience);
            println!("  keywords: {}", config.keyword_tokens().join(", "));
            println!("  tagline: {}", config.tagline);
            println!("  tone: {}, structure: {}", config.tone, config.structure);
            let palette = registry.get(&config.palette_id);
            println!("  palette: {} ({})", palette.name, palette.id);
            println!("  hash mode: {}", settings.hash_mode);
            for index in 0..VARIANTS_PER_REQUEST {
                println!("  seed[{}]: {}", index, campaign::seed_string(&config, &key, index));
            }
        }
        Command::Palettes => {
            for palette in &registry {
                let swatch: Vec<String> = palette.swatch.iter().map(|c| c.to_string()).collect();
                println!("{:<14} {:<14} {}  {}", palette.id, palette.name, swatch.join(" "), palette.caption);
            }
        }
        Command::Generate { brief, key, format, svg_dir } => {
            let config = campaign::load_from_path(&brief)?;
            let key = resolve_key(key);
            let variants = assembler.generate(&config, &key, &registry);
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&variants)?),
                Format::Yaml => print!("{}", serde_yaml::to_string(&variants)?),
                Format::Css => {
                    for v in &variants {
                        println!("{}: {};", v.id, v.gradient);
                    }
                }
            }
            if let Some(dir) = svg_dir {
                for v in &variants {
                    let path = write_svg(&dir, v, &config)?;
                    log::info!("wrote {}", path.display());
                }
            }
        }
        Command::Preview { brief, key, index, width, height, out } => {
            check_index(index)?;
            let config = campaign::load_from_path(&brief)?;
            let key = resolve_key(key);
            let width = width.unwrap_or(settings.preview.width);
            let height = height.unwrap_or(settings.preview.height);
            let palette = registry.get(&config.palette_id);
            let variant = assembler.variant(&config, &key, palette, index);
            let pixels = render_preview_rgba(&variant, width, height);
            let img = image::RgbaImage::from_raw(width, height, pixels)
                .ok_or_else(|| anyhow::anyhow!("Failed to create image from raw"))?;
            img.save(&out)?;
            println!("Wrote {}x{} preview of {} to {}", width, height, variant.id, out.display());
        }
        Command::Narrative { brief, format } => {
            let config = campaign::load_from_path(&brief)?;
            let pack = derive_narrative(&config);
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&pack)?),
                Format::Yaml => print!("{}", serde_yaml::to_string(&pack)?),
                Format::Css => bail!("narrative has no CSS form; use json or yaml"),
            }
        }
        Command::Save { brief, deck, key, index, svg_dir } => {
            check_index(index)?;
            let config = campaign::load_from_path(&brief)?;
            let key = resolve_key(key);
            let mut history = if deck.exists() { Deck::load_from_path(&deck)? } else { Deck::default() };
            history.limit = settings.history_limit;
            let mut session = Session::with_settings(config, &settings).with_generation_key(key).with_deck(history);
            let variants = session.variants(&registry);
            let variant = &variants[index];
            let path = write_svg(&svg_dir, variant, session.config())?;
            let saved = session.save_variant(variant, path.display().to_string());
            println!("Saved {} as {} ({})", variant.id, saved.file_stem(), saved.summary);
            session.into_deck().save_to_path(&deck)?;
        }
    }
    Ok(())
}
