use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lumina::collection::{COLLECTION_FILENAME, Collection};
use lumina::config::Config;
use lumina::prompt::{GenerationParams, STYLES, derive_tags};
use lumina::provider::GeminiClient;
use lumina::types::{AspectRatio, Wallpaper};
use lumina::{curated, export, gallery, output};

#[derive(Parser)]
#[command(name = "lumina")]
#[command(about = "Command-line studio for AI-generated wallpapers")]
#[command(long_about = "\
Command-line studio for AI-generated wallpapers

Generate wallpapers from text prompts via the Gemini image API, browse a
curated sample set, and manage a personal collection persisted as a local
JSON file.

Typical session:

  lumina browse                              # look at the curated samples
  lumina generate \"A misty forest at dawn\" \\
      --style watercolor --ratio 16:9        # create one of your own
  lumina list                                # inspect the collection
  lumina export <id> --out ~/Pictures        # write the image to disk
  lumina gallery --out ./my-walls            # render a static HTML gallery

Generation requires the GEMINI_API_KEY environment variable. Styles:
cinematic, minimalist, cyberpunk, anime, watercolor, surreal — or any
free-form style name.

Run 'lumina gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Collection file (defaults to the platform data directory)
    #[arg(long, global = true)]
    collection: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse the curated sample set
    Browse,
    /// Generate a wallpaper from a text prompt
    Generate {
        /// What the wallpaper should depict
        prompt: String,
        /// Visual style (see --help for the built-in list)
        #[arg(long)]
        style: Option<String>,
        /// Aspect ratio: 1:1, 3:4, 4:3, 9:16 or 16:9
        #[arg(long, default_value = "16:9")]
        ratio: AspectRatio,
    },
    /// List the personal collection, most recent first
    List,
    /// Remove a wallpaper from the collection by id
    Remove {
        id: String,
    },
    /// Copy a curated sample into the personal collection
    Import {
        /// Curated id, e.g. curated-3
        id: String,
    },
    /// Write a wallpaper's image bytes to a local file
    Export {
        id: String,
        /// Output directory (defaults to export.dir from config)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render the collection as a static HTML gallery
    Gallery {
        /// Output directory (defaults to export.dir from config)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// List the built-in style identifiers
    Styles,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let collection_path = resolve_collection_path(cli.collection.as_deref());
    let config = Config::load(&resolve_config_path(cli.config.as_deref()))?;

    match cli.command {
        Command::Browse => {
            output::print_curated(&curated::curated_wallpapers());
        }
        Command::Generate {
            prompt,
            style,
            ratio,
        } => {
            if prompt.trim().is_empty() {
                return Err("prompt must not be empty".into());
            }
            let client = GeminiClient::from_env(&config.provider)?;
            let params = GenerationParams {
                prompt,
                aspect_ratio: ratio,
                style,
            };
            println!("==> Generating ({}, {})", config.provider.model, ratio);
            let url = client.generate(&params).await?;

            let tags = derive_tags(params.style.as_deref(), &params.prompt);
            let wallpaper = Wallpaper::new(url, params.prompt, params.aspect_ratio, tags);

            let mut collection = Collection::load(&collection_path);
            collection.append(wallpaper.clone());
            collection.save(&collection_path)?;
            output::print_generated(&wallpaper);
        }
        Command::List => {
            output::print_collection(&Collection::load(&collection_path));
        }
        Command::Remove { id } => {
            let mut collection = Collection::load(&collection_path);
            if collection.remove(&id) {
                collection.save(&collection_path)?;
                println!("Removed {id}");
            } else {
                println!("No wallpaper with id {id}");
            }
        }
        Command::Import { id } => {
            let sample = curated::find(&id)
                .ok_or_else(|| format!("no curated wallpaper '{id}' — see `lumina browse`"))?;
            let wallpaper =
                Wallpaper::new(sample.url, sample.prompt, sample.aspect_ratio, sample.tags);

            let mut collection = Collection::load(&collection_path);
            collection.append(wallpaper.clone());
            collection.save(&collection_path)?;
            println!("Imported {id} as {}", wallpaper.id);
        }
        Command::Export { id, out } => {
            let collection = Collection::load(&collection_path);
            let wallpaper = collection
                .get(&id)
                .cloned()
                .or_else(|| curated::find(&id))
                .ok_or_else(|| format!("no wallpaper with id {id}"))?;

            let dir = out.unwrap_or_else(|| PathBuf::from(&config.export.dir));
            let path = export::export(&wallpaper, &dir).await?;
            println!("Exported → {}", path.display());
        }
        Command::Gallery { out } => {
            let collection = Collection::load(&collection_path);
            let dir = out.unwrap_or_else(|| PathBuf::from(&config.export.dir));
            let path = gallery::write_gallery(&collection, &dir)?;
            println!(
                "Gallery ({} wallpapers) → {}",
                collection.len(),
                path.display()
            );
        }
        Command::GenConfig => {
            print!("{}", lumina::config::stock_config_toml());
        }
        Command::Styles => {
            for style in STYLES {
                println!("{style}");
            }
        }
    }

    Ok(())
}

/// Collection file: `--collection` flag, or `<data_dir>/lumina/wallpapers.json`.
fn resolve_collection_path(flag: Option<&std::path::Path>) -> PathBuf {
    match flag {
        Some(path) => path.to_path_buf(),
        None => dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lumina")
            .join(COLLECTION_FILENAME),
    }
}

/// Config file: `--config` flag, or `<config_dir>/lumina/config.toml`.
fn resolve_config_path(flag: Option<&std::path::Path>) -> PathBuf {
    match flag {
        Some(path) => path.to_path_buf(),
        None => dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lumina")
            .join("config.toml"),
    }
}
