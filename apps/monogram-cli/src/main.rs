use clap::{Parser, Subcommand};
use monogram_scene::{Glyph, Scene};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "monogram-cli", about = "Inspect monogram scene layouts without a window")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the stock scene summary
    Info,
    /// List the characters that have a block layout
    Glyphs,
    /// Print a scene layout as JSON
    Layout {
        /// Monogram rows, front to back
        #[arg(short, long, num_args = 1.., default_values_t = [String::from("C3"), String::from("R9")])]
        text: Vec<String>,

        /// Emit every cube placement instead of the summary
        #[arg(long)]
        placements: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("monogram-cli v{}", env!("CARGO_PKG_VERSION"));
            let summary = Scene::stock().summary();
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Glyphs => {
            for &ch in Glyph::supported() {
                let g = Glyph::for_char(ch).expect("supported glyph resolves");
                println!("{ch}  {} cuboids, advance {}", g.parts().len(), g.advance());
            }
        }
        Commands::Layout { text, placements } => {
            let scene = Scene::from_rows(&text)?;
            if placements {
                println!("{}", serde_json::to_string_pretty(&scene.instances())?);
            } else {
                println!("{}", serde_json::to_string_pretty(&scene.summary())?);
            }
        }
    }

    Ok(())
}
