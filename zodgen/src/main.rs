use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zodgen::cli::{Cli, Output};
use zodgen::Generator;
use zodgen::schema::parse_sdl_file;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog = parse_sdl_file(&cli.schema)
        .with_context(|| format!("loading {}", cli.schema.display()))?;
    tracing::info!("Parsed {} types from {}", catalog.len(), cli.schema.display());

    let config = cli.config().context("loading actions")?;
    let generator = Generator::new(&catalog, &config);

    match cli.output() {
        Output::Stdout => {
            let module = generator.generate().context("generating schemas")?;
            print!("{module}");
        }
        Output::File(path) => generator
            .write_to_file(&path)
            .with_context(|| format!("writing {}", path.display()))?,
    }

    Ok(())
}
