use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::{self, Write};

use treeline::cli::Cli;
use treeline::config::Config;
use treeline::tree::{render_tree, RenderOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Shell completions short-circuit the render entirely
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    let Some(path) = cli.path else {
        // clap enforces PATH unless --completions is given
        anyhow::bail!("missing required PATH argument");
    };

    let options = RenderOptions::new().with_files(cli.files || config.render.include_files);

    tracing::info!(path = %path.display(), include_files = options.include_files, "Rendering tree");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_tree(&mut out, &path, &options)?;
    out.flush()?;

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("treeline={}", level)));

    // Log lines go to stderr; stdout carries only the rendered tree.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}
