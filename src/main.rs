use anyhow::Result;
use clap::Parser;

use bump_version::cli::{self, BumpRequest};
use bump_version::{config, ui, BumpError};

#[derive(clap::Parser)]
#[command(
    name = "bump-version",
    about = "Rewrite the fallback version in a Gradle build file"
)]
struct Args {
    #[arg(
        value_name = "VERSION",
        help = "Version to write, e.g. 1.2.3 or v1.2.3-rc.1 (defaults to $VERSION)"
    )]
    new_version: Option<String>,

    #[arg(short, long, help = "Build file to patch [default: build.gradle]")]
    file: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short = 'v', long = "version", help = "Print version information")]
    show_version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.show_version {
        println!("bump-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let build_file = args.file.unwrap_or(config.build_file);
    let request = BumpRequest::from_env(
        args.new_version.as_deref(),
        &config.version_env,
        build_file,
        args.dry_run,
    );

    match cli::bump(&request) {
        Ok(outcome) => {
            ui::display_outcome(&outcome);
            Ok(())
        }
        // Filesystem failures go out through anyhow with the OS message attached
        Err(e) if e.is_io() => Err(e.into()),
        Err(BumpError::MissingArgument) => {
            ui::display_usage(&config.version_env);
            std::process::exit(1);
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
