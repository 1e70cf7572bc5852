use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{CommandFactory, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "album-page",
    version,
    about = "Compose photographs onto an album page layout"
)]
struct Cli {
    /// Layout id, e.g. 2-M-45 (case-insensitive).
    #[arg(required_unless_present = "samples")]
    layout: Option<String>,

    /// One photo per slot of the layout, in slot order.
    photos: Vec<PathBuf>,

    /// Render every layout with placeholder photos instead of composing a page.
    #[arg(long, conflicts_with = "layout")]
    samples: bool,

    /// Output JPEG path.
    #[arg(long, default_value = "temp.jpg")]
    out: PathBuf,

    /// Directory for sample and gallery files (with --samples).
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Compositor settings JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render gallery pages in parallel (with --samples).
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Log debug output to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    init_tracing(cli.verbose);

    let result = if cli.samples {
        cmd_samples(&cli)
    } else {
        cmd_compose(&cli)
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn usage_error(msg: &str) -> ExitCode {
    eprintln!("{msg}");
    eprintln!("{}", Cli::command().render_usage());
    ExitCode::FAILURE
}

fn load_compositor(config: Option<&Path>) -> anyhow::Result<album_page::PageCompositor> {
    let settings = match config {
        Some(path) => album_page::ComposeSettings::from_json_file(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => album_page::ComposeSettings::default(),
    };
    Ok(album_page::PageCompositor::with_settings(settings)?)
}

fn cmd_compose(cli: &Cli) -> anyhow::Result<ExitCode> {
    let Some(raw_layout) = cli.layout.as_deref() else {
        return Ok(usage_error("Missing layout type."));
    };
    let layout = album_page::normalize_layout_id(raw_layout);

    if !album_page::is_valid_layout(&layout) {
        return Ok(usage_error("Invalid layout type."));
    }
    if album_page::slot_count_of(&layout)? != cli.photos.len() {
        return Ok(usage_error("Incorrect number of filenames for given layout."));
    }

    let compositor = load_compositor(cli.config.as_deref())?;
    let page = album_page::Page::build(&layout, cli.photos.as_slice())?;
    let description = page.description();

    let canvas = compositor.render_page(&page, Some(&description))?;

    if let Some(parent) = cli.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    canvas
        .write_jpeg(&cli.out, compositor.settings().jpeg_quality)
        .with_context(|| format!("write jpeg '{}'", cli.out.display()))?;

    println!("Created File: '{}'", cli.out.display());
    println!("{description}");
    Ok(ExitCode::SUCCESS)
}

fn cmd_samples(cli: &Cli) -> anyhow::Result<ExitCode> {
    let compositor = load_compositor(cli.config.as_deref())?;

    std::fs::create_dir_all(&cli.dir)
        .with_context(|| format!("create gallery dir '{}'", cli.dir.display()))?;

    let threading = album_page::GalleryThreading {
        parallel: cli.parallel,
        threads: cli.threads,
    };
    let report = album_page::render_gallery(&cli.dir, &compositor, &threading)
        .with_context(|| format!("render gallery into '{}'", cli.dir.display()))?;
    tracing::debug!(pages = report.pages.len(), "gallery complete");

    println!("Samples built.");
    // Sample mode exits 1 even when every page was written.
    Ok(ExitCode::FAILURE)
}
