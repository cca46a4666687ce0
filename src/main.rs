//! aegis-icons CLI
//!
//! Commands: gen-icons, random, icon, slug
//! Icons go to files or stdout, diagnostics to stderr.
//! Returns non-zero on the first failure.

use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use aegis_icons::{Icon, IconCatalog, IconError, debug, log, logger, slug};

/// Marker for writing to stdout instead of a file.
const STDOUT: &str = "-";

#[derive(Parser)]
#[command(name = "aegis-icons", version)]
#[command(about = "Generate Aegis Authenticator icons from simple-icons")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a simple-icons checkout
    #[arg(
        short,
        long,
        global = true,
        env = "AEGIS_SIMPLE_ICONS",
        default_value = "simple-icons"
    )]
    source: PathBuf,

    /// Print debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an icon for every brand into a directory
    GenIcons {
        /// Destination directory (created if missing)
        #[arg(short, long)]
        output: PathBuf,

        /// Also write an 800x800 PNG next to each SVG
        #[arg(long)]
        png: bool,
    },

    /// Generate the icon of a randomly chosen brand
    Random(SingleOutput),

    /// Generate the icon of one brand
    Icon {
        /// Brand title, e.g. ".NET"
        title: String,

        #[command(flatten)]
        output: SingleOutput,
    },

    /// Print the icon filename for a brand title
    Slug {
        /// Brand title
        title: String,
    },
}

#[derive(Args)]
struct SingleOutput {
    /// Output file, or "-" for stdout
    #[arg(short, long, default_value = STDOUT)]
    output: PathBuf,

    /// Write PNG instead of SVG
    #[arg(long)]
    png: bool,
}

/// A failure already reported to the user.
#[derive(Debug)]
struct Failed;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::set_verbose(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failed) => ExitCode::FAILURE,
    }
}

fn run(cli: Cli) -> Result<(), Failed> {
    match cli.command {
        Commands::Slug { title } => {
            println!("{}", slug(&title));
            Ok(())
        }

        Commands::GenIcons { output, png } => {
            let catalog = open_catalog(&cli.source)?;
            gen_icons(&catalog, &output, png)
        }

        Commands::Random(output) => {
            let catalog = open_catalog(&cli.source)?;
            let icon = catalog.generate_random().map_err(report)?;
            write_single(&icon, &output)
        }

        Commands::Icon { title, output } => {
            let catalog = open_catalog(&cli.source)?;
            let Some(entry) = catalog.find(&title) else {
                log!("error"; "no brand titled '{}' in {}", title, cli.source.display());
                return Err(Failed);
            };
            let icon = catalog.generate(entry).map_err(report)?;
            write_single(&icon, &output)
        }
    }
}

fn open_catalog(source: &Path) -> Result<IconCatalog, Failed> {
    let catalog = IconCatalog::open(source).map_err(report)?;
    debug!("catalog"; "{} brands in {}", catalog.len(), source.display());
    Ok(catalog)
}

fn gen_icons(catalog: &IconCatalog, output: &Path, png: bool) -> Result<(), Failed> {
    fs::create_dir_all(output).map_err(|e| {
        log!("error"; "failed to create {}: {}", output.display(), e);
        Failed
    })?;

    let mut written = 0usize;
    for icon in catalog.generate_all() {
        let icon = icon.map_err(report)?;

        write_file(&output.join(icon.filename()), icon.to_svg_string().as_bytes())?;
        if png {
            let bytes = icon.render_png().map_err(report)?;
            write_file(&output.join(icon.filename_with_extension("png")), &bytes)?;
        }
        written += 1;
    }

    log!("icons"; "wrote {} icons to {}", written, output.display());
    Ok(())
}

fn write_single(icon: &Icon, output: &SingleOutput) -> Result<(), Failed> {
    let bytes = if output.png {
        icon.render_png().map_err(report)?
    } else {
        icon.to_svg_string().into_bytes()
    };

    if output.output.as_os_str() == STDOUT {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&bytes).and_then(|()| stdout.flush()).map_err(|e| {
            log!("error"; "failed to write to stdout: {}", e);
            Failed
        })?;
        debug!("icon"; "{} written to stdout", icon.title());
        Ok(())
    } else {
        write_file(&output.output, &bytes)
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), Failed> {
    fs::write(path, bytes).map_err(|e| {
        log!("error"; "failed to write {}: {}", path.display(), e);
        Failed
    })?;
    log!("icons"; "wrote {}", path.display());
    Ok(())
}

fn report(err: IconError) -> Failed {
    log!("error"; "{}", err);
    Failed
}
