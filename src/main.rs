use clap::{Parser, Subcommand};
use docnav::{check, config, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "docnav")]
#[command(about = "Navigation configuration store for versioned documentation sites")]
#[command(long_about = "\
Navigation configuration store for versioned documentation sites

One navigation.toml describes everything the renderer needs: site metadata,
the version table with its default selector, and one sidebar tree per
published version.

Definition structure:

  navigation.toml
  ├── title / base / content_root    # Site metadata
  ├── default_version                # Must match one [[versions]] id
  ├── [social]                       # Links passed through to the renderer
  └── [[versions]]                   # Display order matters
      ├── id / label                 # Version switcher entry
      └── [[versions.sidebar]]       # This version's navigation tree
          ├── label + link           # Leaf link
          ├── label + autogenerate   # Children scanned from a content dir
          └── label + items          # Group, nests freely

Sidebar order in the file is display order on screen. Autogenerated entries
hold a directory reference only; the renderer's build-time scan produces
their children.

Run 'docnav gen-config' to generate a documented navigation.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Navigation definition file
    #[arg(long, default_value = "navigation.toml", global = true)]
    config: PathBuf,

    /// Site root the content_root setting is resolved against
    #[arg(long, default_value = ".", global = true)]
    site_root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the definition and its autogenerate directories
    Check,
    /// Print the navigation tree
    Show {
        /// Show a single version's sidebar
        #[arg(long)]
        version: Option<String>,
        /// Emit the loaded store as pretty JSON for the renderer
        #[arg(long)]
        json: bool,
    },
    /// Print the version table with the default marked
    Versions,
    /// Print a stock navigation.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check => {
            let nav_config = config::load(&cli.config)?;
            let report = check::check(&nav_config, &cli.site_root)?;
            output::print_check_output(&report);
        }
        Command::Show { version, json } => {
            let nav_config = config::load(&cli.config)?;
            if let Some(ref id) = version
                && nav_config.find_version(id).is_none()
            {
                let (versions, _) = nav_config.version_table();
                let available: Vec<&str> = versions.iter().map(|v| v.id.as_str()).collect();
                return Err(format!(
                    "unknown version {id:?} (available: {})",
                    available.join(", ")
                )
                .into());
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&nav_config)?);
            } else {
                output::print_show_output(&nav_config, version.as_deref());
            }
        }
        Command::Versions => {
            let nav_config = config::load(&cli.config)?;
            output::print_versions_output(&nav_config);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
