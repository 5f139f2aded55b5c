use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse dessert recipes from TheMealDB
#[derive(Parser, Debug)]
#[command(name = "desserts")]
#[command(version, about = "Browse dessert recipes from TheMealDB", long_about = None)]
pub struct Cli {
    /// Config file (TOML). Defaults to the per-user config if present
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List desserts sorted by name
    List {
        /// Also fetch each preview thumbnail
        #[arg(short, long)]
        thumbnails: bool,
    },
    /// Show one recipe
    Show {
        /// Meal id, e.g. 53049
        id: String,
    },
    /// Fetch an image and report what came back
    Image {
        url: String,
        /// Write the image bytes here
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Pick desserts from the list interactively
    Browse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show_with_global_flags() {
        let cli = Cli::try_parse_from(["desserts", "show", "53049", "--api-base", "http://localhost:1"]).unwrap();
        assert_eq!(cli.api_base.as_deref(), Some("http://localhost:1"));
        assert!(matches!(cli.command, Commands::Show { ref id } if id == "53049"));
    }

    #[test]
    fn parses_list_thumbnails() {
        let cli = Cli::try_parse_from(["desserts", "list", "-t"]).unwrap();
        assert!(matches!(cli.command, Commands::List { thumbnails: true }));
    }

    #[test]
    fn image_requires_url() {
        assert!(Cli::try_parse_from(["desserts", "image"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
