//! Print the OpenAPI document as JSON.
//!
//! # Examples
//! ```sh
//! cargo run --manifest-path backend/Cargo.toml --bin openapi-dump -- --pretty
//! ```

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use recipe_catalogue::ApiDoc;
use utoipa::OpenApi;

/// Command-line options for the dump.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the recipe catalogue OpenAPI document")]
struct Cli {
    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let doc = ApiDoc::openapi();
    let json = if cli.pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    }
    .wrap_err("serialise OpenAPI document")?;
    println!("{json}");
    Ok(())
}
