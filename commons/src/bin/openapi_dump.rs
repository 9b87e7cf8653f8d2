//! Print an OpenAPI document as JSON.
//!
//! Metadata and groups come from the `COMMONS_SWAGGER_*` environment.

use std::ffi::OsString;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use commons::doc::ApiDocs;
use commons::settings::SwaggerSettings;
use ortho_config::OrthoConfig;

#[derive(Debug, Parser)]
#[command(about = "Print the service's OpenAPI document")]
struct Cli {
    /// Print this documentation group instead of the full document.
    #[arg(long)]
    group: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let settings = SwaggerSettings::load_from_iter([OsString::from("openapi-dump")])
        .map_err(|err| eyre!("loading swagger settings: {err}"))?;
    let docs = ApiDocs::from_settings(&settings)?;

    let document = match cli.group.as_deref() {
        Some(name) => docs
            .group(name)
            .ok_or_else(|| eyre!("documentation group `{name}` is not configured"))?,
        None => docs.primary(),
    };
    println!("{}", document.to_pretty_json()?);
    Ok(())
}
