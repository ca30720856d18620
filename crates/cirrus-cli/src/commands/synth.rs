//! `cirrus synth` — compose the stack and emit the manifest.

use anyhow::Context;
use tracing::info;

use cirrus_config::CirrusConfig;
use cirrus_synth::deployment;

use crate::cli::SynthArgs;

pub fn handle(args: &SynthArgs, config: &CirrusConfig) -> anyhow::Result<()> {
    config.sso.ensure_configured()?;
    config
        .accounts
        .ensure_configured(!config.organization.manage)?;

    let template = deployment::synthesize(config).context("failed to synthesize manifest")?;
    let manifest = template.to_json()?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, manifest + "\n")
                .with_context(|| format!("failed to write manifest to {}", path.display()))?;
            info!(path = %path.display(), "wrote manifest");
        }
        None => println!("{manifest}"),
    }

    Ok(())
}
