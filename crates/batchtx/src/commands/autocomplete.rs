use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::Context;
use batchtx_cli_common::logger;
use clap::{CommandFactory, Parser};

use crate::messages::{msg_generate_autocomplete_file, MSG_OUTRO_AUTOCOMPLETE_GENERATION};

#[derive(Debug, Parser)]
pub struct AutocompleteArgs {
    /// The shell to generate the autocomplete script for
    #[arg(long = "generate", value_enum)]
    pub generator: clap_complete::Shell,
    /// Write the script to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: AutocompleteArgs) -> anyhow::Result<()> {
    let mut cmd = crate::Batchtx::command();

    match &args.out {
        Some(path) => {
            logger::info(msg_generate_autocomplete_file(&path.display().to_string()));
            let file = File::create(path).context("Failed to create the output file")?;
            let mut writer = BufWriter::new(file);
            clap_complete::generate(args.generator, &mut cmd, "batchtx", &mut writer);
        }
        None => {
            clap_complete::generate(args.generator, &mut cmd, "batchtx", &mut std::io::stdout());
        }
    }

    logger::outro(MSG_OUTRO_AUTOCOMPLETE_GENERATION);
    Ok(())
}
