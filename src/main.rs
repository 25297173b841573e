mod cli;

use std::path::PathBuf;

use anyhow::Context;
use apcsv_to_wav::{convert_with_progress, Config, ConvertEvent};

use crate::cli::build_cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = build_cli().get_matches();

    let input_path = matches
        .get_one::<PathBuf>("csvfile")
        .context("missing input file argument")?;
    let delimiter = matches
        .get_one::<String>("delim")
        .context("missing delimiter")?;
    let rate = matches.get_one::<u32>("rate").copied();
    let verbose = matches.get_flag("verbose");
    let json = matches.get_flag("json");
    let verify = matches.get_flag("verify");

    let mut builder = Config::builder(input_path)
        .delimiter(delimiter.as_str())
        .rate(rate)
        .verbose(verbose)
        .verify(verify);
    if let Some(output_dir) = matches.get_one::<PathBuf>("output-dir") {
        builder = builder.output_dir(output_dir);
    }
    let config = builder
        .build()
        .with_context(|| format!("invalid settings for '{}'", input_path.display()))?;

    if !json {
        println!("Processing file {}", input_path.display());
        println!("Delimiter: {}", config.delimiter);
    }

    let conversion = convert_with_progress(&config, |event| {
        if json {
            return;
        }
        match event {
            ConvertEvent::Discarded { line } => println!("Discarding {line}"),
            ConvertEvent::NativeRate(rate) => println!("Native rate {rate} Hz"),
            ConvertEvent::ExportRate(rate) => println!("Export rate {rate} Hz"),
            ConvertEvent::Normalized { scale } => println!("Max value {scale:?} Normalizing data"),
            ConvertEvent::Written { path } => println!("Output {}", path.display()),
            ConvertEvent::Verified { samples } => println!("Verified {samples} sample(s)"),
        }
    })
    .with_context(|| format!("failed to convert '{}'", input_path.display()))?;

    if json {
        let report =
            serde_json::to_string_pretty(&conversion).context("failed to serialize summary")?;
        println!("{report}");
    }

    Ok(())
}
