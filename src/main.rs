#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, OutputFormat, ShowArgs},
    prelude::*,
    tables::{build_chart_table, build_summary_table},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Show(args) => show(*args).await?,
    }

    info!("done!");
    Ok(())
}

#[instrument(skip_all, fields(source = %args.source))]
async fn show(args: ShowArgs) -> Result {
    let analyzer = args.analyzer();
    let rule = analyzer.conversion();
    info!(
        scale = rule.scale,
        tax_rate = rule.tax_rate,
        offset = %args.reference_offset,
        "configured"
    );

    let records = args.source.try_into_record_source()?.fetch_records().await?;
    let analysis = analyzer.analyze(&records).context("failed to analyze the spot prices")?;

    match args.format {
        OutputFormat::Table => {
            println!("{}", build_summary_table(&analysis.summary));
            println!("{}", build_chart_table(&analysis, args.bar_width));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
    }
    Ok(())
}
