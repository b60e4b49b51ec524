use clap::Parser;
use clap::ArgAction;
use anyhow::Result;
use colored::*;
use log::info;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;

use md_sequence::nmer_count;

use meltdb::init_logging;
use meltdb::model_parsers::MeltingModelArguments;
use meltdb::database_parsers::DatabaseArguments;

#[derive(Debug, Parser)]
#[command(name = "md-build")]
#[command(author, version, about = "Tabulate duplex melting temperatures of all DNA n-mers")]
pub struct Cli {
    #[command(flatten, next_help_heading = "Database parameters")]
    database: DatabaseArguments,

    #[command(flatten, next_help_heading = "Melting model parameters")]
    model: MeltingModelArguments,

    /// Build tables of different lengths concurrently
    #[arg(short, long)]
    parallel: bool,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.database.to_config()?;
    let builder = config.to_builder()?;
    let model = cli.model.build_model();

    println!("{} {}-mers to {}-mers, duplex {:?} µM, salt {:?} M, model {}",
        "Melting database:".yellow(),
        config.start, config.end,
        &builder.duplex_umol()[..], &builder.salt_mol()[..],
        model.name());

    if builder.lengths().is_empty() {
        // Still logs the empty-run warning.
        builder.write_database(&model)?;
        return Ok(());
    }

    if cli.parallel {
        info!("Building {} tables in parallel.", builder.lengths().count());
        for path in builder.write_database_parallel(&model)? {
            println!("{} {}", "Wrote".green(), path.display());
        }
        return Ok(());
    }

    builder.create_output_dir()?;
    for n in builder.lengths() {
        let pb = ProgressBar::new(nmer_count(n));
        pb.set_style(
            ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
        );
        pb.set_prefix(format!("{n:>2}-mers"));

        let table = builder.build_table_with(n, &model, || pb.inc(1))?;
        pb.finish_and_clear();

        let path = builder.persist(&table)?;
        println!("{} {} ({} rows)", "Wrote".green(), path.display(), table.len());
    }

    Ok(())
}
