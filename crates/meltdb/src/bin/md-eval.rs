use clap::Args;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;
use colored::*;
use rayon::prelude::*;

use md_database::MICROMOLAR;

use meltdb::init_logging;
use meltdb::input_parsers::read_sequences_input;
use meltdb::input_parsers::read_sequences_strict_input;
use meltdb::model_parsers::MeltingModelArguments;

#[derive(Debug, Args)]
pub struct EvalInput {
    /// Input file (one sequence per line, FASTA headers allowed), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Fail on unreadable sequences instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Args)]
pub struct Conditions {
    /// Duplex concentration in µM
    #[arg(short, long, value_name = "UMOL", default_value_t = 1.0)]
    pub duplex_umol: f64,

    /// Salt concentration in M
    #[arg(short = 'S', long, value_name = "MOL", default_value_t = 0.5)]
    pub salt_mol: f64,
}

#[derive(Debug, Parser)]
#[command(name = "md-eval")]
#[command(author, version, about = "Melting temperatures of individual DNA duplexes")]
pub struct Cli {
    #[command(flatten)]
    pub eval: EvalInput,

    #[command(flatten, next_help_heading = "Conditions")]
    pub conditions: Conditions,

    #[command(flatten, next_help_heading = "Melting model parameters")]
    pub model: MeltingModelArguments,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.eval.verbose);

    let model = cli.model.build_model();
    let sequences = if cli.eval.strict {
        read_sequences_strict_input(&cli.eval.input)?
    } else {
        read_sequences_input(&cli.eval.input)?
    };

    let salt = cli.conditions.salt_mol;
    let duplex = cli.conditions.duplex_umol * MICROMOLAR;
    let results: Vec<_> = sequences
        .par_iter()
        .map(|(_, seq)| model.melting(seq, salt, duplex))
        .collect();

    for ((header, seq), result) in sequences.iter().zip(results) {
        if let Some(h) = header {
            println!("{}", h.yellow());
        }
        let m = result?;
        println!("{} {} {:>8.2} {:>8.2}",
            seq,
            format!("{:>6.2}", m.tm).green(),
            m.delta_h,
            m.delta_s);
    }

    Ok(())
}
