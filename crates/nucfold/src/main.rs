//! # nucfold
//!
//! Fold one DNA chain, or two chains together, to maximum pairing energy.
//!
//! ```bash
//! # One optimal structure
//! nucfold GGGAAATCCC
//!
//! # Two chains, all optimal structures (at most 20)
//! nucfold GCGCAT ATGCGC -a -m 20
//!
//! # Custom energies, matrix dump, and the energy of a given structure
//! nucfold GGGAAATCCC -e energies.json --matrix --eval "(((....)))"
//! ```

use std::error::Error;
use std::fmt::Write;

use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap::value_parser;
use colored::Colorize;
use itertools::Itertools;
use log::info;
use log::warn;

use nucfold::AminoAcid;
use nucfold::DotBracketVec;
use nucfold::EnergyTable;
use nucfold::FoldConfig;
use nucfold::Folder;
use nucfold::Indexer;
use nucfold::SecondaryStructure;
use nucfold::Sequence;

const MATRIX_WIDTH: usize = 4;

fn cli() -> Command {
    Command::new("nucfold")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Maximum pairing energy secondary structures of DNA")
        .arg(
            Arg::new("sequence")
                .value_name("SEQUENCE")
                .required(true)
                .help("DNA sequence (ACGT)"),
        )
        .arg(
            Arg::new("second")
                .value_name("SECOND")
                .help("Second DNA sequence, folded together with the first"),
        )
        .arg(
            Arg::new("max-foldings")
                .short('m')
                .long("max-foldings")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("100")
                .help("Maximum number of enumerated structures"),
        )
        .arg(
            Arg::new("min-hairpin")
                .long("min-hairpin")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("0")
                .help("Pairs within one chain need more than N positions between them"),
        )
        .arg(
            Arg::new("energy")
                .short('e')
                .long("energy")
                .value_name("FILE")
                .help("Pair energies as JSON (default: standard table)"),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .action(ArgAction::SetTrue)
                .help("Enumerate all optimal structures"),
        )
        .arg(
            Arg::new("matrix")
                .long("matrix")
                .action(ArgAction::SetTrue)
                .help("Print the energy matrix"),
        )
        .arg(
            Arg::new("translate")
                .short('t')
                .long("translate")
                .action(ArgAction::SetTrue)
                .help("Print the amino acids coded by each chain"),
        )
        .arg(
            Arg::new("eval")
                .long("eval")
                .value_name("DOTBRACKET")
                .help("Print the energy of the given structure"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase logging verbosity (-v, -vv, -vvv)"),
        )
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn energy_table(matches: &ArgMatches) -> Result<EnergyTable, Box<dyn Error>> {
    match matches.get_one::<String>("energy") {
        Some(path) => Ok(EnergyTable::from_json_file(path)?),
        None => Ok(EnergyTable::standard()),
    }
}

fn fold_config(matches: &ArgMatches) -> FoldConfig {
    let mut config = FoldConfig::default();
    if let Some(&m) = matches.get_one::<usize>("max-foldings") {
        config = config.with_max_foldings(m);
    }
    if let Some(&h) = matches.get_one::<usize>("min-hairpin") {
        config = config.with_min_hairpin(h);
    }
    config
}

fn indexer(matches: &ArgMatches) -> Result<Indexer, Box<dyn Error>> {
    let first: Sequence = matches
        .get_one::<String>("sequence")
        .map(String::as_str)
        .unwrap_or_default()
        .parse()?;
    Ok(match matches.get_one::<String>("second") {
        Some(s) => Indexer::Paired(first, s.parse()?),
        None => Indexer::Single(first),
    })
}

fn parse_structure(folder: &Folder, text: &str) -> Result<SecondaryStructure, Box<dyn Error>> {
    let dbv = DotBracketVec::try_from(text)?;
    if dbv.length() != folder.indexer().len() {
        return Err(format!(
            "Structure has {} positions, but the sequence has {}.",
            dbv.length(),
            folder.indexer().len()
        )
        .into());
    }
    Ok(SecondaryStructure::try_from(&dbv)?)
}

fn structure_line(folder: &Folder, structure: &SecondaryStructure) -> String {
    let energy = format!("{:>6}", folder.structure_energy(structure));
    format!("{} {}", folder.dot_bracket(structure), energy.green())
}

/// Everything the command prints, in order.
fn report(folder: &Folder, matches: &ArgMatches) -> Result<String, Box<dyn Error>> {
    let mut out = String::new();

    if matches.get_flag("matrix") {
        writeln!(out, "{}", folder.render_matrix(MATRIX_WIDTH))?;
    }

    let chains = match folder.indexer() {
        Indexer::Single(s) => s.to_string(),
        Indexer::Paired(a, b) => [a, b].iter().join("+"),
    };
    writeln!(out, "{}", chains.bold())?;
    if matches.get_flag("translate") {
        let protein = |s: &Sequence| s.translate().into_iter().map(AminoAcid::letter).collect::<String>();
        let proteins = match folder.indexer() {
            Indexer::Single(s) => protein(s),
            Indexer::Paired(a, b) => [protein(a), protein(b)].iter().join("+"),
        };
        writeln!(out, "{}", proteins.cyan())?;
    }
    writeln!(out, "{}", structure_line(folder, folder.find_in_depth()))?;

    if matches.get_flag("all") {
        let structures = folder.structures();
        if !structures.is_empty() && structures.len() == folder.config().max_foldings {
            warn!("Structure limit {} reached, more optimal structures may exist.", structures.len());
        }
        writeln!(out, "{}", format!("{} optimal structure(s):", structures.len()).bold())?;
        for structure in structures {
            writeln!(out, "{}", structure_line(folder, structure))?;
        }
    }

    if let Some(text) = matches.get_one::<String>("eval") {
        let structure = parse_structure(folder, text)?;
        writeln!(out, "{}", "Evaluated structure:".bold())?;
        writeln!(out, "{}", structure_line(folder, &structure))?;
    }
    Ok(out)
}

fn main() -> Result<(), Box<dyn Error>> {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let table = energy_table(&matches)?;
    let config = fold_config(&matches);
    let folder = Folder::new(indexer(&matches)?, &table, config)?;
    info!("Folding {} positions with {:?}.", folder.indexer().len(), config);

    print!("{}", report(&folder, &matches)?);
    Ok(())
}
