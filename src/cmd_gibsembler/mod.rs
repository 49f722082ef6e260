//! Subcommand modules for the `gibsembler` binary.

use clap::*;
use gibsembler::libs::io::SeqFormat;
use gibsembler::libs::params::{Band, SegmentParams, Traversal};
use gibsembler::libs::tm::TmMethod;

pub mod segment;
pub mod stat;
pub mod window;

/// Window length, GC and Tm targets shared by `segment` and `window`
pub fn target_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("min_len")
            .long("min-len")
            .value_parser(value_parser!(usize))
            .default_value("20")
            .help("Minimum segment length"),
    )
    .arg(
        Arg::new("max_len")
            .long("max-len")
            .value_parser(value_parser!(usize))
            .default_value("50")
            .help("Maximum segment length"),
    )
    .arg(
        Arg::new("gc_min")
            .long("gc-min")
            .value_parser(value_parser!(f64))
            .default_value("40")
            .help("Minimum GC content (%)"),
    )
    .arg(
        Arg::new("gc_max")
            .long("gc-max")
            .value_parser(value_parser!(f64))
            .default_value("60")
            .help("Maximum GC content (%)"),
    )
    .arg(
        Arg::new("tm_min")
            .long("tm-min")
            .value_parser(value_parser!(f64))
            .default_value("57")
            .help("Minimum melting temperature (°C)"),
    )
    .arg(
        Arg::new("tm_max")
            .long("tm-max")
            .value_parser(value_parser!(f64))
            .default_value("60")
            .help("Maximum melting temperature (°C)"),
    )
    .arg(
        Arg::new("tm")
            .long("tm")
            .num_args(1)
            .default_value("wallace")
            .value_parser([
                builder::PossibleValue::new("wallace"),
                builder::PossibleValue::new("nn"),
            ])
            .help("Melting temperature estimate: Wallace rule or nearest-neighbor"),
    )
}

pub fn format_arg(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("format")
            .long("format")
            .num_args(1)
            .value_parser([
                builder::PossibleValue::new("fasta"),
                builder::PossibleValue::new("genbank"),
            ])
            .help("Input format. Detected from the file extension when omitted"),
    )
}

pub fn seq_format(args: &ArgMatches, infile: &str) -> anyhow::Result<SeqFormat> {
    match args.get_one::<String>("format") {
        Some(format) => format.parse(),
        None => Ok(SeqFormat::from_path(infile)),
    }
}

pub fn tm_method(args: &ArgMatches) -> anyhow::Result<TmMethod> {
    args.get_one::<String>("tm").unwrap().parse()
}

/// Reads the targets into `SegmentParams`; overlap and traversal options are
/// only read when the subcommand defines them
pub fn parse_params(args: &ArgMatches) -> anyhow::Result<SegmentParams> {
    let mut params = SegmentParams {
        min_length: *args.get_one::<usize>("min_len").unwrap(),
        max_length: *args.get_one::<usize>("max_len").unwrap(),
        target_gc: Band::new(
            *args.get_one::<f64>("gc_min").unwrap(),
            *args.get_one::<f64>("gc_max").unwrap(),
        ),
        target_tm: Band::new(
            *args.get_one::<f64>("tm_min").unwrap(),
            *args.get_one::<f64>("tm_max").unwrap(),
        ),
        ..Default::default()
    };

    if let Ok(Some(v)) = args.try_get_one::<usize>("overlap_min") {
        params.overlap_min = *v;
    }
    if let Ok(Some(v)) = args.try_get_one::<usize>("overlap_max") {
        params.overlap_max = *v;
    }
    if let Ok(Some(v)) = args.try_get_one::<usize>("max_iter") {
        params.max_iterations = *v;
    }
    if let Ok(Some(&true)) = args.try_get_one::<bool>("single_pass") {
        params.traversal = Traversal::SinglePass;
    }

    Ok(params)
}
