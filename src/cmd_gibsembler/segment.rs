use clap::*;
use gibsembler::libs::export::{self, ExportFormat};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("segment")
        .about("Splits a circular sequence into overlapping Gibson fragments")
        .after_help(
            r###"
This command reads one FASTA or GenBank record and walks it as a circular
molecule, choosing at each cursor the shortest window whose GC content and
melting temperature fall inside the targets. When no length qualifies, the
window whose Tm is closest to the middle of the Tm range is used.

Each segment ends with an overlap of clamp(length / 2, overlap-min, overlap-max)
bases, and the next segment starts at that overlap.

Output columns:
1. Segment Sequence  (the overlap is bracketed unless --plain)
2. Length
3. GC Content (%)
4. Tm (°C)
5. Overlap Sequence
6. Overlap Length

Notes:
* The input file must hold exactly one record. Supports .gz.
* GenBank is detected from .gb/.gbk/.genbank; everything else is FASTA.
* Output format follows the extension: .xlsx, .csv, otherwise TSV.
  Excel cells whose text contains the overlap are filled red.
* overlap-max must be less than min-len.
* The walk stops when the cursor returns to a start it has already used.
  --single-pass stops after the first segment that reaches the origin.
* If --max-iter is reached first, a warning is printed and the partial
  result is written. --strict turns this into an error.

Examples:
1. Default targets (20-50 bp, GC 40-60%, Tm 57-60 °C, overlap 10-15):
   gibsembler segment plasmid.gb

2. One lap around the plasmid, Excel output:
   gibsembler segment plasmid.fa --single-pass -o segments.xlsx

3. Nearest-neighbor Tm with relaxed GC:
   gibsembler segment plasmid.fa --tm nn --gc-min 30 --gc-max 70

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Input FASTA or GenBank file. [stdin] for screen"),
        )
        .arg(
            Arg::new("overlap_min")
                .long("overlap-min")
                .value_parser(value_parser!(usize))
                .default_value("10")
                .help("Minimum overlap length"),
        )
        .arg(
            Arg::new("overlap_max")
                .long("overlap-max")
                .value_parser(value_parser!(usize))
                .default_value("15")
                .help("Maximum overlap length"),
        )
        .arg(
            Arg::new("max_iter")
                .long("max-iter")
                .value_parser(value_parser!(usize))
                .default_value("10000")
                .help("Maximum number of segments before giving up"),
        )
        .arg(
            Arg::new("single_pass")
                .long("single-pass")
                .action(ArgAction::SetTrue)
                .help("Stop once a segment reaches the end of the sequence"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Fail instead of writing partial results when --max-iter is reached"),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .action(ArgAction::SetTrue)
                .help("Do not bracket the overlap in the segment column"),
        )
        .arg(
            Arg::new("out_format")
                .long("out-format")
                .num_args(1)
                .value_parser([
                    builder::PossibleValue::new("tsv"),
                    builder::PossibleValue::new("csv"),
                    builder::PossibleValue::new("xlsx"),
                ])
                .help("Output format. Detected from the output filename when omitted"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        );

    super::format_arg(super::target_args(cmd))
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let infile = args.get_one::<String>("infile").unwrap();
    let outfile = args.get_one::<String>("outfile").unwrap();
    let strict = args.get_flag("strict");
    let highlight = !args.get_flag("plain");

    let params = super::parse_params(args)?;
    params.validate()?;
    let tm = super::tm_method(args)?.strategy();

    let out_format = match args.get_one::<String>("out_format") {
        Some(f) => f.parse()?,
        None => ExportFormat::from_path(outfile),
    };

    //----------------------------
    // Process
    //----------------------------
    let record = gibsembler::read_single(infile, super::seq_format(args, infile)?)?;
    log::info!("Read {} ({} bp)", record.name, record.seq.len());

    let result = gibsembler::libs::segment::segment(&record.seq, &params, tm.as_ref())?
        .into_checked(strict)?;

    //----------------------------
    // Output
    //----------------------------
    export::export(outfile, out_format, &result.segments, highlight)?;

    Ok(())
}
