use clap::*;
use gibsembler::libs::circular::CircularSeq;
use gibsembler::libs::window::WindowOptimizer;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("window")
        .about("Optimizes a single window at a given start")
        .after_help(
            r###"
This command runs the window search used by `segment` once, at --start,
and prints the chosen window as a TSV row:

    start  length  gc  tm  qualified  sequence

`qualified` is `yes` when both GC and Tm are inside their targets, `no` when
the closest-Tm fallback was used. The sequence is read circularly.

Examples:
1. Window at the origin:
   gibsembler window plasmid.fa

2. Window at base 1201 (0-based 1200) with a wider length range:
   gibsembler window plasmid.gb --start 1200 --min-len 30 --max-len 80

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Input FASTA or GenBank file. [stdin] for screen"),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .short('s')
                .value_parser(value_parser!(usize))
                .default_value("0")
                .help("0-based start position"),
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
    let infile = args.get_one::<String>("infile").unwrap();
    let start = *args.get_one::<usize>("start").unwrap();
    let mut writer = gibsembler::writer(args.get_one::<String>("outfile").unwrap())?;

    let params = super::parse_params(args)?;
    let tm = super::tm_method(args)?.strategy();

    let record = gibsembler::read_single(infile, super::seq_format(args, infile)?)?;
    let seq = CircularSeq::new(&record.seq);

    let optimizer = WindowOptimizer::from_params(&params, tm.as_ref());
    let window = optimizer.optimize(&seq, start)?;

    let qualified =
        params.target_gc.contains(window.gc) && params.target_tm.contains(window.tm);

    writer.write_fmt(format_args!(
        "{}\t{}\t{:.2}\t{:.2}\t{}\t{}\n",
        start,
        window.length,
        window.gc,
        window.tm,
        if qualified { "yes" } else { "no" },
        String::from_utf8_lossy(&window.sequence),
    ))?;

    Ok(())
}
