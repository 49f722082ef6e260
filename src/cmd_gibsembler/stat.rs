use clap::*;
use gibsembler::libs::nt;
use gibsembler::libs::tm::{NearestNeighbor, TmStrategy, Wallace};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("stat")
        .about("Reports length, GC content and Tm of each record")
        .after_help(
            r###"
This command prints one TSV row per record:

    #seq  len  gc  tm_wallace  tm_nn

It is meant for short pieces such as candidate fragments or overlaps; the
estimates are computed over the whole record.

Examples:
1. Statistics of a fragment list:
   gibsembler stat fragments.fa

2. GenBank input:
   gibsembler stat plasmid.gb -o stat.tsv

"###,
        )
        .arg(
            Arg::new("infiles")
                .required(true)
                .num_args(1..)
                .index(1)
                .help("Input FASTA or GenBank file(s) to process"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        );

    super::format_arg(cmd)
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = gibsembler::writer(args.get_one::<String>("outfile").unwrap())?;
    let nn = NearestNeighbor::default();

    writer.write_fmt(format_args!("#seq\tlen\tgc\ttm_wallace\ttm_nn\n"))?;

    for infile in args.get_many::<String>("infiles").unwrap() {
        let format = super::seq_format(args, infile)?;
        for record in gibsembler::read_records(infile, format)? {
            writer.write_fmt(format_args!(
                "{}\t{}\t{:.2}\t{:.2}\t{:.2}\n",
                record.name,
                record.seq.len(),
                nt::gc_content(&record.seq),
                Wallace.compute_tm(&record.seq),
                nn.compute_tm(&record.seq),
            ))?;
        }
    }

    Ok(())
}
