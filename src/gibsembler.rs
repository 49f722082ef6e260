extern crate clap;
use clap::*;

mod cmd_gibsembler;

fn main() -> anyhow::Result<()> {
    let app = Command::new("gibsembler")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`gibsembler` - Segment plasmids for Gibson Assembly")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true)
                .help("Log progress to stderr; repeat for more detail"),
        )
        .subcommand(cmd_gibsembler::segment::make_subcommand())
        .subcommand(cmd_gibsembler::window::make_subcommand())
        .subcommand(cmd_gibsembler::stat::make_subcommand())
        .after_help(
            r###"Subcommands:

* segment - Split a circular sequence into overlapping fragments
* window  - Optimize a single window at a given start
* stat    - Length, GC content and Tm of each record

Logging goes to stderr. `-v` shows summaries, `-vv` every segment.
RUST_LOG overrides both.

"###,
        );

    let matches = app.get_matches();

    let level = match matches.get_count("verbose") {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    // Check which subcomamnd the user ran...
    match matches.subcommand() {
        Some(("segment", sub_matches)) => cmd_gibsembler::segment::execute(sub_matches),
        Some(("window", sub_matches)) => cmd_gibsembler::window::execute(sub_matches),
        Some(("stat", sub_matches)) => cmd_gibsembler::stat::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
