use clap::{Arg, Command};

pub const DEPTH_CMD: &str = "depth";

/// Creates the depth CLI Command object
pub fn create_depth_cli() -> Command {
    Command::new(DEPTH_CMD)
        .about("Count per-base read coverage and write it as a bedGraph file")
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Path to the read footprints to count (bed, bed.gz or bam)")
                .required(true),
        )
        .arg(
            Arg::new("filetype")
                .long("filetype")
                .short('t')
                .help("Input file type, bed or bam")
                .required(true),
        )
        .arg(
            Arg::new("chromref")
                .long("chromref")
                .short('c')
                .help("Path to a chrom.sizes reference, required for bed input"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output bedGraph path; a .gz suffix compresses the output")
                .required(true),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .short('p')
                .value_parser(clap::value_parser!(i32))
                .default_value("1")
                .help("Number of chromosomes to process in parallel"),
        )
}
