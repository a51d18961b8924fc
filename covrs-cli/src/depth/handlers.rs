use clap::ArgMatches;

use covrs_depth::depth_main;

/// Matches items from CLAP args before running depth_main
pub fn run_depth(matches: &ArgMatches) {
    let filepath = matches
        .get_one::<String>("file")
        .expect("file path is required");

    let filetype = matches
        .get_one::<String>("filetype")
        .expect("file type is required");

    let chromsizerefpath = matches.get_one::<String>("chromref");

    let output = matches
        .get_one::<String>("output")
        .expect("output path is required");

    let num_threads = matches
        .get_one::<i32>("threads")
        .expect("requires integer value");

    depth_main(
        filepath,
        filetype,
        chromsizerefpath.map(|s| s.as_str()),
        output,
        *num_threads,
    )
    .expect("Depth failed.");
}
