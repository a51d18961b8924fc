mod depth;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "covrs";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Track per-base read coverage over genomic regions and export it as bedGraph.")
        .subcommand_required(true)
        .subcommand(depth::cli::create_depth_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // DEPTH
        //
        Some((depth::cli::DEPTH_CMD, matches)) => {
            depth::handlers::run_depth(matches);
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
