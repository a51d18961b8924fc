use std::fs::{File, OpenOptions, create_dir_all, remove_file};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use covrs_core::models::Region;

/// Walk a dense coverage view in position order and write maximal runs of
/// equal value as bedGraph records, `name\tstart\tend\tvalue`, half-open
/// and offset by the region start.
///
/// Every base of the region lands in exactly one record and adjacent
/// records never share a value. An unset region or an empty view writes
/// nothing.
pub fn emit_bedgraph<W: Write>(
    view: &[u32],
    region: &Region,
    chrom_name: &str,
    out: &mut W,
) -> io::Result<()> {
    if region.is_unset() || view.is_empty() {
        return Ok(());
    }

    let offset = region.start;
    let mut run_start: usize = 0;
    let mut run_value = view[0];

    for (i, &value) in view.iter().enumerate() {
        if value != run_value {
            writeln!(
                out,
                "{}\t{}\t{}\t{}",
                chrom_name,
                run_start as i32 + offset,
                i as i32 + offset,
                run_value
            )?;
            run_start = i;
            run_value = value;
        }
    }

    // The trailing run is never flushed by the scan above, since the last
    // value change (if any) reset run_value to match it.
    writeln!(
        out,
        "{}\t{}\t{}\t{}",
        chrom_name,
        run_start as i32 + offset,
        view.len() as i32 + offset,
        run_value
    )?;

    Ok(())
}

/// Open a bedGraph output sink at `filename`, gzip-compressing when the
/// name ends in `.gz`, and creating parent directories as needed.
pub fn bedgraph_sink(filename: &str) -> io::Result<Box<dyn Write + Send>> {
    if let Some(parent) = Path::new(filename).parent() {
        create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(filename)?;

    let sink: Box<dyn Write + Send> = if filename.ends_with(".gz") {
        Box::new(BufWriter::new(GzEncoder::new(file, Compression::default())))
    } else {
        Box::new(BufWriter::new(file))
    };

    Ok(sink)
}

/// Concatenate per-chromosome bedGraph fragments into the final output
/// file, removing each fragment once copied.
///
/// Fragments are copied byte-for-byte, so gzip-compressed fragments
/// concatenate into a valid multi-member gzip stream.
pub fn combine_fragments(fragments: &[String], output: &str) -> io::Result<()> {
    if let Some(parent) = Path::new(output).parent() {
        create_dir_all(parent)?;
    }

    let mut combined = OpenOptions::new().create(true).append(true).open(output)?;

    for fragment in fragments {
        let mut input = File::open(fragment)?;
        io::copy(&mut input, &mut combined)?;
        remove_file(Path::new(fragment))?;
    }

    Ok(())
}
