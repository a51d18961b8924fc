pub mod counting;
pub mod reading;
pub mod utils;
pub mod writing;

use std::error::Error;
use std::io::{self, Write};
use std::str::FromStr;

use indicatif::ProgressBar;
use rayon::prelude::*;

use covrs_core::errors::CovrsError;
use covrs_core::utils::FileType;

use self::counting::CoverageTracker;
use self::reading::{read_bam_spans, read_bed_spans, read_chrom_sizes};
use self::utils::{final_chromosomes, fragment_path};
use self::writing::{bedgraph_sink, combine_fragments, emit_bedgraph};

/// Main function
///
/// Collects read footprints from the input (bed, bed.gz or bam), counts
/// per-base coverage one chromosome at a time in a rayon thread pool, and
/// concatenates the per-chromosome bedGraph fragments into `output`
/// (gzip-compressed when the name ends in `.gz`).
///
/// Each worker owns its chromosome's tracker exclusively, so no
/// synchronization happens on the counting structures themselves.
pub fn depth_main(
    filepath: &str,
    filetype: &str,
    chromsizerefpath: Option<&str>,
    output: &str,
    num_threads: i32,
) -> Result<(), Box<dyn Error>> {
    // Determine Input File Type
    let input_filetype = FileType::from_str(filetype.to_lowercase().as_str());

    let (dict, spans_by_tid) = match input_filetype {
        Ok(FileType::BED) => {
            let chromsizerefpath = chromsizerefpath
                .ok_or("a chrom.sizes reference is required for bed input")?;
            let dict = read_chrom_sizes(chromsizerefpath)?;
            let spans_by_tid = read_bed_spans(filepath, &dict)?;
            (dict, spans_by_tid)
        }
        Ok(FileType::BAM) => read_bam_spans(filepath)?,
        _ => {
            return Err(Box::new(CovrsError::UnsupportedFileType(
                filetype.to_string(),
            )));
        }
    };

    let jobs = final_chromosomes(&dict, spans_by_tid);

    // Must create a Rayon thread pool in which to run our iterators
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads as usize)
        .build()?;

    let bar = ProgressBar::new(jobs.len() as u64);

    let results: Vec<io::Result<String>> = pool.install(|| {
        jobs.into_par_iter()
            .map(|job| {
                bar.inc(1);

                let mut tracker = CoverageTracker::new(job.region);
                for span in &job.spans {
                    tracker.add_span(*span);
                }

                let view = tracker.dense_view();
                let fragment = fragment_path(output, &job.name);
                let mut sink = bedgraph_sink(&fragment)?;
                emit_bedgraph(&view, tracker.region(), &job.name, &mut sink)?;
                sink.flush()?;
                Ok(fragment)
            })
            .collect()
    });
    bar.finish();

    // Fragments come back in tid order; concatenate them in that order.
    let mut fragments = Vec::with_capacity(results.len());
    for result in results {
        fragments.push(result?);
    }
    combine_fragments(&fragments, output)?;

    Ok(())
}
