use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fxhash::FxHashMap;
use noodles::bam;
use noodles::sam::alignment::Record as SamRecord;

use covrs_core::errors::CovrsError;
use covrs_core::models::RefDict;
use covrs_core::utils::{get_dynamic_reader, parse_bedlike_line};

use crate::counting::ReadSpan;

/// Read a chrom.sizes file (`name<TAB>length`, one reference per line)
/// into a reference dictionary, assigning tids in file order.
pub fn read_chrom_sizes(chrom_size_path: &str) -> Result<RefDict, CovrsError> {
    let chrom_size_file = File::open(Path::new(chrom_size_path))?;
    let reader = BufReader::new(chrom_size_file);

    let mut dict = RefDict::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let mut iter = line.split_whitespace();
        let chrom_name = iter
            .next()
            .ok_or_else(|| CovrsError::ChromSizesParseError(line.clone()))?;
        let size = iter
            .next()
            .and_then(|s| s.parse::<i32>().ok())
            .ok_or_else(|| CovrsError::ChromSizesParseError(line.clone()))?;

        dict.push(chrom_name.to_string(), size);
    }

    Ok(dict)
}

/// Read read footprints from a bed file (plain or gzipped), grouped by tid.
///
/// BED intervals are 0-based half-open; the stored footprint is the
/// inclusive `[start, end - 1]` range of covered bases. Lines naming a
/// chromosome absent from the dictionary are dropped. Lines with
/// unparseable coordinates become invalid spans, which the tracker later
/// ignores.
pub fn read_bed_spans(
    combinedbedpath: &str,
    dict: &RefDict,
) -> Result<FxHashMap<i32, Vec<ReadSpan>>, CovrsError> {
    let reader = get_dynamic_reader(Path::new(combinedbedpath))
        .map_err(|_| CovrsError::FileReadError(combinedbedpath.to_string()))?;

    let mut spans_by_tid: FxHashMap<i32, Vec<ReadSpan>> = FxHashMap::default();

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((chrom, start, end)) = parse_bedlike_line(&line) else {
            continue;
        };

        let Some(tid) = dict.tid(&chrom) else {
            continue;
        };

        spans_by_tid
            .entry(tid)
            .or_default()
            .push(ReadSpan::new(tid, start, end - 1));
    }

    Ok(spans_by_tid)
}

/// A wrapper around the noodles package to retrieve the reference
/// dictionary from a bam header.
pub fn read_bam_refdict(filepath: &str) -> Result<RefDict, CovrsError> {
    let mut reader = bam::io::reader::Builder
        .build_from_path(filepath)
        .map_err(|_| CovrsError::FileReadError(filepath.to_string()))?;
    let header = reader.read_header()?;

    Ok(refdict_from_header(&header))
}

/// Read all mapped records of a bam file into per-tid footprints, along
/// with the header's reference dictionary.
///
/// Alignment coordinates are converted from 1-based inclusive to the
/// 0-based inclusive footprints the tracker expects. Records without a
/// reference id or resolvable alignment span are skipped; a handful of
/// malformed records must not derail a pass over millions of reads.
pub fn read_bam_spans(
    filepath: &str,
) -> Result<(RefDict, FxHashMap<i32, Vec<ReadSpan>>), CovrsError> {
    let mut reader = bam::io::reader::Builder
        .build_from_path(filepath)
        .map_err(|_| CovrsError::FileReadError(filepath.to_string()))?;
    let header = reader.read_header()?;
    let dict = refdict_from_header(&header);

    let mut spans_by_tid: FxHashMap<i32, Vec<ReadSpan>> = FxHashMap::default();

    for result in reader.records() {
        let record = result?;

        let tid = match record.reference_sequence_id() {
            Some(Ok(id)) => id as i32,
            _ => continue,
        };
        let start = match record.alignment_start() {
            Some(Ok(position)) => position.get() as i32,
            _ => continue,
        };
        let end = match SamRecord::alignment_end(&record) {
            Some(Ok(position)) => position.get() as i32,
            _ => continue,
        };

        spans_by_tid
            .entry(tid)
            .or_default()
            .push(ReadSpan::new(tid, start - 1, end - 1));
    }

    Ok((dict, spans_by_tid))
}

fn refdict_from_header(header: &noodles::sam::Header) -> RefDict {
    let mut dict = RefDict::new();
    for (name, reference_sequence) in header.reference_sequences() {
        let length = usize::from(reference_sequence.length()) as i32;
        dict.push(name.to_string(), length);
    }
    dict
}
