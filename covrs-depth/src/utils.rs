use fxhash::FxHashMap;

use covrs_core::models::{RefDict, Region};

use crate::counting::ReadSpan;

/// One chromosome's worth of work: the declared region, its display name,
/// and every read footprint collected for it.
pub struct ChromosomeJob {
    pub region: Region,
    pub name: String,
    pub spans: Vec<ReadSpan>,
}

/// Pair collected spans with their chromosome regions, in tid order.
///
/// Only chromosomes that both appear in the dictionary and received at
/// least one span are kept; spans for tids the dictionary does not know
/// are dropped.
pub fn final_chromosomes(
    dict: &RefDict,
    mut spans_by_tid: FxHashMap<i32, Vec<ReadSpan>>,
) -> Vec<ChromosomeJob> {
    let mut jobs: Vec<ChromosomeJob> = Vec::new();

    for (region, name) in dict.regions() {
        if let Some(spans) = spans_by_tid.remove(&region.tid) {
            if spans.is_empty() {
                continue;
            }
            jobs.push(ChromosomeJob {
                region,
                name: name.to_string(),
                spans,
            });
        }
    }

    jobs
}

/// Fragment file name for one chromosome's bedGraph output. Fragments are
/// written next to the final output and concatenated in tid order. A
/// trailing `.gz` on the output stays terminal so fragments are compressed
/// exactly when the combined file is.
pub fn fragment_path(output: &str, chrom_name: &str) -> String {
    match output.strip_suffix(".gz") {
        Some(base) => format!("{}.{}.part.gz", base, chrom_name),
        None => format!("{}.{}.part", output, chrom_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fragment_path_keeps_gz_terminal() {
        assert_eq!(
            fragment_path("out/coverage.bedGraph", "chr1"),
            "out/coverage.bedGraph.chr1.part"
        );
        assert_eq!(
            fragment_path("out/coverage.bedGraph.gz", "chr1"),
            "out/coverage.bedGraph.chr1.part.gz"
        );
    }

    #[test]
    fn test_final_chromosomes_keeps_tid_order_and_drops_unknowns() {
        let dict = RefDict::from_pairs(vec![
            ("chr1".to_string(), 100),
            ("chr2".to_string(), 50),
        ]);

        let mut spans_by_tid: FxHashMap<i32, Vec<ReadSpan>> = FxHashMap::default();
        spans_by_tid.insert(1, vec![ReadSpan::new(1, 0, 4)]);
        spans_by_tid.insert(0, vec![ReadSpan::new(0, 10, 19)]);
        spans_by_tid.insert(9, vec![ReadSpan::new(9, 0, 4)]); // not in dict

        let jobs = final_chromosomes(&dict, spans_by_tid);

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].name, "chr1");
        assert_eq!(jobs[0].region, Region::new(0, 0, 100));
        assert_eq!(jobs[1].name, "chr2");
    }
}
