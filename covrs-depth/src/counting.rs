use std::fmt::{self, Display};
use std::io::{self, Write};

use fxhash::FxHashMap;

use covrs_core::models::Region;

/// One aligned read's footprint on the reference.
///
/// Both ends are inclusive, matching what an aligner reports for the first
/// and last reference base consumed by the alignment. Coordinates may be
/// negative when the read was unmapped or the record malformed; such spans
/// are ignored by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadSpan {
    pub tid: i32,
    pub start: i32,
    pub end: i32,
}

impl ReadSpan {
    pub fn new(tid: i32, start: i32, end: i32) -> Self {
        ReadSpan { tid, start, end }
    }
}

type PositionCounts = FxHashMap<i32, u32>;

/// Accumulates per-base read coverage for one declared region.
///
/// Counts live in a sparse map keyed by tid and absolute position, created
/// lazily on first touch. The dense per-base vector consumed by the
/// bedGraph emitter is materialized on demand by [`dense_view`], never
/// maintained during ingestion.
///
/// Positions on the declared region's chromosome that fall outside the
/// region are skipped with a diagnostic rather than counted; spans on
/// other chromosomes accumulate freely and are visible to point queries
/// only.
///
/// [`dense_view`]: CoverageTracker::dense_view
pub struct CoverageTracker {
    region: Region,
    counts: FxHashMap<i32, PositionCounts>,
    diagnostics: Box<dyn Write + Send>,
}

impl CoverageTracker {
    /// Track coverage over `region`, reporting diagnostics to stderr.
    pub fn new(region: Region) -> Self {
        CoverageTracker::with_diagnostics(region, Box::new(io::stderr()))
    }

    /// Track coverage over `region` with a caller-supplied diagnostic sink,
    /// so tests can capture diagnostics without touching process streams.
    pub fn with_diagnostics(region: Region, diagnostics: Box<dyn Write + Send>) -> Self {
        CoverageTracker {
            region,
            counts: FxHashMap::default(),
            diagnostics,
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Ingest one read footprint, incrementing the count at every base of
    /// `[span.start, span.end]`.
    ///
    /// A span with a negative coordinate is treated as nothing to ingest.
    /// A reversed span (`start > end`) increments nothing. Positions on the
    /// tracked chromosome outside the declared region are skipped and
    /// reported once per span; the span's in-bounds positions still count.
    pub fn add_span(&mut self, span: ReadSpan) {
        if span.start < 0 || span.end < 0 {
            return;
        }

        let bounded = !self.region.is_unset() && span.tid == self.region.tid;
        let mut reported = false;

        let chrom_counts = self.counts.entry(span.tid).or_default();
        for pos in span.start..=span.end {
            if bounded && !self.region.contains(pos) {
                if !reported {
                    let _ = writeln!(
                        self.diagnostics,
                        "position {} on tid {} is outside the declared region of size {} -- skipping",
                        pos,
                        span.tid,
                        self.region.width()
                    );
                    reported = true;
                }
                continue;
            }
            *chrom_counts.entry(pos).or_insert(0) += 1;
        }
    }

    /// Coverage at one exact base, 0 for anything never touched.
    ///
    /// Deliberately permissive: no validation against the declared region,
    /// any (tid, position) pair may be queried.
    pub fn coverage_at(&self, tid: i32, pos: i32) -> u32 {
        self.counts
            .get(&tid)
            .and_then(|chrom_counts| chrom_counts.get(&pos))
            .copied()
            .unwrap_or(0)
    }

    /// Materialize the dense per-base vector over the declared region,
    /// index 0 corresponding to `region.start`. Empty for an unset region.
    pub fn dense_view(&self) -> Vec<u32> {
        if self.region.is_unset() || self.region.width() <= 0 {
            return Vec::new();
        }

        let mut view = vec![0u32; self.region.width() as usize];
        if let Some(chrom_counts) = self.counts.get(&self.region.tid) {
            for (&pos, &count) in chrom_counts {
                if self.region.contains(pos) {
                    view[(pos - self.region.start) as usize] = count;
                }
            }
        }
        view
    }

    /// Number of distinct positions touched on the tracked chromosome.
    pub fn touched_positions(&self) -> usize {
        self.counts
            .get(&self.region.tid)
            .map_or(0, |chrom_counts| chrom_counts.len())
    }
}

impl Display for CoverageTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "region {} with {} touched positions",
            self.region,
            self.touched_positions()
        )
    }
}
