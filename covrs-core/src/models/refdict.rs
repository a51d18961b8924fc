use std::collections::HashMap;

use crate::models::region::Region;

///
/// Reference sequence dictionary: maps integer ids (tids) to chromosome
/// names and lengths, and names back to tids.
///
/// Ids are assigned in insertion order, so a dictionary built from a BAM
/// header reproduces the header's tid numbering.
///
#[derive(Debug, Clone, Default)]
pub struct RefDict {
    names: Vec<String>,
    lengths: Vec<i32>,
    by_name: HashMap<String, i32>,
}

impl RefDict {
    pub fn new() -> Self {
        RefDict::default()
    }

    /// Build a dictionary from (name, length) pairs in order.
    pub fn from_pairs(pairs: Vec<(String, i32)>) -> Self {
        let mut dict = RefDict::new();
        for (name, length) in pairs {
            dict.push(name, length);
        }
        dict
    }

    /// Append one reference sequence, returning its assigned tid.
    pub fn push(&mut self, name: String, length: i32) -> i32 {
        let tid = self.names.len() as i32;
        self.by_name.insert(name.clone(), tid);
        self.names.push(name);
        self.lengths.push(length);
        tid
    }

    pub fn name(&self, tid: i32) -> Option<&str> {
        usize::try_from(tid)
            .ok()
            .and_then(|i| self.names.get(i))
            .map(|s| s.as_str())
    }

    pub fn length(&self, tid: i32) -> Option<i32> {
        usize::try_from(tid)
            .ok()
            .and_then(|i| self.lengths.get(i))
            .copied()
    }

    pub fn tid(&self, name: &str) -> Option<i32> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whole-chromosome regions in tid order, paired with their names.
    pub fn regions(&self) -> impl Iterator<Item = (Region, &str)> + '_ {
        self.names.iter().enumerate().map(|(i, name)| {
            (
                Region::new(i as i32, 0, self.lengths[i]),
                name.as_str(),
            )
        })
    }
}
