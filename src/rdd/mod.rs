//! Partitioned in-memory collections
//!
//! An [`Rdd`] is a list of partitions, each a vector of elements. Partitions
//! are only a unit of work here: [`Rdd::map`] processes them in parallel on
//! the rayon thread pool.

use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::error::{Error, Result};

/// Partitioned collection of elements
#[derive(Debug, Clone)]
pub struct Rdd<T> {
    partitions: Vec<Vec<T>>,
}

impl<T> Rdd<T> {
    pub(crate) fn from_partitions(partitions: Vec<Vec<T>>) -> Self {
        Rdd { partitions }
    }

    pub fn get_num_partitions(&self) -> usize {
        self.partitions.len()
    }

    /// Contents of each partition
    pub fn glom(&self) -> &[Vec<T>] {
        &self.partitions
    }

    /// Number of elements across all partitions
    pub fn count(&self) -> usize {
        self.partitions.iter().map(Vec::len).sum()
    }
}

impl<T: Clone> Rdd<T> {
    /// All elements in partition order
    pub fn collect(&self) -> Vec<T> {
        self.partitions.iter().flatten().cloned().collect()
    }
}

impl<T: Sync> Rdd<T> {
    /// Apply `f` to every element, one rayon task per partition
    pub fn map<U, F>(&self, f: F) -> Rdd<U>
    where
        U: Send,
        F: Fn(&T) -> U + Sync + Send,
    {
        let partitions = self
            .partitions
            .par_iter()
            .map(|p| p.iter().map(&f).collect::<Vec<U>>())
            .collect();
        Rdd { partitions }
    }
}

/// Split `data` into `num_slices` contiguous slices
///
/// Slice `i` covers `[i * len / n, (i + 1) * len / n)`, so slice sizes differ
/// by at most one and slices may be empty when `n > len`.
pub(crate) fn slice<T>(data: Vec<T>, num_slices: usize) -> Result<Vec<Vec<T>>> {
    if num_slices == 0 {
        return Err(Error::InvalidInput(
            "positive number of partitions required".to_string(),
        ));
    }
    let len = data.len();
    let mut iter = data.into_iter();
    let slices: Vec<Vec<T>> = (0..num_slices)
        .map(|i| {
            let start = i * len / num_slices;
            let end = (i + 1) * len / num_slices;
            iter.by_ref().take(end - start).collect()
        })
        .collect();
    Ok(slices)
}

/// Splits that may exceed the target size by this factor instead of leaving
/// a small tail split
const SPLIT_SLOP: f64 = 1.1;

/// Byte offset of each split start for a file of `total` bytes
///
/// Targets `total / min_partitions` bytes per split (at least one byte) and
/// folds a tail shorter than `SPLIT_SLOP` of a split into the last one, so a
/// file of at least `min_partitions` bytes never gets fewer splits.
fn split_starts(total: usize, min_partitions: usize) -> (usize, Vec<usize>) {
    let split_size = (total / min_partitions).max(1);
    let mut starts = Vec::new();
    let mut remaining = total;
    while remaining as f64 / split_size as f64 > SPLIT_SLOP {
        starts.push(total - remaining);
        remaining -= split_size;
    }
    if remaining > 0 {
        starts.push(total - remaining);
    }
    (split_size, starts)
}

/// Read a text file into line partitions
///
/// The file is cut into byte ranges (see [`split_starts`]) and each line
/// belongs to the range in which it starts. Ranges in which no line starts
/// still count as (empty) partitions. An empty file yields one empty
/// partition.
pub(crate) fn read_text_file(path: &Path, min_partitions: usize) -> Result<Vec<Vec<String>>> {
    let min_partitions = min_partitions.max(1);
    let content = fs::read_to_string(path)?;
    let total = content.len();
    if total == 0 {
        return Ok(vec![Vec::new()]);
    }

    let (split_size, starts) = split_starts(total, min_partitions);
    let num_splits = starts.len();
    let mut partitions: Vec<Vec<String>> = vec![Vec::new(); num_splits];

    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        let text = line.trim_end_matches('\n').trim_end_matches('\r');
        // every split but the last is exactly split_size bytes
        let split = (offset / split_size).min(num_splits - 1);
        partitions[split].push(text.to_string());
        offset += line.len();
    }
    log::debug!(
        "read {} byte(s) from {} into {} partition(s)",
        total,
        path.display(),
        num_splits
    );
    Ok(partitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_bounds() {
        let slices = slice((0..10).collect::<Vec<_>>(), 3).unwrap();
        assert_eq!(slices, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8, 9]]);

        let sparse = slice(vec![0, 20], 5).unwrap();
        assert_eq!(sparse.len(), 5);
        assert_eq!(sparse.iter().flatten().count(), 2);

        assert!(slice(vec![1], 0).is_err());
    }

    #[test]
    fn test_map_keeps_partitioning() {
        let rdd = Rdd::from_partitions(slice(vec![1, 2, 3, 4], 2).unwrap());
        let doubled = rdd.map(|x| x * 2);
        assert_eq!(doubled.get_num_partitions(), 2);
        assert_eq!(doubled.collect(), vec![2, 4, 6, 8]);
        assert_eq!(doubled.count(), 4);
    }

    #[test]
    fn test_split_starts_honor_min_partitions() {
        // 25 / 10 rounds down to 2-byte splits; the 1-byte tail stays separate
        let (size, starts) = split_starts(25, 10);
        assert_eq!(size, 2);
        assert_eq!(starts.len(), 13);
        assert_eq!(starts.last(), Some(&24));

        // a tail within 10% of a split is folded into the last one
        let (size, starts) = split_starts(101, 10);
        assert_eq!(size, 10);
        assert_eq!(starts.len(), 10);
        assert_eq!(starts.last(), Some(&90));

        let (_, starts) = split_starts(600, 10);
        assert_eq!(starts.len(), 10);

        // smaller than the requested count: one byte per split
        let (size, starts) = split_starts(3, 8);
        assert_eq!(size, 1);
        assert_eq!(starts, vec![0, 1, 2]);
    }
}
