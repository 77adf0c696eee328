//! Row layout of the result list.
//!
//! Every result occupies one header row. The expanded result adds detail
//! rows: year, type, and the poster URL when one exists.

use crate::model::{ImdbId, MovieSummary};

/// Rows taken by `movie` when collapsed or expanded.
pub fn entry_height(movie: &MovieSummary, expanded: bool) -> usize {
    if !expanded {
        return 1;
    }
    let poster_rows = usize::from(movie.poster().url().is_some());
    1 + 2 + poster_rows
}

/// Cumulative row positions of all results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListLayout {
    tops: Vec<usize>,
    heights: Vec<usize>,
    total_height: usize,
}

impl ListLayout {
    /// Lay out `movies` with the item `expanded` (if any) opened.
    pub fn compute(movies: &[MovieSummary], expanded: Option<&ImdbId>) -> Self {
        let mut tops = Vec::with_capacity(movies.len());
        let mut heights = Vec::with_capacity(movies.len());
        let mut y = 0;

        for movie in movies {
            let height = entry_height(movie, expanded == Some(movie.imdb_id()));
            tops.push(y);
            heights.push(height);
            y += height;
        }

        Self {
            tops,
            heights,
            total_height: y,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.tops.len()
    }

    /// Whether the layout has no entries.
    pub fn is_empty(&self) -> bool {
        self.tops.is_empty()
    }

    /// Total rows.
    pub fn total_height(&self) -> usize {
        self.total_height
    }

    /// First row of entry `index`.
    pub fn entry_top(&self, index: usize) -> Option<usize> {
        self.tops.get(index).copied()
    }

    /// Rows of entry `index`.
    pub fn entry_height(&self, index: usize) -> Option<usize> {
        self.heights.get(index).copied()
    }

    /// Entry covering absolute `row`, with the row offset inside it.
    pub fn entry_at_row(&self, row: usize) -> Option<(usize, usize)> {
        if row >= self.total_height {
            return None;
        }
        // Last entry whose top is <= row
        let index = self.tops.partition_point(|&top| top <= row).checked_sub(1)?;
        Some((index, row - self.tops[index]))
    }
}
