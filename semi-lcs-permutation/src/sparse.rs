use crate::error::PermutationError;
use crate::matrix::PermutationMatrix;

/// A sparse (sub)permutation: a set of `(row, col)` pairs, each row and
/// column value occurring at most once, stored as two index-sorted views
/// (§3 Permutation (sparse)).
///
/// `rows` is sorted by row **descending**; `cols` is sorted by col
/// **ascending**. Both views always hold the same set of pairs.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Permutation {
    rows: Vec<(u32, u32)>,
    cols: Vec<(u32, u32)>,
}

impl Permutation {
    /// An empty permutation (no non-zero elements).
    pub fn empty() -> Self {
        Permutation { rows: Vec::new(), cols: Vec::new() }
    }

    /// Builds a permutation from its two pre-sorted views. Trusts the
    /// caller: `rows` must be sorted by row descending, `cols` by col
    /// ascending, and the two must describe the same set of pairs. This is
    /// the constructor `semi-lcs-multiply` uses to assemble Steady-Ant
    /// results, which already produce correctly-sorted output.
    pub fn from_sorted_parts(rows: Vec<(u32, u32)>, cols: Vec<(u32, u32)>) -> Self {
        debug_assert_eq!(rows.len(), cols.len());
        debug_assert!(rows.windows(2).all(|w| w[0].0 >= w[1].0));
        debug_assert!(cols.windows(2).all(|w| w[0].0 <= w[1].0));
        Permutation { rows, cols }
    }

    /// Builds a permutation of size one, `{(row, col)}`.
    pub fn single(row: u32, col: u32) -> Self {
        Permutation { rows: vec![(row, col)], cols: vec![(col, row)] }
    }

    /// Builds a permutation from a dense mapping vector: `mapping[i]` is
    /// the 1-based column for 1-based row `i + 1`, or `0` for an absent
    /// row. Mirrors the historical `Permutation(vector<unsigned>)`
    /// constructor in the original implementation.
    pub fn from_dense(mapping: &[u32]) -> Self {
        let mut rows = Vec::new();
        let mut col_owner = vec![0u32; mapping.len() + 1];
        for (i, &col) in mapping.iter().enumerate() {
            if col != 0 {
                let row = i as u32 + 1;
                rows.push((row, col));
                col_owner[col as usize] = row;
            }
        }
        rows.reverse();
        let mut cols = Vec::new();
        for (col, &row) in col_owner.iter().enumerate() {
            if row != 0 {
                cols.push((col as u32, row));
            }
        }
        Permutation { rows, cols }
    }

    /// The pairs sorted by row descending.
    pub fn rows_desc(&self) -> &[(u32, u32)] {
        &self.rows
    }

    /// The pairs sorted by col ascending.
    pub fn cols_asc(&self) -> &[(u32, u32)] {
        &self.cols
    }

    /// The number of non-zero pairs, `k`.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Splits the permutation by row: pairs with `row <= pivot` go left,
    /// `row > pivot` go right. With no pivot given, uses the median row
    /// present, at position `(k - 1) / 2` in `rows` (§4.1).
    pub fn split_row(&self, pivot: Option<u32>) -> (Permutation, Permutation) {
        let pivot = pivot.unwrap_or_else(|| self.rows[(self.rows.len() - 1) / 2].0);
        let (row_first, row_second): (Vec<_>, Vec<_>) =
            self.rows.iter().copied().partition(|&(r, _)| r <= pivot);
        let (col_first, col_second): (Vec<_>, Vec<_>) =
            self.cols.iter().copied().partition(|&(_, r)| r <= pivot);
        (
            Permutation { rows: row_first, cols: col_first },
            Permutation { rows: row_second, cols: col_second },
        )
    }

    /// Splits the permutation by column: pairs with `col <= pivot` go
    /// left, `col > pivot` go right. With no pivot given, uses the median
    /// col present, at position `(k - 1) / 2` in `cols` (§4.1).
    pub fn split_col(&self, pivot: Option<u32>) -> (Permutation, Permutation) {
        let pivot = pivot.unwrap_or_else(|| self.cols[(self.cols.len() - 1) / 2].0);
        let (row_first, row_second): (Vec<_>, Vec<_>) =
            self.rows.iter().copied().partition(|&(_, c)| c <= pivot);
        let (col_first, col_second): (Vec<_>, Vec<_>) =
            self.cols.iter().copied().partition(|&(c, _)| c <= pivot);
        (
            Permutation { rows: row_first, cols: col_first },
            Permutation { rows: row_second, cols: col_second },
        )
    }

    /// Builds the dense `PermutationMatrix` form with `row_amount` rows
    /// and `col_amount` columns.
    pub fn expand(
        &self,
        row_amount: u32,
        col_amount: u32,
    ) -> Result<PermutationMatrix, PermutationError> {
        let mut dense = vec![0u32; row_amount as usize];
        for &(row, col) in &self.rows {
            if row == 0 || row > row_amount || col == 0 || col > col_amount {
                return Err(PermutationError::ShapeMismatch { context: "Permutation::expand" });
            }
            dense[(row - 1) as usize] = col;
        }
        Ok(PermutationMatrix::from_dense_parts(row_amount, col_amount, dense))
    }

    /// Extends the permutation's rows and columns to `new_size`, adding an
    /// identity mapping at the front: every existing pair's row and column
    /// shift up by `new_size - current`, and the new low rows/columns map
    /// to themselves (§4.1 `grow_front`).
    pub fn grow_front(&mut self, new_size: u32) -> Result<(), PermutationError> {
        let current = self.max_row().max(self.max_col());
        if new_size <= current {
            return Err(PermutationError::GrowInvalid { requested: new_size, current });
        }
        let delta = new_size - current;
        for pair in self.rows.iter_mut() {
            pair.0 += delta;
            pair.1 += delta;
        }
        for pair in self.cols.iter_mut() {
            pair.0 += delta;
            pair.1 += delta;
        }
        let mut identity: Vec<(u32, u32)> = (1..=delta).map(|i| (i, i)).collect();
        self.rows.extend(identity.iter().copied());
        self.rows.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        identity.sort_unstable_by_key(|p| p.0);
        self.cols.extend(identity);
        self.cols.sort_unstable_by_key(|p| p.0);
        Ok(())
    }

    /// Extends the permutation's rows and columns to `new_size`, adding an
    /// identity mapping at the back: existing pairs are left unchanged,
    /// and the new high rows/columns map to themselves (§4.1 `grow_back`).
    pub fn grow_back(&mut self, new_size: u32) -> Result<(), PermutationError> {
        let current = self.max_row().max(self.max_col());
        if new_size <= current {
            return Err(PermutationError::GrowInvalid { requested: new_size, current });
        }
        let identity: Vec<(u32, u32)> = (current + 1..=new_size).map(|i| (i, i)).collect();
        self.rows.splice(0..0, identity.iter().copied());
        self.cols.extend(identity);
        Ok(())
    }

    fn max_row(&self) -> u32 {
        self.rows.first().map(|p| p.0).unwrap_or(0)
    }

    fn max_col(&self) -> u32 {
        self.cols.last().map(|p| p.0).unwrap_or(0)
    }
}

impl From<&PermutationMatrix> for Permutation {
    fn from(dense: &PermutationMatrix) -> Self {
        Permutation::from_dense(dense.as_dense())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_row_preserves_sort_order() {
        let p = Permutation::from_dense(&[3, 1, 4, 2]);
        let (lo, hi) = p.split_row(Some(2));
        assert!(lo.rows.windows(2).all(|w| w[0].0 >= w[1].0));
        assert!(hi.rows.windows(2).all(|w| w[0].0 >= w[1].0));
        assert_eq!(lo.size() + hi.size(), 4);
    }

    #[test]
    fn test_grow_back_then_front() {
        let mut p = Permutation::single(1, 1);
        p.grow_back(3).unwrap();
        assert_eq!(p.size(), 3);
        p.grow_front(5).unwrap();
        assert_eq!(p.size(), 5);
        assert!(p.grow_front(5).is_err());
    }

    #[test]
    fn test_dense_roundtrip() {
        let p = Permutation::from_dense(&[2, 0, 1]);
        let dense = p.expand(3, 2).unwrap();
        let back = Permutation::from(&dense);
        assert_eq!(p, back);
    }
}
