use semi_lcs_permutation::Permutation;

/// Reconciles two recursively-computed sticky products `low` and `high`
/// into the correct product of the undivided operands (§4.3 SteadyAnt).
///
/// `low` holds the elements visible below-right of the ant's diagonal,
/// `high` the elements visible above-left. Both halves were computed
/// against independently-chosen split pivots, so in general each carries
/// a handful of elements the merge must discard; the ant scan walks the
/// diagonal once, in `O(k)`, to tell good elements from bad and recover
/// exactly the `k` entries of the true product.
pub(crate) struct SteadyAnt<'a> {
    low: &'a Permutation,
    high: &'a Permutation,
    // `rows_desc()` is sorted row-descending; counting a position down
    // from `len` to `0` and reading `rows_desc()[pos - 1]` walks it in
    // ascending row order, mirroring a reverse iterator over a
    // descending vector.
    low_row_pos: usize,
    high_row_pos: usize,
    // `cols_asc()` is already ascending; plain forward indices suffice.
    low_col_pos: usize,
    high_col_pos: usize,
    ant_row: u32,
    ant_col: u32,
    min_row: u32,
    max_col: u32,
    good_row: Vec<(u32, u32)>,
    good_col: Vec<(u32, u32)>,
}

impl<'a> SteadyAnt<'a> {
    pub(crate) fn new(low: &'a Permutation, high: &'a Permutation) -> Self {
        let low_rows = low.rows_desc();
        let high_rows = high.rows_desc();
        let low_cols = low.cols_asc();
        let high_cols = high.cols_asc();
        let min_row = low_rows
            .first()
            .map(|p| p.0)
            .unwrap_or(1)
            .min(high_rows.first().map(|p| p.0).unwrap_or(1))
            - 1;
        let max_col = low_cols
            .last()
            .map(|p| p.0)
            .unwrap_or(1)
            .max(high_cols.last().map(|p| p.0).unwrap_or(1))
            + 1;
        SteadyAnt {
            low,
            high,
            low_row_pos: low_rows.len(),
            high_row_pos: high_rows.len(),
            low_col_pos: 0,
            high_col_pos: 0,
            ant_row: 0,
            ant_col: 0,
            min_row,
            max_col,
            good_row: Vec::new(),
            good_col: Vec::new(),
        }
    }

    fn low_row_ended(&self) -> bool {
        self.low_row_pos == 0
    }

    fn high_row_ended(&self) -> bool {
        self.high_row_pos == 0
    }

    fn low_row_cur(&self) -> (u32, u32) {
        self.low.rows_desc()[self.low_row_pos - 1]
    }

    fn high_row_cur(&self) -> (u32, u32) {
        self.high.rows_desc()[self.high_row_pos - 1]
    }

    fn low_col_ended(&self) -> bool {
        self.low_col_pos == self.low.cols_asc().len()
    }

    fn high_col_ended(&self) -> bool {
        self.high_col_pos == self.high.cols_asc().len()
    }

    fn low_col_cur(&self) -> (u32, u32) {
        self.low.cols_asc()[self.low_col_pos]
    }

    fn high_col_cur(&self) -> (u32, u32) {
        self.high.cols_asc()[self.high_col_pos]
    }

    fn have_rows_ended(&self) -> bool {
        self.low_row_ended() && self.high_row_ended()
    }

    fn have_cols_ended(&self) -> bool {
        self.low_col_ended() && self.high_col_ended()
    }

    fn can_move_up(&self) -> bool {
        let mut h = self.high_row_pos;
        while h > 0 && self.high.rows_desc()[h - 1].0 == self.ant_row {
            if self.high.rows_desc()[h - 1].1 < self.ant_col {
                return false;
            }
            h -= 1;
        }
        let mut l = self.low_row_pos;
        while l > 0 && self.low.rows_desc()[l - 1].0 == self.ant_row {
            if self.low.rows_desc()[l - 1].1 >= self.ant_col {
                return false;
            }
            l -= 1;
        }
        !self.have_rows_ended()
    }

    fn can_move_right(&self) -> bool {
        let high_cols = self.high.cols_asc();
        let mut h = self.high_col_pos;
        while h < high_cols.len() && high_cols[h].0 == self.ant_col {
            if high_cols[h].1 <= self.ant_row {
                return false;
            }
            h += 1;
        }
        let low_cols = self.low.cols_asc();
        let mut l = self.low_col_pos;
        while l < low_cols.len() && low_cols[l].0 == self.ant_col {
            if low_cols[l].1 > self.ant_row {
                return false;
            }
            l += 1;
        }
        !self.have_cols_ended()
    }

    fn move_up(&mut self) {
        while !self.high_row_ended() && self.high_row_cur().0 == self.ant_row {
            let pair = self.high_row_cur();
            if pair.1 >= self.ant_col {
                self.good_row.push(pair);
            }
            self.high_row_pos -= 1;
        }
        while !self.low_row_ended() && self.low_row_cur().0 == self.ant_row {
            let pair = self.low_row_cur();
            if pair.1 < self.ant_col {
                self.good_row.push(pair);
            }
            self.low_row_pos -= 1;
        }
        self.ant_row = self.get_next_row();
    }

    fn move_right(&mut self) {
        while !self.high_col_ended() && self.high_col_cur().0 == self.ant_col {
            let pair = self.high_col_cur();
            if pair.1 > self.ant_row {
                self.good_col.push(pair);
            }
            self.high_col_pos += 1;
        }
        while !self.low_col_ended() && self.low_col_cur().0 == self.ant_col {
            let pair = self.low_col_cur();
            if pair.1 <= self.ant_row {
                self.good_col.push(pair);
            }
            self.low_col_pos += 1;
        }
        self.ant_col = self.get_next_col();
    }

    fn get_next_row(&self) -> u32 {
        let low = if self.low_row_ended() { self.min_row } else { self.low_row_cur().0 };
        let high = if self.high_row_ended() { self.min_row } else { self.high_row_cur().0 };
        low.max(high)
    }

    fn get_next_col(&self) -> u32 {
        let low = if self.low_col_ended() { self.max_col } else { self.low_col_cur().0 };
        let high = if self.high_col_ended() { self.max_col } else { self.high_col_cur().0 };
        low.min(high)
    }

    /// Runs the scan and returns the reconciled product permutation.
    pub(crate) fn restore_correct_product(mut self) -> Permutation {
        self.ant_row = self.get_next_row();
        self.ant_col = self.get_next_col();
        while !self.have_rows_ended() || !self.have_cols_ended() {
            if self.can_move_up() {
                self.move_up();
            } else if self.can_move_right() {
                self.move_right();
            } else {
                self.good_row.push((self.ant_row, self.ant_col));
                self.good_col.push((self.ant_col, self.ant_row));
                self.move_up();
                self.move_right();
            }
        }
        self.good_row.reverse();
        Permutation::from_sorted_parts(self.good_row, self.good_col)
    }
}
