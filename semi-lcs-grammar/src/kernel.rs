use std::collections::HashMap;

use log::debug;
use semi_lcs_multiply::multiply_sparse;
use semi_lcs_permutation::Permutation;
use semi_lcs_symbol::Symbol;

use crate::error::GrammarError;
use crate::rule::{GrammarRule, GrammarRuleSet};

/// Re-labels a permutation's row and column values to be contiguous
/// `{1..k}`, preserving relative order (§4.6 step 5). Keeps every
/// subsequent sticky multiplication linear in the number of non-zeroes
/// rather than in the (otherwise ever-growing) coordinate range.
fn compress(uncompressed: &Permutation) -> Permutation {
    let mut row_values: Vec<u32> = uncompressed.rows_desc().iter().map(|p| p.0).collect();
    let mut col_values: Vec<u32> = uncompressed.rows_desc().iter().map(|p| p.1).collect();
    col_values.sort_unstable();
    row_values.reverse();

    let mut row_compression = HashMap::with_capacity(row_values.len());
    for (i, &v) in row_values.iter().enumerate() {
        row_compression.insert(v, i as u32 + 1);
    }
    let mut col_compression = HashMap::with_capacity(col_values.len());
    for (i, &v) in col_values.iter().enumerate() {
        col_compression.insert(v, i as u32 + 1);
    }

    let compressed_rows: Vec<(u32, u32)> = uncompressed
        .rows_desc()
        .iter()
        .map(|&(r, c)| (row_compression[&r], col_compression[&c]))
        .collect();
    let compressed_cols: Vec<(u32, u32)> = uncompressed
        .cols_asc()
        .iter()
        .map(|&(c, r)| (col_compression[&c], row_compression[&r]))
        .collect();
    Permutation::from_sorted_parts(compressed_rows, compressed_cols)
}

/// Splits `p` into the part touching the left boundary (`rows <= left`)
/// and the rest, further pruned to `cols > right` (§4.6 step 2).
fn get_left(p: &Permutation, left: u32, right: u32) -> (Permutation, Permutation) {
    let (both, rest) = p.split_row(Some(left));
    let (_, main) = rest.split_col(Some(right));
    (both, main)
}

/// Splits `p` into the part touching the right boundary (`cols > right`)
/// and the rest, further pruned to `rows <= left` (§4.6 step 1).
fn get_right(p: &Permutation, left: u32, right: u32) -> (Permutation, Permutation) {
    let (rest, both) = p.split_col(Some(right));
    let (main, _) = rest.split_row(Some(left));
    (main, both)
}

/// Disjoint-unions three permutation pieces after shifting `both` and
/// `right` onto the merged coordinate system, then compresses (§4.6
/// step 4-5).
fn combine(
    left: Permutation,
    both: Permutation,
    right: Permutation,
    row_add: u32,
    col_add: u32,
) -> Permutation {
    let mut rows: Vec<(u32, u32)> = Vec::with_capacity(left.size() + both.size() + right.size());
    rows.extend_from_slice(left.rows_desc());
    rows.extend(both.rows_desc().iter().map(|&(r, c)| (r, c + col_add)));
    rows.extend(right.rows_desc().iter().map(|&(r, c)| (r + row_add, c + col_add)));
    rows.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    let mut cols: Vec<(u32, u32)> = Vec::with_capacity(left.size() + both.size() + right.size());
    cols.extend_from_slice(left.cols_asc());
    cols.extend(both.cols_asc().iter().map(|&(c, r)| (c + col_add, r)));
    cols.extend(right.cols_asc().iter().map(|&(c, r)| (c + col_add, r + row_add)));
    cols.sort_unstable_by_key(|p| p.0);

    compress(&Permutation::from_sorted_parts(rows, cols))
}

/// Builds the compressed kernel for pattern `p` against a single
/// character `c` (§4.6 terminal rule case): Variant B combing with
/// `n = 1`, recompressed.
fn calculate_char_kernel(p: &[Symbol], c: Symbol) -> Permutation {
    let m = p.len() as u32;
    let mut last_row = m;
    let mut last_col = vec![0u32; p.len()];
    for (i, &symbol) in p.iter().enumerate() {
        last_col[i] = m - i as u32 - 1;
        if symbol == c || last_col[i] > last_row {
            std::mem::swap(&mut last_col[i], &mut last_row);
        }
    }
    let from_top_to_bottom = last_row == m;
    last_col.push(last_row);
    let mut mapping = vec![0u32; p.len() + 1];
    for (i, &slot) in last_col.iter().enumerate() {
        mapping[slot as usize] = p.len() as u32 + 1 - i as u32;
    }
    if from_top_to_bottom {
        mapping.pop();
    }
    compress(&Permutation::from_dense(&mapping))
}

fn calculate_gc_kernel(
    calculated: &mut [Option<Permutation>],
    p: &[Symbol],
    rules: &GrammarRuleSet,
    index: u32,
) {
    if calculated[index as usize].is_some() {
        return;
    }
    match rules.rule(index) {
        GrammarRule::Terminal(c) => {
            calculated[index as usize] = Some(calculate_char_kernel(p, c));
        }
        GrammarRule::NonTerminal { left, right } => {
            if calculated[left as usize].is_none() {
                calculate_gc_kernel(calculated, p, rules, left);
            }
            if calculated[right as usize].is_none() {
                calculate_gc_kernel(calculated, p, rules, right);
            }
            let m = p.len() as u32;
            let left_kernel = calculated[left as usize]
                .as_ref()
                .expect("the preceding calculate_gc_kernel call always fills the left child's slot");
            let right_kernel = calculated[right as usize]
                .as_ref()
                .expect("the preceding calculate_gc_kernel call always fills the right child's slot");
            let left_expansion = left_kernel.size() as u32 - m;
            let right_expansion = right_kernel.size() as u32 - m;
            let (to_right_main, to_right_both) = get_right(left_kernel, m, left_expansion);
            let (from_left_both, from_left_main) = get_left(right_kernel, m, right_expansion);
            let intersection = multiply_sparse(&to_right_both, &from_left_both);
            debug!("merged rule {index}: {left_expansion} + {right_expansion} expansion");
            calculated[index as usize] =
                Some(combine(to_right_main, intersection, from_left_main, left_expansion, left_expansion));
        }
    }
}

/// The semi-local LCS kernel of a pattern against a grammar-compressed
/// text, built once by memoized recursion over the rule DAG (§4.6
/// GrammarKernel).
#[derive(Clone, Debug)]
pub struct GrammarKernel {
    kernel: Permutation,
    pattern_len: u32,
    text_len: u32,
    lcs: u32,
}

impl GrammarKernel {
    /// Builds the kernel for pattern `p` against the text described by
    /// `rules`, and the LCS length in the same pass.
    pub fn new(p: &[Symbol], rules: &GrammarRuleSet) -> Result<Self, GrammarError> {
        rules.validate()?;
        let mut calculated: Vec<Option<Permutation>> = vec![None; rules.len()];
        calculate_gc_kernel(&mut calculated, p, rules, rules.final_rule());
        let kernel = calculated[rules.final_rule() as usize]
            .take()
            .expect("calculate_gc_kernel always fills the final rule's slot");
        let pattern_len = p.len() as u32;
        let text_len = kernel.size() as u32 - pattern_len;
        let count_dominating = kernel
            .rows_desc()
            .iter()
            .filter(|&&(r, c)| r <= pattern_len && c > text_len)
            .count() as u32;
        let lcs = pattern_len - count_dominating;
        Ok(GrammarKernel { kernel, pattern_len, text_len, lcs })
    }

    /// The LCS length of the pattern against the grammar-compressed
    /// text.
    pub fn lcs(&self) -> u32 {
        self.lcs
    }

    /// Length of the pattern.
    pub fn pattern_len(&self) -> u32 {
        self.pattern_len
    }

    /// Length of the text the grammar expands to.
    pub fn text_len(&self) -> u32 {
        self.text_len
    }

    /// The root kernel permutation, on coordinates `{1..pattern_len +
    /// text_len}`.
    pub fn kernel(&self) -> &Permutation {
        &self.kernel
    }
}
