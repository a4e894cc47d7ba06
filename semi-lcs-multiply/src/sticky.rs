use log::trace;
use semi_lcs_permutation::{Permutation, PermutationMatrix};

use crate::error::MultiplyError;
use crate::steady_ant::SteadyAnt;

/// Recursively computes the sticky (matrix) product of two sparse
/// permutations in `O(k log k)` (§4.4 StickyMultiply).
///
/// Splits `p` by its own median column and `q` by its own median row —
/// independently, with no shared pivot — recurses on both halves, and
/// lets [`SteadyAnt`] reconcile whatever the mismatched split boundaries
/// left wrong.
pub fn multiply_sparse(p: &Permutation, q: &Permutation) -> Permutation {
    if p.size() == 0 || q.size() == 0 {
        return Permutation::empty();
    }
    if p.size() == 1 && q.size() == 1 {
        let p_nonzero = p.rows_desc()[0];
        let q_nonzero = q.cols_asc()[0];
        return Permutation::single(p_nonzero.0, q_nonzero.0);
    }
    let (p_low, p_high) = p.split_col(None);
    let (q_low, q_high) = q.split_row(None);
    let r_low = multiply_sparse(&p_low, &q_low);
    let r_high = multiply_sparse(&p_high, &q_high);
    trace!("merging {} low and {} high elements", r_low.size(), r_high.size());
    SteadyAnt::new(&r_low, &r_high).restore_correct_product()
}

/// Sticky-multiplies two dense (sub)permutation matrices: `p`'s rows
/// stay the result's rows, `q`'s columns stay the result's columns, and
/// the shared inner dimension is contracted by composing the two
/// permutations (§4.1 PermutationStore "multiply").
pub fn sticky_multiply(
    p: &PermutationMatrix,
    q: &PermutationMatrix,
) -> Result<PermutationMatrix, MultiplyError> {
    if p.cols() != q.rows() {
        return Err(MultiplyError::ShapeMismatch { left_cols: p.cols(), right_rows: q.rows() });
    }
    let sparse_p = Permutation::from(p);
    let sparse_q = Permutation::from(q);
    let result = multiply_sparse(&sparse_p, &sparse_q);
    result
        .expand(p.rows(), q.cols())
        .map_err(|_| MultiplyError::ShapeMismatch { left_cols: p.cols(), right_rows: q.rows() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use semi_lcs_monge::MongeMatrix;
    use test_case::test_case;

    fn reference_tropical(p: &[u32], q: &[u32]) -> PermutationMatrix {
        let n = p.len() as u32;
        let dense_p = Permutation::from_dense(p).expand(n, n).unwrap();
        let dense_q = Permutation::from_dense(q).expand(n, n).unwrap();
        let monge_p = MongeMatrix::from_density(&dense_p);
        let monge_q = MongeMatrix::from_density(&dense_q);
        monge_p.tropical_multiply(&monge_q).unwrap().to_permutation().unwrap()
    }

    #[test_case(&[1], &[1])]
    #[test_case(&[2, 1], &[2, 1])]
    #[test_case(&[2, 1], &[1, 2])]
    #[test_case(&[1, 2], &[2, 1])]
    #[test_case(&[3, 1, 2], &[2, 3, 1])]
    #[test_case(&[4, 3, 2, 1], &[1, 2, 3, 4])]
    #[test_case(&[2, 4, 1, 3], &[3, 1, 4, 2])]
    fn test_sticky_matches_tropical_reference(p: &[u32], q: &[u32]) {
        let n = p.len() as u32;
        let dense_p = Permutation::from_dense(p).expand(n, n).unwrap();
        let dense_q = Permutation::from_dense(q).expand(n, n).unwrap();
        let fast = sticky_multiply(&dense_p, &dense_q).unwrap();
        let slow = reference_tropical(p, q);
        assert_eq!(fast.as_dense(), slow.as_dense());
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let p = Permutation::from_dense(&[1, 2]).expand(2, 2).unwrap();
        let q = Permutation::from_dense(&[1, 2, 3]).expand(3, 3).unwrap();
        assert!(sticky_multiply(&p, &q).is_err());
    }

    #[test]
    fn test_empty_operand_yields_empty_product() {
        let p = Permutation::empty().expand(0, 0).unwrap();
        let q = Permutation::empty().expand(0, 0).unwrap();
        let result = sticky_multiply(&p, &q).unwrap();
        assert_eq!(result.rows(), 0);
        assert_eq!(result.cols(), 0);
    }
}
