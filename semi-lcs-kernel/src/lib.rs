//! The plain-string semi-local LCS kernel: build once from two strings,
//! then answer all four semi-local queries in O(1) (§4.5 LCSKernel).

#![deny(missing_docs)]

mod error;

pub mod comb;
pub mod recursive;

pub use comb::comb_kernel;
pub use error::KernelError;
pub use recursive::calculate_kernel;

use log::debug;
use semi_lcs_monge::MongeMatrix;
use semi_lcs_permutation::PermutationMatrix;
use semi_lcs_symbol::Symbol;

/// The semi-local LCS kernel of two strings `a` and `b`: their kernel
/// permutation, expanded, plus its precomputed distribution-sum.
#[derive(Clone, Debug)]
pub struct LCSKernel {
    a_len: u32,
    b_len: u32,
    kernel: PermutationMatrix,
    kernel_sum: MongeMatrix,
}

impl LCSKernel {
    /// Builds the kernel for `a` against `b` by recursive halving
    /// (Variant A).
    pub fn new(a: &[Symbol], b: &[Symbol]) -> Self {
        let a_len = a.len() as u32;
        let b_len = b.len() as u32;
        let sum_length = a_len + b_len;
        let permutation = calculate_kernel(a, b, 0, a_len, 0, b_len);
        let kernel = permutation
            .expand(sum_length, sum_length)
            .expect("a kernel of a+b strands always fits the combined boundary");
        debug!("built LCS kernel for strings of length {a_len} and {b_len}");
        let kernel_sum = MongeMatrix::from_density(&kernel);
        LCSKernel { a_len, b_len, kernel, kernel_sum }
    }

    /// Length of `a`.
    pub fn a_len(&self) -> u32 {
        self.a_len
    }

    /// Length of `b`.
    pub fn b_len(&self) -> u32 {
        self.b_len
    }

    /// The underlying kernel permutation, expanded to `(a_len + b_len)
    /// x (a_len + b_len)`.
    pub fn kernel(&self) -> &PermutationMatrix {
        &self.kernel
    }

    fn check(&self, what: &'static str, value: u32, bound: u32) -> Result<(), KernelError> {
        if value > bound {
            return Err(KernelError::OutOfRange { what, value, bound });
        }
        Ok(())
    }

    /// LCS of all of `a` against `b[l..r]`.
    pub fn lcs_whole_a(&self, l: u32, r: u32) -> Result<u32, KernelError> {
        self.check("l", l, r)?;
        self.check("r", r, self.b_len)?;
        Ok((r - l) - self.kernel_sum.get(l + self.a_len, r).expect("in range by construction"))
    }

    /// LCS of `a[a_l..a_r]` against all of `b`.
    pub fn lcs_whole_b(&self, a_l: u32, a_r: u32) -> Result<u32, KernelError> {
        self.check("a_l", a_l, a_r)?;
        self.check("a_r", a_r, self.a_len)?;
        let h = self
            .kernel_sum
            .get(self.a_len - a_l, self.a_len + self.b_len - a_r)
            .expect("in range by construction");
        Ok(self.b_len - h)
    }

    /// LCS of the suffix of `a` starting at `a_l` against the prefix of
    /// `b` ending at `b_r`.
    pub fn lcs_suffix_a_prefix_b(&self, a_l: u32, b_r: u32) -> Result<u32, KernelError> {
        self.check("a_l", a_l, self.a_len)?;
        self.check("b_r", b_r, self.b_len)?;
        let h = self.kernel_sum.get(self.a_len - a_l, b_r).expect("in range by construction");
        Ok(b_r - h)
    }

    /// LCS of the prefix of `a` ending at `a_r` against the suffix of
    /// `b` starting at `b_l`.
    pub fn lcs_prefix_a_suffix_b(&self, a_r: u32, b_l: u32) -> Result<u32, KernelError> {
        self.check("a_r", a_r, self.a_len)?;
        self.check("b_l", b_l, self.b_len)?;
        let h = self
            .kernel_sum
            .get(b_l + self.a_len, self.a_len + self.b_len - a_r)
            .expect("in range by construction");
        Ok(self.b_len - b_l - h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn symbols(s: &str) -> Vec<Symbol> {
        s.bytes().map(Symbol::from).collect()
    }

    #[test_case("A", "A", 1)]
    #[test_case("A", "B", 0)]
    #[test_case("ABCBDAB", "BDCABA", 4)]
    fn test_lcs_whole_a_whole_b_matches_known_length(a: &str, b: &str, expected: u32) {
        let a = symbols(a);
        let b = symbols(b);
        let kernel = LCSKernel::new(&a, &b);
        assert_eq!(kernel.lcs_whole_a(0, kernel.b_len()).unwrap(), expected);
        assert_eq!(kernel.lcs_whole_b(0, kernel.a_len()).unwrap(), expected);
    }

    #[test]
    fn test_out_of_range_query_is_rejected() {
        let a = symbols("AB");
        let b = symbols("AB");
        let kernel = LCSKernel::new(&a, &b);
        assert!(kernel.lcs_whole_a(0, 5).is_err());
        assert!(kernel.lcs_whole_a(3, 1).is_err());
    }

    #[test]
    fn test_suffix_prefix_queries_are_consistent_with_whole_queries() {
        let a = symbols("BAABCBCA");
        let b = symbols("BAABCABCABACA");
        let kernel = LCSKernel::new(&a, &b);
        assert_eq!(
            kernel.lcs_suffix_a_prefix_b(0, kernel.b_len()).unwrap(),
            kernel.lcs_whole_a(0, kernel.b_len()).unwrap(),
        );
        assert_eq!(
            kernel.lcs_prefix_a_suffix_b(kernel.a_len(), 0).unwrap(),
            kernel.lcs_whole_a(0, kernel.b_len()).unwrap(),
        );
    }
}
