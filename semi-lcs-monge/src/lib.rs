//! The dense side of the Monge/permutation bijection (§4.2), plus the
//! tropical (min, +) reference multiplication used as a correctness oracle
//! for Steady-Ant sticky multiplication.

#![deny(missing_docs)]

mod error;

pub use error::MongeError;
use semi_lcs_permutation::PermutationMatrix;

/// A dense `(rows + 1) x (cols + 1)` non-negative integer matrix with the
/// simple subunit-Monge property: zero left column, zero bottom row, and a
/// cross-difference that is a 0/1 (sub)permutation density (§3
/// MongeMatrix).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MongeMatrix {
    rows: u32,
    cols: u32,
    matrix: Vec<Vec<u32>>,
}

impl MongeMatrix {
    /// Row count (density rows + 1).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Column count (density cols + 1).
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Queries element `M[x, y]`, 0-based.
    pub fn get(&self, x: u32, y: u32) -> Result<u32, MongeError> {
        if x >= self.rows || y >= self.cols {
            return Err(MongeError::OutOfRange { row: x, col: y });
        }
        Ok(self.matrix[x as usize][y as usize])
    }

    /// Builds the distribution-sum Monge matrix of a subpermutation's
    /// dense form (§4.2 "From permutation"). `density` has `R` rows and
    /// `C` columns; the result has `R + 1` rows and `C + 1` columns, with
    /// `M[R, ·] = M[·, 0] = 0` and
    /// `M[i-1, j] = D[i-1, j-1] + M[i-1, j-1] + M[i, j] - M[i, j-1]`.
    pub fn from_density(density: &PermutationMatrix) -> Self {
        let density_rows = density.rows();
        let density_cols = density.cols();
        let rows = density_rows + 1;
        let cols = density_cols + 1;
        let mut matrix = vec![vec![0u32; cols as usize]; rows as usize];
        let mut i = rows - 1;
        while i != 0 {
            for j in 1..cols {
                let d = density
                    .get(i - 1, j - 1)
                    .expect("i-1, j-1 within density bounds by loop construction");
                let d: u32 = if d { 1 } else { 0 };
                matrix[(i - 1) as usize][j as usize] = d
                    .wrapping_add(matrix[(i - 1) as usize][(j - 1) as usize])
                    .wrapping_add(matrix[i as usize][j as usize])
                    .wrapping_sub(matrix[i as usize][(j - 1) as usize]);
            }
            i -= 1;
        }
        MongeMatrix { rows, cols, matrix }
    }

    /// Computes the cross-difference (density) of `self` and verifies it
    /// is a 0/1 matrix with at most one 1 per row and per column,
    /// returning the equivalent dense subpermutation (§4.2 "To
    /// permutation"). Fails with [`MongeError::IllFormedMonge`] if `self`
    /// was not a genuine simple subunit-Monge matrix.
    pub fn to_permutation(&self) -> Result<PermutationMatrix, MongeError> {
        let density_rows = self.rows - 1;
        let density_cols = self.cols - 1;
        let mut mapping = vec![0u32; density_rows as usize];
        let mut col_used = vec![false; (density_cols + 1) as usize];
        for i in 1..=density_rows {
            for j in 1..=density_cols {
                let d = self.matrix[(i - 1) as usize][j as usize]
                    .wrapping_add(self.matrix[i as usize][(j - 1) as usize])
                    .wrapping_sub(self.matrix[i as usize][j as usize])
                    .wrapping_sub(self.matrix[(i - 1) as usize][(j - 1) as usize]);
                if d != 0 {
                    if d != 1 || mapping[(i - 1) as usize] != 0 || col_used[j as usize] {
                        return Err(MongeError::IllFormedMonge { row: i, col: j });
                    }
                    mapping[(i - 1) as usize] = j;
                    col_used[j as usize] = true;
                }
            }
        }
        Ok(PermutationMatrix::from_mapping(density_rows, density_cols, mapping))
    }

    /// Multiplies two Monge matrices in the tropical semiring:
    /// `(M . N)[i, k] = min_j (M[i, j] + N[j, k])`. Naive `O(R * C * K)`;
    /// used only as a correctness oracle for Steady-Ant sticky
    /// multiplication, never on the fast path (§4.2 "Tropical
    /// multiplication").
    pub fn tropical_multiply(&self, other: &MongeMatrix) -> Result<MongeMatrix, MongeError> {
        if self.cols != other.rows {
            return Err(MongeError::ShapeMismatch { left_cols: self.cols, right_rows: other.rows });
        }
        let mut result = vec![vec![0u32; other.cols as usize]; self.rows as usize];
        for i in 0..self.rows as usize {
            for k in 0..other.cols as usize {
                let mut best = self.matrix[i][0] + other.matrix[0][k];
                for j in 0..self.cols as usize {
                    let candidate = self.matrix[i][j] + other.matrix[j][k];
                    if candidate < best {
                        best = candidate;
                    }
                }
                result[i][k] = best;
            }
        }
        Ok(MongeMatrix { rows: self.rows, cols: other.cols, matrix: result })
    }
}
