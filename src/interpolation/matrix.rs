use std::sync::OnceLock;

use nalgebra::SMatrix;

use crate::constants::{STENCIL_HALF_WIDTH, STENCIL_SIZE};

/// Maps the 9 samples of one window to the 9 monomial coefficients
/// of the degree-8 polynomial running through them.
pub type TransformMatrix = SMatrix<f64, STENCIL_SIZE, STENCIL_SIZE>;

static TRANSFORM: OnceLock<TransformMatrix> = OnceLock::new();

/// Normalized abscissa of the nth sample of a window, within -4..=4
pub(crate) fn abscissa(nth: usize) -> f64 {
    nth as f64 - STENCIL_HALF_WIDTH as f64
}

/// Monomial coefficients (ascending powers) of the jth Lagrange basis polynomial
/// L_j(t) = Π_{m≠j} (t - x_m) / (x_j - x_m), over the integer abscissas.
fn lagrange_basis(j: usize) -> [f64; STENCIL_SIZE] {
    let x_j = abscissa(j);

    let mut poly = [0.0_f64; STENCIL_SIZE];
    poly[0] = 1.0;

    let mut degree = 0;
    let mut denominator = 1.0_f64;

    for m in 0..STENCIL_SIZE {
        if m == j {
            continue;
        }

        let x_m = abscissa(m);

        // poly *= (t - x_m)
        for k in (0..=degree).rev() {
            poly[k + 1] += poly[k];
            poly[k] *= -x_m;
        }

        degree += 1;
        denominator *= x_j - x_m;
    }

    poly.map(|c| c / denominator)
}

fn build_transform_matrix() -> TransformMatrix {
    let mut t = TransformMatrix::zeros();
    for j in 0..STENCIL_SIZE {
        for (k, c_k) in lagrange_basis(j).iter().enumerate() {
            t[(k, j)] = *c_k;
        }
    }
    t
}

/// Returns the [TransformMatrix]: row k, column j is the kth power coefficient
/// of the jth Lagrange basis polynomial. Built once, on first use.
pub fn transform_matrix() -> &'static TransformMatrix {
    TRANSFORM.get_or_init(build_transform_matrix)
}

#[cfg(test)]
mod test {
    use super::{abscissa, transform_matrix, TransformMatrix};
    use crate::constants::STENCIL_SIZE;

    #[test]
    fn inverse_of_vandermonde() {
        let vandermonde = TransformMatrix::from_fn(|i, k| abscissa(i).powi(k as i32));
        let identity = vandermonde * transform_matrix();
        let err = (identity - TransformMatrix::identity()).abs().max();
        assert!(err < 1.0E-9, "V.T differs from identity by {}", err);
    }

    #[test]
    fn reference_coefficients() {
        let t = transform_matrix();

        // constant term is the central sample itself
        for j in 0..STENCIL_SIZE {
            let expected = if j == 4 { 1.0 } else { 0.0 };
            assert!((t[(0, j)] - expected).abs() < 1.0E-12);
        }

        for (k, j, expected) in [
            (1, 3, -0.8),
            (1, 0, 3.57142857e-03),
            (2, 4, -1.42361111e+00),
            (3, 2, -2.34722222e-01),
            (4, 4, 4.73958333e-01),
            (6, 4, -5.20833333e-02),
            (7, 1, 5.95238095e-04),
            (8, 4, 1.73611111e-03),
            (8, 0, 2.48015873e-05),
        ] {
            assert!(
                (t[(k, j)] - expected).abs() < 1.0E-8,
                "T[{},{}]={} expecting {}",
                k,
                j,
                t[(k, j)],
                expected
            );
        }
    }

    #[test]
    fn partition_of_unity() {
        // Lagrange basis sums to 1: only the constant term survives
        let t = transform_matrix();
        for k in 0..STENCIL_SIZE {
            let sum = t.row(k).sum();
            let expected = if k == 0 { 1.0 } else { 0.0 };
            assert!((sum - expected).abs() < 1.0E-12, "row {} sums to {}", k, sum);
        }
    }
}
