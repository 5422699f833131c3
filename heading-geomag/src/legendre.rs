//! Associated Legendre polynomials and Schmidt quasi-normalization.
//!
//! The spherical-harmonic expansion evaluates associated Legendre polynomials
//! P(n, m) of the cosine of the geocentric colatitude, together with their
//! derivatives with respect to the colatitude. Both are built by the standard
//! three-term recurrences, ascending in degree.
//!
//! Geomagnetic models publish their Gauss coefficients Schmidt
//! quasi-normalized. Rather than normalize the polynomials themselves, the
//! evaluation multiplies each term by a precomputed conversion factor
//! ([`schmidt_quasi_norm_factors`]), which keeps the recurrences in their
//! cheapest form.

/// Associated Legendre polynomial table for a fixed colatitude.
///
/// `p[n][m]` holds P(n, m) of cos(theta); `p_deriv[n][m]` its derivative with
/// respect to theta. Rows are triangular: row `n` has `n + 1` entries.
pub struct LegendreTable {
    pub p: Vec<Vec<f64>>,
    pub p_deriv: Vec<Vec<f64>>,
}

impl LegendreTable {
    /// Evaluates polynomials of degree 0 through `max_degree` at colatitude
    /// `theta_rad`.
    pub fn new(max_degree: usize, theta_rad: f64) -> Self {
        let (sin_theta, cos_theta) = libm::sincos(theta_rad);

        let mut p: Vec<Vec<f64>> = Vec::with_capacity(max_degree + 1);
        let mut p_deriv: Vec<Vec<f64>> = Vec::with_capacity(max_degree + 1);
        p.push(vec![1.0]);
        p_deriv.push(vec![0.0]);

        for n in 1..=max_degree {
            let mut row = vec![0.0; n + 1];
            let mut row_deriv = vec![0.0; n + 1];
            for m in 0..=n {
                if n == m {
                    // Diagonal: raise both degree and order.
                    row[m] = sin_theta * p[n - 1][m - 1];
                    row_deriv[m] =
                        cos_theta * p[n - 1][m - 1] + sin_theta * p_deriv[n - 1][m - 1];
                } else if n == 1 || m == n - 1 {
                    // First sub-diagonal: two-term recurrence.
                    row[m] = cos_theta * p[n - 1][m];
                    row_deriv[m] = -sin_theta * p[n - 1][m] + cos_theta * p_deriv[n - 1][m];
                } else {
                    let k = (((n - 1) * (n - 1) - m * m) as f64)
                        / (((2 * n - 1) * (2 * n - 3)) as f64);
                    row[m] = cos_theta * p[n - 1][m] - k * p[n - 2][m];
                    row_deriv[m] = -sin_theta * p[n - 1][m] + cos_theta * p_deriv[n - 1][m]
                        - k * p_deriv[n - 2][m];
                }
            }
            p.push(row);
            p_deriv.push(row_deriv);
        }

        Self { p, p_deriv }
    }
}

/// Conversion factors from the plain polynomial recurrence to Schmidt
/// quasi-normalization, indexed `[n][m]` with triangular rows.
pub fn schmidt_quasi_norm_factors(max_degree: usize) -> Vec<Vec<f64>> {
    let mut factors: Vec<Vec<f64>> = Vec::with_capacity(max_degree + 1);
    factors.push(vec![1.0]);
    for n in 1..=max_degree {
        let mut row = vec![0.0; n + 1];
        row[0] = factors[n - 1][0] * (2 * n - 1) as f64 / n as f64;
        for m in 1..=n {
            let doubling = if m == 1 { 2.0 } else { 1.0 };
            row[m] = row[m - 1]
                * libm::sqrt((n - m + 1) as f64 * doubling / (n + m) as f64);
        }
        factors.push(row);
    }
    factors
}
