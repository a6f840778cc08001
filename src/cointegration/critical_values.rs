//! cointegration::critical_values — tabulated Johansen critical values.
//!
//! Purpose
//! -------
//! Hold the asymptotic critical values of the Johansen trace and
//! maximum-eigenvalue statistics as immutable reference data and map them
//! onto the rank hypotheses of a concrete test.
//!
//! Key behaviors
//! -------------
//! - Six `12 × 3` tables keyed by [`TableKey`] = ([`StatisticKind`],
//!   [`DetOrder`]). Row `j` covers `j + 1` common stochastic trends
//!   (`n − r = j + 1`); columns are the 90 %, 95 %, and 99 % quantiles.
//! - [`critical_values`] returns an `n × 3` matrix whose row `k` tests the
//!   hypothesis `rank ≤ k`, i.e. `n − k` remaining trends, so output row
//!   `k` is table row `n − 1 − k`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `1 ≤ n ≤ MAX_SERIES`. `n == 0` means no eigenvalues exist yet and is
//!   reported as `TestNotRun`; `n > MAX_SERIES` as `RankTableOverflow`.
//! - Tables are never mutated. Values follow Osterwald-Lenum (1992) as
//!   extended by MacKinnon, Haug & Michelis (1999), the same constants
//!   distributed with statsmodels' `coint_johansen`; see
//!   [`TABLE_VERSION`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover the reversal on small `n`, both error branches, and
//!   a property test of `cv[k] == table[n − 1 − k]` for every key and
//!   `n ≤ 12`.
use crate::cointegration::{
    core::options::DetOrder,
    errors::{JohansenError, JohansenResult},
};
use ndarray::Array2;

/// Maximum number of series covered by the tables.
pub const MAX_SERIES: usize = 12;

/// Identifier of the tabulated constants.
pub const TABLE_VERSION: &str = "osterwald-lenum-1992+mackinnon-haug-michelis-1999";

type Table = [[f64; 3]; MAX_SERIES];

/// StatisticKind — which statistic a table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatisticKind {
    Trace,
    MaxEigen,
}

/// TableKey — two-axis key selecting one of the six tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableKey {
    pub kind: StatisticKind,
    pub det_order: DetOrder,
}

/// Look up the raw `12 × 3` table for `key`.
pub fn table(key: TableKey) -> &'static Table {
    match (key.kind, key.det_order) {
        (StatisticKind::MaxEigen, DetOrder::NoTrend) => &MAX_EIGEN_NO_TREND,
        (StatisticKind::MaxEigen, DetOrder::Mean) => &MAX_EIGEN_MEAN,
        (StatisticKind::MaxEigen, DetOrder::LinearTrend) => &MAX_EIGEN_LINEAR_TREND,
        (StatisticKind::Trace, DetOrder::NoTrend) => &TRACE_NO_TREND,
        (StatisticKind::Trace, DetOrder::Mean) => &TRACE_MEAN,
        (StatisticKind::Trace, DetOrder::LinearTrend) => &TRACE_LINEAR_TREND,
    }
}

/// Critical values aligned with the rank hypotheses of an `n`-series test.
///
/// Parameters
/// ----------
/// - `kind`: [`StatisticKind`]
///   Trace or maximum-eigenvalue statistic.
/// - `det_order`: [`DetOrder`]
///   Deterministic order the test was run with.
/// - `n_series`: `usize`
///   Number of series (= number of eigenvalues).
///
/// Returns
/// -------
/// `JohansenResult<Array2<f64>>`
///   `n × 3` matrix; row `k` holds the 90/95/99 % critical values for the
///   null hypothesis `rank ≤ k`.
///
/// Errors
/// ------
/// - `JohansenError::TestNotRun` when `n_series == 0`.
/// - `JohansenError::RankTableOverflow` when `n_series > MAX_SERIES`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_cointegration::cointegration::DetOrder;
/// # use rust_cointegration::cointegration::critical_values::{StatisticKind, critical_values};
/// let cv = critical_values(StatisticKind::Trace, DetOrder::Mean, 2).unwrap();
/// assert_eq!(cv[[0, 1]], 15.4943);
/// assert_eq!(cv[[1, 1]], 3.8415);
/// ```
pub fn critical_values(
    kind: StatisticKind, det_order: DetOrder, n_series: usize,
) -> JohansenResult<Array2<f64>> {
    if n_series == 0 {
        return Err(JohansenError::TestNotRun);
    }
    if n_series > MAX_SERIES {
        return Err(JohansenError::RankTableOverflow { n_series, max: MAX_SERIES });
    }

    let rows = table(TableKey { kind, det_order });
    Ok(Array2::from_shape_fn((n_series, 3), |(k, c)| rows[n_series - 1 - k][c]))
}

// ---- Maximum-eigenvalue statistic ----------------------------------------

const MAX_EIGEN_NO_TREND: Table = [
    [2.9762, 4.1296, 6.9406],
    [9.4748, 11.2246, 15.0923],
    [15.7175, 17.7961, 22.2519],
    [21.8370, 24.1592, 29.0609],
    [27.9160, 30.4428, 35.7359],
    [33.9271, 36.6301, 42.2333],
    [39.9085, 42.7679, 48.6606],
    [45.8930, 48.8795, 55.0335],
    [51.8528, 54.9629, 61.3449],
    [57.7954, 61.0404, 67.6415],
    [63.7248, 67.0756, 73.8856],
    [69.6513, 73.0946, 80.0937],
];

const MAX_EIGEN_MEAN: Table = [
    [2.7055, 3.8415, 6.6349],
    [12.2971, 14.2639, 18.5200],
    [18.8928, 21.1314, 25.8650],
    [25.1236, 27.5858, 32.7172],
    [31.2379, 33.8777, 39.3693],
    [37.2786, 40.0763, 45.8662],
    [43.2947, 46.2299, 52.3069],
    [49.2855, 52.3622, 58.6634],
    [55.2412, 58.4332, 64.9960],
    [61.2041, 64.5040, 71.2525],
    [67.1307, 70.5392, 77.4877],
    [73.0563, 76.5734, 83.7105],
];

const MAX_EIGEN_LINEAR_TREND: Table = [
    [2.7055, 3.8415, 6.6349],
    [15.0006, 17.1481, 21.7465],
    [21.8731, 24.2522, 29.2631],
    [28.2398, 30.8151, 36.1930],
    [34.4202, 37.1646, 42.8612],
    [40.5244, 43.4183, 49.4095],
    [46.5583, 49.5875, 55.8171],
    [52.5858, 55.7302, 62.1741],
    [58.5316, 61.8051, 68.5030],
    [64.5292, 67.9040, 74.7434],
    [70.4630, 73.9355, 81.0678],
    [76.4081, 79.9878, 87.2395],
];

// ---- Trace statistic ------------------------------------------------------

const TRACE_NO_TREND: Table = [
    [2.9762, 4.1296, 6.9406],
    [10.4741, 12.3212, 16.3640],
    [21.7781, 24.2761, 29.5147],
    [37.0339, 40.1749, 46.5716],
    [56.2839, 60.0627, 67.6367],
    [79.5329, 83.9383, 92.7136],
    [106.7351, 111.7797, 121.7375],
    [137.9954, 143.6691, 154.7977],
    [173.2292, 179.5199, 191.8122],
    [212.4721, 219.4051, 232.8291],
    [255.6732, 263.2603, 277.9962],
    [302.9054, 311.1288, 326.9716],
];

const TRACE_MEAN: Table = [
    [2.7055, 3.8415, 6.6349],
    [13.4294, 15.4943, 19.9349],
    [27.0669, 29.7961, 35.4628],
    [44.4929, 47.8545, 54.6815],
    [65.8202, 69.8189, 77.8202],
    [91.1090, 95.7542, 104.9637],
    [120.3673, 125.6185, 135.9825],
    [153.6341, 159.5290, 171.0905],
    [190.8714, 197.3772, 210.0366],
    [232.1030, 239.2468, 253.2526],
    [277.3740, 285.1402, 300.2821],
    [326.5354, 334.9795, 351.2150],
];

const TRACE_LINEAR_TREND: Table = [
    [2.7055, 3.8415, 6.6349],
    [16.1619, 18.3985, 23.1485],
    [32.0645, 35.0116, 41.0815],
    [51.6492, 55.2459, 62.5202],
    [75.1027, 79.3422, 87.7748],
    [102.4674, 107.3429, 116.9829],
    [133.7852, 139.2780, 150.0778],
    [169.0618, 175.1584, 187.1891],
    [208.3582, 215.1268, 228.2226],
    [251.6293, 259.0267, 273.3838],
    [298.8836, 306.8988, 322.4264],
    [350.1125, 358.7190, 375.3203],
];
