use crate::airfoil::Profile;
use log::{debug, warn};
use ncollide2d::na::Point2;

/// Removes the `te_drop` stations closest to the trailing edge from each surface while keeping
/// the trailing edge point itself. Cosine spacing packs stations tightly near the trailing edge,
/// and the resulting near-duplicate points make for degenerate boundary elements.
///
/// `upper` is ordered trailing edge to leading edge, `lower` leading edge to trailing edge and
/// still ending with its own trailing edge point. A surface is left untouched unless it has more
/// than `te_drop + 1` points. Negative values of `te_drop` are treated as zero.
pub fn trim_te(
    upper: &[Point2<f64>],
    lower: &[Point2<f64>],
    te_drop: i64,
) -> (Vec<Point2<f64>>, Vec<Point2<f64>>) {
    let drop = usize::try_from(te_drop).unwrap_or(0);
    if drop == 0 {
        return (upper.to_vec(), lower.to_vec());
    }

    let upper = if upper.len() > drop + 1 {
        let mut kept = vec![upper[0]];
        kept.extend_from_slice(&upper[1 + drop..]);
        kept
    } else {
        warn!(
            "Upper surface has {} points, too few to drop {} near the trailing edge",
            upper.len(),
            drop
        );
        upper.to_vec()
    };

    let lower = if lower.len() > drop + 1 {
        let last = lower.len() - 1;
        let mut kept = lower[..last - drop].to_vec();
        kept.push(lower[last]);
        kept
    } else {
        warn!(
            "Lower surface has {} points, too few to drop {} near the trailing edge",
            lower.len(),
            drop
        );
        lower.to_vec()
    };

    (upper, lower)
}

impl Profile {
    /// Returns a copy of the profile with `te_drop` stations removed next to the trailing edge
    /// on each surface, see [`trim_te`].
    pub fn trimmed(&self, te_drop: i64) -> Profile {
        let (upper, lower) = trim_te(&self.upper, &self.lower, te_drop);
        debug!(
            "Trimmed trailing edge by {}: upper {} -> {}, lower {} -> {}",
            te_drop.max(0),
            self.upper.len(),
            upper.len(),
            self.lower.len(),
            lower.len()
        );
        Profile { upper, lower }
    }
}
