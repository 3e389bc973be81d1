//! Generation of closed NACA 4-digit airfoil outlines. A code is parsed into its shape
//! parameters, the camber line and thickness envelope are sampled at cosine-spaced stations, and
//! the two surfaces are stacked into a single loop running from the trailing edge over the upper
//! surface to the leading edge and back along the lower surface.

use crate::geometry::distances2::dist;
use ncollide2d::na::Point2;

pub mod code;
pub mod generate;
pub mod trim;

pub use code::{parse_code, NacaCode};
pub use generate::{cosine_stations, generate_profile, AirfoilGenerator, Camber, Naca4Digit};
pub use trim::trim_te;

/// Number of cosine-spaced stations per surface used when nothing else is specified.
pub const DEFAULT_SURFACE_POINTS: usize = 160;

/// Number of near-trailing-edge stations removed from each surface by default.
pub const DEFAULT_TE_DROP: i64 = 5;

/// The camber line point at a single chordwise station together with the two surface points
/// offset from it along the camber line normal.
#[derive(Debug, Clone, Copy)]
pub struct CamberStation {
    pub camber: Point2<f64>,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber,
            upper,
            lower,
        }
    }
}

/// The two surfaces of a generated airfoil, oriented so that concatenating them gives one closed
/// loop. The upper surface runs from the trailing edge to the leading edge and includes both end
/// points. The lower surface runs from the leading edge to the trailing edge, but its leading edge
/// point is omitted since it is already the last point of the upper surface.
#[derive(Debug, Clone)]
pub struct Profile {
    pub upper: Vec<Point2<f64>>,
    pub lower: Vec<Point2<f64>>,
}

impl Profile {
    /// Assemble a profile from stations ordered from the leading edge to the trailing edge.
    pub fn from_stations(stations: &[CamberStation]) -> Profile {
        Profile {
            upper: stations.iter().rev().map(|s| s.upper).collect(),
            lower: stations.iter().skip(1).map(|s| s.lower).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.upper.len() + self.lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty() && self.lower.is_empty()
    }

    /// All points of the profile in loop order, upper surface first.
    pub fn points(&self) -> Vec<Point2<f64>> {
        let mut result = self.upper.to_vec();
        result.extend_from_slice(&self.lower);
        result
    }

    /// Drops the lower surface's trailing edge point so that the loop closes back onto the first
    /// upper surface point instead of duplicating the trailing edge.
    pub fn close(self) -> BoundaryLoop {
        let mut lower = self.lower;
        lower.pop();
        BoundaryLoop {
            upper: self.upper,
            lower,
        }
    }
}

/// Configuration for turning a parsed code into a boundary loop.
#[derive(Debug, Clone, Copy)]
pub struct ProfileParams {
    /// Number of cosine-spaced stations per surface, trailing edge to leading edge
    pub n_surface_pts: usize,

    /// Number of stations next to the trailing edge removed from each surface. Negative values
    /// are treated as zero.
    pub te_drop: i64,
}

impl Default for ProfileParams {
    fn default() -> Self {
        ProfileParams::new(DEFAULT_SURFACE_POINTS, DEFAULT_TE_DROP)
    }
}

impl ProfileParams {
    pub fn new(n_surface_pts: usize, te_drop: i64) -> Self {
        ProfileParams {
            n_surface_pts,
            te_drop,
        }
    }

    /// Generate, trim and close the outline of the airfoil described by `code`.
    pub fn boundary_loop(&self, code: &NacaCode) -> BoundaryLoop {
        Naca4Digit::from_code(code)
            .generate(self.n_surface_pts)
            .trimmed(self.te_drop)
            .close()
    }
}

/// A closed airfoil outline ready to be written out. Point indices used for the curve
/// definitions are 1-based, matching the numbering of the written points.
#[derive(Debug, Clone)]
pub struct BoundaryLoop {
    /// Upper surface, trailing edge to leading edge
    pub upper: Vec<Point2<f64>>,

    /// Lower surface after the leading edge, stopping short of the trailing edge
    pub lower: Vec<Point2<f64>>,
}

impl BoundaryLoop {
    pub fn len(&self) -> usize {
        self.upper.len() + self.lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    pub fn points(&self) -> Vec<Point2<f64>> {
        let mut result = self.upper.to_vec();
        result.extend_from_slice(&self.lower);
        result
    }

    /// Indices of the upper surface curve, `1..=upper.len()`.
    pub fn upper_indices(&self) -> Vec<usize> {
        (1..=self.upper.len()).collect()
    }

    /// Indices of the lower surface curve. It starts at the shared leading edge point (the last
    /// upper surface index), walks every lower surface point and closes on index 1.
    pub fn lower_indices(&self) -> Vec<usize> {
        if self.upper.is_empty() {
            return Vec::new();
        }

        let upper_count = self.upper.len();
        let mut result = vec![upper_count];
        result.extend(upper_count + 1..=self.len());
        result.push(1);
        result
    }

    /// The shortest distance between any two consecutive points of the loop, including the
    /// closing segment from the last point back to the first.
    pub fn min_segment_length(&self) -> Option<f64> {
        let points = self.points();
        if points.len() < 2 {
            return None;
        }

        points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(a, b)| dist(a, b))
            .reduce(f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn stations(count: usize) -> Vec<CamberStation> {
        (0..count)
            .map(|i| {
                let x = i as f64;
                CamberStation::new(
                    Point2::new(x, 0.0),
                    Point2::new(x, 1.0),
                    Point2::new(x, -1.0),
                )
            })
            .collect()
    }

    #[test]
    fn test_from_stations_orientation() {
        let profile = Profile::from_stations(&stations(4));
        let xs: Vec<f64> = profile.points().iter().map(|p| p.x).collect();
        assert_eq!(vec![3.0, 2.0, 1.0, 0.0, 1.0, 2.0, 3.0], xs);
        assert_eq!(4, profile.upper.len());
        assert_eq!(3, profile.lower.len());
        assert_relative_eq!(1.0, profile.upper[0].y);
        assert_relative_eq!(-1.0, profile.lower[0].y);
    }

    #[test]
    fn test_from_stations_empty() {
        let profile = Profile::from_stations(&[]);
        assert!(profile.is_empty());
        assert!(profile.close().lower_indices().is_empty());
    }

    #[test]
    fn test_close_drops_lower_trailing_edge() {
        let closed = Profile::from_stations(&stations(5)).close();
        assert_eq!(5, closed.upper.len());
        assert_eq!(3, closed.lower.len());
        assert_relative_eq!(3.0, closed.lower.last().unwrap().x);
    }

    #[test]
    fn test_curve_indices() {
        let closed = Profile::from_stations(&stations(4)).close();
        assert_eq!(vec![1, 2, 3, 4], closed.upper_indices());
        assert_eq!(vec![4, 5, 6, 1], closed.lower_indices());
    }

    #[test_case(0, 0)]
    #[test_case(40, 0)]
    #[test_case(160, 5)]
    #[test_case(160, 0)]
    #[test_case(12, 20)]
    fn test_curve_indices_partition_points(n: usize, te_drop: i64) {
        let code = parse_code("NACA 2412").unwrap();
        let closed = ProfileParams::new(n, te_drop).boundary_loop(&code);
        let mut all = closed.upper_indices();
        all.extend(closed.lower_indices());
        all.sort_unstable();

        let mut expected: Vec<usize> = (1..=closed.len()).collect();
        if !closed.is_empty() {
            // The leading edge and the first trailing edge point are shared by both curves
            expected.push(1);
            expected.push(closed.upper.len());
            expected.sort_unstable();
        }
        assert_eq!(expected, all);
    }

    #[test]
    fn test_default_boundary_loop_length() {
        let code = parse_code("NACA 0012 airfoil").unwrap();
        let closed = ProfileParams::default().boundary_loop(&code);
        assert_eq!(2 * 160 - 1 - 2 * 5 - 1, closed.len());
    }

    #[test]
    fn test_min_segment_length() {
        let code = parse_code("NACA 0012").unwrap();
        let closed = ProfileParams::default().boundary_loop(&code);
        let min = closed.min_segment_length().unwrap();
        assert!(min > 1e-6);
        assert!(min < 1e-2);
    }
}
