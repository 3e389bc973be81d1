use crate::airfoil::{CamberStation, NacaCode, Profile};
use ncollide2d::na::Point2;
use std::f64::consts::PI;

/// Generates `n` chordwise stations between 0.0 and 1.0 using cosine spacing, which clusters the
/// stations near both the leading and trailing edges. The first station is exactly 0.0 and, for
/// `n > 1`, the last station is exactly 1.0.
pub fn cosine_stations(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![0.0];
    }

    let step = PI / (n.max(2) - 1) as f64;
    (0..n)
        .map(|i| 0.5 * (1.0 - (i as f64 * step).cos()))
        .collect()
}

/// The mean camber line of a NACA 4-digit airfoil. A code with no camber magnitude or no camber
/// location describes a symmetric airfoil, whose camber line lies on the chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Camber {
    Symmetric,

    /// Maximum camber `m` located at `p`, both as fractions of the chord, with `0 < p < 1`
    Cambered { m: f64, p: f64 },
}

impl Camber {
    pub fn new(m: f64, p: f64) -> Camber {
        if m == 0.0 || p <= 0.0 || p >= 1.0 {
            Camber::Symmetric
        } else {
            Camber::Cambered { m, p }
        }
    }

    /// Height of the camber line above the chord at the fraction `x`
    pub fn height(&self, x: f64) -> f64 {
        match *self {
            Camber::Symmetric => 0.0,
            Camber::Cambered { m, p } => {
                if x < p {
                    (m / p.powi(2)) * (2.0 * p * x - x.powi(2))
                } else {
                    (m / (1.0 - p).powi(2)) * ((1.0 - 2.0 * p) + 2.0 * p * x - x.powi(2))
                }
            }
        }
    }

    /// Slope dyc/dx of the camber line at the fraction `x`
    pub fn slope(&self, x: f64) -> f64 {
        match *self {
            Camber::Symmetric => 0.0,
            Camber::Cambered { m, p } => {
                if x < p {
                    (2.0 * m / p.powi(2)) * (p - x)
                } else {
                    (2.0 * m / (1.0 - p).powi(2)) * (p - x)
                }
            }
        }
    }
}

/// An AirfoilGenerator is an entity which can generate the x, y position of the mean camber line,
/// its slope, and the airfoil half thickness at fractions of the chord. This provides the
/// information necessary to compute the airfoil surfaces.
pub trait AirfoilGenerator {
    /// Return a 2D point with the position of the camber line at a fraction from 0.0 to 1.0
    fn camber_line(&self, x: f64) -> Point2<f64>;

    /// Return the slope of the camber line at a fraction from 0.0 to 1.0
    fn camber_slope(&self, x: f64) -> f64;

    /// Return the half thickness of the airfoil, measured perpendicular to the camber line, at a
    /// fraction from 0.0 to 1.0
    fn half_thickness(&self, x: f64) -> f64;

    fn station_at(&self, x: f64) -> CamberStation {
        let camber = self.camber_line(x);
        let theta = self.camber_slope(x).atan();
        let yt = self.half_thickness(x);
        let (sin, cos) = theta.sin_cos();

        CamberStation::new(
            camber,
            Point2::new(camber.x - yt * sin, camber.y + yt * cos),
            Point2::new(camber.x + yt * sin, camber.y - yt * cos),
        )
    }

    /// Generates the airfoil surfaces at `n` cosine-spaced stations per surface
    fn generate(&self, n: usize) -> Profile {
        let stations: Vec<CamberStation> = cosine_stations(n)
            .into_iter()
            .map(|x| self.station_at(x))
            .collect();

        Profile::from_stations(&stations)
    }
}

/// A generator for a NACA 4-digit airfoil on a unit chord.
#[derive(Debug, Clone, Copy)]
pub struct Naca4Digit {
    camber: Camber,
    t: f64,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator.
    ///
    /// # Arguments
    ///
    /// * `m` - The max camber as a fraction, for example on a NACA 2412 this value should be set
    /// to 0.02
    ///
    /// * `p` - The location of the max camber as a fraction of chord length. For example on a
    /// NACA 2412 this value should be 0.4
    ///
    /// * `t` - the maximum thickness of the airfoil as a fraction of the chord length. For
    /// instance, on a NACA 2412 t should be 0.12
    pub fn new(m: f64, p: f64, t: f64) -> Naca4Digit {
        Naca4Digit {
            camber: Camber::new(m, p),
            t,
        }
    }

    pub fn from_code(code: &NacaCode) -> Naca4Digit {
        Naca4Digit::new(code.m, code.p, code.t)
    }

    pub fn camber(&self) -> Camber {
        self.camber
    }
}

impl AirfoilGenerator for Naca4Digit {
    fn camber_line(&self, x: f64) -> Point2<f64> {
        Point2::new(x, self.camber.height(x))
    }

    fn camber_slope(&self, x: f64) -> f64 {
        self.camber.slope(x)
    }

    fn half_thickness(&self, x: f64) -> f64 {
        (5.0 * self.t)
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
                - 0.1036 * x.powi(4))
    }
}

/// Generates the closed outline of the NACA 4-digit airfoil with camber `m` at `p` and thickness
/// `t`, sampled at `n` cosine-spaced stations per surface. The profile holds `2n - 1` points.
pub fn generate_profile(m: f64, p: f64, t: f64, n: usize) -> Profile {
    Naca4Digit::new(m, p, t).generate(n)
}
