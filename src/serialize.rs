use crate::airfoil::{BoundaryLoop, NacaCode};
use ncollide2d::na::Point2;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
pub struct ExportPoint(#[serde(with = "Point2f64")] pub Point2<f64>);

/// JSON representation of a boundary loop: the points in loop order and the 1-based indices of
/// the two surface curves.
#[derive(Serialize)]
pub struct BoundaryExport<'a> {
    pub code: &'a str,
    pub points: Vec<ExportPoint>,
    pub upper: Vec<usize>,
    pub lower: Vec<usize>,
}

impl<'a> BoundaryExport<'a> {
    pub fn new(code: &'a NacaCode, boundary: &BoundaryLoop) -> Self {
        BoundaryExport {
            code: code.digits(),
            points: boundary.points().into_iter().map(ExportPoint).collect(),
            upper: boundary.upper_indices(),
            lower: boundary.lower_indices(),
        }
    }
}

pub fn write_json<W: Write>(
    code: &NacaCode,
    boundary: &BoundaryLoop,
    w: &mut W,
) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(w, &BoundaryExport::new(code, boundary))
}
