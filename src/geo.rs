//! Writes a boundary loop as a Gmsh-style geometry script: one `Point` per boundary point, a
//! `Spline` per surface and a `Line Loop` joining them.

use crate::airfoil::BoundaryLoop;
use itertools::Itertools;
use std::io::Write;

pub fn write_geo<W: Write>(boundary: &BoundaryLoop, w: &mut W) -> std::io::Result<()> {
    for (i, p) in boundary.points().iter().enumerate() {
        writeln!(w, "Point({}) = {{{:.6}, {:.6}, 0.0}};", i + 1, p.x, p.y)?;
    }

    writeln!(w, "Spline(1) = {{{}}};", boundary.upper_indices().iter().join(", "))?;
    writeln!(w, "Spline(2) = {{{}}};", boundary.lower_indices().iter().join(", "))?;
    writeln!(w, "Line Loop(1) = {{1, 2}};")?;

    Ok(())
}
