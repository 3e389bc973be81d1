use ncollide2d::na::{Point2, RealField};

/// Return the distance between two 2D points
pub fn dist<N: RealField + Copy>(a: &Point2<N>, b: &Point2<N>) -> N {
    (a - b).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(0.0, 0.0, 0.0)]
    #[test_case(3.0, 4.0, 5.0)]
    #[test_case(-1.0, 1.0, 2.0_f64.sqrt())]
    fn test_dist(x: f64, y: f64, e: f64) {
        let a = Point2::new(1.0, 1.0);
        let b = Point2::new(1.0 + x, 1.0 + y);
        assert_relative_eq!(e, dist(&a, &b));
        assert_relative_eq!(e, dist(&b, &a));
    }
}
