/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Arithmetic mean of a set of points, or `None` if the set is empty.
#[must_use]
pub fn centroid<'a, I>(points: I) -> Option<Point3>
where
    I: IntoIterator<Item = &'a Point3>,
{
    let mut sum = Vector3::zeros();
    let mut count = 0_usize;
    for p in points {
        sum += p.coords;
        count += 1;
    }
    if count == 0 {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let inv_n = 1.0 / count as f64;
    Some(Point3::from(sum * inv_n))
}

/// Moves `point` toward `center`, keeping `factor` of its offset.
///
/// Evaluated as `center * (1 - factor) + point * factor`, which equals
/// `center + (point - center) * factor` and is exact at both ends:
/// `factor = 0` lands on the center, `factor = 1` returns the point bit for bit.
#[must_use]
pub fn scale_toward(point: &Point3, center: &Point3, factor: f64) -> Point3 {
    Point3::from(center.coords.lerp(&point.coords, factor))
}
