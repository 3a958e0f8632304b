/// A pair of `(x, y)` values in **graph** units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GraphPoint<T>(pub T, pub T);

impl<T> From<(T, T)> for GraphPoint<T> {
    fn from((x, y): (T, T)) -> GraphPoint<T> {
        GraphPoint(x, y)
    }
}

impl<T> GraphPoint<T>
where
    T: Into<f64> + Copy,
{
    /// Returns the distance between two points.
    pub fn distance(self, other: GraphPoint<T>) -> f64 {
        (self.0.into() - other.0.into()).hypot(self.1.into() - other.1.into())
    }
}
