//! Column index: points grouped by x, each column sorted by y.

use crate::model::point::Point;
use std::collections::BTreeMap;

/// Points grouped into vertical columns keyed by x.
///
/// Columns are sorted by `Point` order (y within one column) and hold no
/// duplicates, so membership is a binary search.
#[derive(Debug, Clone, Default)]
pub struct SquareIndex {
    columns: BTreeMap<i32, Vec<Point>>,
}

impl SquareIndex {
    pub fn build<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut columns: BTreeMap<i32, Vec<Point>> = BTreeMap::new();
        for point in points {
            columns.entry(point.x()).or_default().push(point.clone());
        }
        for column in columns.values_mut() {
            column.sort();
            column.dedup();
        }
        Self { columns }
    }

    /// Columns in ascending x order.
    pub fn columns(&self) -> impl Iterator<Item = (i32, &[Point])> {
        self.columns
            .iter()
            .map(|(x, column)| (*x, column.as_slice()))
    }

    /// Points sharing `x`, or an empty slice.
    pub fn column(&self, x: i32) -> &[Point] {
        self.columns.get(&x).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.column(point.x()).binary_search(point).is_ok()
    }

    /// Number of distinct points indexed.
    pub fn len(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SquareIndex;
    use crate::model::point::Point;

    #[test]
    fn groups_by_x_and_sorts_by_y() {
        let points = vec![
            Point::new(1, 9, "l"),
            Point::new(0, 3, "l"),
            Point::new(1, -4, "l"),
            Point::new(1, 9, "l"),
        ];
        let index = SquareIndex::build(&points);

        let ys: Vec<i32> = index.column(1).iter().map(Point::y).collect();
        assert_eq!(ys, vec![-4, 9]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.columns().map(|(x, _)| x).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn membership_respects_list_id() {
        let points = vec![Point::new(2, 2, "a")];
        let index = SquareIndex::build(&points);
        assert!(index.contains(&Point::new(2, 2, "a")));
        assert!(!index.contains(&Point::new(2, 2, "b")));
        assert!(!index.contains(&Point::new(7, 2, "a")));
        assert!(index.column(7).is_empty());
    }
}
