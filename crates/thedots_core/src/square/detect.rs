//! Square enumeration over a column index.
//!
//! Every pair of points in one column is a candidate left edge. The edge
//! length fixes the right column (`x + side`), so width always equals height
//! and plain rectangles can never be reported. Cost is O(Σ k²) over column
//! sizes k.

use crate::model::point::Point;
use crate::model::square::Square;
use crate::square::index::SquareIndex;

/// Finds every axis-aligned square whose corners are all in `points`.
///
/// Output order follows ascending left x, then bottom y, then upper y.
/// Reordering the input never changes the result. Duplicate input points are
/// ignored; nested and corner-sharing squares are all reported.
pub fn find_squares<'a>(points: impl IntoIterator<Item = &'a Point>) -> Vec<Square> {
    let index = SquareIndex::build(points);
    find_squares_in(&index)
}

/// Same as `find_squares`, over a prebuilt index.
pub fn find_squares_in(index: &SquareIndex) -> Vec<Square> {
    let mut squares = Vec::new();
    for (_, column) in index.columns() {
        for (position, bottom) in column.iter().enumerate() {
            for upper in &column[position + 1..] {
                let Some(square) = Square::from_left_edge(bottom, upper) else {
                    continue;
                };
                if square.right_edge().iter().all(|corner| index.contains(corner)) {
                    squares.push(square);
                }
            }
        }
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::find_squares;
    use crate::model::point::Point;
    use crate::model::square::Square;
    use std::collections::BTreeSet;

    fn points(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y, "listId")).collect()
    }

    fn square(left_x: i32, bottom_y: i32, upper_y: i32) -> Square {
        Square::from_left_edge(
            &Point::new(left_x, bottom_y, "listId"),
            &Point::new(left_x, upper_y, "listId"),
        )
        .unwrap()
    }

    fn as_set(squares: Vec<Square>) -> BTreeSet<Square> {
        squares.into_iter().collect()
    }

    #[test]
    fn finds_single_square_and_ignores_stray_point() {
        let input = points(&[(0, 0), (0, 5), (2, 2), (5, 0), (5, 5)]);
        assert_eq!(find_squares(&input), vec![square(0, 0, 5)]);
    }

    #[test]
    fn ignores_rectangles() {
        let input = points(&[(0, 0), (0, 3), (6, 0), (6, 3)]);
        assert!(find_squares(&input).is_empty());
    }

    #[test]
    fn empty_and_single_point_inputs_find_nothing() {
        assert!(find_squares(&points(&[])).is_empty());
        assert!(find_squares(&points(&[(1, 1)])).is_empty());
    }

    #[test]
    fn three_corners_are_not_a_square() {
        let input = points(&[(0, 0), (0, 5), (5, 5)]);
        assert!(find_squares(&input).is_empty());
    }

    #[test]
    fn finds_several_disjoint_squares() {
        let input = points(&[
            (-20, -20),
            (-20, -18),
            (-18, -20),
            (-18, -18),
            (0, 0),
            (0, 5),
            (5, 0),
            (5, 5),
        ]);
        assert_eq!(
            as_set(find_squares(&input)),
            as_set(vec![square(-20, -20, -18), square(0, 0, 5)])
        );
    }

    #[test]
    fn finds_squares_sharing_an_edge() {
        let input = points(&[(-20, -20), (-20, 0), (-20, 20), (0, -20), (0, 0), (0, 20)]);
        assert_eq!(
            as_set(find_squares(&input)),
            as_set(vec![square(-20, -20, 0), square(-20, 0, 20)])
        );
    }

    #[test]
    fn finds_squares_inside_squares() {
        let mut coords = Vec::new();
        for x in [-20, 0, 20] {
            for y in [-20, 0, 20] {
                coords.push((x, y));
            }
        }
        let found = find_squares(&points(&coords));

        assert_eq!(found.len(), 5);
        assert_eq!(
            as_set(found),
            as_set(vec![
                square(-20, -20, 0),
                square(-20, 0, 20),
                square(0, -20, 0),
                square(0, 0, 20),
                square(-20, -20, 20),
            ])
        );
    }

    #[test]
    fn input_order_does_not_change_result() {
        let forward = points(&[(0, 0), (0, 4), (4, 0), (4, 4), (8, 0), (8, 4), (0, 8), (8, 8)]);
        let mut reversed = forward.clone();
        reversed.reverse();
        let mut rotated = forward.clone();
        rotated.rotate_left(3);

        let expected = as_set(find_squares(&forward));
        assert_eq!(expected.len(), 3);
        assert_eq!(as_set(find_squares(&reversed)), expected);
        assert_eq!(as_set(find_squares(&rotated)), expected);
    }

    #[test]
    fn duplicate_points_do_not_duplicate_squares() {
        let input = points(&[(0, 0), (0, 0), (0, 2), (2, 0), (2, 2), (2, 2)]);
        assert_eq!(find_squares(&input).len(), 1);
    }

    #[test]
    fn lists_do_not_mix() {
        let input = vec![
            Point::new(0, 0, "a"),
            Point::new(0, 1, "a"),
            Point::new(1, 0, "b"),
            Point::new(1, 1, "b"),
        ];
        assert!(find_squares(&input).is_empty());
    }
}
