//! Axis-aligned square view over four stored points.
//!
//! # Invariants
//! - `upper_left.y > bottom_left.y`; both left corners share one `x`.
//! - Right corners sit at `left x + side_length`, with the left corners' `y`.
//! - All four corners belong to the same list.

use crate::model::point::Point;
use serde::{Deserialize, Serialize};

/// Corner role inside a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SquareVertex {
    BottomLeft,
    UpperLeft,
    UpperRight,
    BottomRight,
}

impl SquareVertex {
    /// All roles, counter-clockwise from the bottom-left corner.
    pub const ALL: [SquareVertex; 4] = [
        SquareVertex::BottomLeft,
        SquareVertex::UpperLeft,
        SquareVertex::UpperRight,
        SquareVertex::BottomRight,
    ];
}

/// Read-only square derived from a list's points.
///
/// Deserialization re-derives the square from its left edge and rejects any
/// input whose corners disagree with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "SquareCorners")]
pub struct Square {
    bottom_left: Point,
    upper_left: Point,
    upper_right: Point,
    bottom_right: Point,
}

impl Square {
    /// Builds the square whose left edge is the segment between `a` and `b`.
    ///
    /// The argument order does not matter: the lower point becomes the
    /// bottom-left corner. Returns `None` when the points do not form a
    /// vertical edge of positive length within one list, or when the right
    /// edge would fall outside the `i32` range.
    pub fn from_left_edge(a: &Point, b: &Point) -> Option<Self> {
        if a.x() != b.x() || a.list_id() != b.list_id() || a.y() == b.y() {
            return None;
        }

        let (bottom, upper) = if a.y() < b.y() { (a, b) } else { (b, a) };
        let side = i32::try_from(i64::from(upper.y()) - i64::from(bottom.y())).ok()?;
        let right_x = bottom.x().checked_add(side)?;

        Some(Self {
            bottom_left: bottom.clone(),
            upper_left: upper.clone(),
            upper_right: upper.with_x(right_x),
            bottom_right: bottom.with_x(right_x),
        })
    }

    pub fn vertex(&self, vertex: SquareVertex) -> &Point {
        match vertex {
            SquareVertex::BottomLeft => &self.bottom_left,
            SquareVertex::UpperLeft => &self.upper_left,
            SquareVertex::UpperRight => &self.upper_right,
            SquareVertex::BottomRight => &self.bottom_right,
        }
    }

    /// Corners in `SquareVertex::ALL` order.
    pub fn vertices(&self) -> [&Point; 4] {
        SquareVertex::ALL.map(|vertex| self.vertex(vertex))
    }

    /// Upper-right and bottom-right corners.
    pub fn right_edge(&self) -> [&Point; 2] {
        [&self.upper_right, &self.bottom_right]
    }

    /// `|upper_left.y - bottom_left.y|`.
    pub fn side_length(&self) -> u32 {
        self.upper_left.y().abs_diff(self.bottom_left.y())
    }

    pub fn list_id(&self) -> &str {
        self.bottom_left.list_id()
    }
}

#[derive(Deserialize)]
struct SquareCorners {
    bottom_left: Point,
    upper_left: Point,
    upper_right: Point,
    bottom_right: Point,
}

impl TryFrom<SquareCorners> for Square {
    type Error = String;

    fn try_from(corners: SquareCorners) -> Result<Self, Self::Error> {
        let square = Square::from_left_edge(&corners.bottom_left, &corners.upper_left)
            .ok_or_else(|| "left corners do not form a vertical edge within one list".to_string())?;
        let matches = square.bottom_left == corners.bottom_left
            && square.upper_left == corners.upper_left
            && square.upper_right == corners.upper_right
            && square.bottom_right == corners.bottom_right;
        if !matches {
            return Err("corners do not form an axis-aligned square".to_string());
        }
        Ok(square)
    }
}

#[cfg(test)]
mod tests {
    use super::{Square, SquareVertex};
    use crate::model::point::Point;

    #[test]
    fn from_left_edge_derives_right_corners() {
        let square =
            Square::from_left_edge(&Point::new(0, 5, "l"), &Point::new(0, 0, "l")).unwrap();

        assert_eq!(square.side_length(), 5);
        assert_eq!(square.vertex(SquareVertex::BottomLeft), &Point::new(0, 0, "l"));
        assert_eq!(square.vertex(SquareVertex::UpperLeft), &Point::new(0, 5, "l"));
        assert_eq!(square.vertex(SquareVertex::UpperRight), &Point::new(5, 5, "l"));
        assert_eq!(square.vertex(SquareVertex::BottomRight), &Point::new(5, 0, "l"));
    }

    #[test]
    fn argument_order_does_not_change_the_square() {
        let a = Point::new(3, -2, "l");
        let b = Point::new(3, 4, "l");
        assert_eq!(Square::from_left_edge(&a, &b), Square::from_left_edge(&b, &a));
    }

    #[test]
    fn rejects_degenerate_and_cross_list_edges() {
        assert!(Square::from_left_edge(&Point::new(0, 0, "l"), &Point::new(0, 0, "l")).is_none());
        assert!(Square::from_left_edge(&Point::new(0, 0, "l"), &Point::new(1, 3, "l")).is_none());
        assert!(Square::from_left_edge(&Point::new(0, 0, "a"), &Point::new(0, 3, "b")).is_none());
    }

    #[test]
    fn right_edge_overflow_yields_none() {
        let a = Point::new(i32::MAX - 1, 0, "l");
        let b = Point::new(i32::MAX - 1, 10, "l");
        assert!(Square::from_left_edge(&a, &b).is_none());
    }

    #[test]
    fn side_length_of_extreme_edge_does_not_overflow() {
        let square = Square::from_left_edge(
            &Point::new(-10, i32::MIN, "l"),
            &Point::new(-10, -1, "l"),
        )
        .unwrap();
        assert_eq!(square.side_length(), i32::MAX as u32);
    }

    #[test]
    fn deserializes_square_with_consistent_corners() {
        let square =
            Square::from_left_edge(&Point::new(0, 0, "l"), &Point::new(0, 5, "l")).unwrap();
        let json = serde_json::to_string(&square).unwrap();

        let parsed: Square = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, square);
    }

    #[test]
    fn rejects_json_square_that_breaks_corner_invariants() {
        let inverted_and_mixed = r#"{
            "bottom_left": {"x": 0, "y": 1, "list_id": "l"},
            "upper_left": {"x": 0, "y": -2147483648, "list_id": "l"},
            "upper_right": {"x": 5, "y": -2147483648, "list_id": "other"},
            "bottom_right": {"x": 5, "y": 1, "list_id": "l"}
        }"#;
        let misplaced_right = r#"{
            "bottom_left": {"x": 0, "y": 0, "list_id": "l"},
            "upper_left": {"x": 0, "y": 5, "list_id": "l"},
            "upper_right": {"x": 6, "y": 5, "list_id": "l"},
            "bottom_right": {"x": 6, "y": 0, "list_id": "l"}
        }"#;
        let cross_list_left = r#"{
            "bottom_left": {"x": 0, "y": 0, "list_id": "a"},
            "upper_left": {"x": 0, "y": 5, "list_id": "b"},
            "upper_right": {"x": 5, "y": 5, "list_id": "b"},
            "bottom_right": {"x": 5, "y": 0, "list_id": "a"}
        }"#;

        for json in [inverted_and_mixed, misplaced_right, cross_list_left] {
            let err = serde_json::from_str::<Square>(json).unwrap_err();
            assert!(err.to_string().contains("corners") || err.to_string().contains("edge"));
        }
    }

    #[test]
    fn serializes_vertex_roles_in_snake_case() {
        let json = serde_json::to_value(SquareVertex::BottomLeft).unwrap();
        assert_eq!(json, "bottom_left");
    }
}
