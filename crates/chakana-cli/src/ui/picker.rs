use chakana_engine::{BoardState, EdgeKind, EdgeRef};

use crate::ui::widgets::{CELL_H, CELL_W};

// Terminal rows render about twice as tall as columns; distances are
// computed in column units so the pick tolerance behaves uniformly.
const Y_SCALE: f64 = 2.0;

fn dot(row: usize, col: usize) -> (f64, f64) {
    #[expect(clippy::cast_precision_loss)]
    let scale = |value: usize, step: u16| value as f64 * f64::from(step);
    (scale(col, CELL_W), scale(row, CELL_H) * Y_SCALE)
}

/// Distance from a point to a segment: project onto the segment, clamp to
/// the endpoints.
fn dist_point_to_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let (vx, vy) = (x2 - x1, y2 - y1);
    let (wx, wy) = (px - x1, py - y1);
    let c1 = vx * wx + vy * wy;
    if c1 <= 0.0 {
        return (px - x1).hypot(py - y1);
    }
    let c2 = vx * vx + vy * vy;
    if c2 <= c1 {
        return (px - x2).hypot(py - y2);
    }
    let b = c1 / c2;
    let (bx, by) = (x1 + b * vx, y1 + b * vy);
    (px - bx).hypot(py - by)
}

/// Finds the free edge nearest to a point, or `None` if the nearest free
/// edge is at or beyond `tolerance`.
///
/// `x`/`y` are board-local terminal coordinates (columns and rows from the
/// board's top-left corner); `tolerance` is in columns. Owned edges are
/// never returned.
pub(crate) fn nearest_unowned_edge(
    board: &BoardState,
    x: f64,
    y: f64,
    tolerance: f64,
) -> Option<EdgeRef> {
    let point = (x, y * Y_SCALE);
    let mut best = None;
    let mut best_dist = tolerance;
    for edge in board.edge_refs() {
        if !matches!(board.edge_owner(edge), Ok(None)) {
            continue;
        }
        let (start, end) = match edge.kind {
            EdgeKind::Horizontal => (dot(edge.row, edge.col), dot(edge.row, edge.col + 1)),
            EdgeKind::Vertical => (dot(edge.row, edge.col), dot(edge.row + 1, edge.col)),
        };
        let dist = dist_point_to_segment(point.0, point.1, start.0, start.1, end.0, end.1);
        if dist < best_dist {
            best_dist = dist;
            best = Some(edge);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use chakana_engine::PlayerId;

    use super::*;

    #[test]
    fn test_distance_to_segment() {
        // Perpendicular drop onto the middle.
        assert!((dist_point_to_segment(2.0, 3.0, 0.0, 0.0, 4.0, 0.0) - 3.0).abs() < 1e-9);
        // Beyond an endpoint: distance to the endpoint.
        assert!((dist_point_to_segment(7.0, 4.0, 0.0, 0.0, 4.0, 0.0) - 5.0).abs() < 1e-9);
        assert!((dist_point_to_segment(-3.0, 4.0, 0.0, 0.0, 4.0, 0.0) - 5.0).abs() < 1e-9);
        // On the segment.
        assert!(dist_point_to_segment(1.0, 0.0, 0.0, 0.0, 4.0, 0.0) < 1e-9);
    }

    #[test]
    fn test_picks_the_edge_under_the_point() {
        let board = BoardState::new(2);
        // Middle of H[0][0]: columns 1..3, row 0.
        let picked = nearest_unowned_edge(&board, 2.0, 0.0, 2.0);
        assert_eq!(picked, Some(EdgeRef::horizontal(0, 0)));
        // Beside V[1][2] (x = 8, rows 2..4).
        let picked = nearest_unowned_edge(&board, 7.5, 3.0, 2.0);
        assert_eq!(picked, Some(EdgeRef::vertical(1, 2)));
    }

    #[test]
    fn test_respects_tolerance() {
        let board = BoardState::new(2);
        // A point well below the whole board (2 boxes of CELL_H rows each).
        let below = f64::from(CELL_H) * 2.0 + 1.5;
        assert_eq!(nearest_unowned_edge(&board, 2.0, below, 2.0), None);
        // Exactly at tolerance is excluded; just inside is accepted.
        assert_eq!(nearest_unowned_edge(&board, 2.0, 1.0, 2.0), None);
        assert_eq!(nearest_unowned_edge(&board, 2.0, 0.9, 2.0), Some(EdgeRef::horizontal(0, 0)));
    }

    #[test]
    fn test_never_returns_an_owned_edge() {
        let mut board = BoardState::new(2);
        board
            .claim_edge(EdgeRef::horizontal(0, 0), PlayerId::new(0))
            .unwrap();
        // Same point as before: the owned edge is skipped, and nothing else
        // is in tolerance.
        assert_eq!(nearest_unowned_edge(&board, 2.0, 0.0, 1.0), None);
    }
}
