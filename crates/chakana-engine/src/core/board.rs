use crate::{
    BoardError, PatternError,
    core::{
        edge::{BoxRef, EdgeKind, EdgeRef},
        palette::{Category, Palette, Rgb},
        player::PlayerId,
    },
};

/// One grid cell: a fixed category plus at-most-once ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxCell {
    pub category: Category,
    pub owner: Option<PlayerId>,
}

/// Edge and box storage for one `n`×`n` board.
///
/// Holds the two edge grids (`(n+1)×n` horizontal, `n×(n+1)` vertical) and
/// the `n×n` box grid, all row-major. Mutations are primitive on purpose:
/// [`BoardState::claim_edge`] never touches boxes or scores, so the rule of
/// who closes a box and what it is worth stays with the session layer.
///
/// Every mutating operation is atomic: it either applies fully or rejects
/// without changing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    grid: usize,
    h_edges: Vec<Option<PlayerId>>,
    v_edges: Vec<Option<PlayerId>>,
    boxes: Vec<BoxCell>,
}

impl BoardState {
    /// Creates a board with every edge free and every box unowned, all boxes
    /// carrying the default (first) category.
    ///
    /// # Panics
    ///
    /// Panics if `grid` is zero.
    #[must_use]
    pub fn new(grid: usize) -> Self {
        assert!(grid > 0, "board needs at least one box");
        Self {
            grid,
            h_edges: vec![None; (grid + 1) * grid],
            v_edges: vec![None; grid * (grid + 1)],
            boxes: vec![BoxCell::default(); grid * grid],
        }
    }

    #[must_use]
    pub const fn grid(&self) -> usize {
        self.grid
    }

    fn edge_index(&self, edge: EdgeRef) -> Result<usize, BoardError> {
        let (rows, cols) = match edge.kind {
            EdgeKind::Horizontal => (self.grid + 1, self.grid),
            EdgeKind::Vertical => (self.grid, self.grid + 1),
        };
        if edge.row >= rows || edge.col >= cols {
            return Err(BoardError::OutOfRange);
        }
        Ok(edge.row * cols + edge.col)
    }

    fn box_index(&self, boxref: BoxRef) -> Result<usize, BoardError> {
        if boxref.row >= self.grid || boxref.col >= self.grid {
            return Err(BoardError::OutOfRange);
        }
        Ok(boxref.row * self.grid + boxref.col)
    }

    pub fn edge_owner(&self, edge: EdgeRef) -> Result<Option<PlayerId>, BoardError> {
        let index = self.edge_index(edge)?;
        Ok(match edge.kind {
            EdgeKind::Horizontal => self.h_edges[index],
            EdgeKind::Vertical => self.v_edges[index],
        })
    }

    /// Claims a free edge for `player`.
    ///
    /// Fails with [`BoardError::AlreadyOwned`] if the edge has an owner;
    /// ownership never changes again until a full reset.
    pub fn claim_edge(&mut self, edge: EdgeRef, player: PlayerId) -> Result<(), BoardError> {
        let index = self.edge_index(edge)?;
        let slot = match edge.kind {
            EdgeKind::Horizontal => &mut self.h_edges[index],
            EdgeKind::Vertical => &mut self.v_edges[index],
        };
        if slot.is_some() {
            return Err(BoardError::AlreadyOwned);
        }
        *slot = Some(player);
        Ok(())
    }

    pub fn box_cell(&self, boxref: BoxRef) -> Result<BoxCell, BoardError> {
        Ok(self.boxes[self.box_index(boxref)?])
    }

    /// Whether all four bounding edges of the box are owned, by any players.
    pub fn box_closed(&self, boxref: BoxRef) -> Result<bool, BoardError> {
        self.box_index(boxref)?;
        Ok(boxref
            .bounding_edges()
            .iter()
            .all(|&edge| matches!(self.edge_owner(edge), Ok(Some(_)))))
    }

    /// Awards an unowned box to `player`.
    ///
    /// Fails with [`BoardError::AlreadyOwned`] if the box has an owner, so a
    /// box is awarded at most once per round.
    pub fn award_box(&mut self, boxref: BoxRef, player: PlayerId) -> Result<(), BoardError> {
        let index = self.box_index(boxref)?;
        let cell = &mut self.boxes[index];
        if cell.owner.is_some() {
            return Err(BoardError::AlreadyOwned);
        }
        cell.owner = Some(player);
        Ok(())
    }

    /// Clears all edge ownership and box owners; categories stay.
    pub fn clear_ownership(&mut self) {
        self.h_edges.fill(None);
        self.v_edges.fill(None);
        for cell in &mut self.boxes {
            cell.owner = None;
        }
    }

    /// Reclassifies every box from `samples` (row-major, one per box) and
    /// starts a fresh round via [`BoardState::clear_ownership`].
    ///
    /// Fails with [`PatternError::LengthMismatch`] unless exactly `n²`
    /// samples are supplied, in which case nothing changes.
    pub fn load_categories(
        &mut self,
        samples: &[Rgb],
        palette: &Palette,
    ) -> Result<(), PatternError> {
        let expected = self.grid * self.grid;
        if samples.len() != expected {
            return Err(PatternError::LengthMismatch {
                expected,
                actual: samples.len(),
            });
        }
        for (cell, &sample) in self.boxes.iter_mut().zip(samples) {
            cell.category = palette.classify(sample);
        }
        self.clear_ownership();
        Ok(())
    }

    /// Horizontal edge rows, top to bottom (`n+1` rows of `n` edges).
    pub fn h_edge_rows(&self) -> impl Iterator<Item = &[Option<PlayerId>]> {
        self.h_edges.chunks_exact(self.grid)
    }

    /// Vertical edge rows, top to bottom (`n` rows of `n+1` edges).
    pub fn v_edge_rows(&self) -> impl Iterator<Item = &[Option<PlayerId>]> {
        self.v_edges.chunks_exact(self.grid + 1)
    }

    /// Box rows, top to bottom (`n` rows of `n` cells).
    pub fn box_rows(&self) -> impl Iterator<Item = &[BoxCell]> {
        self.boxes.chunks_exact(self.grid)
    }

    /// Every edge of the board, horizontals first.
    pub fn edge_refs(&self) -> impl Iterator<Item = EdgeRef> + use<> {
        let grid = self.grid;
        let horizontal =
            (0..=grid).flat_map(move |row| (0..grid).map(move |col| EdgeRef::horizontal(row, col)));
        let vertical =
            (0..grid).flat_map(move |row| (0..=grid).map(move |col| EdgeRef::vertical(row, col)));
        horizontal.chain(vertical)
    }

    /// True once every edge is owned; no legal move remains.
    #[must_use]
    pub fn all_edges_owned(&self) -> bool {
        self.h_edges.iter().chain(&self.v_edges).all(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    #[test]
    fn test_new_board_is_all_free() {
        let board = BoardState::new(3);
        for edge in board.edge_refs() {
            assert_eq!(board.edge_owner(edge), Ok(None));
        }
        for row in 0..3 {
            for col in 0..3 {
                let cell = board.box_cell(BoxRef::new(row, col)).unwrap();
                assert_eq!(cell.owner, None);
                assert_eq!(cell.category, Category::default());
            }
        }
        assert!(!board.all_edges_owned());
    }

    #[test]
    fn test_edge_ranges() {
        let board = BoardState::new(2);
        // H[r][c]: r in 0..=2, c in 0..2
        assert!(board.edge_owner(EdgeRef::horizontal(2, 1)).is_ok());
        assert_eq!(
            board.edge_owner(EdgeRef::horizontal(3, 0)),
            Err(BoardError::OutOfRange),
        );
        assert_eq!(
            board.edge_owner(EdgeRef::horizontal(0, 2)),
            Err(BoardError::OutOfRange),
        );
        // V[r][c]: r in 0..2, c in 0..=2
        assert!(board.edge_owner(EdgeRef::vertical(1, 2)).is_ok());
        assert_eq!(
            board.edge_owner(EdgeRef::vertical(2, 0)),
            Err(BoardError::OutOfRange),
        );
        assert_eq!(
            board.edge_owner(EdgeRef::vertical(0, 3)),
            Err(BoardError::OutOfRange),
        );
    }

    #[test]
    fn test_claim_edge_sets_owner_once() {
        let mut board = BoardState::new(2);
        let edge = EdgeRef::horizontal(0, 0);
        board.claim_edge(edge, P0).unwrap();
        assert_eq!(board.edge_owner(edge), Ok(Some(P0)));

        assert_eq!(board.claim_edge(edge, P1), Err(BoardError::AlreadyOwned));
        assert_eq!(board.edge_owner(edge), Ok(Some(P0)), "owner must not change");
    }

    #[test]
    fn test_claim_edge_out_of_range_leaves_board_unchanged() {
        let mut board = BoardState::new(2);
        let before = board.clone();
        assert_eq!(
            board.claim_edge(EdgeRef::vertical(2, 0), P0),
            Err(BoardError::OutOfRange),
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_box_closed_requires_all_four_edges() {
        let mut board = BoardState::new(2);
        let target = BoxRef::new(0, 0);
        let [top, bottom, left, right] = target.bounding_edges();

        for edge in [top, bottom, left] {
            board.claim_edge(edge, P0).unwrap();
            assert!(!board.box_closed(target).unwrap());
        }
        // Mixed ownership still closes the box.
        board.claim_edge(right, P1).unwrap();
        assert!(board.box_closed(target).unwrap());

        assert_eq!(
            board.box_closed(BoxRef::new(2, 0)),
            Err(BoardError::OutOfRange),
        );
    }

    #[test]
    fn test_award_box_only_once() {
        let mut board = BoardState::new(2);
        let target = BoxRef::new(1, 1);
        board.award_box(target, P1).unwrap();
        assert_eq!(board.box_cell(target).unwrap().owner, Some(P1));
        assert_eq!(board.award_box(target, P0), Err(BoardError::AlreadyOwned));
        assert_eq!(board.box_cell(target).unwrap().owner, Some(P1));
    }

    #[test]
    fn test_clear_ownership_keeps_categories() {
        let palette = Palette::reference();
        let mut board = BoardState::new(2);
        let samples = vec![
            Rgb(235, 244, 228),
            Rgb(255, 230, 153),
            Rgb(191, 143, 0),
            Rgb(235, 244, 228),
        ];
        board.load_categories(&samples, &palette).unwrap();
        let categories: Vec<_> = board
            .box_rows()
            .flatten()
            .map(|cell| cell.category)
            .collect();

        board.claim_edge(EdgeRef::horizontal(0, 0), P0).unwrap();
        board.award_box(BoxRef::new(0, 0), P0).unwrap();
        board.clear_ownership();

        assert_eq!(board.edge_owner(EdgeRef::horizontal(0, 0)), Ok(None));
        assert_eq!(board.box_cell(BoxRef::new(0, 0)).unwrap().owner, None);
        let after: Vec<_> = board
            .box_rows()
            .flatten()
            .map(|cell| cell.category)
            .collect();
        assert_eq!(after, categories);
    }

    #[test]
    fn test_load_categories_length_mismatch_is_atomic() {
        let palette = Palette::reference();
        let mut board = BoardState::new(2);
        board.claim_edge(EdgeRef::horizontal(0, 0), P0).unwrap();
        let before = board.clone();

        let samples = vec![Rgb(0, 0, 0); 3];
        assert_eq!(
            board.load_categories(&samples, &palette),
            Err(PatternError::LengthMismatch {
                expected: 4,
                actual: 3,
            }),
        );
        assert_eq!(board, before, "failed load must not touch the board");
    }

    #[test]
    fn test_load_categories_is_row_major_and_resets_ownership() {
        let palette = Palette::reference();
        let mut board = BoardState::new(2);
        board.claim_edge(EdgeRef::vertical(0, 0), P0).unwrap();

        // Row 0: verde, amarillo; row 1: marron, marron.
        let samples = vec![
            Rgb(235, 244, 228),
            Rgb(255, 230, 153),
            Rgb(191, 143, 0),
            Rgb(191, 143, 0),
        ];
        board.load_categories(&samples, &palette).unwrap();

        let names: Vec<_> = board
            .box_rows()
            .flatten()
            .map(|cell| palette.spec(cell.category).name.clone())
            .collect();
        assert_eq!(names, ["verde", "amarillo", "marron", "marron"]);
        assert_eq!(board.edge_owner(EdgeRef::vertical(0, 0)), Ok(None));
    }

    #[test]
    fn test_edge_refs_covers_the_lattice() {
        let board = BoardState::new(3);
        // 2 * n * (n + 1) edges on an n×n board.
        assert_eq!(board.edge_refs().count(), 24);

        let mut board = BoardState::new(2);
        for edge in board.edge_refs().collect::<Vec<_>>() {
            board.claim_edge(edge, P0).unwrap();
        }
        assert!(board.all_edges_owned());
    }
}
