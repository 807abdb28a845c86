use arrayvec::ArrayVec;

use crate::{
    BoardError, PatternError,
    core::{
        board::BoardState,
        edge::{BoxRef, EdgeRef},
        palette::{Palette, Rgb},
        player::PlayerId,
    },
    engine::{
        config::{GameConfig, PlayerSpec},
        score_board::ScoreBoard,
    },
};

/// Result of a successful edge placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Boxes closed by this move, in visit order. At most two: an interior
    /// edge touches two boxes, a boundary edge one.
    pub closed: ArrayVec<BoxRef, 2>,
    /// Player to move next. After any closure this is the acting player
    /// again; closing two boxes with one edge still grants a single repeat
    /// turn.
    pub next_player: PlayerId,
}

/// One game session: board, scores, and the turn state machine.
///
/// Play continues until every edge is owned; the session raises no
/// end-of-game signal beyond the derived [`GameSession::is_complete`] query.
///
/// # Example
///
/// ```
/// use chakana_engine::{EdgeRef, GameConfig, GameSession, PlayerId};
///
/// let mut session = GameSession::new(GameConfig::default());
/// assert_eq!(session.active_player(), PlayerId::new(0));
///
/// // No closure, so the turn passes.
/// let outcome = session.place_edge(EdgeRef::vertical(3, 3)).unwrap();
/// assert_eq!(outcome.next_player, PlayerId::new(1));
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: BoardState,
    scores: ScoreBoard,
    active_player: PlayerId,
}

impl GameSession {
    /// # Panics
    ///
    /// Panics if the configuration has no players, more players than
    /// [`PlayerId`] can index, or a zero-sized grid.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        assert!(!config.players.is_empty(), "session needs a player");
        assert!(
            config.players.len() <= usize::from(u8::MAX) + 1,
            "too many players",
        );
        let board = BoardState::new(config.grid);
        let scores = ScoreBoard::new(config.players.len());
        Self {
            config,
            board,
            scores,
            active_player: PlayerId::new(0),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub const fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    #[must_use]
    pub const fn active_player(&self) -> PlayerId {
        self.active_player
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.config.palette
    }

    pub fn player_spec(&self, player: PlayerId) -> Result<&PlayerSpec, BoardError> {
        self.config
            .players
            .get(player.index())
            .ok_or(BoardError::OutOfRange)
    }

    /// Places an edge for the active player.
    ///
    /// Claims the edge, awards any adjacent boxes the claim closed (adding
    /// their category points to the acting player's score), then transfers
    /// the turn unless at least one box closed. All-or-nothing: a rejected
    /// claim changes no state.
    pub fn place_edge(&mut self, edge: EdgeRef) -> Result<MoveOutcome, BoardError> {
        let player = self.active_player;
        self.board.claim_edge(edge, player)?;

        let mut closed = ArrayVec::new();
        for boxref in edge.adjacent_boxes(self.config.grid) {
            let cell = self.board.box_cell(boxref)?;
            if cell.owner.is_some() || !self.board.box_closed(boxref)? {
                continue;
            }
            self.board.award_box(boxref, player)?;
            self.scores
                .add(player, self.config.palette.points(cell.category))?;
            closed.push(boxref);
        }

        if closed.is_empty() {
            self.active_player = player.next(self.config.players.len());
        }
        Ok(MoveOutcome {
            closed,
            next_player: self.active_player,
        })
    }

    /// Starts a round over a new pattern: reclassifies every box from
    /// `samples`, zeroes all scores, and hands the turn to player 0.
    ///
    /// Fails like [`BoardState::load_categories`] on bad input, in which
    /// case nothing changes.
    pub fn new_round(&mut self, samples: &[Rgb]) -> Result<(), PatternError> {
        self.board.load_categories(samples, &self.config.palette)?;
        self.scores.reset_all();
        self.active_player = PlayerId::new(0);
        Ok(())
    }

    /// Replays the current pattern: clears edges, owners, and scores, and
    /// hands the turn to player 0. Categories stay.
    pub fn reset_round(&mut self) {
        self.board.clear_ownership();
        self.scores.reset_all();
        self.active_player = PlayerId::new(0);
    }

    /// True once every edge is owned and no legal move remains.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.board.all_edges_owned()
    }
}
