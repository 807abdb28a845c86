use crate::{BoardError, core::player::PlayerId};

/// Accumulated points, one slot per configured player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    scores: Vec<u32>,
}

impl ScoreBoard {
    #[must_use]
    pub fn new(players: usize) -> Self {
        Self {
            scores: vec![0; players],
        }
    }

    /// Adds `points` to a player's total, saturating at `u32::MAX`.
    pub fn add(&mut self, player: PlayerId, points: u32) -> Result<(), BoardError> {
        let slot = self
            .scores
            .get_mut(player.index())
            .ok_or(BoardError::OutOfRange)?;
        *slot = slot.saturating_add(points);
        Ok(())
    }

    pub fn get(&self, player: PlayerId) -> Result<u32, BoardError> {
        self.scores
            .get(player.index())
            .copied()
            .ok_or(BoardError::OutOfRange)
    }

    pub fn reset_all(&mut self) {
        self.scores.fill(0);
    }

    /// Totals in player order.
    #[expect(clippy::cast_possible_truncation)]
    pub fn standings(&self) -> impl Iterator<Item = (PlayerId, u32)> {
        self.scores
            .iter()
            .enumerate()
            .map(|(index, &score)| (PlayerId::new(index as u8), score))
    }

    /// Sum over all players.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.scores.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut scores = ScoreBoard::new(2);
        scores.add(PlayerId::new(0), 4).unwrap();
        scores.add(PlayerId::new(0), 2).unwrap();
        scores.add(PlayerId::new(1), 1).unwrap();
        assert_eq!(scores.get(PlayerId::new(0)), Ok(6));
        assert_eq!(scores.get(PlayerId::new(1)), Ok(1));
        assert_eq!(scores.total(), 7);
    }

    #[test]
    fn test_unknown_player_is_out_of_range() {
        let mut scores = ScoreBoard::new(2);
        assert_eq!(
            scores.add(PlayerId::new(2), 1),
            Err(BoardError::OutOfRange),
        );
        assert_eq!(scores.get(PlayerId::new(2)), Err(BoardError::OutOfRange));
    }

    #[test]
    fn test_reset_all_zeroes_every_slot() {
        let mut scores = ScoreBoard::new(3);
        scores.add(PlayerId::new(1), 5).unwrap();
        scores.reset_all();
        assert_eq!(scores.total(), 0);
        assert!(scores.standings().all(|(_, score)| score == 0));
    }
}
