/// Index of a player in the session's configured player list.
///
/// Player identity (display name, color) lives in
/// [`PlayerSpec`](crate::engine::PlayerSpec); the board and scores only ever
/// store this index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(u8);

impl PlayerId {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player after this one in turn order, wrapping at `count`.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn next(self, count: usize) -> Self {
        debug_assert!(count > 0);
        Self(((self.index() + 1) % count) as u8)
    }
}
