pub use self::{board::*, edge::*, palette::*, player::*};

pub(crate) mod board;
pub(crate) mod edge;
pub(crate) mod palette;
pub(crate) mod player;
