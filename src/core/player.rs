//! Player identification.
//!
//! Two players alternate: player 0 moves first, player 1 second.

use serde::{Deserialize, Serialize};

use super::error::PlayerOutOfRange;

/// One of the two players.
///
/// ```
/// use spooky_ttt::core::PlayerId;
///
/// assert_eq!(PlayerId::FIRST.other(), PlayerId::SECOND);
/// assert_eq!(PlayerId::SECOND.other(), PlayerId::FIRST);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who opens the game.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Both players in turn order.
    pub const ALL: [PlayerId; 2] = [Self::FIRST, Self::SECOND];

    /// Get the raw player index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opponent.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(self.0 ^ 1)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = PlayerOutOfRange;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 | 1 => Ok(Self(index)),
            _ => Err(PlayerOutOfRange(index)),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_involution() {
        for player in PlayerId::ALL {
            assert_ne!(player.other(), player);
            assert_eq!(player.other().other(), player);
        }
    }

    #[test]
    fn test_default_is_first() {
        assert_eq!(PlayerId::default(), PlayerId::FIRST);
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
    }

    #[test]
    fn test_try_from_range() {
        assert_eq!(PlayerId::try_from(1), Ok(PlayerId::SECOND));
        assert_eq!(PlayerId::try_from(2), Err(PlayerOutOfRange(2)));
        assert_eq!(u8::from(PlayerId::SECOND), 1);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let ok: PlayerId = serde_json::from_str("1").unwrap();
        assert_eq!(ok, PlayerId::SECOND);
        assert_eq!(serde_json::to_string(&PlayerId::FIRST).unwrap(), "0");
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
        assert!(serde_json::from_str::<PlayerId>("7").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayerId::SECOND.to_string(), "Player 1");
    }
}
