//! Plays random legal games through the engine's public interface.

use chess_core::Color;
use chess_engine::{Game, GameError, GameStatus};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::fmt;
use tracing::debug;

/// Outcome of one self-play game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    /// One-based game number within the run.
    pub number: u32,
    /// Half-moves played.
    pub plies: usize,
    /// Final status; `InProgress` means the ply limit was hit.
    pub status: GameStatus,
    /// Final position in FEN.
    pub final_fen: String,
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game {}: ", self.number)?;
        match self.status {
            GameStatus::InProgress => write!(f, "unfinished")?,
            GameStatus::Checkmate(loser) => {
                write!(f, "{} wins by checkmate", loser.opposite())?
            }
            GameStatus::Stalemate(_) => write!(f, "draw by stalemate")?,
        }
        write!(f, " after {} plies ({})", self.plies, self.final_fen)
    }
}

/// Tally of results across a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Totals {
    pub white_wins: u32,
    pub black_wins: u32,
    pub stalemates: u32,
    pub unfinished: u32,
}

impl Totals {
    /// Adds one game's result.
    pub fn record(&mut self, report: &GameReport) {
        match report.status.winner() {
            Some(Color::White) => self.white_wins += 1,
            Some(Color::Black) => self.black_wins += 1,
            None if report.status.is_over() => self.stalemates += 1,
            None => self.unfinished += 1,
        }
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "white wins: {}, black wins: {}, stalemates: {}, unfinished: {}",
            self.white_wins, self.black_wins, self.stalemates, self.unfinished
        )
    }
}

/// Plays one game from `game`'s current position until it ends or
/// `max_plies` moves have been made.
pub fn play_game(
    number: u32,
    mut game: Game,
    max_plies: usize,
    rng: &mut StdRng,
) -> Result<GameReport, GameError> {
    debug!(game = number, fen = %game.board().to_fen(), "starting game");

    while game.ply_count() < max_plies {
        let moves = game.all_legal_moves();
        let Some(&mv) = moves.choose(rng) else {
            break;
        };
        game.apply_move(mv.from, mv.to)?;
    }

    Ok(GameReport {
        number,
        plies: game.ply_count(),
        status: game.status(),
        final_fen: game.board().to_fen(),
    })
}
