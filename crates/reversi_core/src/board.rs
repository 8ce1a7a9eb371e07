use std::fmt;

use crate::bitboard::Bitboard;
use crate::error::CoreError;
use crate::movegen::flips_for;
use crate::types::*;

/// A board snapshot: one bitboard per player.
///
/// Positions are immutable values. Playing a move never modifies the
/// receiver; `apply` returns the successor position, so callers (and the
/// search in particular) can hold on to any ancestor state without it
/// changing underneath them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub dark: Bitboard,
    pub light: Bitboard,
}

impl Position {
    /// The standard four-disc starting setup. Dark plays first.
    pub fn start() -> Self {
        let mut dark = Bitboard::EMPTY;
        let mut light = Bitboard::EMPTY;
        dark.set(28); // e4
        dark.set(35); // d5
        light.set(27); // d4
        light.set(36); // e5
        Position { dark, light }
    }

    /// An empty board, for building test positions.
    pub fn empty() -> Self {
        Position {
            dark: Bitboard::EMPTY,
            light: Bitboard::EMPTY,
        }
    }

    #[inline(always)]
    pub fn discs(&self, side: Disc) -> Bitboard {
        match side {
            Disc::Dark => self.dark,
            Disc::Light => self.light,
        }
    }

    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.dark | self.light
    }

    #[inline(always)]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied()
    }

    pub fn disc_count(&self, side: Disc) -> u32 {
        self.discs(side).popcount()
    }

    pub fn disc_at(&self, sq: u8) -> Option<Disc> {
        if self.dark.contains(sq) {
            Some(Disc::Dark)
        } else if self.light.contains(sq) {
            Some(Disc::Light)
        } else {
            None
        }
    }

    /// Play a generated move, returning the successor position.
    ///
    /// Pure: `self` is left untouched. The move must come from move
    /// generation (or validated parsing) against this exact position; a
    /// placement onto an occupied square means the caller broke that
    /// contract, and the mismatch is fatal rather than silently absorbed.
    pub fn apply(&self, mv: &Move) -> Position {
        assert!(
            !self.occupied().contains(mv.sq),
            "move {} applied to an occupied square",
            sq_to_coord(mv.sq)
        );
        let mut next = *self;
        match mv.side {
            Disc::Dark => {
                next.dark.set(mv.sq);
                next.dark |= mv.flips;
                next.light &= !mv.flips;
            }
            Disc::Light => {
                next.light.set(mv.sq);
                next.light |= mv.flips;
                next.dark &= !mv.flips;
            }
        }
        next
    }

    /// Validate a placement for `side` and play it.
    ///
    /// This is the entry point for moves that arrive from outside the move
    /// generator (protocol input, humans). Returns the successor position
    /// together with the fully resolved move.
    pub fn try_apply(&self, sq: u8, side: Disc) -> Result<(Position, Move), CoreError> {
        if self.occupied().contains(sq) {
            return Err(CoreError::IllegalMove {
                coord: sq_to_coord(sq),
                side,
            });
        }
        let flips = flips_for(self, sq, side);
        if flips.is_empty() {
            return Err(CoreError::IllegalMove {
                coord: sq_to_coord(sq),
                side,
            });
        }
        let mv = Move::new(sq, side, flips);
        Ok((self.apply(&mv), mv))
    }

    /// Parse a position from an eight-row diagram, rank 8 first.
    ///
    /// `x`/`X` is a dark disc, `o`/`O` a light disc, `.` an empty square.
    /// Whitespace between rows is ignored.
    pub fn from_grid(grid: &str) -> Result<Self, CoreError> {
        let rows: Vec<&str> = grid.split_whitespace().collect();
        if rows.len() != 8 {
            return Err(CoreError::BadDiagram(format!(
                "expected 8 rows, found {}",
                rows.len()
            )));
        }
        let mut pos = Position::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != 8 {
                return Err(CoreError::BadDiagram(format!(
                    "row {} has {} squares",
                    8 - row_idx,
                    row.len()
                )));
            }
            let rank = 7 - row_idx as u8;
            for (file, ch) in row.chars().enumerate() {
                let sq = rank * 8 + file as u8;
                match ch {
                    'x' | 'X' => pos.dark.set(sq),
                    'o' | 'O' => pos.light.set(sq),
                    '.' => {}
                    other => {
                        return Err(CoreError::BadDiagram(format!(
                            "unexpected character '{other}'"
                        )));
                    }
                }
            }
        }
        Ok(pos)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let sq = rank * 8 + file;
                let ch = match self.disc_at(sq) {
                    Some(Disc::Dark) => 'x',
                    Some(Disc::Light) => 'o',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "dark {} - {} light",
            self.disc_count(Disc::Dark),
            self.disc_count(Disc::Light)
        )
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
