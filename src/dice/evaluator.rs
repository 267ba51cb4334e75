use super::nominal::Nominal;
use super::ranking::Ranking;
use super::roll::Roll;
use crate::ROW_LENGTH;
use std::ops::Range;

/// Classifies a roll into its hand category.
///
/// Holds an ascending copy of the roll and walks the category detectors
/// in rank order, strongest first, so a roll satisfying several
/// patterns lands on its highest rank. Every detector reduces to two
/// primitives over the sorted values: a contiguous window holding a
/// single distinct value, and a strictly consecutive run.
pub struct Evaluator([Nominal; ROW_LENGTH]);

impl From<Roll> for Evaluator {
    fn from(roll: Roll) -> Self {
        Self(roll.sorted())
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_poker())
            .or_else(|| self.find_quad())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_big_straight())
            .or_else(|| self.find_lil_straight())
            .or_else(|| self.find_trips())
            .or_else(|| self.find_two_pair())
            .or_else(|| self.find_pair())
            .unwrap_or(Ranking::Chance)
    }

    ///

    /// all five dice of one face
    fn find_poker(&self) -> Option<Ranking> {
        self.constant(0..5).then_some(Ranking::Poker)
    }
    /// four of a kind sits at either end of the sorted row
    fn find_quad(&self) -> Option<Ranking> {
        (self.constant(1..5) || self.constant(0..4)).then_some(Ranking::Quad)
    }
    /// pair plus trips partition the sorted row into two blocks
    fn find_full_house(&self) -> Option<Ranking> {
        let xx_yyy = self.constant(0..2) && self.constant(2..5);
        let xxx_yy = self.constant(0..3) && self.constant(3..5);
        (xx_yyy || xxx_yy).then_some(Ranking::FullHouse)
    }
    /// all five values strictly consecutive
    fn find_big_straight(&self) -> Option<Ranking> {
        Self::increasing(&self.0).then_some(Ranking::BigStraight)
    }
    /// four distinct consecutive values; with five distinct values the
    /// run may shed either end
    fn find_lil_straight(&self) -> Option<Ranking> {
        let distinct = self.distinct();
        match distinct.len() {
            n if n < 4 => None,
            4 => Self::increasing(&distinct).then_some(Ranking::LilStraight),
            _ => (Self::increasing(&distinct[1..]) || Self::increasing(&distinct[..4]))
                .then_some(Ranking::LilStraight),
        }
    }
    fn find_trips(&self) -> Option<Ranking> {
        (self.constant(0..3) || self.constant(1..4) || self.constant(2..5))
            .then_some(Ranking::Trips)
    }
    /// two disjoint pairs: xx-yy-z, xx-z-yy, or z-xx-yy
    fn find_two_pair(&self) -> Option<Ranking> {
        let leading = self.constant(0..2) && (self.constant(2..4) || self.constant(3..5));
        let trailing = self.constant(1..3) && self.constant(3..5);
        (leading || trailing).then_some(Ranking::TwoPair)
    }
    fn find_pair(&self) -> Option<Ranking> {
        (self.distinct().len() < ROW_LENGTH).then_some(Ranking::Pair)
    }

    ///

    /// does this window of the sorted row hold a single distinct value
    fn constant(&self, window: Range<usize>) -> bool {
        self.0[window].windows(2).all(|w| w[0] == w[1])
    }
    /// do adjacent values step up by exactly one
    fn increasing(row: &[Nominal]) -> bool {
        row.windows(2).all(|w| u8::from(w[1]) == u8::from(w[0]) + 1)
    }
    /// sorted values with duplicates removed
    fn distinct(&self) -> Vec<Nominal> {
        let mut row = self.0.to_vec();
        row.dedup();
        row
    }
}
