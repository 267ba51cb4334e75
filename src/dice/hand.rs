use super::error::ValidationError;
use super::evaluator::Evaluator;
use super::ranking::Ranking;
use super::roll::Roll;
use crate::Arbitrary;
use rand::Rng;

/// One player's roll plus its classification.
///
/// The roll is fixed at construction; classification is computed on
/// demand from a sorted copy and never touches the stored values.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Hand(Roll);

impl Hand {
    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        Self(Roll::random_with(rng))
    }

    /// the stored roll, original order
    pub fn row(&self) -> &Roll {
        &self.0
    }

    /// the highest-ranked category this roll satisfies
    pub fn ranking(&self) -> Ranking {
        Evaluator::from(self.0).find_ranking()
    }

    /// localized name of the classified category
    pub fn name(&self) -> &'static str {
        self.ranking().name()
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        Self(Roll::random())
    }
}

impl From<Roll> for Hand {
    fn from(roll: Roll) -> Self {
        Self(roll)
    }
}
impl TryFrom<&[u8]> for Hand {
    type Error = ValidationError;
    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        Roll::try_from(values).map(Self)
    }
}
impl TryFrom<&str> for Hand {
    type Error = ValidationError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Roll::try_from(s).map(Self)
    }
}

/// one-line summary: roll then category name
impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.name())
    }
}
