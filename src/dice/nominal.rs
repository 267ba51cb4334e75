use crate::Arbitrary;
use crate::MAX_NOMINAL;
use crate::MIN_NOMINAL;
use rand::Rng;

/// A single die's face value, bounded by MIN_NOMINAL..=MAX_NOMINAL.
///
/// Constructed only through the fallible u8 conversion, so a Nominal
/// in hand is always within bounds.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Nominal(u8);

impl Nominal {
    /// Draw a uniform face value from the given source of randomness.
    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        Self(rng.random_range(MIN_NOMINAL..=MAX_NOMINAL))
    }
}

impl Arbitrary for Nominal {
    fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }
}

/// u8 injection
///
/// fallible in one direction: out-of-bounds values hand back the
/// offending u8 so the caller can attach position diagnostics.
impl TryFrom<u8> for Nominal {
    type Error = u8;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        if (MIN_NOMINAL..=MAX_NOMINAL).contains(&n) {
            Ok(Self(n))
        } else {
            Err(n)
        }
    }
}
impl From<Nominal> for u8 {
    fn from(n: Nominal) -> u8 {
        n.0
    }
}

impl std::fmt::Display for Nominal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
