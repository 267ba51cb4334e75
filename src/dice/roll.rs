use super::error::ValidationError;
use super::nominal::Nominal;
use crate::Arbitrary;
use crate::ROW_LENGTH;
use rand::Rng;

/// An ordered sequence of exactly ROW_LENGTH die values.
///
/// Order is whatever the caller supplied (or the generator drew) and is
/// preserved verbatim; duplicates are allowed. Immutable after
/// construction. Classification works on a sorted copy, never on the
/// stored values.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Roll([Nominal; ROW_LENGTH]);

impl Roll {
    /// Draw ROW_LENGTH independent uniform values from the given
    /// source of randomness.
    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| Nominal::random_with(rng)))
    }

    pub fn iter(&self) -> impl Iterator<Item = Nominal> + '_ {
        self.0.iter().copied()
    }

    /// Ascending copy of the values. The stored roll is untouched.
    pub fn sorted(&self) -> [Nominal; ROW_LENGTH] {
        let mut row = self.0;
        row.sort();
        row
    }
}

impl Arbitrary for Roll {
    fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }
}

/// &[u8] injection
///
/// the incoming sequence must hold exactly ROW_LENGTH values, each
/// within the nominal bounds; the error names the first offender.
impl TryFrom<&[u8]> for Roll {
    type Error = ValidationError;
    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        if values.len() != ROW_LENGTH {
            return Err(ValidationError::Length(values.len()));
        }
        let mut row = Vec::with_capacity(ROW_LENGTH);
        for (position, &value) in values.iter().enumerate() {
            row.push(
                Nominal::try_from(value)
                    .map_err(|value| ValidationError::Nominal { position, value })?,
            );
        }
        Ok(Self(row.try_into().expect("length checked above")))
    }
}
impl TryFrom<Vec<u8>> for Roll {
    type Error = ValidationError;
    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(values.as_slice())
    }
}

/// str isomorphism
///
/// whitespace- or comma-separated die values, e.g. "4 3 1 3 5" or
/// "4,3,1,3,5". A token that is not an integer reports its position.
impl TryFrom<&str> for Roll {
    type Error = ValidationError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let tokens = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect::<Vec<&str>>();
        if tokens.len() != ROW_LENGTH {
            return Err(ValidationError::Length(tokens.len()));
        }
        let mut values = [0u8; ROW_LENGTH];
        for (position, token) in tokens.iter().enumerate() {
            values[position] = token.parse::<u8>().map_err(|_| ValidationError::Integer {
                position,
                token: token.to_string(),
            })?;
        }
        Self::try_from(values.as_slice())
    }
}

impl From<Roll> for [u8; ROW_LENGTH] {
    fn from(roll: Roll) -> Self {
        roll.0.map(u8::from)
    }
}

/// display as the CLI prints it: comma-separated, original order
impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let row = self
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{}", row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_NOMINAL;
    use crate::MIN_NOMINAL;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn preserves_input_order() {
        let roll = Roll::try_from([4, 3, 1, 3, 5].as_slice()).unwrap();
        assert_eq!(<[u8; ROW_LENGTH]>::from(roll), [4, 3, 1, 3, 5]);
    }

    #[test]
    fn sorted_does_not_mutate() {
        let roll = Roll::try_from([4, 3, 1, 3, 5].as_slice()).unwrap();
        let sorted = roll.sorted().map(u8::from);
        assert_eq!(sorted, [1, 3, 3, 4, 5]);
        assert_eq!(<[u8; ROW_LENGTH]>::from(roll), [4, 3, 1, 3, 5]);
    }

    #[test]
    fn rejects_short_row() {
        assert_eq!(
            Roll::try_from([1, 2, 3].as_slice()),
            Err(ValidationError::Length(3))
        );
    }

    #[test]
    fn rejects_long_row() {
        assert_eq!(
            Roll::try_from([1, 2, 3, 4, 5, 6].as_slice()),
            Err(ValidationError::Length(6))
        );
    }

    #[test]
    fn rejects_out_of_bounds_value() {
        assert_eq!(
            Roll::try_from([1, 2, 7, 4, 5].as_slice()),
            Err(ValidationError::Nominal { position: 2, value: 7 })
        );
        assert_eq!(
            Roll::try_from([0, 2, 3, 4, 5].as_slice()),
            Err(ValidationError::Nominal { position: 0, value: 0 })
        );
    }

    #[test]
    fn parses_separated_values() {
        let spaced = Roll::try_from("4 3 1 3 5").unwrap();
        let commas = Roll::try_from("4,3,1,3,5").unwrap();
        assert_eq!(spaced, commas);
    }

    #[test]
    fn rejects_non_integer_token() {
        assert_eq!(
            Roll::try_from("1 2 x 4 5"),
            Err(ValidationError::Integer {
                position: 2,
                token: "x".to_string()
            })
        );
    }

    #[test]
    fn generates_within_bounds() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..1_000 {
            let roll = Roll::random_with(rng);
            for value in <[u8; ROW_LENGTH]>::from(roll) {
                assert!((MIN_NOMINAL..=MAX_NOMINAL).contains(&value));
            }
        }
    }

    #[test]
    fn generates_every_face_eventually() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut seen = [false; 6];
        for _ in 0..1_000 {
            for value in <[u8; ROW_LENGTH]>::from(Roll::random_with(rng)) {
                seen[value as usize - 1] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn displays_comma_separated() {
        let roll = Roll::try_from([4, 3, 1, 3, 5].as_slice()).unwrap();
        assert_eq!(roll.to_string(), "4,3,1,3,5");
    }
}
