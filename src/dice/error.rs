use crate::ROW_LENGTH;

/// Why an explicit roll was rejected at construction.
///
/// Each cause names the offending position so the caller can point at
/// the exact die. There is no partially constructed roll; validation
/// failure aborts construction entirely.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ValidationError {
    /// The candidate sequence does not hold exactly ROW_LENGTH values.
    Length(usize),
    /// A token could not be read as an integer.
    Integer { position: usize, token: String },
    /// A value falls outside the nominal bounds.
    Nominal { position: usize, value: u8 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Length(found) => {
                write!(f, "incorrect row size: expected {}, got {}", ROW_LENGTH, found)
            }
            Self::Integer { position, token } => {
                write!(f, "incorrect row value type '{}' on {} position", token, position)
            }
            Self::Nominal { position, value } => {
                write!(f, "incorrect row value {} on {} position", value, position)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_position() {
        let error = ValidationError::Nominal { position: 3, value: 9 };
        assert!(error.to_string().contains("3 position"));
        assert!(error.to_string().contains('9'));
    }
}
