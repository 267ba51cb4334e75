/// A roll's hand category.
///
/// The nine categories are mutually exclusive and totally ordered; the
/// discriminant is the category's rank, lower meaning stronger. Ord is
/// implemented so the stronger hand compares greater.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
#[repr(u8)]
pub enum Ranking {
    Poker = 1,
    Quad = 2,
    FullHouse = 3,
    BigStraight = 4,
    LilStraight = 5,
    Trips = 6,
    TwoPair = 7,
    Pair = 8,
    Chance = 9,
}

impl Ranking {
    /// All nine categories, strongest first.
    pub const fn order() -> [Ranking; 9] {
        [
            Ranking::Poker,
            Ranking::Quad,
            Ranking::FullHouse,
            Ranking::BigStraight,
            Ranking::LilStraight,
            Ranking::Trips,
            Ranking::TwoPair,
            Ranking::Pair,
            Ranking::Chance,
        ]
    }

    /// Localized display name for a numeric rank, "-" for anything
    /// outside the enumeration.
    pub const fn name_of(rank: u8) -> &'static str {
        match rank {
            1 => "Покер",
            2 => "Каре",
            3 => "Фул Хаус",
            4 => "Большой стрит",
            5 => "Малый стрит",
            6 => "Сэт",
            7 => "Две пары",
            8 => "Пара",
            9 => "Шанс",
            _ => "-",
        }
    }

    pub const fn name(&self) -> &'static str {
        Self::name_of(*self as u8)
    }
}

/// stronger hand compares greater, despite carrying the lower rank
impl Ord for Ranking {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        u8::from(*other).cmp(&u8::from(*self))
    }
}
impl PartialOrd for Ranking {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// u8 injection
impl From<Ranking> for u8 {
    fn from(r: Ranking) -> u8 {
        r as u8
    }
}
impl TryFrom<u8> for Ranking {
    type Error = u8;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::order()
            .into_iter()
            .find(|r| *r as u8 == n)
            .ok_or(n)
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for ranking in Ranking::order() {
            assert!(ranking == Ranking::try_from(u8::from(ranking)).unwrap());
        }
    }

    #[test]
    fn stronger_compares_greater() {
        let order = Ranking::order();
        for pair in order.windows(2) {
            assert!(pair[0] > pair[1]);
        }
        assert!(Ranking::Poker > Ranking::Chance);
    }

    #[test]
    fn names_are_nonempty() {
        for ranking in Ranking::order() {
            assert!(!ranking.name().is_empty());
            assert!(ranking.name() != "-");
        }
    }

    #[test]
    fn unknown_rank_gets_sentinel() {
        assert_eq!(Ranking::name_of(0), "-");
        assert_eq!(Ranking::name_of(10), "-");
    }
}
