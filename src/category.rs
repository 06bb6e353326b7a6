use crate::error::{HandError, HandResult};
use itertools::Itertools;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The ten hand categories, lowest rank first.
///
/// The declaration order is the rank order; `rank()` is the stable index used by
/// menus and reports. Parsing accepts the display name or a snake_case name,
/// ignoring ASCII case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum HandCategory {
    #[strum(to_string = "High Roll", serialize = "high_roll", serialize = "highroll")]
    HighRoll,
    #[strum(to_string = "Pair")]
    Pair,
    #[strum(to_string = "Two Pair", serialize = "two_pair", serialize = "twopair")]
    TwoPair,
    #[strum(to_string = "Triple")]
    Triple,
    #[strum(
        to_string = "Small Straight",
        serialize = "small_straight",
        serialize = "smallstraight"
    )]
    SmallStraight,
    #[strum(to_string = "Flush")]
    Flush,
    #[strum(to_string = "Full House", serialize = "full_house", serialize = "fullhouse")]
    FullHouse,
    #[strum(
        to_string = "Big Straight",
        serialize = "big_straight",
        serialize = "bigstraight"
    )]
    BigStraight,
    #[strum(to_string = "Quad")]
    Quad,
    #[strum(to_string = "Jackpot")]
    Jackpot,
}

impl HandCategory {
    pub const COUNT: usize = 10;

    pub const ALL: [Self; Self::COUNT] = [
        Self::HighRoll,
        Self::Pair,
        Self::TwoPair,
        Self::Triple,
        Self::SmallStraight,
        Self::Flush,
        Self::FullHouse,
        Self::BigStraight,
        Self::Quad,
        Self::Jackpot,
    ];

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Menu label, e.g. `"Two Pair - 2"`.
    pub fn display_name_value(self) -> String {
        format!("{} - {}", self.name(), self.rank())
    }

    pub fn from_rank(rank: u8) -> HandResult<Self> {
        Self::ALL
            .get(rank as usize)
            .copied()
            .ok_or_else(|| HandError::UnknownCategory(rank.to_string()))
    }

    pub fn from_name(name: &str) -> HandResult<Self> {
        name.trim()
            .parse()
            .map_err(|_| HandError::UnknownCategory(name.to_string()))
    }

    /// Every category except High Roll, in rank order.
    pub fn scored() -> impl Iterator<Item = Self> {
        Self::iter().filter(|c| *c != Self::HighRoll)
    }
}

/// Resolves a category from either its rank (`"3"`) or its name (`"triple"`).
pub fn parse_category(input: &str) -> HandResult<HandCategory> {
    match input.trim().parse::<u8>() {
        Ok(rank) => HandCategory::from_rank(rank),
        Err(_) => HandCategory::from_name(input),
    }
}

/// A set of categories stored as one bit per rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategorySet(u16);

impl CategorySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn only(category: HandCategory) -> Self {
        Self(Self::bit(category))
    }

    fn bit(category: HandCategory) -> u16 {
        1 << category.rank()
    }

    pub fn insert(&mut self, category: HandCategory) {
        self.0 |= Self::bit(category);
    }

    pub fn remove(&mut self, category: HandCategory) {
        self.0 &= !Self::bit(category);
    }

    /// Adds the category if absent, removes it if present.
    pub fn toggle(&mut self, category: HandCategory) {
        self.0 ^= Self::bit(category);
    }

    pub fn with(mut self, category: HandCategory) -> Self {
        self.insert(category);
        self
    }

    pub fn contains(&self, category: HandCategory) -> bool {
        self.0 & Self::bit(category) != 0
    }

    pub fn intersects(&self, other: &CategorySet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in rank order.
    pub fn iter(&self) -> impl Iterator<Item = HandCategory> + '_ {
        HandCategory::iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<HandCategory> for CategorySet {
    fn from_iter<I: IntoIterator<Item = HandCategory>>(iter: I) -> Self {
        let mut set = Self::empty();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().map(HandCategory::name).join(", "))
    }
}

impl Serialize for CategorySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// A value for every category, indexed by rank.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMap<T>([T; HandCategory::COUNT]);

impl<T> CategoryMap<T> {
    pub fn from_fn(mut f: impl FnMut(HandCategory) -> T) -> Self {
        Self(std::array::from_fn(|rank| f(HandCategory::ALL[rank])))
    }

    pub fn iter(&self) -> impl Iterator<Item = (HandCategory, &T)> {
        HandCategory::iter().zip(self.0.iter())
    }
}

impl<T: Default> Default for CategoryMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<HandCategory> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: HandCategory) -> &T {
        &self.0[category as usize]
    }
}

impl<T> IndexMut<HandCategory> for CategoryMap<T> {
    fn index_mut(&mut self, category: HandCategory) -> &mut T {
        &mut self.0[category as usize]
    }
}
