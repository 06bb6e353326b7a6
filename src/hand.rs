use crate::category::{CategorySet, HandCategory};
use crate::config::RollConfig;
use crate::consts::{FACE_COUNT, FLUSH_SIZE};
use crate::dice::{validate_face, DiceKey, Face};
use crate::error::{HandError, HandResult};
use itertools::Itertools;
use std::fmt;

/// One concrete roll: a face for every die in the pool, in roll order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    rolls: Vec<Face>,
}

impl Hand {
    pub fn new(rolls: Vec<Face>) -> HandResult<Self> {
        for &face in &rolls {
            validate_face(face)?;
        }
        Ok(Self { rolls })
    }

    /// For sequences the enumerator builds from `FACES` itself.
    pub(crate) fn from_faces(rolls: Vec<Face>) -> Self {
        Self { rolls }
    }

    pub fn rolls(&self) -> &[Face] {
        &self.rolls
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    fn check_len(&self, config: &RollConfig) -> HandResult<()> {
        if self.rolls.len() < config.relevant_dice() {
            return Err(HandError::PartitionOverflow {
                required: config.relevant_dice(),
                available: self.rolls.len(),
            });
        }
        Ok(())
    }

    /// The relevant dice in raw order. Hands that only differ in unread
    /// trailing dice share this key.
    pub fn unique_prefix_key(&self, config: &RollConfig) -> HandResult<DiceKey> {
        self.check_len(config)?;
        Ok(DiceKey::raw(&self.rolls[..config.relevant_dice()]))
    }

    /// Communal and normal dice in raw order: a distinct roll as the player
    /// sees it (7776 of them for two communal and three normal dice).
    pub fn unique_roll_key(&self, config: &RollConfig) -> HandResult<DiceKey> {
        self.check_len(config)?;
        let end = config.communal_rolls + config.normal_rolls;
        Ok(DiceKey::raw(&self.rolls[..end]))
    }

    pub fn partition(&self, config: &RollConfig) -> HandResult<PartitionedHand> {
        self.check_len(config)?;
        Ok(PartitionedHand::new(&self.rolls, config))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rolls.iter().join(""))
    }
}

/// Face statistics over a multiset of dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceProfile {
    counts: [u8; FACE_COUNT],
}

impl DiceProfile {
    /// Faces must already be in `1..=6`; outside callers get a profile from
    /// `Hand::partition`, which validates through `Hand::new`.
    pub(crate) fn from_dice(dice: &[Face]) -> Self {
        let mut counts = [0u8; FACE_COUNT];
        for &face in dice {
            counts[(face - 1) as usize] += 1;
        }
        Self { counts }
    }

    /// Distinct faces rolled more than once.
    pub fn duplicate_count(&self) -> usize {
        self.counts.iter().filter(|&&n| n > 1).count()
    }

    /// Size of the largest group of equal faces.
    pub fn max_multiple(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0) as usize
    }

    /// Longest run of consecutive faces present at least once.
    pub fn longest_straight(&self) -> usize {
        let mut best = 0;
        let mut run = 0;
        for &n in &self.counts {
            if n > 0 {
                run += 1;
                best = best.max(run);
            } else {
                run = 0;
            }
        }
        best
    }

    pub fn even_count(&self) -> usize {
        (self.counts[1] + self.counts[3] + self.counts[5]) as usize
    }

    pub fn odd_count(&self) -> usize {
        (self.counts[0] + self.counts[2] + self.counts[4]) as usize
    }

    pub fn satisfies(&self, category: HandCategory) -> bool {
        match category {
            HandCategory::HighRoll => true,
            HandCategory::Pair => self.duplicate_count() >= 1,
            HandCategory::TwoPair => self.duplicate_count() >= 2,
            HandCategory::Triple => self.max_multiple() >= 3,
            HandCategory::SmallStraight => self.longest_straight() >= 4,
            HandCategory::Flush => {
                self.even_count() >= FLUSH_SIZE || self.odd_count() >= FLUSH_SIZE
            }
            HandCategory::FullHouse => self.duplicate_count() >= 2 && self.max_multiple() >= 3,
            HandCategory::BigStraight => self.longest_straight() >= 5,
            HandCategory::Quad => self.max_multiple() >= 4,
            HandCategory::Jackpot => self.max_multiple() >= 5,
        }
    }

    /// Every category above High Roll that these dice make.
    pub fn matched(&self) -> CategorySet {
        HandCategory::scored().filter(|c| self.satisfies(*c)).collect()
    }
}

/// A hand split into its communal, normal and extra dice.
///
/// Each partition is stored sorted, so every derived key is order-free within
/// its partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionedHand {
    prefix: Vec<Face>,
    communal: Vec<Face>,
    normal: Vec<Face>,
    extra: Vec<Face>,
    effective: Vec<Face>,
    profile: DiceProfile,
}

impl PartitionedHand {
    fn new(rolls: &[Face], config: &RollConfig) -> Self {
        let sorted = |range: std::ops::Range<usize>| -> Vec<Face> {
            rolls[range].iter().copied().sorted_unstable().collect()
        };
        let communal = sorted(config.communal_range());
        let normal = sorted(config.normal_range());
        let extra = sorted(config.extra_range());
        let prefix = rolls[..config.relevant_dice()].to_vec();
        let effective: Vec<Face> = prefix.iter().copied().sorted_unstable().collect();
        let profile = DiceProfile::from_dice(&effective);

        Self {
            prefix,
            communal,
            normal,
            extra,
            effective,
            profile,
        }
    }

    pub fn communal(&self) -> &[Face] {
        &self.communal
    }

    pub fn normal(&self) -> &[Face] {
        &self.normal
    }

    pub fn extra(&self) -> &[Face] {
        &self.extra
    }

    pub fn profile(&self) -> &DiceProfile {
        &self.profile
    }

    pub fn communal_key(&self) -> DiceKey {
        DiceKey::raw(&self.communal)
    }

    pub fn normal_key(&self) -> DiceKey {
        DiceKey::raw(&self.normal)
    }

    pub fn extra_key(&self) -> DiceKey {
        DiceKey::raw(&self.extra)
    }

    /// Identifies hands whose fixed dice match, so one can be rerolled into the other.
    pub fn rerollable_key(&self) -> DiceKey {
        DiceKey::concat(&[&self.communal, &self.extra])
    }

    /// Identifies hands that are the same up to order within each partition.
    pub fn isomorphic_key(&self) -> DiceKey {
        DiceKey::concat(&[&self.communal, &self.normal, &self.extra])
    }

    /// All relevant dice as one multiset, ignoring partition boundaries.
    pub fn effective_key(&self) -> DiceKey {
        DiceKey::raw(&self.effective)
    }

    pub fn unique_prefix_key(&self) -> DiceKey {
        DiceKey::raw(&self.prefix)
    }

    pub fn satisfies(&self, category: HandCategory) -> bool {
        self.profile.satisfies(category)
    }

    /// Categories the hand belongs to when filtering: every matched category,
    /// or High Roll alone when nothing else matches.
    pub fn categories(&self) -> CategorySet {
        let matched = self.profile.matched();
        if matched.is_empty() {
            CategorySet::only(HandCategory::HighRoll)
        } else {
            matched
        }
    }

    /// Normal dice that must change to turn this hand into `target`.
    pub fn reroll_distance(&self, target: &PartitionedHand) -> usize {
        reroll_distance(&self.normal, &target.normal)
    }
}

impl fmt::Display for PartitionedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}|{}|{}]",
            self.communal.iter().join(""),
            self.normal.iter().join(""),
            self.extra.iter().join("")
        )
    }
}

/// Greedy face matching: each source die takes the first unused target die
/// with the same face. The distance is the number of source dice left unmatched.
pub fn reroll_distance(source: &[Face], target: &[Face]) -> usize {
    let mut used = vec![false; target.len()];
    let mut matched = 0;
    for &face in source {
        let slot = target
            .iter()
            .zip(used.iter())
            .position(|(&t, &taken)| !taken && t == face);
        if let Some(j) = slot {
            used[j] = true;
            matched += 1;
        }
    }
    source.len() - matched
}
