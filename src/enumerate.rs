use crate::config::RollConfig;
use crate::consts::{FACE_COUNT, MAX_DICE_POOL};
use crate::dice::{DiceKey, Face, FACES};
use crate::error::{HandError, HandResult};
use crate::hand::{Hand, PartitionedHand};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// One isomorphism class: a representative hand plus how many raw rolls
/// collapse onto it.
#[derive(Debug, Clone)]
pub struct HandGroup {
    pub hand: PartitionedHand,
    pub multiplicity: u64,
}

impl HandGroup {
    pub fn isomorphic_key(&self) -> DiceKey {
        self.hand.isomorphic_key()
    }
}

/// Every ordered roll of `dice` dice (6^dice hands).
pub fn generate_rolls(dice: usize) -> HandResult<Vec<Hand>> {
    if dice > MAX_DICE_POOL {
        return Err(HandError::DicePool {
            requested: dice,
            max: MAX_DICE_POOL,
        });
    }
    if dice == 0 {
        return Ok(Vec::new());
    }
    Ok(sequences(dice).into_iter().map(Hand::from_faces).collect())
}

fn sequences(dice: usize) -> Vec<Vec<Face>> {
    if dice == 1 {
        return FACES.iter().map(|&face| vec![face]).collect();
    }
    let shorter = sequences(dice - 1);
    let mut out = Vec::with_capacity(shorter.len() * FACE_COUNT);
    for tail in &shorter {
        for &face in &FACES {
            let mut seq = Vec::with_capacity(dice);
            seq.push(face);
            seq.extend_from_slice(tail);
            out.push(seq);
        }
    }
    out
}

/// The full outcome domain for a configuration.
pub fn domain(config: &RollConfig) -> HandResult<Vec<Hand>> {
    config.validate()?;
    generate_rolls(config.dice_pool)
}

/// Keeps the first hand for each distinct run of relevant dice, dropping
/// copies that only differ in unread trailing dice.
pub fn collapse_unique<'a>(hands: &'a [Hand], config: &RollConfig) -> HandResult<Vec<&'a Hand>> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for hand in hands {
        if seen.insert(hand.unique_prefix_key(config)?) {
            unique.push(hand);
        }
    }
    Ok(unique)
}

/// Groups hands by isomorphic key, ordered by that key.
pub fn group_isomorphic<'a, I>(hands: I, config: &RollConfig) -> HandResult<Vec<HandGroup>>
where
    I: IntoIterator<Item = &'a Hand>,
{
    let mut groups: BTreeMap<DiceKey, HandGroup> = BTreeMap::new();
    for hand in hands {
        let split = hand.partition(config)?;
        groups
            .entry(split.isomorphic_key())
            .and_modify(|group| group.multiplicity += 1)
            .or_insert_with(|| HandGroup {
                hand: split,
                multiplicity: 1,
            });
    }
    Ok(groups.into_values().collect())
}

/// Collapse then group: the equivalence classes the analyzer works on.
pub fn unique_groups(hands: &[Hand], config: &RollConfig) -> HandResult<Vec<HandGroup>> {
    let unique = collapse_unique(hands, config)?;
    debug!(
        "Collapsed {} rolls to {} unique prefixes",
        hands.len(),
        unique.len()
    );
    let groups = group_isomorphic(unique, config)?;
    debug!("Grouped into {} isomorphism classes", groups.len());
    Ok(groups)
}
