use crate::consts::FACE_COUNT;
use crate::error::{HandError, HandResult};
use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::fmt;

/// A single die face, always in `1..=6` once validated.
pub type Face = u8;

/// Every face in ascending order.
pub const FACES: [Face; FACE_COUNT] = [1, 2, 3, 4, 5, 6];

pub fn validate_face(face: Face) -> HandResult<Face> {
    if (1..=FACE_COUNT as Face).contains(&face) {
        Ok(face)
    } else {
        Err(HandError::InvalidFace(face))
    }
}

/// Canonical byte key built from dice faces.
///
/// Ordering and hashing follow the raw bytes, so keys group and sort the same
/// way on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiceKey(Vec<Face>);

impl DiceKey {
    /// Key of the dice in the order given.
    pub fn raw(dice: &[Face]) -> Self {
        Self(dice.to_vec())
    }

    /// Key of the dice as a multiset (ascending order).
    pub fn sorted(dice: &[Face]) -> Self {
        let mut faces = dice.to_vec();
        faces.sort_unstable();
        Self(faces)
    }

    /// Concatenation of already canonical parts.
    pub fn concat(parts: &[&[Face]]) -> Self {
        Self(parts.concat())
    }

    pub fn as_slice(&self) -> &[Face] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(""))
    }
}

impl Serialize for DiceKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
