use handodds::hand::reroll_distance;
use handodds::{CategorySet, Hand, HandCategory, HandError, RollConfig};
use rstest::rstest;

fn categories(dice: &[u8]) -> CategorySet {
    let config = RollConfig::builder()
        .communal_rolls(0)
        .normal_rolls(dice.len())
        .dice_pool(dice.len())
        .build();
    Hand::new(dice.to_vec())
        .unwrap()
        .partition(&config)
        .unwrap()
        .profile()
        .matched()
}

// --- CATEGORY PREDICATES ---

#[rstest]
#[case(&[1, 1, 2, 3, 5], HandCategory::Pair)]
#[case(&[1, 1, 2, 2, 5], HandCategory::TwoPair)]
#[case(&[4, 4, 4, 1, 2], HandCategory::Triple)]
#[case(&[1, 2, 3, 4, 6], HandCategory::SmallStraight)]
#[case(&[2, 4, 6, 2, 4], HandCategory::Flush)]
#[case(&[1, 3, 5, 5, 3], HandCategory::Flush)]
#[case(&[3, 3, 3, 6, 6], HandCategory::FullHouse)]
#[case(&[2, 3, 4, 5, 6], HandCategory::BigStraight)]
#[case(&[5, 5, 5, 5, 1], HandCategory::Quad)]
#[case(&[6, 6, 6, 6, 6], HandCategory::Jackpot)]
fn test_hand_makes_category(#[case] dice: &[u8], #[case] category: HandCategory) {
    assert!(
        categories(dice).contains(category),
        "{:?} should make {}",
        dice,
        category
    );
}

#[rstest]
#[case(&[1, 2, 3, 4, 6], HandCategory::Pair)]
#[case(&[3, 3, 3, 1, 2], HandCategory::TwoPair)]
#[case(&[1, 2, 3, 5, 6], HandCategory::SmallStraight)]
#[case(&[2, 4, 6, 2, 5], HandCategory::Flush)]
#[case(&[3, 3, 3, 3, 6], HandCategory::FullHouse)]
#[case(&[1, 2, 3, 4, 6], HandCategory::BigStraight)]
#[case(&[5, 5, 5, 1, 1], HandCategory::Quad)]
#[case(&[6, 6, 6, 6, 1], HandCategory::Jackpot)]
fn test_hand_misses_category(#[case] dice: &[u8], #[case] category: HandCategory) {
    assert!(
        !categories(dice).contains(category),
        "{:?} should not make {}",
        dice,
        category
    );
}

#[test]
fn test_categories_nest() {
    // A jackpot is also a quad, a triple, and a pair.
    let set = categories(&[2, 2, 2, 2, 2]);
    for category in [
        HandCategory::Pair,
        HandCategory::Triple,
        HandCategory::Quad,
        HandCategory::Jackpot,
        HandCategory::Flush,
    ] {
        assert!(set.contains(category), "missing {}", category);
    }
    assert!(!set.contains(HandCategory::TwoPair));
    assert!(!set.contains(HandCategory::HighRoll));
}

#[test]
fn test_high_roll_only_fallback() {
    let config = RollConfig::builder()
        .communal_rolls(0)
        .normal_rolls(5)
        .dice_pool(5)
        .build();
    let hand = Hand::new(vec![1, 2, 4, 5, 6]).unwrap().partition(&config).unwrap();
    assert_eq!(hand.categories(), CategorySet::only(HandCategory::HighRoll));

    let pair = Hand::new(vec![1, 1, 4, 5, 6]).unwrap().partition(&config).unwrap();
    assert!(!pair.categories().contains(HandCategory::HighRoll));
}

#[test]
fn test_trailing_dice_are_ignored() {
    let config = RollConfig::default();
    // The last two dice would make a pair, but only five are read.
    let hand = Hand::new(vec![1, 2, 4, 5, 6, 6, 6]).unwrap().partition(&config).unwrap();
    assert_eq!(hand.categories(), CategorySet::only(HandCategory::HighRoll));
}

// --- PARTITIONS ---

#[test]
fn test_partition_sorts_within_each_part() {
    let config = RollConfig::builder().extra_rolls(1).build();
    let hand = Hand::new(vec![6, 1, 5, 3, 4, 2, 1]).unwrap().partition(&config).unwrap();
    assert_eq!(hand.communal(), &[1, 6]);
    assert_eq!(hand.normal(), &[3, 4, 5]);
    assert_eq!(hand.extra(), &[2]);
    assert_eq!(hand.isomorphic_key().to_string(), "163452");
    assert_eq!(hand.rerollable_key().to_string(), "162");
    assert_eq!(hand.effective_key().to_string(), "123456");
}

#[test]
fn test_invalid_faces_rejected() {
    assert_eq!(Hand::new(vec![1, 7]).err(), Some(HandError::InvalidFace(7)));
    assert_eq!(Hand::new(vec![0]).err(), Some(HandError::InvalidFace(0)));
}

// --- REROLL DISTANCE ---

#[rstest]
#[case(&[1, 2, 3], &[1, 2, 3], 0)]
#[case(&[3, 2, 1], &[1, 2, 3], 0)]
#[case(&[2, 2, 5], &[2, 5, 5], 1)]
#[case(&[1, 1, 1], &[1, 2, 3], 2)]
#[case(&[4, 5, 6], &[1, 2, 3], 3)]
#[case(&[6, 6, 1], &[6, 1, 1], 1)]
#[case(&[], &[], 0)]
fn test_reroll_distance(#[case] source: &[u8], #[case] target: &[u8], #[case] expected: usize) {
    assert_eq!(reroll_distance(source, target), expected);
}

#[test]
fn test_each_target_die_is_used_once() {
    // Both source 2s would match the single target 2 without bookkeeping.
    assert_eq!(reroll_distance(&[2, 2, 4], &[2, 3, 4]), 1);
}
