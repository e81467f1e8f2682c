//! Position-value table and guess-model properties checked over explicit grids

use codenames::spymaster::{
    PositionValueConfig, PositionValues, margin_probability, position::TABLE_SIZE,
};

fn table() -> PositionValues {
    PositionValues::build(&PositionValueConfig::default()).expect("default table should build")
}

#[test]
fn test_table_boundaries() {
    let table = table();
    for o in 1..TABLE_SIZE {
        assert_eq!(table.value(0, o), 1.0, "mover with no cards has won");
    }
    for m in 0..TABLE_SIZE {
        assert_eq!(table.value(m, 0), 0.0, "opponent with no cards has won");
    }
}

#[test]
fn test_table_values_are_probabilities() {
    for row in table().rows() {
        for value in row {
            assert!((0.0..=1.0).contains(value));
        }
    }
}

#[test]
fn test_own_cards_never_help_and_opponent_cards_never_hurt() {
    let table = table();
    for m in 1..TABLE_SIZE - 1 {
        for o in 1..TABLE_SIZE - 1 {
            assert!(table.value(m + 1, o) <= table.value(m, o) + 1e-12);
            assert!(table.value(m, o + 1) >= table.value(m, o) - 1e-12);
        }
    }
}

#[test]
fn test_even_race_favours_the_mover() {
    let table = table();
    for n in 2..TABLE_SIZE {
        assert!(table.value(n, n) > 0.5, "V[{n}][{n}] should favour the mover");
    }
}

#[test]
fn test_tuned_shapes_change_the_table() {
    let cautious = PositionValueConfig {
        clue_shapes: vec![vec![0.5, 0.3, 0.2]],
        ..Default::default()
    };
    let cautious = PositionValues::build(&cautious).expect("cautious table should build");
    assert_ne!(cautious, table());
}

#[test]
fn test_margin_probability_grid() {
    assert_eq!(margin_probability(0.0, 0.18), 0.5);
    let margins: Vec<f64> = (-300..=300).map(|i| i as f64 / 100.0).collect();
    for pair in margins.windows(2) {
        assert!(margin_probability(pair[1], 0.18) >= margin_probability(pair[0], 0.18));
    }
    assert!(margin_probability(3.0, 0.18) > 0.999_999);
    assert!(margin_probability(-3.0, 0.18) < 0.000_001);
}
