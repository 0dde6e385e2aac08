#![cfg(feature = "serde")]

use cellsim::{patterns, Grid, RuleTable, Sequence};

#[test]
fn round_trips() {
    let grid = Grid::from_live_cells(3, 4, vec![(0, 1), (2, 3)]).unwrap();
    let json = serde_json::to_string(&grid).unwrap();
    assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), grid);

    let seed = patterns::rule_110_seed();
    let json = serde_json::to_string(&seed).unwrap();
    assert_eq!(serde_json::from_str::<Sequence>(&json).unwrap(), seed);

    let table = RuleTable::decode(110);
    let json = serde_json::to_string(&table).unwrap();
    assert_eq!(serde_json::from_str::<RuleTable>(&json).unwrap(), table);
}

#[test]
fn sequence_shape() {
    assert_eq!(
        serde_json::to_string(&Sequence::from_cells(vec![true, false, true]).unwrap()).unwrap(),
        "[true,false,true]"
    );
}

#[test]
fn short_sequence_is_rejected() {
    let err = serde_json::from_str::<Sequence>("[true,false]").unwrap_err();
    assert!(err.to_string().contains("too short"), "{}", err);
}

#[test]
fn grid_with_wrong_cell_count_is_rejected() {
    let json = r#"{"rows":2,"cols":2,"cells":["Alive","Dead","Dead"]}"#;
    let err = serde_json::from_str::<Grid>(json).unwrap_err();
    assert!(err.to_string().contains("expected 4 cells"), "{}", err);
}

#[test]
fn empty_and_overflowing_grids_are_rejected() {
    let empty = r#"{"rows":0,"cols":3,"cells":[]}"#;
    assert!(serde_json::from_str::<Grid>(empty).is_err());
    let huge = format!(r#"{{"rows":{},"cols":2,"cells":[]}}"#, 1usize << 63);
    let err = serde_json::from_str::<Grid>(&huge).unwrap_err();
    assert!(err.to_string().contains("more cells"), "{}", err);
}
