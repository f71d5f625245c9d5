use lib::chess::{Dimensions, Player, Position};
use test_strategy::proptest;

#[cfg(not(tarpaulin))]
#[proptest(cases = 1)]
fn perft_expands_expected_number_of_nodes() {
    let pos = Position::default();
    for p in Player::ALL {
        assert_eq!(pos.perft(p, 1), 17);
        assert_eq!(pos.perft(p, 2), 294);
        assert_eq!(pos.perft(p, 3), 5309);
        assert_eq!(pos.perft(p, 4), 99239);
    }

    assert_eq!(pos.perft(Player::Bottom, 5), 2107244);

    let pos: Position = "q..d/.p../..../p.d./..q./..../.pp./d..q 5 3".parse()?;
    assert_eq!(pos.perft(Player::Top, 4), 355160);
    assert_eq!(pos.perft(Player::Bottom, 4), 410194);
}

#[cfg(not(tarpaulin))]
#[proptest(cases = 1)]
fn perft_expands_expected_number_of_nodes_on_other_boards() {
    let pos = Position::new(Dimensions::new(3, 6)?);
    assert_eq!(pos.perft(Player::Bottom, 4), 12427);

    let pos = Position::new(Dimensions::new(5, 10)?);
    assert_eq!(pos.perft(Player::Bottom, 4), 142902);
}

#[proptest]
fn perft_of_depth_one_counts_successors(pos: Position, p: Player) {
    assert_eq!(pos.perft(p, 1), pos.successors(p).count());
}

#[proptest]
fn perft_of_depth_zero_is_one(pos: Position, p: Player) {
    assert_eq!(pos.perft(p, 0), 1);
}
