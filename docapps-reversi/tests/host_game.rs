//! A Reversi game played through the host contract

use docapps_config::{load_settings, ConfigSource};
use docapps_host::{AppHost, Dispatch};
use docapps_reversi::{
    Disc, Game, GameStatus, Position, ReversiAction, ReversiApp, ReversiError,
};
use std::cell::RefCell;

fn play(notation: &str) -> ReversiAction {
    ReversiAction::Play {
        at: notation.parse::<Position>().unwrap(),
    }
}

#[test_log::test]
fn test_moves_are_persisted_through_the_sink() {
    let saved = RefCell::new(Vec::new());
    let mut host = AppHost::new(
        ReversiApp::default(),
        "",
        (),
        |data: String, _: &()| saved.borrow_mut().push(data),
    );

    assert_eq!(host.dispatch(play("d3")).unwrap(), Dispatch::Edited);
    assert_eq!(host.dispatch(play("c3")).unwrap(), Dispatch::Edited);

    let saved = saved.borrow();
    assert_eq!(saved.len(), 2);

    let game = Game::from_json(&saved[1]).unwrap();
    assert_eq!(game.turn(), Disc::Black);
    assert_eq!(game.score().black, 3);
    assert_eq!(game.score().white, 3);
    assert_eq!(host.model(), game);
}

#[test_log::test]
fn test_illegal_click_changes_nothing() {
    let calls = RefCell::new(0);
    let mut host = AppHost::new(
        ReversiApp::default(),
        "",
        (),
        |_: String, _: &()| *calls.borrow_mut() += 1,
    );

    assert!(matches!(
        host.dispatch(play("a1")),
        Err(ReversiError::NoFlips(_))
    ));
    assert!(matches!(
        host.dispatch(ReversiAction::Pass),
        Err(ReversiError::CannotPass(Disc::Black))
    ));
    assert_eq!(*calls.borrow(), 0);
    assert_eq!(host.data(), "");
}

#[test_log::test]
fn test_configured_first_player_and_restart() {
    let settings =
        load_settings(&[ConfigSource::yaml("reversi:\n  first_player: white\n")]).unwrap();
    let mut host = AppHost::new(
        ReversiApp::new(&settings.reversi),
        "",
        (),
        |_: String, _: &()| {},
    );
    assert_eq!(
        host.model().status(),
        GameStatus::InProgress { turn: Disc::White }
    );

    // white's opening replies mirror black's
    host.dispatch(play("e3")).unwrap();
    assert_eq!(host.model().turn(), Disc::Black);

    host.dispatch(ReversiAction::Restart).unwrap();
    assert_eq!(host.model(), Game::new(Disc::White));
}

#[test_log::test]
fn test_host_update_replaces_the_game() {
    let mut host = AppHost::new(ReversiApp::default(), "", (), |_: String, _: &()| {});

    let mut elsewhere = Game::new(Disc::Black);
    elsewhere.play("f5".parse().unwrap()).unwrap();
    host.update(elsewhere.to_json().unwrap());

    assert_eq!(host.model(), elsewhere);
    assert!(matches!(
        host.dispatch(play("f5")),
        Err(ReversiError::Occupied(_))
    ));
}
