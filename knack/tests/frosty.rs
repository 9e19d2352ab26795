//! The bundled Frosty ability, end to end.

use knack::{
    AttachState, Avatar, Character, Dispatcher, GameEvent, Registry,
    abilities::{Frosty, register_builtin},
    hooks::{Logged, logged_factory},
};

fn frosty_dispatcher() -> Dispatcher {
    let mut registry = Registry::new();
    register_builtin(&mut registry);
    Dispatcher::new(registry)
}

#[test]
fn test_frosty_throws_ice_bombs() {
    let dispatcher = frosty_dispatcher();
    let mut avatar = Avatar::new("Frosty");

    dispatcher.on_spawn(&mut avatar);

    assert_eq!(avatar.state(), AttachState::Attached);
    assert_eq!(avatar.tunables().bomb_type.as_str(), "ice");
}

#[test]
fn test_frosty_counts_double_jumps_only() {
    let dispatcher = frosty_dispatcher();
    let mut avatar = Avatar::new("Frosty");
    dispatcher.on_spawn(&mut avatar);

    dispatcher.on_event(&mut avatar, &GameEvent::DoubleJump);
    dispatcher.on_event(&mut avatar, &GameEvent::DoublePunch);

    let frosty = avatar.ability_as::<Frosty>().unwrap();
    assert_eq!(frosty.double_jumps(), 1);
}

#[test]
fn test_builtin_registration_records_source() {
    let dispatcher = frosty_dispatcher();
    let entry = dispatcher.registry().entry(Character::Frosty).unwrap();

    assert!(entry.is_enabled());
    assert!(entry.source().unwrap().contains("abilities"));
    assert_eq!(dispatcher.registry().characters(), vec![Character::Frosty]);
}

#[test]
fn test_frosty_behind_logging_decorator() {
    let mut registry = Registry::new();
    registry.register(Character::Frosty, logged_factory::<Frosty>);
    let dispatcher = Dispatcher::new(registry);

    let mut avatar = Avatar::new("Frosty");
    dispatcher.on_spawn(&mut avatar);
    dispatcher.on_event(&mut avatar, &GameEvent::DoubleJump);
    dispatcher.on_event(&mut avatar, &GameEvent::DoubleJump);

    let logged = avatar.ability_as::<Logged<Frosty>>().unwrap();
    assert_eq!(logged.inner().double_jumps(), 2);
    assert_eq!(avatar.ability().unwrap().name(), "Frosty");
    assert_eq!(avatar.tunables().bomb_type.as_str(), "ice");
}
