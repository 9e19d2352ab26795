//! Registry behavior: overwrite, idempotence and plugin toggles.

use knack::{
    Avatar, Character, Dispatcher, Registry, RegistryConfig, RegistryError, SpawnOutcome,
    abilities::Frosty, default_factory,
    testing::{CountingAbility, RecordingAbility},
};

mod common;
use common::Hoarder;

#[test]
fn test_last_writer_wins() {
    let mut registry = Registry::new();
    registry.register(Character::Frosty, default_factory::<Frosty>);
    registry.register(Character::Frosty, default_factory::<Hoarder>);

    let ability = registry.lookup(Character::Frosty).unwrap()();
    assert!(ability.is::<Hoarder>());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_reregistering_same_pair_is_idempotent() {
    let mut once = Registry::new();
    once.register(Character::Frosty, default_factory::<Frosty>);

    let mut twice = Registry::new();
    twice.register(Character::Frosty, default_factory::<Frosty>);
    let replaced = twice.register(Character::Frosty, default_factory::<Frosty>);

    assert!(replaced.unwrap()().is::<Frosty>());
    assert_eq!(once.len(), twice.len());
    assert_eq!(once.characters(), twice.characters());
    assert!(once.lookup(Character::Frosty).unwrap()().is::<Frosty>());
    assert!(twice.lookup(Character::Frosty).unwrap()().is::<Frosty>());

    let mut a = Avatar::new("Frosty");
    let mut b = Avatar::new("Frosty");
    Dispatcher::new(once).on_spawn(&mut a);
    Dispatcher::new(twice).on_spawn(&mut b);
    assert_eq!(a.tunables(), b.tunables());
}

#[test]
fn test_lookup_never_fails_for_unknown() {
    let registry = Registry::new();
    for character in Character::ALL {
        assert!(registry.lookup(character).is_none());
    }
    assert!(registry.lookup_name("").is_none());
    assert!(registry.is_empty());
}

#[test]
fn test_disable_and_reenable_through_handle() {
    let mut registry = Registry::new();
    registry.register(Character::Zoe, default_factory::<RecordingAbility>);
    let handle = registry.enabled_handle(Character::Zoe).unwrap();
    let dispatcher = Dispatcher::new(registry);

    handle.disable();
    let mut skipped = Avatar::new("Zoe");
    assert_eq!(
        dispatcher.on_spawn(&mut skipped),
        SpawnOutcome::Disabled(Character::Zoe)
    );

    handle.enable();
    let mut attached = Avatar::new("Zoe");
    assert_eq!(
        dispatcher.on_spawn(&mut attached),
        SpawnOutcome::Attached(Character::Zoe)
    );

    // Disabling later does not detach avatars that already have the ability.
    dispatcher.registry().disable(Character::Zoe).unwrap();
    assert!(attached.is_attached());
    assert!(!skipped.is_attached());
}

#[test]
fn test_new_registrations_follow_config() {
    let mut registry = Registry::with_config(RegistryConfig::new().with_auto_enable_new(false));
    registry.register(Character::Bones, default_factory::<CountingAbility>);
    registry.register(Character::Kronk, default_factory::<CountingAbility>);
    let dispatcher = Dispatcher::new(registry);

    let mut bones = Avatar::new("Bones");
    assert!(!dispatcher.on_spawn(&mut bones).is_attached());

    dispatcher.registry().enable_all();
    let mut kronk = Avatar::new("Kronk");
    assert!(dispatcher.on_spawn(&mut kronk).is_attached());
}

#[test]
fn test_toggle_unregistered_is_an_error() {
    let registry = Registry::new();
    let err = registry.disable(Character::Cyborg).unwrap_err();
    assert_eq!(err, RegistryError::NotRegistered(Character::Cyborg));
    assert_eq!(err.to_string(), "no ability registered for B-9000");
}

#[test]
fn test_cloned_registry_is_independent() {
    let mut original = Registry::new();
    original.register(Character::Zoe, default_factory::<RecordingAbility>);

    let mut copy = original.clone();
    copy.disable(Character::Zoe).unwrap();
    copy.register(Character::Kronk, default_factory::<CountingAbility>);

    let original = Dispatcher::new(original);
    let copy = Dispatcher::new(copy);

    let mut zoe = Avatar::new("Zoe");
    assert_eq!(
        original.on_spawn(&mut zoe),
        SpawnOutcome::Attached(Character::Zoe)
    );
    let mut kronk = Avatar::new("Kronk");
    assert_eq!(
        original.on_spawn(&mut kronk),
        SpawnOutcome::NotRegistered(Character::Kronk)
    );

    let mut zoe = Avatar::new("Zoe");
    assert_eq!(
        copy.on_spawn(&mut zoe),
        SpawnOutcome::Disabled(Character::Zoe)
    );
    let mut kronk = Avatar::new("Kronk");
    assert_eq!(
        copy.on_spawn(&mut kronk),
        SpawnOutcome::Attached(Character::Kronk)
    );
}
