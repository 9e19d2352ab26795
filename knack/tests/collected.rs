//! Load-time registration through `inventory`.
#![cfg(feature = "inventory")]

use knack::{
    Ability, Avatar, Character, Dispatcher, GameEvent, Registry, SpawnOutcome, Tunables,
    abilities::{Frosty, register_builtin},
    register_ability,
};

#[derive(Default)]
struct Shadow {
    punches: u32,
}

impl Ability for Shadow {
    fn customize(&mut self, tunables: &mut Tunables) {
        tunables.blast_radius = 3.5;
    }

    fn on_event(&mut self, _tunables: &mut Tunables, event: &GameEvent) {
        if *event == GameEvent::DoublePunch {
            self.punches += 1;
        }
    }
}

register_ability!(Character::SnakeShadow, Shadow);

#[test]
fn test_collected_includes_submitted_abilities() {
    let registry = Registry::collected();

    assert!(registry.lookup(Character::SnakeShadow).is_some());

    let source = registry.entry(Character::SnakeShadow).unwrap().source();
    assert!(source.unwrap().starts_with("collected"));
}

#[test]
fn test_collected_registry_dispatches() {
    let dispatcher = Dispatcher::new(Registry::collected());

    let mut shadow = Avatar::new("Snake Shadow");
    assert_eq!(
        dispatcher.on_spawn(&mut shadow),
        SpawnOutcome::Attached(Character::SnakeShadow)
    );
    dispatcher.on_event(&mut shadow, &GameEvent::DoublePunch);
    assert_eq!(shadow.tunables().blast_radius, 3.5);
    assert_eq!(shadow.ability_as::<Shadow>().unwrap().punches, 1);
}

#[test]
fn test_collected_overridden_by_builtin() {
    let mut registry = Registry::collected();
    register_builtin(&mut registry);

    let mut frosty = Avatar::new("Frosty");
    Dispatcher::new(registry).on_spawn(&mut frosty);
    assert!(frosty.ability_as::<Frosty>().is_some());
}

#[test]
fn test_collect_into_existing_registry() {
    let mut registry = Registry::new();
    let applied = registry.collect();

    assert!(applied >= 1);
    assert!(registry.len() >= 1);
    assert!(registry.is_enabled(Character::SnakeShadow));
}
