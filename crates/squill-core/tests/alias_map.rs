use squill_core::{AliasMap, AliasRegistry, Entity, EntityId};

struct User;
struct Order;

impl Entity for User {}
impl Entity for Order {}

#[test]
fn resolves_a_bound_alias() {
    let mut aliases = AliasMap::new();
    aliases.bind(EntityId::of::<User>(), "u");
    assert_eq!(aliases.resolve(EntityId::of::<User>()), Some("u".to_string()));
}

#[test]
fn unbound_entity_resolves_to_none() {
    let aliases = AliasMap::new();
    assert_eq!(aliases.resolve(EntityId::of::<User>()), None);
}

#[test]
fn rebinding_replaces_the_alias() {
    let mut aliases = AliasMap::new();
    aliases.bind(EntityId::of::<User>(), "u");
    aliases.bind(EntityId::of::<User>(), "u2");
    assert_eq!(
        aliases.resolve(EntityId::of::<User>()),
        Some("u2".to_string())
    );
}

#[test]
fn entities_have_distinct_identities() {
    assert_ne!(EntityId::of::<User>(), EntityId::of::<Order>());

    let mut aliases = AliasMap::new();
    aliases.bind(EntityId::of::<User>(), "u");
    assert_eq!(aliases.resolve(EntityId::of::<Order>()), None);
}
