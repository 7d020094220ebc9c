//! Model assertion helpers for factory tests.

use parsegen::Model;

/// Assert an entity exists and return it for further assertions.
pub fn get_entity<'a>(model: &'a Model, name: &str) -> &'a parsegen::Entity {
    model
        .entity(name)
        .unwrap_or_else(|| panic!("Expected entity '{}' to exist", name))
}

/// Property names of an entity, in order.
pub fn property_names(model: &Model, entity: &str) -> Vec<String> {
    get_entity(model, entity)
        .properties()
        .keys()
        .map(|name| name.to_string())
        .collect()
}

/// Assert the subs of an entity, in registration order.
pub fn assert_subs(model: &Model, entity: &str, expected: &[&str]) {
    let subs: Vec<&str> = get_entity(model, entity)
        .subs()
        .iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(subs, expected, "Unexpected subs of '{}'", entity);
}

/// Assert the supers of an entity, in registration order.
pub fn assert_supers(model: &Model, entity: &str, expected: &[&str]) {
    let supers: Vec<&str> = get_entity(model, entity)
        .supers()
        .iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(supers, expected, "Unexpected supers of '{}'", entity);
}

/// Assert the model passes every structural check.
pub fn assert_sound(model: &Model) {
    let issues = model.verify();
    assert!(
        issues.is_empty(),
        "Expected a sound model, found:\n{}",
        issues
            .iter()
            .map(|issue| format!("  {}", issue))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Assert no entity inherits from itself, directly or transitively.
pub fn assert_acyclic(model: &Model) {
    for name in model.entity_names() {
        assert!(!model.is_a(name, name), "Entity '{}' inherits from itself", name);
    }
}
