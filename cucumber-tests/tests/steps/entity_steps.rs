use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use cucumber_tests::MappingWorld;
use cucumber_tests::parse_property_type;
use esmap_core::prelude::*;

#[given(expr = "an entity property {string} of type {word}")]
fn given_entity_property(world: &mut MappingWorld, name: String, type_name: String) {
    world.entity_fields.push(FieldMetadata::new(name, parse_property_type(&type_name)));
}

#[given(expr = "an entity property {string} of type {word} marked as {word}")]
fn given_marked_entity_property(world: &mut MappingWorld, name: String, type_name: String, marker: String) {
    let metadata = FieldMetadata::new(name, parse_property_type(&type_name));
    let metadata = match marker.as_str() {
        "identifier" => metadata.with_id(),
        "version" => metadata.with_version(),
        "score" => metadata.with_score(),
        "parent" => metadata.with_parent(),
        other => panic!("Unknown marker: {}", other),
    };
    world.entity_fields.push(metadata);
}

#[when(expr = "the entity {string} is registered")]
fn when_entity_registered(world: &mut MappingWorld, name: String) {
    world.entity_result = Some(EntityDescriptor::build_with(&name, &world.entity_fields, &world.config));
}

#[when("the entity is registered from TOML:")]
fn when_entity_from_toml(world: &mut MappingWorld, step: &Step) {
    let source = step.docstring.as_deref().expect("Missing TOML definition");
    world.entity_result = Some(EntityDescriptor::from_toml(source, &world.config));
}

#[then("the registration succeeds")]
fn then_registration_succeeds(world: &mut MappingWorld) {
    world.entity();
}

#[then(expr = "the registration fails with {string}")]
fn then_registration_fails(world: &mut MappingWorld, message: String) {
    match world.entity_result.as_ref().expect("No entity was registered") {
        Ok(entity) => panic!("Expected a mapping error, got {:?}", entity.type_name()),
        Err(e) => assert_eq!(e.to_string(), message),
    }
}

#[then(expr = "the identifier property is {string}")]
fn then_id_property(world: &mut MappingWorld, name: String) {
    assert_eq!(world.entity().id_property().map(|p| p.name()), Some(name.as_str()));
}

#[then(expr = "the version property is {string}")]
fn then_version_property(world: &mut MappingWorld, name: String) {
    assert_eq!(world.entity().version_property().map(|p| p.name()), Some(name.as_str()));
}

#[then(expr = "the score property is {string}")]
fn then_score_property(world: &mut MappingWorld, name: String) {
    assert_eq!(world.entity().score_property().map(|p| p.name()), Some(name.as_str()));
}

#[then(expr = "the property {string} has a converter")]
fn then_entity_property_converter(world: &mut MappingWorld, name: String) {
    let property = world.entity().property(&name).expect("Unknown property");
    assert!(property.has_property_converter());
}
