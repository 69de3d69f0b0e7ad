use cucumber::{given, then, when};
use cucumber_tests::MappingWorld;
use cucumber_tests::{parse_field_type, parse_property_type};
use esmap_core::prelude::*;

// --- Declaring the property ---

#[given(expr = "a property {string} of type {word}")]
fn given_property(world: &mut MappingWorld, name: String, type_name: String) {
    world.metadata = Some(FieldMetadata::new(name, parse_property_type(&type_name)));
}

#[given(expr = "the identifier names are {string}")]
fn given_identifier_names(world: &mut MappingWorld, names: String) {
    world.config.identifier_names = names.split(',').map(|name| name.trim().to_string()).collect();
}

#[given(expr = "the property has a {word} field annotation named {string}")]
fn given_field_annotation(world: &mut MappingWorld, field_type: String, name: String) {
    let annotation = FieldAnnotation::new(parse_field_type(&field_type)).with_name(name);
    world.metadata_mut().field = Some(annotation);
}

#[given("the property has a multi-field annotation")]
fn given_multi_field(world: &mut MappingWorld) {
    let multi_field = MultiFieldAnnotation::new(FieldAnnotation::new(FieldType::Text))
        .with_inner_field(InnerField::new("raw", FieldType::Keyword));
    world.metadata_mut().multi_field = Some(multi_field);
}

#[given("the property is marked as the identifier")]
fn given_marked_id(world: &mut MappingWorld) {
    world.metadata_mut().id = true;
}

#[given("the property is marked as the version")]
fn given_marked_version(world: &mut MappingWorld) {
    world.metadata_mut().version = true;
}

#[given("the property is marked as the score")]
fn given_marked_score(world: &mut MappingWorld) {
    world.metadata_mut().score = true;
}

#[given("the property is marked as the parent")]
fn given_marked_parent(world: &mut MappingWorld) {
    world.metadata_mut().parent = true;
}

#[given("the property is transient")]
fn given_transient(world: &mut MappingWorld) {
    world.metadata_mut().transient = true;
}

#[given("the property is read-only")]
fn given_read_only(world: &mut MappingWorld) {
    world.metadata_mut().read_only = true;
}

// --- Building ---

#[when(expr = "the property is built for {string}")]
fn when_built(world: &mut MappingWorld, owner: String) {
    world.owner = owner;
    world.build();
}

#[when("the property is built again")]
fn when_built_again(world: &mut MappingWorld) {
    world.build();
}

// --- Outcomes ---

#[then("the build succeeds")]
fn then_build_succeeds(world: &mut MappingWorld) {
    world.descriptor();
}

#[then(expr = "the build fails with {string}")]
fn then_build_fails_with(world: &mut MappingWorld, message: String) {
    match world.last_result.as_ref().expect("The property was not built") {
        Ok(descriptor) => panic!("Expected a mapping error, got {:?}", descriptor),
        Err(e) => assert_eq!(e.to_string(), message),
    }
}

#[then(expr = "the build fails mentioning {string}")]
fn then_build_fails_mentioning(world: &mut MappingWorld, fragment: String) {
    match world.last_result.as_ref().expect("The property was not built") {
        Ok(descriptor) => panic!("Expected a mapping error, got {:?}", descriptor),
        Err(e) => assert!(e.to_string().contains(&fragment), "'{}' does not mention '{}'", e, fragment),
    }
}

#[then(expr = "the field name is {string}")]
fn then_field_name(world: &mut MappingWorld, field_name: String) {
    assert_eq!(world.descriptor().field_name(), field_name);
}

#[then("the property is an identifier")]
fn then_is_id(world: &mut MappingWorld) {
    assert!(world.descriptor().is_id_property());
}

#[then("the property is not an identifier")]
fn then_is_not_id(world: &mut MappingWorld) {
    assert!(!world.descriptor().is_id_property());
}

#[then("the property is a seq-no/primary-term property")]
fn then_is_seq_no(world: &mut MappingWorld) {
    assert!(world.descriptor().is_seq_no_primary_term_property());
}

#[then("the property is neither readable nor writable")]
fn then_not_readable_nor_writable(world: &mut MappingWorld) {
    let descriptor = world.descriptor();
    assert!(!descriptor.is_readable());
    assert!(!descriptor.is_writable());
}

#[then("the property is readable but not writable")]
fn then_readable_not_writable(world: &mut MappingWorld) {
    let descriptor = world.descriptor();
    assert!(descriptor.is_readable());
    assert!(!descriptor.is_writable());
}

#[then("both builds agree")]
fn then_builds_agree(world: &mut MappingWorld) {
    let first = match world.previous_result.as_ref().expect("The property was built only once") {
        Ok(descriptor) => descriptor,
        Err(e) => panic!("The first build failed: {}", e),
    };
    let second = world.descriptor();

    assert_eq!(first.field_name(), second.field_name());
    assert_eq!(first.is_id_property(), second.is_id_property());
    assert_eq!(first.is_version_property(), second.is_version_property());
    assert_eq!(first.is_score_property(), second.is_score_property());
    assert_eq!(first.is_parent_property(), second.is_parent_property());
    assert_eq!(first.is_readable(), second.is_readable());
    assert_eq!(first.is_writable(), second.is_writable());
    assert_eq!(first.has_property_converter(), second.has_property_converter());
    assert_eq!(first.mapping(), second.mapping());
}
