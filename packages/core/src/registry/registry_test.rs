//! Tests for the record-type registry

use super::*;
use crate::models::FileModel;
use serde_json::json;

fn source_with_file_model() -> Arc<RecordTypeSet> {
    let types = RecordTypeSet::new();
    types.register(RecordTypeDescriptor::new("page", "Page"));
    types.register(RecordTypeDescriptor::new("file", "File").with_model::<FileModel>());
    Arc::new(types)
}

#[test]
fn test_mapping_contains_exactly_types_with_models() {
    let registry = TypeRegistry::new(source_with_file_model());

    let mapping = registry.mapping_models();
    assert_eq!(mapping.len(), 1);
    assert!(mapping.contains_key("file"));

    assert!(registry.mapping_model("file").is_some());
    assert!(registry.mapping_model("page").is_none());
    assert!(registry.mapping_model("unregistered").is_none());
    assert!(registry.mapping_model("").is_none());
}

#[test]
fn test_empty_source_yields_empty_mapping() {
    let registry = TypeRegistry::new(Arc::new(RecordTypeSet::new()));
    assert!(registry.mapping_models().is_empty());
}

#[test]
fn test_refresh_picks_up_new_registrations() {
    let types = Arc::new(RecordTypeSet::new());
    let registry = TypeRegistry::new(Arc::clone(&types) as Arc<dyn RecordTypeSource>);
    assert!(registry.mapping_model("file").is_none());

    types.register(RecordTypeDescriptor::new("file", "File").with_model::<FileModel>());
    // Snapshot is explicit: nothing changes until refresh
    assert!(registry.mapping_model("file").is_none());

    registry.refresh();
    assert!(registry.mapping_model("file").is_some());
}

#[test]
fn test_last_registration_wins() {
    let types = RecordTypeSet::new();
    types.register(RecordTypeDescriptor::new("file", "File").with_model::<FileModel>());
    types.register(RecordTypeDescriptor::new("file", "File (plain)"));
    assert_eq!(types.len(), 1);

    let registry = TypeRegistry::new(Arc::new(types));

    // The replacing descriptor carried no model, so the mapping is empty
    assert!(registry.mapping_model("file").is_none());
}

#[test]
fn test_factory_builds_registered_model() {
    let registry = TypeRegistry::new(source_with_file_model());
    let factory = registry.mapping_model("file").unwrap();

    let record = Record::new(
        "file".to_string(),
        "Photo".to_string(),
        json!({"mime_type": "image/png"}),
    );
    let id = record.id.clone();

    let model = factory.build(record).unwrap();
    assert_eq!(model.id(), id);
    assert_eq!(model.record_type(), "file");
    assert!(model.as_any().is::<FileModel>());
}

#[test]
fn test_factory_rejects_mismatched_record() {
    let registry = TypeRegistry::new(source_with_file_model());
    let factory = registry.mapping_model("file").unwrap();

    let wrong = Record::new("page".to_string(), "Nope".to_string(), json!({}));
    assert!(factory.build(wrong).is_err());
}

#[test]
fn test_custom_factory_closure() {
    let types = RecordTypeSet::new();
    types.register(RecordTypeDescriptor::new("file", "File").with_factory(
        ModelFactory::from_fn("FileModel", |record| {
            FileModel::from_record(record).map(|model| Box::new(model) as Box<dyn RecordModel>)
        }),
    ));

    let registry = TypeRegistry::new(Arc::new(types));
    let factory = registry.mapping_model("file").unwrap();
    assert_eq!(factory.model_name(), "FileModel");

    let record = Record::new("file".to_string(), "Photo".to_string(), json!({}));
    assert!(factory.build(record).is_ok());
}
