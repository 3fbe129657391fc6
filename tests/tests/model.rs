use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sfmodel::{attrs, Model, Value};
use tests::{fixtures::*, init_logging, payload, MockAdapter};

#[test]
fn build_requires_adapter() {
    init_logging();

    let err = Model::builder("TestedModel").field("Field1").build().unwrap_err();

    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "TestedModel: invalid schema: no adapter configured"
    );
}

#[test]
fn new_record_is_all_null() {
    let model = tested_model(&MockAdapter::new());
    let record = model.new_record();

    assert_eq!(record.id(), None);
    assert_eq!(
        record.attributes(),
        attrs! {
            "Id" => Value::Null,
            "Field1" => Value::Null,
            "Field2" => Value::Null,
            "deep_field" => Value::Null,
            "Timestamp" => Value::Null,
        }
    );
}

#[test]
fn from_payload_decodes_every_field() {
    let model = tested_model(&MockAdapter::new());
    let record = model.from_payload(&salesforce_fields()).unwrap();

    assert_eq!(
        record.attributes(),
        attrs! {
            "Id" => SALESFORCE_ID,
            "Field1" => "value1",
            "Field2" => "value2",
            "deep_field" => "value3",
            "Timestamp" => NaiveDate::from_ymd_opt(2013, 3, 1).unwrap(),
        }
    );
}

#[test]
fn from_payload_leaves_missing_fields_null() {
    let model = tested_model(&MockAdapter::new());
    let record = model
        .from_payload(&payload!({"Id": SALESFORCE_ID, "Parent": null, "Other": 1}))
        .unwrap();

    assert_eq!(record.id(), Some(SALESFORCE_ID));
    assert_eq!(record.get("deep_field"), Some(&Value::Null));
    assert_eq!(record.get("Other"), None);
}

#[test]
fn load_ignores_undeclared_names() {
    let model = tested_model(&MockAdapter::new());
    let record = model.load(&attrs! { "Field1" => "value1", "Other" => "x" });

    assert_eq!(record.get("Field1"), Some(&Value::from("value1")));
    assert_eq!(record.get("Other"), None);
}

#[test]
fn records_of_one_model_compare_by_value() {
    let model = tested_model(&MockAdapter::new());

    let a = model.from_payload(&salesforce_fields()).unwrap();
    let b = model.from_payload(&salesforce_fields()).unwrap();
    let c = model.from_payload(&salesforce_fields_with_id("OTHER")).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn encode_drops_aliases_and_unknown_names() {
    let model = tested_model(&MockAdapter::new());

    let fields = model
        .encode(&attrs! { "Field1" => "v", "deep_field" => "x", "Other" => "y" })
        .unwrap();

    assert_eq!(fields, payload!({"Field1": "v"}));
}
