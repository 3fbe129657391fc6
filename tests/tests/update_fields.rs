use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sfmodel::{attrs, Error, Record, Value};
use tests::{fixtures::*, init_logging, payload, Call, MockAdapter};

fn fetched(adapter: &MockAdapter) -> Record {
    tested_model(adapter)
        .from_payload(&salesforce_fields())
        .unwrap()
}

#[tokio::test]
async fn update_fields_sends_id_and_type() {
    init_logging();

    let adapter = MockAdapter::new();
    adapter.expect_update(Ok(true));
    let mut record = fetched(&adapter);

    let updated = record
        .update_fields(&attrs! { "Field1" => "value1bis" })
        .await
        .unwrap();

    assert!(updated);
    assert_eq!(
        adapter.log().pop(),
        Call::Update {
            table: "TestedModel".to_string(),
            fields: payload!({
                "type": "TestedModel",
                "Id": SALESFORCE_ID,
                "Field1": "value1bis",
            }),
        }
    );

    assert_eq!(record.get("Field1"), Some(&Value::from("value1bis")));
    assert_eq!(record.get("Field2"), Some(&Value::from("value2")));
    assert_eq!(record.get("deep_field"), Some(&Value::from("value3")));
}

#[tokio::test]
async fn update_fields_encodes_dates() {
    init_logging();

    let adapter = MockAdapter::new();
    adapter.expect_update(Ok(true));
    let mut record = fetched(&adapter);

    let date = NaiveDate::from_ymd_opt(2014, 1, 31).unwrap();
    record
        .update_fields(&attrs! { "Timestamp" => date })
        .await
        .unwrap();

    let Call::Update { fields, .. } = adapter.log().pop() else {
        panic!("expected an update");
    };
    assert_eq!(fields.get("Timestamp"), Some(&serde_json::json!("2014-01-31")));
    assert_eq!(record.get("Timestamp"), Some(&Value::Date(date)));
}

#[tokio::test]
async fn update_fields_does_not_write_aliases() {
    init_logging();

    let adapter = MockAdapter::new();
    adapter.expect_update(Ok(true));
    let mut record = fetched(&adapter);

    record
        .update_fields(&attrs! { "deep_field" => "value3bis", "Unknown" => "x" })
        .await
        .unwrap();

    let Call::Update { fields, .. } = adapter.log().pop() else {
        panic!("expected an update");
    };
    assert_eq!(
        fields,
        payload!({"type": "TestedModel", "Id": SALESFORCE_ID})
    );
    assert_eq!(record.get("deep_field"), Some(&Value::from("value3bis")));
    assert_eq!(record.get("Unknown"), None);
}

#[tokio::test]
async fn update_failed_leaves_record_untouched() {
    init_logging();

    let adapter = MockAdapter::new();
    let rejection = Error::update_failed("FIELD_CUSTOM_VALIDATION_EXCEPTION", "Field1 is locked");
    assert_eq!(
        rejection.update_failed_code(),
        Some("FIELD_CUSTOM_VALIDATION_EXCEPTION")
    );
    adapter.expect_update(Err(rejection));
    let mut record = fetched(&adapter);
    let before = record.clone();

    let updated = record
        .update_fields(&attrs! { "Field1" => "value1bis" })
        .await
        .unwrap();

    assert!(!updated);
    assert_eq!(record, before);
    assert_eq!(record.get("Field1"), Some(&Value::from("value1")));
}

#[tokio::test]
async fn rejected_update_returns_false() {
    init_logging();

    let adapter = MockAdapter::new();
    adapter.expect_update(Ok(false));
    let mut record = fetched(&adapter);

    let updated = record
        .update_fields(&attrs! { "Field1" => "value1bis" })
        .await
        .unwrap();

    assert!(!updated);
    assert_eq!(record.get("Field1"), Some(&Value::from("value1")));
}

#[tokio::test]
async fn other_adapter_errors_propagate() {
    init_logging();

    let adapter = MockAdapter::new();
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
    adapter.expect_update(Err(Error::adapter(io)));
    let mut record = fetched(&adapter);

    let err = record
        .update_fields(&attrs! { "Field1" => "value1bis" })
        .await
        .unwrap_err();

    assert!(err.is_adapter());
    assert!(!err.is_update_failed());
    assert_eq!(
        err.to_string(),
        "TestedModel.update_fields(): connection reset"
    );
    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(source.to_string(), "connection reset");
    assert_eq!(record.get("Field1"), Some(&Value::from("value1")));
}

#[tokio::test]
async fn update_without_id_fails_before_calling_adapter() {
    init_logging();

    let adapter = MockAdapter::new();
    let mut record = tested_model(&adapter).new_record();

    let err = record
        .update_fields(&attrs! { "Field1" => "value1" })
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "TestedModel.update_fields(): record has no Id"
    );
    assert!(adapter.log().is_empty());
}
