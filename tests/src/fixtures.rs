//! The model most tests run against.

use crate::MockAdapter;

use sfmodel::{
    schema::{FieldOptions, FieldTy},
    Model, Payload,
};

pub const SALESFORCE_ID: &str = "SALESFORCE_ID_1234";

/// Every query against [`tested_model`] starts with this.
pub const SELECT: &str =
    "Select t.Id, t.Field1, t.Field2, t.Parent.Field3, t.Timestamp from TestedModel t";

pub fn tested_model(adapter: &MockAdapter) -> Model {
    Model::builder("TestedModel")
        .adapter(adapter.handle())
        .fields(["Field1", "Field2"])
        .field_with("deep_field", FieldOptions::new().remote("Parent.Field3"))
        .field_with("Timestamp", FieldTy::Date)
        .build()
        .unwrap()
}

pub fn salesforce_fields() -> Payload {
    payload!({
        "Id": SALESFORCE_ID,
        "type": "TestedModel",
        "Field1": "value1",
        "Field2": "value2",
        "Parent": {"Field3": "value3"},
        "Timestamp": "2013-03-01",
    })
}

/// [`salesforce_fields`] with a different id.
pub fn salesforce_fields_with_id(id: &str) -> Payload {
    let mut fields = salesforce_fields();
    fields.insert("Id".to_string(), id.into());
    fields
}
