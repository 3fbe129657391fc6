use crate::ExecLog;

use sfmodel::{async_trait, Adapter, Error, Payload, Result};

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// A call received by the [`MockAdapter`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Query(String),
    Create { table: String, fields: Payload },
    Update { table: String, fields: Payload },
}

/// An adapter that replays scripted responses and logs every call.
///
/// Responses are consumed in order. A query with nothing scripted returns the
/// stubbed rows (empty by default); create and update calls with nothing
/// scripted fail.
#[derive(Debug, Clone, Default)]
pub struct MockAdapter {
    calls: Arc<Mutex<Vec<Call>>>,
    script: Arc<Mutex<Script>>,
}

#[derive(Debug, Default)]
struct Script {
    queries: VecDeque<Result<Vec<Payload>>>,
    query_stub: Vec<Payload>,
    creates: VecDeque<Result<String>>,
    updates: VecDeque<Result<bool>>,
}

impl MockAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle to the adapter as the models hold it.
    pub fn handle(&self) -> Arc<dyn Adapter> {
        Arc::new(self.clone())
    }

    /// Get a view over the logged calls
    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.calls.clone())
    }

    /// Answers the next query with `rows`.
    pub fn expect_query(&self, rows: Vec<Payload>) -> &Self {
        self.script.lock().unwrap().queries.push_back(Ok(rows));
        self
    }

    /// Fails the next query with `err`.
    pub fn fail_query(&self, err: Error) -> &Self {
        self.script.lock().unwrap().queries.push_back(Err(err));
        self
    }

    /// Answers every unscripted query with `rows`.
    pub fn stub_query(&self, rows: Vec<Payload>) -> &Self {
        self.script.lock().unwrap().query_stub = rows;
        self
    }

    pub fn expect_create(&self, response: Result<String>) -> &Self {
        self.script.lock().unwrap().creates.push_back(response);
        self
    }

    pub fn expect_update(&self, response: Result<bool>) -> &Self {
        self.script.lock().unwrap().updates.push_back(response);
        self
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Adapter for MockAdapter {
    async fn query(&self, soql: &str) -> Result<Vec<Payload>> {
        self.record(Call::Query(soql.to_string()));

        let mut script = self.script.lock().unwrap();
        match script.queries.pop_front() {
            Some(response) => response,
            None => Ok(script.query_stub.clone()),
        }
    }

    async fn create(&self, table: &str, fields: Payload) -> Result<String> {
        self.record(Call::Create {
            table: table.to_string(),
            fields,
        });

        let response = self.script.lock().unwrap().creates.pop_front();
        response.unwrap_or_else(|| Err(Error::create_failed("no create response scripted")))
    }

    async fn update(&self, table: &str, fields: Payload) -> Result<bool> {
        self.record(Call::Update {
            table: table.to_string(),
            fields,
        });

        let response = self.script.lock().unwrap().updates.pop_front();
        response.unwrap_or_else(|| {
            Err(Error::from_args(format_args!(
                "no update response scripted"
            )))
        })
    }
}
