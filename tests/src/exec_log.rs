use crate::Call;

use std::{
    fmt,
    sync::{Arc, Mutex},
};

/// A view over the calls a [`MockAdapter`](crate::MockAdapter) received, oldest first.
pub struct ExecLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl ExecLog {
    pub(crate) fn new(calls: Arc<Mutex<Vec<Call>>>) -> Self {
        Self { calls }
    }

    /// Get the number of logged calls
    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.calls.lock().unwrap().clear();
    }

    /// Remove and return the oldest call
    #[track_caller]
    pub fn pop(&mut self) -> Call {
        let mut calls = self.calls.lock().unwrap();
        if calls.is_empty() {
            panic!("no calls in log");
        }
        calls.remove(0)
    }

    /// Remove the oldest call, which must be a query, and return its SOQL
    #[track_caller]
    pub fn pop_query(&mut self) -> String {
        match self.pop() {
            Call::Query(soql) => soql,
            call => panic!("expected a query; actual={call:?}"),
        }
    }
}

impl fmt::Debug for ExecLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let calls = self.calls.lock().unwrap();
        f.debug_struct("ExecLog").field("calls", &*calls).finish()
    }
}
