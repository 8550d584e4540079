//! Shared test doubles for the OPay client integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use opay_client::{
    Credentials, HttpTransport, OpayClient, OpayResult, ReferenceGenerator, RequestHeaders,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "https://cashierapi.opayweb.com/api/v3";
pub const PUBLIC_KEY: &str = "OPAYPUB_test_key";
pub const MERCHANT_ID: &str = "256612345678901";

/// One request seen by [`RecordingTransport`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Transport stub that records every call and answers with a canned body
pub struct RecordingTransport {
    response: Value,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl RecordingTransport {
    pub fn new(response: Value) -> Arc<Self> {
        Arc::new(Self {
            response,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn last_body(&self) -> Value {
        self.last_request().body.expect("request had no body")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn post(
        &self,
        url: &str,
        headers: &RequestHeaders,
        body: Option<&Value>,
    ) -> OpayResult<Value> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers
                .pairs()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: body.cloned(),
        });
        Ok(self.response.clone())
    }
}

/// Reference generator that hands out `REF000001`, `REF000002`, ... and
/// remembers what it produced
#[derive(Default)]
pub struct SequenceReferences {
    issued: Mutex<Vec<String>>,
}

impl SequenceReferences {
    pub fn issued(&self) -> Vec<String> {
        self.issued.lock().unwrap().clone()
    }
}

impl ReferenceGenerator for SequenceReferences {
    fn generate(&self) -> String {
        let mut issued = self.issued.lock().unwrap();
        let reference = format!("REF{:06}", issued.len() + 1);
        issued.push(reference.clone());
        reference
    }
}

pub fn client_with(transport: Arc<RecordingTransport>) -> OpayClient {
    OpayClient::with_transport(Credentials::new(PUBLIC_KEY, MERCHANT_ID), BASE_URL, transport)
}

pub fn client_with_references(
    transport: Arc<RecordingTransport>,
    references: Arc<SequenceReferences>,
) -> OpayClient {
    client_with(transport).with_reference_generator(references)
}

pub fn url(path: &str) -> String {
    format!("{}{}", BASE_URL, path)
}
