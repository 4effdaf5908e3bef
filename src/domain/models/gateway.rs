use async_trait::async_trait;
use serde_json::Value;

use super::GatewayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One outbound remote call: method, path relative to the gateway base URL,
/// query parameters, and an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl GatewayRequest {
    pub fn new(method: Method, path: &str) -> GatewayRequest {
        return GatewayRequest {
            method,
            path: path.to_string(),
            query: vec![],
            body: None,
        };
    }

    pub fn get(path: &str) -> GatewayRequest {
        return GatewayRequest::new(Method::Get, path);
    }

    pub fn post(path: &str) -> GatewayRequest {
        return GatewayRequest::new(Method::Post, path);
    }

    pub fn put(path: &str) -> GatewayRequest {
        return GatewayRequest::new(Method::Put, path);
    }

    pub fn delete(path: &str) -> GatewayRequest {
        return GatewayRequest::new(Method::Delete, path);
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> GatewayRequest {
        self.query = query;
        return self;
    }

    pub fn with_body(mut self, body: Value) -> GatewayRequest {
        self.body = Some(body);
        return self;
    }
}

/// The sole entry point for outbound remote calls. Implementations attach
/// the current credential, unwrap the response envelope, and normalize every
/// failure path to a [`GatewayError`]; callers never see raw transport
/// errors or envelopes.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn call(&self, request: GatewayRequest) -> Result<Value, GatewayError>;
}

pub type GatewayBox = Box<dyn Gateway + Send + Sync>;
