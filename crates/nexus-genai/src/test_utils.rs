//! Scripted generation service for tests
//!
//! Replies are consumed in the order they were queued; every request is
//! recorded so tests can assert on model choice and prompt content.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use nexus_core::prelude::*;

use crate::request::{GenerateRequest, GenerateResponse};
use crate::service::GenerationService;

#[derive(Debug, Clone, Default)]
pub struct ScriptedService {
    replies: Arc<Mutex<VecDeque<std::result::Result<GenerateResponse, String>>>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a plain-text reply
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.respond(GenerateResponse::text(text))
    }

    /// Queue a full response
    pub fn respond(self, response: GenerateResponse) -> Self {
        self.replies.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queue a transport failure
    pub fn fail(self, message: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Err(message.into()));
        self
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

impl GenerationService for ScriptedService {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        self.requests.lock().unwrap().push(request);
        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(Error::generation(message)),
            None => Err(Error::generation("no scripted reply left")),
        }
    }
}
