//! Test doubles for the page seams

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::error::PageResult;
use crate::feed::Viewport;
use crate::model::{Expense, ExpensePage};
use crate::pager::ScrollMetrics;
use crate::render::Document;
use crate::transport::{RawResponse, Request, RequestError, RequestResult, Transport};

pub type NodeId = usize;

#[derive(Debug, Default)]
struct NodeData {
    class: String,
    text: String,
    children: Vec<NodeId>,
}

/// In-memory document tree
#[derive(Clone, Default)]
pub struct MemoryDocument {
    nodes: Rc<RefCell<Vec<NodeData>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached top-level node, standing in for existing markup
    pub fn root(&self, class: &str) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeData {
            class: class.to_string(),
            ..NodeData::default()
        });
        nodes.len() - 1
    }

    pub fn class(&self, node: &NodeId) -> String {
        self.nodes.borrow()[*node].class.clone()
    }

    pub fn text(&self, node: &NodeId) -> String {
        self.nodes.borrow()[*node].text.clone()
    }

    pub fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[*node].children.clone()
    }

    /// Descendants of `node` with exactly this class, in document order
    pub fn find_by_class(&self, node: &NodeId, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        for child in self.children(node) {
            if self.class(&child) == class {
                found.push(child);
            }
            found.extend(self.find_by_class(&child, class));
        }
        found
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn create_block(&self, class: &str, text: Option<&str>) -> PageResult<NodeId> {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeData {
            class: class.to_string(),
            text: text.unwrap_or_default().to_string(),
            children: Vec::new(),
        });
        Ok(nodes.len() - 1)
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> PageResult<()> {
        self.nodes.borrow_mut()[*parent].children.push(*child);
        Ok(())
    }

    fn set_text(&self, node: &NodeId, text: &str) -> PageResult<()> {
        self.nodes.borrow_mut()[*node].text = text.to_string();
        Ok(())
    }
}

/// Viewport replaying scripted metrics; the last frame repeats forever
pub struct ScriptedViewport {
    frames: RefCell<VecDeque<ScrollMetrics>>,
}

impl ScriptedViewport {
    pub fn new(frames: Vec<ScrollMetrics>) -> Self {
        assert!(!frames.is_empty(), "at least one frame is required");
        Self {
            frames: RefCell::new(frames.into()),
        }
    }
}

impl Viewport for ScriptedViewport {
    fn metrics(&self) -> ScrollMetrics {
        let mut frames = self.frames.borrow_mut();
        if frames.len() > 1 {
            frames.pop_front().unwrap()
        } else {
            frames[0]
        }
    }
}

#[derive(Default)]
struct MockState {
    responses: VecDeque<RequestResult<RawResponse>>,
    requests: Vec<Request>,
}

/// Transport answering from a queue of scripted responses
///
/// Clones share state. A gated transport records each request, then waits
/// for the gate before answering.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
    gate: Option<Rc<Notify>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated(gate: Rc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn respond(&self, status: u16, body: impl Into<String>) {
        self.state
            .borrow_mut()
            .responses
            .push_back(Ok(RawResponse::new(status, body)));
    }

    pub fn fail(&self, detail: &str) {
        self.state
            .borrow_mut()
            .responses
            .push_back(Err(RequestError::Network(detail.to_string())));
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.state
            .borrow()
            .requests
            .iter()
            .map(|request| request.url.clone())
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: &Request) -> RequestResult<RawResponse> {
        self.state.borrow_mut().requests.push(request.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.state
            .borrow_mut()
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::Network("no scripted response".to_string())))
    }
}

/// Serialize a page the way the server does
pub fn page_json(expenses: &[Expense], next: Option<&str>) -> String {
    let page = ExpensePage::new(expenses.to_vec(), next.map(str::to_string));
    serde_json::to_string(&page).unwrap()
}
