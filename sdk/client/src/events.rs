//! Contract event subscriptions
//!
//! Subscriptions poll an installed log filter on a background task and
//! re-emit decoded event records through a caller-supplied callback.
//! Undecodable logs are skipped, never panicking the task. A subscription
//! persists until `unsubscribe` is called; unsubscribing twice is a no-op.

use std::sync::Arc;

use ethers::abi::{self, ParamType, Token};
use ethers::providers::{Http, Middleware, Provider};
use ethers::types::{Address, Filter, H256, Log, U256};
use futures_util::StreamExt;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub(crate) const ACCESS_GRANTED_SIGNATURE: &str = "AccessGranted(address,bytes32,uint256)";
pub(crate) const IDENTITY_PASS_USED_SIGNATURE: &str =
    "IdentityPassUsed(address,bytes32,bytes32,uint256)";

/// `AccessGranted(address indexed caller, bytes32 nullifier, uint256 root)`
#[derive(Debug, Clone)]
pub struct AccessGranted {
    pub caller: Address,
    pub nullifier: H256,
    pub root: U256,
    /// The undecoded log, for callers that need block/tx metadata.
    pub raw: Log,
}

/// `IdentityPassUsed(address indexed caller, bytes32 indexed nullifier,
/// bytes32 indexed issuer, uint256 root)`
#[derive(Debug, Clone)]
pub struct IdentityPassUsed {
    pub caller: Address,
    pub nullifier: H256,
    pub issuer: H256,
    pub root: U256,
    pub raw: Log,
}

/// A log that matched the filter but does not fit the event layout.
#[derive(Error, Debug)]
pub enum EventDecodeError {
    #[error("log is missing indexed topic {0}")]
    MissingTopic(usize),

    #[error("log data does not match the event layout: {0}")]
    Data(#[from] abi::Error),

    #[error("unexpected token layout in log data")]
    Layout,
}

fn topic(log: &Log, index: usize) -> Result<H256, EventDecodeError> {
    log.topics
        .get(index)
        .copied()
        .ok_or(EventDecodeError::MissingTopic(index))
}

fn topic_as_address(log: &Log, index: usize) -> Result<Address, EventDecodeError> {
    Ok(Address::from_slice(&topic(log, index)?.as_bytes()[12..]))
}

pub(crate) fn decode_access_granted(log: &Log) -> Result<AccessGranted, EventDecodeError> {
    let caller = topic_as_address(log, 1)?;

    let mut tokens = abi::decode(&[ParamType::FixedBytes(32), ParamType::Uint(256)], &log.data)?
        .into_iter();
    let nullifier = match tokens.next() {
        Some(Token::FixedBytes(bytes)) if bytes.len() == 32 => H256::from_slice(&bytes),
        _ => return Err(EventDecodeError::Layout),
    };
    let root = match tokens.next() {
        Some(Token::Uint(root)) => root,
        _ => return Err(EventDecodeError::Layout),
    };

    Ok(AccessGranted {
        caller,
        nullifier,
        root,
        raw: log.clone(),
    })
}

pub(crate) fn decode_identity_pass_used(log: &Log) -> Result<IdentityPassUsed, EventDecodeError> {
    let caller = topic_as_address(log, 1)?;
    let nullifier = topic(log, 2)?;
    let issuer = topic(log, 3)?;

    let mut tokens = abi::decode(&[ParamType::Uint(256)], &log.data)?.into_iter();
    let root = match tokens.next() {
        Some(Token::Uint(root)) => root,
        _ => return Err(EventDecodeError::Layout),
    };

    Ok(IdentityPassUsed {
        caller,
        nullifier,
        issuer,
        root,
        raw: log.clone(),
    })
}

/// Handle to a running event subscription.
///
/// Dropping the handle does not stop the task; unsubscription is explicit.
#[derive(Debug)]
pub struct Subscription {
    handle: Option<JoinHandle<()>>,
}

impl Subscription {
    pub(crate) fn new(handle: JoinHandle<()>) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Stop the polling task. Idempotent.
    pub fn unsubscribe(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

/// Install a log filter and forward decoded events to `callback` from a
/// spawned task. Must run inside a tokio runtime.
pub(crate) fn watch_logs<T, D, F>(
    provider: Arc<Provider<Http>>,
    filter: Filter,
    event_name: &'static str,
    decode: D,
    callback: F,
) -> Subscription
where
    T: Send + 'static,
    D: Fn(&Log) -> Result<T, EventDecodeError> + Send + 'static,
    F: Fn(T) + Send + 'static,
{
    let handle = tokio::spawn(async move {
        let mut stream = match provider.watch(&filter).await {
            Ok(stream) => stream,
            Err(err) => {
                warn!(event = event_name, error = %err, "failed to install log filter");
                return;
            }
        };

        while let Some(log) = stream.next().await {
            match decode(&log) {
                Ok(event) => callback(event),
                Err(err) => {
                    debug!(event = event_name, error = %err, "skipping undecodable log");
                }
            }
        }
    });

    Subscription::new(handle)
}
