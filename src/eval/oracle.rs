//! External correction oracle.
//!
//! The oracle is an opaque service consulted for reference corrections: the
//! evaluator sends a misspelled word and receives either a whitespace
//! separated list of candidate words or a sentinel meaning "no result". The
//! trait keeps the exchange synchronous and line-oriented; the wire details
//! live entirely in the implementations.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use crate::error::{RespellError, Result};

/// Terminator appended to every request.
pub const REQUEST_TERMINATOR: &str = "<EOF>";

/// Reply sentinel meaning the service found no correction.
pub const NOT_FOUND_SENTINEL: &str = "Not Found";

/// A synchronous request/response correction service.
pub trait CorrectionOracle {
    /// Ask the oracle for candidate corrections of a word.
    ///
    /// `Ok(None)` means the service answered with its no-result sentinel;
    /// transport failures are errors.
    fn correct(&mut self, word: &str) -> Result<Option<Vec<String>>>;
}

/// Oracle speaking the TCP exchange of the reference correction service.
///
/// The service answers one request per connection and closes afterwards, so
/// each exchange acquires and releases its own stream; the oracle value is
/// the run-scoped handle holding the address.
pub struct TcpOracle {
    addr: String,
    timeout: Option<Duration>,
}

impl TcpOracle {
    /// Create an oracle for the given address, e.g. `127.0.0.1:11000`.
    pub fn new<S: Into<String>>(addr: S) -> Self {
        TcpOracle {
            addr: addr.into(),
            timeout: None,
        }
    }

    /// Set a read/write timeout for each exchange.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The address this oracle connects to.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    fn exchange(&self, word: &str) -> Result<String> {
        let mut stream = TcpStream::connect(&self.addr)
            .map_err(|e| RespellError::oracle(format!("connect to {}: {e}", self.addr)))?;
        stream
            .set_read_timeout(self.timeout)
            .map_err(|e| RespellError::oracle(format!("set timeout: {e}")))?;
        stream
            .set_write_timeout(self.timeout)
            .map_err(|e| RespellError::oracle(format!("set timeout: {e}")))?;

        let request = format!("{word}{REQUEST_TERMINATOR}");
        stream
            .write_all(request.as_bytes())
            .map_err(|e| RespellError::oracle(format!("send request: {e}")))?;

        let mut reply = String::new();
        stream
            .read_to_string(&mut reply)
            .map_err(|e| RespellError::oracle(format!("read reply: {e}")))?;

        Ok(reply)
    }
}

impl CorrectionOracle for TcpOracle {
    fn correct(&mut self, word: &str) -> Result<Option<Vec<String>>> {
        let reply = self.exchange(word)?;
        Ok(parse_reply(&reply))
    }
}

/// Split a raw reply into candidate words, mapping the sentinel (or an
/// empty reply) to `None`.
pub fn parse_reply(reply: &str) -> Option<Vec<String>> {
    let reply = reply.trim();
    if reply.is_empty() || reply == NOT_FOUND_SENTINEL {
        return None;
    }

    Some(reply.split_whitespace().map(str::to_string).collect())
}
