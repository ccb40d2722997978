#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

/// Backend reachability as last observed. No history is kept.
///
/// Starts disconnected until the first health check answers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectionState {
    pub connected: bool,
    pub last_checked: Option<f64>,
}

impl ConnectionState {
    /// Record an observation. Returns `true` if the connected flag flipped.
    pub fn observe(&mut self, connected: bool, now_ms: f64) -> bool {
        let changed = self.connected != connected;
        self.connected = connected;
        self.last_checked = Some(now_ms);
        changed
    }
}
