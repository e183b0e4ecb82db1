//! Diagnostic sinks
//!
//! Where the login form sends submitted credentials until a real
//! authentication service is wired in.

use crate::form::Credentials;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Tracing target for submitted credentials. Off unless RUST_LOG enables it.
pub const CREDENTIALS_TARGET: &str = "tardy_portal::login";

/// Receiver for login submissions
pub trait DiagnosticSink {
    /// Called once per submit with the values exactly as typed
    fn credentials_submitted(&mut self, credentials: &Credentials);
}

/// Writes each submission as a DEBUG event on [`CREDENTIALS_TARGET`]
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn credentials_submitted(&mut self, credentials: &Credentials) {
        // TODO: replace with a call to the eSchool auth client once the token flow is exposed to the UI
        debug!(
            target: CREDENTIALS_TARGET,
            username = %credentials.username,
            password = %credentials.password,
            "Login submitted"
        );
    }
}

/// A submission captured by [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub at: DateTime<Utc>,
    pub credentials: Credentials,
}

/// Keeps every submission in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    submissions: Vec<Submission>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All submissions, oldest first
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn last(&self) -> Option<&Credentials> {
        self.submissions.last().map(|s| &s.credentials)
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn credentials_submitted(&mut self, credentials: &Credentials) {
        self.submissions.push(Submission {
            at: Utc::now(),
            credentials: credentials.clone(),
        });
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn credentials_submitted(&mut self, credentials: &Credentials) {
        (**self).credentials_submitted(credentials);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::default_filter;
    use crate::logging::test_support::capture;
    use tracing_subscriber::EnvFilter;

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        assert!(sink.is_empty());

        sink.credentials_submitted(&Credentials::new("alice", "secret"));
        sink.credentials_submitted(&Credentials::new("", ""));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.submissions()[0].credentials, Credentials::new("alice", "secret"));
        assert_eq!(sink.last(), Some(&Credentials::new("", "")));
        assert!(sink.submissions()[0].at <= sink.submissions()[1].at);
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        let mut sink = TracingSink::new();
        sink.credentials_submitted(&Credentials::new("ユーザー", "p\u{0}w"));
    }

    #[test]
    fn test_tracing_sink_emits_one_debug_event_with_raw_values() {
        let filter = EnvFilter::new(format!("{}=debug", CREDENTIALS_TARGET));
        let out = capture(filter, || {
            let mut sink = TracingSink::new();
            sink.credentials_submitted(&Credentials::new("ユーザー", " pä ss "));
        });

        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("DEBUG"));
        assert!(out.contains("tardy_portal::login"));
        assert!(out.contains("username=ユーザー"));
        assert!(out.contains("password= pä ss "));
        assert!(out.contains("Login submitted"));
    }

    #[test]
    fn test_tracing_sink_silent_under_default_filter() {
        let out = capture(default_filter("debug"), || {
            TracingSink::new().credentials_submitted(&Credentials::new("alice", "secret"));
        });
        assert!(!out.contains("secret"));
    }

    #[test]
    fn test_boxed_sink_forwards() {
        let mut sink: Box<RecordingSink> = Box::new(RecordingSink::new());
        sink.credentials_submitted(&Credentials::new("a", "b"));
        assert_eq!(sink.len(), 1);
    }
}
