//! Click event model for the append-only event log.

use serde::{Deserialize, Serialize};

use crate::domain::fingerprint::fingerprint;

/// A single accepted click on a referral link.
///
/// Events are immutable once created and appended to the event log in
/// chronological order. The log is used for dedup lookups and audit only;
/// per-reference counters are incremented at acceptance time and never
/// derived by replaying the log.
///
/// # Snapshot Format
///
/// Field names are fixed for compatibility with existing snapshots:
///
/// ```json
/// { "ref": "promo1", "ts": 1700000000000, "ip": "1.2.3.4", "ua": "Mozilla/5.0", "fp": "a1b2c3d4e5f6" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    #[serde(rename = "ref")]
    pub reference: String,
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "ts")]
    pub timestamp: i64,
    #[serde(rename = "ip", default)]
    pub client_address: String,
    #[serde(rename = "ua", default)]
    pub client_agent: String,
    #[serde(rename = "fp")]
    pub fingerprint: String,
}

impl ClickEvent {
    /// Creates a new click event, deriving the visitor fingerprint from the
    /// client address and agent.
    ///
    /// Missing client metadata is recorded as an empty string.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let event = ClickEvent::new(
    ///     "promo1".to_string(),
    ///     1_700_000_000_000,
    ///     Some("1.2.3.4".to_string()),
    ///     Some("Mozilla/5.0"),
    /// );
    /// assert_eq!(event.fingerprint.len(), 12);
    /// ```
    pub fn new(
        reference: String,
        timestamp: i64,
        client_address: Option<String>,
        client_agent: Option<&str>,
    ) -> Self {
        let client_address = client_address.unwrap_or_default();
        let client_agent = client_agent.unwrap_or_default().to_string();
        let fingerprint = fingerprint(&client_address, &client_agent);

        Self {
            reference,
            timestamp,
            client_address,
            client_agent,
            fingerprint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_event_creation_full() {
        let event = ClickEvent::new(
            "promo1".to_string(),
            1_000,
            Some("1.2.3.4".to_string()),
            Some("Mozilla/5.0"),
        );

        assert_eq!(event.reference, "promo1");
        assert_eq!(event.timestamp, 1_000);
        assert_eq!(event.client_address, "1.2.3.4");
        assert_eq!(event.client_agent, "Mozilla/5.0");
        assert_eq!(event.fingerprint, fingerprint("1.2.3.4", "Mozilla/5.0"));
    }

    #[test]
    fn test_click_event_creation_minimal() {
        let event = ClickEvent::new("xyz".to_string(), 0, None, None);

        assert_eq!(event.client_address, "");
        assert_eq!(event.client_agent, "");
        assert_eq!(event.fingerprint, fingerprint("", ""));
    }

    #[test]
    fn test_click_event_snapshot_field_names() {
        let event = ClickEvent::new(
            "promo1".to_string(),
            42,
            Some("1.2.3.4".to_string()),
            Some("Mozilla/5.0"),
        );

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["ref"], "promo1");
        assert_eq!(json["ts"], 42);
        assert_eq!(json["ip"], "1.2.3.4");
        assert_eq!(json["ua"], "Mozilla/5.0");
        assert_eq!(json["fp"], event.fingerprint.as_str());
    }

    #[test]
    fn test_click_event_missing_ip_and_ua_in_snapshot() {
        let json = r#"{ "ref": "old", "ts": 7, "fp": "000000000000" }"#;

        let event: ClickEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.reference, "old");
        assert!(event.client_address.is_empty());
        assert!(event.client_agent.is_empty());
    }
}
