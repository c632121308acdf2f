//! Domain preauth tokens.
//!
//! A preauth value proves that a trusted front end already authenticated the
//! user. It is the lowercase hex HMAC-SHA1, keyed with the domain's
//! `zimbraPreAuthKey`, of `account|by|expires|timestamp`. Timestamps are
//! milliseconds since the Unix epoch.

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use tracing::trace;
use zimbra_soap::{Element, Result, SoapError, ToElement};

use crate::enums::AccountBy;
use crate::required_secret;
use crate::structs::AccountSelector;

type HmacSha1 = Hmac<Sha1>;

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Negative timestamps mean "now".
fn normalize(timestamp: i64) -> i64 {
    if timestamp < 0 { now_millis() } else { timestamp }
}

/// The `<preauth>` element of an account auth request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreAuth {
    timestamp: i64,
    expires_timestamp: Option<i64>,
    value: Option<String>,
}

impl PreAuth {
    pub fn new(timestamp: i64, value: Option<&str>, expires_timestamp: Option<i64>) -> Self {
        Self {
            timestamp: normalize(timestamp),
            expires_timestamp: expires_timestamp.map(normalize),
            value: value.map(|v| v.trim().to_string()),
        }
    }

    /// A preauth stamped with the current time and no expiry.
    pub fn now() -> Self {
        Self::new(now_millis(), None, None)
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: i64) -> &mut Self {
        self.timestamp = normalize(timestamp);
        self
    }

    pub fn expires_timestamp(&self) -> Option<i64> {
        self.expires_timestamp
    }

    pub fn set_expires_timestamp(&mut self, expires_timestamp: i64) -> &mut Self {
        self.expires_timestamp = Some(normalize(expires_timestamp));
        self
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: &str) -> &mut Self {
        self.value = Some(value.trim().to_string());
        self
    }

    /// Signs for `account` with the domain preauth `key` and stores the result.
    ///
    /// A zero timestamp is replaced by the current time before signing.
    pub fn compute_value(&mut self, account: &AccountSelector, key: &str) -> Result<&mut Self> {
        let key = required_secret("key", key)?;
        if self.timestamp == 0 {
            self.timestamp = now_millis();
        }
        let expires = self.expires_timestamp.unwrap_or(0);
        let input = format!(
            "{}|{}|{}|{}",
            account.value(),
            account.by(),
            expires,
            self.timestamp
        );

        let mut mac = HmacSha1::new_from_slice(key.as_bytes())
            .map_err(|e| SoapError::invalid_argument("key", e.to_string()))?;
        mac.update(input.as_bytes());
        self.value = Some(hex::encode(mac.finalize().into_bytes()));

        trace!(account = account.value(), by = %account.by(), "computed preauth value");
        Ok(self)
    }

    /// Same as [`PreAuth::compute_value`] for an account given by name.
    pub fn compute_value_for_name(&mut self, name: &str, key: &str) -> Result<&mut Self> {
        let account = AccountSelector::new(AccountBy::Name, name)?;
        self.compute_value(&account, key)
    }
}

impl Default for PreAuth {
    fn default() -> Self {
        Self::now()
    }
}

impl ToElement for PreAuth {
    const ELEMENT_NAME: &'static str = "preauth";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("timestamp", self.timestamp)
            .with_optional_property("expiresTimestamp", self.expires_timestamp)
            .with_optional_text(self.value.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "6b7ead4bd425836e8cf0079cd6c1a05acc127acd07c8ee4b61023e19250e929c";

    #[test]
    fn test_compute_value_for_name() {
        let mut preauth = PreAuth::new(1135280708088, None, None);
        preauth
            .compute_value_for_name("john.doe@domain.com", KEY)
            .unwrap();
        assert_eq!(
            preauth.value(),
            Some("b248f6cfd027edd45c5369f8490125204772f844")
        );
        assert_eq!(
            preauth.to_xml().unwrap(),
            r#"<preauth timestamp="1135280708088">b248f6cfd027edd45c5369f8490125204772f844</preauth>"#
        );
    }

    #[test]
    fn test_compute_value_with_selector_and_expiry() {
        let account = AccountSelector::new(AccountBy::Id, "acct-1").unwrap();
        let mut preauth = PreAuth::new(1135280708088, None, Some(1135280800000));
        preauth.compute_value(&account, KEY).unwrap();
        assert_eq!(
            preauth.value(),
            Some("ebbd7b21d19632ea5d99fe14ad65c8b1df788a82")
        );
    }

    #[test]
    fn test_negative_timestamps_become_now() {
        let before = now_millis();
        let preauth = PreAuth::new(-1, Some(" abc "), Some(-5));
        assert!(preauth.timestamp() >= before);
        assert!(preauth.expires_timestamp().unwrap() >= before);
        assert_eq!(preauth.value(), Some("abc"));
    }

    #[test]
    fn test_zero_timestamp_is_stamped_when_signing() {
        let mut preauth = PreAuth::new(0, None, None);
        preauth.compute_value_for_name("user@example.com", KEY).unwrap();
        assert!(preauth.timestamp() > 0);
        assert_eq!(preauth.value().map(str::len), Some(40));
    }

    #[test]
    fn test_blank_key_is_rejected() {
        let mut preauth = PreAuth::now();
        let err = preauth.compute_value_for_name("user@example.com", "").unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
