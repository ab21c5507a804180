use std::collections::HashMap;

use case_insensitive_string::CaseInsensitiveString;

use crate::catalog;
use crate::configs::{AgentOs, BrowserFamily};
use crate::error::{Error, Result};
use crate::identity::BrowserIdentity;
use crate::spoof_user_agent::synthesize;
use crate::versions::{chromium_base_version, resolve_version, NOT_A_BRAND_VERSION};

lazy_static::lazy_static! {
    /// Accept-Language for every family. Use the env var 'IMPERSONATE_ACCEPT_LANGUAGE' to override the family defaults.
    pub static ref ACCEPT_LANGUAGE: Option<String> = std::env::var("IMPERSONATE_ACCEPT_LANGUAGE")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
}

/// Chromium desktop and Android navigation Accept.
pub const ACCEPT_CHROMIUM: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";
/// Firefox, Safari and Chrome iOS navigation Accept.
pub const ACCEPT_DOCUMENT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
/// Accept-Encoding outside a secure context.
pub const ENCODING_INSECURE: &str = "gzip, deflate";
/// Accept-Encoding for WebKit.
pub const ENCODING_BR: &str = "gzip, deflate, br";
/// Accept-Encoding for Chromium desktop and Firefox.
pub const ENCODING_ZSTD: &str = "gzip, deflate, br, zstd";
/// Accept-Language for Chromium and Safari.
pub const ACCEPT_LANGUAGE_DEFAULT: &str = "en-US,en;q=0.9";
/// Accept-Language for Firefox.
pub const ACCEPT_LANGUAGE_FIREFOX: &str = "en-US,en;q=0.5";

/// Wire order of navigation headers per engine.
pub static HEADER_ORDER_MAP: phf::Map<&'static str, &'static [&'static str]> = phf::phf_map! {
    "chromium" => &[
        "cache-control",
        "sec-ch-ua",
        "sec-ch-ua-mobile",
        "sec-ch-ua-platform",
        "sec-gpc",
        "upgrade-insecure-requests",
        "user-agent",
        "accept",
        "sec-fetch-site",
        "sec-fetch-mode",
        "sec-fetch-user",
        "sec-fetch-dest",
        "accept-encoding",
        "accept-language",
        "priority",
    ],
    "firefox" => &[
        "user-agent",
        "accept",
        "accept-language",
        "accept-encoding",
        "upgrade-insecure-requests",
        "sec-fetch-dest",
        "sec-fetch-mode",
        "sec-fetch-site",
        "sec-fetch-user",
        "priority",
        "te",
    ],
    "safari" => &[
        "sec-fetch-dest",
        "user-agent",
        "accept",
        "upgrade-insecure-requests",
        "sec-fetch-site",
        "sec-fetch-mode",
        "accept-language",
        "priority",
        "accept-encoding",
    ],
};

/// The header order key of a family.
fn order_key(family: BrowserFamily) -> &'static str {
    match family {
        BrowserFamily::Firefox => "firefox",
        BrowserFamily::Safari => "safari",
        _ => "chromium",
    }
}

/// The wire order for a family's navigation headers.
pub fn header_order_for(family: BrowserFamily) -> &'static [&'static str] {
    HEADER_ORDER_MAP
        .get(order_key(family))
        .copied()
        .unwrap_or_default()
}

/// A composed header set with its wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeaderArtifact {
    values: HashMap<CaseInsensitiveString, String>,
    order: Vec<String>,
}

impl HeaderArtifact {
    /// Case-insensitive header lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(&CaseInsensitiveString::from(name))
            .map(|v| v.as_str())
    }

    /// Is the header present?
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(&CaseInsensitiveString::from(name))
    }

    /// The User-Agent value.
    pub fn user_agent(&self) -> Option<&str> {
        self.get("user-agent")
    }

    /// Header names in wire order.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// No headers at all.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(name, value)` pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .filter_map(move |name| self.get(name).map(|value| (name.as_str(), value)))
    }

    /// Check that order and values describe the same set of names.
    pub fn validate(&self) -> Result<()> {
        if self.order.len() != self.values.len() {
            return Err(Error::InconsistentArtifact(format!(
                "{} ordered names for {} values",
                self.order.len(),
                self.values.len()
            )));
        }

        for (i, name) in self.order.iter().enumerate() {
            if !self.contains(name) {
                return Err(Error::InconsistentArtifact(format!(
                    "ordered header {name} has no value"
                )));
            }
            if self.order[..i].iter().any(|n| n.eq_ignore_ascii_case(name)) {
                return Err(Error::InconsistentArtifact(format!(
                    "header {name} ordered twice"
                )));
            }
        }

        Ok(())
    }

    /// Convert into an `http::HeaderMap`, inserted in wire order.
    #[cfg(feature = "headers")]
    pub fn to_header_map(&self) -> Result<http::HeaderMap> {
        let mut map = http::HeaderMap::with_capacity(self.len());

        for (name, value) in self.iter() {
            let name = http::HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::InconsistentArtifact(format!("header name {name}: {e}")))?;
            let value = http::HeaderValue::from_str(value)
                .map_err(|e| Error::InconsistentArtifact(format!("header value for {name}: {e}")))?;
            map.insert(name, value);
        }

        Ok(map)
    }

    /// The wire order as `http::HeaderName`s.
    #[cfg(feature = "headers")]
    pub fn header_order(&self) -> Result<Vec<http::HeaderName>> {
        self.order
            .iter()
            .map(|name| {
                http::HeaderName::from_bytes(name.as_bytes())
                    .map_err(|e| Error::InconsistentArtifact(format!("header name {name}: {e}")))
            })
            .collect()
    }
}

/// Headers in insertion order while composing.
#[derive(Default)]
struct HeaderSet {
    values: HashMap<CaseInsensitiveString, String>,
    names: Vec<String>,
}

impl HeaderSet {
    /// Insert or replace.
    fn set(&mut self, name: &str, value: impl Into<String>) {
        let key = CaseInsensitiveString::from(name);
        if !self.values.contains_key(&key) {
            self.names.push(name.to_string());
        }
        self.values.insert(key, value.into());
    }

    /// Insert unless present under any case.
    fn set_if_absent(&mut self, name: &str, value: impl Into<String>) {
        if !self.values.contains_key(&CaseInsensitiveString::from(name)) {
            self.set(name, value);
        }
    }

    fn sec_fetch(&mut self, user: bool) {
        self.set_if_absent("Sec-Fetch-Site", "none");
        self.set_if_absent("Sec-Fetch-Mode", "navigate");
        if user {
            self.set_if_absent("Sec-Fetch-User", "?1");
        }
        self.set_if_absent("Sec-Fetch-Dest", "document");
    }

    fn accept_language(&mut self, default: &str) {
        match ACCEPT_LANGUAGE.as_deref() {
            Some(language) => self.set_if_absent("Accept-Language", language),
            None => self.set_if_absent("Accept-Language", default),
        }
    }

    /// Apply the family permutation, then the names it does not know in insertion order.
    fn into_artifact(self, order: &[&str]) -> HeaderArtifact {
        let mut ordered = Vec::with_capacity(self.names.len());

        for wanted in order {
            if let Some(name) = self.names.iter().find(|n| n.eq_ignore_ascii_case(wanted)) {
                ordered.push(name.clone());
            }
        }

        for name in &self.names {
            if !order.iter().any(|o| o.eq_ignore_ascii_case(name)) {
                ordered.push(name.clone());
            }
        }

        HeaderArtifact {
            values: self.values,
            order: ordered,
        }
    }
}

/// The `Sec-Ch-Ua` brand list.
pub fn sec_ch_ua(family: BrowserFamily, version: u32) -> String {
    let version = resolve_version(family, version);

    match family {
        BrowserFamily::Opera => format!(
            r#""Not;A=Brand";v="{}", "Opera";v="{}", "Chromium";v="{}""#,
            *NOT_A_BRAND_VERSION,
            version,
            chromium_base_version(family, version)
        ),
        _ => format!(
            r#""Chromium";v="{}", "{}";v="{}", "Not_A Brand";v="{}""#,
            version,
            family.sec_ch_ua_brand(),
            version,
            *NOT_A_BRAND_VERSION
        ),
    }
}

/// `Sec-Ch-Ua-Mobile` for an OS.
pub fn sec_ch_ua_mobile(os: AgentOs) -> &'static str {
    if os.is_mobile() {
        "?1"
    } else {
        "?0"
    }
}

fn chromium_defaults(set: &mut HeaderSet, family: BrowserFamily, os: AgentOs, version: u32, secure: bool) {
    if secure {
        set.set_if_absent("Priority", "u=0, i");
    }

    if os == AgentOs::IOS {
        set.set_if_absent("Accept", ACCEPT_DOCUMENT);
        if secure {
            set.set_if_absent("Accept-Encoding", ENCODING_BR);
        }
    } else {
        set.set_if_absent("Accept", ACCEPT_CHROMIUM);
        if secure {
            set.set_if_absent("Accept-Encoding", ENCODING_ZSTD);
        }
        set.set_if_absent("Sec-Ch-Ua", sec_ch_ua(family, version));
        set.set_if_absent("Sec-Ch-Ua-Mobile", sec_ch_ua_mobile(os));
        set.set_if_absent("Sec-Ch-Ua-Platform", os.sec_ch_platform());
    }

    set.accept_language(ACCEPT_LANGUAGE_DEFAULT);
    set.set_if_absent("Cache-Control", "max-age=0");

    if secure {
        set.sec_fetch(true);
    }

    if family == BrowserFamily::Brave {
        set.set_if_absent("Sec-Gpc", "1");
    }

    set.set_if_absent("User-Agent", synthesize(family, os, version));
}

fn firefox_defaults(set: &mut HeaderSet, os: AgentOs, version: u32, secure: bool) {
    set.set_if_absent("Priority", "u=0, i");
    set.set_if_absent("te", "trailers");
    set.set_if_absent("User-Agent", synthesize(BrowserFamily::Firefox, os, version));
    set.set_if_absent("Accept", ACCEPT_DOCUMENT);
    set.accept_language(ACCEPT_LANGUAGE_FIREFOX);
    if secure {
        set.set_if_absent("Accept-Encoding", ENCODING_ZSTD);
    }
    set.sec_fetch(true);
}

fn safari_defaults(set: &mut HeaderSet, os: AgentOs, version: u32, secure: bool) {
    set.set_if_absent("Priority", "u=0, i");
    set.set_if_absent("User-Agent", synthesize(BrowserFamily::Safari, os, version));
    set.set_if_absent("Accept", ACCEPT_DOCUMENT);
    set.accept_language(ACCEPT_LANGUAGE_DEFAULT);
    if secure {
        set.set_if_absent("Accept-Encoding", ENCODING_BR);
    }
    // Safari sends Site, Mode and Dest on navigation but never Sec-Fetch-User.
    set.sec_fetch(false);
}

/// Compose the navigation headers of an identity.
///
/// Overrides win over every default. Fails with `UnsupportedIdentity` when the
/// catalog has no fingerprint for the pair and with `InconsistentArtifact` when the
/// result has no usable User-Agent.
pub fn compose(identity: &BrowserIdentity, secure_context: bool) -> Result<HeaderArtifact> {
    catalog::lookup_identity(identity)?;

    let family = match identity.family() {
        Some(family) => family,
        None => return Err(Error::unsupported(None, identity.os())),
    };
    let os = identity.os();
    let version = identity.version();

    let mut set = HeaderSet::default();

    for (name, value) in identity.header_overrides() {
        set.set(name, value.as_str());
    }

    set.set_if_absent("Upgrade-Insecure-Requests", "1");

    if !secure_context {
        set.set_if_absent("Accept-Encoding", ENCODING_INSECURE);
    }

    match family {
        BrowserFamily::Chrome | BrowserFamily::Edge | BrowserFamily::Brave | BrowserFamily::Opera => {
            chromium_defaults(&mut set, family, os, version, secure_context)
        }
        BrowserFamily::Firefox => firefox_defaults(&mut set, os, version, secure_context),
        BrowserFamily::Safari => safari_defaults(&mut set, os, version, secure_context),
    }

    let artifact = set.into_artifact(header_order_for(family));

    if artifact.user_agent().map_or(true, |ua| ua.trim().is_empty()) {
        log::warn!("{family} on {os} composed without a User-Agent");
        return Err(Error::InconsistentArtifact(
            "empty User-Agent after composition".into(),
        ));
    }

    if let Err(e) = artifact.validate() {
        log::warn!("{family} on {os}: {e}");
        return Err(e);
    }

    log::debug!(
        "composed {} headers for {family} {} on {os}",
        artifact.len(),
        resolve_version(family, version)
    );

    Ok(artifact)
}
