use crate::configs::{AgentOs, BrowserFamily};
use crate::error::{Error, Result};
use crate::identity::BrowserIdentity;
use crate::profiles::chrome::{CHROME_141, CHROME_142_IOS};
use crate::profiles::firefox::FIREFOX_135;
use crate::profiles::safari::{SAFARI_26_IOS, SAFARI_26_MACOS};
use crate::profiles::FingerprintProfile;

/// Catalog key for the Chromium family default.
pub const CHROME: &str = "chrome";
/// Catalog key for Chrome on iOS.
pub const CHROME_IOS: &str = "chrome-ios";
/// Catalog key for Safari on iOS.
pub const SAFARI_IOS: &str = "safari-ios";
/// Catalog key for Safari on macOS.
pub const SAFARI_MACOS: &str = "safari-macos";
/// Catalog key for Firefox on every OS.
pub const FIREFOX: &str = "firefox";

/// Every fingerprint profile we carry, by catalog key.
pub static CATALOG: phf::Map<&'static str, &'static FingerprintProfile> = phf::phf_map! {
    "chrome" => &CHROME_141,
    "chrome-ios" => &CHROME_142_IOS,
    "safari-ios" => &SAFARI_26_IOS,
    "safari-macos" => &SAFARI_26_MACOS,
    "firefox" => &FIREFOX_135,
};

/// The catalog key a (family, os) pair resolves to, `None` when unsupported.
pub fn catalog_key(family: BrowserFamily, os: AgentOs) -> Option<&'static str> {
    match (family, os) {
        (BrowserFamily::Safari, AgentOs::MacOS) => Some(SAFARI_MACOS),
        (BrowserFamily::Safari, AgentOs::IOS) => Some(SAFARI_IOS),
        // Safari has no capture off Apple platforms and no family default.
        (BrowserFamily::Safari, _) => None,
        (BrowserFamily::Chrome, AgentOs::IOS) => Some(CHROME_IOS),
        // Every other family ignores the OS.
        (BrowserFamily::Chrome | BrowserFamily::Edge | BrowserFamily::Brave | BrowserFamily::Opera, _) => {
            Some(CHROME)
        }
        (BrowserFamily::Firefox, _) => Some(FIREFOX),
    }
}

/// Resolve the fingerprint profile for a (family, os) pair.
pub fn lookup(family: BrowserFamily, os: AgentOs) -> Result<&'static FingerprintProfile> {
    match catalog_key(family, os).and_then(|key| CATALOG.get(key).map(|p| (key, *p))) {
        Some((key, profile)) => {
            log::debug!("{family} on {os} resolved to {key} ({})", profile.name);
            Ok(profile)
        }
        None => {
            log::warn!("no fingerprint profile for {family} on {os}");
            Err(Error::unsupported(Some(family), os))
        }
    }
}

/// Resolve the fingerprint profile for an identity. An identity without a family is unsupported.
pub fn lookup_identity(identity: &BrowserIdentity) -> Result<&'static FingerprintProfile> {
    match identity.family() {
        Some(family) => lookup(family, identity.os()),
        None => {
            log::warn!("identity on {} has no browser family", identity.os());
            Err(Error::unsupported(None, identity.os()))
        }
    }
}

/// Does the catalog cover the pair?
pub fn is_supported(family: BrowserFamily, os: AgentOs) -> bool {
    catalog_key(family, os).is_some_and(|key| CATALOG.contains_key(key))
}

/// Every catalog entry as `(key, profile)`.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static FingerprintProfile)> {
    CATALOG.entries().map(|(key, profile)| (*key, *profile))
}
