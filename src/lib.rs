/// Catalog lookup of transport fingerprints.
pub mod catalog;
/// Browser families and operating systems.
pub mod configs;
/// Error types.
pub mod error;
/// The identity value type.
pub mod identity;
/// Captured TLS and HTTP/2 profiles.
pub mod profiles;
/// Navigation header composition.
pub mod spoof_headers;
/// Random identity selection.
pub mod spoof_identity;
/// User agent.
pub mod spoof_user_agent;
/// Default browser versions.
pub mod versions;

pub use configs::{AgentOs, BrowserFamily};
pub use error::{Error, Result};
pub use identity::BrowserIdentity;
pub use profiles::http2::Http2FingerprintProfile;
pub use profiles::tls::TlsFingerprintProfile;
pub use profiles::FingerprintProfile;
pub use spoof_headers::HeaderArtifact;
pub use spoof_identity::{pick_random_rng, pick_realistic_rng, IdentitySelector};

#[cfg(feature = "headers")]
pub use http;

/// Compose the ordered navigation headers of an identity.
pub fn compose(identity: &BrowserIdentity, secure_context: bool) -> Result<HeaderArtifact> {
    spoof_headers::compose(identity, secure_context)
}

/// The transport fingerprint for a (family, os) pair.
pub fn lookup_fingerprint(family: BrowserFamily, os: AgentOs) -> Result<&'static FingerprintProfile> {
    catalog::lookup(family, os)
}

/// The User-Agent of a (family, os, version) triple, `0` meaning the family default.
pub fn synthesize_user_agent(family: BrowserFamily, os: AgentOs, version: u32) -> String {
    spoof_user_agent::synthesize(family, os, version)
}

/// A uniform OS with the family left unset.
pub fn pick_random() -> BrowserIdentity {
    spoof_identity::pick_random()
}

/// A realistic (family, os) pair.
pub fn pick_realistic() -> BrowserIdentity {
    spoof_identity::pick_realistic()
}

/// Everything needed to pass as one browser: headers, user agent and transport fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Impersonation {
    /// The identity that was resolved.
    pub identity: BrowserIdentity,
    /// The User-Agent sent, overrides included.
    pub user_agent: String,
    /// The ordered navigation headers.
    pub headers: HeaderArtifact,
    /// The TLS and HTTP/2 profile.
    pub fingerprint: &'static FingerprintProfile,
}

impl Impersonation {
    /// Check that the User-Agent, the headers and the fingerprint tell the same story.
    ///
    /// Caller supplied User-Agent and Sec-Ch-Ua-Mobile values are trusted as is, the rest is still checked.
    pub fn verify(&self) -> Result<()> {
        if self.headers.user_agent() != Some(self.user_agent.as_str()) {
            return Err(Error::InconsistentArtifact(
                "User-Agent differs from the header set".into(),
            ));
        }

        let family = self
            .identity
            .family()
            .ok_or_else(|| Error::unsupported(None, self.identity.os()))?;
        let os = self.identity.os();

        let mobile_override = self.identity.header_override("sec-ch-ua-mobile").is_some();
        if let Some(mobile) = self.headers.get("sec-ch-ua-mobile").filter(|_| !mobile_override) {
            if mobile != spoof_headers::sec_ch_ua_mobile(os) {
                return Err(Error::InconsistentArtifact(format!(
                    "Sec-Ch-Ua-Mobile {mobile} disagrees with {os}"
                )));
            }
        }

        if self.identity.header_override("user-agent").is_none() {
            self.verify_user_agent(family, os)?;
        }

        let expected = catalog::lookup(family, os)?;
        if !std::ptr::eq(expected, self.fingerprint) {
            return Err(Error::InconsistentArtifact(format!(
                "fingerprint {} does not belong to {family} on {os}",
                self.fingerprint.name
            )));
        }

        Ok(())
    }

    fn verify_user_agent(&self, family: BrowserFamily, os: AgentOs) -> Result<()> {
        // Brave sends a stock Chrome UA.
        let claimed = spoof_user_agent::detect_family(&self.user_agent).map(|f| match (family, f) {
            (BrowserFamily::Brave, BrowserFamily::Chrome) => BrowserFamily::Brave,
            _ => f,
        });
        if claimed != Some(family) {
            return Err(Error::InconsistentArtifact(format!(
                "User-Agent claims {claimed:?}, identity is {family}"
            )));
        }

        let version = self.identity.resolved_version();
        let major = spoof_user_agent::ua_major(&self.user_agent);
        if major != Some(version) {
            return Err(Error::InconsistentArtifact(format!(
                "User-Agent major {major:?}, identity is version {version}"
            )));
        }

        let claimed_os = spoof_user_agent::detect_os(&self.user_agent);
        if claimed_os != Some(os) {
            return Err(Error::InconsistentArtifact(format!(
                "User-Agent claims {claimed_os:?}, identity is on {os}"
            )));
        }

        if spoof_user_agent::is_mobile_user_agent(&self.user_agent) != os.is_mobile() {
            return Err(Error::InconsistentArtifact(format!(
                "User-Agent mobile flag disagrees with {os}"
            )));
        }

        Ok(())
    }
}

/// Resolve every artifact of an identity in its own secure context.
///
/// # Example
/// ```
/// use spider_impersonate::{impersonate, AgentOs, BrowserFamily, BrowserIdentity};
///
/// let id = BrowserIdentity::new(BrowserFamily::Chrome, AgentOs::Windows);
/// let imp = impersonate(&id).unwrap();
/// assert_eq!(imp.fingerprint.name, "chrome_141");
/// assert!(imp.user_agent.contains("Chrome/142"));
/// ```
pub fn impersonate(identity: &BrowserIdentity) -> Result<Impersonation> {
    let fingerprint = catalog::lookup_identity(identity)?;
    let headers = spoof_headers::compose(identity, identity.secure_context())?;
    let user_agent = headers
        .user_agent()
        .map(str::to_string)
        .ok_or_else(|| Error::InconsistentArtifact("missing User-Agent".into()))?;

    let impersonation = Impersonation {
        identity: identity.clone(),
        user_agent,
        headers,
        fingerprint,
    };
    impersonation.verify()?;

    Ok(impersonation)
}
