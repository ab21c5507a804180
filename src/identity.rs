use crate::configs::{AgentOs, BrowserFamily};
use crate::versions::resolve_version;

/// What is being impersonated.
///
/// Values are immutable once built: the `with_*` methods consume the identity and
/// return a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrowserIdentity {
    /// The browser family. `None` until a family is chosen.
    family: Option<BrowserFamily>,
    /// The operating system.
    os: AgentOs,
    /// The major version, `0` for the family default.
    version: u32,
    /// Requests are sent over TLS.
    secure_context: bool,
    /// Caller headers that always win over defaults, in insertion order.
    header_overrides: Vec<(String, String)>,
}

impl Default for BrowserIdentity {
    fn default() -> Self {
        Self {
            family: None,
            os: AgentOs::default(),
            version: 0,
            secure_context: true,
            header_overrides: Vec::new(),
        }
    }
}

impl BrowserIdentity {
    /// A secure-context identity on the family default version.
    pub fn new(family: BrowserFamily, os: AgentOs) -> Self {
        Self {
            family: Some(family),
            os,
            ..Self::default()
        }
    }

    /// An identity with only the operating system chosen.
    pub fn for_os(os: AgentOs) -> Self {
        Self {
            os,
            ..Self::default()
        }
    }

    /// Set the family.
    pub fn with_family(mut self, family: BrowserFamily) -> Self {
        self.family = Some(family);
        self
    }

    /// Set the major version, `0` for the default.
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Set whether requests go over TLS.
    pub fn with_secure_context(mut self, secure_context: bool) -> Self {
        self.secure_context = secure_context;
        self
    }

    /// Add a header override. A later override of the same name (any case) replaces the earlier one.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();

        match self
            .header_overrides
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.header_overrides.push((name, value)),
        }

        self
    }

    /// The browser family.
    pub fn family(&self) -> Option<BrowserFamily> {
        self.family
    }

    /// The operating system.
    pub fn os(&self) -> AgentOs {
        self.os
    }

    /// The requested version, `0` meaning the family default.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// The version after applying the family default. `0` when no family is set.
    pub fn resolved_version(&self) -> u32 {
        self.family
            .map(|family| resolve_version(family, self.version))
            .unwrap_or_default()
    }

    /// Requests are sent over TLS.
    pub fn secure_context(&self) -> bool {
        self.secure_context
    }

    /// Caller headers in insertion order.
    pub fn header_overrides(&self) -> &[(String, String)] {
        &self.header_overrides
    }

    /// Case-insensitive lookup of an override.
    pub fn header_override(&self, name: &str) -> Option<&str> {
        self.header_overrides
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
