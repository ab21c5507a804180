use std::fmt;

/// The browser family being impersonated.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BrowserFamily {
    /// Google Chrome.
    Chrome,
    /// Mozilla Firefox.
    Firefox,
    /// Apple Safari.
    Safari,
    /// Microsoft Edge (Chromium).
    Edge,
    /// Brave (Chromium).
    Brave,
    /// Opera (Chromium).
    Opera,
}

impl BrowserFamily {
    /// Every family.
    pub const ALL: [BrowserFamily; 6] = [
        BrowserFamily::Chrome,
        BrowserFamily::Firefox,
        BrowserFamily::Safari,
        BrowserFamily::Edge,
        BrowserFamily::Brave,
        BrowserFamily::Opera,
    ];

    /// Built on the Chromium engine and network stack.
    pub fn is_chromium(&self) -> bool {
        matches!(
            self,
            BrowserFamily::Chrome | BrowserFamily::Edge | BrowserFamily::Brave | BrowserFamily::Opera
        )
    }

    /// The brand advertised in `Sec-Ch-Ua`. Only relevant to Chromium based browsers.
    pub fn sec_ch_ua_brand(&self) -> &'static str {
        match self {
            BrowserFamily::Brave => "Brave",
            BrowserFamily::Edge => "Microsoft Edge",
            BrowserFamily::Opera => "Opera",
            _ => "Google Chrome",
        }
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserFamily::Chrome => "chrome",
            BrowserFamily::Firefox => "firefox",
            BrowserFamily::Safari => "safari",
            BrowserFamily::Edge => "edge",
            BrowserFamily::Brave => "brave",
            BrowserFamily::Opera => "opera",
        }
    }
}

impl fmt::Display for BrowserFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user agent type of profiles.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentOs {
    #[default]
    /// Windows.
    Windows,
    /// Linux.
    Linux,
    /// Mac.
    MacOS,
    /// Android.
    Android,
    /// Iphone.
    IOS,
}

impl AgentOs {
    /// Every operating system.
    pub const ALL: [AgentOs; 5] = [
        AgentOs::Windows,
        AgentOs::Linux,
        AgentOs::MacOS,
        AgentOs::Android,
        AgentOs::IOS,
    ];

    /// Phone or tablet.
    pub fn is_mobile(&self) -> bool {
        matches!(self, AgentOs::Android | AgentOs::IOS)
    }

    /// The quoted `Sec-Ch-Ua-Platform` value.
    pub fn sec_ch_platform(&self) -> &'static str {
        match self {
            AgentOs::MacOS => "\"macOS\"",
            AgentOs::Linux => "\"Linux\"",
            AgentOs::Windows => "\"Windows\"",
            AgentOs::Android => "\"Android\"",
            AgentOs::IOS => "\"iOS\"",
        }
    }

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentOs::Windows => "Windows",
            AgentOs::Linux => "Linux",
            AgentOs::MacOS => "Mac",
            AgentOs::Android => "Android",
            AgentOs::IOS => "IOS",
        }
    }
}

impl fmt::Display for AgentOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
