use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::configs::{AgentOs, BrowserFamily};
use crate::identity::BrowserIdentity;

/// The operating systems we sample. Linux is supported when asked for but never drawn.
pub const AVAILABLE_AGENT_OS: [AgentOs; 4] = [
    AgentOs::Windows,
    AgentOs::MacOS,
    AgentOs::IOS,
    AgentOs::Android,
];

const IOS_FAMILIES: &[BrowserFamily] = &[BrowserFamily::Safari, BrowserFamily::Chrome];
const ANDROID_FAMILIES: &[BrowserFamily] = &[BrowserFamily::Chrome];
const WINDOWS_FAMILIES: &[BrowserFamily] = &[
    BrowserFamily::Edge,
    BrowserFamily::Brave,
    BrowserFamily::Chrome,
    BrowserFamily::Firefox,
];
const MACOS_FAMILIES: &[BrowserFamily] = &[
    BrowserFamily::Safari,
    BrowserFamily::Brave,
    BrowserFamily::Chrome,
    BrowserFamily::Firefox,
];
const LINUX_FAMILIES: &[BrowserFamily] = &[BrowserFamily::Chrome, BrowserFamily::Firefox];

/// Browsers people actually run on an OS.
pub fn realistic_families(os: AgentOs) -> &'static [BrowserFamily] {
    match os {
        AgentOs::IOS => IOS_FAMILIES,
        AgentOs::Android => ANDROID_FAMILIES,
        AgentOs::Windows => WINDOWS_FAMILIES,
        AgentOs::MacOS => MACOS_FAMILIES,
        AgentOs::Linux => LINUX_FAMILIES,
    }
}

fn pick_os_rng<R: Rng + ?Sized>(rng: &mut R) -> AgentOs {
    AVAILABLE_AGENT_OS
        .choose(rng)
        .copied()
        .unwrap_or_default()
}

/// Uniform OS, family left unset.
pub fn pick_random_rng<R: Rng + ?Sized>(rng: &mut R) -> BrowserIdentity {
    BrowserIdentity::for_os(pick_os_rng(rng))
}

/// Uniform OS, family left unset.
pub fn pick_random() -> BrowserIdentity {
    pick_random_rng(&mut rand::rng())
}

/// Uniform OS, then a uniform family among the realistic ones for that OS.
pub fn pick_realistic_rng<R: Rng + ?Sized>(rng: &mut R) -> BrowserIdentity {
    let os = pick_os_rng(rng);
    let family = realistic_families(os)
        .choose(rng)
        .copied()
        .unwrap_or(BrowserFamily::Chrome);

    BrowserIdentity::new(family, os)
}

/// Uniform OS, then a uniform family among the realistic ones for that OS.
pub fn pick_realistic() -> BrowserIdentity {
    pick_realistic_rng(&mut rand::rng())
}

/// Identity sampling over an owned generator.
#[derive(Debug, Clone)]
pub struct IdentitySelector<R: Rng> {
    rng: R,
}

impl<R: Rng> IdentitySelector<R> {
    /// Sample with `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// See [`pick_random`].
    pub fn pick_random(&mut self) -> BrowserIdentity {
        pick_random_rng(&mut self.rng)
    }

    /// See [`pick_realistic`].
    pub fn pick_realistic(&mut self) -> BrowserIdentity {
        pick_realistic_rng(&mut self.rng)
    }

    /// Give the generator back.
    pub fn into_inner(self) -> R {
        self.rng
    }
}
