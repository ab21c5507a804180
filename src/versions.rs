use crate::configs::BrowserFamily;

/// Default Chrome, Edge and Brave major version.
pub const CHROME_DEFAULT_VERSION: u32 = 142;
/// Default Firefox major version.
pub const FIREFOX_DEFAULT_VERSION: u32 = 145;
/// Default Safari major version.
pub const SAFARI_DEFAULT_VERSION: u32 = 26;
/// Default Opera major version.
pub const OPERA_DEFAULT_VERSION: u32 = 123;
/// Opera majors run this many versions behind their Chromium base (Opera 123 ships Chromium 139).
pub const OPERA_CHROMIUM_OFFSET: u32 = 16;

/// Full CriOS versions seen in the wild, keyed by major.
pub static CRIOS_FULL_VERSIONS: phf::Map<u32, &'static str> = phf::phf_map! {
    141u32 => "141.0.7390.96",
    142u32 => "142.0.7444.46",
};

lazy_static::lazy_static! {
    /// The not a brand version used in `Sec-Ch-Ua`, configurable via the `IMPERSONATE_NOT_A_BRAND_VERSION` env variable.
    pub static ref NOT_A_BRAND_VERSION: String = std::env::var("IMPERSONATE_NOT_A_BRAND_VERSION")
        .ok()
        .and_then(|v| {
            let major = v.split('.').next().unwrap_or_default().trim().to_string();
            if major.is_empty() { None } else { Some(major) }
        })
        .unwrap_or_else(|| "99".into());
}

/// The documented default major version for a family.
pub fn default_version(family: BrowserFamily) -> u32 {
    match family {
        BrowserFamily::Chrome | BrowserFamily::Edge | BrowserFamily::Brave => CHROME_DEFAULT_VERSION,
        BrowserFamily::Firefox => FIREFOX_DEFAULT_VERSION,
        BrowserFamily::Safari => SAFARI_DEFAULT_VERSION,
        BrowserFamily::Opera => OPERA_DEFAULT_VERSION,
    }
}

/// Resolve the `0` sentinel to the family default.
pub fn resolve_version(family: BrowserFamily, version: u32) -> u32 {
    if version == 0 {
        default_version(family)
    } else {
        version
    }
}

/// The Chromium major a Chromium based family is built on.
pub fn chromium_base_version(family: BrowserFamily, version: u32) -> u32 {
    let version = resolve_version(family, version);
    match family {
        BrowserFamily::Opera => version.saturating_add(OPERA_CHROMIUM_OFFSET),
        _ => version,
    }
}

/// The CriOS full version for a major, padded with zeros when the build is unknown.
pub fn crios_full_version(major: u32) -> String {
    match CRIOS_FULL_VERSIONS.get(&major) {
        Some(full) => full.to_string(),
        None => format!("{major}.0.0.0"),
    }
}
