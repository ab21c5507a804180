use crate::configs::{AgentOs, BrowserFamily};
use crate::versions::{chromium_base_version, crios_full_version, resolve_version};

/// The WebKit prefix every iOS browser shares.
const IOS_CHROMIUM_PREFIX: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 26_1_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko)";
/// The WebKit suffix every iOS browser shares.
const IOS_MOBILE_SUFFIX: &str = "Mobile/15E148 Safari/604.1";

const P_IPHONE: usize = 0; // "iphone"
const P_IPAD: usize = 1; // "ipad"
const P_ANDROID: usize = 2; // "android"
const P_WINDOWS: usize = 3; // "windows nt"
const P_MAC: usize = 4; // "macintosh"
const P_X11: usize = 5; // "x11"
const P_LINUX: usize = 6; // "linux"

const F_EDGE: usize = 0; // "edg/"
const F_EDGE_IOS: usize = 1; // "edgios/"
const F_OPERA: usize = 2; // "opr/"
const F_OPERA_IOS: usize = 3; // "opt/"
const F_FIREFOX: usize = 4; // "firefox/"
const F_FIREFOX_IOS: usize = 5; // "fxios/"
const F_CHROME: usize = 6; // "chrome/"
const F_CHROME_IOS: usize = 7; // "crios/"
const F_SAFARI: usize = 8; // "version/"

lazy_static::lazy_static! {
    /// Platform tokens.
    static ref OS_MATCHER: aho_corasick::AhoCorasick = aho_corasick::AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .build(["iphone", "ipad", "android", "windows nt", "macintosh", "x11", "linux"])
        .expect("valid os patterns");

    /// Product tokens.
    static ref FAMILY_MATCHER: aho_corasick::AhoCorasick = aho_corasick::AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .build(["edg/", "edgios/", "opr/", "opt/", "firefox/", "fxios/", "chrome/", "crios/", "version/"])
        .expect("valid family patterns");

    /// Common mobile indicators.
    static ref MOBILE_MATCHER: aho_corasick::AhoCorasick = aho_corasick::AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .build(["iphone", "ipad", "ipod", "android", "mobile", "mobi"])
        .expect("valid mobile patterns");
}

/// The platform section of a Chromium desktop/Android UA.
fn chromium_platform(os: AgentOs) -> &'static str {
    match os {
        AgentOs::Android => "Linux; Android 10; K",
        AgentOs::MacOS => "Macintosh; Intel Mac OS X 10_15_7",
        AgentOs::Linux => "X11; Linux x86_64",
        AgentOs::Windows | AgentOs::IOS => "Windows NT 10.0; Win64; x64",
    }
}

fn chromium_user_agent(family: BrowserFamily, os: AgentOs, version: u32) -> String {
    let version = resolve_version(family, version);
    let base = chromium_base_version(family, version);

    if os == AgentOs::IOS {
        let product = match family {
            BrowserFamily::Edge => format!("EdgiOS/{version}.0.0.0"),
            BrowserFamily::Opera => format!("OPT/{version}.0.0.0"),
            _ => format!("CriOS/{}", crios_full_version(base)),
        };
        return format!("{IOS_CHROMIUM_PREFIX} {product} {IOS_MOBILE_SUFFIX}");
    }

    let mobile = if os == AgentOs::Android { " Mobile" } else { "" };
    let mut ua = format!(
        "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{base}.0.0.0{mobile} Safari/537.36",
        chromium_platform(os)
    );

    match family {
        BrowserFamily::Edge => ua.push_str(&format!(" Edg/{version}.0.0.0")),
        BrowserFamily::Opera => ua.push_str(&format!(" OPR/{version}.0.0.0")),
        _ => (),
    }

    ua
}

fn firefox_user_agent(os: AgentOs, version: u32) -> String {
    let v = resolve_version(BrowserFamily::Firefox, version);

    match os {
        AgentOs::MacOS => format!(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:{v}.0) Gecko/20100101 Firefox/{v}.0"
        ),
        AgentOs::Linux => {
            format!("Mozilla/5.0 (X11; Linux x86_64; rv:{v}.0) Gecko/20100101 Firefox/{v}.0")
        }
        AgentOs::Android => {
            format!("Mozilla/5.0 (Android 13; Mobile; rv:{v}.0) Gecko/{v}.0 Firefox/{v}.0")
        }
        // WebKit underneath, no Gecko tokens.
        AgentOs::IOS => format!(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 26_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) FxiOS/{v}.0 {IOS_MOBILE_SUFFIX}"
        ),
        AgentOs::Windows => format!(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:{v}.0) Gecko/20100101 Firefox/{v}.0"
        ),
    }
}

fn safari_user_agent(os: AgentOs, version: u32) -> String {
    let v = resolve_version(BrowserFamily::Safari, version);

    match os {
        AgentOs::IOS => format!(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 18_7 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{v}.1 {IOS_MOBILE_SUFFIX}"
        ),
        _ => format!(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{v}.0.1 Safari/605.1.15"
        ),
    }
}

/// Build the User-Agent of a (family, os, version) triple. Version `0` is the family default.
///
/// # Example
/// ```
/// use spider_impersonate::configs::{AgentOs, BrowserFamily};
/// use spider_impersonate::spoof_user_agent::synthesize;
///
/// let ua = synthesize(BrowserFamily::Edge, AgentOs::Windows, 0);
/// assert!(ua.ends_with("Edg/142.0.0.0"));
/// ```
pub fn synthesize(family: BrowserFamily, os: AgentOs, version: u32) -> String {
    match family {
        BrowserFamily::Chrome | BrowserFamily::Edge | BrowserFamily::Brave | BrowserFamily::Opera => {
            chromium_user_agent(family, os, version)
        }
        BrowserFamily::Firefox => firefox_user_agent(os, version),
        BrowserFamily::Safari => safari_user_agent(os, version),
    }
}

/// The operating system a UA claims. iOS wins over the `Mac OS X` inside iPhone UAs.
pub fn detect_os(ua: &str) -> Option<AgentOs> {
    let mut found = [false; 7];

    for m in OS_MATCHER.find_overlapping_iter(ua) {
        found[m.pattern().as_usize()] = true;
    }

    if found[P_IPHONE] || found[P_IPAD] {
        Some(AgentOs::IOS)
    } else if found[P_ANDROID] {
        Some(AgentOs::Android)
    } else if found[P_WINDOWS] {
        Some(AgentOs::Windows)
    } else if found[P_MAC] {
        Some(AgentOs::MacOS)
    } else if found[P_X11] || found[P_LINUX] {
        Some(AgentOs::Linux)
    } else {
        None
    }
}

/// The browser family a UA claims. Brave ships a plain Chrome UA and reads as Chrome.
pub fn detect_family(ua: &str) -> Option<BrowserFamily> {
    let mut found = [false; 9];

    for m in FAMILY_MATCHER.find_overlapping_iter(ua) {
        found[m.pattern().as_usize()] = true;
    }

    if found[F_EDGE] || found[F_EDGE_IOS] {
        Some(BrowserFamily::Edge)
    } else if found[F_OPERA] || found[F_OPERA_IOS] {
        Some(BrowserFamily::Opera)
    } else if found[F_FIREFOX] || found[F_FIREFOX_IOS] {
        Some(BrowserFamily::Firefox)
    } else if found[F_CHROME] || found[F_CHROME_IOS] {
        Some(BrowserFamily::Chrome)
    } else if found[F_SAFARI] {
        Some(BrowserFamily::Safari)
    } else {
        None
    }
}

/// Does the UA look like a phone or tablet?
pub fn is_mobile_user_agent(ua: &str) -> bool {
    MOBILE_MATCHER.is_match(ua)
}

/// Extract the major version of the product token of a UA.
pub fn ua_major(ua: &str) -> Option<u32> {
    // Branded tokens first: Edge and Opera UAs also carry Chrome/.
    const TOKENS: &[&str] = &[
        "Edg/", "EdgiOS/", "OPR/", "OPT/", "CriOS/", "FxiOS/", "Firefox/", "Chrome/", "Version/",
    ];

    TOKENS
        .iter()
        .find_map(|token| ua.find(token).map(|pos| &ua[pos + token.len()..]))
        .and_then(leading_number)
}

/// The run of ASCII digits opening `s`, `None` when empty or past `u32::MAX`.
fn leading_number(s: &str) -> Option<u32> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_desktop() {
        assert_eq!(
            synthesize(BrowserFamily::Chrome, AgentOs::Windows, 0),
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36"
        );
        assert_eq!(
            synthesize(BrowserFamily::Brave, AgentOs::MacOS, 140),
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/140.0.0.0 Safari/537.36"
        );
        assert!(synthesize(BrowserFamily::Chrome, AgentOs::Linux, 0).contains("(X11; Linux x86_64)"));
    }

    #[test]
    fn chrome_android_is_mobile() {
        let ua = synthesize(BrowserFamily::Chrome, AgentOs::Android, 0);
        assert_eq!(
            ua,
            "Mozilla/5.0 (Linux; Android 10; K) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/142.0.0.0 Mobile Safari/537.36"
        );
        assert!(is_mobile_user_agent(&ua));
    }

    #[test]
    fn chrome_ios() {
        assert_eq!(
            synthesize(BrowserFamily::Chrome, AgentOs::IOS, 0),
            "Mozilla/5.0 (iPhone; CPU iPhone OS 26_1_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/142.0.7444.46 Mobile/15E148 Safari/604.1"
        );
    }

    #[test]
    fn branded_chromium() {
        let edge = synthesize(BrowserFamily::Edge, AgentOs::Windows, 141);
        assert!(edge.contains("Chrome/141.0.0.0"));
        assert!(edge.ends_with(" Edg/141.0.0.0"));

        let opera = synthesize(BrowserFamily::Opera, AgentOs::Windows, 0);
        assert!(opera.contains("Chrome/139.0.0.0"));
        assert!(opera.ends_with(" OPR/123.0.0.0"));

        let newest = synthesize(BrowserFamily::Opera, AgentOs::Windows, u32::MAX);
        assert!(newest.contains("Chrome/4294967295.0.0.0"));
        assert!(newest.ends_with(" OPR/4294967295.0.0.0"));
        assert_eq!(ua_major(&newest), Some(u32::MAX));
    }

    #[test]
    fn firefox_engines() {
        let ios = synthesize(BrowserFamily::Firefox, AgentOs::IOS, 0);
        assert!(ios.contains("AppleWebKit/605.1.15"));
        assert!(ios.contains("FxiOS/145.0 Mobile/15E148"));
        assert!(!ios.contains("Gecko/"));
        assert!(!ios.contains("  "));

        let windows = synthesize(BrowserFamily::Firefox, AgentOs::Windows, 0);
        assert!(windows.contains("Gecko/20100101"));
        assert!(windows.contains("rv:145.0"));
        assert!(!windows.contains("AppleWebKit"));
    }

    #[test]
    fn safari_platforms() {
        assert!(synthesize(BrowserFamily::Safari, AgentOs::MacOS, 0).contains("Version/26.0.1 Safari/605.1.15"));
        assert!(synthesize(BrowserFamily::Safari, AgentOs::IOS, 0).contains("Version/26.1 Mobile/15E148"));
        assert_eq!(
            synthesize(BrowserFamily::Safari, AgentOs::Windows, 0),
            synthesize(BrowserFamily::Safari, AgentOs::MacOS, 0)
        );
    }

    #[test]
    fn deterministic() {
        for family in BrowserFamily::ALL {
            for os in AgentOs::ALL {
                assert_eq!(synthesize(family, os, 0), synthesize(family, os, 0));
                assert!(!synthesize(family, os, 0).is_empty());
            }
        }
    }

    #[test]
    fn ua_major_examples() {
        let chrome = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                      AppleWebKit/537.36 (KHTML, like Gecko) \
                      Chrome/124.0.6367.118 Safari/537.36";
        assert_eq!(ua_major(chrome), Some(124));

        let safari = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) \
                      AppleWebKit/605.1.15 (KHTML, like Gecko) \
                      Version/17.1 Safari/605.1.15";
        assert_eq!(ua_major(safari), Some(17));

        let firefox = "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:128.0) \
                       Gecko/20100101 Firefox/128.0";
        assert_eq!(ua_major(firefox), Some(128));

        assert_eq!(ua_major(&synthesize(BrowserFamily::Opera, AgentOs::MacOS, 0)), Some(123));
        assert_eq!(ua_major("curl/8.0"), None);
        assert_eq!(ua_major("Mozilla/5.0 Chrome/70000.0.0.0 Safari/537.36"), Some(70000));
        assert_eq!(ua_major("Mozilla/5.0 Chrome/.0"), None);
        assert_eq!(ua_major("Mozilla/5.0 Chrome/99999999999.0"), None);
    }

    #[test]
    fn detection_round_trips_our_agents() {
        for family in BrowserFamily::ALL {
            for os in AgentOs::ALL {
                if family == BrowserFamily::Safari && !matches!(os, AgentOs::MacOS | AgentOs::IOS) {
                    continue;
                }
                let ua = synthesize(family, os, 0);
                let expected = match family {
                    BrowserFamily::Brave => BrowserFamily::Chrome,
                    f => f,
                };
                assert_eq!(detect_family(&ua), Some(expected), "{ua}");
                assert_eq!(detect_os(&ua), Some(os), "{ua}");
                assert_eq!(is_mobile_user_agent(&ua), os.is_mobile(), "{ua}");
            }
        }
    }
}
