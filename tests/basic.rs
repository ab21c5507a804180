use rand::rngs::StdRng;
use rand::SeedableRng;

use spider_impersonate::spoof_identity::realistic_families;
use spider_impersonate::spoof_user_agent::ua_major;
use spider_impersonate::{
    compose, impersonate, lookup_fingerprint, pick_random, pick_realistic_rng,
    synthesize_user_agent, AgentOs, BrowserFamily, BrowserIdentity, Error, IdentitySelector,
};

#[test]
fn test_chrome_windows_scenario() {
    let id = BrowserIdentity::new(BrowserFamily::Chrome, AgentOs::Windows).with_version(0);
    let headers = compose(&id, true).unwrap();

    let ua = headers.user_agent().unwrap();
    assert_eq!(ua_major(ua), Some(142));
    assert!(headers.get("Accept-Encoding").unwrap().contains("zstd"));
    assert_eq!(headers.get("Sec-Ch-Ua-Platform"), Some("\"Windows\""));
    assert_eq!(headers.get("Sec-Ch-Ua-Mobile"), Some("?0"));
}

#[test]
fn test_order_consistency() {
    for family in BrowserFamily::ALL {
        for os in AgentOs::ALL {
            for secure in [true, false] {
                let id = BrowserIdentity::new(family, os).with_header("X-Request-Id", "abc");
                let Ok(headers) = compose(&id, secure) else {
                    continue;
                };

                let mut lowered: Vec<String> =
                    headers.order().iter().map(|n| n.to_ascii_lowercase()).collect();
                assert_eq!(lowered.len(), headers.len());
                for name in headers.order() {
                    assert!(headers.get(name).is_some(), "{name}");
                }
                lowered.sort();
                lowered.dedup();
                assert_eq!(lowered.len(), headers.len(), "{family} on {os}");
            }
        }
    }
}

#[test]
fn test_override_precedence() {
    for family in BrowserFamily::ALL {
        let id = BrowserIdentity::new(family, AgentOs::MacOS).with_header("Accept-Language", "fr-FR");
        if let Ok(headers) = compose(&id, true) {
            assert_eq!(headers.get("accept-language"), Some("fr-FR"));
            let count = headers
                .order()
                .iter()
                .filter(|n| n.eq_ignore_ascii_case("accept-language"))
                .count();
            assert_eq!(count, 1);
        }
    }
}

#[test]
fn test_grease_on_chrome_desktop() {
    let profile = lookup_fingerprint(BrowserFamily::Chrome, AgentOs::Windows).unwrap();
    assert!(spider_impersonate::profiles::tls::is_grease(profile.tls.cipher_suites[0]));
    assert!(spider_impersonate::profiles::tls::is_grease(profile.tls.supported_versions[0]));
    assert!(profile.tls.uses_grease());
}

#[test]
fn test_engine_coherence() {
    let ios = synthesize_user_agent(BrowserFamily::Firefox, AgentOs::IOS, 0);
    assert!(ios.contains("AppleWebKit/"));
    assert!(!ios.contains("Gecko/"));

    let windows = synthesize_user_agent(BrowserFamily::Firefox, AgentOs::Windows, 0);
    assert!(windows.contains("Gecko/20100101"));

    // Firefox keeps its own fingerprint on every OS, matching its Gecko headers.
    for os in AgentOs::ALL {
        let fx = lookup_fingerprint(BrowserFamily::Firefox, os).unwrap();
        assert_eq!(fx.name, "firefox_135");
    }
    let headers = compose(&BrowserIdentity::new(BrowserFamily::Firefox, AgentOs::IOS), true).unwrap();
    assert_eq!(headers.get("te"), Some("trailers"));
}

#[test]
fn test_chromium_families_on_ios_use_the_family_default() {
    for family in [BrowserFamily::Edge, BrowserFamily::Brave, BrowserFamily::Opera] {
        let profile = lookup_fingerprint(family, AgentOs::IOS).unwrap();
        assert_eq!(profile.name, "chrome_141");

        let imp = impersonate(&BrowserIdentity::new(family, AgentOs::IOS)).unwrap();
        assert!(std::ptr::eq(imp.fingerprint, profile));
    }
    assert_eq!(
        lookup_fingerprint(BrowserFamily::Chrome, AgentOs::IOS).unwrap().name,
        "chrome_142_ios_26"
    );
}

#[test]
fn test_compatibility_matrix() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..1000 {
        let id = pick_realistic_rng(&mut rng);
        let family = id.family().unwrap();
        let allowed: &[BrowserFamily] = match id.os() {
            AgentOs::Android => &[BrowserFamily::Chrome],
            AgentOs::IOS => &[BrowserFamily::Safari, BrowserFamily::Chrome],
            AgentOs::Windows => &[
                BrowserFamily::Edge,
                BrowserFamily::Brave,
                BrowserFamily::Chrome,
                BrowserFamily::Firefox,
            ],
            AgentOs::MacOS => &[
                BrowserFamily::Safari,
                BrowserFamily::Brave,
                BrowserFamily::Chrome,
                BrowserFamily::Firefox,
            ],
            AgentOs::Linux => panic!("linux is never sampled"),
        };
        assert!(allowed.contains(&family), "{family} on {}", id.os());
        assert!(impersonate(&id).is_ok(), "{family} on {}", id.os());
    }
}

#[test]
fn test_realistic_family_lists() {
    assert_eq!(realistic_families(AgentOs::Android), &[BrowserFamily::Chrome]);
    assert_eq!(
        realistic_families(AgentOs::IOS),
        &[BrowserFamily::Safari, BrowserFamily::Chrome]
    );
    assert_eq!(
        realistic_families(AgentOs::Windows),
        &[
            BrowserFamily::Edge,
            BrowserFamily::Brave,
            BrowserFamily::Chrome,
            BrowserFamily::Firefox,
        ]
    );
    assert_eq!(
        realistic_families(AgentOs::MacOS),
        &[
            BrowserFamily::Safari,
            BrowserFamily::Brave,
            BrowserFamily::Chrome,
            BrowserFamily::Firefox,
        ]
    );
}

#[test]
fn test_mobile_flag_coherence() {
    for family in [
        BrowserFamily::Chrome,
        BrowserFamily::Edge,
        BrowserFamily::Brave,
        BrowserFamily::Opera,
    ] {
        for os in [AgentOs::Windows, AgentOs::MacOS, AgentOs::Linux, AgentOs::Android] {
            let headers = compose(&BrowserIdentity::new(family, os), true).unwrap();
            let expected = if os.is_mobile() { "?1" } else { "?0" };
            assert_eq!(headers.get("sec-ch-ua-mobile"), Some(expected));
        }
    }
}

#[test]
fn test_idempotence() {
    let id = BrowserIdentity::new(BrowserFamily::Opera, AgentOs::Android).with_version(120);

    assert_eq!(compose(&id, true).unwrap(), compose(&id, true).unwrap());
    assert_eq!(impersonate(&id).unwrap(), impersonate(&id).unwrap());
    assert_eq!(
        synthesize_user_agent(BrowserFamily::Opera, AgentOs::Android, 120),
        synthesize_user_agent(BrowserFamily::Opera, AgentOs::Android, 120)
    );
}

#[test]
fn test_unsupported_identities() {
    let err = compose(&BrowserIdentity::new(BrowserFamily::Safari, AgentOs::Windows), true).unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedIdentity {
            family: Some(BrowserFamily::Safari),
            os: AgentOs::Windows,
        }
    );

    // A random pick defers the family, so it cannot be composed as is.
    let deferred = pick_random();
    assert!(impersonate(&deferred).unwrap_err().is_unsupported());
    assert!(impersonate(&deferred.with_family(BrowserFamily::Chrome)).is_ok());
}

#[test]
fn test_selector_reuses_its_generator() {
    let mut selector = IdentitySelector::new(StdRng::seed_from_u64(9));
    let first: Vec<_> = (0..10).map(|_| selector.pick_realistic()).collect();

    let mut replay = IdentitySelector::new(StdRng::seed_from_u64(9));
    let second: Vec<_> = (0..10).map(|_| replay.pick_realistic()).collect();

    assert_eq!(first, second);
    let _rng: StdRng = selector.into_inner();
}

#[test]
fn test_impersonation_bundle() {
    let id = BrowserIdentity::new(BrowserFamily::Safari, AgentOs::MacOS).with_version(18);
    let imp = impersonate(&id).unwrap();

    assert_eq!(imp.fingerprint.name, "safari_26_macos");
    assert!(imp.user_agent.contains("Version/18.0.1"));
    assert_eq!(imp.headers.user_agent(), Some(imp.user_agent.as_str()));
    assert!(imp.verify().is_ok());
}
