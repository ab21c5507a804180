/// TLS ClientHello building blocks.
pub mod tls;
/// HTTP/2 preface building blocks.
pub mod http2;
/// Chromium captures.
pub mod chrome;
/// Gecko captures.
pub mod firefox;
/// WebKit captures.
pub mod safari;

use http2::Http2FingerprintProfile;
use tls::TlsFingerprintProfile;

/// The transport fingerprint of one captured browser build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FingerprintProfile {
    /// Capture name, e.g. `chrome_141`.
    pub name: &'static str,
    /// The ClientHello shape.
    pub tls: TlsFingerprintProfile,
    /// The HTTP/2 preface shape.
    pub http2: Http2FingerprintProfile,
}

impl FingerprintProfile {
    /// The JA3 string of the ClientHello.
    pub fn ja3(&self) -> String {
        self.tls.ja3_string()
    }

    /// The Akamai fingerprint of the HTTP/2 preface.
    pub fn akamai(&self) -> String {
        self.http2.akamai_fingerprint()
    }
}

#[cfg(test)]
mod tests {
    use super::chrome::{CHROME_141, CHROME_142_IOS};
    use super::firefox::FIREFOX_135;
    use super::http2::{Http2Setting, PseudoHeader};
    use super::safari::{SAFARI_26_IOS, SAFARI_26_MACOS};
    use super::tls::{TlsExtension, GREASE_PLACEHOLDER};
    use super::FingerprintProfile;

    fn all() -> [&'static FingerprintProfile; 5] {
        [
            &CHROME_141,
            &CHROME_142_IOS,
            &SAFARI_26_IOS,
            &SAFARI_26_MACOS,
            &FIREFOX_135,
        ]
    }

    #[test]
    fn chrome_desktop_capture() {
        assert_eq!(
            CHROME_141.ja3(),
            "771,4865-4866-4867-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53,\
             18-35-65037-0-65281-10-27-11-43-23-5-16-45-13-51-41,4588-29-23-24,0"
        );
        assert_eq!(
            CHROME_141.akamai(),
            "1:65536;2:0;4:6291456;6:262144|15663105|0|m,a,s,p"
        );
        assert!(CHROME_141.tls.randomize_extension_order);
    }

    #[test]
    fn chrome_ios_rides_webkit() {
        assert_eq!(CHROME_142_IOS.tls, SAFARI_26_IOS.tls);
        assert_eq!(
            CHROME_142_IOS.akamai(),
            "2:0;4:2097152;3:100;9:1|10485760|0|m,s,p,a"
        );
    }

    #[test]
    fn safari_capture() {
        let ja3 = "771,4866-4867-4865-49196-49195-52393-49200-49199-52392-49162-49161-49172-49171-157-156-53-47-49160-49170-10,\
                   0-23-65281-10-11-16-5-13-18-51-45-43-27,4588-29-23-24-25,0";
        assert_eq!(SAFARI_26_IOS.ja3(), ja3);
        assert_eq!(SAFARI_26_MACOS.ja3(), ja3);
        assert_eq!(
            SAFARI_26_MACOS.akamai(),
            "2:0;3:100;4:2097152;9:1|10420225|0|m,s,a,p"
        );
    }

    #[test]
    fn firefox_capture() {
        assert_eq!(
            FIREFOX_135.ja3(),
            "771,4865-4867-4866-49195-49199-52393-52392-49196-49200-49162-49161-49171-49172-156-157-47-53,\
             0-23-65281-10-11-35-16-5-34-18-51-43-13-45-28-27-65037,4588-29-23-24-25-256-257,0"
        );
        assert_eq!(
            FIREFOX_135.akamai(),
            "1:65536;2:0;4:131072;5:16384|12517377|0|m,p,a,s"
        );
        assert!(!FIREFOX_135.tls.uses_grease());
    }

    #[test]
    fn grease_positions() {
        for profile in [&CHROME_141, &SAFARI_26_IOS] {
            let tls = &profile.tls;
            assert_eq!(tls.cipher_suites[0], GREASE_PLACEHOLDER, "{}", profile.name);
            assert_eq!(tls.supported_versions[0], GREASE_PLACEHOLDER);
            assert_eq!(tls.supported_curves()[0], GREASE_PLACEHOLDER);
            assert_eq!(tls.key_shares()[0].group, GREASE_PLACEHOLDER);
            assert_eq!(tls.key_shares()[0].data, Some(&[0u8][..]));
            assert_eq!(tls.extensions.first(), Some(&TlsExtension::Grease));
        }

        // the second GREASE extension sits right before pre_shared_key on Chrome
        let exts = CHROME_141.tls.extensions;
        assert_eq!(exts[exts.len() - 2], TlsExtension::Grease);
        assert_eq!(exts[exts.len() - 1], TlsExtension::PreSharedKey);
        assert_eq!(SAFARI_26_IOS.tls.extensions.last(), Some(&TlsExtension::Grease));
    }

    #[test]
    fn settings_order_is_a_subsequence_of_settings() {
        for profile in all() {
            let h2 = &profile.http2;
            for setting in h2.settings_order {
                assert!(h2.setting(*setting).is_some(), "{}", profile.name);
            }
            assert_eq!(h2.ordered_settings().len(), h2.settings.len());
        }
    }

    #[test]
    fn leftover_settings_trail_the_ordered_ones() {
        let ordered = SAFARI_26_IOS.http2.ordered_settings();
        assert_eq!(ordered.last(), Some(&(Http2Setting::NoRfc7540Priorities, 1)));
        assert_eq!(ordered[0], (Http2Setting::EnablePush, 0));
    }

    #[test]
    fn pseudo_headers_are_permutations() {
        for profile in all() {
            let order = profile.http2.pseudo_header_order;
            for p in [
                PseudoHeader::Method,
                PseudoHeader::Scheme,
                PseudoHeader::Authority,
                PseudoHeader::Path,
            ] {
                assert_eq!(order.iter().filter(|o| **o == p).count(), 1);
            }
        }
        assert_eq!(
            CHROME_141.http2.pseudo_header_names(),
            [":method", ":authority", ":scheme", ":path"]
        );
    }

    #[test]
    fn alpn_everywhere() {
        for profile in all() {
            assert_eq!(profile.tls.alpn_protocols(), &["h2", "http/1.1"]);
        }
    }
}
