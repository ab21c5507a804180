//! Chromium captures: Chrome 141 desktop (shared by Edge, Brave and Opera) and Chrome 142 on iOS 26.
use super::http2::{Http2FingerprintProfile, Http2Setting, PriorityParam, PseudoHeader};
use super::safari::WEBKIT_TLS;
use super::tls::{
    cipher::*, curve, sigalg, version, CertCompression, KeyShare, TlsExtension,
    TlsFingerprintProfile, COMPRESSION_NONE, GREASE_PLACEHOLDER, POINT_FORMAT_UNCOMPRESSED,
    PSK_MODE_DHE,
};
use super::FingerprintProfile;

pub const CIPHER_SUITES: &[u16] = &[
    GREASE_PLACEHOLDER,
    TLS_AES_128_GCM_SHA256,
    TLS_AES_256_GCM_SHA384,
    TLS_CHACHA20_POLY1305_SHA256,
    TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
    TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
    TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
    TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
    TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
    TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
    TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA,
    TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA,
    TLS_RSA_WITH_AES_128_GCM_SHA256,
    TLS_RSA_WITH_AES_256_GCM_SHA384,
    TLS_RSA_WITH_AES_128_CBC_SHA,
    TLS_RSA_WITH_AES_256_CBC_SHA,
];

pub const CURVES: &[u16] = &[
    GREASE_PLACEHOLDER,
    curve::X25519_MLKEM768,
    curve::X25519,
    curve::SECP256R1,
    curve::SECP384R1,
];

pub const SIGNATURE_ALGORITHMS: &[u16] = &[
    sigalg::ECDSA_SECP256R1_SHA256,
    sigalg::RSA_PSS_RSAE_SHA256,
    sigalg::RSA_PKCS1_SHA256,
    sigalg::ECDSA_SECP384R1_SHA384,
    sigalg::RSA_PSS_RSAE_SHA384,
    sigalg::RSA_PKCS1_SHA384,
    sigalg::RSA_PSS_RSAE_SHA512,
    sigalg::RSA_PKCS1_SHA512,
];

pub const SUPPORTED_VERSIONS: &[u16] = &[GREASE_PLACEHOLDER, version::TLS_1_3, version::TLS_1_2];

pub const KEY_SHARES: &[KeyShare] = &[
    KeyShare {
        group: GREASE_PLACEHOLDER,
        data: Some(&[0]),
    },
    KeyShare {
        group: curve::X25519_MLKEM768,
        data: None,
    },
    KeyShare {
        group: curve::X25519,
        data: None,
    },
];

pub const ALPN: &[&str] = &["h2", "http/1.1"];

pub const EXTENSIONS: &[TlsExtension] = &[
    TlsExtension::Grease,
    TlsExtension::SignedCertificateTimestamp,
    TlsExtension::SessionTicket,
    TlsExtension::EncryptedClientHelloGrease,
    TlsExtension::ServerName,
    TlsExtension::RenegotiationInfo,
    TlsExtension::SupportedCurves(CURVES),
    TlsExtension::CertCompression(&[CertCompression::Brotli]),
    TlsExtension::SupportedPoints(&[POINT_FORMAT_UNCOMPRESSED]),
    TlsExtension::SupportedVersions(SUPPORTED_VERSIONS),
    TlsExtension::ExtendedMasterSecret,
    TlsExtension::StatusRequest,
    TlsExtension::Alpn(ALPN),
    TlsExtension::PskKeyExchangeModes(&[PSK_MODE_DHE]),
    TlsExtension::SignatureAlgorithms(SIGNATURE_ALGORITHMS),
    TlsExtension::KeyShare(KEY_SHARES),
    TlsExtension::Grease,
    TlsExtension::PreSharedKey,
];

/// Chrome 141 desktop.
pub static CHROME_141: FingerprintProfile = FingerprintProfile {
    name: "chrome_141",
    tls: TlsFingerprintProfile {
        cipher_suites: CIPHER_SUITES,
        compression_methods: &[COMPRESSION_NONE],
        extensions: EXTENSIONS,
        supported_versions: SUPPORTED_VERSIONS,
        randomize_extension_order: true,
    },
    http2: Http2FingerprintProfile {
        settings: &[
            (Http2Setting::HeaderTableSize, 65536),
            (Http2Setting::EnablePush, 0),
            (Http2Setting::InitialWindowSize, 6291456),
            (Http2Setting::MaxHeaderListSize, 262144),
        ],
        settings_order: &[
            Http2Setting::HeaderTableSize,
            Http2Setting::EnablePush,
            Http2Setting::InitialWindowSize,
            Http2Setting::MaxHeaderListSize,
        ],
        pseudo_header_order: [
            PseudoHeader::Method,
            PseudoHeader::Authority,
            PseudoHeader::Scheme,
            PseudoHeader::Path,
        ],
        initial_stream_window: 6291456,
        connection_flow_window: 15663105,
        priority: PriorityParam {
            stream_dependency: 0,
            exclusive: true,
            weight: 255,
        },
    },
};

/// Chrome 142 on iOS 26. The hello comes from the system WebKit stack.
pub static CHROME_142_IOS: FingerprintProfile = FingerprintProfile {
    name: "chrome_142_ios_26",
    tls: WEBKIT_TLS,
    http2: Http2FingerprintProfile {
        settings: &[
            (Http2Setting::EnablePush, 0),
            (Http2Setting::InitialWindowSize, 2097152),
            (Http2Setting::MaxConcurrentStreams, 100),
            (Http2Setting::NoRfc7540Priorities, 1),
        ],
        settings_order: &[
            Http2Setting::EnablePush,
            Http2Setting::InitialWindowSize,
            Http2Setting::MaxConcurrentStreams,
        ],
        pseudo_header_order: [
            PseudoHeader::Method,
            PseudoHeader::Scheme,
            PseudoHeader::Path,
            PseudoHeader::Authority,
        ],
        initial_stream_window: 2097152,
        connection_flow_window: 10485760,
        priority: PriorityParam {
            stream_dependency: 0,
            exclusive: false,
            weight: 0,
        },
    },
};
