//! WebKit captures: Safari 26 on iOS and macOS. Chrome on iOS shares the hello.
use super::http2::{Http2FingerprintProfile, Http2Setting, PriorityParam, PseudoHeader};
use super::tls::{
    cipher::*, curve, sigalg, version, CertCompression, KeyShare, TlsExtension,
    TlsFingerprintProfile, COMPRESSION_NONE, GREASE_PLACEHOLDER, POINT_FORMAT_UNCOMPRESSED,
    PSK_MODE_DHE,
};
use super::FingerprintProfile;

pub const CIPHER_SUITES: &[u16] = &[
    GREASE_PLACEHOLDER,
    TLS_AES_256_GCM_SHA384,
    TLS_CHACHA20_POLY1305_SHA256,
    TLS_AES_128_GCM_SHA256,
    TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
    TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
    TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
    TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
    TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
    TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
    TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA,
    TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA,
    TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA,
    TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA,
    TLS_RSA_WITH_AES_256_GCM_SHA384,
    TLS_RSA_WITH_AES_128_GCM_SHA256,
    TLS_RSA_WITH_AES_256_CBC_SHA,
    TLS_RSA_WITH_AES_128_CBC_SHA,
    TLS_ECDHE_ECDSA_WITH_3DES_EDE_CBC_SHA,
    TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA,
    TLS_RSA_WITH_3DES_EDE_CBC_SHA,
];

pub const CURVES: &[u16] = &[
    GREASE_PLACEHOLDER,
    curve::X25519_MLKEM768,
    curve::X25519,
    curve::SECP256R1,
    curve::SECP384R1,
    curve::SECP521R1,
];

// rsa_pss_rsae_sha384 really is sent twice.
pub const SIGNATURE_ALGORITHMS: &[u16] = &[
    sigalg::ECDSA_SECP256R1_SHA256,
    sigalg::RSA_PSS_RSAE_SHA256,
    sigalg::RSA_PKCS1_SHA256,
    sigalg::ECDSA_SECP384R1_SHA384,
    sigalg::RSA_PSS_RSAE_SHA384,
    sigalg::RSA_PSS_RSAE_SHA384,
    sigalg::RSA_PKCS1_SHA384,
    sigalg::RSA_PSS_RSAE_SHA512,
    sigalg::RSA_PKCS1_SHA512,
    sigalg::RSA_PKCS1_SHA1,
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

pub const EXTENSIONS: &[TlsExtension] = &[
    TlsExtension::Grease,
    TlsExtension::ServerName,
    TlsExtension::ExtendedMasterSecret,
    TlsExtension::RenegotiationInfo,
    TlsExtension::SupportedCurves(CURVES),
    TlsExtension::SupportedPoints(&[POINT_FORMAT_UNCOMPRESSED]),
    TlsExtension::Alpn(&["h2", "http/1.1"]),
    TlsExtension::StatusRequest,
    TlsExtension::SignatureAlgorithms(SIGNATURE_ALGORITHMS),
    TlsExtension::SignedCertificateTimestamp,
    TlsExtension::KeyShare(KEY_SHARES),
    TlsExtension::PskKeyExchangeModes(&[PSK_MODE_DHE]),
    TlsExtension::SupportedVersions(SUPPORTED_VERSIONS),
    TlsExtension::CertCompression(&[CertCompression::Zlib]),
    TlsExtension::Grease,
];

/// The WebKit ClientHello, identical for Safari and Chrome on iOS.
pub const WEBKIT_TLS: TlsFingerprintProfile = TlsFingerprintProfile {
    cipher_suites: CIPHER_SUITES,
    compression_methods: &[COMPRESSION_NONE],
    extensions: EXTENSIONS,
    supported_versions: SUPPORTED_VERSIONS,
    randomize_extension_order: false,
};

const SAFARI_HTTP2: Http2FingerprintProfile = Http2FingerprintProfile {
    settings: &[
        (Http2Setting::EnablePush, 0),
        (Http2Setting::MaxConcurrentStreams, 100),
        (Http2Setting::InitialWindowSize, 2097152),
        (Http2Setting::NoRfc7540Priorities, 1),
    ],
    settings_order: &[
        Http2Setting::EnablePush,
        Http2Setting::MaxConcurrentStreams,
        Http2Setting::InitialWindowSize,
    ],
    pseudo_header_order: [
        PseudoHeader::Method,
        PseudoHeader::Scheme,
        PseudoHeader::Authority,
        PseudoHeader::Path,
    ],
    initial_stream_window: 2097152,
    connection_flow_window: 10420225,
    priority: PriorityParam {
        stream_dependency: 0,
        exclusive: false,
        weight: 0,
    },
};

/// Safari 26 on iOS 26.
pub static SAFARI_26_IOS: FingerprintProfile = FingerprintProfile {
    name: "safari_26_ios",
    tls: WEBKIT_TLS,
    http2: SAFARI_HTTP2,
};

/// Safari 26 on macOS.
pub static SAFARI_26_MACOS: FingerprintProfile = FingerprintProfile {
    name: "safari_26_macos",
    tls: WEBKIT_TLS,
    http2: SAFARI_HTTP2,
};
