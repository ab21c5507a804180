//! Gecko capture: Firefox 135 desktop and Android. No GREASE anywhere.
use super::http2::{Http2FingerprintProfile, Http2Setting, PriorityParam, PseudoHeader};
use super::tls::{
    cipher::*, curve, sigalg, version, CertCompression, KeyShare, TlsExtension,
    TlsFingerprintProfile, COMPRESSION_NONE, POINT_FORMAT_UNCOMPRESSED, PSK_MODE_DHE,
};
use super::FingerprintProfile;

pub const CIPHER_SUITES: &[u16] = &[
    TLS_AES_128_GCM_SHA256,
    TLS_CHACHA20_POLY1305_SHA256,
    TLS_AES_256_GCM_SHA384,
    TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
    TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
    TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
    TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
    TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
    TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
    TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA,
    TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA,
    TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA,
    TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA,
    TLS_RSA_WITH_AES_128_GCM_SHA256,
    TLS_RSA_WITH_AES_256_GCM_SHA384,
    TLS_RSA_WITH_AES_128_CBC_SHA,
    TLS_RSA_WITH_AES_256_CBC_SHA,
];

pub const CURVES: &[u16] = &[
    curve::X25519_MLKEM768,
    curve::X25519,
    curve::SECP256R1,
    curve::SECP384R1,
    curve::SECP521R1,
    curve::FFDHE2048,
    curve::FFDHE3072,
];

pub const SIGNATURE_ALGORITHMS: &[u16] = &[
    sigalg::ECDSA_SECP256R1_SHA256,
    sigalg::ECDSA_SECP384R1_SHA384,
    sigalg::ECDSA_SECP521R1_SHA512,
    sigalg::RSA_PSS_RSAE_SHA256,
    sigalg::RSA_PSS_RSAE_SHA384,
    sigalg::RSA_PSS_RSAE_SHA512,
    sigalg::RSA_PKCS1_SHA256,
    sigalg::RSA_PKCS1_SHA384,
    sigalg::RSA_PKCS1_SHA512,
    sigalg::ECDSA_SHA1,
    sigalg::RSA_PKCS1_SHA1,
];

pub const DELEGATED_CREDENTIALS: &[u16] = &[
    sigalg::ECDSA_SECP256R1_SHA256,
    sigalg::ECDSA_SECP384R1_SHA384,
    sigalg::ECDSA_SECP521R1_SHA512,
    sigalg::ECDSA_SHA1,
];

pub const SUPPORTED_VERSIONS: &[u16] = &[version::TLS_1_3, version::TLS_1_2];

pub const KEY_SHARES: &[KeyShare] = &[
    KeyShare {
        group: curve::X25519_MLKEM768,
        data: None,
    },
    KeyShare {
        group: curve::X25519,
        data: None,
    },
    KeyShare {
        group: curve::SECP256R1,
        data: None,
    },
];

pub const RECORD_SIZE_LIMIT: u16 = 0x4001;

pub const EXTENSIONS: &[TlsExtension] = &[
    TlsExtension::ServerName,
    TlsExtension::ExtendedMasterSecret,
    TlsExtension::RenegotiationInfo,
    TlsExtension::SupportedCurves(CURVES),
    TlsExtension::SupportedPoints(&[POINT_FORMAT_UNCOMPRESSED]),
    TlsExtension::SessionTicket,
    TlsExtension::Alpn(&["h2", "http/1.1"]),
    TlsExtension::StatusRequest,
    TlsExtension::DelegatedCredentials(DELEGATED_CREDENTIALS),
    TlsExtension::SignedCertificateTimestamp,
    TlsExtension::KeyShare(KEY_SHARES),
    TlsExtension::SupportedVersions(SUPPORTED_VERSIONS),
    TlsExtension::SignatureAlgorithms(SIGNATURE_ALGORITHMS),
    TlsExtension::PskKeyExchangeModes(&[PSK_MODE_DHE]),
    TlsExtension::RecordSizeLimit(RECORD_SIZE_LIMIT),
    TlsExtension::CertCompression(&[
        CertCompression::Zlib,
        CertCompression::Brotli,
        CertCompression::Zstd,
    ]),
    TlsExtension::EncryptedClientHelloGrease,
];

/// Firefox 135.
pub static FIREFOX_135: FingerprintProfile = FingerprintProfile {
    name: "firefox_135",
    tls: TlsFingerprintProfile {
        cipher_suites: CIPHER_SUITES,
        compression_methods: &[COMPRESSION_NONE],
        extensions: EXTENSIONS,
        supported_versions: SUPPORTED_VERSIONS,
        randomize_extension_order: false,
    },
    http2: Http2FingerprintProfile {
        settings: &[
            (Http2Setting::HeaderTableSize, 65536),
            (Http2Setting::EnablePush, 0),
            (Http2Setting::InitialWindowSize, 131072),
            (Http2Setting::MaxFrameSize, 16384),
        ],
        settings_order: &[
            Http2Setting::HeaderTableSize,
            Http2Setting::EnablePush,
            Http2Setting::InitialWindowSize,
            Http2Setting::MaxFrameSize,
        ],
        pseudo_header_order: [
            PseudoHeader::Method,
            PseudoHeader::Path,
            PseudoHeader::Authority,
            PseudoHeader::Scheme,
        ],
        initial_stream_window: 131072,
        connection_flow_window: 12517377,
        priority: PriorityParam {
            stream_dependency: 0,
            exclusive: false,
            weight: 41,
        },
    },
};
