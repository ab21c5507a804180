//! TLS ClientHello shapes (JA3/JA4 material).

/// The GREASE sentinel (RFC 8701). Runtimes replace it with a random reserved value
/// at the same position when the ClientHello is built.
pub const GREASE_PLACEHOLDER: u16 = 0x0a0a;

/// Is the value one of the sixteen reserved GREASE values (`0x?a?a` with equal bytes)?
pub fn is_grease(value: u16) -> bool {
    value & 0x0f0f == 0x0a0a && value >> 8 == value & 0xff
}

/// Cipher suite identifiers.
pub mod cipher {
    pub const TLS_AES_128_GCM_SHA256: u16 = 0x1301;
    pub const TLS_AES_256_GCM_SHA384: u16 = 0x1302;
    pub const TLS_CHACHA20_POLY1305_SHA256: u16 = 0x1303;
    pub const TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256: u16 = 0xc02b;
    pub const TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256: u16 = 0xc02f;
    pub const TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384: u16 = 0xc02c;
    pub const TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384: u16 = 0xc030;
    pub const TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256: u16 = 0xcca9;
    pub const TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256: u16 = 0xcca8;
    pub const TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA: u16 = 0xc009;
    pub const TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA: u16 = 0xc00a;
    pub const TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA: u16 = 0xc013;
    pub const TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA: u16 = 0xc014;
    pub const TLS_RSA_WITH_AES_128_GCM_SHA256: u16 = 0x009c;
    pub const TLS_RSA_WITH_AES_256_GCM_SHA384: u16 = 0x009d;
    pub const TLS_RSA_WITH_AES_128_CBC_SHA: u16 = 0x002f;
    pub const TLS_RSA_WITH_AES_256_CBC_SHA: u16 = 0x0035;
    pub const TLS_ECDHE_ECDSA_WITH_3DES_EDE_CBC_SHA: u16 = 0xc008;
    pub const TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA: u16 = 0xc012;
    pub const TLS_RSA_WITH_3DES_EDE_CBC_SHA: u16 = 0x000a;
}

/// Named groups.
pub mod curve {
    pub const X25519_MLKEM768: u16 = 0x11ec;
    pub const X25519: u16 = 0x001d;
    pub const SECP256R1: u16 = 0x0017;
    pub const SECP384R1: u16 = 0x0018;
    pub const SECP521R1: u16 = 0x0019;
    pub const FFDHE2048: u16 = 0x0100;
    pub const FFDHE3072: u16 = 0x0101;
}

/// Signature schemes.
pub mod sigalg {
    pub const ECDSA_SECP256R1_SHA256: u16 = 0x0403;
    pub const ECDSA_SECP384R1_SHA384: u16 = 0x0503;
    pub const ECDSA_SECP521R1_SHA512: u16 = 0x0603;
    pub const ECDSA_SHA1: u16 = 0x0203;
    pub const RSA_PSS_RSAE_SHA256: u16 = 0x0804;
    pub const RSA_PSS_RSAE_SHA384: u16 = 0x0805;
    pub const RSA_PSS_RSAE_SHA512: u16 = 0x0806;
    pub const RSA_PKCS1_SHA256: u16 = 0x0401;
    pub const RSA_PKCS1_SHA384: u16 = 0x0501;
    pub const RSA_PKCS1_SHA512: u16 = 0x0601;
    pub const RSA_PKCS1_SHA1: u16 = 0x0201;
}

/// Protocol versions.
pub mod version {
    pub const TLS_1_2: u16 = 0x0303;
    pub const TLS_1_3: u16 = 0x0304;
}

/// The legacy ClientHello version JA3 reports.
pub const LEGACY_VERSION: u16 = version::TLS_1_2;

/// Null compression, the only method modern browsers offer.
pub const COMPRESSION_NONE: u8 = 0x00;
/// PSK with (EC)DHE key establishment.
pub const PSK_MODE_DHE: u8 = 0x01;
/// Uncompressed EC points.
pub const POINT_FORMAT_UNCOMPRESSED: u8 = 0x00;

/// Certificate compression algorithm (RFC 8879).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u16)]
pub enum CertCompression {
    Zlib = 1,
    Brotli = 2,
    Zstd = 3,
}

/// A key share entry. GREASE shares carry a one byte payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KeyShare {
    /// The named group.
    pub group: u16,
    /// Fixed key material, `None` for a freshly generated share.
    pub data: Option<&'static [u8]>,
}

/// A ClientHello extension in wire position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TlsExtension {
    /// Empty GREASE extension.
    Grease,
    ServerName,
    StatusRequest,
    SupportedCurves(&'static [u16]),
    SupportedPoints(&'static [u8]),
    SignatureAlgorithms(&'static [u16]),
    Alpn(&'static [&'static str]),
    SignedCertificateTimestamp,
    ExtendedMasterSecret,
    CertCompression(&'static [CertCompression]),
    RecordSizeLimit(u16),
    DelegatedCredentials(&'static [u16]),
    SessionTicket,
    PreSharedKey,
    SupportedVersions(&'static [u16]),
    PskKeyExchangeModes(&'static [u8]),
    KeyShare(&'static [KeyShare]),
    /// GREASE Encrypted Client Hello.
    EncryptedClientHelloGrease,
    RenegotiationInfo,
}

impl TlsExtension {
    /// The IANA extension type.
    pub fn id(&self) -> u16 {
        match self {
            TlsExtension::Grease => GREASE_PLACEHOLDER,
            TlsExtension::ServerName => 0,
            TlsExtension::StatusRequest => 5,
            TlsExtension::SupportedCurves(_) => 10,
            TlsExtension::SupportedPoints(_) => 11,
            TlsExtension::SignatureAlgorithms(_) => 13,
            TlsExtension::Alpn(_) => 16,
            TlsExtension::SignedCertificateTimestamp => 18,
            TlsExtension::ExtendedMasterSecret => 23,
            TlsExtension::CertCompression(_) => 27,
            TlsExtension::RecordSizeLimit(_) => 28,
            TlsExtension::DelegatedCredentials(_) => 34,
            TlsExtension::SessionTicket => 35,
            TlsExtension::PreSharedKey => 41,
            TlsExtension::SupportedVersions(_) => 43,
            TlsExtension::PskKeyExchangeModes(_) => 45,
            TlsExtension::KeyShare(_) => 51,
            TlsExtension::EncryptedClientHelloGrease => 0xfe0d,
            TlsExtension::RenegotiationInfo => 0xff01,
        }
    }
}

/// TLS fingerprint of one captured browser build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TlsFingerprintProfile {
    /// Cipher suites in order, GREASE included.
    pub cipher_suites: &'static [u16],
    /// Compression methods in order.
    pub compression_methods: &'static [u8],
    /// Extensions in wire order.
    pub extensions: &'static [TlsExtension],
    /// Contents of the supported_versions extension.
    pub supported_versions: &'static [u16],
    /// The browser shuffles extensions per connection (Chrome 110+). GREASE and
    /// pre_shared_key keep their positions.
    pub randomize_extension_order: bool,
}

impl TlsFingerprintProfile {
    /// Extension type ids in order, GREASE included.
    pub fn extension_ids(&self) -> Vec<u16> {
        self.extensions.iter().map(TlsExtension::id).collect()
    }

    /// Any GREASE value anywhere in the hello.
    pub fn uses_grease(&self) -> bool {
        self.cipher_suites.iter().any(|c| is_grease(*c))
            || self.extensions.contains(&TlsExtension::Grease)
    }

    /// Groups from the supported_groups extension.
    pub fn supported_curves(&self) -> &'static [u16] {
        self.extensions
            .iter()
            .find_map(|e| match e {
                TlsExtension::SupportedCurves(curves) => Some(*curves),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Formats from the ec_point_formats extension.
    pub fn point_formats(&self) -> &'static [u8] {
        self.extensions
            .iter()
            .find_map(|e| match e {
                TlsExtension::SupportedPoints(points) => Some(*points),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Shares from the key_share extension.
    pub fn key_shares(&self) -> &'static [KeyShare] {
        self.extensions
            .iter()
            .find_map(|e| match e {
                TlsExtension::KeyShare(shares) => Some(*shares),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// ALPN protocols offered.
    pub fn alpn_protocols(&self) -> &'static [&'static str] {
        self.extensions
            .iter()
            .find_map(|e| match e {
                TlsExtension::Alpn(protocols) => Some(*protocols),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// The JA3 string in declared order with GREASE values removed.
    pub fn ja3_string(&self) -> String {
        fn join<T: Copy + Into<u16>>(values: &[T]) -> String {
            values
                .iter()
                .map(|v| (*v).into())
                .filter(|v| !is_grease(*v))
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("-")
        }

        format!(
            "{},{},{},{},{}",
            LEGACY_VERSION,
            join(self.cipher_suites),
            join(self.extension_ids().as_slice()),
            join(self.supported_curves()),
            join(self.point_formats()),
        )
    }
}
