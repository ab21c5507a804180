//! HTTP/2 connection preface shapes (SETTINGS, WINDOW_UPDATE, HEADERS priority, pseudo-header order).

/// HTTP/2 SETTINGS parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u16)]
pub enum Http2Setting {
    HeaderTableSize = 0x01,
    EnablePush = 0x02,
    MaxConcurrentStreams = 0x03,
    InitialWindowSize = 0x04,
    MaxFrameSize = 0x05,
    MaxHeaderListSize = 0x06,
    EnableConnectProtocol = 0x08,
    NoRfc7540Priorities = 0x09,
}

impl Http2Setting {
    /// The wire identifier.
    pub fn id(&self) -> u16 {
        *self as u16
    }
}

/// HTTP/2 pseudo-header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PseudoHeader {
    Method,
    Scheme,
    Authority,
    Path,
}

impl PseudoHeader {
    /// The field name, e.g. `:method`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PseudoHeader::Method => ":method",
            PseudoHeader::Scheme => ":scheme",
            PseudoHeader::Authority => ":authority",
            PseudoHeader::Path => ":path",
        }
    }

    /// The single letter used by the Akamai fingerprint.
    pub fn code(&self) -> char {
        match self {
            PseudoHeader::Method => 'm',
            PseudoHeader::Scheme => 's',
            PseudoHeader::Authority => 'a',
            PseudoHeader::Path => 'p',
        }
    }
}

/// Priority attached to the first HEADERS frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriorityParam {
    /// Stream the request depends on.
    pub stream_dependency: u32,
    /// Exclusive dependency flag.
    pub exclusive: bool,
    /// Wire weight (one less than the effective weight).
    pub weight: u8,
}

/// HTTP/2 fingerprint of one captured browser build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Http2FingerprintProfile {
    /// Every setting the client sends with its value.
    pub settings: &'static [(Http2Setting, u32)],
    /// Explicit transmission order. Settings missing here are sent afterwards in declared order.
    pub settings_order: &'static [Http2Setting],
    /// Pseudo-header order on every request.
    pub pseudo_header_order: [PseudoHeader; 4],
    /// Initial per-stream window.
    pub initial_stream_window: u32,
    /// Connection-level WINDOW_UPDATE increment sent after the preface.
    pub connection_flow_window: u32,
    /// HEADERS frame priority.
    pub priority: PriorityParam,
}

impl Http2FingerprintProfile {
    /// Value of a setting, if sent.
    pub fn setting(&self, setting: Http2Setting) -> Option<u32> {
        self.settings
            .iter()
            .find(|(s, _)| *s == setting)
            .map(|(_, v)| *v)
    }

    /// Settings in transmission order.
    pub fn ordered_settings(&self) -> Vec<(Http2Setting, u32)> {
        let mut ordered = Vec::with_capacity(self.settings.len());

        for setting in self.settings_order {
            if let Some(value) = self.setting(*setting) {
                ordered.push((*setting, value));
            }
        }

        for (setting, value) in self.settings {
            if !self.settings_order.contains(setting) {
                ordered.push((*setting, *value));
            }
        }

        ordered
    }

    /// Pseudo-header names in order.
    pub fn pseudo_header_names(&self) -> [&'static str; 4] {
        self.pseudo_header_order.map(|p| p.as_str())
    }

    /// The Akamai HTTP/2 fingerprint `SETTINGS|WINDOW_UPDATE|PRIORITY|PSEUDO_HEADER_ORDER`.
    /// No standalone PRIORITY frames are sent, so that section is always `0`.
    pub fn akamai_fingerprint(&self) -> String {
        let settings = self
            .ordered_settings()
            .iter()
            .map(|(s, v)| format!("{}:{}", s.id(), v))
            .collect::<Vec<_>>()
            .join(";");
        let pseudo = self
            .pseudo_header_order
            .iter()
            .map(|p| p.code().to_string())
            .collect::<Vec<_>>()
            .join(",");

        format!("{}|{}|0|{}", settings, self.connection_flow_window, pseudo)
    }
}
