//! Reporting of skipped packet filter components

use ogs_gtp::v2::TftPacketFilter;

use crate::error::TftError;

/// Receives components dropped from a translation.
///
/// Reports are informational. They never change the translation result.
pub trait SkipReporter {
    fn component_skipped(&self, packet_filter: &TftPacketFilter, error: &TftError);
}

/// Reports skipped components through the `log` facade
#[derive(Debug, Clone, Copy)]
pub struct LogReporter {
    level: log::Level,
}

impl LogReporter {
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> log::Level {
        self.level
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        Self::new(log::Level::Info)
    }
}

impl SkipReporter for LogReporter {
    fn component_skipped(&self, packet_filter: &TftPacketFilter, error: &TftError) {
        log::log!(
            self.level,
            "Couldn't parse Packet Filter Component: {} [pf_id:{} precedence:{}]",
            error,
            packet_filter.identifier,
            packet_filter.evaluation_precedence
        );
    }
}

impl<R: SkipReporter + ?Sized> SkipReporter for &R {
    fn component_skipped(&self, packet_filter: &TftPacketFilter, error: &TftError) {
        (**self).component_skipped(packet_filter, error)
    }
}
