//! Bearer TFT translation
//!
//! Flattens the packet filters of a decoded Bearer TFT into one output packet
//! filter per component and routes the result by operation code.

use ogs_gtp::v2::{BearerTft, Gtp2Ie, TftOperationCode};

use crate::component::translate_component;
use crate::config::TftConfig;
use crate::error::{TftError, TftResult};
use crate::model::{PacketFilter, PacketFilterList, TrafficFlowTemplate};
use crate::report::{LogReporter, SkipReporter};

/// Bearer TFT translator
#[derive(Debug, Clone, Default)]
pub struct TftTranslator<R = LogReporter> {
    reporter: R,
}

impl TftTranslator<LogReporter> {
    pub fn from_config(config: &TftConfig) -> Self {
        Self::new(LogReporter::new(config.skip_report_level))
    }
}

impl<R: SkipReporter> TftTranslator<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// One output packet filter per decodable component, in input order.
    ///
    /// Components that fail to decode are reported and left out.
    pub fn packet_filters(&self, tft: &BearerTft) -> Vec<PacketFilter> {
        let mut packet_filters = Vec::new();
        for pf in &tft.packet_filters {
            for component in &pf.components {
                let contents = match translate_component(component) {
                    Ok(contents) => contents,
                    Err(e) => {
                        self.reporter.component_skipped(pf, &e);
                        continue;
                    }
                };
                packet_filters.push(PacketFilter {
                    spare: 0,
                    direction: pf.direction as u32,
                    identifier: pf.identifier as u32,
                    eval_precedence: pf.evaluation_precedence as u32,
                    length: pf.length as u32,
                    packet_filter_contents: contents,
                });
            }
        }
        packet_filters
    }

    /// Translate a decoded Bearer TFT into a packet filter list.
    ///
    /// Components are translated, and skips reported, before routing.
    /// Deleting the existing TFT is not supported. Operation codes that carry
    /// no packet filters give an empty list.
    pub fn translate(&self, tft: &BearerTft) -> TftResult<PacketFilterList> {
        let packet_filters = self.packet_filters(tft);

        let mut list = PacketFilterList::default();
        match tft.operation_code {
            TftOperationCode::CreateNewTft => list.create_new_tft = packet_filters,
            TftOperationCode::AddPacketFiltersToExistingTft => {
                list.add_packet_filter = packet_filters
            }
            TftOperationCode::ReplacePacketFiltersInExistingTft => {
                list.replace_packet_filter = packet_filters
            }
            TftOperationCode::DeleteExistingTft => {
                return Err(TftError::UnsupportedOperation(tft.operation_code))
            }
            op => log::debug!("TFT operation {op:?} carries no packet filter list"),
        }

        Ok(list)
    }

    /// Extract the Bearer TFT from its IE and translate it
    pub fn handle_tft(&self, ie: &Gtp2Ie) -> TftResult<TrafficFlowTemplate> {
        let tft = ie.bearer_tft().map_err(TftError::Extraction)?;
        let packet_filter_list = self.translate(&tft)?;

        Ok(TrafficFlowTemplate {
            packet_filter_list,
            tft_operation_code: tft.operation_code as u32,
        })
    }
}

/// Translate a decoded Bearer TFT, logging skipped components at info level
pub fn translate_tft(tft: &BearerTft) -> TftResult<PacketFilterList> {
    TftTranslator::<LogReporter>::default().translate(tft)
}

/// Extract and translate a Bearer TFT IE, logging skipped components at info level
pub fn handle_tft(ie: &Gtp2Ie) -> TftResult<TrafficFlowTemplate> {
    TftTranslator::<LogReporter>::default().handle_tft(ie)
}
