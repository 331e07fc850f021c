use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format of `app_build_date`.
pub const BUILD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Static description of an ECU as exposed to test/demo harnesses.
///
/// Field order is the serialization order. Consumers compare the emitted
/// JSON byte for byte, so do not reorder fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcuDescriptor {
    /// Display name (e.g., "Engine Control Module").
    pub name: String,
    /// CAN ID the tester transmits requests on.
    pub tx_id: u32,
    /// CAN ID the ECU answers on.
    pub rx_id: u32,
    pub bootloader_version: String,
    pub serial_number: String,
    pub app_version: String,
    /// Application build date, `YYYY-MM-DD`.
    pub app_build_date: String,
    pub hardware_type: String,
    pub production_code: String,
}

impl EcuDescriptor {
    /// Parsed application build date, `None` if the text is malformed.
    pub fn build_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.app_build_date, BUILD_DATE_FORMAT).ok()
    }
}
