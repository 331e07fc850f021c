//! The fixed set of mock ECUs handed to test and demo harnesses.
//!
//! Order and values are part of the contract: harnesses compare the JSON
//! byte for byte across calls and across processes.

use em_protocol::EcuDescriptor;

/// Number of mock ECUs in the catalog.
pub const MOCK_ECU_COUNT: usize = 3;

/// The catalog as compact JSON. Must equal the serde output of
/// [`mock_ecus`]; the tests below hold the two together.
pub const MOCK_ECUS_JSON: &str = concat!(
    "[",
    r#"{"name":"Engine Control Module","txId":2016,"rxId":2024,"bootloaderVersion":"1.2.0","serialNumber":"ECU-ENG-0001","appVersion":"2.5.3","appBuildDate":"2025-11-01","hardwareType":"ENG-V1","productionCode":"P-ENG-2025"},"#,
    r#"{"name":"Transmission Control","txId":2017,"rxId":2025,"bootloaderVersion":"3.0.1","serialNumber":"ECU-TRN-0042","appVersion":"1.8.0","appBuildDate":"2025-10-20","hardwareType":"TRN-X","productionCode":"P-TRN-2024"},"#,
    r#"{"name":"Random Module","txId":2018,"rxId":2026,"bootloaderVersion":"0.9.7","serialNumber":"ECU-ABS-0020","appVersion":"4.0.1","appBuildDate":"2025-09-15","hardwareType":"ABS-PRO","productionCode":"P-ABS-2023"}"#,
    "]"
);

/// The mock ECUs, in catalog order.
pub fn mock_ecus() -> Vec<EcuDescriptor> {
    vec![
        EcuDescriptor {
            name: "Engine Control Module".into(),
            tx_id: 2016,
            rx_id: 2024,
            bootloader_version: "1.2.0".into(),
            serial_number: "ECU-ENG-0001".into(),
            app_version: "2.5.3".into(),
            app_build_date: "2025-11-01".into(),
            hardware_type: "ENG-V1".into(),
            production_code: "P-ENG-2025".into(),
        },
        EcuDescriptor {
            name: "Transmission Control".into(),
            tx_id: 2017,
            rx_id: 2025,
            bootloader_version: "3.0.1".into(),
            serial_number: "ECU-TRN-0042".into(),
            app_version: "1.8.0".into(),
            app_build_date: "2025-10-20".into(),
            hardware_type: "TRN-X".into(),
            production_code: "P-TRN-2024".into(),
        },
        EcuDescriptor {
            name: "Random Module".into(),
            tx_id: 2018,
            rx_id: 2026,
            bootloader_version: "0.9.7".into(),
            serial_number: "ECU-ABS-0020".into(),
            app_version: "4.0.1".into(),
            app_build_date: "2025-09-15".into(),
            hardware_type: "ABS-PRO".into(),
            production_code: "P-ABS-2023".into(),
        },
    ]
}

/// The mock ECUs as a compact JSON array. Allocates nothing.
pub fn mock_ecus_json() -> &'static str {
    MOCK_ECUS_JSON
}
