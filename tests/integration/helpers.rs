use rx_integrity::domain::PrescriptionRecord;
use rx_integrity::handlers::AppContext;
use rx_integrity::infrastructure::config::{LedgerConfig, ModuleConfig};

pub const DOCTOR: &str = "0xd0c7";

/// Ledger config pointing at `node_url`.
pub fn test_config(node_url: &str) -> LedgerConfig {
    LedgerConfig {
        node_url: node_url.to_string(),
        module: ModuleConfig::new("0xcafe", "aptos_rx_prescription"),
        network: "testnet".to_string(),
    }
}

pub fn context_for(node_url: &str) -> AppContext {
    AppContext::from_config(&test_config(node_url))
}

/// URL of a local port with nothing listening on it.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/v1", port)
}

pub fn amoxicillin() -> PrescriptionRecord {
    PrescriptionRecord::new("P1", "Amoxicillin", "500mg", Some(""), "RX-1")
}

/// Action line as the binary reads it from stdin.
pub fn verify_line(issuer: &str, record: &PrescriptionRecord) -> String {
    serde_json::json!({
        "action": "verify",
        "data": { "issuer_address": issuer, "record": record },
    })
    .to_string()
}
