//! Outbound links shown next to an attestation.

use url::Url;

/// Block explorer page for a transaction; the hash is appended verbatim.
pub const EXPLORER_TX_BASE: &str = "https://amoy.polygonscan.com/tx/";

/// Dashboard origin; the attestation id is passed as a query parameter.
pub const DASHBOARD_ORIGIN: &str = "https://dashboard.annaprotocol.online/";

/// Explorer URL for `tx_hash`. No validation of the hash is performed.
pub fn explorer_tx_url(tx_hash: &str) -> String {
    format!("{}{}", EXPLORER_TX_BASE, tx_hash)
}

/// Dashboard URL pointing at one attestation.
pub fn dashboard_url(attestation_id: &str) -> String {
    match Url::parse_with_params(DASHBOARD_ORIGIN, &[("attestation_id", attestation_id)]) {
        Ok(url) => url.into(),
        Err(e) => {
            tracing::warn!("Could not build dashboard link: {}", e);
            DASHBOARD_ORIGIN.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_url_interpolates_hash() {
        assert_eq!(
            explorer_tx_url("0xabc"),
            "https://amoy.polygonscan.com/tx/0xabc"
        );
    }

    #[test]
    fn test_dashboard_url_encodes_attestation_id() {
        assert_eq!(
            dashboard_url("att_123"),
            "https://dashboard.annaprotocol.online/?attestation_id=att_123"
        );
        assert_eq!(
            dashboard_url("a b&c"),
            "https://dashboard.annaprotocol.online/?attestation_id=a+b%26c"
        );
    }
}
