use serde::{Deserialize, Serialize};

// ============================================================================
// Wallet Address Value Object
// ============================================================================
//
// Wallet addresses arrive from the outside world as opaque chain-account
// strings. The original service compared them case-insensitively in some
// ledgers and exactly in others; here every address is canonicalized to
// uppercase on ingestion so all stores agree on identity.
//
// ============================================================================

/// Canonicalized external-ledger account identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

// Deserialization goes through `new` so wire input is canonicalized too.
impl<'de> Deserialize<'de> for WalletAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

impl WalletAddress {
    pub fn new(address: impl AsRef<str>) -> Self {
        Self(address.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WalletAddress {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for WalletAddress {
    fn from(address: String) -> Self {
        Self::new(address)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
