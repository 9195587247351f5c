use serde::Serialize;

/// Definition of an EVM-compatible network.
///
/// Consumed as opaque configuration by the balance-fetching layer; nothing
/// in this workspace opens a connection to `rpc_url`.
#[derive(Debug, Clone, Serialize)]
pub struct EvmNetwork {
    pub chain_id: u64,
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
}

/// Soneium Mainnet (chain ID 1868).
pub const SONEIUM: EvmNetwork = EvmNetwork {
    chain_id: 1868,
    name: "Soneium",
    symbol: "ETH",
    decimals: 18,
    rpc_url: "https://rpc.soneium.org",
    explorer_url: "https://soneium.blockscout.com",
};

/// JPYC stablecoin contract on Soneium, read via the ERC-20 view surface.
pub const JPYC_TOKEN_CONTRACT: &str = "0x431D5dfF03120AFA4bDf332c61A6e1766eF37BDB";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::validate_address;

    #[test]
    fn soneium_chain_id() {
        assert_eq!(SONEIUM.chain_id, 1868);
        assert_eq!(SONEIUM.symbol, "ETH");
    }

    #[test]
    fn jpyc_contract_is_a_valid_address() {
        assert!(validate_address(JPYC_TOKEN_CONTRACT).unwrap());
    }
}
