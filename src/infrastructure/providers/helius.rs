//! Helius DAS wallet provider

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::infrastructure::providers::WalletProvider;
use crate::shared::errors::ProviderError;
use crate::shared::types::{PortfolioHolding, PortfolioSnapshot};
use crate::shared::utils::format_address;

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<AssetsPage>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct AssetsPage {
    items: Vec<Asset>,
    #[serde(rename = "nativeBalance")]
    native_balance: Option<NativeBalance>,
}

#[derive(Debug, Deserialize)]
struct Asset {
    id: String,
    interface: String,
    #[serde(rename = "token_info")]
    token_info: Option<TokenInfo>,
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    symbol: Option<String>,
    balance: Option<u64>,
    decimals: Option<u8>,
    #[serde(rename = "price_info")]
    price_info: Option<PriceInfo>,
}

#[derive(Debug, Deserialize)]
struct PriceInfo {
    #[serde(rename = "total_price")]
    total_price: f64,
}

#[derive(Debug, Deserialize)]
struct NativeBalance {
    #[serde(rename = "total_price")]
    total_price: Option<f64>,
}

impl Asset {
    fn is_fungible(&self) -> bool {
        matches!(self.interface.as_str(), "FungibleToken" | "FungibleAsset")
    }

    fn into_holding(self) -> Result<PortfolioHolding, ProviderError> {
        let mint: Pubkey = self
            .id
            .parse()
            .map_err(|_| ProviderError::InvalidAddress(self.id.clone()))?;

        let info = self.token_info.ok_or_else(|| {
            ProviderError::MalformedResponse(format!("fungible asset {} has no token_info", self.id))
        })?;

        let decimals = info.decimals.unwrap_or(0);
        let raw_balance = info.balance.unwrap_or(0);
        let balance = raw_balance as f64 / 10f64.powi(decimals as i32);

        Ok(PortfolioHolding {
            symbol: info
                .symbol
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| format_address(&mint)),
            mint,
            balance,
            value_usd: info.price_info.map(|p| p.total_price),
        })
    }
}

/// Wallet provider backed by the Helius `getAssetsByOwner` DAS endpoint
pub struct HeliusWalletProvider {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HeliusWalletProvider {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        match &self.api_key {
            Some(key) => format!("{}/?api-key={}", self.base_url, key),
            None => format!("{}/", self.base_url),
        }
    }
}

#[async_trait]
impl WalletProvider for HeliusWalletProvider {
    async fn get_portfolio(&self, wallet: &Pubkey) -> Result<PortfolioSnapshot, ProviderError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": "yieldscope",
            "method": "getAssetsByOwner",
            "params": {
                "ownerAddress": wallet.to_string(),
                "page": 1,
                "limit": 1000,
                "displayOptions": {
                    "showFungible": true,
                    "showNativeBalance": true
                }
            }
        });

        debug!(wallet = %wallet, "helius getAssetsByOwner");
        let response = self.http_client.post(self.endpoint()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let rpc: RpcResponse = response.json().await?;
        if let Some(err) = rpc.error {
            return Err(ProviderError::MalformedResponse(format!(
                "RPC error {}: {}",
                err.code, err.message
            )));
        }
        let page = rpc.result.ok_or_else(|| {
            ProviderError::MalformedResponse("response carries neither result nor error".to_string())
        })?;

        let mut tokens = Vec::new();
        let mut nft_count = 0usize;
        for asset in page.items {
            if asset.is_fungible() {
                tokens.push(asset.into_holding()?);
            } else {
                nft_count += 1;
            }
        }

        let sol_balance = page
            .native_balance
            .and_then(|n| n.total_price)
            .unwrap_or(0.0);

        Ok(PortfolioSnapshot {
            sol_balance,
            tokens,
            nft_count,
        })
    }
}
