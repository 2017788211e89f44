//! Raydium v3 HTTP API client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::infrastructure::providers::DefiDataProvider;
use crate::shared::errors::ProviderError;
use crate::shared::types::{LiquidityDetails, Pool, PoolQuery, Token};

/// Envelope wrapping every Raydium v3 response
#[derive(Debug, Deserialize)]
struct RaydiumEnvelope<T> {
    success: bool,
    data: T,
}

/// One page of pool listings from `/pools/info/mint`
#[derive(Debug, Deserialize)]
struct RaydiumPoolPage {
    #[allow(dead_code)]
    count: u32,
    data: Vec<RaydiumPool>,
}

#[derive(Debug, Deserialize)]
struct RaydiumPool {
    #[serde(rename = "type")]
    pool_type: String,
    id: String,
    #[serde(rename = "mintA")]
    mint_a: RaydiumMint,
    #[serde(rename = "mintB")]
    mint_b: RaydiumMint,
    tvl: f64,
    day: RaydiumDayStats,
}

#[derive(Debug, Deserialize)]
struct RaydiumMint {
    address: String,
    symbol: String,
    decimals: u8,
}

#[derive(Debug, Deserialize)]
struct RaydiumDayStats {
    volume: f64,
    #[serde(rename = "volumeFee")]
    volume_fee: f64,
    apr: f64,
}

impl RaydiumPool {
    fn dex_name(&self) -> &'static str {
        match self.pool_type.as_str() {
            "Standard" => "Raydium AMM",
            "Concentrated" => "Raydium CLMM",
            _ => "Raydium",
        }
    }

    fn into_pool(self) -> Result<Pool, ProviderError> {
        let dex = self.dex_name().to_string();
        let address = parse_address(&self.id)?;
        let token_a = self.mint_a.into_token()?;
        let token_b = self.mint_b.into_token()?;
        Ok(Pool {
            address,
            dex,
            token_a,
            token_b,
            tvl: Some(self.tvl),
            apy: Some(self.day.apr),
            volume_24h: Some(self.day.volume),
        })
    }

    fn liquidity(&self) -> LiquidityDetails {
        LiquidityDetails {
            tvl: self.tvl,
            apy: self.day.apr,
            volume_24h: self.day.volume,
            fee_24h: self.day.volume_fee,
        }
    }
}

impl RaydiumMint {
    fn into_token(self) -> Result<Token, ProviderError> {
        Ok(Token {
            mint: parse_address(&self.address)?,
            symbol: self.symbol,
            decimals: self.decimals,
        })
    }
}

fn parse_address(s: &str) -> Result<Pubkey, ProviderError> {
    s.parse()
        .map_err(|_| ProviderError::InvalidAddress(s.to_string()))
}

/// Raydium v3 API client
pub struct RaydiumDataProvider {
    http_client: Client,
    base_url: String,
}

impl RaydiumDataProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, ProviderError> {
        debug!(url, "raydium request");
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let envelope: RaydiumEnvelope<T> = response.json().await?;
        if !envelope.success {
            return Err(ProviderError::MalformedResponse(
                "Raydium API reported success=false".to_string(),
            ));
        }
        Ok(envelope.data)
    }

    /// The ids endpoint returns an array with one entry per requested id
    async fn fetch_pool_record(&self, pool_address: &Pubkey) -> Result<RaydiumPool, ProviderError> {
        let url = format!("{}/pools/info/ids?ids={}", self.base_url, pool_address);
        let mut pools: Vec<RaydiumPool> = self.get_json(&url).await?;
        if pools.is_empty() {
            return Err(ProviderError::NotFound(pool_address.to_string()));
        }
        Ok(pools.swap_remove(0))
    }
}

#[async_trait]
impl DefiDataProvider for RaydiumDataProvider {
    async fn get_pools_by_token(
        &self,
        mint: &Pubkey,
        query: &PoolQuery,
    ) -> Result<Vec<Pool>, ProviderError> {
        let url = format!(
            "{}/pools/info/mint?mint1={}&poolType=all&poolSortField=default&sortType=desc&pageSize={}&page={}",
            self.base_url, mint, query.limit, query.page,
        );

        let page: RaydiumPoolPage = self.get_json(&url).await?;

        // The API cannot filter by venue, so the allow-list is applied here.
        let mut pools = Vec::with_capacity(page.data.len());
        for record in page.data {
            let pool = record.into_pool()?;
            let keep = match &query.dexes {
                Some(allowed) => allowed.iter().any(|d| d.eq_ignore_ascii_case(&pool.dex)),
                None => true,
            };
            if keep {
                pools.push(pool);
            }
        }
        Ok(pools)
    }

    async fn get_liquidity_details(
        &self,
        pool_address: &Pubkey,
    ) -> Result<LiquidityDetails, ProviderError> {
        let record = self.fetch_pool_record(pool_address).await?;
        Ok(record.liquidity())
    }

    async fn get_pool_by_address(&self, pool_address: &Pubkey) -> Result<Pool, ProviderError> {
        let record = self.fetch_pool_record(pool_address).await?;
        record.into_pool()
    }
}
