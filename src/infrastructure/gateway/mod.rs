pub mod http;

use std::sync::Arc;

use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Gateway;

pub type GatewayBox = Arc<dyn Gateway + Send + Sync>;

pub struct GatewayManager {}

impl GatewayManager {
    pub fn get() -> Result<GatewayBox> {
        let timeout = Config::get(ConfigKey::RequestTimeout).parse::<u64>()?;
        let gateway = http::HttpGateway::new(&Config::get(ConfigKey::ApiUrl), timeout)?;

        return Ok(Arc::new(gateway));
    }
}
