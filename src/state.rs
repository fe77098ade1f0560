use std::sync::Arc;

use chrono_tz::Tz;
use reqwest::Client;

use crate::{config::Config, error::StartupError};

pub struct State {
    pub config: Config,
    pub timezone: Tz,
    pub client: Client,
}

impl State {
    pub fn new(config: Config) -> Result<Arc<Self>, StartupError> {
        let timezone: Tz = config
            .timezone
            .parse()
            .map_err(|_| StartupError::Timezone(config.timezone.clone()))?;

        Ok(Arc::new(Self {
            config,
            timezone,
            client: Client::new(),
        }))
    }
}
