use std::path::Path;

use crate::config::Settings;
use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel};

pub fn present_config(path: &Path, settings: &Settings) -> ConfigViewModel {
    ConfigViewModel {
        path: path.display().to_string(),
        file_exists: path.exists(),
        api_base_url: settings.client.api_base_url.clone(),
        roster_limit: settings.client.roster_limit,
        user_agent: settings.client.user_agent.clone(),
        page_size: settings.page_size,
    }
}

pub fn present_config_init(path: &Path, overwritten: bool) -> ConfigInitViewModel {
    ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten,
    }
}
