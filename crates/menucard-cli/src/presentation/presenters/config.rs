use std::path::Path;

use menucard_runtime::Config;

use crate::presentation::view_models::ConfigViewModel;

pub fn present_config(path: &Path, config: &Config) -> ConfigViewModel {
    ConfigViewModel {
        path: path.display().to_string(),
        exists: path.exists(),
        title: config.display.title.clone(),
        currency_label: config.display.currency_label.clone(),
        tick_rate_ms: config.ui.tick_rate_ms,
    }
}
