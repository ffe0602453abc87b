use serde::Serialize;

/// Effective configuration, as printed by `config show` and `config init`
#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub title: String,
    pub currency_label: String,
    pub tick_rate_ms: u64,
}
