use once_cell::sync::OnceCell;

static GLOBAL_CONFIG: OnceCell<GlobalConfig> = OnceCell::new();

/// Process-wide CLI options, initialized once from the parsed global args.
#[derive(Debug, Default)]
pub struct GlobalConfig {
    pub verbose: bool,
    pub network_name: Option<String>,
}

pub fn init_global_config(config: GlobalConfig) {
    // A second init (e.g. from tests) keeps the first value.
    let _ = GLOBAL_CONFIG.set(config);
}

pub fn global_config() -> &'static GlobalConfig {
    GLOBAL_CONFIG.get_or_init(GlobalConfig::default)
}
