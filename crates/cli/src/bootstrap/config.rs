use dnsrec_domain::Config;

/// Load the config file (or defaults), apply CLI overrides, and validate.
pub fn load_config(config_path: Option<&str>, log_level: Option<String>) -> anyhow::Result<Config> {
    let mut config = Config::load(config_path)?;
    if let Some(level) = log_level {
        config.logging.level = level;
    }
    config.validate()?;

    Ok(config)
}
