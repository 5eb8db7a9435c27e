use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};

#[derive(serde::Deserialize, Debug)]
pub struct Config {
    pub application: ApplicationConfig,
}

#[derive(serde::Deserialize, Debug)]
pub struct ApplicationConfig {
    pub name: String,
    pub log_level: String,
}

/// 读取`config/base.yaml`，再由`APP_`前缀的环境变量覆盖
/// 例如 `APP_APPLICATION__LOG_LEVEL=debug`
pub fn get_config() -> Result<Config, ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    let config_file = File::from(base_path.join("config").join("base.yaml"));

    build_config(config::Config::builder().add_source(config_file), env_source())
}

fn env_source() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
}

fn build_config(
    builder: ConfigBuilder<DefaultState>,
    env: Environment,
) -> Result<Config, ConfigError> {
    builder.add_source(env).build()?.try_deserialize::<Config>()
}
