use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub mongo: MongoConfig,
    pub storage: StorageConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// JSON 请求体上限（MiB），头像以内联数据提交
    pub json_limit_mib: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 5000,
            json_limit_mib: 16,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub max_pool_size: u32,
    pub connect_timeout_secs: u64,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "typingdb".to_string(),
            collection: "Users".to_string(),
            max_pool_size: 10,
            connect_timeout_secs: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Mongo,
    Memory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: Backend,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// 为空时允许任意来源
    pub allowed_origins: Vec<String>,
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());

    ConfigLoader::builder()
        // 1. 加载配置文件 (如果存在)，缺省值由 serde default 提供
        .add_source(File::with_name(&config_path).required(false))
        // 2. 加载环境变量 (例如 TYPING_STATS__SERVER__PORT 覆盖 [server] port)
        .add_source(Environment::with_prefix("TYPING_STATS").separator("__"))
        // 3. 数据库地址单独沿用 MONGODB_URI
        .set_override_option("mongo.uri", env::var("MONGODB_URI").ok())?
        .build()?
        .try_deserialize()
}
