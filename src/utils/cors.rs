use crate::config::settings::CorsConfig;
use crate::Result;
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, Cors, CorsOptions};

/// 未配置白名单时允许任意来源
pub fn configure_cors(config: &CorsConfig) -> Result<Cors> {
    let allowed_origins = if config.allowed_origins.is_empty() {
        AllowedOrigins::all()
    } else {
        AllowedOrigins::some_exact(&config.allowed_origins)
    };

    let cors = CorsOptions {
        allowed_origins,
        allowed_methods: [Method::Get, Method::Post, Method::Options]
            .into_iter()
            .map(From::from)
            .collect(),
        allowed_headers: AllowedHeaders::all(),
        allow_credentials: false,
        ..Default::default()
    }
    .to_cors()?;

    Ok(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_origin_by_default() {
        assert!(configure_cors(&CorsConfig::default()).is_ok());
    }

    #[test]
    fn test_exact_allowlist() {
        let config = CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        };
        assert!(configure_cors(&config).is_ok());
    }
}
