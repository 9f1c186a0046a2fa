use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use rocket::{catch, catchers, Catcher};
use serde_json::{json, Value};
use std::io::Cursor;
use thiserror::Error;

/// 业务失败码（写在响应体中，HTTP 状态仍为 200）
pub const INVALID_USER: u16 = 301;
pub const INVALID_FIELD: u16 = 302;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid User ID")]
    InvalidUser,

    #[error("User Already Exists")]
    UserExists,

    #[error("{msg}")]
    Rejected { code: u16, msg: String },

    #[error("Malformed request: {0}")]
    Malformed(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Document encoding error: {0}")]
    Bson(#[from] mongodb::bson::ser::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("CORS configuration error: {0}")]
    Cors(#[from] rocket_cors::Error),
}

impl Error {
    pub fn rejected(code: u16, msg: impl Into<String>) -> Self {
        Error::Rejected {
            code,
            msg: msg.into(),
        }
    }

    /// 业务失败码；None 表示应作为 500 返回
    pub fn code(&self) -> Option<u16> {
        match self {
            Error::InvalidUser | Error::UserExists => Some(INVALID_USER),
            Error::Rejected { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// 500 类错误的统一响应体
pub fn error_body(message: &str) -> Value {
    json!({
        "status": "error",
        "message": message,
    })
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let (status, body) = match self.code() {
            Some(code) => (Status::Ok, json!({ "status": code, "msg": self.to_string() })),
            None => {
                log::error!("{} {} failed: {}", req.method(), req.uri(), self);
                (Status::InternalServerError, error_body(&self.to_string()))
            }
        };

        let body = body.to_string();
        Response::build()
            .status(status)
            .header(ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

// 未匹配路由等框架层错误也使用同一响应体
#[catch(default)]
fn default_catcher(status: Status, req: &Request<'_>) -> (Status, (ContentType, String)) {
    let message = format!(
        "{} {} ({})",
        status.code,
        status.reason().unwrap_or("Unknown"),
        req.uri()
    );
    if status.class().is_server_error() {
        log::error!("{} {} failed: {}", req.method(), req.uri(), message);
    }
    (status, (ContentType::JSON, error_body(&message).to_string()))
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}
