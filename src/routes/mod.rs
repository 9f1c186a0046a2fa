pub mod stats;
pub mod user;

use crate::{Error, Result};
use rocket::serde::json::{self, Json};
use serde_json::Value;

/// JSON 请求体；解析失败保留在 Err 中，由 [`parse_body`] 统一转换
pub type Body<'r, T> = std::result::Result<Json<T>, json::Error<'r>>;

pub fn parse_body<T>(body: Body<'_, T>) -> Result<T> {
    body.map(Json::into_inner)
        .map_err(|e| Error::Malformed(e.to_string()))
}

/// 按 JSON 真值取文本字段：null、false、0、""、[]、{} 视为未填写
pub fn truthy_text(value: &Value) -> Result<Option<&str>> {
    match value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::Array(a) if a.is_empty() => Ok(None),
        Value::Object(o) if o.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.as_str())),
        other => Err(Error::Malformed(format!("expected a string, found {}", other))),
    }
}

/// uid 不能为空，否则无法通过路径参数读取
pub fn require_uid(uid: &str) -> Result<()> {
    if uid.is_empty() {
        return Err(Error::Malformed("uid must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_values_are_unset() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert_eq!(truthy_text(&value).unwrap(), None, "{}", value);
        }
    }

    #[test]
    fn test_text_values() {
        assert_eq!(truthy_text(&json!("typist")).unwrap(), Some("typist"));
        assert_eq!(truthy_text(&json!(" ")).unwrap(), Some(" "));
        assert!(matches!(truthy_text(&json!(42)), Err(Error::Malformed(_))));
        assert!(matches!(truthy_text(&json!(true)), Err(Error::Malformed(_))));
    }

    #[test]
    fn test_empty_uid_is_malformed() {
        assert!(require_uid("u1").is_ok());
        assert!(matches!(require_uid(""), Err(Error::Malformed(_))));
    }
}
