use rocket::serde::{json::Json, Serialize};

/// 无附加字段的响应
#[derive(Debug, Serialize)]
pub struct NoData {}

/// 统一响应体：`status` + 可选 `msg` + 平铺的业务字段
#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            status: 200,
            msg: None,
            data,
        })
    }

    pub fn success_with_msg(data: T, msg: &str) -> Json<Self> {
        Json(Self {
            status: 200,
            msg: Some(msg.to_string()),
            data,
        })
    }
}

impl ApiResponse<NoData> {
    pub fn message(msg: &str) -> Json<Self> {
        Self::success_with_msg(NoData {}, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::numeric::Numeric;
    use crate::models::user::UserStats;
    use serde_json::json;

    #[test]
    fn test_message_envelope() {
        let Json(body) = ApiResponse::message("User Added");
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "status": 200, "msg": "User Added" })
        );
    }

    #[test]
    fn test_payload_is_flattened() {
        let stats = UserStats {
            test_count: Numeric::Int(5),
            test_time: Numeric::Int(0),
        };
        let Json(body) = ApiResponse::success(stats);
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "status": 200, "test_count": 5, "test_time": 0 })
        );
    }
}
