use super::numeric::Numeric;
use serde::{Deserialize, Serialize};

/// 一次打字测试的成绩
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub wpm: Numeric,
    pub raw_wpm: Numeric,
}

/// Users 集合中的单个文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub tests: Vec<TestResult>,
    pub test_count: Numeric,
    pub test_time: Numeric,
}

impl UserRecord {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            username: None,
            profile_picture: None,
            tests: Vec::new(),
            test_count: Numeric::Int(0),
            test_time: Numeric::Int(0),
        }
    }

    pub fn user_stats(&self) -> UserStats {
        UserStats {
            test_count: self.test_count,
            test_time: self.test_time,
        }
    }

    pub fn typing_stats(&self) -> TypingStats {
        TypingStats {
            tests: self.tests.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub test_count: Numeric,
    pub test_time: Numeric,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypingStats {
    pub tests: Vec<TestResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Username {
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilePicture {
    pub profile_picture: Option<String>,
}
