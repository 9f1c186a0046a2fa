use crate::models::numeric::Numeric;
use crate::models::user::{ProfilePicture, TestResult, TypingStats, UserStats, Username};
use crate::Result;

/// 用户集合的持久化访问层
///
/// 每个方法对应一次单文档操作。写操作在目标用户不存在时返回
/// [`Error::InvalidUser`](crate::Error::InvalidUser)，读操作同理。
#[rocket::async_trait]
pub trait UserStore: Send + Sync {
    async fn user_exists(&self, uid: &str) -> Result<bool>;

    /// 新建用户；uid 已存在时返回 `Error::UserExists`
    async fn create_user(&self, uid: &str) -> Result<()>;

    async fn increment_test_count(&self, uid: &str, delta: Numeric) -> Result<()>;

    async fn increment_test_time(&self, uid: &str, delta: Numeric) -> Result<()>;

    async fn append_test_result(&self, uid: &str, result: TestResult) -> Result<()>;

    async fn set_username(&self, uid: &str, username: &str) -> Result<()>;

    async fn set_profile_picture(&self, uid: &str, image: &str) -> Result<()>;

    async fn get_user_stats(&self, uid: &str) -> Result<UserStats>;

    async fn get_typing_stats(&self, uid: &str) -> Result<TypingStats>;

    async fn get_username(&self, uid: &str) -> Result<Username>;

    async fn get_profile_picture(&self, uid: &str) -> Result<ProfilePicture>;
}

/// 由 Rocket 托管、注入到各路由的存储句柄
pub type Store = Box<dyn UserStore>;
