use crate::models::numeric::Numeric;
use crate::models::user::{
    ProfilePicture, TestResult, TypingStats, UserRecord, UserStats, Username,
};
use crate::services::user_store::UserStore;
use crate::{Error, Result};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// 进程内存储，用于本地开发和测试
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<String, UserRecord>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn update<F>(&self, uid: &str, apply: F) -> Result<()>
    where
        F: FnOnce(&mut UserRecord) + Send,
    {
        let mut users = self.users.lock().await;
        let record = users.get_mut(uid).ok_or(Error::InvalidUser)?;
        apply(record);
        Ok(())
    }

    async fn read<T, F>(&self, uid: &str, project: F) -> Result<T>
    where
        F: FnOnce(&UserRecord) -> T + Send,
    {
        let users = self.users.lock().await;
        users.get(uid).map(project).ok_or(Error::InvalidUser)
    }

    /// 当前保存的用户数
    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.lock().await.is_empty()
    }
}

#[rocket::async_trait]
impl UserStore for MemoryUserStore {
    async fn user_exists(&self, uid: &str) -> Result<bool> {
        Ok(self.users.lock().await.contains_key(uid))
    }

    async fn create_user(&self, uid: &str) -> Result<()> {
        let mut users = self.users.lock().await;
        if users.contains_key(uid) {
            return Err(Error::UserExists);
        }
        users.insert(uid.to_string(), UserRecord::new(uid));
        Ok(())
    }

    async fn increment_test_count(&self, uid: &str, delta: Numeric) -> Result<()> {
        self.update(uid, |user| user.test_count = user.test_count + delta)
            .await
    }

    async fn increment_test_time(&self, uid: &str, delta: Numeric) -> Result<()> {
        self.update(uid, |user| user.test_time = user.test_time + delta)
            .await
    }

    async fn append_test_result(&self, uid: &str, result: TestResult) -> Result<()> {
        self.update(uid, |user| user.tests.push(result)).await
    }

    async fn set_username(&self, uid: &str, username: &str) -> Result<()> {
        self.update(uid, |user| user.username = Some(username.to_string()))
            .await
    }

    async fn set_profile_picture(&self, uid: &str, image: &str) -> Result<()> {
        self.update(uid, |user| user.profile_picture = Some(image.to_string()))
            .await
    }

    async fn get_user_stats(&self, uid: &str) -> Result<UserStats> {
        self.read(uid, UserRecord::user_stats).await
    }

    async fn get_typing_stats(&self, uid: &str) -> Result<TypingStats> {
        self.read(uid, UserRecord::typing_stats).await
    }

    async fn get_username(&self, uid: &str) -> Result<Username> {
        self.read(uid, |user| Username {
            username: user.username.clone(),
        })
        .await
    }

    async fn get_profile_picture(&self, uid: &str) -> Result<ProfilePicture> {
        self.read(uid, |user| ProfilePicture {
            profile_picture: user.profile_picture.clone(),
        })
        .await
    }
}
