use crate::config::settings::MongoConfig;
use crate::models::numeric::Numeric;
use crate::models::user::{
    ProfilePicture, TestResult, TypingStats, UserRecord, UserStats, Username,
};
use crate::services::user_store::UserStore;
use crate::{Error, Result};
use mongodb::{
    bson::{self, doc, Bson, Document},
    error::{ErrorKind, WriteFailure},
    options::{ClientOptions, IndexOptions, ServerApi, ServerApiVersion},
    Client, Collection, IndexModel,
};
use std::time::Duration;

// E11000 duplicate key error，由 uid 唯一索引触发
const DUPLICATE_KEY: i32 = 11000;

/// 基于 MongoDB 的用户存储
#[derive(Clone, Debug)]
pub struct MongoUserStore {
    users: Collection<Document>,
}

impl MongoUserStore {
    pub async fn connect(config: &MongoConfig) -> Result<Self> {
        let mut client_options = ClientOptions::parse(config.uri.as_str()).await?;

        // 设置ServerAPI版本
        let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
        client_options.server_api = Some(server_api);

        client_options.min_pool_size = Some(0);
        client_options.max_pool_size = Some(config.max_pool_size);

        // 设置连接超时（避免长时间等待）
        let timeout = Duration::from_secs(config.connect_timeout_secs);
        client_options.connect_timeout = Some(timeout);
        client_options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(client_options)?;
        let database = client.database(&config.database);

        // 测试连接
        database.run_command(doc! { "ping": 1 }).await?;
        log::info!("Connected to MongoDB database {}", config.database);

        let store = Self {
            users: database.collection::<Document>(&config.collection),
        };
        store.ensure_uid_index().await?;
        Ok(store)
    }

    /// uid 唯一索引，保证并发注册时只写入一条记录
    async fn ensure_uid_index(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "uid": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let result = self.users.create_index(index).await?;
        log::info!("Ensured unique index {} on {}", result.index_name, self.users.name());
        Ok(())
    }

    async fn update_user(&self, uid: &str, update: Document) -> Result<()> {
        let result = self.users.update_one(doc! { "uid": uid }, update).await?;
        if result.matched_count == 0 {
            return Err(Error::InvalidUser);
        }
        Ok(())
    }

    async fn project_user(&self, uid: &str, projection: Document) -> Result<Document> {
        self.users
            .find_one(doc! { "uid": uid })
            .projection(projection)
            .await?
            .ok_or(Error::InvalidUser)
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY,
        _ => false,
    }
}

fn numeric_field(doc: &Document, key: &str) -> Numeric {
    doc.get(key).and_then(Numeric::from_bson).unwrap_or_default()
}

fn string_field(doc: &Document, key: &str) -> Option<String> {
    doc.get_str(key).ok().map(|s| s.to_string())
}

// tests 数组中的非文档元素直接跳过
fn test_results(doc: &Document) -> Vec<TestResult> {
    doc.get_array("tests")
        .map(|arr| {
            arr.iter()
                .filter_map(Bson::as_document)
                .map(|entry| TestResult {
                    wpm: numeric_field(entry, "wpm"),
                    raw_wpm: numeric_field(entry, "raw_wpm"),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[rocket::async_trait]
impl UserStore for MongoUserStore {
    async fn user_exists(&self, uid: &str) -> Result<bool> {
        let found = self
            .users
            .find_one(doc! { "uid": uid })
            .projection(doc! { "_id": 1 })
            .await?;
        Ok(found.is_some())
    }

    async fn create_user(&self, uid: &str) -> Result<()> {
        let record = bson::to_document(&UserRecord::new(uid))?;
        match self.users.insert_one(record).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(Error::UserExists),
            Err(e) => Err(e.into()),
        }
    }

    async fn increment_test_count(&self, uid: &str, delta: Numeric) -> Result<()> {
        self.update_user(uid, doc! { "$inc": { "test_count": Bson::from(delta) } })
            .await
    }

    async fn increment_test_time(&self, uid: &str, delta: Numeric) -> Result<()> {
        self.update_user(uid, doc! { "$inc": { "test_time": Bson::from(delta) } })
            .await
    }

    async fn append_test_result(&self, uid: &str, result: TestResult) -> Result<()> {
        let entry = doc! {
            "wpm": Bson::from(result.wpm),
            "raw_wpm": Bson::from(result.raw_wpm),
        };
        self.update_user(uid, doc! { "$push": { "tests": entry } })
            .await
    }

    async fn set_username(&self, uid: &str, username: &str) -> Result<()> {
        self.update_user(uid, doc! { "$set": { "username": username } })
            .await
    }

    async fn set_profile_picture(&self, uid: &str, image: &str) -> Result<()> {
        self.update_user(uid, doc! { "$set": { "profile_picture": image } })
            .await
    }

    async fn get_user_stats(&self, uid: &str) -> Result<UserStats> {
        let doc = self
            .project_user(uid, doc! { "_id": 0, "test_count": 1, "test_time": 1 })
            .await?;
        Ok(UserStats {
            test_count: numeric_field(&doc, "test_count"),
            test_time: numeric_field(&doc, "test_time"),
        })
    }

    async fn get_typing_stats(&self, uid: &str) -> Result<TypingStats> {
        let doc = self.project_user(uid, doc! { "_id": 0, "tests": 1 }).await?;
        Ok(TypingStats {
            tests: test_results(&doc),
        })
    }

    async fn get_username(&self, uid: &str) -> Result<Username> {
        let doc = self.project_user(uid, doc! { "_id": 0, "username": 1 }).await?;
        Ok(Username {
            username: string_field(&doc, "username"),
        })
    }

    async fn get_profile_picture(&self, uid: &str) -> Result<ProfilePicture> {
        let doc = self
            .project_user(uid, doc! { "_id": 0, "profile_picture": 1 })
            .await?;
        Ok(ProfilePicture {
            profile_picture: string_field(&doc, "profile_picture"),
        })
    }
}
