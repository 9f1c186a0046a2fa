use super::{parse_body, Body};
use crate::models::numeric::Numeric;
use crate::models::user::{TestResult, TypingStats, UserStats};
use crate::services::user_store::Store;
use crate::utils::response::{ApiResponse, NoData};
use crate::{Error, Result};
use rocket::serde::{json::Json, Deserialize};
use rocket::{get, post, routes, Route, State};

#[derive(Debug, Deserialize)]
pub struct TestCountRequest {
    uid: String,
    test_count: Numeric,
}

#[derive(Debug, Deserialize)]
pub struct TestTimeRequest {
    uid: String,
    test_time: Numeric,
}

#[derive(Debug, Deserialize)]
pub struct TestResultRequest {
    uid: String,
    wpm: Numeric,
    raw_wpm: Numeric,
}

// 计数为有符号增量，不设下限
#[post("/update_test_count", data = "<body>")]
async fn update_test_count(
    body: Body<'_, TestCountRequest>,
    store: &State<Store>,
) -> Result<Json<ApiResponse<NoData>>> {
    let data = parse_body(body)?;

    if !store.user_exists(&data.uid).await? {
        return Err(Error::InvalidUser);
    }
    store.increment_test_count(&data.uid, data.test_count).await?;

    Ok(ApiResponse::message("Test Count Updated"))
}

#[post("/update_time_typing", data = "<body>")]
async fn update_time_typing(
    body: Body<'_, TestTimeRequest>,
    store: &State<Store>,
) -> Result<Json<ApiResponse<NoData>>> {
    let data = parse_body(body)?;

    if !store.user_exists(&data.uid).await? {
        return Err(Error::InvalidUser);
    }
    store.increment_test_time(&data.uid, data.test_time).await?;

    Ok(ApiResponse::message("Time Updated"))
}

#[post("/store_test_result", data = "<body>")]
async fn store_test_result(
    body: Body<'_, TestResultRequest>,
    store: &State<Store>,
) -> Result<Json<ApiResponse<NoData>>> {
    let data = parse_body(body)?;

    if !store.user_exists(&data.uid).await? {
        return Err(Error::InvalidUser);
    }
    let result = TestResult {
        wpm: data.wpm,
        raw_wpm: data.raw_wpm,
    };
    store.append_test_result(&data.uid, result).await?;

    Ok(ApiResponse::message("Test Added"))
}

#[get("/get_user_stats/<uid>")]
async fn get_user_stats(uid: &str, store: &State<Store>) -> Result<Json<ApiResponse<UserStats>>> {
    if !store.user_exists(uid).await? {
        return Err(Error::InvalidUser);
    }
    let stats = store.get_user_stats(uid).await?;

    Ok(ApiResponse::success(stats))
}

#[get("/get_typing_stats/<uid>")]
async fn get_typing_stats(
    uid: &str,
    store: &State<Store>,
) -> Result<Json<ApiResponse<TypingStats>>> {
    if !store.user_exists(uid).await? {
        return Err(Error::InvalidUser);
    }
    let stats = store.get_typing_stats(uid).await?;

    Ok(ApiResponse::success(stats))
}

pub fn routes() -> Vec<Route> {
    routes![
        update_test_count,
        update_time_typing,
        store_test_result,
        get_user_stats,
        get_typing_stats
    ]
}
