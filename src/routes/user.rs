use super::{parse_body, require_uid, truthy_text, Body};
use crate::models::user::{ProfilePicture, Username};
use crate::services::user_store::Store;
use crate::utils::errors::{INVALID_FIELD, INVALID_USER};
use crate::utils::response::{ApiResponse, NoData};
use crate::{Error, Result};
use rocket::serde::{json::Json, Deserialize};
use rocket::{get, post, routes, Route, State};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct AddUserRequest {
    uid: String,
}

#[derive(Debug, Deserialize)]
pub struct SetUsernameRequest {
    uid: String,
    username: Value,
}

#[derive(Debug, Deserialize)]
pub struct SetProfilePicRequest {
    uid: String,
    image: Value,
}

// 注册用户；uid 唯一由存储层保证
#[post("/add_user", data = "<body>")]
async fn add_user(
    body: Body<'_, AddUserRequest>,
    store: &State<Store>,
) -> Result<Json<ApiResponse<NoData>>> {
    let data = parse_body(body)?;
    require_uid(&data.uid)?;

    if store.user_exists(&data.uid).await? {
        return Err(Error::UserExists);
    }
    store.create_user(&data.uid).await?;
    log::info!("Registered user {}", data.uid);

    Ok(ApiResponse::message("User Added"))
}

#[post("/set_username", data = "<body>")]
async fn set_username(
    body: Body<'_, SetUsernameRequest>,
    store: &State<Store>,
) -> Result<Json<ApiResponse<NoData>>> {
    let data = parse_body(body)?;

    if !store.user_exists(&data.uid).await? {
        return Err(Error::InvalidUser);
    }
    let username = truthy_text(&data.username)?
        .ok_or_else(|| Error::rejected(INVALID_FIELD, "Invalid Username"))?;
    store.set_username(&data.uid, username).await?;

    Ok(ApiResponse::message("Username Updated"))
}

#[get("/get_username/<uid>")]
async fn get_username(uid: &str, store: &State<Store>) -> Result<Json<ApiResponse<Username>>> {
    if !store.user_exists(uid).await? {
        return Err(Error::InvalidUser);
    }
    let username = store.get_username(uid).await?;

    Ok(ApiResponse::success(username))
}

#[post("/set_profilepic", data = "<body>")]
async fn set_profilepic(
    body: Body<'_, SetProfilePicRequest>,
    store: &State<Store>,
) -> Result<Json<ApiResponse<NoData>>> {
    let data = parse_body(body)?;

    if !store.user_exists(&data.uid).await? {
        return Err(Error::InvalidUser);
    }
    // 空图片与未知用户共用 301
    let image = truthy_text(&data.image)?
        .ok_or_else(|| Error::rejected(INVALID_USER, "Invalid Image"))?;
    store.set_profile_picture(&data.uid, image).await?;

    Ok(ApiResponse::message("Profile picture updated"))
}

#[get("/get_profilepic/<uid>")]
async fn get_profilepic(
    uid: &str,
    store: &State<Store>,
) -> Result<Json<ApiResponse<ProfilePicture>>> {
    if !store.user_exists(uid).await? {
        return Err(Error::InvalidUser);
    }
    let picture = store.get_profile_picture(uid).await?;

    Ok(ApiResponse::success_with_msg(picture, "Profile picture retrieved"))
}

pub fn routes() -> Vec<Route> {
    routes![add_user, set_username, get_username, set_profilepic, get_profilepic]
}
