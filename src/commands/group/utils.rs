use anyhow::Result;

use super::types::{Group, GroupProperties, User};
use crate::state::http::HttpClient;
use crate::types::{Body, Collection, IdRef};

pub fn group_path(group_id: &str) -> String {
    format!("/um/groups/{group_id}")
}

pub async fn get_all_groups(http: &HttpClient) -> Result<Vec<Group>> {
    let groups = http
        .get::<Collection<Group>>("/um/groups?depth=1")
        .await?
        .items;

    Ok(groups)
}

pub async fn get_group(http: &HttpClient, group_id: &str) -> Result<Group> {
    http.get(&group_path(group_id)).await
}

pub async fn create_group(
    http: &HttpClient,
    properties: GroupProperties,
) -> Result<(Group, Option<String>)> {
    http.send_json("POST", "/um/groups", &Body { properties })
        .await?
        .into_parts()
}

/// Groups are replaced as a whole, so `properties` must be complete.
pub async fn replace_group(
    http: &HttpClient,
    group_id: &str,
    properties: GroupProperties,
) -> Result<(Group, Option<String>)> {
    http.send_json("PUT", &group_path(group_id), &Body { properties })
        .await?
        .into_parts()
}

pub fn group_users_path(group_id: &str) -> String {
    format!("{}/users", group_path(group_id))
}

pub async fn get_group_users(http: &HttpClient, group_id: &str) -> Result<Vec<User>> {
    let users = http
        .get::<Collection<User>>(&format!("{}?depth=1", group_users_path(group_id)))
        .await?
        .items;

    Ok(users)
}

pub async fn add_group_user(
    http: &HttpClient,
    group_id: &str,
    user_id: &str,
) -> Result<(User, Option<String>)> {
    http.send_json("POST", &group_users_path(group_id), &IdRef { id: user_id })
        .await?
        .into_parts()
}

pub async fn remove_group_user(
    http: &HttpClient,
    group_id: &str,
    user_id: &str,
) -> Result<Option<String>> {
    http.delete(&format!("{}/{user_id}", group_users_path(group_id)))
        .await
}
