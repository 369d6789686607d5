//! Fetch-backed API client

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::*;
use crate::config::AppConfig;
use crate::error::parse_error_body;
use crate::models::{ItemsResponse, NetPositionResponse, ProjectsResponse};

/// Client for the budget REST backend
#[derive(Clone, Debug)]
pub struct HttpApi {
    config: AppConfig,
}

impl HttpApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let resp = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let resp = check(resp).await?;
        resp.json::<T>().await.map_err(|e| AppError::Decode(e.to_string()))
    }

    async fn send_json<B: Serialize>(&self, builder: gloo_net::http::RequestBuilder, body: &B) -> Result<(), AppError> {
        let request = builder.json(body).map_err(|e| AppError::Decode(e.to_string()))?;
        let resp = request.send().await.map_err(|e| AppError::Network(e.to_string()))?;
        check(resp).await.map(|_| ())
    }
}

/// Turn a non-2xx response into `Rejected`, keeping any `{error}` message
async fn check(resp: Response) -> Result<Response, AppError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("{} {} -> {}", resp.url(), status, body);
    Err(AppError::Rejected {
        status,
        message: parse_error_body(&body),
    })
}

#[async_trait(?Send)]
impl BudgetApi for HttpApi {
    // ========================
    // Projects
    // ========================

    async fn user_projects(&self, username: &str) -> Result<Vec<Project>, AppError> {
        let resp: ProjectsResponse = self.get_json(&user_projects_path(username)).await?;
        Ok(resp.projects)
    }

    async fn create_project(&self, project: &NewProject) -> Result<(), AppError> {
        self.send_json(Request::post(&self.url(PROJECTS_PATH)), project).await
    }

    async fn net_position(&self, project_id: u32, split_monthly: bool) -> Result<f64, AppError> {
        let resp: NetPositionResponse = self.get_json(&net_position_path(project_id, split_monthly)).await?;
        Ok(resp.net_position)
    }

    // ========================
    // Items
    // ========================

    async fn project_items(&self, project_id: u32) -> Result<Vec<Item>, AppError> {
        let resp: ItemsResponse = self.get_json(&project_items_path(project_id)).await?;
        Ok(resp.items)
    }

    async fn create_item(&self, item: &NewItem) -> Result<(), AppError> {
        self.send_json(Request::post(&self.url(ITEMS_PATH)), item).await
    }

    async fn update_item(&self, item_id: u32, changes: &ItemChanges) -> Result<(), AppError> {
        self.send_json(Request::put(&self.url(&item_path(item_id))), changes).await
    }

    async fn delete_item(&self, item_id: u32) -> Result<(), AppError> {
        let resp = Request::delete(&self.url(&item_path(item_id)))
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        check(resp).await.map(|_| ())
    }
}
