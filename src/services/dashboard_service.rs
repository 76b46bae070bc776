use crate::error::ApiResult;
use crate::models::{CommonResponse, DashboardStats};
use crate::services::api_client::ApiClient;
use crate::utils::DASHBOARD_ENDPOINT;

#[derive(Clone)]
pub struct DashboardService {
    api: ApiClient,
}

impl DashboardService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.api
            .get::<CommonResponse<DashboardStats>>(&format!("{}/stats", DASHBOARD_ENDPOINT))
            .await?
            .into_data()
    }
}
