use tracing::instrument;

use super::{ClientError, ServiceClient};
use crate::model::performance::{CreateReview, PerformanceReview};

#[derive(Clone)]
pub struct PerformanceApi {
    client: ServiceClient,
}

impl PerformanceApi {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    #[instrument(name = "review_list", skip_all)]
    pub async fn list(&self, token: Option<&str>) -> Result<Vec<PerformanceReview>, ClientError> {
        self.client.list(token).await
    }

    #[instrument(name = "review_create", skip_all, fields(employee_id = review.employee_id, score = review.score))]
    pub async fn create(
        &self,
        review: &CreateReview,
        token: Option<&str>,
    ) -> Result<PerformanceReview, ClientError> {
        self.client.create(review, token).await
    }

    #[instrument(name = "review_delete", skip(self, token))]
    pub async fn delete(&self, id: u64, token: Option<&str>) -> Result<(), ClientError> {
        self.client.delete(id, token).await
    }
}
