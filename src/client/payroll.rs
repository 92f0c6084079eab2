use tracing::instrument;

use super::{ClientError, ServiceClient};
use crate::model::payroll::{CreatePayroll, Payroll};

#[derive(Clone)]
pub struct PayrollApi {
    client: ServiceClient,
}

impl PayrollApi {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    #[instrument(name = "payroll_list", skip_all)]
    pub async fn list(&self, token: Option<&str>) -> Result<Vec<Payroll>, ClientError> {
        self.client.list(token).await
    }

    #[instrument(name = "payroll_create", skip_all, fields(employee_id = payroll.employee_id))]
    pub async fn create(
        &self,
        payroll: &CreatePayroll,
        token: Option<&str>,
    ) -> Result<Payroll, ClientError> {
        self.client.create(payroll, token).await
    }

    #[instrument(name = "payroll_delete", skip(self, token))]
    pub async fn delete(&self, id: u64, token: Option<&str>) -> Result<(), ClientError> {
        self.client.delete(id, token).await
    }
}
