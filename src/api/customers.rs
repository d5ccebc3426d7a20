use crate::models::customers::{CustomerListResponse, CustomerResponse};
use crate::{ClientError, TochkaClient};

impl TochkaClient {
    /// Lists customers the authorized application can act for.
    pub async fn get_customers(&self) -> Result<CustomerListResponse, ClientError> {
        self.call_typed("get_customers_list", &[], &[], None).await
    }

    /// Fetches one customer by code.
    pub async fn get_customer(
        &self,
        customer_code: &str,
    ) -> Result<CustomerResponse, ClientError> {
        self.call_typed(
            "get_customer_info",
            &[("customerCode", customer_code)],
            &[],
            None,
        )
        .await
    }
}
