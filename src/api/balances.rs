use crate::models::balances::BalanceListResponse;
use crate::{ClientError, TochkaClient};

impl TochkaClient {
    /// Lists balances across all accounts of the authorized application.
    pub async fn get_balances(&self) -> Result<BalanceListResponse, ClientError> {
        self.call_typed("get_balances_list", &[], &[], None).await
    }

    /// Fetches balances of one account.
    pub async fn get_account_balance(
        &self,
        account_id: &str,
    ) -> Result<BalanceListResponse, ClientError> {
        self.call_typed("get_balance_info", &[("accountId", account_id)], &[], None)
            .await
    }
}
