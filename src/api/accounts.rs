use crate::models::accounts::{AccountListResponse, AccountResponse};
use crate::{ClientError, TochkaClient};

impl TochkaClient {
    /// Lists all accounts visible to the authorized application.
    pub async fn get_accounts(&self) -> Result<AccountListResponse, ClientError> {
        self.call_typed("get_accounts_list", &[], &[], None).await
    }

    /// Fetches one account by its `accountId` (`<number>/<bic>`).
    pub async fn get_account(&self, account_id: &str) -> Result<AccountResponse, ClientError> {
        self.call_typed("get_account_info", &[("accountId", account_id)], &[], None)
            .await
    }
}
