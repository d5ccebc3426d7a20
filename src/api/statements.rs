use crate::models::Data;
use crate::models::statements::{
    InitStatementRequest, StatementListResponse, StatementQuery, StatementResponse,
};
use crate::{ClientError, TochkaClient};

impl TochkaClient {
    /// Lists statements already produced for an account.
    pub async fn get_statements(
        &self,
        account_id: &str,
    ) -> Result<StatementListResponse, ClientError> {
        self.call_typed(
            "get_statements_list",
            &[("accountId", account_id)],
            &[],
            None,
        )
        .await
    }

    /// Schedules statement production for the given account and period.
    ///
    /// The statement is built asynchronously; poll [`Self::get_statement`]
    /// until its status reaches `Ready`.
    pub async fn init_statement(
        &self,
        query: StatementQuery,
    ) -> Result<StatementResponse, ClientError> {
        let body = serde_json::to_value(Data::new(InitStatementRequest { statement: query }))?;
        self.call_typed("init_statement", &[], &[], Some(body)).await
    }

    /// Fetches one statement, including its transactions once ready.
    pub async fn get_statement(
        &self,
        account_id: &str,
        statement_id: &str,
    ) -> Result<StatementResponse, ClientError> {
        self.call_typed(
            "get_statement_info",
            &[("accountId", account_id), ("statementId", statement_id)],
            &[],
            None,
        )
        .await
    }
}
