use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};
use wealthnest_core::transactions::{NewTransaction, TransactionServiceTrait};

use crate::{
    auth::CurrentUser,
    error::ApiResult,
    main_lib::AppState,
    models::{TransactionCreate, TransactionCreated, TransactionResponse},
};

async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<TransactionCreate>,
) -> ApiResult<Json<TransactionCreated>> {
    let new_transaction = NewTransaction::try_from(payload)?;
    let stored = state
        .transaction_service
        .create_transaction(user.id, new_transaction)
        .await?;
    Ok(Json(TransactionCreated {
        message: "Transaction added".to_string(),
        transaction_id: stored.id,
    }))
}

async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<TransactionResponse>>> {
    let transactions = state.transaction_service.get_transactions(user.id)?;
    Ok(Json(
        transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/transactions",
        get(list_transactions).post(create_transaction),
    )
}
