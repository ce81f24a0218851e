//! Account deletion callable

use crate::{AppState, CallableError, CallableResponse, CallableResult, Caller};

use acct_core::DeleteAccountResponse;

use std::sync::Arc;

use axum::{Json, extract::State};

/// POST /deleteUserAccount
///
/// Deletes the authenticated caller's profile record and identity account.
/// The request body is not read: the uid always comes from the verified
/// token, so a payload naming another account has no effect.
///
/// The deletion runs on its own task. A request timeout or client disconnect
/// drops this future but not the task, so both steps still run to completion
/// and failures are still logged and counted.
pub async fn delete_user_account(
    State(state): State<AppState>,
    Caller(caller): Caller,
) -> CallableResult<Json<CallableResponse<DeleteAccountResponse>>> {
    state.metrics.deletion_requested();

    let deletion = Arc::clone(&state.deletion);
    let metrics = state.metrics.clone();
    let task = tokio::spawn(async move {
        let outcome = deletion.delete_account(caller.as_ref()).await;
        match outcome {
            Ok(_) => metrics.deletion_succeeded(),
            Err(ref e) => metrics.deletion_failed(e),
        }
        outcome
    });

    match task.await {
        Ok(Ok(response)) => Ok(Json(CallableResponse::new(response))),
        Ok(Err(e)) => Err(e.into()),
        Err(e) => {
            log::error!("Account deletion task did not complete: {}", e);
            Err(CallableError::internal())
        }
    }
}
