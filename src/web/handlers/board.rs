use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use serde_json::json;
use std::sync::Arc;

use crate::core::app::AppState;
use crate::core::error::AppResult;
use crate::core::types::BoardForm;

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let boards = state.board_store.find_all().await?;
    state.views.render("index", &json!({ "boards": boards }))
}

pub async fn save_form(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    state.views.render("board/save-form", &json!({}))
}

pub async fn save(
    State(state): State<Arc<AppState>>,
    Form(form): Form<BoardForm>,
) -> AppResult<Redirect> {
    state
        .board_store
        .save(&form.title, &form.content, &form.username)
        .await?;

    Ok(Redirect::to("/"))
}

pub async fn detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let board = state.board_store.find_by_id(id).await?;
    state.views.render("board/detail", &json!({ "board": board }))
}

pub async fn update_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let board = state.board_store.find_by_id(id).await?;
    state.views.render("board/update-form", &json!({ "board": board }))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(form): Form<BoardForm>,
) -> AppResult<Redirect> {
    state
        .board_store
        .update_by_id(id, &form.title, &form.content, &form.username)
        .await?;

    Ok(Redirect::to(&format!("/board/{}", id)))
}

/// Redirects home whether or not the board still existed, so a replayed
/// delete lands on the list instead of an error page.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    state.board_store.delete_by_id(id).await?;
    Ok(Redirect::to("/"))
}
