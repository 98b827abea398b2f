use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::Uri,
    routing::get,
};
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};

use crate::{
    AppState,
    entities::movie,
    error::{AppError, AppResult},
    models::{ListQuery, MovieDetail, MovieList, PageParams},
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies/", get(list_movies))
        .route("/movies/{movie_id}/", get(get_movie))
        .with_state(state)
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<MovieList>> {
    let params = PageParams::try_from(query)?;

    // Ties in insertion order resolve by id, so pages are stable across requests.
    let paginator = movie::Entity::find()
        .order_by_asc(movie::Column::Id)
        .paginate(&state.db, params.per_page);

    let total_items = paginator.num_items().await?;
    let total_pages = params.total_pages(total_items);

    // Checked before fetch_page: its internal offset math is unchecked, and a
    // page past the end must 404 rather than return an empty list.
    if params.page > total_pages {
        return Err(AppError::not_found("No movies found."));
    }

    let rows = paginator.fetch_page(params.page - 1).await?;

    if rows.is_empty() {
        return Err(AppError::not_found("No movies found."));
    }

    let movies = rows.into_iter().map(MovieDetail::try_from).collect::<AppResult<Vec<_>>>()?;
    let base_path = uri.path();

    let prev_page =
        (params.page > 1).then(|| params.link(base_path, params.page - 1));
    let next_page =
        (params.page < total_pages).then(|| params.link(base_path, params.page + 1));

    Ok(Json(MovieList { movies, prev_page, next_page, total_pages, total_items }))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i32>,
) -> AppResult<Json<MovieDetail>> {
    let movie = movie::Entity::find_by_id(movie_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Movie with the given ID was not found."))?;

    Ok(Json(MovieDetail::try_from(movie)?))
}
