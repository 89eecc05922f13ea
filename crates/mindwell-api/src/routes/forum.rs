use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use jiff::Timestamp;
use serde::Serialize;

use mindwell_support::forum::{
    ForumCategory, ForumPost, NewPost, PostFilter, filter_posts, format_time_ago, sample_posts,
};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct CategorySummary {
    id: ForumCategory,
    name: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
pub struct PostView {
    #[serde(flatten)]
    post: ForumPost,
    posted_ago: String,
    active_ago: String,
}

impl PostView {
    fn new(post: ForumPost, now: Timestamp) -> Self {
        Self {
            posted_ago: format_time_ago(post.created_at, now),
            active_ago: format_time_ago(post.last_activity, now),
            post,
        }
    }
}

#[derive(Serialize)]
pub struct PostList {
    total: usize,
    posts: Vec<PostView>,
}

pub async fn list_categories() -> Json<Vec<CategorySummary>> {
    Json(
        ForumCategory::ALL
            .iter()
            .map(|c| CategorySummary {
                id: *c,
                name: c.display_name(),
                description: c.description(),
            })
            .collect(),
    )
}

pub async fn list_posts(
    filter: Result<Query<PostFilter>, QueryRejection>,
) -> Result<Json<PostList>, ApiError> {
    let Query(filter) = filter?;
    let now = Timestamp::now();
    let board = sample_posts(now);

    let posts = filter_posts(&board, &filter)
        .into_iter()
        .cloned()
        .map(|post| PostView::new(post, now))
        .collect();

    Ok(Json(PostList {
        total: board.len(),
        posts,
    }))
}

/// Validate a new post and echo it back. The board itself is not modified.
pub async fn create_post(
    payload: Result<Json<NewPost>, JsonRejection>,
) -> Result<(StatusCode, Json<PostView>), ApiError> {
    let Json(new_post) = payload?;
    let now = Timestamp::now();
    let post = new_post.submit(now)?;
    Ok((StatusCode::CREATED, Json(PostView::new(post, now))))
}
