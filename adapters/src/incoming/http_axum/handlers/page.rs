use axum::response::Html;

const CAMERA_GRID_PAGE: &str = include_str!("../../../../assets/camera_grid.html");

pub async fn camera_page() -> Html<&'static str> {
    Html(CAMERA_GRID_PAGE)
}
