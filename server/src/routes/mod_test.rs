use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn api_routes_build_with_lazy_pool() {
    let state = crate::state::test_helpers::test_app_state();
    let _router = api_routes(state);
}
