/// State handed to every handler through `State<AppState>`. Cloning only
/// clones the pool handle.
#[derive(Clone)]
pub struct AppState {
    pub pool: pollroom_db::DbPool,
}
