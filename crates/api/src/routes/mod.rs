pub mod health;
pub mod option;
pub mod participant;
pub mod presentation;
pub mod qna;
pub mod question;
pub mod question_type;
pub mod session;
pub mod user;
pub mod vote;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /question-types                                  list
/// /question-types/{code}                           get
///
/// /users                                           list, create
/// /users/{id}                                      get, update, patch, delete
/// /users/{id}/presentations                        owned presentations
///
/// /presentations                                   list, create
/// /presentations/{id}                              get, update, patch, delete
/// /presentations/{id}/questions                    list, create
/// /presentations/{id}/sessions                     list
///
/// /questions/{id}                                  get, update, patch, delete
/// /questions/{id}/options                          list, create
///
/// /options/{id}                                    get, update, patch, delete
///
/// /sessions                                        list, create
/// /sessions/by-code/{access_code}                  get by access code
/// /sessions/{id}                                   get, update, patch, delete
/// /sessions/{id}/participants                      list, join
/// /sessions/{id}/votes                             list (?question_id=), cast
/// /sessions/{id}/qna-messages                      list, post
///
/// /participants/{id}                               get, delete
/// /votes/{id}                                      get, delete
///
/// /qna-messages/{id}                               get, moderate, delete
/// /qna-messages/{id}/upvotes                       list, upvote
/// /qna-messages/{id}/upvotes/{participant_id}      remove upvote
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/question-types", question_type::router())
        .nest("/users", user::router())
        .nest("/presentations", presentation::router())
        .nest("/questions", question::router())
        .nest("/options", option::router())
        .nest("/sessions", session::router())
        .nest("/participants", participant::router())
        .nest("/votes", vote::router())
        .nest("/qna-messages", qna::router())
}
