//! Integration tests for the content side of the schema: users,
//! presentations, questions and options.
//!
//! Exercises the repository layer against a real database:
//! - Create / get round trips and column defaults
//! - Full and partial updates
//! - Cascade delete behaviour
//! - Unique and foreign key violations

use assert_matches::assert_matches;
use pollroom_db::models::presentation::{CreatePresentation, PatchPresentation, UpdatePresentation};
use pollroom_db::models::question::{CreateQuestion, PatchQuestion, UpdateQuestion};
use pollroom_db::models::question_option::{
    CreateQuestionOption, PatchQuestionOption, UpdateQuestionOption,
};
use pollroom_db::models::user::{CreateUser, PatchUser, UpdateUser};
use pollroom_db::repositories::{PresentationRepo, QuestionOptionRepo, QuestionRepo, UserRepo};
use pollroom_db::PatchOutcome;
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        avatar_url: None,
        role: None,
    }
}

fn new_presentation(owner_id: i64, title: &str) -> CreatePresentation {
    CreatePresentation {
        owner_id,
        title: title.to_string(),
    }
}

fn new_question(type_code: &str, text: &str) -> CreateQuestion {
    CreateQuestion {
        type_code: type_code.to_string(),
        text: text.to_string(),
        media_url: None,
        order_index: None,
        settings: None,
    }
}

fn new_option(text: &str) -> CreateQuestionOption {
    CreateQuestionOption {
        text: text.to_string(),
        is_correct: None,
        order_index: None,
    }
}

fn constraint_of(err: &sqlx::Error) -> Option<String> {
    err.as_database_error()
        .and_then(|e| e.constraint())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_round_trip_and_default_role(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("t@example.com")).await.unwrap();
    assert_eq!(user.role, "teacher");
    assert_eq!(user.avatar_url, None);

    let fetched = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(fetched, user);

    let by_email = UserRepo::find_by_email(&pool, "t@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dup@example.com")).await.unwrap();
    let err = UserRepo::create(&pool, &new_user("dup@example.com"))
        .await
        .unwrap_err();
    assert_eq!(constraint_of(&err).as_deref(), Some("uq_users_email"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_update_replaces_fields(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("old@example.com")).await.unwrap();
    let updated = UserRepo::update(
        &pool,
        user.id,
        &UpdateUser {
            email: "new@example.com".to_string(),
            password_hash: "$argon2id$other".to_string(),
            avatar_url: Some("https://cdn.example.com/a.png".to_string()),
            role: "admin".to_string(),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.role, "admin");
    assert!(updated.updated_at >= user.updated_at);

    let missing = UserRepo::update(
        &pool,
        999_999,
        &UpdateUser {
            email: "x@example.com".to_string(),
            password_hash: "h".to_string(),
            avatar_url: None,
            role: "teacher".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_patch_touches_only_supplied_fields(pool: PgPool) {
    let mut input = new_user("patch@example.com");
    input.avatar_url = Some("https://cdn.example.com/me.png".to_string());
    let user = UserRepo::create(&pool, &input).await.unwrap();

    let outcome = UserRepo::patch(
        &pool,
        user.id,
        &PatchUser {
            role: Some("admin".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let patched = assert_matches!(outcome, PatchOutcome::Updated(u) => u);
    assert_eq!(patched.role, "admin");
    assert_eq!(patched.email, "patch@example.com");
    assert_eq!(patched.avatar_url, user.avatar_url);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_patch_is_unchanged(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("noop@example.com")).await.unwrap();
    let outcome = UserRepo::patch(&pool, user.id, &PatchUser::default())
        .await
        .unwrap();
    assert_matches!(outcome, PatchOutcome::Unchanged);

    let after = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(after, user);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_missing_row_is_not_found(pool: PgPool) {
    let outcome = UserRepo::patch(
        &pool,
        999_999,
        &PatchUser {
            email: Some("ghost@example.com".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_matches!(outcome, PatchOutcome::NotFound);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_users_ordered_by_id(pool: PgPool) {
    let a = UserRepo::create(&pool, &new_user("a@example.com")).await.unwrap();
    let b = UserRepo::create(&pool, &new_user("b@example.com")).await.unwrap();
    let ids: Vec<i64> = UserRepo::list(&pool).await.unwrap().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

// ---------------------------------------------------------------------------
// Presentations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_presentation_crud(pool: PgPool) {
    let owner = UserRepo::create(&pool, &new_user("owner@example.com")).await.unwrap();
    let p = PresentationRepo::create(&pool, &new_presentation(owner.id, "Intro"))
        .await
        .unwrap();
    assert_eq!(PresentationRepo::find_by_id(&pool, p.id).await.unwrap(), Some(p.clone()));

    let listed = PresentationRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].presentation, p);
    assert_eq!(listed[0].owner_email, "owner@example.com");

    let updated = PresentationRepo::update(
        &pool,
        p.id,
        &UpdatePresentation {
            owner_id: owner.id,
            title: "Intro v2".to_string(),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.title, "Intro v2");

    let outcome = PresentationRepo::patch(
        &pool,
        p.id,
        &PatchPresentation {
            title: Some("Intro v3".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_matches!(outcome, PatchOutcome::Updated(ref row) if row.title == "Intro v3");

    let owned = PresentationRepo::list_by_owner(&pool, owner.id).await.unwrap();
    assert_eq!(owned.len(), 1);

    assert!(PresentationRepo::delete(&pool, p.id).await.unwrap());
    assert!(!PresentationRepo::delete(&pool, p.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_presentation_with_unknown_owner_rejected(pool: PgPool) {
    let err = PresentationRepo::create(&pool, &new_presentation(999_999, "Orphan"))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}

// ---------------------------------------------------------------------------
// Questions and options
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_question_defaults_and_settings_round_trip(pool: PgPool) {
    let owner = UserRepo::create(&pool, &new_user("q@example.com")).await.unwrap();
    let p = PresentationRepo::create(&pool, &new_presentation(owner.id, "Quiz"))
        .await
        .unwrap();

    let plain = QuestionRepo::create(&pool, p.id, &new_question("multiple_choice", "Pick one"))
        .await
        .unwrap();
    assert_eq!(plain.order_index, 0);
    assert_eq!(plain.settings, json!({}));

    let settings = json!({"timer": 30, "show_results": false, "nested": {"a": [1, 2]}});
    let mut input = new_question("slider", "How much?");
    input.settings = Some(settings.clone());
    input.order_index = Some(1);
    let rich = QuestionRepo::create(&pool, p.id, &input).await.unwrap();
    assert_eq!(rich.settings, settings);

    let fetched = QuestionRepo::find_by_id(&pool, rich.id).await.unwrap().unwrap();
    assert_eq!(fetched, rich);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_questions_listed_in_order_with_type_label(pool: PgPool) {
    let owner = UserRepo::create(&pool, &new_user("order@example.com")).await.unwrap();
    let p = PresentationRepo::create(&pool, &new_presentation(owner.id, "Ordered"))
        .await
        .unwrap();

    let mut second = new_question("word_cloud", "Second");
    second.order_index = Some(2);
    let mut first = new_question("multiple_choice", "First");
    first.order_index = Some(1);
    QuestionRepo::create(&pool, p.id, &second).await.unwrap();
    QuestionRepo::create(&pool, p.id, &first).await.unwrap();

    let listed = QuestionRepo::list_by_presentation(&pool, p.id).await.unwrap();
    let texts: Vec<&str> = listed.iter().map(|q| q.question.text.as_str()).collect();
    assert_eq!(texts, vec!["First", "Second"]);
    assert_eq!(listed[0].type_label, "Multiple choice");
    assert_eq!(listed[1].type_label, "Word cloud");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_question_with_unknown_type_rejected(pool: PgPool) {
    let owner = UserRepo::create(&pool, &new_user("type@example.com")).await.unwrap();
    let p = PresentationRepo::create(&pool, &new_presentation(owner.id, "Types"))
        .await
        .unwrap();
    let err = QuestionRepo::create(&pool, p.id, &new_question("telepathy", "?"))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_question_update_and_patch(pool: PgPool) {
    let owner = UserRepo::create(&pool, &new_user("upd@example.com")).await.unwrap();
    let p = PresentationRepo::create(&pool, &new_presentation(owner.id, "Edits"))
        .await
        .unwrap();
    let mut input = new_question("open_ended", "Thoughts?");
    input.media_url = Some("https://cdn.example.com/q.png".to_string());
    let q = QuestionRepo::create(&pool, p.id, &input).await.unwrap();

    let updated = QuestionRepo::update(
        &pool,
        q.id,
        &UpdateQuestion {
            presentation_id: p.id,
            type_code: "word_cloud".to_string(),
            text: "One word?".to_string(),
            media_url: None,
            order_index: 4,
            settings: Some(json!({"max_words": 3})),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.type_code, "word_cloud");
    assert_eq!(updated.media_url, None, "PUT clears nullable fields");
    assert_eq!(updated.order_index, 4);

    let outcome = QuestionRepo::patch(
        &pool,
        q.id,
        &PatchQuestion {
            text: Some("Two words?".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let patched = assert_matches!(outcome, PatchOutcome::Updated(q) => q);
    assert_eq!(patched.text, "Two words?");
    assert_eq!(patched.settings, json!({"max_words": 3}));
    assert_eq!(patched.order_index, 4);

    let reset = QuestionRepo::update(
        &pool,
        q.id,
        &UpdateQuestion {
            presentation_id: p.id,
            type_code: "word_cloud".to_string(),
            text: "Two words?".to_string(),
            media_url: None,
            order_index: 4,
            settings: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(reset.settings, json!({}), "missing settings reset to an empty object");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_option_crud(pool: PgPool) {
    let owner = UserRepo::create(&pool, &new_user("opt@example.com")).await.unwrap();
    let p = PresentationRepo::create(&pool, &new_presentation(owner.id, "Options"))
        .await
        .unwrap();
    let q = QuestionRepo::create(&pool, p.id, &new_question("quiz", "2 + 2?"))
        .await
        .unwrap();

    let mut right = new_option("4");
    right.is_correct = Some(true);
    right.order_index = Some(1);
    let wrong = QuestionOptionRepo::create(&pool, q.id, &new_option("5")).await.unwrap();
    let right = QuestionOptionRepo::create(&pool, q.id, &right).await.unwrap();
    assert!(!wrong.is_correct);
    assert!(right.is_correct);

    let listed = QuestionOptionRepo::list_by_question(&pool, q.id).await.unwrap();
    assert_eq!(listed, vec![wrong.clone(), right.clone()]);

    let updated = QuestionOptionRepo::update(
        &pool,
        wrong.id,
        &UpdateQuestionOption {
            question_id: q.id,
            text: "22".to_string(),
            is_correct: false,
            order_index: 2,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.text, "22");

    let outcome = QuestionOptionRepo::patch(
        &pool,
        right.id,
        &PatchQuestionOption {
            is_correct: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_matches!(outcome, PatchOutcome::Updated(ref o) if !o.is_correct && o.text == "4");

    assert!(QuestionOptionRepo::delete(&pool, wrong.id).await.unwrap());
    assert!(QuestionOptionRepo::find_by_id(&pool, wrong.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_user_cascades_to_content(pool: PgPool) {
    let owner = UserRepo::create(&pool, &new_user("gone@example.com")).await.unwrap();
    let p = PresentationRepo::create(&pool, &new_presentation(owner.id, "Doomed"))
        .await
        .unwrap();
    let q = QuestionRepo::create(&pool, p.id, &new_question("multiple_choice", "Q"))
        .await
        .unwrap();
    let o = QuestionOptionRepo::create(&pool, q.id, &new_option("A")).await.unwrap();

    assert!(UserRepo::delete(&pool, owner.id).await.unwrap());

    assert!(PresentationRepo::find_by_id(&pool, p.id).await.unwrap().is_none());
    assert!(QuestionRepo::find_by_id(&pool, q.id).await.unwrap().is_none());
    assert!(QuestionOptionRepo::find_by_id(&pool, o.id).await.unwrap().is_none());
}
