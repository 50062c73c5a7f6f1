//! Schema-wide conventions checked against the migrated catalog.

use sqlx::PgPool;

/// Every `id` column is a bigint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_ids_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert_eq!(data_type, "bigint", "Table {table}.id should be bigint");
    }
}

/// Unique constraints are named `uq_<table>_...`, check constraints `ck_<table>_...`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unique_and_check_constraints_are_named(pool: PgPool) {
    let rows: Vec<(String, String, String)> = sqlx::query_as(
        "SELECT c.relname::text, con.conname::text, con.contype::text
         FROM pg_constraint con
         JOIN pg_class c ON c.oid = con.conrelid
         JOIN pg_namespace n ON n.oid = c.relnamespace
         WHERE n.nspname = 'public'
           AND con.contype IN ('u', 'c')
         ORDER BY c.relname, con.conname",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(rows.iter().any(|(_, _, kind)| kind == "u"));
    assert!(rows.iter().any(|(_, _, kind)| kind == "c"));

    for (table, name, kind) in &rows {
        let prefix = if kind == "u" { "uq" } else { "ck" };
        let expected = format!("{prefix}_{table}_");
        assert!(
            name.starts_with(&expected),
            "Constraint {name} on {table} should start with {expected}"
        );
    }
}

/// No VARCHAR columns; TEXT plus a `ck_` length check instead.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_varchar_columns(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, column_name
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND data_type = 'character varying'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name, column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(rows.is_empty(), "Found VARCHAR columns: {rows:?}");
}

/// Every foreign key column leads some index.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_fks_have_indexes(pool: PgPool) {
    let missing: Vec<(String, String)> = sqlx::query_as(
        "SELECT c.relname::text, a.attname::text
         FROM pg_constraint con
         JOIN pg_class c ON c.oid = con.conrelid
         JOIN pg_namespace n ON n.oid = c.relnamespace
         JOIN pg_attribute a ON a.attrelid = con.conrelid AND a.attnum = con.conkey[1]
         WHERE n.nspname = 'public'
           AND con.contype = 'f'
           AND NOT EXISTS (
               SELECT 1 FROM pg_index i
               WHERE i.indrelid = con.conrelid
                 AND i.indkey[0] = con.conkey[1]
           )
         ORDER BY 1, 2",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(missing.is_empty(), "FK columns without an index: {missing:?}");
}

/// Every foreign key states its ON DELETE rule.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_fks_have_explicit_delete_rule(pool: PgPool) {
    let rules: Vec<(String, String, String)> = sqlx::query_as(
        "SELECT tc.table_name::text, rc.constraint_name::text, rc.delete_rule::text
         FROM information_schema.referential_constraints rc
         JOIN information_schema.table_constraints tc
             ON rc.constraint_name = tc.constraint_name
             AND rc.constraint_schema = tc.table_schema
         WHERE rc.constraint_schema = 'public'
         ORDER BY 1, 2",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rules.is_empty());
    for (table, constraint, delete_rule) in &rules {
        assert_ne!(
            delete_rule, "NO ACTION",
            "FK {constraint} on {table} has no explicit ON DELETE rule"
        );
    }
}
