use std::sync::Arc;

use rowmap::drivers::{InMemoryTestDriver, InMemoryTestResponseBuilder};
use rowmap::types::{RawQueryResult, SqlValue};
use rowmap::{prepare, prepare_with_context, query, Context, Error, Named, Row};

const SELECT_TWO: &str = "SELECT id, col FROM test WHERE id IN ($1, $2) ORDER BY id DESC";

#[derive(Debug, Clone, PartialEq)]
struct TestStruct {
    id: i64,
    col: String,
}

fn test_struct(row: &Row) -> rowmap::Result<TestStruct> {
    Ok(TestStruct {
        id: row.get(0usize)?,
        col: row.get(1usize)?,
    })
}

fn rows_2_1() -> RawQueryResult {
    InMemoryTestResponseBuilder::new()
        .columns(&["id", "col"])
        .row(vec![2i64.into(), "Row 2".into()])
        .row(vec![1i64.into(), "Row 1".into()])
        .build()
}

fn no_rows() -> RawQueryResult {
    InMemoryTestResponseBuilder::new()
        .columns(&["id", "col"])
        .build()
}

fn params_1_2() -> Vec<SqlValue> {
    vec![1i64.into(), 2i64.into()]
}

#[tokio::test]
async fn test_stmt_query() {
    let driver = InMemoryTestDriver::new().with_response(rows_2_1());

    let stmt = prepare(&driver, test_struct, SELECT_TWO).await.unwrap();
    let entities = stmt.query(&params_1_2()).await.unwrap();

    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0].id, 2);
    assert_eq!(entities[0].col, "Row 2");
    assert_eq!(entities[1].id, 1);
    assert_eq!(entities[1].col, "Row 1");

    assert_eq!(stmt.sql(), SELECT_TWO);
    assert_eq!(driver.prepared_statements(), vec![SELECT_TWO.to_string()]);
    let last = driver.last_query().unwrap();
    assert!(last.prepared);
    assert_eq!(last.params, params_1_2());
    assert_eq!(driver.open_cursors(), 0);
}

#[tokio::test]
async fn test_stmt_query_no_rows() {
    let driver = InMemoryTestDriver::new().with_response(no_rows());

    let stmt = prepare(&driver, test_struct, SELECT_TWO).await.unwrap();
    let entities = stmt.query(&params_1_2()).await.unwrap();

    assert!(entities.is_empty());
}

#[tokio::test]
async fn test_stmt_query_row() {
    let driver = InMemoryTestDriver::new().with_response(rows_2_1());

    let stmt = prepare(&driver, test_struct, SELECT_TWO).await.unwrap();
    let entity = stmt.query_row(&params_1_2()).await.unwrap();

    assert_eq!(entity.id, 2);
    assert_eq!(entity.col, "Row 2");
}

#[tokio::test]
async fn test_stmt_query_row_no_rows() {
    let driver = InMemoryTestDriver::new().with_response(no_rows());

    let stmt = prepare(&driver, Named::new("TestStruct", test_struct), SELECT_TWO)
        .await
        .unwrap();
    let err = stmt.query_row(&params_1_2()).await.unwrap_err();

    assert!(err.is_no_rows());
    assert_eq!(err.entity_type(), Some("TestStruct"));
}

#[tokio::test]
async fn test_stmt_reused_across_executions() {
    let driver = InMemoryTestDriver::new().with_responses([rows_2_1(), no_rows(), rows_2_1()]);

    let stmt = prepare(&driver, test_struct, SELECT_TWO).await.unwrap();
    assert_eq!(stmt.query(&params_1_2()).await.unwrap().len(), 2);
    assert!(stmt.query(&[5i64.into(), 6i64.into()]).await.unwrap().is_empty());
    assert_eq!(stmt.query_row(&params_1_2()).await.unwrap().id, 2);

    driver.assert_query_count(3);
    assert_eq!(driver.prepared_statements().len(), 1);
}

#[tokio::test]
async fn test_stmt_query_with_context_cancelled() {
    let driver = InMemoryTestDriver::new().with_response(rows_2_1());
    let stmt = prepare(&driver, test_struct, SELECT_TWO).await.unwrap();

    let ctx = Context::background();
    ctx.cancel();

    let err = stmt
        .query_with_context(&ctx, &params_1_2())
        .await
        .unwrap_err();
    assert!(matches!(err.root(), Error::Cancelled));
    assert!(err.entity_type().is_some());

    let err = stmt
        .query_row_with_context(&ctx, &params_1_2())
        .await
        .unwrap_err();
    assert!(matches!(err.root(), Error::Cancelled));
}

#[tokio::test]
async fn test_prepare_failure_is_not_annotated() {
    let driver = InMemoryTestDriver::new().with_prepare_error("syntax error at or near \"SELEC\"");

    let err = prepare(&driver, test_struct, "SELEC id FROM test")
        .await
        .err()
        .unwrap();

    assert!(matches!(err, Error::PrepareFailed(_)));
    assert_eq!(err.entity_type(), None);
}

#[tokio::test]
async fn test_prepare_with_cancelled_context() {
    let driver = InMemoryTestDriver::new();
    let ctx = Context::background();
    ctx.cancel();

    let err = prepare_with_context(&ctx, &driver, test_struct, SELECT_TWO)
        .await
        .err()
        .unwrap();

    assert!(matches!(err, Error::Cancelled));
    assert!(driver.prepared_statements().is_empty());
}

#[tokio::test]
async fn test_stmt_close_then_query_fails() {
    let driver = InMemoryTestDriver::new().with_response(rows_2_1());
    let stmt = prepare(&driver, test_struct, SELECT_TWO).await.unwrap();

    stmt.close().await.unwrap();
    let err = stmt.query(&params_1_2()).await.unwrap_err();

    assert!(matches!(err.root(), Error::StatementClosed));
    driver.assert_query_count(0);
}

#[tokio::test]
async fn test_prepared_matches_ad_hoc() {
    let driver = InMemoryTestDriver::new().with_responses([rows_2_1(), rows_2_1()]);

    let ad_hoc = query(&driver, &test_struct, SELECT_TWO, &params_1_2())
        .await
        .unwrap();
    let stmt = prepare(&driver, test_struct, SELECT_TWO).await.unwrap();
    let prepared = stmt.query(&params_1_2()).await.unwrap();

    assert_eq!(ad_hoc, prepared);
    let queries = driver.recorded_queries();
    assert_eq!(queries[0].sql, queries[1].sql);
    assert_eq!(queries[0].params, queries[1].params);
}

#[tokio::test]
async fn test_stmt_shared_between_tasks() {
    let driver = InMemoryTestDriver::new().with_default_response(rows_2_1());
    let stmt = Arc::new(prepare(&driver, test_struct, SELECT_TWO).await.unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let stmt = Arc::clone(&stmt);
            tokio::spawn(async move { stmt.query(&params_1_2()).await })
        })
        .collect();

    for handle in handles {
        let entities = handle.await.unwrap().unwrap();
        assert_eq!(entities.len(), 2);
    }
    driver.assert_query_count(4);
    assert_eq!(driver.open_cursors(), 0);
}
