//! Tests for blocking prepared statements.

mod common;

use common::{Failure, MockEngine};
use ramsql_client::sync::Conn;
use ramsql_client::{Dialect, Error, ExecResult, ParamCount, StatementState, Value};

fn sent(conn: Conn<MockEngine>) -> Vec<String> {
    conn.into_inner().unwrap().sent
}

#[test]
fn test_exec_numbered() {
    let conn = Conn::new(MockEngine::new());

    let mut stmt = conn
        .prepare("SELECT * FROM t WHERE a = $1 AND b = $2")
        .unwrap();
    assert_eq!(stmt.param_count(), ParamCount::Known(2));
    assert_eq!(stmt.dialect(), Dialect::Numbered);
    assert_eq!(stmt.state(), StatementState::Prepared);

    let result = stmt.exec(("x", 5_i32)).unwrap();
    assert_eq!(result, ExecResult::new(1, 1));
    assert_eq!(stmt.state(), StatementState::Idle);
    drop(stmt);

    assert_eq!(sent(conn), vec!["SELECT * FROM t WHERE a = 'x' AND b = 5"]);
}

#[test]
fn test_exec_sequential() {
    let conn = Conn::new(MockEngine::new());

    let mut stmt = conn.prepare("INSERT INTO t VALUES (?, ?)").unwrap();
    assert_eq!(stmt.param_count(), ParamCount::Known(2));
    assert_eq!(stmt.dialect(), Dialect::Sequential);
    stmt.exec(("hello world", 42_i64)).unwrap();
    drop(stmt);

    assert_eq!(sent(conn), vec!["INSERT INTO t VALUES ('hello world', 42)"]);
}

#[test]
fn test_query_returns_rows() {
    let rows = vec![
        vec![Value::Int(1), Value::Text("alice".into())],
        vec![Value::Int(2), Value::Text("bob".into())],
    ];
    let conn = Conn::new(MockEngine::with_rows(rows.clone()));

    let got = conn
        .query("SELECT id, name FROM user WHERE id > ?", (0_i32,))
        .unwrap();
    assert_eq!(got, rows);
    assert_eq!(sent(conn), vec!["SELECT id, name FROM user WHERE id > 0"]);
}

#[test]
fn test_claim_held_until_exec() {
    let conn = Conn::new(MockEngine::new());
    assert!(!conn.is_claimed());

    let mut stmt = conn.prepare("DELETE FROM t").unwrap();
    assert!(conn.is_claimed());

    stmt.exec(()).unwrap();
    assert!(!conn.is_claimed());
}

#[test]
fn test_claim_released_on_send_failure() {
    let conn = Conn::new(MockEngine::failing(Failure::Send));

    let mut stmt = conn.prepare("DELETE FROM t").unwrap();
    let err = stmt.exec(()).unwrap_err();
    assert!(matches!(err, Error::Send(_)));
    assert!(!conn.is_claimed());
    assert!(!conn.is_broken());
}

#[test]
fn test_claim_released_on_receive_failure() {
    let conn = Conn::new(MockEngine::failing(Failure::Receive));

    let mut stmt = conn.prepare("SELECT * FROM missing").unwrap();
    let err = stmt.query(()).unwrap_err();
    assert!(matches!(err, Error::Receive(_)));
    assert_eq!(stmt.state(), StatementState::Idle);
    assert!(!conn.is_claimed());
}

#[test]
fn test_io_failure_marks_broken() {
    let conn = Conn::new(MockEngine::failing(Failure::SendIo));

    let err = conn.exec("DELETE FROM t", ()).unwrap_err();
    assert!(err.is_connection_broken());
    assert!(conn.is_broken());
    assert!(!conn.is_claimed());
}

#[test]
fn test_index_out_of_range_sends_nothing() {
    let conn = Conn::new(MockEngine::new());

    let mut stmt = conn.prepare("SELECT $1, $2, $3").unwrap();
    let err = stmt.exec((1_i32, 2_i32)).unwrap_err();
    assert!(matches!(
        err,
        Error::PlaceholderIndexOutOfRange {
            index: 3,
            supplied: 2
        }
    ));
    assert!(!conn.is_claimed());
    drop(stmt);

    assert!(sent(conn).is_empty());
}

#[test]
fn test_parse_failure_sends_nothing() {
    let conn = Conn::new(MockEngine::new());

    let err = conn
        .exec("SELECT $1, $99999999999999999999999", (1_i32,))
        .unwrap_err();
    assert!(matches!(err, Error::PlaceholderParse { .. }));
    assert!(sent(conn).is_empty());
}

#[test]
fn test_exec_twice_takes_fresh_claim() {
    let conn = Conn::new(MockEngine::new());

    let mut stmt = conn.prepare("UPDATE t SET a = $1").unwrap();
    let first = stmt.exec((1_i32,)).unwrap();
    assert!(!conn.is_claimed());
    let second = stmt.exec((2_i32,)).unwrap();
    assert!(!conn.is_claimed());
    assert_eq!(first.last_insert_id, 1);
    assert_eq!(second.last_insert_id, 2);
    drop(stmt);

    assert_eq!(sent(conn), vec!["UPDATE t SET a = 1", "UPDATE t SET a = 2"]);
}

#[test]
fn test_close_unsupported() {
    let conn = Conn::new(MockEngine::new());

    let mut stmt = conn.prepare("SELECT 1").unwrap();
    let err = stmt.close().unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));

    // still usable: the claim was not given up
    assert!(conn.is_claimed());
    stmt.query(()).unwrap();
    assert!(stmt.close().is_err());
}

#[test]
fn test_drop_without_exec_releases_claim() {
    let conn = Conn::new(MockEngine::new());

    let stmt = conn.prepare("SELECT 1").unwrap();
    assert!(conn.is_claimed());
    drop(stmt);
    assert!(!conn.is_claimed());

    conn.exec("DELETE FROM t", ()).unwrap();
}

#[test]
fn test_check_arg_count() {
    let conn = Conn::with_opts(MockEngine::new(), "ramsql://testdb?check_arg_count=true").unwrap();
    assert!(conn.opts().check_arg_count);

    let err = conn.exec("SELECT $1, $2", (1_i32,)).unwrap_err();
    assert!(matches!(
        err,
        Error::ArgumentCount {
            expected: 2,
            supplied: 1
        }
    ));
    assert!(!conn.is_claimed());
    assert!(sent(conn).is_empty());
}

#[test]
fn test_sequential_count_mismatch() {
    let conn = Conn::new(MockEngine::new());

    let err = conn.exec("INSERT INTO t VALUES (?, ?)", (1_i32,)).unwrap_err();
    assert!(matches!(err, Error::ArgumentCount { .. }));
    assert!(err.is_binding());
}

#[test]
fn test_prepare_waits_for_previous_statement() {
    let conn = Conn::new(MockEngine::new());

    let mut first = conn.prepare("INSERT INTO t VALUES (?)").unwrap();
    std::thread::scope(|s| {
        let handle = s.spawn(|| conn.exec("INSERT INTO t VALUES (?)", (2_i32,)));
        first.exec((1_i32,)).unwrap();
        handle.join().unwrap().unwrap();
    });
    drop(first);

    assert_eq!(
        sent(conn),
        vec!["INSERT INTO t VALUES (1)", "INSERT INTO t VALUES (2)"]
    );
}

#[test]
fn test_many_threads_serialized() {
    let conn = Conn::new(MockEngine::new());

    std::thread::scope(|s| {
        for i in 0..8_i32 {
            let conn = &conn;
            s.spawn(move || {
                let mut stmt = conn.prepare("INSERT INTO t VALUES ($1)").unwrap();
                assert!(conn.is_claimed());
                stmt.exec((i,)).unwrap();
            });
        }
    });

    let mut queries = sent(conn);
    queries.sort();
    let mut expected: Vec<String> = (0..8)
        .map(|i| format!("INSERT INTO t VALUES ({})", i))
        .collect();
    expected.sort();
    assert_eq!(queries, expected);
}
