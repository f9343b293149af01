mod common;
use common::engine;

use clap::Parser;
use rattendance::cli::parser::Cli;
use rattendance::cli::response::Response;
use rattendance::config::Config;
use rattendance::core::AttendanceEngine;
use rattendance::dispatch;
use rattendance::store::MemoryLedger;

fn run(args: &[&str], eng: &mut AttendanceEngine<MemoryLedger>) -> String {
    let cli = Cli::try_parse_from(std::iter::once("rattendance").chain(args.iter().copied()))
        .expect("valid arguments");
    match dispatch(&cli, &Config::default(), eng) {
        Ok(resp) => resp.to_json(false),
        Err(e) => Response::error(&e).to_json(false),
    }
}

#[test]
fn test_dispatch_maps_commands_to_payloads() {
    let mut eng = engine();

    assert_eq!(
        run(&["log", "Alice", "--at", "2024-03-04T16:30:00"], &mut eng),
        r#"{"duration":"0h 30m","date":"2024-03-04"}"#
    );
    assert_eq!(
        run(&["getlink"], &mut eng),
        r#"{"link":"memory://test"}"#
    );
    assert_eq!(
        run(&["stats"], &mut eng),
        r#"{"stats":{"Alice":"0h 30m"}}"#
    );
    assert_eq!(
        run(&["top"], &mut eng),
        r#"{"top_hours":{"name":"Alice","hours":"0h 30m"},"top_visits":{"name":"Alice","visits":1},"top_consecutive":{"name":"Alice","days":1}}"#
    );
    assert_eq!(
        run(&["clear", "--yes"], &mut eng),
        r#"{"status":"cleared","message":"All data has been cleared from the ledger."}"#
    );
    assert_eq!(
        run(&["top"], &mut eng),
        r#"{"top":"No attendance data available."}"#
    );
}

#[test]
fn test_unknown_command_is_rejected_by_the_parser() {
    assert!(Cli::try_parse_from(["rattendance", "dance"]).is_err());
    assert!(Cli::try_parse_from(["rattendance", "log"]).is_err());
}
