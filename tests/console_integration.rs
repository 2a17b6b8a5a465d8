use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

use chess_rules::board::{Board, Player, StateCodec};

fn run_session(input: &[u8]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_chess_rules");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn console binary");

    child.stdin.as_mut().unwrap().write_all(input).unwrap();

    let output = child.wait_with_output().expect("failed to read output");
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn console_setup_exports_starting_state() {
    let lines = run_session(b"setup\nstate\nquit\n");
    assert_eq!(lines[0], "ok");

    let state = &lines[1];
    assert_eq!(state.len(), 64);

    let mut board = Board::empty();
    board.set_state_string(state, StateCodec::Full).unwrap();
    assert_eq!(board, Board::starting_position());
    for col in 0..8 {
        assert_eq!(board.owner_at(col, 0), Some(Player::White));
        assert_eq!(board.owner_at(col, 7), Some(Player::Black));
    }
}

#[test]
fn console_setup_then_teardown_clears_board() {
    let lines = run_session(b"setup\nteardown\nstate\nowner a1\nowner h8\nquit\n");
    let empty = "0".repeat(64);
    assert_eq!(lines, vec!["ok", "ok", empty.as_str(), "none", "none"]);
}

#[test]
fn console_reports_errors_and_keeps_going() {
    let lines = run_session(b"setup\nload 123\nmove e7 e5\nbogus\nowner e2\nquit\n");
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("error:"), "got {}", lines[1]);
    assert!(lines[1].contains("64"));
    assert!(lines[2].starts_with("error:"));
    assert!(lines[3].starts_with("error:"));
    assert_eq!(lines[4], "white");
}

#[test]
fn console_turns_alternate_over_moves() {
    let exe = env!("CARGO_BIN_EXE_chess_rules");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn console binary");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let mut reader = BufReader::new(stdout);

    stdin
        .write_all(b"setup\nselect e7\nmove e2 e4\nselect e7\nstatus\n")
        .unwrap();

    let mut lines = Vec::new();
    while lines.len() < 5 {
        let mut line = String::new();
        let bytes = reader.read_line(&mut line).expect("read failed");
        if bytes == 0 {
            break;
        }
        lines.push(line.trim_end().to_string());
    }

    stdin.write_all(b"quit\n").unwrap();
    let _ = child.wait();

    assert_eq!(
        lines,
        vec![
            "ok",
            "no",
            "ok",
            "yes",
            "phase playable turn black winner none draw false"
        ]
    );
}

#[test]
fn console_end_of_input_terminates() {
    let lines = run_session(b"setup\nfen 8/8/8/8/8/8/8/R7\nowner a1\nowner b1\n");
    assert_eq!(lines, vec!["ok", "ok", "white", "none"]);
}
