//! End-to-end tests for the `seat-allocator` binary.

use std::io::Write;
use std::process::{Command, Output};

use speculate2::speculate;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_seat-allocator"))
        .args(args)
        .env_remove("SEAT_ALLOCATOR_WINDOW_SEATS")
        .output()
        .expect("Failed to run seat-allocator")
}

fn input_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write");
    file
}

speculate! {
    describe "cli" {
        it "prints the layout and satisfaction" {
            let file = input_file("4 4\n1W 2 3\n4 5 6 7\n8\n11W 9 10\n12W\n13 14\n15 16\n");
            let output = run_cli(&[file.path().to_str().unwrap()]);

            assert!(output.status.success());
            assert_eq!(
                String::from_utf8_lossy(&output.stdout),
                "4 5 6 7\n1 2 3 12\n11 9 10 8\n13 14 15 16\n100.0%\n"
            );
        }

        it "prints a JSON report" {
            let file = input_file("1 2\n4W 1 3\n");
            let output = run_cli(&[file.path().to_str().unwrap(), "--json"]);

            assert!(output.status.success());
            let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Invalid JSON");
            assert_eq!(report["rows"], serde_json::json!([[4, 1]]));
            assert_eq!(report["satisfaction"], "16.67%");
            assert_eq!(report["passenger_count"], 3);
        }

        it "exits with status 1 without an input file" {
            let output = run_cli(&[]);
            assert_eq!(output.status.code(), Some(1));
            assert!(String::from_utf8_lossy(&output.stderr).contains("Please provide input file"));
        }

        it "exits with status 1 on invalid input" {
            let file = input_file("0 4\n1\n");
            let path = file.path().to_str().unwrap();
            let output = run_cli(&[path]);

            assert_eq!(output.status.code(), Some(1));
            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(stderr.contains(&format!("reading {}", path)));
            assert!(stderr.contains("Plane dimensions must be >= 1"));
            assert!(output.stdout.is_empty());
        }
    }
}
