// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use platter::{DataSource, RecipeStore};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;
use tempfile::TempDir;

/// The sample dataset shipped with the crate
pub const SAMPLE_DATASET: &str = include_str!("../../data/recipes.json");

/// Write `content` to `recipes.json` inside a fresh temp dir.
///
/// Returns (TempDir, path) - keep the TempDir alive to prevent cleanup.
pub fn write_dataset(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("recipes.json");
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}

/// Load the sample dataset from a temp file through the normal load path.
pub fn sample_store() -> RecipeStore {
    let (_dir, path) = write_dataset(SAMPLE_DATASET);
    RecipeStore::try_load(&DataSource::Path(path)).unwrap()
}

/// Ids of a result list, in order
pub fn ids(recipes: &[&platter::Recipe]) -> Vec<u32> {
    recipes.iter().map(|r| r.id).collect()
}

/// Serve one fixed HTTP response on a local port, `connections` times.
///
/// Returns the URL of `/recipes.json` on that server. The server thread
/// exits after answering the given number of requests.
pub fn serve_http(status: &str, body: &str, connections: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    thread::spawn(move || {
        for stream in listener.incoming().take(connections) {
            let mut stream = stream.unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            // Drain the request head before answering
            while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                line.clear();
            }
            stream.write_all(response.as_bytes()).unwrap();
        }
    });

    format!("http://{addr}/recipes.json")
}
