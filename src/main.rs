use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::random;
use walkdir::WalkDir;

const PAYLOAD_LEN: usize = 100;
const DEFAULT_ROOT: &str = "testdata";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    AllFiles,
    EmptyFilesOnly,
}

// Collects the regular files under the root that are eligible in the given
// mode. The set is fixed here, before any write happens; files appearing
// later are not picked up.
fn collect_files(root: &Path, mode: Mode) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if mode == Mode::EmptyFilesOnly && entry.metadata()?.len() != 0 {
            continue;
        }
        files.push(entry.into_path());
    }
    Ok(files)
}

// Draws a fresh 100-byte random payload and encodes it as padded base64 text
fn random_payload() -> String {
    let payload: Vec<u8> = (0..PAYLOAD_LEN).map(|_| random()).collect();
    BASE64.encode(payload)
}

// Overwrites every eligible file under the root with an independent encoded
// payload, returning how many files were written. Stops at the first I/O
// failure; files written before the failure keep their new contents.
fn fill_tree(root: &Path, mode: Mode) -> io::Result<usize> {
    let files = collect_files(root, mode)?;
    for path in &files {
        fs::write(path, random_payload())?;
    }
    Ok(files.len())
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut mode = Mode::EmptyFilesOnly;
    let mut root = DEFAULT_ROOT.to_string();
    for arg in &args[1..] {
        match arg.as_str() {
            "--all" => mode = Mode::AllFiles,
            s if !s.starts_with('-') => root = s.to_string(),
            _ => {
                eprintln!("Usage: {} [--all] [root]", args[0]);
                process::exit(1);
            }
        }
    }

    if !Path::new(&root).is_dir() {
        eprintln!("Error: Directory '{}' not found.", root);
        process::exit(1);
    }

    let filled = fill_tree(Path::new(&root), mode)?;
    println!("Filled {} files under {}", filled, root);
    Ok(())
}
