use std::fs::{self, File};
use std::io::{self, Write};

fn main() -> io::Result<()> {
    fs::create_dir_all("testdata/nested/deep")?;

    // Empty placeholders for the filler to populate
    File::create("testdata/fixture_a.txt")?;
    File::create("testdata/nested/fixture_b.bin")?;
    File::create("testdata/nested/deep/fixture_c.dat")?;

    // One pre-filled file to exercise the empty-files-only mode
    let mut file = File::create("testdata/already_filled.txt")?;
    file.write_all(b"hello")?;

    println!("Seeded testdata/ with empty fixtures and one pre-filled file.");
    Ok(())
}
