//! Embeds the bundled word lists
//!
//! `data/words.txt` is the playable dictionary and `data/common.txt` the
//! reference table for rarity scoring. Each becomes a `&[&str]` constant plus a
//! count in `$OUT_DIR`, pulled in by `dictionary::embedded`. Blank lines and
//! `#` comments are skipped; entries are lower-cased.

use std::env;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// (source file, generated file, constant name, description)
const LISTS: [(&str, &str, &str, &str); 2] = [
    ("data/words.txt", "words.rs", "WORDS", "Dictionary words the solver may find"),
    ("data/common.txt", "common.rs", "COMMON", "Everyday words; anything else counts as uncommon"),
];

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = env::var("OUT_DIR")?;
    for (source, target, name, description) in LISTS {
        println!("cargo:rerun-if-changed={source}");
        let text = fs::read_to_string(source).map_err(|e| format!("reading {source}: {e}"))?;
        fs::write(Path::new(&out_dir).join(target), render(&text, name, description)?)?;
    }
    Ok(())
}

fn render(text: &str, name: &str, description: &str) -> Result<String, std::fmt::Error> {
    let entries: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect();

    let mut code = String::new();
    writeln!(code, "/// {description} ({} entries)", entries.len())?;
    writeln!(code, "pub const {name}: &[&str] = &[")?;
    for entry in &entries {
        writeln!(code, "    {entry:?},")?;
    }
    writeln!(code, "];")?;
    writeln!(code)?;
    writeln!(code, "pub const {name}_COUNT: usize = {};", entries.len())?;
    Ok(code)
}
