//! Build script to generate embedded word lists
//!
//! Reads the per-length word list files under `data/{len}/` and generates
//! Rust source code with const arrays, one pair per supported word length.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORD_LENGTHS: [usize; 4] = [4, 5, 6, 7];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("wordlists.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for length in WORD_LENGTHS {
        generate_word_list(
            &mut output,
            &format!("data/{length}/answers.txt"),
            &format!("ANSWERS_{length}"),
            &format!("Target words with {length} letters"),
            length,
        );
        generate_word_list(
            &mut output,
            &format!("data/{length}/allowed.txt"),
            &format!("ALLOWED_{length}"),
            &format!("Extra accepted guesses with {length} letters (answers excluded)"),
            length,
        );

        println!("cargo:rerun-if-changed=data/{length}/answers.txt");
        println!("cargo:rerun-if-changed=data/{length}/allowed.txt");
    }
}

fn generate_word_list(
    output: &mut fs::File,
    input_path: &str,
    const_name: &str,
    doc_comment: &str,
    length: usize,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    for word in &words {
        assert_eq!(
            word.chars().count(),
            length,
            "{input_path}: '{word}' does not have {length} letters"
        );
    }

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
