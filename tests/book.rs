use std::fs;

use reducta::evaluate;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_expression_blocks(&content).into_iter().enumerate() {
            for line in block.lines().filter(|line| !line.trim().is_empty()) {
                count += 1;
                if let Err(e) = evaluate(line, false) {
                    panic!("Expression {} in {:?} failed:\n{}\nError: {}",
                           i + 1,
                           path,
                           line,
                           e);
                }
            }
        }
    }

    assert!(count > 0, "No expression examples found in book/src");
}

fn extract_expression_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```reducta") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}
