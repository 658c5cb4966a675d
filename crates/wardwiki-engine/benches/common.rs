// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_wiki_content(size: usize) -> String {
    let base = "Welcome to the WardWiki, see RecentChanges and http://c2.com for more.\r\n\r\n* '''Bold''' item with ''italic'' text\r\n** Nested StartingPoints item\r\n*** Deeper still\r\n* Back to the top\r\n----\r\nIt''''''s a plain paragraph with ordinary words and no markup at all.\r\n\r\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_deep_list(depth: usize, items: usize) -> String {
    let mut content = String::new();
    for i in 0..items {
        let level = i % depth + 1;
        content.push_str(&"*".repeat(level));
        content.push_str(&format!(" item {i} at level {level} LinkedPage\r\n"));
    }
    content
}
