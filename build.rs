fn main() {
    // Validate the embedded writing tables at compile time.
    validate_toml(
        "src/writing/default_writing.toml",
        include_str!("src/writing/default_writing.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
