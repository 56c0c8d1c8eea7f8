use std::{fs, path::PathBuf};

/// Reads `fixtures/<name>.hex`: whitespace separated hex bytes, `#` starts a
/// comment that runs to the end of the line
pub fn load_fixture(name: &str) -> Vec<u8> {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "fixtures", &format!("{}.hex", name)]
        .iter()
        .collect();
    let contents = fs::read_to_string(&path)
        .unwrap_or_else(|error| panic!("cannot read fixture {}: {}", path.display(), error));

    contents
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace)
        .map(|byte| {
            u8::from_str_radix(byte, 16)
                .unwrap_or_else(|_| panic!("bad byte {:?} in fixture {}", byte, name))
        })
        .collect()
}
