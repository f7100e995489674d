use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads a file into its lines, in order, without trailing newlines.
pub fn lines(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_in_order() {
        let path = std::env::temp_dir().join("file-lines-in-order.txt");
        std::fs::write(&path, "alpha\nbeta\ngamma\n").unwrap();
        assert_eq!(lines(&path).unwrap(), ["alpha", "beta", "gamma"]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn no_trailing_newline_keeps_last_line() {
        let path = std::env::temp_dir().join("file-lines-no-trailing.txt");
        std::fs::write(&path, "one\ntwo").unwrap();
        assert_eq!(lines(&path).unwrap(), ["one", "two"]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(lines("no/such/file.txt").is_err());
    }
}
