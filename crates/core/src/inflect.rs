//! Identifier case conversion

use regex::Regex;
use std::sync::LazyLock;

static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid regex"));
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("valid regex"));

/// Convert a mixed-case identifier into lowercase snake case.
///
/// `MyHTTPServer` becomes `my_http_server` and `Simple-Name` becomes
/// `simple_name`.
pub fn underscore(word: &str) -> String {
    let word = ACRONYM_BOUNDARY.replace_all(word, "${1}_${2}");
    let word = WORD_BOUNDARY.replace_all(&word, "${1}_${2}");
    word.replace('-', "_").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscore_examples() {
        assert_eq!(underscore("MyHTTPServer"), "my_http_server");
        assert_eq!(underscore("Simple-Name"), "simple_name");
        assert_eq!(underscore("DeviceType"), "device_type");
        assert_eq!(underscore("IOError"), "io_error");
        assert_eq!(underscore("version2Update"), "version2_update");
        assert_eq!(underscore("already_snake"), "already_snake");
        assert_eq!(underscore(""), "");
    }

    #[test]
    fn test_underscore_is_idempotent() {
        for word in [
            "MyHTTPServer",
            "Simple-Name",
            "pybuilder-pycharm-workspace",
            "XMLHttp-Request2Go",
            "ABC",
            "a-B-c",
        ] {
            let once = underscore(word);
            assert_eq!(underscore(&once), once, "not idempotent for {word}");
        }
    }
}
