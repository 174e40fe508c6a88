use std::path::PathBuf;

use pkg_probe::{split_flags, subtract_flags, Library};

#[test]
fn test_split_flags() {
    assert_eq!(
        split_flags("  -I/usr/include/taglib   -DTAGLIB_STATIC\n"),
        vec!["-I/usr/include/taglib", "-DTAGLIB_STATIC"]
    );
    assert!(split_flags("").is_empty());
    assert!(split_flags("   \t\n").is_empty());
}

#[test]
fn test_subtract_removes_excluded_tokens() {
    assert_eq!(subtract_flags("-L/usr/lib -ltag -lz", "-ltag -lz"), "-L/usr/lib");
    assert_eq!(subtract_flags("-L/usr/lib -ltag", "-lz"), "-L/usr/lib -ltag");
}

#[test]
fn test_subtract_with_empty_exclusion_keeps_everything() {
    assert_eq!(subtract_flags("-L/usr/lib -ltag", ""), "-L/usr/lib -ltag");
}

#[test]
fn test_subtract_preserves_order_and_normalizes_whitespace() {
    assert_eq!(
        subtract_flags("  -L/a\t-lx   -L/b  -ly ", "-lx"),
        "-L/a -L/b -ly"
    );
}

#[test]
fn test_subtract_result_shares_no_token_with_exclusion() {
    let full = "-L/usr/lib -ltag -lz -pthread";
    let exclude = "-ltag -lz";
    let remaining = subtract_flags(full, exclude);
    for token in split_flags(&remaining) {
        assert!(
            !split_flags(exclude).contains(&token),
            "token {} survived subtraction",
            token
        );
    }
}

#[test]
fn test_library_parsed_views() {
    let library = Library {
        compile_flags: "-I/usr/include/taglib -DTAGLIB_STATIC -I/opt/include".to_string(),
        link_flags: "-L/usr/lib -L/opt/lib -pthread".to_string(),
        library_flags: "-ltag -lz".to_string(),
    };

    assert_eq!(
        library.include_paths(),
        vec![
            PathBuf::from("/usr/include/taglib"),
            PathBuf::from("/opt/include")
        ]
    );
    assert_eq!(
        library.link_paths(),
        vec![PathBuf::from("/usr/lib"), PathBuf::from("/opt/lib")]
    );
    assert_eq!(library.libs(), vec!["tag".to_string(), "z".to_string()]);
}

#[test]
fn test_library_views_on_empty_flags() {
    let library = Library::default();
    assert!(library.include_paths().is_empty());
    assert!(library.link_paths().is_empty());
    assert!(library.libs().is_empty());
}
