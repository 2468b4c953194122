use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use synqgen::cli::{ClassArgs, TestArgs};

fn make_args(bin: &str, args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from(bin)];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_class_basic_args() {
    let parsed = ClassArgs::try_parse_from(make_args("new-class", &["JobQueue"])).unwrap();

    assert_eq!(parsed.class_name, "JobQueue");
    assert_eq!(parsed.base_class, None);
    assert_eq!(parsed.root, None);
    assert!(!parsed.dry_run);
    assert!(!parsed.verbose);
}

#[test]
fn test_class_all_flags() {
    let args = make_args(
        "new-class",
        &[
            "--base-class",
            "AbstractJob",
            "--root",
            "/repo",
            "--dry-run",
            "--verbose",
            "WebDAVJob",
        ],
    );
    let parsed = ClassArgs::try_parse_from(args).unwrap();

    assert_eq!(parsed.class_name, "WebDAVJob");
    assert_eq!(parsed.base_class.as_deref(), Some("AbstractJob"));
    assert_eq!(parsed.root, Some(PathBuf::from("/repo")));
    assert!(parsed.dry_run);
    assert!(parsed.verbose);
}

#[test]
fn test_class_short_verbose() {
    let parsed = ClassArgs::try_parse_from(make_args("new-class", &["-v", "Foo"])).unwrap();
    assert!(parsed.verbose);
}

#[test]
fn test_class_missing_name() {
    assert!(ClassArgs::try_parse_from(make_args("new-class", &[])).is_err());
}

#[test]
fn test_class_base_requires_value() {
    assert!(ClassArgs::try_parse_from(make_args("new-class", &["Foo", "--base-class"])).is_err());
}

#[test]
fn test_test_args() {
    let parsed = TestArgs::try_parse_from(make_args("new-test", &["JobQueue"])).unwrap();
    assert_eq!(parsed.class_name, "JobQueue");
    assert!(!parsed.dry_run);
}

#[test]
fn test_test_args_reject_base_class() {
    let args = make_args("new-test", &["JobQueue", "--base-class", "AbstractJob"]);
    assert!(TestArgs::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    assert!(ClassArgs::try_parse_from(make_args("new-class", &["Foo", "Bar"])).is_err());
    assert!(TestArgs::try_parse_from(make_args("new-test", &["Foo", "Bar"])).is_err());
}
