use pretty_assertions::assert_eq;

use super::*;

#[test]
fn missing_keys_use_defaults() {
    let options = SniffOptions::new();
    assert_eq!(options.get_u32("lineLimit", 80).unwrap(), 80);
    assert!(options.get_bool("strictClassFileNames", true).unwrap());
    assert_eq!(options.get_list("validDirectives", &["ticks"]).unwrap(), vec!["ticks"]);
}

#[test]
fn json_values_deserialize_untagged() {
    let options: SniffOptions = serde_json::from_str(
        r#"{ "lineLimit": 120, "strict": "false", "names": ["A", "B"], "csv": "x, y,,z" }"#,
    )
    .unwrap();
    assert_eq!(options.get_u32("lineLimit", 80).unwrap(), 120);
    assert!(!options.get_bool("strict", true).unwrap());
    assert_eq!(options.get_list("names", &[]).unwrap(), vec!["A", "B"]);
    assert_eq!(options.get_list("csv", &[]).unwrap(), vec!["x", "y", "z"]);
}

#[test]
fn wrong_type_names_key_and_value() {
    let options = SniffOptions::new().with("lineLimit", OptionValue::Int(-1));
    assert_eq!(
        options.get_u32("lineLimit", 80),
        Err(OptionError::Invalid {
            key: "lineLimit".to_owned(),
            expected: "a non-negative integer",
            found: "-1".to_owned(),
        })
    );
    let options = SniffOptions::new().with("flag", OptionValue::Text("maybe".to_owned()));
    let err = options.get_bool("flag", false).unwrap_err();
    assert_eq!(
        err.to_string(),
        "option `flag` expects a boolean, found \"maybe\""
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let options = SniffOptions::new().with("lineLimt", OptionValue::Int(90));
    let err = options.expect_keys(&["lineLimit", "absoluteLineLimit"]).unwrap_err();
    assert_eq!(
        err,
        OptionError::Unknown {
            key: "lineLimt".to_owned(),
            known: "lineLimit, absoluteLineLimit".to_owned(),
        }
    );
}
