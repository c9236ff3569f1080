mod common;

use sparkrs::{col, lit, regexp_replace, when, Error, Result, Value};

fn strings(values: &[Value]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_regexp_replace_only_touches_matching_rows() -> Result<()> {
    let df = common::address_frame()?;
    let replaced = df.with_column("address", regexp_replace("address", "Rd", "Road"))?;

    assert_eq!(replaced.columns(), vec!["id", "address", "state"]);
    assert_eq!(
        strings(replaced.column("address")?.values()),
        vec!["14851 Jeffrey Road", "43421 Margarita St", "13111 Siemon Ave"]
    );
    // other columns are untouched
    assert_eq!(replaced.column("state")?.values(), df.column("state")?.values());
    Ok(())
}

#[test]
fn test_conditional_replace_by_suffix() -> Result<()> {
    let df = common::address_frame()?;
    let address = col("address");
    let expr = when(
        address.clone().ends_with("Rd"),
        regexp_replace(address.clone(), "Rd", "Road"),
    )
    .when(
        address.clone().ends_with("St"),
        regexp_replace(address.clone(), "St", "Street"),
    )
    .when(
        address.clone().ends_with("Ave"),
        regexp_replace(address.clone(), "Ave", "Avenue"),
    )
    .otherwise(address);

    let out = df.with_column("address", expr)?;
    assert_eq!(
        strings(out.column("address")?.values()),
        vec![
            "14851 Jeffrey Road",
            "43421 Margarita Street",
            "13111 Siemon Avenue"
        ]
    );

    let rendered = out.show_string(20, 0);
    assert!(rendered.contains("|2  |43421 Margarita Street|NY   |"));
    Ok(())
}

#[test]
fn test_when_without_otherwise_yields_null() -> Result<()> {
    let df = common::address_frame()?;
    let out = df.with_column(
        "is_road",
        when(col("address").ends_with("Rd"), lit("yes")),
    )?;
    assert_eq!(
        out.column("is_road")?.values(),
        &[Value::from("yes"), Value::Null, Value::Null]
    );
    Ok(())
}

#[test]
fn test_capture_groups_and_invalid_pattern() -> Result<()> {
    let df = common::address_frame()?;
    let out = df.with_column(
        "address",
        regexp_replace("address", r"^(\d+) (.*)$", "$2 #$1"),
    )?;
    assert_eq!(
        out.column("address")?.get(0),
        Some(&Value::from("Jeffrey Rd #14851"))
    );

    let bad = df.with_column("address", regexp_replace("address", "(", "x"));
    assert!(matches!(bad, Err(Error::InvalidRegex(_))));
    Ok(())
}

#[test]
fn test_group_reference_followed_by_text() -> Result<()> {
    let df = common::address_frame()?;
    let out = df.with_column("address", regexp_replace("address", r"^(\d)\d*", "$1st"))?;
    assert_eq!(
        out.column("address")?.get(0),
        Some(&Value::from("1st Jeffrey Rd"))
    );

    let escaped = df.with_column("address", regexp_replace("address", r"^\d+", r"\$$0"))?;
    assert_eq!(
        escaped.column("address")?.get(2),
        Some(&Value::from("$13111 Siemon Ave"))
    );

    let missing = df.with_column("address", regexp_replace("address", r"(\d+)", "$2"));
    assert!(matches!(missing, Err(Error::InvalidRegex(_))));
    Ok(())
}
