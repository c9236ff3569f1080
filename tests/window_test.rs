mod common;

use sparkrs::{
    col, cume_dist, dense_rank, lag, lag_with_default, lead, ntile, percent_rank, rank,
    row_number, DataFrame, DataType, Error, Result, Value, Window, WindowSpec,
};

fn spec() -> WindowSpec {
    Window::partition_by(["department"]).order_by(["salary"])
}

fn some(values: &[i64]) -> Vec<Option<i64>> {
    values.iter().copied().map(Some).collect()
}

fn ints(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>> {
    Ok(df.column(name)?.values().iter().map(Value::as_i64).collect())
}

#[test]
fn test_row_number_within_department() -> Result<()> {
    let df = common::salary_frame()?;
    let out = df.with_column("row_number", row_number().over(&spec()))?;

    // input row order is preserved
    assert_eq!(out.column("employee_name")?.values(), df.column("employee_name")?.values());
    assert_eq!(
        ints(&out, "row_number")?,
        some(&[1, 5, 3, 1, 2, 2, 3, 2, 1, 4])
    );
    assert_eq!(out.schema().field("row_number")?.data_type, DataType::Integer);
    Ok(())
}

#[test]
fn test_rank_and_dense_rank_differ_only_on_ties() -> Result<()> {
    let df = common::salary_frame()?
        .with_column("rank", rank().over(&spec()))?
        .with_column("dense_rank", dense_rank().over(&spec()))?;

    assert_eq!(ints(&df, "rank")?, some(&[1, 5, 3, 1, 1, 2, 3, 2, 1, 3]));
    assert_eq!(
        ints(&df, "dense_rank")?,
        some(&[1, 3, 2, 1, 1, 2, 3, 2, 1, 2])
    );

    // Finance and Marketing have no salary ties, so both rankings agree there
    for row in df.collect() {
        if row.get(1) != Some(&Value::from("Sales")) {
            assert_eq!(row.get(3), row.get(4));
        }
    }
    Ok(())
}

#[test]
fn test_percent_rank_scaled() -> Result<()> {
    let df = common::salary_frame()?;
    let out = df.with_column("percent_rank", percent_rank().over(&spec()) * 100)?;
    let values: Vec<Option<f64>> = out
        .column("percent_rank")?
        .values()
        .iter()
        .map(Value::as_f64)
        .collect();
    assert_eq!(
        values,
        vec![0.0, 100.0, 50.0, 0.0, 0.0, 50.0, 100.0, 100.0, 0.0, 50.0]
            .into_iter()
            .map(Some)
            .collect::<Vec<_>>()
    );
    Ok(())
}

#[test]
fn test_lag_and_lead() -> Result<()> {
    let df = common::salary_frame()?
        .with_column("lag", lag("salary", 1).over(&spec()))?
        .with_column("lead", lead("salary", 1).over(&spec()))?;

    assert_eq!(
        ints(&df, "lag")?,
        vec![
            None,
            Some(4100),
            Some(3000),
            None,
            Some(3000),
            Some(3000),
            Some(3300),
            Some(2000),
            None,
            Some(4100)
        ]
    );
    assert_eq!(
        ints(&df, "lead")?,
        vec![
            Some(3000),
            None,
            Some(4100),
            Some(3300),
            Some(4100),
            Some(3900),
            None,
            None,
            Some(3000),
            Some(4600)
        ]
    );

    let with_default = common::salary_frame()?
        .with_column("prev", lag_with_default("salary", 2, 0).over(&spec()))?;
    assert_eq!(ints(&with_default, "prev")?[3], Some(0));
    Ok(())
}

#[test]
fn test_cume_dist_and_ntile() -> Result<()> {
    let df = common::salary_frame()?
        .with_column("cume", cume_dist().over(&spec()))?
        .with_column("bucket", ntile(2).over(&spec()))?;

    // Sales: 3000, 3000, 4100, 4100, 4600
    assert_eq!(df.column("cume")?.get(0), Some(&Value::Double(0.4)));
    assert_eq!(df.column("cume")?.get(1), Some(&Value::Double(1.0)));
    // buckets of 3 and 2 rows in Sales
    assert_eq!(ints(&df, "bucket")?[2], Some(1));
    assert_eq!(ints(&df, "bucket")?[9], Some(2));
    Ok(())
}

#[test]
fn test_descending_order_and_invalid_windows() -> Result<()> {
    let df = common::salary_frame()?;
    let desc = Window::partition_by(["department"]).order_by([col("salary").desc()]);
    let out = df.with_column("rn", row_number().over(&desc))?;
    assert_eq!(ints(&out, "rn")?[1], Some(1));

    let unordered = Window::partition_by(["department"]);
    let err = df.with_column("r", rank().over(&unordered)).unwrap_err();
    assert!(matches!(err, Error::InvalidWindow(_)));

    let err = df.with_column("n", ntile(0).over(&spec())).unwrap_err();
    assert!(matches!(err, Error::InvalidWindow(_)));
    Ok(())
}
