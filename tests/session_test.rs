use std::io::Write;

use sparkrs::{Error, Result, SessionConfig, SparkSession};
use tempfile::NamedTempFile;

#[test]
fn test_builder_defaults() -> Result<()> {
    let spark = SparkSession::builder().get_or_create()?;
    assert_eq!(spark.master(), "local[*]");
    assert_eq!(spark.app_name(), "sparkrs");
    assert_eq!(
        spark.spark_context().default_parallelism(),
        num_cpus::get()
    );
    Ok(())
}

#[test]
fn test_config_file_and_overrides() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[session]
master = "local[3]"
app_name = "from-file"

[conf]
"spark.sql.shuffle.partitions" = "4"
"#
    )?;
    file.flush()?;

    let config = SessionConfig::from_file(file.path())?;
    let spark = SparkSession::builder()
        .with_config(config.clone())
        .get_or_create()?;
    assert_eq!(spark.master(), "local[3]");
    assert_eq!(spark.app_name(), "from-file");
    assert_eq!(spark.conf("spark.sql.shuffle.partitions"), Some("4"));
    assert_eq!(spark.spark_context().default_parallelism(), 3);

    let spark = SparkSession::builder()
        .with_config(config)
        .master("local")
        .get_or_create()?;
    assert_eq!(spark.spark_context().default_parallelism(), 1);
    Ok(())
}

#[test]
fn test_invalid_settings() {
    let bad_master = SparkSession::builder().master("spark://host:7077").get_or_create();
    assert!(matches!(bad_master, Err(Error::InvalidMaster(_))));

    let bad_parallelism = SparkSession::builder()
        .master("local[2]")
        .config("spark.default.parallelism", "many")
        .get_or_create();
    assert!(matches!(bad_parallelism, Err(Error::Config(_))));

    let missing = SessionConfig::from_file("/no/such/sparkrs.toml");
    assert!(matches!(missing, Err(Error::Io(_))));
}

#[test]
fn test_create_dataframe_through_session() -> Result<()> {
    let spark = SparkSession::builder().master("local[1]").get_or_create()?;
    let df = spark.create_dataframe(vec![("Finance", 10), ("IT", 40)], ["dept_name", "dept_id"])?;
    assert_eq!(df.count(), 2);
    assert_eq!(df.schema().simple_string(), "struct<dept_name:string,dept_id:int>");
    Ok(())
}
