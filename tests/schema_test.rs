mod common;

use sparkrs::{col, DataFrame, DataType, Error, Result, Row, StructField, StructType, Value};

fn name_schema() -> StructType {
    StructType::new(vec![
        StructField::nullable("firstname", DataType::String),
        StructField::nullable("middlename", DataType::String),
        StructField::nullable("lastname", DataType::String),
    ])
}

fn structure_schema() -> StructType {
    StructType::new(vec![
        StructField::nullable("name", DataType::Struct(name_schema())),
        StructField::nullable("id", DataType::String),
        StructField::nullable("gender", DataType::String),
        StructField::nullable("salary", DataType::Integer),
    ])
}

fn structure_data() -> Vec<((&'static str, &'static str, &'static str), &'static str, &'static str, i32)> {
    vec![
        (("James", "", "Smith"), "36636", "M", 3100),
        (("Michael", "Rose", ""), "40288", "M", 4300),
        (("Robert", "", "Williams"), "42114", "M", 1400),
        (("Maria", "Anne", "Jones"), "39192", "F", 5500),
        (("Jen", "Mary", "Brown"), "", "F", -1),
    ]
}

#[test]
fn test_flat_schema_simple_string() -> Result<()> {
    let schema = StructType::new(vec![
        StructField::nullable("firstname", DataType::String),
        StructField::nullable("middlename", DataType::String),
        StructField::nullable("lastname", DataType::String),
        StructField::nullable("id", DataType::String),
        StructField::nullable("gender", DataType::String),
        StructField::nullable("salary", DataType::Integer),
    ]);
    let df = DataFrame::from_rows(
        vec![("James", "", "Smith", "36636", "M", 3000)],
        schema,
    )?;
    assert_eq!(
        df.schema().simple_string(),
        "struct<firstname:string,middlename:string,lastname:string,id:string,gender:string,salary:int>"
    );
    Ok(())
}

#[test]
fn test_nested_schema_tree() -> Result<()> {
    let df = DataFrame::from_rows(structure_data(), structure_schema())?;
    let expected = "root
 |-- name: struct (nullable = true)
 |    |-- firstname: string (nullable = true)
 |    |-- middlename: string (nullable = true)
 |    |-- lastname: string (nullable = true)
 |-- id: string (nullable = true)
 |-- gender: string (nullable = true)
 |-- salary: integer (nullable = true)
";
    assert_eq!(df.schema().tree_string(), expected);

    let first = df.row(0).unwrap();
    assert_eq!(
        first.get(0),
        Some(&Value::Struct(Row::new(vec![
            Value::from("James"),
            Value::from(""),
            Value::from("Smith"),
        ])))
    );
    assert!(df.show_string(20, 0).contains("|{James, , Smith}"));
    Ok(())
}

#[test]
fn test_json_round_trip_rebuilds_frame() -> Result<()> {
    let spark = common::session();
    let schema = structure_schema();
    let json = schema.json();
    assert!(json.starts_with(r#"{"type":"struct","fields":[{"name":"name","type":{"type":"struct""#));

    let from_json = StructType::from_json(&json)?;
    assert_eq!(from_json, schema);
    assert_eq!(StructType::from_json(&schema.pretty_json())?, schema);

    let rdd = spark.spark_context().parallelize(structure_data(), Some(2))?;
    let df3 = spark.create_dataframe_from_rdd(&rdd, from_json)?;
    let df2 = spark.create_dataframe(structure_data(), schema)?;
    assert_eq!(df3.schema(), df2.schema());
    assert_eq!(df3.collect(), df2.collect());
    Ok(())
}

#[test]
fn test_nested_field_access() -> Result<()> {
    let df = DataFrame::from_rows(structure_data(), structure_schema())?;
    let out = df.select(vec![col("name.firstname"), col("name").get_field("lastname").alias("last")])?;
    assert_eq!(out.columns(), vec!["firstname", "last"]);
    assert_eq!(out.column("last")?.get(2), Some(&Value::from("Williams")));
    Ok(())
}

#[test]
fn test_rows_must_conform() {
    let bad_type = DataFrame::from_rows(vec![(("a", "b", "c"), "1", "M", "lots")], structure_schema());
    assert!(matches!(bad_type, Err(Error::TypeMismatch { .. })));

    let bad_arity = DataFrame::from_rows(vec![(("a", "b"), "1", "M", 1)], structure_schema());
    assert!(bad_arity.is_err());
}

#[test]
fn test_metadata_survives_json() -> Result<()> {
    let mut metadata = serde_json::Map::new();
    metadata.insert("comment".to_string(), serde_json::json!("employee id"));
    let schema = StructType::new(Vec::new())
        .add(StructField::new("id", DataType::Long, false).with_metadata(metadata))
        .add(StructField::nullable("name", DataType::String));

    assert!(schema.json().contains(r#""metadata":{"comment":"employee id"}"#));
    let back = StructType::from_json(&schema.json())?;
    assert_eq!(back, schema);
    assert!(!back.field("id")?.nullable);
    Ok(())
}
