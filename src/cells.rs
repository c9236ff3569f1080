//! Walkthrough cells: each builds a small table and prints what the
//! operation under demonstration does to it

use sparkrs::{
    col, dense_rank, lag, lead, lit, percent_rank, rank, regexp_replace, row_number, when,
    DataFrame, DataType, JoinType, Result, SparkSession, StructField, StructType, Window,
};

const SAMPLE_TEXT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/test.txt");

fn heading(title: &str) {
    println!("\n== {} ==", title);
}

fn address_frame(spark: &SparkSession) -> Result<DataFrame> {
    let address = vec![
        (1i64, "14851 Jeffrey Rd", "DE"),
        (2i64, "43421 Margarita St", "NY"),
        (3i64, "13111 Siemon Ave", "CA"),
    ];
    spark.create_dataframe(address, ["id", "address", "state"])
}

pub fn regexp_replace_cells(spark: &SparkSession) -> Result<()> {
    heading("regexp_replace");
    let df = address_frame(spark)?;
    df.show();

    df.with_column("address", regexp_replace("address", "Rd", "Road"))?
        .show_with(20, false);

    heading("conditional replace");
    let address = col("address");
    df.with_column(
        "address",
        when(
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
        .otherwise(address),
    )?
    .show_with(20, false);
    Ok(())
}

pub fn partition_cells(spark: &SparkSession) -> Result<()> {
    heading("partitions");
    let sc = spark.spark_context();

    let rdd = sc.parallelize(vec![0, 20], None)?;
    println!("From {}: {}", sc.master(), rdd.get_num_partitions());

    let rdd1 = sc.parallelize(vec![0, 25], Some(6))?;
    println!("parallelize : {}", rdd1.get_num_partitions());

    let from_file = sc.text_file(SAMPLE_TEXT, 10)?;
    println!("TextFile : {}", from_file.get_num_partitions());
    Ok(())
}

fn emp_dept_frames(spark: &SparkSession) -> Result<(DataFrame, DataFrame)> {
    let emp = vec![
        (1i64, "Smith", -1i64, "2018", "10", "M", 3000i64),
        (2i64, "Rose", 1i64, "2010", "20", "M", 4000i64),
        (3i64, "Williams", 1i64, "2010", "10", "M", 1000i64),
        (4i64, "Jones", 2i64, "2005", "10", "F", 2000i64),
        (5i64, "Brown", 2i64, "2010", "40", "", -1i64),
        (6i64, "Brown", 2i64, "2010", "50", "", -1i64),
    ];
    let emp_columns = [
        "emp_id",
        "name",
        "superior_emp_id",
        "year_joined",
        "emp_dept_id",
        "gender",
        "salary",
    ];
    let emp_df = spark.create_dataframe(emp, emp_columns)?;

    let dept = vec![("Finance", 10i64), ("Marketing", 20i64), ("Sales", 30i64), ("IT", 40i64)];
    let dept_df = spark.create_dataframe(dept, ["dept_name", "dept_id"])?;
    Ok((emp_df, dept_df))
}

pub fn join_cells(spark: &SparkSession) -> Result<()> {
    heading("joins");
    let (emp_df, dept_df) = emp_dept_frames(spark)?;
    emp_df.print_schema();
    emp_df.show_with(20, false);
    dept_df.print_schema();
    dept_df.show_with(20, false);

    let on = || col("emp_dept_id").eq(col("dept_id"));
    for how in [
        "inner",
        "outer",
        "full",
        "fullouter",
        "left",
        "leftouter",
        "right",
        "rightouter",
    ] {
        heading(&format!("{} join", how));
        let how: JoinType = how.parse()?;
        emp_df.join(&dept_df, on(), how)?.show_with(20, false);
    }
    Ok(())
}

pub fn schema_cells(spark: &SparkSession) -> Result<()> {
    heading("StructType");
    let data = vec![
        ("James", "", "Smith", "36636", "M", 3000),
        ("Michael", "Rose", "", "40288", "M", 4000),
        ("Robert", "", "Williams", "42114", "M", 4000),
        ("Maria", "Anne", "Jones", "39192", "F", 4000),
        ("Jen", "Mary", "Brown", "", "F", -1),
    ];
    let schema = StructType::new(vec![
        StructField::nullable("firstname", DataType::String),
        StructField::nullable("middlename", DataType::String),
        StructField::nullable("lastname", DataType::String),
        StructField::nullable("id", DataType::String),
        StructField::nullable("gender", DataType::String),
        StructField::nullable("salary", DataType::Integer),
    ]);
    let df = spark.create_dataframe(data, schema)?;
    df.print_schema();
    df.show_with(20, false);

    heading("nested schema");
    let structure_data = vec![
        (("James", "", "Smith"), "36636", "M", 3100),
        (("Michael", "Rose", ""), "40288", "M", 4300),
        (("Robert", "", "Williams"), "42114", "M", 1400),
        (("Maria", "Anne", "Jones"), "39192", "F", 5500),
        (("Jen", "Mary", "Brown"), "", "F", -1),
    ];
    let name = StructType::new(vec![
        StructField::nullable("firstname", DataType::String),
        StructField::nullable("middlename", DataType::String),
        StructField::nullable("lastname", DataType::String),
    ]);
    let structure_schema = StructType::new(vec![
        StructField::nullable("name", DataType::Struct(name)),
        StructField::nullable("id", DataType::String),
        StructField::nullable("gender", DataType::String),
        StructField::nullable("salary", DataType::Integer),
    ]);
    let df2 = spark.create_dataframe(structure_data.clone(), structure_schema.clone())?;
    df2.print_schema();
    df2.show_with(20, false);

    println!("{}", df2.schema().json());
    println!("{}", df.schema().simple_string());

    heading("schema from json");
    let schema_from_json = StructType::from_json(&structure_schema.json())?;
    let rdd = spark.spark_context().parallelize(structure_data, None)?;
    let df3 = spark.create_dataframe_from_rdd(&rdd, schema_from_json)?;
    df3.print_schema();
    Ok(())
}

pub fn column_cells(spark: &SparkSession) -> Result<()> {
    heading("withColumn");
    let data = vec![
        ("James", "", "Smith", "1991-04-01", "M", 3000i64),
        ("Michael", "Rose", "", "2000-05-19", "M", 4000i64),
        ("Robert", "", "Williams", "1978-09-05", "M", 4000i64),
        ("Maria", "Anne", "Jones", "1967-12-01", "F", 4000i64),
        ("Jen", "Mary", "Brown", "1980-02-17", "F", -1i64),
    ];
    let columns = ["firstname", "middlename", "lastname", "dob", "gender", "salary"];
    let df = spark.create_dataframe(data, columns)?;

    df.with_column("salary", col("salary").cast_to("Integer")?)?
        .show();
    df.with_column("salary", col("salary") * 100)?.show();
    df.with_column("CopiedColumn", col("salary") * -1)?.show();

    df.with_column("Country", lit("USA"))?.show();
    df.with_column("Country", lit("USA"))?
        .with_column("anotherColumn", lit("anotherValue"))?
        .show();

    heading("column rename");
    df.with_column_renamed("gender", "sex")?.show_with(20, false);

    heading("drop columns");
    df.drop(["salary"])?.show();
    Ok(())
}

pub fn window_cells(spark: &SparkSession) -> Result<()> {
    heading("window functions");
    let simple_data = vec![
        ("James", "Sales", 3000i64),
        ("Michael", "Sales", 4600i64),
        ("Robert", "Sales", 4100i64),
        ("Maria", "Finance", 3000i64),
        ("James", "Sales", 3000i64),
        ("Scott", "Finance", 3300i64),
        ("Jen", "Finance", 3900i64),
        ("Jeff", "Marketing", 3000i64),
        ("Kumar", "Marketing", 2000i64),
        ("Saif", "Sales", 4100i64),
    ];
    let df = spark.create_dataframe(simple_data, ["employee_name", "department", "salary"])?;
    df.print_schema();
    df.show_with(20, false);

    let window_spec = Window::partition_by(["department"]).order_by(["salary"]);

    df.with_column("row_number", row_number().over(&window_spec))?
        .show_with(20, false);
    df.with_column("rank", rank().over(&window_spec))?.show();
    df.with_column("dense_rank", dense_rank().over(&window_spec))?
        .show();
    df.with_column("percent_rank", percent_rank().over(&window_spec) * 100)?
        .show();
    df.with_column("lag", lag("salary", 1).over(&window_spec))?
        .show();
    df.with_column("lead", lead("salary", 1).over(&window_spec))?
        .show();
    Ok(())
}
