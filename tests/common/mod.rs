//! Shared fixtures for integration tests
//!
//! Sample tables used across test files: addresses, employees and
//! departments, and the salary table used for window functions.

#![allow(dead_code)]

use sparkrs::{DataFrame, Result, SparkSession};

pub fn session() -> SparkSession {
    SparkSession::builder()
        .master("local[1]")
        .app_name("sparkrs-tests")
        .get_or_create()
        .unwrap()
}

pub fn address_frame() -> Result<DataFrame> {
    DataFrame::from_rows(
        vec![
            (1, "14851 Jeffrey Rd", "DE"),
            (2, "43421 Margarita St", "NY"),
            (3, "13111 Siemon Ave", "CA"),
        ],
        ["id", "address", "state"],
    )
}

/// Employees; `emp_dept_id` holds department ids as strings
pub fn emp_frame() -> Result<DataFrame> {
    DataFrame::from_rows(
        vec![
            (1, "Smith", -1, "2018", "10", "M", 3000),
            (2, "Rose", 1, "2010", "20", "M", 4000),
            (3, "Williams", 1, "2010", "10", "M", 1000),
            (4, "Jones", 2, "2005", "10", "F", 2000),
            (5, "Brown", 2, "2010", "40", "", -1),
            (6, "Brown", 2, "2010", "50", "", -1),
        ],
        [
            "emp_id",
            "name",
            "superior_emp_id",
            "year_joined",
            "emp_dept_id",
            "gender",
            "salary",
        ],
    )
}

pub fn dept_frame() -> Result<DataFrame> {
    DataFrame::from_rows(
        vec![("Finance", 10), ("Marketing", 20), ("Sales", 30), ("IT", 40)],
        ["dept_name", "dept_id"],
    )
}

pub fn salary_frame() -> Result<DataFrame> {
    DataFrame::from_rows(
        vec![
            ("James", "Sales", 3000),
            ("Michael", "Sales", 4600),
            ("Robert", "Sales", 4100),
            ("Maria", "Finance", 3000),
            ("James", "Sales", 3000),
            ("Scott", "Finance", 3300),
            ("Jen", "Finance", 3900),
            ("Jeff", "Marketing", 3000),
            ("Kumar", "Marketing", 2000),
            ("Saif", "Sales", 4100),
        ],
        ["employee_name", "department", "salary"],
    )
}
