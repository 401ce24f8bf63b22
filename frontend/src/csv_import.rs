//! Student CSV import.
//!
//! The first row names the columns; every following row is mapped onto those
//! names by position. The format is deliberately plain: commas only, no
//! quoting, no escaping, and no checks on the values themselves.

use csv::{ReaderBuilder, Trim};

use crate::{AppError, AppResult, StudentField, StudentForm};

/// Parse CSV text into student records.
///
/// Columns that are not student fields are skipped. A missing column or a
/// short row leaves the corresponding field empty.
///
/// # Example
/// ```
/// use campus_admin::parse_students_csv;
///
/// let csv = "name,email,password,roll_number\nAsha,asha@school.edu,pw,R-1";
/// let students = parse_students_csv(csv).unwrap();
///
/// assert_eq!(students.len(), 1);
/// assert_eq!(students[0].roll_number, "R-1");
/// ```
pub fn parse_students_csv(text: &str) -> AppResult<Vec<StudentForm>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record.map_err(|e| AppError::Csv(e.to_string()))?,
        None => return Err(AppError::Csv("file has no header row".to_string())),
    };

    // Position of each column's target field, `None` for unknown columns.
    let columns: Vec<Option<StudentField>> =
        header.iter().map(StudentField::from_key).collect();

    log::debug!("CSV columns: {:?}", header.iter().collect::<Vec<_>>());

    let mut students = Vec::new();
    for record in records {
        let record = record.map_err(|e| AppError::Csv(e.to_string()))?;

        let mut student = StudentForm::default();
        for (position, field) in columns.iter().enumerate() {
            if let (Some(field), Some(value)) = (field, record.get(position)) {
                student.set(*field, value);
            }
        }
        students.push(student);
    }

    Ok(students)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, email: &str, password: &str, roll_number: &str) -> StudentForm {
        StudentForm {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            roll_number: roll_number.into(),
        }
    }

    #[test]
    fn test_single_row() {
        let csv = "name,email,password,roll_number\nAsha Rao,asha@school.edu,s3cret,R-17\n";
        let students = parse_students_csv(csv).unwrap();

        assert_eq!(
            students,
            vec![student("Asha Rao", "asha@school.edu", "s3cret", "R-17")]
        );
    }

    #[test]
    fn test_columns_map_by_header_position() {
        let csv = "roll_number, email ,name,password\nR-2,ben@school.edu,Ben,pw\r\nR-3,cy@school.edu,Cy,pw2";
        let students = parse_students_csv(csv).unwrap();

        assert_eq!(
            students,
            vec![
                student("Ben", "ben@school.edu", "pw", "R-2"),
                student("Cy", "cy@school.edu", "pw2", "R-3"),
            ]
        );
    }

    #[test]
    fn test_values_are_trimmed() {
        let csv = "name,email,password,roll_number\n  Dev  , dev@school.edu,pw ,R-4";
        let students = parse_students_csv(csv).unwrap();

        assert_eq!(students[0], student("Dev", "dev@school.edu", "pw", "R-4"));
    }

    #[test]
    fn test_short_rows_and_unknown_columns() {
        let csv = "name,email,house,password,roll_number\nEla,ela@school.edu,Red";
        let students = parse_students_csv(csv).unwrap();

        assert_eq!(students.len(), 1);
        assert_eq!(students[0].name, "Ela");
        assert_eq!(students[0].email, "ela@school.edu");
        assert_eq!(students[0].password, "");
        assert_eq!(students[0].roll_number, "");
    }

    #[test]
    fn test_quotes_are_literal() {
        let csv = "name,email,password,roll_number\n\"Fay\",fay@school.edu,pw,R-5";
        let students = parse_students_csv(csv).unwrap();

        assert_eq!(students[0].name, "\"Fay\"");
    }

    #[test]
    fn test_header_only_yields_no_students() {
        let students = parse_students_csv("name,email,password,roll_number\n").unwrap();
        assert!(students.is_empty());
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let err = parse_students_csv("").unwrap_err();
        assert!(matches!(err, AppError::Csv(_)));
    }
}
