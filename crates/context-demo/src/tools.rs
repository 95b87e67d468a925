//! Rendering functions and the tools that expose them
//!
//! Each tool takes no arguments from the model; it reads the record attached
//! to the run and returns it as a sentence.

use crate::models::{BankAccount, LibraryBook, StudentProfile};
use agent_tools::FunctionTool;

/// Render a bank account with all of its fields
pub fn bank_info(account: &BankAccount) -> String {
    format!(
        "Account Holder: {}, Account Number: {}, Balance: {}, Type: {}",
        account.account_name,
        account.account_number,
        format_balance(account.account_balance),
        account.account_type
    )
}

/// Whole amounts keep one decimal place (`5000.0`), others print as-is
fn format_balance(balance: f64) -> String {
    if balance.fract() == 0.0 && balance.abs() < 1e16 {
        format!("{balance:.1}")
    } else {
        balance.to_string()
    }
}

/// Render a student profile with all of its fields
pub fn student_info(student: &StudentProfile) -> String {
    format!(
        "Student Name: {}, ID: {}, Semester: {}, Total Courses: {}",
        student.student_name, student.student_id, student.student_semester, student.total_course
    )
}

/// Render a library book with all of its fields
pub fn book_info(book: &LibraryBook) -> String {
    let status = if book.is_available {
        "Available"
    } else {
        "Not Available"
    };
    format!(
        "Book: {} by {} (ID: {}) is {status}.",
        book.book_title, book.book_author, book.book_id
    )
}

pub fn get_bank_info() -> FunctionTool<BankAccount> {
    FunctionTool::from_context(
        "get_bank_info",
        "Get the holder, number, balance and type of the current bank account.",
        bank_info,
    )
}

pub fn get_student_info() -> FunctionTool<StudentProfile> {
    FunctionTool::from_context(
        "get_student_info",
        "Get the name, ID, semester and course count of the current student.",
        student_info,
    )
}

pub fn get_book_info() -> FunctionTool<LibraryBook> {
    FunctionTool::from_context(
        "get_book_info",
        "Get the title, author, ID and availability of the current library book.",
        book_info,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::RunContext;
    use agent_tools::Tool;
    use serde_json::json;

    #[test]
    fn test_bank_rendering_contains_every_field() {
        let text = bank_info(&BankAccount::sample());
        for part in ["ACC-789456", "Fatima Khan", "75500.5", "savings"] {
            assert!(text.contains(part), "missing {part} in {text}");
        }
        assert_eq!(
            text,
            "Account Holder: Fatima Khan, Account Number: ACC-789456, Balance: 75500.5, Type: savings"
        );
    }

    #[test]
    fn test_whole_balance_keeps_decimal_point() {
        let mut account = BankAccount::sample();
        account.account_balance = 5000.0;
        assert_eq!(
            bank_info(&account),
            "Account Holder: Fatima Khan, Account Number: ACC-789456, Balance: 5000.0, Type: savings"
        );

        assert_eq!(format_balance(0.0), "0.0");
        assert_eq!(format_balance(-12.0), "-12.0");
        assert_eq!(format_balance(0.25), "0.25");
    }

    #[test]
    fn test_student_rendering() {
        assert_eq!(
            student_info(&StudentProfile::sample()),
            "Student Name: Hassan Ahmed, ID: STU-456, Semester: 4, Total Courses: 5"
        );
    }

    #[test]
    fn test_book_rendering_availability() {
        let mut book = LibraryBook::sample();
        assert_eq!(
            book_info(&book),
            "Book: Python Programming by John Smith (ID: BOOK-123) is Available."
        );

        book.is_available = false;
        assert!(book_info(&book).ends_with("is Not Available."));
    }

    #[test]
    fn test_tools_read_run_context() {
        let ctx = RunContext::new(StudentProfile {
            student_id: "STU-1".to_string(),
            student_name: "Sara Ali".to_string(),
            student_semester: 1,
            total_course: 0,
        });

        let tool = get_student_info();
        let out = tokio_test::block_on(tool.execute(&ctx, json!({}))).unwrap();
        assert_eq!(
            out,
            "Student Name: Sara Ali, ID: STU-1, Semester: 1, Total Courses: 0"
        );
        assert_eq!(tool.name(), "get_student_info");
        assert!(tool.input_schema()["properties"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_tool_names() {
        assert_eq!(get_bank_info().name(), "get_bank_info");
        assert_eq!(get_book_info().name(), "get_book_info");
    }
}
