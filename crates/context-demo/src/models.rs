//! Records attached to agent runs as context

use serde::{Deserialize, Serialize};

/// A customer's bank account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub account_number: String,
    pub account_name: String,
    pub account_balance: f64,
    /// e.g. "savings" or "current"
    pub account_type: String,
}

impl BankAccount {
    /// The account used by the demo
    pub fn sample() -> Self {
        Self {
            account_number: "ACC-789456".to_string(),
            account_name: "Fatima Khan".to_string(),
            account_balance: 75500.50,
            account_type: "savings".to_string(),
        }
    }
}

/// A student's enrollment profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub student_id: String,
    pub student_name: String,
    pub student_semester: u32,
    pub total_course: u32,
}

impl StudentProfile {
    /// The student used by the demo
    pub fn sample() -> Self {
        Self {
            student_id: "STU-456".to_string(),
            student_name: "Hassan Ahmed".to_string(),
            student_semester: 4,
            total_course: 5,
        }
    }
}

/// A book in the library catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryBook {
    pub book_id: String,
    pub book_title: String,
    pub book_author: String,
    pub is_available: bool,
}

impl LibraryBook {
    /// The book used by the demo
    pub fn sample() -> Self {
        Self {
            book_id: "BOOK-123".to_string(),
            book_title: "Python Programming".to_string(),
            book_author: "John Smith".to_string(),
            is_available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_samples_keep_their_values() {
        let account = BankAccount::sample();
        assert_eq!(account.account_number, "ACC-789456");
        assert_eq!(account.account_name, "Fatima Khan");
        assert!((account.account_balance - 75500.5).abs() < f64::EPSILON);
        assert_eq!(account.account_type, "savings");

        let student = StudentProfile::sample();
        assert_eq!(student.student_id, "STU-456");
        assert_eq!(student.student_name, "Hassan Ahmed");
        assert_eq!(student.student_semester, 4);
        assert_eq!(student.total_course, 5);

        let book = LibraryBook::sample();
        assert_eq!(book.book_id, "BOOK-123");
        assert_eq!(book.book_title, "Python Programming");
        assert_eq!(book.book_author, "John Smith");
        assert!(book.is_available);
    }

    #[test]
    fn test_construct_from_json() {
        let book: LibraryBook = serde_json::from_value(json!({
            "book_id": "BOOK-9",
            "book_title": "Rust in Action",
            "book_author": "Tim McNamara",
            "is_available": false
        }))
        .unwrap();
        assert_eq!(book.book_id, "BOOK-9");
        assert!(!book.is_available);
    }

    #[test]
    fn test_construction_rejects_wrong_types() {
        let result: Result<StudentProfile, _> = serde_json::from_value(json!({
            "student_id": "STU-1",
            "student_name": "Sara",
            "student_semester": "fourth",
            "total_course": 3
        }));
        assert!(result.is_err());

        let missing: Result<BankAccount, _> = serde_json::from_value(json!({
            "account_number": "ACC-1"
        }));
        assert!(missing.is_err());
    }
}
