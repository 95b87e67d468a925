//! Context injection demo
//!
//! Three unrelated records (a bank account, a student profile and a library
//! book) are each attached as the context of one agent run. Every agent owns
//! a single tool that renders its record, so the model can only answer by
//! calling the tool and reading the context.

pub mod agents;
pub mod demo;
pub mod models;
pub mod tools;

pub use demo::{DemoOutput, run_demo, run_demo_with};
pub use models::{BankAccount, LibraryBook, StudentProfile};
