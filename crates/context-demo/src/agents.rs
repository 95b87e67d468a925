//! The three demo agents
//!
//! Each agent carries one tool and instructions telling the model to call it.

use crate::models::{BankAccount, LibraryBook, StudentProfile};
use crate::tools::{get_bank_info, get_book_info, get_student_info};
use agent_core::Result;
use agent_runtime::AgentDefinition;

pub const BANK_AGENT: &str = "Bank Agent";
pub const BANK_INSTRUCTIONS: &str =
    "You are a helpful bank assistant. Always call the tool to get bank account details.";
pub const BANK_PROMPT: &str = "Please tell me my account number and balance";

pub const STUDENT_AGENT: &str = "Student Agent";
pub const STUDENT_INSTRUCTIONS: &str =
    "You are a helpful student assistant. Always call the tool to get student profile details.";
pub const STUDENT_PROMPT: &str = "What is my name and how many courses do I have?";

pub const LIBRARY_AGENT: &str = "Library Agent";
pub const LIBRARY_INSTRUCTIONS: &str =
    "You are a helpful library assistant. Always call the tool to get library book details.";
pub const LIBRARY_PROMPT: &str = "Is the book available and who is the author?";

pub fn bank_agent() -> Result<AgentDefinition<BankAccount>> {
    AgentDefinition::builder(BANK_AGENT)
        .instructions(BANK_INSTRUCTIONS)
        .tool(get_bank_info())
        .build()
}

pub fn student_agent() -> Result<AgentDefinition<StudentProfile>> {
    AgentDefinition::builder(STUDENT_AGENT)
        .instructions(STUDENT_INSTRUCTIONS)
        .tool(get_student_info())
        .build()
}

pub fn library_agent() -> Result<AgentDefinition<LibraryBook>> {
    AgentDefinition::builder(LIBRARY_AGENT)
        .instructions(LIBRARY_INSTRUCTIONS)
        .tool(get_book_info())
        .build()
}
