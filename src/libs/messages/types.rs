/// Every piece of user-facing text, rendered by the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String), // path
    ConfigDeleted,
    ConfigNotFound,
    ConfigWizardHeader,
    InvalidDateFormat(String), // format

    // === JOURNAL MESSAGES ===
    DayBlockWritten(String), // file
    TaskLineWritten {
        file: String,
        line: usize,
    },
    BreakLineWritten {
        file: String,
        line: usize,
    },
    SummaryWritten {
        file: String,
        valid: usize,
        comments: usize,
        invalid: usize,
    },
    SummaryTotal(String), // rendered total
    InvalidLineNumber(usize),

    // === LINE CHECK MESSAGES ===
    LineValid {
        time: String,
        text: String,
        comment: String,
    },
    LineInvalid(String), // error

    // === PROMPTS ===
    PromptTimeSpanFormat,
    PromptTimeSpanStep,
    PromptHoursAndMinutesFormat,
    PromptNewDateFormat,
    PromptNewDateLanguage,
    PromptStartMessages,
    PromptTaskList,
    PromptBreakList,

    // === GENERAL MESSAGES ===
    CommandFailed(String), // error
}
