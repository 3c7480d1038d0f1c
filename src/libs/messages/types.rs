#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdatedWithName(String),
    TaskMarkedDone(String),
    TaskReopened(String),
    TasksMarkedDone(usize),
    TasksDeletedCount(usize),
    AllTasksCleared(usize),
    TaskNotFoundWithId(String),
    AmbiguousTaskId(String),
    TasksNotFoundForIds(Vec<String>),
    NoTasksFound,
    NoPendingTasks,
    NoTasksSelected,
    NoChangesDetected,
    EmptyTaskText,
    EditingTask(String),
    TasksHeader,

    // === PROMPT MESSAGES ===
    PromptTaskTextEdit,
    PromptTaskPriority,
    PromptTaskCategory,
    PromptTaskDone,
    PromptSelectTaskToEdit,
    PromptSelectTasksDone,
    PromptSelectTasksDelete,
    ConfirmDeleteTasks(usize),
    ConfirmClearAll(usize),
    OperationCancelled,

    // === PERSISTENCE MESSAGES ===
    TasksLoadFailed(String),

    // === STATS MESSAGES ===
    StatsHeader,
    StatsSummary {
        total: usize,
        completed: usize,
        pending: usize,
    },
}
