pub const PROGRAM_NAME: &str = "subseq";
pub const PROGRAM_LOG_LEVEL: &str = "SUBSEQ_LOG_LEVEL";
