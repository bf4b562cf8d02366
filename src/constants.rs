// Constants for the tokenizer and parser

/// Default bound on the parse stack depth
/// Shifting past this many nodes fails with a stack overflow instead of growing further
pub const STACK_MAX_DEPTH: usize = 256;

/// Longest right-hand side a grammar rule may have
pub const RULE_RHS_MAX: usize = 8;
