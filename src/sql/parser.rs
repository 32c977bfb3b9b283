/// A single statement cut out of a migration script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    /// 1-based line where the statement starts
    pub line: usize,
    pub sql: String,
    pub kind: StatementKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Returns rows (SELECT, SHOW, ...)
    Query,
    /// Procedural block closed by the block terminator
    Block,
    Other,
}

const QUERY_KEYWORDS: &[&str] = &["SELECT", "SHOW", "WITH", "DESCRIBE", "DESC", "EXPLAIN", "VALUES"];

/// Splits scripts into statements without understanding SQL grammar.
///
/// Quotes and comments are respected. When a block terminator is configured,
/// anything starting like a procedural block is kept whole until a line
/// consisting only of the terminator.
#[derive(Debug, Clone)]
pub struct StatementParser {
    delimiter: String,
    block_terminator: Option<String>,
}

#[derive(Default)]
struct ScanState {
    quote: Option<char>,
    in_comment: bool,
}

impl StatementParser {
    pub fn new(delimiter: String, block_terminator: Option<String>) -> Self {
        Self {
            delimiter,
            block_terminator,
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn parse(&self, script: &str) -> Vec<SqlStatement> {
        let mut statements = Vec::new();
        let mut state = ScanState::default();
        let mut current = String::new();
        let mut start_line = 1;
        let mut in_block = false;

        for (index, line) in script.lines().enumerate() {
            let line_no = index + 1;
            let trimmed = line.trim();

            if state.quote.is_none() && !state.in_comment {
                if let Some(terminator) = &self.block_terminator {
                    if trimmed == terminator {
                        push_statement(&mut statements, &mut current, start_line, in_block);
                        in_block = false;
                        continue;
                    }
                    if current.trim().is_empty() && starts_block(trimmed) {
                        in_block = true;
                    }
                }
            }

            let mut i = 0;
            while i < line.len() {
                let rest = &line[i..];
                let Some(c) = rest.chars().next() else { break };

                if state.in_comment {
                    if rest.starts_with("*/") {
                        state.in_comment = false;
                        i += 2;
                    } else {
                        i += c.len_utf8();
                    }
                    continue;
                }

                if let Some(quote) = state.quote {
                    current.push(c);
                    if c == quote {
                        state.quote = None;
                    }
                    i += c.len_utf8();
                    continue;
                }

                if rest.starts_with("--") {
                    break;
                }
                if rest.starts_with("/*") {
                    state.in_comment = true;
                    i += 2;
                    continue;
                }
                if !in_block && !self.delimiter.is_empty() && rest.starts_with(self.delimiter.as_str()) {
                    push_statement(&mut statements, &mut current, start_line, false);
                    i += self.delimiter.len();
                    continue;
                }

                if matches!(c, '\'' | '"' | '`') {
                    state.quote = Some(c);
                }
                if current.trim().is_empty() && !c.is_whitespace() {
                    current.clear();
                    start_line = line_no;
                }
                current.push(c);
                i += c.len_utf8();
            }

            if !current.trim().is_empty() {
                current.push('\n');
            }
        }

        push_statement(&mut statements, &mut current, start_line, in_block);
        statements
    }
}

fn push_statement(statements: &mut Vec<SqlStatement>, current: &mut String, line: usize, block: bool) {
    let sql = current.trim();
    if !sql.is_empty() {
        let kind = if block { StatementKind::Block } else { classify(sql) };
        statements.push(SqlStatement {
            line,
            sql: sql.to_string(),
            kind,
        });
    }
    current.clear();
}

fn classify(sql: &str) -> StatementKind {
    let first = sql
        .split(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or("")
        .to_uppercase();
    if QUERY_KEYWORDS.contains(&first.as_str()) {
        StatementKind::Query
    } else {
        StatementKind::Other
    }
}

fn starts_block(line: &str) -> bool {
    let upper = line.to_uppercase();
    let words: Vec<&str> = upper.split_whitespace().collect();
    match words.as_slice() {
        ["BEGIN", ..] | ["DECLARE", ..] => true,
        ["CREATE", "OR", "REPLACE", object, ..] | ["CREATE", object, ..] => matches!(
            *object,
            "PROCEDURE" | "FUNCTION" | "TRIGGER" | "PACKAGE" | "TYPE"
        ),
        _ => false,
    }
}
