//! Line-oriented `CREATE TABLE` extraction shared by all import strategies
//!
//! Dumps are scanned line by line with a running parenthesis depth. This
//! tolerates everything a dump tool may put between statements (comments,
//! `INSERT` blocks, engine options) without tokenizing the whole file.

use crate::models::Field;

/// Clause prefixes that declare keys, indexes or constraints rather than columns
static CONSTRAINT_PREFIXES: &[&str] = &[
    "PRIMARY KEY",
    "KEY ",
    "INDEX",
    "UNIQUE KEY",
    "UNIQUE (",
    "CONSTRAINT",
    "FOREIGN KEY",
    "CHECK ",
];

/// Line prefixes emitted by dump tools that are never part of a table definition
static DUMP_DIRECTIVE_PREFIXES: &[&str] = &[
    "--",
    "/*",
    "SET ",
    "START TRANSACTION",
    "COMMIT",
    "LOCK TABLES",
    "UNLOCK TABLES",
];

/// Split raw SQL into `CREATE TABLE` fragments
///
/// A line containing `CREATE TABLE` (any case) opens a fragment and flushes
/// the one in progress. The fragment closes once the parenthesis depth is back
/// to zero on a line containing `)`; with `require_terminator` the trimmed line
/// must instead end with `;`. An unterminated trailing fragment is still
/// returned.
pub fn extract_create_statements(sql: &str, require_terminator: bool) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut in_create = false;
    let mut depth: i64 = 0;

    for line in sql.lines() {
        let trimmed = line.trim();

        if trimmed.to_uppercase().contains("CREATE TABLE") {
            if !current.is_empty() {
                statements.push(current.join("\n"));
            }
            current.clear();
            in_create = true;
            depth = 0;
        }

        if !in_create {
            continue;
        }

        depth += line.matches('(').count() as i64;
        depth -= line.matches(')').count() as i64;
        current.push(line);

        let complete = if require_terminator {
            depth == 0 && trimmed.ends_with(';')
        } else {
            depth == 0 && line.contains(')')
        };

        if complete {
            statements.push(current.join("\n"));
            current.clear();
            in_create = false;
        }
    }

    if !current.is_empty() {
        statements.push(current.join("\n"));
    }

    statements
}

/// The column-definition body: text between the first `(` and the last `)`
pub fn definition_body(statement: &str) -> Option<&str> {
    let open = statement.find('(')?;
    let close = statement.rfind(')')?;
    if open >= close {
        return None;
    }
    Some(&statement[open + 1..close])
}

/// Split one line of a definition body on commas outside parentheses
///
/// Empty pieces are dropped; pieces are returned untrimmed.
pub fn split_top_level(line: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth: i64 = 0;

    for ch in line.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth -= 1;
                current.push(ch);
            }
            ',' if depth == 0 => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        parts.push(current);
    }

    parts
}

/// Split a definition body into column clauses
///
/// The body is processed line by line, each trimmed non-empty line being
/// split on top-level commas. Blank pieces are discarded.
pub fn split_field_list(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(split_top_level)
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

/// True when a clause declares a key, index or table constraint
pub fn is_constraint_clause(clause: &str) -> bool {
    let upper = clause.trim().to_uppercase();
    CONSTRAINT_PREFIXES
        .iter()
        .any(|prefix| upper.starts_with(prefix))
}

/// Parse a single column clause
///
/// Returns `None` for constraint clauses and for clauses with fewer than two
/// whitespace-separated tokens. The declared type is the second token verbatim.
pub fn classify_field(clause: &str) -> Option<Field> {
    if is_constraint_clause(clause) {
        return None;
    }

    let cleaned = clause.trim();
    let cleaned = cleaned.strip_suffix(',').unwrap_or(cleaned).replace('`', "");

    let mut tokens = cleaned.split_whitespace();
    let name = tokens.next()?;
    let data_type = tokens.next()?;

    let nullable = !cleaned.to_uppercase().contains("NOT NULL");

    Some(Field::new(name, data_type).with_nullable(nullable))
}

/// Parse every column clause of a definition body
pub fn parse_fields(body: &str) -> Vec<Field> {
    split_field_list(body)
        .iter()
        .filter_map(|clause| classify_field(clause))
        .collect()
}

/// Drop dump-tool directive lines (comments, `SET`, transaction and lock statements)
pub fn clean_dump(sql: &str) -> String {
    sql.lines()
        .filter(|line| {
            let trimmed = line.trim();
            !(trimmed.is_empty()
                || trimmed == "*/"
                || DUMP_DIRECTIVE_PREFIXES
                    .iter()
                    .any(|prefix| trimmed.starts_with(prefix)))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
