//! Session scripts
//!
//! Runs a line-oriented script against one in-memory session:
//!
//! ```text
//! # comment
//! add "Coffee beans" 4.50 2024-01-05
//! from 2024-01-01
//! to -
//! list
//! total
//! export csv out.csv
//! ```
//!
//! Rejected submissions and unparseable filter dates are reported and the
//! script continues. Malformed commands stop the run.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::{ExpensePaths, Settings};
use crate::display::{format_expense_table, format_range, format_total, format_validation_errors};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{default_file_name, export_view, export_view_to_file, ExportFormat};
use crate::services::{Clock, ExpenseCandidate, ExpenseSession, RangeBound};

/// A parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Add(ExpenseCandidate),
    Bound(RangeBound, String),
    Clear,
    List,
    Total,
    Export {
        format: ExportFormat,
        path: Option<String>,
    },
}

/// Counts collected over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptReport {
    pub accepted: usize,
    pub rejected: usize,
    pub invalid_filters: usize,
}

impl ScriptReport {
    pub fn had_input_errors(&self) -> bool {
        self.rejected > 0 || self.invalid_filters > 0
    }
}

/// Split a line into whitespace-separated tokens; `"..."` keeps spaces
pub fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let mut token = String::new();
        if c == '"' {
            chars.next();
            let mut closed = false;
            while let Some(c) = chars.next() {
                match c {
                    '\\' => match chars.next() {
                        Some(escaped) => token.push(escaped),
                        None => return Err("dangling escape at end of line".into()),
                    },
                    '"' => {
                        closed = true;
                        break;
                    }
                    _ => token.push(c),
                }
            }
            if !closed {
                return Err("unterminated quote".into());
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                token.push(c);
                chars.next();
            }
        }
        tokens.push(token);
    }

    Ok(tokens)
}

/// Parse one line; blank lines and `#` comments yield `None`
pub fn parse_line(line: &str, line_no: usize) -> ExpenseResult<Option<ScriptCommand>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(trimmed).map_err(|message| ExpenseError::script(line_no, message))?;
    let (command, args) = match tokens.split_first() {
        Some(split) => split,
        None => return Ok(None),
    };

    let expect_args = |count: usize| -> ExpenseResult<()> {
        if args.len() == count {
            Ok(())
        } else {
            Err(ExpenseError::script(
                line_no,
                format!("'{}' takes {} argument(s), got {}", command, count, args.len()),
            ))
        }
    };

    let parsed = match command.as_str() {
        "add" => {
            expect_args(3)?;
            ScriptCommand::Add(ExpenseCandidate::new(
                args[0].clone(),
                args[1].clone(),
                args[2].clone(),
            ))
        }
        "from" | "to" => {
            expect_args(1)?;
            let bound = if command == "from" {
                RangeBound::Start
            } else {
                RangeBound::End
            };
            let value = if args[0] == "-" { String::new() } else { args[0].clone() };
            ScriptCommand::Bound(bound, value)
        }
        "clear" => {
            expect_args(0)?;
            ScriptCommand::Clear
        }
        "list" => {
            expect_args(0)?;
            ScriptCommand::List
        }
        "total" => {
            expect_args(0)?;
            ScriptCommand::Total
        }
        "export" => {
            if args.is_empty() || args.len() > 2 {
                return Err(ExpenseError::script(
                    line_no,
                    "usage: export <csv|json|yaml> [path|-]",
                ));
            }
            let format = ExportFormat::parse(&args[0]).ok_or_else(|| {
                ExpenseError::script(line_no, format!("unknown export format '{}'", args[0]))
            })?;
            ScriptCommand::Export {
                format,
                path: args.get(1).cloned(),
            }
        }
        other => {
            return Err(ExpenseError::script(
                line_no,
                format!("unknown command '{}'", other),
            ))
        }
    };

    Ok(Some(parsed))
}

/// Executes script commands against one session
pub struct ScriptRunner<'a, C: Clock> {
    session: ExpenseSession<C>,
    settings: &'a Settings,
    paths: &'a ExpensePaths,
    report: ScriptReport,
}

impl<'a, C: Clock> ScriptRunner<'a, C> {
    pub fn new(session: ExpenseSession<C>, settings: &'a Settings, paths: &'a ExpensePaths) -> Self {
        Self {
            session,
            settings,
            paths,
            report: ScriptReport::default(),
        }
    }

    pub fn session(&self) -> &ExpenseSession<C> {
        &self.session
    }

    pub fn report(&self) -> ScriptReport {
        self.report
    }

    /// Run every line of `reader`, writing results to `out`
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, out: &mut W) -> ExpenseResult<ScriptReport> {
        info!(today = %self.session.today(), "running expense script");

        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|e| {
                ExpenseError::Io(format!("Failed to read script line {}: {}", line_no, e))
            })?;

            if let Some(command) = parse_line(&line, line_no)? {
                self.execute(command, line_no, out)?;
            }
        }

        Ok(self.report)
    }

    /// Execute a single command
    pub fn execute<W: Write>(
        &mut self,
        command: ScriptCommand,
        line_no: usize,
        out: &mut W,
    ) -> ExpenseResult<()> {
        debug!(line = line_no, ?command, "executing");
        let symbol = self.settings.currency_symbol.as_str();

        match command {
            ScriptCommand::Add(candidate) => match self.session.submit(&candidate) {
                Ok(expense) => {
                    self.report.accepted += 1;
                    writeln!(
                        out,
                        "Added: {} {} {}",
                        expense.date().format(&self.settings.date_format),
                        expense.name(),
                        expense.amount().format_with_symbol(symbol)
                    )?;
                }
                Err(errors) => {
                    self.report.rejected += 1;
                    writeln!(out, "Rejected (line {}):", line_no)?;
                    write!(out, "{}", format_validation_errors(&errors))?;
                }
            },
            ScriptCommand::Bound(bound, value) => {
                match self.session.set_bound_text(bound, &value) {
                    Ok(()) => writeln!(out, "Filter: {}", self.session.range())?,
                    Err(err) => {
                        self.report.invalid_filters += 1;
                        writeln!(out, "Line {}: {}", line_no, err)?;
                    }
                }
            }
            ScriptCommand::Clear => {
                self.session.clear_range();
                writeln!(out, "Filter: {}", self.session.range())?;
            }
            ScriptCommand::List => {
                let filtered = self.session.filtered();
                writeln!(
                    out,
                    "{}",
                    format_range(&self.session.range(), filtered.len(), self.session.expenses().len())
                )?;
                write!(
                    out,
                    "{}",
                    format_expense_table(&filtered, symbol, &self.settings.date_format)
                )?;
                writeln!(out, "{}", format_total(self.session.total(), symbol))?;
            }
            ScriptCommand::Total => {
                writeln!(out, "{}", format_total(self.session.total(), symbol))?;
            }
            ScriptCommand::Export { format, path } => match path.as_deref() {
                Some("-") => export_view(&self.session, format, out)?,
                Some(path) => {
                    let path = PathBuf::from(path);
                    export_view_to_file(&self.session, format, &path)?;
                    writeln!(
                        out,
                        "Exported {} expenses to {}",
                        self.session.summary().count,
                        path.display()
                    )?;
                }
                None => {
                    let path = self.paths.export_dir().join(default_file_name(format));
                    export_view_to_file(&self.session, format, &path)?;
                    writeln!(
                        out,
                        "Exported {} expenses to {}",
                        self.session.summary().count,
                        path.display()
                    )?;
                }
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::FixedClock;
    use chrono::NaiveDate;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(script: &str) -> (String, ScriptReport, Money) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let session =
            ExpenseSession::with_clock(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));

        let mut runner = ScriptRunner::new(session, &settings, &paths);
        let mut out = Vec::new();
        let report = runner.run(Cursor::new(script), &mut out).unwrap();
        (
            String::from_utf8(out).unwrap(),
            report,
            runner.session().total(),
        )
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize(r#"add "Coffee beans" 4.50 2024-01-05"#).unwrap(),
            vec!["add", "Coffee beans", "4.50", "2024-01-05"]
        );
        assert_eq!(tokenize(r#"add "" 10 2024-01-05"#).unwrap()[1], "");
        assert_eq!(tokenize(r#""say \"hi\"""#).unwrap(), vec![r#"say "hi""#]);
        assert!(tokenize(r#"add "open 1 2"#).is_err());
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("   ", 1).unwrap(), None);
        assert_eq!(parse_line("# note", 1).unwrap(), None);
        assert_eq!(parse_line("list", 1).unwrap(), Some(ScriptCommand::List));
        assert_eq!(
            parse_line("to -", 1).unwrap(),
            Some(ScriptCommand::Bound(RangeBound::End, String::new()))
        );
        assert_eq!(
            parse_line("export yml", 1).unwrap(),
            Some(ScriptCommand::Export {
                format: ExportFormat::Yaml,
                path: None
            })
        );
    }

    #[test]
    fn test_parse_errors_carry_line_number() {
        let err = parse_line("remove 1", 7).unwrap_err();
        assert_eq!(err.to_string(), "Script error on line 7: unknown command 'remove'");

        let err = parse_line("add Coffee 4.50", 2).unwrap_err();
        assert!(matches!(err, ExpenseError::Script { line: 2, .. }));

        assert!(parse_line("export pdf", 1).is_err());
    }

    #[test]
    fn test_coffee_script() {
        let (output, report, total) = run("add Coffee 4.50 2024-01-05\nlist\n");
        assert_eq!(report.accepted, 1);
        assert_eq!(total, Money::from_cents(450));
        assert!(output.contains("Added: 2024-01-05 Coffee Rs 4.50"));
        assert!(output.contains("Showing 1 of 1 expenses (all dates)"));
        assert!(output.contains("Total Expense: Rs 4.50"));
    }

    #[test]
    fn test_rejection_continues() {
        let script = "add \"\" 10 2024-01-05\nadd Tea 0 2024-01-05\nadd Tea 2 2024-06-02\ntotal\n";
        let (output, report, total) = run(script);
        assert_eq!(report.rejected, 3);
        assert_eq!(report.accepted, 0);
        assert!(report.had_input_errors());
        assert_eq!(total, Money::zero());
        assert!(output.contains("Rejected (line 1):\n  name: This field is required"));
        assert!(output.contains("amount: Amount must be a positive number"));
        assert!(output.contains("date: Date must be today or earlier"));
        assert!(output.ends_with("Total Expense: Rs 0.00\n"));
    }

    #[test]
    fn test_range_script() {
        let script = "\
add A 10 2024-01-01
add B 25.40 2024-01-15
add C 7 2024-02-01
from 2024-01-10
to 2024-01-31
total
to nonsense
clear
total
";
        let (output, report, total) = run(script);
        assert_eq!(report.invalid_filters, 1);
        assert!(output.contains("Filter: 2024-01-10 to 2024-01-31"));
        assert!(output.contains("Total Expense: Rs 25.40"));
        assert!(output.contains("Line 7: Invalid filter date 'nonsense'"));
        assert!(output.contains("Filter: all dates"));
        assert_eq!(total, Money::from_cents(4240));
    }

    #[test]
    fn test_export_to_stdout() {
        let (output, _, _) = run("add Coffee 4.50 2024-01-05\nexport csv -\n");
        assert!(output.contains("ID,Name,Amount,Date"));
        assert!(output.contains(",Coffee,4.50,2024-01-05"));
    }

    #[test]
    fn test_malformed_command_aborts() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut runner = ScriptRunner::new(
            ExpenseSession::with_clock(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())),
            &settings,
            &paths,
        );

        let mut out = Vec::new();
        let err = runner
            .run(Cursor::new("add A 1 2024-01-01\nfrobnicate\nadd B 2 2024-01-02\n"), &mut out)
            .unwrap_err();
        assert!(matches!(err, ExpenseError::Script { line: 2, .. }));
        assert_eq!(runner.session().expenses().len(), 1);
    }
}
