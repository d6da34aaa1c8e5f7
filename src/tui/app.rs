//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the session, the five text inputs and the messages shown next to them.

use std::path::PathBuf;

use tracing::warn;

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::export::{default_file_name, export_view_to_file};
use crate::services::{
    Clock, ExpenseCandidate, ExpenseField, ExpenseSession, RangeBound, SystemClock,
    ValidationErrors,
};

use super::widgets::TextInput;

/// Which input currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Amount,
    Date,
    Start,
    End,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Start,
            Self::Start => Self::End,
            Self::End => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::End,
            Self::Amount => Self::Name,
            Self::Date => Self::Amount,
            Self::Start => Self::Date,
            Self::End => Self::Start,
        }
    }

    /// The filter bound edited by this field, if any
    pub fn bound(self) -> Option<RangeBound> {
        match self {
            Self::Start => Some(RangeBound::Start),
            Self::End => Some(RangeBound::End),
            _ => None,
        }
    }

    /// The entry-form field this input feeds, if any
    pub fn expense_field(self) -> Option<ExpenseField> {
        match self {
            Self::Name => Some(ExpenseField::Name),
            Self::Amount => Some(ExpenseField::Amount),
            Self::Date => Some(ExpenseField::Date),
            _ => None,
        }
    }
}

/// Main application state
pub struct App<'a, C: Clock = SystemClock> {
    pub session: ExpenseSession<C>,

    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a ExpensePaths,

    /// Whether the app should quit
    pub should_quit: bool,

    pub focused_field: FormField,

    pub name_input: TextInput,
    pub amount_input: TextInput,
    pub date_input: TextInput,
    pub start_input: TextInput,
    pub end_input: TextInput,

    /// Errors from the last rejected submission
    pub field_errors: ValidationErrors,

    /// Message for a filter input that does not parse
    pub start_error: Option<String>,
    pub end_error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a, C: Clock> App<'a, C> {
    /// Create a new App instance
    pub fn new(session: ExpenseSession<C>, settings: &'a Settings, paths: &'a ExpensePaths) -> Self {
        let mut app = Self {
            session,
            settings,
            paths,
            should_quit: false,
            focused_field: FormField::default(),
            name_input: TextInput::new().label("Name").placeholder("What was it?"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            date_input: TextInput::new().label("Date").placeholder("YYYY-MM-DD"),
            start_input: TextInput::new().label("From").placeholder("YYYY-MM-DD"),
            end_input: TextInput::new().label("To").placeholder("YYYY-MM-DD"),
            field_errors: ValidationErrors::new(),
            start_error: None,
            end_error: None,
            status_message: None,
        };
        app.sync_focus();
        app
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn input(&self, field: FormField) -> &TextInput {
        match field {
            FormField::Name => &self.name_input,
            FormField::Amount => &self.amount_input,
            FormField::Date => &self.date_input,
            FormField::Start => &self.start_input,
            FormField::End => &self.end_input,
        }
    }

    pub fn input_mut(&mut self, field: FormField) -> &mut TextInput {
        match field {
            FormField::Name => &mut self.name_input,
            FormField::Amount => &mut self.amount_input,
            FormField::Date => &mut self.date_input,
            FormField::Start => &mut self.start_input,
            FormField::End => &mut self.end_input,
        }
    }

    /// The inline message under a filter input
    pub fn bound_error(&self, bound: RangeBound) -> Option<&str> {
        match bound {
            RangeBound::Start => self.start_error.as_deref(),
            RangeBound::End => self.end_error.as_deref(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focused_field = self.focused_field.next();
        self.sync_focus();
    }

    pub fn focus_prev(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        let focused = self.focused_field;
        for field in [
            FormField::Name,
            FormField::Amount,
            FormField::Date,
            FormField::Start,
            FormField::End,
        ] {
            self.input_mut(field).focused = field == focused;
        }
    }

    /// Apply an edit to the focused input
    ///
    /// Editing a form field clears its error. Editing a filter field
    /// re-applies that bound immediately.
    pub fn edit_focused(&mut self, edit: impl FnOnce(&mut TextInput)) {
        let field = self.focused_field;
        edit(self.input_mut(field));

        if let Some(expense_field) = field.expense_field() {
            self.field_errors.remove(expense_field);
        }
        if let Some(bound) = field.bound() {
            self.apply_bound(bound);
        }
    }

    /// Re-apply a filter bound from its input text
    ///
    /// Text that does not parse leaves the previous bound active and shows
    /// a message under the input.
    pub fn apply_bound(&mut self, bound: RangeBound) {
        let text = match bound {
            RangeBound::Start => self.start_input.value().to_string(),
            RangeBound::End => self.end_input.value().to_string(),
        };

        let error = self
            .session
            .set_bound_text(bound, &text)
            .err()
            .map(|_| "Enter a date as YYYY-MM-DD".to_string());

        match bound {
            RangeBound::Start => self.start_error = error,
            RangeBound::End => self.end_error = error,
        }
    }

    /// Clear the focused filter bound (no-op on form fields)
    pub fn clear_focused_bound(&mut self) {
        if let Some(bound) = self.focused_field.bound() {
            self.input_mut(self.focused_field).clear();
            self.apply_bound(bound);
            self.set_status(match bound {
                RangeBound::Start => "Start date cleared",
                RangeBound::End => "End date cleared",
            });
        }
    }

    /// Submit the entry form
    ///
    /// On success the name and amount are cleared and the date is kept for
    /// the next entry. On failure every failing field gets its message.
    pub fn submit(&mut self) {
        let candidate = ExpenseCandidate::new(
            self.name_input.value(),
            self.amount_input.value(),
            self.date_input.value(),
        );

        match self.session.submit(&candidate) {
            Ok(expense) => {
                self.field_errors = ValidationErrors::new();
                self.name_input.clear();
                self.amount_input.clear();
                self.set_status(format!(
                    "Added {} ({})",
                    expense.name(),
                    expense.amount().format_with_symbol(&self.settings.currency_symbol)
                ));
                self.focused_field = FormField::Name;
                self.sync_focus();
            }
            Err(errors) => {
                self.set_status(format!("{} field(s) need attention", errors.len()));
                if let Some((field, _)) = errors.iter().next() {
                    self.focused_field = match field {
                        ExpenseField::Name => FormField::Name,
                        ExpenseField::Amount => FormField::Amount,
                        ExpenseField::Date => FormField::Date,
                    };
                    self.sync_focus();
                }
                self.field_errors = errors;
            }
        }
    }

    /// Export the current view to the export directory
    pub fn export(&mut self) -> ExpenseResult<PathBuf> {
        let format = self.settings.default_export_format;
        let path = self.paths.export_dir().join(default_file_name(format));
        export_view_to_file(&self.session, format, &path)?;
        Ok(path)
    }

    /// Export and report the outcome in the status bar
    pub fn export_with_status(&mut self) {
        match self.export() {
            Ok(path) => {
                let count = self.session.summary().count;
                self.set_status(format!("Exported {} expenses to {}", count, path.display()));
            }
            Err(e) => {
                warn!(error = %e, "export failed");
                self.set_status(format!("Export failed: {}", e));
            }
        }
    }
}
