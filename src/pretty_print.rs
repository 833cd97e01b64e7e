use crate::ReadError;
use ariadne::{Label, Report, ReportKind, Source};

impl ReadError {
    pub fn pretty_print(&self, input: &str) {
        let report = match self {
            ReadError::UnterminatedForm {
                expected,
                open_span,
            } => Report::build(ReportKind::Error, ("REPL", open_span.to_range()))
                .with_message(format!("expected '{}', got EOF", expected))
                .with_label(
                    Label::new(("REPL", open_span.to_range()))
                        .with_message("This delimiter is never closed"),
                ),
        };
        report
            .finish()
            .print(("REPL", Source::from(input)))
            .unwrap();
    }
}
