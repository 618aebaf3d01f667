use ariadne::{Color, Label, Report, ReportKind, Source};
use microlisp::{MicrolispError, ParseError};

/// Format a MicrolispError with fancy terminal output using Ariadne
pub fn format_error(error: &MicrolispError, source_id: &str, source_text: &str) -> String {
    match error {
        MicrolispError::Parse(details) => format_parse_error(details, source_id, source_text),
        MicrolispError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
        MicrolispError::Json(msg) => format!("JSON error: {}", msg),
    }
}

fn format_parse_error(error: &ParseError, source_id: &str, source_text: &str) -> String {
    let source_id = source_id.to_string();
    let span = label_span(source_text, error.offset());
    let mut output = Vec::new();

    let report = Report::build(ReportKind::Error, &source_id, span.start)
        .with_message(format!("Parse error: {}", error))
        .with_label(
            Label::new((&source_id, span))
                .with_message("")
                .with_color(Color::Red),
        )
        .with_help(error.suggestion());

    match report
        .finish()
        .write((&source_id, Source::from(source_text)), &mut output)
    {
        Ok(_) => String::from_utf8_lossy(&output).to_string(),
        Err(_) => {
            // Fallback to simple format
            format!("Parse error: {} at byte {}", error, error.offset())
        }
    }
}

/// One-character span at byte `offset`, in the character positions ariadne
/// expects. Pulled back onto the last character when the error points at
/// the end of input.
fn label_span(source_text: &str, offset: usize) -> std::ops::Range<usize> {
    let len = source_text.chars().count();
    let offset = source_text
        .get(..offset)
        .map_or(len, |prefix| prefix.chars().count());
    if len == 0 {
        0..0
    } else if offset >= len {
        len - 1..len
    } else {
        offset..offset + 1
    }
}
