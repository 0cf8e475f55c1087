use crate::domain::model::ResolvedEndpoint;
use crate::utils::error::{Result, StatusError};
use std::borrow::Cow;
use std::io::Write;

pub const SEPARATOR: &str = ": ";

/// Always a single physical line: control characters in the label or URL are escaped.
pub fn format_line(endpoint: &ResolvedEndpoint) -> String {
    format!(
        "{}{}{}",
        escape_control(&endpoint.label),
        SEPARATOR,
        escape_control(&endpoint.url)
    )
}

fn escape_control(value: &str) -> Cow<'_, str> {
    if !value.chars().any(char::is_control) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

/// Writes one line per endpoint and flushes.
///
/// Stops at the first failed write; nothing after it is attempted.
/// Returns the number of lines written.
pub fn render<W: Write>(writer: &mut W, endpoints: &[ResolvedEndpoint]) -> Result<usize> {
    for endpoint in endpoints {
        writeln!(writer, "{}", format_line(endpoint)).map_err(StatusError::OutputError)?;
    }
    writer.flush().map_err(StatusError::OutputError)?;

    Ok(endpoints.len())
}

pub fn render_to_string(endpoints: &[ResolvedEndpoint]) -> String {
    endpoints
        .iter()
        .map(|e| format_line(e) + "\n")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, ErrorKind};

    fn endpoint(label: &str, url: &str) -> ResolvedEndpoint {
        ResolvedEndpoint {
            label: label.to_string(),
            url: url.to_string(),
        }
    }

    /// Accepts `remaining` writes, then fails every write and records attempts.
    struct FailingWriter {
        remaining: usize,
        attempts: usize,
        written: Vec<u8>,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            if self.remaining == 0 {
                return Err(io::Error::new(ErrorKind::BrokenPipe, "pipe closed"));
            }
            self.remaining -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_format_line() {
        let line = format_line(&endpoint("Operate", "http://localhost:9090/operate"));
        assert_eq!(line, "Operate: http://localhost:9090/operate");
    }

    #[test]
    fn test_format_line_escapes_line_breaks() {
        let line = format_line(&endpoint("Oper\nate", "http://localhost:9090/oper\r\nate"));
        assert_eq!(line, "Oper\\nate: http://localhost:9090/oper\\r\\nate");
        assert_eq!(line.lines().count(), 1);
    }

    #[test]
    fn test_render_one_physical_line_per_entry() {
        let endpoints = vec![
            endpoint("Oper\nate", "http://localhost:9090/operate"),
            endpoint("Tasklist", "http://localhost:9090/task\u{7}list"),
        ];
        let mut out = Vec::new();

        assert_eq!(render(&mut out, &endpoints).unwrap(), 2);

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert_eq!(
            out,
            "Oper\\nate: http://localhost:9090/operate\nTasklist: http://localhost:9090/task\\u{7}list\n"
        );
    }

    #[test]
    fn test_render_writes_lines_in_order() {
        let endpoints = vec![
            endpoint("Operate", "http://localhost:9090/operate"),
            endpoint("Tasklist", "http://localhost:9090/tasklist"),
        ];
        let mut out = Vec::new();

        let count = render(&mut out, &endpoints).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Operate: http://localhost:9090/operate\nTasklist: http://localhost:9090/tasklist\n"
        );
    }

    #[test]
    fn test_render_matches_render_to_string() {
        let endpoints = vec![endpoint("Identity", "http://localhost:8080/identity")];
        let mut out = Vec::new();
        render(&mut out, &endpoints).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), render_to_string(&endpoints));
    }

    #[test]
    fn test_render_empty_writes_nothing() {
        let mut out = Vec::new();
        assert_eq!(render(&mut out, &[]).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_aborts_on_first_failure() {
        let endpoints = vec![
            endpoint("Operate", "http://localhost:9090/operate"),
            endpoint("Tasklist", "http://localhost:9090/tasklist"),
        ];
        let mut writer = FailingWriter {
            remaining: 0,
            attempts: 0,
            written: Vec::new(),
        };

        let err = render(&mut writer, &endpoints).unwrap_err();

        assert!(matches!(err, StatusError::OutputError(ref e) if e.kind() == ErrorKind::BrokenPipe));
        assert_eq!(writer.attempts, 1);
        assert!(writer.written.is_empty());
    }
}
