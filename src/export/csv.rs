//! CSV report
//!
//! `Name,Completed` header and one row per observed task, in feed
//! order, completed rendered as `true`/`false`. Lines end with CRLF
//! and fields containing commas, quotes, or line breaks are quoted
//! with embedded quotes doubled (RFC 4180). No rows are filtered or
//! deduplicated.

use crate::domain::TaskState;

/// Renders the report for every observed row.
pub fn render(states: &[TaskState]) -> String {
    let mut out = String::from("Name,Completed\r\n");

    for state in states {
        out.push_str(&escape(&state.name));
        out.push(',');
        out.push_str(if state.completed { "true" } else { "false" });
        out.push_str("\r\n");
    }

    out
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_rows_in_input_order() {
        let states = vec![TaskState::new("A", true), TaskState::new("B", false)];
        assert_eq!(render(&states), "Name,Completed\r\nA,true\r\nB,false\r\n");
    }

    #[test]
    fn empty_input_renders_header_only() {
        assert_eq!(render(&[]), "Name,Completed\r\n");
    }

    #[test]
    fn one_line_per_row_plus_header() {
        let states: Vec<TaskState> = (0..5)
            .map(|i| TaskState::new(format!("Task {i}"), i % 2 == 0))
            .collect();

        let out = render(&states);
        assert_eq!(out.matches("\r\n").count(), states.len() + 1);
        assert!(out.ends_with("\r\n"));
    }

    #[test]
    fn duplicate_rows_are_kept() {
        let states = vec![TaskState::new("Same", true), TaskState::new("Same", true)];
        assert_eq!(render(&states), "Name,Completed\r\nSame,true\r\nSame,true\r\n");
    }

    #[test]
    fn escape_plain_field() {
        assert_eq!(escape("hello"), "hello");
    }

    #[test]
    fn escape_field_with_comma() {
        assert_eq!(escape("hello,world"), "\"hello,world\"");
    }

    #[test]
    fn escape_field_with_quotes() {
        assert_eq!(escape("say \"hello\""), "\"say \"\"hello\"\"\"");
    }

    #[test]
    fn escape_field_with_newline() {
        assert_eq!(escape("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn quoted_name_round_trips_into_a_row() {
        let states = vec![TaskState::new("Cook, then serve", true)];
        assert_eq!(
            render(&states),
            "Name,Completed\r\n\"Cook, then serve\",true\r\n"
        );
    }
}
