//! Restore snippet
//!
//! osleague.tools keeps completion state in `localStorage.tasks` as a
//! versioned JSON blob. The generated snippet, pasted into the site's
//! browser console, replaces that blob's `tasks` array with the
//! resolved ids and reloads the page. The embedded guard refuses to
//! touch a blob whose schema version differs from the one this tool
//! targets. The template text must stay byte-identical to what the
//! site's schema expects; only the identifier array varies.

/// Storage schema version of osleague.tools the snippet targets. When
/// the site bumps its schema this constant changes with the template.
const STORAGE_VERSION: u32 = 3;

/// Renders the snippet with `ids` as the replacement task array.
pub fn render(ids: &[String]) -> Result<String, serde_json::Error> {
    let payload = serde_json::to_string(ids)?;

    Ok(format!(
        r#"(function(e) {{
  let orig = JSON.parse(localStorage.tasks);
  if(orig.version != {STORAGE_VERSION}) throw new Error("Wrong version: " + orig.version);
  orig.tasks = e;
  localStorage.tasks = JSON.stringify(orig);
  window.location.reload();
}})({payload});"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_ids_into_the_template() {
        let snippet = render(&["1".to_string(), "2".to_string()]).unwrap();

        assert_eq!(
            snippet,
            concat!(
                "(function(e) {\n",
                "  let orig = JSON.parse(localStorage.tasks);\n",
                "  if(orig.version != 3) throw new Error(\"Wrong version: \" + orig.version);\n",
                "  orig.tasks = e;\n",
                "  localStorage.tasks = JSON.stringify(orig);\n",
                "  window.location.reload();\n",
                "})([\"1\",\"2\"]);",
            )
        );
    }

    #[test]
    fn empty_id_list_is_a_valid_payload() {
        let snippet = render(&[]).unwrap();
        assert!(snippet.ends_with("})([]);"));
    }

    #[test]
    fn no_trailing_newline() {
        let snippet = render(&["7".to_string()]).unwrap();
        assert!(snippet.ends_with(");"));
    }

    #[test]
    fn ids_are_json_escaped() {
        let snippet = render(&["we\"ird".to_string()]).unwrap();
        assert!(snippet.contains(r#"})(["we\"ird"]);"#));
    }
}
