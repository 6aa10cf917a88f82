//! HTML pages served by the front-end

const INDEX: &str = include_str!("../templates/index.html");
const HOME: &str = include_str!("../templates/home.html");

/// Landing page.
pub fn index() -> String {
    INDEX.to_string()
}

/// Prediction form, optionally showing a result or an error.
pub fn home(results: Option<f64>, error: Option<&str>) -> String {
    let results = results.map(|value| format!("{value}")).unwrap_or_default();
    let error = error
        .map(|message| format!("<p class=\"error\">{}</p>", html_escape::encode_text(message)))
        .unwrap_or_default();
    HOME.replace("{{results}}", &results)
        .replace("{{error}}", &error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_has_no_placeholders() {
        let page = home(None, None);
        assert!(!page.contains("{{"));
        assert!(page.contains("name=\"ethnicity\""));
    }

    #[test]
    fn test_result_and_error_are_injected() {
        let page = home(Some(71.5), None);
        assert!(page.contains("The prediction is 71.5"));

        let page = home(None, Some("Field 'reading_score' must be a number, got '<b>'"));
        assert!(page.contains("&lt;b&gt;"));
        assert!(!page.contains("<b>"));

        let page = home(None, Some("reading & writing </p><script>x</script>"));
        assert!(page.contains("reading &amp; writing &lt;/p&gt;&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }
}
