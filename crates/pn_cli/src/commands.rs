use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use anyhow::Context;
use pn_core::{Article, BatchAnalysis, Error, Result};
use pn_inference::{explain_score, human_readable_summary, insights, Report, ScoreKind};
use pn_news::{search_parties, PARTIES, STATES};
use serde_json::{json, Value};

/// Reads articles from a JSON file holding either a bare array or a full
/// news search response with an `articles` field.
pub fn load_articles(path: &Path) -> Result<Vec<Article>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)?;
    let articles = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map.remove("articles").ok_or_else(|| {
            Error::InvalidInput(format!("{} has no \"articles\" field", path.display()))
        })?,
        _ => {
            return Err(Error::InvalidInput(format!(
                "{} must hold a JSON array of articles",
                path.display()
            )))
        }
    };
    Ok(serde_json::from_value(articles)?)
}

pub fn party_lines(search: Option<&str>) -> Vec<String> {
    let parties = match search {
        Some(term) => search_parties(term),
        None => PARTIES.iter().collect(),
    };
    parties
        .into_iter()
        .map(|p| format!("{:<12} {}", p.target_name(), p.label))
        .collect()
}

pub fn state_lines() -> Vec<String> {
    STATES.iter().map(|s| s.to_string()).collect()
}

pub fn explain_line(kind: ScoreKind, value: f64) -> Result<String> {
    Ok(format!("{} {}: {}", kind, value, explain_score(kind, value)?))
}

/// Terminal rendering of a batch: one line per article, then insights.
pub fn render_batch(batch: &BatchAnalysis, articles: &[Article]) -> String {
    let mut out = String::new();
    for (i, (article, result)) in articles.iter().zip(&batch.results).enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} {:<8} {:+.4} ({:>5.1}%)  {}",
            i + 1,
            result.classification.emoji(),
            result.classification.as_str(),
            result.compound_score,
            result.confidence,
            article.title
        );
        if let Some(note) = result.context_note() {
            let _ = writeln!(out, "       ↳ {}", note);
        }
    }
    if !batch.results.is_empty() {
        out.push('\n');
    }

    for line in insights(&batch.statistics) {
        let _ = writeln!(out, "• {}", line.replace("**", ""));
    }
    let _ = writeln!(out, "\n{}", human_readable_summary(batch));
    out
}

pub fn batch_json(batch: &BatchAnalysis) -> Result<String> {
    let value = json!({
        "results": batch.results,
        "statistics": batch.statistics,
        "insights": insights(&batch.statistics),
        "summary": human_readable_summary(batch),
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Writes JSON for a `.json` path and Markdown for anything else.
pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let body = if is_json { report.to_json()? } else { report.to_markdown() };
    fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;
    use pn_inference::models::ScriptedModel;
    use pn_inference::prelude::*;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::new(Arc::new(ScriptedModel::new().with("wins", 0.6, 0.4)))
    }

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_bare_array() {
        let file = write_temp(r#"[{"title": "BJP wins", "description": "x"}, {"title": null}]"#);
        let articles = load_articles(file.path()).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[1].title, "");
    }

    #[test]
    fn test_load_search_response() {
        let file = write_temp(r#"{"status": "ok", "articles": [{"title": "AAP wins"}]}"#);
        let articles = load_articles(file.path()).unwrap();
        assert_eq!(articles[0].title, "AAP wins");
    }

    #[test]
    fn test_load_errors() {
        let file = write_temp(r#"{"status": "ok"}"#);
        assert!(matches!(load_articles(file.path()), Err(Error::InvalidInput(_))));

        let file = write_temp("42");
        assert!(matches!(load_articles(file.path()), Err(Error::InvalidInput(_))));

        let file = write_temp("not json");
        assert!(matches!(load_articles(file.path()), Err(Error::Serialization(_))));

        let missing = Path::new("/definitely/not/here.json");
        assert!(matches!(load_articles(missing), Err(Error::External(_))));
    }

    #[test]
    fn test_party_lines() {
        assert_eq!(party_lines(None).len(), 23);
        let lines = party_lines(Some("dal"));
        assert!(lines.len() <= 5);
        assert!(lines.iter().all(|l| l.to_lowercase().contains("dal")));
        assert_eq!(state_lines().len(), 37);
    }

    #[test]
    fn test_render_batch() {
        let articles = vec![Article::new("BJP wins", ""), Article::new("Quiet day", "")];
        let batch = analyzer().analyze_batch(&articles, Some("BJP")).unwrap();
        let out = render_batch(&batch, &articles);

        assert!(out.contains("😊 Positive"));
        assert!(out.contains("BJP wins"));
        assert!(out.contains("may not be directly about BJP"));
        assert!(out.contains("We analyzed 2 articles"));
        assert!(!out.contains("**"));

        let json: Value = serde_json::from_str(&batch_json(&batch).unwrap()).unwrap();
        assert_eq!(json["statistics"]["total_articles"], 2);
    }

    #[test]
    fn test_write_report() {
        let articles = vec![Article::new("BJP wins", "")];
        let batch = analyzer().analyze_batch(&articles, None).unwrap();
        let report = Report::new(ReportMeta::new("BJP", None), &batch, &articles);
        let dir = tempfile::tempdir().unwrap();

        let md = dir.path().join("report.md");
        write_report(&md, &report).unwrap();
        assert!(fs::read_to_string(&md).unwrap().starts_with("# Political News"));

        let json_path = dir.path().join("report.JSON");
        write_report(&json_path, &report).unwrap();
        let parsed: Report = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(parsed.meta.party, "BJP");
    }

    #[test]
    fn test_explain_line() {
        assert!(explain_line(ScoreKind::Confidence, 85.0).unwrap().contains("very certain"));
    }

    #[test]
    fn test_explain_line_rejects_nan() {
        assert!(matches!(
            explain_line(ScoreKind::Compound, f64::NAN),
            Err(Error::InvalidInput(_))
        ));
        assert!(explain_line(ScoreKind::Subjectivity, f64::NEG_INFINITY).is_err());
    }
}
