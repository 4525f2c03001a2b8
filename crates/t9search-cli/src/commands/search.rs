use crate::commands::{write_json, Context};
use crate::input::ContactReader;
use anyhow::Result;
use clap::Args;
use std::io::{BufRead, Write};
use t9search_config::DefaultMode;
use t9search_core::{parse_max_distance, ContactEvaluator, ContactMatchDto, MatchMode, Query};
use tracing::trace;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Number to look for: digits 0-9, the first may be '+'
    #[arg(value_name = "NUMBER")]
    pub number: Option<String>,
    /// Allow any characters between the matched digits
    #[arg(short = 's', requires = "number", conflicts_with = "max_distance")]
    pub subsequence: bool,
    /// Accept contacts within this edit distance of NUMBER
    #[arg(short = 'l', value_name = "LEVENSHTEIN_DISTANCE", requires = "number")]
    pub max_distance: Option<String>,
}

impl SearchArgs {
    pub fn to_query(&self, default_mode: DefaultMode) -> Result<Query> {
        let Some(number) = self.number.as_deref() else {
            return Ok(Query::match_all());
        };

        let mode = if self.subsequence {
            MatchMode::Subsequence
        } else if let Some(raw) = self.max_distance.as_deref() {
            MatchMode::EditDistance(parse_max_distance(raw)?)
        } else {
            match default_mode {
                DefaultMode::Exact => MatchMode::Exact,
                DefaultMode::Subsequence => MatchMode::Subsequence,
            }
        };

        Ok(Query::new(number, mode)?)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary {
    pub total: usize,
    pub matched: usize,
}

/// Streams contacts from `input` and writes every match to `out` in arrival order.
///
/// Plain matches are written as soon as they are found, so a malformed record
/// later in the stream leaves earlier lines in place and suppresses the
/// not-found line.
pub fn search_contacts<R: BufRead, W: Write>(
    ctx: &Context<'_>,
    query: &Query,
    input: R,
    mut out: W,
) -> Result<SearchSummary> {
    let evaluator = ContactEvaluator::new(query);
    let separator = ctx.config.output.separator.as_str();
    let mut summary = SearchSummary::default();
    let mut found = Vec::new();

    for record in ContactReader::new(input) {
        let contact = record?;
        summary.total += 1;

        let Some(matched_on) = evaluator.evaluate(&contact) else {
            continue;
        };
        summary.matched += 1;
        trace!(name = contact.name(), ?matched_on, "contact matched");

        if ctx.json {
            found.push(ContactMatchDto::new(&contact, matched_on));
        } else {
            writeln!(out, "{}{}{}", contact.name(), separator, contact.number())?;
        }
    }

    if ctx.json {
        write_json(&mut out, &found)?;
    } else if summary.matched == 0 {
        writeln!(out, "{}", ctx.config.output.not_found)?;
    }
    out.flush()?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::{search_contacts, SearchArgs, SearchSummary};
    use crate::commands::Context;
    use crate::input::InputError;
    use std::io::Cursor;
    use t9search_config::{AppConfig, DefaultMode};
    use t9search_core::{CoreError, MatchMode, Query};

    fn run(query: &Query, input: &str, json: bool) -> (anyhow::Result<SearchSummary>, String) {
        let config = AppConfig::default();
        let ctx = Context {
            json,
            config: &config,
        };
        let mut out = Vec::new();
        let result = search_contacts(
            &ctx,
            query,
            Cursor::new(input.as_bytes().to_vec()),
            &mut out,
        );
        (result, String::from_utf8(out).expect("utf8"))
    }

    fn args(number: Option<&str>, subsequence: bool, max_distance: Option<&str>) -> SearchArgs {
        SearchArgs {
            number: number.map(str::to_string),
            subsequence,
            max_distance: max_distance.map(str::to_string),
        }
    }

    #[test]
    fn prints_all_matches_in_input_order() {
        let query = Query::new("123", MatchMode::Exact).unwrap();
        let (result, out) = run(&query, "John\n123456\nMary\n789123\n", false);
        assert_eq!(
            result.unwrap(),
            SearchSummary {
                total: 2,
                matched: 2
            }
        );
        assert_eq!(out, "john, 123456\nmary, 789123\n");
    }

    #[test]
    fn prints_not_found_when_nothing_matches() {
        let query = Query::new("999", MatchMode::Exact).unwrap();
        let (result, out) = run(&query, "ann\n555\n", false);
        assert_eq!(result.unwrap().matched, 0);
        assert_eq!(out, "Not found\n");
    }

    #[test]
    fn empty_input_is_not_found() {
        let (result, out) = run(&Query::match_all(), "", false);
        assert_eq!(result.unwrap().total, 0);
        assert_eq!(out, "Not found\n");
    }

    #[test]
    fn invalid_record_keeps_earlier_output_and_skips_sentinel() {
        let query = Query::match_all();
        let (result, out) = run(&query, "ann\n555\nbob\n12-34\neve\n1\n", false);
        let err = result.unwrap_err();
        let input_err = err.downcast_ref::<InputError>().expect("input error");
        assert!(matches!(
            input_err,
            InputError::Invalid {
                line: 4,
                source: CoreError::InvalidNumber
            }
        ));
        assert_eq!(out, "ann, 555\n");
    }

    #[test]
    fn json_output_collects_matches() {
        let query = Query::new("266", MatchMode::Exact).unwrap();
        let (result, out) = run(&query, "Ann\n555\nBob\n266\nEve\n1\n", true);
        assert_eq!(result.unwrap().matched, 2);
        let value: serde_json::Value = serde_json::from_str(&out).expect("json");
        let items = value.as_array().expect("array");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "ann");
        assert_eq!(items[0]["matched_on"], "name");
        assert_eq!(items[1]["number"], "266");
        assert_eq!(items[1]["matched_on"], "number");
    }

    #[test]
    fn json_output_without_matches_is_empty_array() {
        let query = Query::new("999", MatchMode::Exact).unwrap();
        let (_, out) = run(&query, "ann\n555\n", true);
        let value: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(value.as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn to_query_without_number_matches_all() {
        let query = args(None, false, None)
            .to_query(DefaultMode::Subsequence)
            .unwrap();
        assert_eq!(query, Query::match_all());
    }

    #[test]
    fn to_query_picks_mode_from_switches() {
        let exact = args(Some("12"), false, None)
            .to_query(DefaultMode::Exact)
            .unwrap();
        assert_eq!(exact.mode(), MatchMode::Exact);

        let scattered = args(Some("12"), true, None)
            .to_query(DefaultMode::Exact)
            .unwrap();
        assert_eq!(scattered.mode(), MatchMode::Subsequence);

        let fuzzy = args(Some("12"), false, Some("2"))
            .to_query(DefaultMode::Exact)
            .unwrap();
        assert_eq!(fuzzy.mode(), MatchMode::EditDistance(2));

        let configured = args(Some("12"), false, None)
            .to_query(DefaultMode::Subsequence)
            .unwrap();
        assert_eq!(configured.mode(), MatchMode::Subsequence);
    }

    #[test]
    fn to_query_rejects_bad_values() {
        let err = args(Some("12"), false, Some("x"))
            .to_query(DefaultMode::Exact)
            .unwrap_err();
        assert!(err.downcast_ref::<CoreError>().is_some());

        let err = args(Some("12ab"), false, None)
            .to_query(DefaultMode::Exact)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoreError>(),
            Some(&CoreError::InvalidQueryNumber(100))
        );
    }
}
