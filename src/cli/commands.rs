// CLI command dispatch - maps parsed arguments onto glossary operations

use clap::ArgMatches;
use serde::Serialize;
use std::path::Path;

use crate::error::GlossaryError;
use crate::glossary::{
    Glossary, MetaField, SearchHit, SearchMode, SearchOptions, DEFAULT_MAX_RESULTS,
};
use crate::store::{backend, Entry};

/// Metadata summary printed by `info`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub title: String,
    pub author: String,
    pub description: String,
    pub revision_date: String,
    pub path: String,
    pub keywords: usize,
}

/// Result of a command, rendered for humans or as JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    Message(String),
    Entry { keyword: String, entry: Entry },
    Hits(Vec<SearchHit>),
    Summary(Summary),
}

impl Output {
    pub fn render(&self, json: bool) -> String {
        if json {
            return serde_json::to_string_pretty(self)
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e));
        }

        match self {
            Output::Message(message) => message.clone(),
            Output::Entry { keyword, entry } => {
                let mut lines = vec![keyword.clone()];
                lines.push("  Definitions:".to_string());
                lines.extend(entry.definitions().iter().map(|d| format!("    - {}", d)));
                lines.push("  References:".to_string());
                lines.extend(entry.references().iter().map(|r| format!("    - {}", r)));
                lines.join("\n")
            }
            Output::Hits(hits) if hits.is_empty() => "(no matches)".to_string(),
            Output::Hits(hits) => hits
                .iter()
                .enumerate()
                .map(|(i, hit)| format!("{}) {} (distance {})", i + 1, hit.keyword, hit.distance))
                .collect::<Vec<_>>()
                .join("\n"),
            Output::Summary(summary) => format!(
                concat!(
                    "Title:         {}\n",
                    "Author:        {}\n",
                    "Description:   {}\n",
                    "Revision date: {}\n",
                    "File:          {}\n",
                    "Keywords:      {}"
                ),
                summary.title,
                summary.author,
                summary.description,
                summary.revision_date,
                summary.path,
                summary.keywords
            ),
        }
    }
}

fn arg<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

/// Run the subcommand in `matches` against the glossary at `path`
pub fn execute(matches: &ArgMatches, path: &Path) -> Result<Output, GlossaryError> {
    match matches.subcommand() {
        Some(("new", sub)) => create(sub, path),
        Some(("add", sub)) => {
            let mut glossary = Glossary::open(path)?;
            let keyword = arg(sub, "keyword");
            glossary.add(
                keyword,
                arg(sub, "definition"),
                arg(sub, "reference"),
                sub.get_flag("case-sensitive"),
            )?;
            glossary.save()?;
            Ok(Output::Message(format!("Updated keyword '{}'", keyword)))
        }
        Some(("remove", sub)) => {
            let mut glossary = Glossary::open(path)?;
            let keyword = arg(sub, "keyword");
            glossary.remove(keyword, arg(sub, "definition"), arg(sub, "reference"))?;
            let message = if glossary.contains_key(keyword) {
                format!("Updated keyword '{}'", keyword)
            } else {
                format!("Removed keyword '{}'", keyword)
            };
            glossary.save()?;
            Ok(Output::Message(message))
        }
        Some(("show", sub)) => {
            let glossary = Glossary::open(path)?;
            let keyword = arg(sub, "keyword");
            let entry = glossary
                .get(keyword)
                .cloned()
                .ok_or_else(|| GlossaryError::UnknownKeyword(keyword.to_string()))?;
            Ok(Output::Entry {
                keyword: keyword.to_string(),
                entry,
            })
        }
        Some(("search", sub)) => {
            let glossary = Glossary::open(path)?;
            let mode = arg(sub, "mode")
                .parse::<SearchMode>()
                .map_err(GlossaryError::InvalidArgument)?;
            let options = SearchOptions {
                case_sensitive: sub.get_flag("case-sensitive"),
                mode,
                max_results: sub.get_one::<usize>("max").copied().unwrap_or(DEFAULT_MAX_RESULTS),
            };
            Ok(Output::Hits(glossary.search(arg(sub, "query"), &options)?))
        }
        Some(("meta", sub)) => {
            let mut glossary = Glossary::open(path)?;
            let field = arg(sub, "field")
                .parse::<MetaField>()
                .map_err(GlossaryError::InvalidArgument)?;
            glossary.edit_meta(field, arg(sub, "value"));
            glossary.save()?;
            Ok(Output::Message(format!("Updated {}", arg(sub, "field"))))
        }
        Some(("info", _)) => {
            let glossary = Glossary::open(path)?;
            Ok(Output::Summary(Summary {
                title: glossary.title().to_string(),
                author: glossary.author().to_string(),
                description: glossary.description().to_string(),
                revision_date: glossary.revision_date().to_string(),
                path: glossary.path().display().to_string(),
                keywords: glossary.len(),
            }))
        }
        Some((name, _)) => Err(GlossaryError::InvalidArgument(format!(
            "Unknown command: {}",
            name
        ))),
        None => Err(GlossaryError::InvalidArgument("No command given".to_string())),
    }
}

/// `new`: write a blank glossary, refusing to replace an existing path
fn create(matches: &ArgMatches, path: &Path) -> Result<Output, GlossaryError> {
    if path.exists() {
        return Err(GlossaryError::InvalidArgument(format!(
            "{:?} already exists",
            path
        )));
    }

    let glossary = Glossary::open_or_create(
        path,
        arg(matches, "title"),
        arg(matches, "author"),
        arg(matches, "description"),
    )?;
    backend::persist(&glossary.to_document(), glossary.path())?;

    Ok(Output::Message(format!("Created {}", path.display())))
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
