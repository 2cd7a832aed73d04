use anyhow::Result;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::data_models::{AnalysisResult, KeywordEntry, Sentiment};

pub const WORD_CLOUD_SIZE: usize = 30;
pub const BAR_CHART_SIZE: usize = 15;

/// A keyword with its frequency relative to the largest one in the same view.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WeightedKeyword {
    pub word: String,
    pub frequency: u32,
    pub weight: f64,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSummary {
    pub total_keywords: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub by_source: BTreeMap<String, usize>,
    pub top_keyword: Option<String>,
    pub positive_ratio_percent: u32,
}

impl KeywordSummary {
    pub fn from_keywords(keywords: &[KeywordEntry]) -> Self {
        let mut summary = KeywordSummary {
            total_keywords: keywords.len(),
            top_keyword: keywords.first().map(|k| k.word.clone()),
            ..Default::default()
        };

        for k in keywords {
            match k.sentiment {
                Sentiment::Positive => summary.positive += 1,
                Sentiment::Negative => summary.negative += 1,
                Sentiment::Neutral => summary.neutral += 1,
            }
            *summary.by_source.entry(k.source.clone()).or_insert(0) += 1;
        }

        if !keywords.is_empty() {
            let ratio = summary.positive as f64 / keywords.len() as f64 * 100.0;
            summary.positive_ratio_percent = ratio.round() as u32;
        }
        summary
    }
}

/// First `limit` keywords weighted against the maximum frequency among them.
pub fn weighted_slice(keywords: &[KeywordEntry], limit: usize) -> Vec<WeightedKeyword> {
    let slice = &keywords[..keywords.len().min(limit)];
    let max = slice.iter().map(|k| k.frequency).max().unwrap_or(0);
    slice
        .iter()
        .map(|k| WeightedKeyword {
            word: k.word.clone(),
            frequency: k.frequency,
            weight: if max == 0 {
                0.0
            } else {
                f64::from(k.frequency) / f64::from(max)
            },
        })
        .collect()
}

pub fn word_cloud(keywords: &[KeywordEntry]) -> Vec<WeightedKeyword> {
    weighted_slice(keywords, WORD_CLOUD_SIZE)
}

pub fn bar_chart(keywords: &[KeywordEntry]) -> Vec<WeightedKeyword> {
    weighted_slice(keywords, BAR_CHART_SIZE)
}

/// Everything written to an export file.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub keyword: String,
    pub total_results: u64,
    pub keywords: Vec<KeywordEntry>,
    pub timestamp: String,
    pub is_demo: bool,
    pub summary: KeywordSummary,
}

impl ExportDocument {
    pub fn new(result: &AnalysisResult) -> Self {
        Self {
            keyword: result.query.clone(),
            total_results: result.total,
            keywords: result.keywords.clone(),
            timestamp: Utc::now().to_rfc3339(),
            is_demo: result.is_demo,
            summary: KeywordSummary::from_keywords(&result.keywords),
        }
    }
}

pub fn export_file_name(query: &str, date: NaiveDate) -> String {
    format!("keyword_analysis_{}_{}.json", query, date.format("%Y-%m-%d"))
}

/// Writes the result as indented JSON into `dir` and returns the file path.
pub fn write_export(dir: &Path, result: &AnalysisResult) -> Result<PathBuf> {
    let document = ExportDocument::new(result);
    let path = dir.join(export_file_name(&result.query, Utc::now().date_naive()));
    let json = serde_json::to_string_pretty(&document)?;
    std::fs::write(&path, json)?;
    Ok(path)
}
